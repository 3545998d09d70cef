//! Authored display strings for every supported locale.
//!
//! Both tables are edited together and must define exactly the same keys in
//! the same order. `Catalog::from_entries` rejects any drift at load time and
//! the tests below pin the ordering so a diff review shows gaps immediately.

/// English display strings (canonical).
pub const ENGLISH_ENTRIES: &[(&str, &str)] = &[
    // ==================== Shell ====================
    ("language", "Language"),
    ("farmManager", "Farm Manager"),
    ("welcome", "Welcome"),
    ("home", "Home"),
    ("dashboard", "Dashboard"),
    ("fields", "Fields"),
    ("money", "Money"),
    ("borrowings", "Borrowings"),
    ("settings", "Settings"),
    ("login", "Login"),
    ("signup", "Sign Up"),
    ("logout", "Logout"),
    // ==================== Common Actions ====================
    ("save", "Save"),
    ("cancel", "Cancel"),
    ("edit", "Edit"),
    ("delete", "Delete"),
    // ==================== Dashboard ====================
    ("farmDashboard", "Farm Dashboard"),
    ("dashboardDescription", "Overview of your farm's activity"),
    ("totalFields", "Total Fields"),
    ("totalYield", "Total Yield"),
    ("laborCost", "Labor Cost"),
    ("expenses", "Expenses"),
    ("totalExpenses", "Total Expenses"),
    ("totalRecords", "Total Records"),
    ("thisMonth", "This Month"),
    ("exportPdf", "Export PDF"),
    // ==================== Fields ====================
    ("fieldsManagement", "Fields Management"),
    ("fieldsManagementDescription", "Manage your fields and crops"),
    ("addNewField", "Add New Field"),
    ("fieldName", "Field Name"),
    ("location", "Location"),
    ("area", "Area"),
    ("plantingDate", "Planting Date"),
    ("expectedHarvestDate", "Expected Harvest Date"),
    // ==================== Money ====================
    ("moneyRecords", "Money Records"),
    ("moneyRecordsDescription", "Track income and expenses"),
    ("addNewRecord", "Add New Record"),
    ("recordType", "Record Type"),
    ("amount", "Amount"),
    ("description", "Description"),
    ("date", "Date"),
    ("totalIncome", "Total Income"),
    ("totalExpense", "Total Expense"),
    ("netBalance", "Net Balance"),
    // ==================== Borrowings ====================
    ("borrowingsManagement", "Borrowings Management"),
    ("borrowingsManagementDescription", "Track money borrowed and repaid"),
    ("addNewBorrowing", "Add New Borrowing"),
    ("lenderName", "Lender Name"),
    ("borrowingAmount", "Borrowing Amount"),
    ("interestRate", "Interest Rate"),
    ("borrowingDate", "Borrowing Date"),
    ("repaymentDate", "Repayment Date"),
    ("totalBorrowed", "Total Borrowed"),
    ("totalRepaid", "Total Repaid"),
    ("totalReturned", "Total Returned"),
    ("pendingReturns", "Pending Returns"),
    // ==================== Lot Numbers ====================
    ("lotNumbersManagement", "Lot Numbers Management"),
    ("lotNumbersManagementDescription", "Manage stored produce by lot"),
    ("lotNumberManagement", "Lot Number Management"),
    ("lotNumberManagementDescription", "Manage stored produce by lot"),
    ("addNewLotNumber", "Add New Lot Number"),
    ("lotNumberName", "Lot Number Name"),
    ("category", "Category"),
    ("packetCount", "Packet Count"),
    ("storageDate", "Storage Date"),
    ("notes", "Notes"),
    ("totalPackets", "Total Packets"),
    ("lotDetails", "Lot Details"),
    ("lotInformation", "Lot Information"),
    ("lotHistory", "Lot History"),
    ("lotStatistics", "Lot Statistics"),
    ("storageDetails", "Storage Details"),
    ("totalLots", "Total Lots"),
    ("searchLotNumber", "Search Lot Number"),
    // ==================== Transportation ====================
    ("transportationManagement", "Transportation Management"),
    ("transportationManagementDescription", "Record produce transported from storage"),
    ("addTransportation", "Add Transportation"),
    ("transportDate", "Transport Date"),
    ("lotNumber", "Lot Number"),
    ("transportationRecords", "Transportation Records"),
    // ==================== Labour ====================
    ("labourManagement", "Labour Management"),
    ("labourManagementDescription", "Manage labour groups, attendance and payments"),
    ("manageLabourGroups", "Manage Labour Groups"),
    ("manageLabourers", "Manage Labourers"),
    ("labourGroups", "Labour Groups"),
    ("labourGroupDetails", "Labour Group Details"),
    ("labourers", "Labourers"),
    ("labourerDetails", "Labourer Details"),
    ("payments", "Payments"),
    ("paymentHistory", "Payment History"),
    ("attendanceRecord", "Attendance Record"),
    ("totalPayments", "Total Payments"),
    ("activeGroups", "Active Groups"),
    ("totalLabourers", "Total Labourers"),
];

/// Hindi display strings.
pub const HINDI_ENTRIES: &[(&str, &str)] = &[
    // ==================== Shell ====================
    ("language", "भाषा"),
    ("farmManager", "फार्म प्रबंधक"),
    ("welcome", "स्वागत है"),
    ("home", "होम"),
    ("dashboard", "डैशबोर्ड"),
    ("fields", "खेत"),
    ("money", "पैसा"),
    ("borrowings", "उधार"),
    ("settings", "सेटिंग्स"),
    ("login", "लॉगिन"),
    ("signup", "साइन अप"),
    ("logout", "लॉगआउट"),
    // ==================== Common Actions ====================
    ("save", "सहेजें"),
    ("cancel", "रद्द करें"),
    ("edit", "संपादित करें"),
    ("delete", "हटाएं"),
    // ==================== Dashboard ====================
    ("farmDashboard", "फार्म डैशबोर्ड"),
    ("dashboardDescription", "आपके फार्म की गतिविधि का सारांश"),
    ("totalFields", "कुल खेत"),
    ("totalYield", "कुल उपज"),
    ("laborCost", "मजदूरी लागत"),
    ("expenses", "खर्च"),
    ("totalExpenses", "कुल खर्च"),
    ("totalRecords", "कुल रिकॉर्ड"),
    ("thisMonth", "इस महीने"),
    ("exportPdf", "PDF निर्यात करें"),
    // ==================== Fields ====================
    ("fieldsManagement", "खेत प्रबंधन"),
    ("fieldsManagementDescription", "अपने खेतों और फसलों का प्रबंधन करें"),
    ("addNewField", "नया खेत जोड़ें"),
    ("fieldName", "खेत का नाम"),
    ("location", "स्थान"),
    ("area", "क्षेत्रफल"),
    ("plantingDate", "बुवाई की तारीख"),
    ("expectedHarvestDate", "अपेक्षित कटाई की तारीख"),
    // ==================== Money ====================
    ("moneyRecords", "पैसे का रिकॉर्ड"),
    ("moneyRecordsDescription", "आय और खर्च का हिसाब रखें"),
    ("addNewRecord", "नया रिकॉर्ड जोड़ें"),
    ("recordType", "रिकॉर्ड का प्रकार"),
    ("amount", "राशि"),
    ("description", "विवरण"),
    ("date", "तारीख"),
    ("totalIncome", "कुल आय"),
    ("totalExpense", "कुल व्यय"),
    ("netBalance", "शुद्ध शेष"),
    // ==================== Borrowings ====================
    ("borrowingsManagement", "उधार प्रबंधन"),
    ("borrowingsManagementDescription", "लिया गया और चुकाया गया उधार देखें"),
    ("addNewBorrowing", "नया उधार जोड़ें"),
    ("lenderName", "उधारदाता का नाम"),
    ("borrowingAmount", "उधार की राशि"),
    ("interestRate", "ब्याज दर"),
    ("borrowingDate", "उधार की तारीख"),
    ("repaymentDate", "चुकौती की तारीख"),
    ("totalBorrowed", "कुल उधार"),
    ("totalRepaid", "कुल चुकाया गया"),
    ("totalReturned", "कुल लौटाया गया"),
    ("pendingReturns", "लंबित वापसी"),
    // ==================== Lot Numbers ====================
    ("lotNumbersManagement", "लॉट नंबर प्रबंधन"),
    ("lotNumbersManagementDescription", "भंडारित उपज का लॉट के अनुसार प्रबंधन करें"),
    ("lotNumberManagement", "लॉट नंबर प्रबंधन"),
    ("lotNumberManagementDescription", "भंडारित उपज का लॉट के अनुसार प्रबंधन करें"),
    ("addNewLotNumber", "नया लॉट नंबर जोड़ें"),
    ("lotNumberName", "लॉट नंबर का नाम"),
    ("category", "श्रेणी"),
    ("packetCount", "पैकेट की संख्या"),
    ("storageDate", "भंडारण की तारीख"),
    ("notes", "टिप्पणियाँ"),
    ("totalPackets", "कुल पैकेट"),
    ("lotDetails", "लॉट विवरण"),
    ("lotInformation", "लॉट जानकारी"),
    ("lotHistory", "लॉट इतिहास"),
    ("lotStatistics", "लॉट आँकड़े"),
    ("storageDetails", "भंडारण विवरण"),
    ("totalLots", "कुल लॉट"),
    ("searchLotNumber", "लॉट नंबर खोजें"),
    // ==================== Transportation ====================
    ("transportationManagement", "परिवहन प्रबंधन"),
    ("transportationManagementDescription", "भंडार से भेजी गई उपज दर्ज करें"),
    ("addTransportation", "परिवहन जोड़ें"),
    ("transportDate", "परिवहन की तारीख"),
    ("lotNumber", "लॉट नंबर"),
    ("transportationRecords", "परिवहन रिकॉर्ड"),
    // ==================== Labour ====================
    ("labourManagement", "मजदूर प्रबंधन"),
    ("labourManagementDescription", "मजदूर समूह, हाजिरी और भुगतान का प्रबंधन करें"),
    ("manageLabourGroups", "मजदूर समूह प्रबंधित करें"),
    ("manageLabourers", "मजदूर प्रबंधित करें"),
    ("labourGroups", "मजदूर समूह"),
    ("labourGroupDetails", "मजदूर समूह विवरण"),
    ("labourers", "मजदूर"),
    ("labourerDetails", "मजदूर विवरण"),
    ("payments", "भुगतान"),
    ("paymentHistory", "भुगतान इतिहास"),
    ("attendanceRecord", "हाजिरी रिकॉर्ड"),
    ("totalPayments", "कुल भुगतान"),
    ("activeGroups", "सक्रिय समूह"),
    ("totalLabourers", "कुल मजदूर"),
];

/// Authored tables keyed by locale code, in registry order.
pub const LOCALE_TABLES: &[(&str, &[(&str, &str)])] =
    &[("en", ENGLISH_ENTRIES), ("hi", HINDI_ENTRIES)];
