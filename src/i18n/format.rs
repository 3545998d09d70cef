//! Locale-aware formatting of numbers, currency amounts and dates.
//!
//! English uses western three-digit grouping (`1,234,567`); Hindi uses the
//! Indian lakh/crore grouping (`12,34,567`), matching what `hi-IN` users
//! expect on ledgers and receipts.

use crate::i18n::Language;
use chrono::{Datelike, NaiveDate};

const HINDI_MONTHS: [&str; 12] = [
    "जनवरी",
    "फ़रवरी",
    "मार्च",
    "अप्रैल",
    "मई",
    "जून",
    "जुलाई",
    "अगस्त",
    "सितंबर",
    "अक्तूबर",
    "नवंबर",
    "दिसंबर",
];

/// Writing direction of a locale's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
}

impl TextDirection {
    /// Value of the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::LeftToRight => "ltr",
        }
    }
}

/// Latin and Devanagari are both written left to right.
pub fn text_direction(_locale: Language) -> TextDirection {
    TextDirection::LeftToRight
}

/// Group the digits of a non-negative integer string for `locale`.
fn group_digits(digits: &str, locale: Language) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(len - 3);
    let group = if locale == Language::HINDI { 2 } else { 3 };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(last_three);
    groups.join(",")
}

/// Format an integer with the locale's digit grouping.
pub fn format_number(value: i64, locale: Language) -> String {
    let grouped = group_digits(&value.unsigned_abs().to_string(), locale);
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency {
        "INR" => Some("₹"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        _ => None,
    }
}

/// Format an amount with two decimals and the currency symbol.
///
/// Unknown currency codes are written as a prefix (`GBP 1,234.50`).
pub fn format_currency(amount: f64, locale: Language, currency: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_digits(&(cents / 100).to_string(), locale);
    let number = format!("{}.{:02}", whole, cents % 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    match currency_symbol(currency) {
        Some(symbol) => format!("{}{}{}", sign, symbol, number),
        None => format!("{}{} {}", sign, currency, number),
    }
}

/// Long-form date: `October 18, 2026` in English, `18 अक्तूबर 2026` in Hindi.
pub fn format_date(date: NaiveDate, locale: Language) -> String {
    if locale == Language::HINDI {
        let month = HINDI_MONTHS[date.month0() as usize];
        format!("{} {} {}", date.day(), month, date.year())
    } else {
        date.format("%B %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Number Tests ====================

    #[test]
    fn test_format_number_small() {
        assert_eq!(format_number(0, Language::ENGLISH), "0");
        assert_eq!(format_number(999, Language::HINDI), "999");
    }

    #[test]
    fn test_format_number_english_grouping() {
        assert_eq!(format_number(1_234, Language::ENGLISH), "1,234");
        assert_eq!(format_number(1_234_567, Language::ENGLISH), "1,234,567");
    }

    #[test]
    fn test_format_number_indian_grouping() {
        assert_eq!(format_number(1_234, Language::HINDI), "1,234");
        assert_eq!(format_number(123_456, Language::HINDI), "1,23,456");
        assert_eq!(format_number(1_234_567, Language::HINDI), "12,34,567");
        assert_eq!(format_number(123_456_789, Language::HINDI), "12,34,56,789");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-1_500_000, Language::HINDI), "-15,00,000");
        assert_eq!(format_number(-1_500_000, Language::ENGLISH), "-1,500,000");
    }

    #[test]
    fn test_format_number_extremes() {
        assert_eq!(
            format_number(i64::MIN, Language::ENGLISH),
            "-9,223,372,036,854,775,808"
        );
    }

    // ==================== Currency Tests ====================

    #[test]
    fn test_format_currency_inr() {
        assert_eq!(format_currency(150_000.5, Language::HINDI, "INR"), "₹1,50,000.50");
        assert_eq!(format_currency(150_000.5, Language::ENGLISH, "INR"), "₹150,000.50");
    }

    #[test]
    fn test_format_currency_rounds_to_cents() {
        assert_eq!(format_currency(0.005, Language::ENGLISH, "USD"), "$0.01");
        assert_eq!(format_currency(12.344, Language::ENGLISH, "USD"), "$12.34");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-2500.0, Language::HINDI, "INR"), "-₹2,500.00");
    }

    #[test]
    fn test_format_currency_unknown_code() {
        assert_eq!(format_currency(1234.5, Language::ENGLISH, "GBP"), "GBP 1,234.50");
    }

    // ==================== Date Tests ====================

    #[test]
    fn test_format_date_english() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(format_date(date, Language::ENGLISH), "October 18, 2026");
    }

    #[test]
    fn test_format_date_hindi() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(format_date(date, Language::HINDI), "18 अक्तूबर 2026");
    }

    #[test]
    fn test_format_date_single_digit_day() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_date(date, Language::ENGLISH), "January 5, 2025");
        assert_eq!(format_date(date, Language::HINDI), "5 जनवरी 2025");
    }

    // ==================== Direction Tests ====================

    #[test]
    fn test_text_direction_is_ltr() {
        for language in Language::all() {
            assert_eq!(text_direction(language), TextDirection::LeftToRight);
            assert_eq!(text_direction(language).as_str(), "ltr");
        }
    }
}
