//! Language toggle control and the language context it is composed with.
//!
//! The control owns no state. Everything it shows and does comes from a
//! `LanguageContext` handed to it at construction, so it can be rendered and
//! activated in isolation with any context implementation.

use crate::config::Config;
use crate::i18n::format::text_direction;
use crate::i18n::{Catalog, I18nError, Language, MissingKeyPolicy, TranslationMetrics};
use serde::Serialize;
use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Key whose translation is used as the toggle's tooltip.
pub const TOOLTIP_KEY: &str = "language";

/// Default window during which repeated activations are ignored.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

// ==================== Context ====================

/// Shared language state consumed by UI controls.
pub trait LanguageContext {
    /// The locale currently displayed.
    fn current_locale(&self) -> Language;

    /// Switch to the next locale. The context decides which one that is.
    fn toggle_locale(&self);

    /// Display string for `key` in the current locale.
    fn translate(&self, key: &str) -> String;
}

type Listener<'c> = Box<dyn Fn(Language) + 'c>;

/// Reference `LanguageContext`: current locale, catalog and change listeners.
///
/// Single-threaded by construction (`Cell`/`RefCell`).
pub struct LanguageState<'c> {
    catalog: &'c Catalog,
    current: Cell<Language>,
    policy: MissingKeyPolicy,
    listeners: RefCell<Vec<Listener<'c>>>,
}

impl<'c> LanguageState<'c> {
    pub fn new(catalog: &'c Catalog, initial: Language, policy: MissingKeyPolicy) -> Self {
        Self {
            catalog,
            current: Cell::new(initial),
            policy,
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// State starting at the configured locale under the configured policy.
    pub fn from_config(catalog: &'c Catalog, config: &Config) -> Self {
        Self::new(catalog, config.default_locale, config.missing_key_policy)
    }

    pub fn policy(&self) -> MissingKeyPolicy {
        self.policy
    }

    /// Register a callback invoked with the new locale after every change.
    ///
    /// Listeners must not register further listeners while being notified.
    pub fn on_change(&self, listener: impl Fn(Language) + 'c) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Select `locale` explicitly. Listeners only run if the locale changes.
    pub fn set_locale(&self, locale: Language) {
        if self.current.replace(locale) != locale {
            self.notify(locale);
        }
    }

    /// Translate under the active policy without panicking.
    pub fn try_translate(&self, key: &str) -> Result<Cow<'static, str>, I18nError> {
        self.catalog.translate(self.current.get(), key, self.policy)
    }

    fn notify(&self, locale: Language) {
        for listener in self.listeners.borrow().iter() {
            listener(locale);
        }
    }
}

impl LanguageContext for LanguageState<'_> {
    fn current_locale(&self) -> Language {
        self.current.get()
    }

    fn toggle_locale(&self) {
        let from = self.current.get();
        let to = from.toggled();
        self.current.set(to);
        TranslationMetrics::global().record_toggle();
        debug!(from = %from, to = %to, "Language toggled");
        self.notify(to);
    }

    /// # Panics
    /// Panics on a missing key under `MissingKeyPolicy::Strict`, so gaps
    /// surface during development instead of shipping.
    fn translate(&self, key: &str) -> String {
        match self.try_translate(key) {
            Ok(text) => text.into_owned(),
            Err(err) => panic!("{}", err),
        }
    }
}

impl fmt::Debug for LanguageState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageState")
            .field("current", &self.current.get())
            .field("policy", &self.policy)
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

// ==================== Debounce ====================

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Context wrapper that drops toggles arriving within `window` of the last
/// accepted one. Reads pass straight through.
pub struct DebouncedToggle<'a, C: LanguageContext + ?Sized, K: Clock = SystemClock> {
    inner: &'a C,
    clock: K,
    window: Duration,
    last_accepted: Cell<Option<Instant>>,
}

impl<'a, C: LanguageContext + ?Sized> DebouncedToggle<'a, C, SystemClock> {
    pub fn new(inner: &'a C, window: Duration) -> Self {
        Self::with_clock(inner, window, SystemClock)
    }

    /// Wrap `inner` with the configured debounce window.
    pub fn from_config(inner: &'a C, config: &Config) -> Self {
        Self::new(inner, config.toggle_debounce)
    }
}

impl<'a, C: LanguageContext + ?Sized, K: Clock> DebouncedToggle<'a, C, K> {
    pub fn with_clock(inner: &'a C, window: Duration, clock: K) -> Self {
        Self {
            inner,
            clock,
            window,
            last_accepted: Cell::new(None),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Forward the toggle unless one was accepted less than `window` ago.
    /// Returns whether the toggle was forwarded.
    pub fn try_toggle(&self) -> bool {
        let now = self.clock.now();
        if let Some(last) = self.last_accepted.get() {
            if now.saturating_duration_since(last) < self.window {
                debug!("Language toggle ignored (debounced)");
                return false;
            }
        }
        self.last_accepted.set(Some(now));
        self.inner.toggle_locale();
        true
    }
}

impl<C: LanguageContext + ?Sized, K: Clock> LanguageContext for DebouncedToggle<'_, C, K> {
    fn current_locale(&self) -> Language {
        self.inner.current_locale()
    }

    fn toggle_locale(&self) {
        self.try_toggle();
    }

    fn translate(&self, key: &str) -> String {
        self.inner.translate(key)
    }
}

// ==================== Control ====================

/// Icon drawn next to the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToggleIcon {
    Translate,
}

impl ToggleIcon {
    fn as_str(&self) -> &'static str {
        match self {
            ToggleIcon::Translate => "translate",
        }
    }
}

/// Screen corner the control is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    TopRight,
}

impl Placement {
    fn as_str(&self) -> &'static str {
        match self {
            Placement::TopRight => "top-right",
        }
    }
}

/// Output of one render of the toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedToggle {
    pub locale: Language,
    pub label: &'static str,
    pub tooltip: String,
    pub icon: ToggleIcon,
    pub placement: Placement,
}

impl RenderedToggle {
    /// Markup for a fixed-position overlay button.
    pub fn to_html(&self) -> String {
        let tooltip = escape_html(&self.tooltip);
        format!(
            concat!(
                r#"<div class="language-toggle" data-placement="{placement}">"#,
                r#"<button type="button" title="{tooltip}" aria-label="{tooltip}" lang="{lang}" dir="{dir}">"#,
                r#"<span class="icon" data-icon="{icon}" aria-hidden="true"></span>"#,
                r#"<span class="label">{label}</span>"#,
                "</button></div>"
            ),
            placement = self.placement.as_str(),
            tooltip = tooltip,
            lang = self.locale.code(),
            dir = text_direction(self.locale).as_str(),
            icon = self.icon.as_str(),
            label = escape_html(self.label),
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Button that shows the current language and switches it when activated.
pub struct LanguageToggle<'a, C: LanguageContext + ?Sized> {
    context: &'a C,
}

impl<'a, C: LanguageContext + ?Sized> LanguageToggle<'a, C> {
    pub fn new(context: &'a C) -> Self {
        Self { context }
    }

    /// Mount against an optional context, failing if none is supplied.
    pub fn try_mount(context: Option<&'a C>) -> Result<Self, I18nError> {
        context.map(Self::new).ok_or(I18nError::ContextUnavailable)
    }

    /// Mount against an optional context.
    ///
    /// # Panics
    /// Panics with `ContextUnavailable` when no context is supplied. Composing
    /// the control outside a context is a programming error.
    pub fn mount(context: Option<&'a C>) -> Self {
        match Self::try_mount(context) {
            Ok(toggle) => toggle,
            Err(err) => panic!("{}", err),
        }
    }

    /// Render from the context's current state. No side effects.
    pub fn render(&self) -> RenderedToggle {
        let locale = self.context.current_locale();
        RenderedToggle {
            locale,
            label: locale.short_label(),
            tooltip: self.context.translate(TOOLTIP_KEY),
            icon: ToggleIcon::Translate,
            placement: Placement::TopRight,
        }
    }

    /// Handle one user activation: exactly one toggle request.
    pub fn activate(&self) {
        debug!(locale = %self.context.current_locale(), "Language toggle activated");
        self.context.toggle_locale();
    }
}

impl<C: LanguageContext + ?Sized> fmt::Debug for LanguageToggle<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageToggle")
            .field("locale", &self.context.current_locale())
            .finish()
    }
}
