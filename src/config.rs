use crate::i18n::{Language, MissingKeyPolicy};
use crate::toggle::DEFAULT_DEBOUNCE;
use anyhow::{bail, Context, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Lookups
    pub missing_key_policy: MissingKeyPolicy,
    pub default_locale: Language,

    // Diagnostics
    pub startup_diagnostics: bool,

    // Toggle
    pub toggle_debounce: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // development (default) fails on missing keys, production shows the key
            missing_key_policy: parse_mode(
                &std::env::var("I18N_MODE").unwrap_or_else(|_| "development".to_string()),
            )?,
            default_locale: Language::from_code(
                &std::env::var("I18N_DEFAULT_LOCALE").unwrap_or_else(|_| "en".to_string()),
            )
            .context("I18N_DEFAULT_LOCALE is not a supported language")?,

            startup_diagnostics: std::env::var("I18N_STARTUP_DIAGNOSTICS")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),

            toggle_debounce: std::env::var("I18N_TOGGLE_DEBOUNCE_MS")
                .ok()
                .map(|v| v.parse::<u64>().context("I18N_TOGGLE_DEBOUNCE_MS must be an integer"))
                .transpose()?
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_DEBOUNCE),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            missing_key_policy: MissingKeyPolicy::Strict,
            default_locale: Language::canonical(),
            startup_diagnostics: false,
            toggle_debounce: DEFAULT_DEBOUNCE,
        }
    }
}

fn parse_mode(mode: &str) -> Result<MissingKeyPolicy> {
    match mode.trim().to_ascii_lowercase().as_str() {
        "development" | "dev" | "test" => Ok(MissingKeyPolicy::Strict),
        "production" | "prod" => Ok(MissingKeyPolicy::Fallback),
        other => bail!("I18N_MODE must be 'development' or 'production', got '{}'", other),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
