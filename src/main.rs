//! Translation audit tool - checks the shipped catalog before a release
//!
//! Usage:
//!   cargo run --bin i18n-audit             # Human-readable report
//!   cargo run --bin i18n-audit -- --json   # Single JSON document
//!
//! Optional environment variables:
//! - I18N_MODE (development | production, defaults to development)
//! - I18N_DEFAULT_LOCALE (defaults to en)
//! - I18N_STARTUP_DIAGNOSTICS (log the key status report at debug level)
//! - I18N_TOGGLE_DEBOUNCE_MS (defaults to 200)
//! - RUST_LOG

use anyhow::{bail, Context, Result};
use farm_i18n::audit::AuditSummary;
use farm_i18n::config::Config;
use farm_i18n::i18n::{strings, Catalog, KeyStatusReport};
use farm_i18n::toggle::{DebouncedToggle, LanguageState, LanguageToggle, TOOLTIP_KEY};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("farm_i18n=info".parse()?),
        )
        .init();

    let json = std::env::args().any(|arg| arg == "--json");
    let config = Config::from_env()?;
    info!(
        default_locale = %config.default_locale,
        policy = ?config.missing_key_policy,
        "Starting translation audit"
    );

    // Built directly (not through Catalog::global) so a parity failure is
    // reported instead of panicking.
    let catalog = Catalog::from_entries(strings::LOCALE_TABLES)
        .context("Translation tables failed to load")?;

    if config.startup_diagnostics {
        KeyStatusReport::recent_additions(&catalog).emit_diagnostics();
    }

    let summary = AuditSummary::run(&catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render_text());
    }

    if !summary.passed() {
        bail!("Translation audit failed");
    }

    // The toggle as a host would mount it under this configuration
    let state = LanguageState::from_config(&catalog, &config);
    state
        .try_translate(TOOLTIP_KEY)
        .context("Language toggle tooltip cannot be rendered")?;
    let debounced = DebouncedToggle::from_config(&state, &config);
    let rendered = LanguageToggle::new(&debounced).render();
    info!(
        label = rendered.label,
        tooltip = %rendered.tooltip,
        debounce_ms = debounced.window().as_millis() as u64,
        "Language toggle ready"
    );

    info!("Translation audit passed");
    Ok(())
}
