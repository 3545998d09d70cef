//! English/Hindi translation layer for the farm manager UI.
//!
//! - `i18n`: languages, the parity-checked translation catalog, audits and
//!   locale formatting
//! - `toggle`: the language toggle control and the context it reads from
//! - `audit`: aggregated release audit used by the `i18n-audit` tool
//! - `config`: environment configuration

pub mod audit;
pub mod config;
pub mod i18n;
pub mod toggle;
