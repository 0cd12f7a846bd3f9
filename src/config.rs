//! Application configuration loaded from environment variables.
//!
//! All variables are optional:
//! - `POSPLUS_LANG` — UI language code (default `es-ES`)
//! - `POSPLUS_THEME` — color theme id (default `ocean`)
//! - `POSPLUS_MENU` — path to a JSON menu replacing the built-in one
//! - `POSPLUS_PERCENT_POLICY` — `clamp` (default) or `allow` for
//!   percentages above 100
//! - `POSPLUS_LOG_FILE` — file that receives log output

use std::path::PathBuf;

use crate::i18n::Language;
use crate::order::percent::PercentPolicy;
use crate::theme::Theme;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub order: OrderConfig,
    pub menu_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

/// Presentation settings handed to the TUI at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayConfig {
    pub language: Language,
    pub theme: Theme,
}

/// Settings for the order input boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderConfig {
    pub percent_policy: PercentPolicy,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`PosError::Config`](crate::PosError::Config) if a language,
/// theme, or percent policy value is not recognized.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let language = parse_var("POSPLUS_LANG")?.unwrap_or_default();
    let theme = parse_var("POSPLUS_THEME")?.unwrap_or_default();
    let percent_policy = parse_var("POSPLUS_PERCENT_POLICY")?.unwrap_or_default();

    Ok(AppConfig {
        display: DisplayConfig { language, theme },
        order: OrderConfig { percent_policy },
        menu_path: non_empty_var("POSPLUS_MENU").map(PathBuf::from),
        log_file: non_empty_var("POSPLUS_LOG_FILE").map(PathBuf::from),
    })
}

/// Parses a non-empty environment variable, naming it in the error.
fn parse_var<T>(name: &str) -> crate::Result<Option<T>>
where
    T: std::str::FromStr<Err = String>,
{
    non_empty_var(name)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| crate::PosError::Config(format!("{name}: {e}")))
        })
        .transpose()
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
