//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML. Every field has a
//! default so the kiosk runs without a config file.

use crate::kiosk::flow::DEFAULT_EMAIL_SUFFIX;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub kiosk: KioskConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Kiosk identity and ordering rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KioskConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_footer")]
    pub footer: String,
    /// Every accepted email must end with this.
    #[serde(default = "default_email_suffix")]
    pub email_suffix: String,
    #[serde(default)]
    pub bell_on_confirm: bool,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            footer: default_footer(),
            email_suffix: default_email_suffix(),
            bell_on_confirm: false,
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// strftime pattern for order times and the clock.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_title() -> String {
    "Borne de Commande".to_string()
}
fn default_footer() -> String {
    "© Copyright 2025 by Notre Dame du Roc".to_string()
}
fn default_email_suffix() -> String {
    DEFAULT_EMAIL_SUFFIX.to_string()
}
fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_tick_rate_ms() -> u64 {
    1000
}
fn default_log_dir() -> String {
    "~/.local/share/borne/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.kiosk.email_suffix, "@lycee-ndduroc.com");
        assert_eq!(cfg.kiosk.title, "Borne de Commande");
        assert!(!cfg.kiosk.bell_on_confirm);
        assert_eq!(cfg.ui.timestamp_format, "%H:%M:%S");
        assert_eq!(cfg.ui.tick_rate_ms, 1000);
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [kiosk]
            bell_on_confirm = true

            [logging]
            enabled = true
            level = "debug"
            "#,
        )
        .unwrap();
        assert!(cfg.kiosk.bell_on_confirm);
        assert_eq!(cfg.kiosk.footer, "© Copyright 2025 by Notre Dame du Roc");
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.log_dir, "~/.local/share/borne/logs");
        assert_eq!(cfg.ui.tick_rate_ms, 1000);
    }

    #[test]
    fn test_serializes_back_to_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("[kiosk]"));
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.kiosk.email_suffix, "@lycee-ndduroc.com");
    }
}
