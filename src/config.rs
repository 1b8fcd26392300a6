//! Build-time site configuration.
//!
//! EmailJS identifiers are baked in at compile time from the environment of
//! the `trunk build` invocation; nothing is read at runtime.

use crate::error::PortfolioError;
use crate::perf::SamplerThresholds;

/// Placeholder shipped in `.env.example`; treated as "not configured".
const AUTO_REPLY_PLACEHOLDER: &str = "template_auto_reply_id";

const MONITOR_REVEAL_DELAY_MS: u64 = 3000;
const STATUS_RESET_MS: u64 = 5000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub auto_reply_template_id: Option<String>,
    pub public_key: Option<String>,
}

/// Identifiers required for every send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailJsCredentials<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub public_key: &'a str,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl EmailJsConfig {
    pub fn from_build_env() -> Self {
        EmailJsConfig {
            service_id: non_empty(option_env!("EMAILJS_SERVICE_ID")),
            template_id: non_empty(option_env!("EMAILJS_TEMPLATE_ID")),
            auto_reply_template_id: non_empty(option_env!("EMAILJS_AUTO_REPLY_TEMPLATE_ID")),
            public_key: non_empty(option_env!("EMAILJS_PUBLIC_KEY")),
        }
    }

    pub fn credentials(&self) -> Result<EmailJsCredentials<'_>, PortfolioError> {
        let missing = |name: &str| PortfolioError::Config(format!("{} is not set", name));
        Ok(EmailJsCredentials {
            service_id: self
                .service_id
                .as_deref()
                .ok_or_else(|| missing("EMAILJS_SERVICE_ID"))?,
            template_id: self
                .template_id
                .as_deref()
                .ok_or_else(|| missing("EMAILJS_TEMPLATE_ID"))?,
            public_key: self
                .public_key
                .as_deref()
                .ok_or_else(|| missing("EMAILJS_PUBLIC_KEY"))?,
        })
    }

    /// Auto-reply template, unless unset or still the placeholder.
    pub fn auto_reply_template(&self) -> Option<&str> {
        self.auto_reply_template_id
            .as_deref()
            .filter(|id| *id != AUTO_REPLY_PLACEHOLDER)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorConfig {
    /// The overlay is a development aid and is compiled out of release builds.
    pub enabled: bool,
    pub reveal_delay_ms: u64,
    pub thresholds: SamplerThresholds,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            enabled: cfg!(debug_assertions),
            reveal_delay_ms: MONITOR_REVEAL_DELAY_MS,
            thresholds: SamplerThresholds::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub emailjs: EmailJsConfig,
    pub monitor: MonitorConfig,
    /// How long a submit status stays on screen before returning to idle.
    pub status_reset_ms: u64,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl SiteConfig {
    pub fn load() -> Self {
        SiteConfig {
            emailjs: EmailJsConfig::from_build_env(),
            monitor: MonitorConfig::default(),
            status_reset_ms: STATUS_RESET_MS,
            log_filter: option_env!("PORTFOLIO_LOG").unwrap_or("info").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> EmailJsConfig {
        EmailJsConfig {
            service_id: Some("service_abc".to_string()),
            template_id: Some("template_main".to_string()),
            auto_reply_template_id: Some("template_reply".to_string()),
            public_key: Some("pk_123".to_string()),
        }
    }

    #[test]
    fn test_credentials_require_all_ids() {
        let config = configured();
        let creds = config.credentials().expect("fully configured");
        assert_eq!(creds.service_id, "service_abc");
        assert_eq!(creds.template_id, "template_main");
        assert_eq!(creds.public_key, "pk_123");

        let missing_key = EmailJsConfig {
            public_key: None,
            ..configured()
        };
        let err = missing_key.credentials().unwrap_err();
        assert!(err.to_string().contains("EMAILJS_PUBLIC_KEY"), "got: {}", err);
    }

    #[test]
    fn test_auto_reply_skips_placeholder() {
        assert_eq!(configured().auto_reply_template(), Some("template_reply"));

        let placeholder = EmailJsConfig {
            auto_reply_template_id: Some(AUTO_REPLY_PLACEHOLDER.to_string()),
            ..configured()
        };
        assert_eq!(placeholder.auto_reply_template(), None);

        let unset = EmailJsConfig {
            auto_reply_template_id: None,
            ..configured()
        };
        assert_eq!(unset.auto_reply_template(), None);
    }

    #[test]
    fn test_blank_env_values_are_unset() {
        assert_eq!(non_empty(Some("  ")), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(" id ")), Some("id".to_string()));
    }

    #[test]
    fn test_monitor_defaults() {
        let monitor = MonitorConfig::default();
        assert_eq!(monitor.reveal_delay_ms, 3000);
        assert_eq!(monitor.thresholds.interval_ms, 1000.0);
        assert_eq!(monitor.enabled, cfg!(debug_assertions));
    }
}
