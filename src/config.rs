use crate::diagnostics::{LogLevel, DEFAULT_LOG_LEVEL};
use crate::motion::{NAV_SCROLLED_OFFSET_PX, PROGRESS_SPRING_DAMPING, PROGRESS_SPRING_STIFFNESS};
use crate::section::ACTIVE_SECTION_OFFSET_PX;
use crate::visibility::{SECTION_THRESHOLD, WIDGET_THRESHOLD};

const DEFAULT_SENT_WINDOW_MS: u64 = 3_000;
const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_RELAY_SERVICE_ID: &str = "service_cq2xj9n";
const DEFAULT_RELAY_TEMPLATE_ID: &str = "template_i6mj2en";
const DEFAULT_RELAY_PUBLIC_KEY: &str = "yZmHbk0g_BF4VD-Uw";

const ACTIVE_OFFSET_PX_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const SPRING_STIFFNESS_BOUNDS: (f64, f64) = (1.0, 1_000.0);
const SPRING_DAMPING_BOUNDS: (f64, f64) = (1.0, 200.0);
const NAV_SCROLLED_OFFSET_PX_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const SENT_WINDOW_MS_BOUNDS: (u64, u64) = (500, 60_000);

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub active_offset_px: f64,
    pub section_threshold: f64,
    pub widget_threshold: f64,
    pub spring_stiffness: f64,
    pub spring_damping: f64,
    pub nav_scrolled_offset_px: f64,
    pub sent_window_ms: u64,
    pub log_level: LogLevel,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            active_offset_px: ACTIVE_SECTION_OFFSET_PX,
            section_threshold: SECTION_THRESHOLD,
            widget_threshold: WIDGET_THRESHOLD,
            spring_stiffness: PROGRESS_SPRING_STIFFNESS,
            spring_damping: PROGRESS_SPRING_DAMPING,
            nav_scrolled_offset_px: NAV_SCROLLED_OFFSET_PX,
            sent_window_ms: DEFAULT_SENT_WINDOW_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl EngineConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            active_offset_px: parse_f64_with_bounds(
                lookup("PORTFOLIO_ACTIVE_OFFSET_PX"),
                defaults.active_offset_px,
                ACTIVE_OFFSET_PX_BOUNDS,
            ),
            section_threshold: parse_f64_with_bounds(
                lookup("PORTFOLIO_SECTION_THRESHOLD"),
                defaults.section_threshold,
                THRESHOLD_BOUNDS,
            ),
            widget_threshold: parse_f64_with_bounds(
                lookup("PORTFOLIO_WIDGET_THRESHOLD"),
                defaults.widget_threshold,
                THRESHOLD_BOUNDS,
            ),
            spring_stiffness: parse_f64_with_bounds(
                lookup("PORTFOLIO_SPRING_STIFFNESS"),
                defaults.spring_stiffness,
                SPRING_STIFFNESS_BOUNDS,
            ),
            spring_damping: parse_f64_with_bounds(
                lookup("PORTFOLIO_SPRING_DAMPING"),
                defaults.spring_damping,
                SPRING_DAMPING_BOUNDS,
            ),
            nav_scrolled_offset_px: parse_f64_with_bounds(
                lookup("PORTFOLIO_NAV_SCROLLED_OFFSET_PX"),
                defaults.nav_scrolled_offset_px,
                NAV_SCROLLED_OFFSET_PX_BOUNDS,
            ),
            sent_window_ms: parse_u64_with_bounds(
                lookup("PORTFOLIO_SENT_WINDOW_MS"),
                defaults.sent_window_ms,
                SENT_WINDOW_MS_BOUNDS,
            ),
            log_level: parse_log_level(lookup("PORTFOLIO_LOG_LEVEL"), defaults.log_level),
        }
    }

    /// Reads `PORTFOLIO_*` variables captured when the bundle was built.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|name| {
            let value = match name {
                "PORTFOLIO_ACTIVE_OFFSET_PX" => option_env!("PORTFOLIO_ACTIVE_OFFSET_PX"),
                "PORTFOLIO_SECTION_THRESHOLD" => option_env!("PORTFOLIO_SECTION_THRESHOLD"),
                "PORTFOLIO_WIDGET_THRESHOLD" => option_env!("PORTFOLIO_WIDGET_THRESHOLD"),
                "PORTFOLIO_SPRING_STIFFNESS" => option_env!("PORTFOLIO_SPRING_STIFFNESS"),
                "PORTFOLIO_SPRING_DAMPING" => option_env!("PORTFOLIO_SPRING_DAMPING"),
                "PORTFOLIO_NAV_SCROLLED_OFFSET_PX" => option_env!("PORTFOLIO_NAV_SCROLLED_OFFSET_PX"),
                "PORTFOLIO_SENT_WINDOW_MS" => option_env!("PORTFOLIO_SENT_WINDOW_MS"),
                "PORTFOLIO_LOG_LEVEL" => option_env!("PORTFOLIO_LOG_LEVEL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            service_id: DEFAULT_RELAY_SERVICE_ID.to_string(),
            template_id: DEFAULT_RELAY_TEMPLATE_ID.to_string(),
            public_key: DEFAULT_RELAY_PUBLIC_KEY.to_string(),
        }
    }
}

impl RelayConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            endpoint: parse_non_empty_string(lookup("PORTFOLIO_RELAY_ENDPOINT"))
                .filter(|value| value.starts_with("https://") || value.starts_with("http://"))
                .unwrap_or(defaults.endpoint),
            service_id: parse_non_empty_string(lookup("PORTFOLIO_RELAY_SERVICE_ID"))
                .unwrap_or(defaults.service_id),
            template_id: parse_non_empty_string(lookup("PORTFOLIO_RELAY_TEMPLATE_ID"))
                .unwrap_or(defaults.template_id),
            public_key: parse_non_empty_string(lookup("PORTFOLIO_RELAY_PUBLIC_KEY"))
                .unwrap_or(defaults.public_key),
        }
    }

    pub fn from_build_env() -> Self {
        Self::from_lookup(|name| {
            let value = match name {
                "PORTFOLIO_RELAY_ENDPOINT" => option_env!("PORTFOLIO_RELAY_ENDPOINT"),
                "PORTFOLIO_RELAY_SERVICE_ID" => option_env!("PORTFOLIO_RELAY_SERVICE_ID"),
                "PORTFOLIO_RELAY_TEMPLATE_ID" => option_env!("PORTFOLIO_RELAY_TEMPLATE_ID"),
                "PORTFOLIO_RELAY_PUBLIC_KEY" => option_env!("PORTFOLIO_RELAY_PUBLIC_KEY"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }
}

pub fn parse_f64_with_bounds(raw: Option<String>, default: f64, bounds: (f64, f64)) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

pub fn parse_u64_with_bounds(raw: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

pub fn parse_non_empty_string(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn parse_log_level(raw: Option<String>, default: LogLevel) -> LogLevel {
    raw.as_deref()
        .and_then(LogLevel::from_str)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| values.get(name).cloned()
    }

    #[test]
    fn empty_lookup_yields_defaults() {
        let config = EngineConfig::from_lookup(|_| None);

        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.active_offset_px, 120.0);
        assert_eq!(config.sent_window_ms, 3_000);
    }

    #[test]
    fn valid_overrides_are_applied() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("PORTFOLIO_ACTIVE_OFFSET_PX", " 96 "),
            ("PORTFOLIO_WIDGET_THRESHOLD", "0.5"),
            ("PORTFOLIO_LOG_LEVEL", "debug"),
        ]));

        assert_eq!(config.active_offset_px, 96.0);
        assert_eq!(config.widget_threshold, 0.5);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.section_threshold, SECTION_THRESHOLD);
    }

    #[test]
    fn out_of_bounds_and_garbage_fall_back() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("PORTFOLIO_SECTION_THRESHOLD", "1.5"),
            ("PORTFOLIO_SENT_WINDOW_MS", "10"),
            ("PORTFOLIO_SPRING_DAMPING", "NaN"),
            ("PORTFOLIO_LOG_LEVEL", "verbose"),
        ]));

        assert_eq!(config.section_threshold, SECTION_THRESHOLD);
        assert_eq!(config.sent_window_ms, DEFAULT_SENT_WINDOW_MS);
        assert_eq!(config.spring_damping, PROGRESS_SPRING_DAMPING);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn relay_identifiers_can_be_overridden() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            ("PORTFOLIO_RELAY_SERVICE_ID", "service_test"),
            ("PORTFOLIO_RELAY_PUBLIC_KEY", "   "),
            ("PORTFOLIO_RELAY_ENDPOINT", "ftp://relay.invalid"),
        ]));

        assert_eq!(config.service_id, "service_test");
        assert_eq!(config.public_key, DEFAULT_RELAY_PUBLIC_KEY);
        assert_eq!(config.endpoint, DEFAULT_RELAY_ENDPOINT);
        assert_eq!(config.template_id, DEFAULT_RELAY_TEMPLATE_ID);
    }
}
