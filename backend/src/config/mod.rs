//! Configuration management for the HealthTrack backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: HT__)

use anyhow::Result;
use healthtrack_shared::{DEFAULT_ACTIVITY_MULTIPLIER, DEFAULT_HORIZON_WEEKS};
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub statistics: StatisticsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Calculation defaults and request limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsConfig {
    /// Multiplier applied when a request does not carry one
    pub activity_multiplier: f64,
    /// Goal horizon used when a request does not carry one
    pub default_horizon_weeks: i32,
    /// Longest window a trend or report request may cover
    pub max_window_days: i64,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            activity_multiplier: DEFAULT_ACTIVITY_MULTIPLIER,
            default_horizon_weeks: DEFAULT_HORIZON_WEEKS,
            max_window_days: 366,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            statistics: StatisticsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with HT__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., HT__STATISTICS__MAX_WINDOW_DAYS=90 sets statistics.max_window_days
            .add_source(config::Environment::with_prefix("HT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Problems that make the configuration unusable
    pub fn problems(&self) -> Vec<&'static str> {
        let mut problems = Vec::new();
        let stats = &self.statistics;

        if !(stats.activity_multiplier.is_finite() && stats.activity_multiplier > 0.0) {
            problems.push("statistics.activity_multiplier must be a positive number");
        }
        if stats.default_horizon_weeks <= 0 {
            problems.push("statistics.default_horizon_weeks must be at least 1");
        }
        if stats.max_window_days <= 0 {
            problems.push("statistics.max_window_days must be at least 1");
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.statistics.activity_multiplier, 1.4);
        assert_eq!(config.statistics.default_horizon_weeks, 4);
        assert_eq!(config.statistics.max_window_days, 366);
        assert!(config.problems().is_empty());
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }

    #[test]
    fn test_problems_detected() {
        let mut config = AppConfig::default();
        config.statistics.activity_multiplier = 0.0;
        config.statistics.default_horizon_weeks = 0;
        assert_eq!(config.problems().len(), 2);

        config.statistics.activity_multiplier = f64::NAN;
        config.statistics.default_horizon_weeks = 4;
        config.statistics.max_window_days = -1;
        assert_eq!(config.problems().len(), 2);
    }

    #[test]
    fn test_statistics_section_optional() {
        let config: AppConfig =
            serde_json::from_str(r#"{"server": {"host": "0.0.0.0", "port": 3000}}"#).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.statistics.max_window_days, 366);
    }
}
