use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use crate::models::ScoringRules;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    /// Artificial delay before match results are returned, in milliseconds
    #[serde(default)]
    pub simulated_delay_ms: u64,
}

impl MatchingSettings {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    /// Resolve a requested limit against the configured default and cap
    pub fn effective_limit(&self, requested: Option<u16>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit) as usize
    }
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            simulated_delay_ms: 0,
        }
    }
}

fn default_limit() -> u16 { 50 }
fn default_max_limit() -> u16 { 200 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    #[serde(default = "default_base")]
    pub base: u32,
    #[serde(default = "default_direction_bonus")]
    pub direction_bonus: u32,
    #[serde(default = "default_proximity_window")]
    pub proximity_window: u32,
    #[serde(default = "default_proximity_peak")]
    pub proximity_peak: u32,
    #[serde(default = "default_proximity_step")]
    pub proximity_step: u32,
    #[serde(default = "default_max_score")]
    pub max_score: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            direction_bonus: default_direction_bonus(),
            proximity_window: default_proximity_window(),
            proximity_peak: default_proximity_peak(),
            proximity_step: default_proximity_step(),
            max_score: default_max_score(),
        }
    }
}

impl From<&RulesConfig> for ScoringRules {
    fn from(config: &RulesConfig) -> Self {
        ScoringRules {
            base: config.base,
            direction_bonus: config.direction_bonus,
            proximity_window: config.proximity_window,
            proximity_peak: config.proximity_peak,
            proximity_step: config.proximity_step,
            max_score: config.max_score,
        }
    }
}

fn default_base() -> u32 { 50 }
fn default_direction_bonus() -> u32 { 30 }
fn default_proximity_window() -> u32 { 2 }
fn default_proximity_peak() -> u32 { 20 }
fn default_proximity_step() -> u32 { 10 }
fn default_max_score() -> u32 { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SWAP_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SWAP__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        settings.try_deserialize::<Settings>()?.validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize::<Settings>()?.validated()
    }

    pub fn scoring_rules(&self) -> ScoringRules {
        ScoringRules::from(&self.scoring.rules)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let rules = &self.scoring.rules;
        if rules.max_score > 100 {
            return Err(ConfigError::Message(format!(
                "scoring.rules.max_score must be at most 100, got {}",
                rules.max_score
            )));
        }
        for (name, value) in [
            ("base", rules.base),
            ("direction_bonus", rules.direction_bonus),
            ("proximity_peak", rules.proximity_peak),
        ] {
            if value > rules.max_score {
                return Err(ConfigError::Message(format!(
                    "scoring.rules.{} must not exceed max_score ({}), got {}",
                    name, rules.max_score, value
                )));
            }
        }
        if self.matching.max_limit == 0 || self.matching.default_limit == 0 {
            return Err(ConfigError::Message(
                "matching limits must be greater than zero".to_string(),
            ));
        }
        Ok(self)
    }
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)
}

fn environment() -> Environment {
    Environment::with_prefix("SWAP")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_match_scoring_defaults() {
        let rules = ScoringRules::from(&RulesConfig::default());
        assert_eq!(rules, ScoringRules::default());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "compact");
    }

    #[test]
    fn test_effective_limit() {
        let matching = MatchingSettings {
            default_limit: 10,
            max_limit: 20,
            simulated_delay_ms: 0,
        };
        assert_eq!(matching.effective_limit(None), 10);
        assert_eq!(matching.effective_limit(Some(5)), 5);
        assert_eq!(matching.effective_limit(Some(500)), 20);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("swap-algo-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[server]\nport = 9000\n\n[matching]\nsimulated_delay_ms = 250\n\n[scoring.rules]\nbase = 40\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.matching.simulated_delay(), Duration::from_millis(250));
        assert_eq!(settings.scoring_rules().base, 40);
        assert_eq!(settings.scoring_rules().direction_bonus, 30);
    }

    #[test]
    fn test_rejects_score_cap_above_100() {
        let path = std::env::temp_dir().join(format!("swap-algo-cap-{}.toml", std::process::id()));
        std::fs::write(&path, "[scoring.rules]\nmax_score = 150\n").unwrap();

        let result = Settings::load_from(&path);
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_rule_terms_above_score_cap() {
        let path = std::env::temp_dir().join(format!("swap-algo-base-{}.toml", std::process::id()));
        std::fs::write(&path, "[scoring.rules]\nbase = 4294967290\n").unwrap();

        let result = Settings::load_from(&path);
        std::fs::remove_file(&path).ok();

        let err = result.unwrap_err().to_string();
        assert!(err.contains("scoring.rules.base"), "{}", err);
    }
}
