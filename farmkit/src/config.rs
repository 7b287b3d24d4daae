use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::Result;

/// Complete dashboard configuration.
///
/// Every section has defaults, so an empty file (or no file at all) yields a
/// working dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub refresh: RefreshConfig,
    pub farm: FarmConfig,
    pub export: ExportConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Seconds between weather / IoT regenerations
    pub interval_secs: u64,
    /// Delay before the assistant answers a chat message
    pub chat_reply_delay_ms: u64,
}

impl RefreshConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }

    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: 30,
            chat_reply_delay_ms: 1_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FarmConfig {
    pub farm_id: String,
    pub location: String,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            farm_id: "FARM_001".to_string(),
            location: "Chennai, Tamil Nadu, India".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub log_file: PathBuf,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: PathBuf::from("farm-dash.log"),
        }
    }
}

/// Load configuration from an optional file plus `FARM_DASH__*` environment
/// overrides (e.g. `FARM_DASH__REFRESH__INTERVAL_SECS=5`).
pub fn load_config(path: Option<&str>) -> Result<DashboardConfig> {
    build_config(path, Environment::with_prefix("FARM_DASH").separator("__"))
}

fn build_config(path: Option<&str>, env: Environment) -> Result<DashboardConfig> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(File::with_name(path));
    }

    let config = builder
        .add_source(env)
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();

        assert_eq!(config.refresh.interval(), Duration::from_secs(30));
        assert_eq!(config.refresh.chat_reply_delay(), Duration::from_secs(1));
        assert_eq!(config.farm.farm_id, "FARM_001");
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = load_config(None).unwrap();

        assert_eq!(config.refresh.interval_secs, 30);
        assert_eq!(config.export.directory, PathBuf::from("."));
    }

    #[test]
    fn test_load_partial_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "refresh:\n  interval_secs: 5\nfarm:\n  farm_id: FARM_042").unwrap();

        let config = load_config(file.path().to_str()).unwrap();

        assert_eq!(config.refresh.interval_secs, 5);
        // Untouched keys keep their defaults
        assert_eq!(config.refresh.chat_reply_delay_ms, 1_000);
        assert_eq!(config.farm.farm_id, "FARM_042");
        assert_eq!(config.farm.location, "Chennai, Tamil Nadu, India");
    }

    fn farm_env(vars: &[(&str, &str)]) -> Environment {
        let source: ::config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("FARM_DASH")
            .separator("__")
            .source(Some(source))
    }

    #[test]
    fn test_env_overrides_defaults() {
        let env = farm_env(&[
            ("FARM_DASH__REFRESH__INTERVAL_SECS", "7"),
            ("FARM_DASH__FARM__FARM_ID", "FARM_ENV"),
        ]);

        let config = build_config(None, env).unwrap();

        assert_eq!(config.refresh.interval_secs, 7);
        assert_eq!(config.farm.farm_id, "FARM_ENV");
        assert_eq!(config.refresh.chat_reply_delay_ms, 1_000);
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "refresh:\n  interval_secs: 5").unwrap();
        let env = farm_env(&[("FARM_DASH__REFRESH__INTERVAL_SECS", "12")]);

        let config = build_config(file.path().to_str(), env).unwrap();

        assert_eq!(config.refresh.interval_secs, 12);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let refresh = RefreshConfig {
            interval_secs: 0,
            chat_reply_delay_ms: 0,
        };

        assert_eq!(refresh.interval(), Duration::from_secs(1));
        assert_eq!(refresh.chat_reply_delay(), Duration::ZERO);
    }
}
