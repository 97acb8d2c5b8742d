//! TOML-based application configuration.
//!
//! Stores coaching defaults and display settings. Configuration lives at
//! `~/.config/coachkit/config.toml`; set `COACHKIT_ENV=dev` to use
//! `~/.config/coachkit-dev/` instead.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::coach::DEFAULT_HISTORY_LIMIT;
use crate::error::{ConfigError, Result};
use crate::profile::CommunicationStyle;

/// Returns `~/.config/coachkit[-dev]/` based on COACHKIT_ENV.
///
/// # Errors
///
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("COACHKIT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("coachkit-dev")
    } else {
        base_dir.join("coachkit")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Coaching defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachingConfig {
    /// Style applied to newly created profiles.
    #[serde(default)]
    pub communication_style: CommunicationStyle,
    /// Cap on retained interactions.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

/// Display settings for the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Offset applied to UTC before extracting the hour of day, so local
    /// mornings score as mornings.
    #[serde(default)]
    pub timezone_offset_hours: i32,
    /// Emit JSON instead of human-readable output by default.
    #[serde(default)]
    pub json: bool,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for CoachingConfig {
    fn default() -> Self {
        Self {
            communication_style: CommunicationStyle::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone_offset_hours: 0,
            json: false,
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/coachkit/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub coaching: CoachingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config cannot be parsed or the
    /// default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| {
                    ConfigError::LoadFailed { path, message: e.to_string() }
                })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a config value as string by dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "coaching.communication_style" => {
                Some(self.coaching.communication_style.name().to_string())
            }
            "coaching.history_limit" => Some(self.coaching.history_limit.to_string()),
            "display.timezone_offset_hours" => {
                Some(self.display.timezone_offset_hours.to_string())
            }
            "display.json" => Some(self.display.json.to_string()),
            _ => None,
        }
    }

    /// Set a config value by dotted key and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "coaching.communication_style" => {
                self.coaching.communication_style = CommunicationStyle::parse(value);
            }
            "coaching.history_limit" => {
                self.coaching.history_limit = value.parse().map_err(|_| {
                    ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("cannot parse '{value}' as a count"),
                    }
                })?;
            }
            "display.timezone_offset_hours" => {
                let offset: i32 = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("cannot parse '{value}' as hours"),
                })?;
                if !(-12..=14).contains(&offset) {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("{offset} is outside the -12..=14 offset range"),
                    }
                    .into());
                }
                self.display.timezone_offset_hours = offset;
            }
            "display.json" => {
                self.display.json = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("cannot parse '{value}' as a bool"),
                })?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string()).into()),
        }
        self.save()?;
        Ok(())
    }

    /// All known config keys, for the CLI listing.
    pub fn keys() -> &'static [&'static str] {
        &[
            "coaching.communication_style",
            "coaching.history_limit",
            "display.timezone_offset_hours",
            "display.json",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.coaching.communication_style, CommunicationStyle::Friendly);
        assert_eq!(cfg.coaching.history_limit, DEFAULT_HISTORY_LIMIT);
        assert_eq!(cfg.display.timezone_offset_hours, 0);
        assert!(!cfg.display.json);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut cfg = Config::default();
        cfg.coaching.communication_style = CommunicationStyle::Direct;
        cfg.display.timezone_offset_hours = 9;

        let serialized = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.coaching.communication_style, CommunicationStyle::Direct);
        assert_eq!(parsed.display.timezone_offset_hours, 9);
    }

    #[test]
    fn test_partial_toml_applies_defaults() {
        let parsed: Config = toml::from_str("[display]\njson = true\n").unwrap();
        assert!(parsed.display.json);
        assert_eq!(parsed.coaching.history_limit, DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn test_get_known_keys() {
        let cfg = Config::default();
        for key in Config::keys() {
            assert!(cfg.get(key).is_some(), "missing value for {key}");
        }
        assert!(cfg.get("coaching.nope").is_none());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut cfg = Config::default();
        assert!(cfg.set("coaching.history_limit", "many").is_err());
        assert!(cfg.set("display.timezone_offset_hours", "99").is_err());
        assert!(cfg.set("unknown.key", "1").is_err());
    }
}
