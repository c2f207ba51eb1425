// Bot configuration: `<repo>/.cadence.toml`.
//
// Missing file or unparseable contents fall back to defaults; an explicit
// `load_from` surfaces the typed error so the CLI can report a path the
// user asked for.

use std::path::Path;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::schedule::{self, DayFilter, Trigger};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// One `[[schedule]]` entry. The time is kept as text (`"14:30"` or
/// `"14:30:00"`) for config ergonomics and parsed on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub day: DayFilter,
    pub at: String,
}

impl ScheduleEntry {
    fn trigger(&self) -> Option<Trigger> {
        let time = NaiveTime::parse_from_str(&self.at, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&self.at, "%H:%M:%S"))
            .ok()?;
        Some(Trigger::new(self.day, time))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BotConfig {
    /// Push after each commit.
    pub push: bool,
    /// Remote the repository is expected to push to (diagnostics only; the
    /// push itself relies on the repository's upstream configuration).
    pub remote: String,
    /// Append log lines to this file in addition to the console.
    pub log_file: Option<std::path::PathBuf>,
    /// Fixed generator seed for reproducible runs.
    pub seed: Option<u64>,
    pub schedule: Vec<ScheduleEntry>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            push: true,
            remote: "origin".to_string(),
            log_file: None,
            seed: None,
            schedule: vec![
                ScheduleEntry { day: DayFilter::Daily, at: "14:30".to_string() },
                ScheduleEntry { day: DayFilter::Weekdays, at: "10:00".to_string() },
            ],
        }
    }
}

impl BotConfig {
    pub const FILE_NAME: &'static str = ".cadence.toml";

    /// Load from `<repo_root>/.cadence.toml`. Returns defaults if the file
    /// doesn't exist or can't be parsed.
    pub fn load(repo_root: &Path) -> Self {
        Self::load_from(&repo_root.join(Self::FILE_NAME)).unwrap_or_default()
    }

    /// Load from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save to a specific path (creates parent directories).
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        Ok(std::fs::write(path, contents)?)
    }

    /// Parsed triggers. Entries with unparseable times are dropped with a
    /// warning; an empty or fully-invalid schedule falls back to the
    /// defaults so the watch loop always has something to fire.
    pub fn triggers(&self) -> Vec<Trigger> {
        let triggers: Vec<Trigger> = self
            .schedule
            .iter()
            .filter_map(|entry| {
                let trigger = entry.trigger();
                if trigger.is_none() {
                    warn!(at = %entry.at, "ignoring schedule entry with invalid time");
                }
                trigger
            })
            .collect();

        if triggers.is_empty() {
            schedule::default_triggers()
        } else {
            triggers
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn defaults_mirror_the_stock_schedule() {
        let config = BotConfig::default();
        assert!(config.push);
        assert_eq!(config.remote, "origin");
        assert_eq!(config.triggers(), schedule::default_triggers());
    }

    #[test]
    fn load_missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(BotConfig::load(dir.path()), BotConfig::default());
    }

    #[test]
    fn load_malformed_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(BotConfig::FILE_NAME), "push = [broken").unwrap();
        assert_eq!(BotConfig::load(dir.path()), BotConfig::default());
    }

    #[test]
    fn load_from_surfaces_parse_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "push = [broken").unwrap();
        assert!(matches!(BotConfig::load_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn parses_a_full_config() {
        let config: BotConfig = toml::from_str(
            r#"
            push = false
            remote = "backup"
            log_file = "cadence.log"
            seed = 42

            [[schedule]]
            day = "daily"
            at = "09:15"

            [[schedule]]
            day = "weekdays"
            at = "18:00:30"
            "#,
        )
        .unwrap();

        assert!(!config.push);
        assert_eq!(config.remote, "backup");
        assert_eq!(config.seed, Some(42));

        let triggers = config.triggers();
        assert_eq!(triggers.len(), 2);
        assert_eq!(triggers[0].at, NaiveTime::from_hms_opt(9, 15, 0).unwrap());
        assert_eq!(triggers[1].at, NaiveTime::from_hms_opt(18, 0, 30).unwrap());
    }

    #[test]
    fn invalid_times_are_dropped() {
        let config: BotConfig = toml::from_str(
            r#"
            [[schedule]]
            day = "daily"
            at = "25:99"

            [[schedule]]
            day = "daily"
            at = "08:00"
            "#,
        )
        .unwrap();

        let triggers = config.triggers();
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].at, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    }

    #[test]
    fn fully_invalid_schedule_falls_back_to_defaults() {
        let config: BotConfig = toml::from_str(
            r#"
            [[schedule]]
            day = "daily"
            at = "nope"
            "#,
        )
        .unwrap();
        assert_eq!(config.triggers(), schedule::default_triggers());
    }

    #[test]
    fn save_and_reload_roundtrips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = BotConfig::default();
        config.push = false;
        config.seed = Some(9);
        config.save_to(&path).unwrap();

        assert_eq!(BotConfig::load_from(&path).unwrap(), config);
    }
}
