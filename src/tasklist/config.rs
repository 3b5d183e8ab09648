use crate::clock::{SystemClock, DEFAULT_UTC_OFFSET_HOURS};
use crate::error::{Result, TasklistError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE: &str = "tasklist.json";

/// Settings for a session. Every field has a default, so an empty `{}` config
/// file (or none at all) reproduces the stock behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TasklistConfig {
    /// Backing JSON file, relative to the working directory unless absolute.
    #[serde(default = "default_file")]
    pub file: PathBuf,

    /// Hours east of UTC used to decide what "today" is.
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: i32,

    /// Colored priority and due tags.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_file() -> PathBuf {
    PathBuf::from(DEFAULT_FILE)
}

fn default_utc_offset() -> i32 {
    DEFAULT_UTC_OFFSET_HOURS
}

fn default_color() -> bool {
    true
}

impl Default for TasklistConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            utc_offset_hours: default_utc_offset(),
            color: default_color(),
        }
    }
}

impl TasklistConfig {
    /// `<user config dir>/tasklist/config.json`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "tasklist", "tasklist")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Load config from `path`, or return defaults if it does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(TasklistError::Io)?;
        let config: TasklistConfig = serde_json::from_str(&content)
            .map_err(|e| TasklistError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.clock().map(|_| ())
    }

    /// The clock for this config's offset.
    pub fn clock(&self) -> Result<SystemClock> {
        SystemClock::with_offset_hours(self.utc_offset_hours).ok_or_else(|| {
            TasklistError::Config(format!(
                "utc offset must be between -23 and 23 hours, got {}",
                self.utc_offset_hours
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = TasklistConfig::default();
        assert_eq!(config.file, PathBuf::from("tasklist.json"));
        assert_eq!(config.utc_offset_hours, 2);
        assert!(config.color);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = TasklistConfig::load(dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, TasklistConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"{"color": false}"#).unwrap();

        let config = TasklistConfig::load(&path).unwrap();
        assert!(!config.color);
        assert_eq!(config.utc_offset_hours, 2);
        assert_eq!(config.file, PathBuf::from("tasklist.json"));
    }

    #[test]
    fn test_rejects_out_of_range_offset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"{"utc_offset_hours": 30}"#).unwrap();

        assert!(matches!(
            TasklistConfig::load(&path),
            Err(TasklistError::Config(_))
        ));
    }

    #[test]
    fn test_huge_offset_is_a_config_error() {
        let config = TasklistConfig {
            utc_offset_hours: 1_000_000,
            ..TasklistConfig::default()
        };
        assert!(matches!(config.validate(), Err(TasklistError::Config(_))));
    }

    #[test]
    fn test_malformed_config_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "{").unwrap();

        match TasklistConfig::load(&path) {
            Err(TasklistError::Config(msg)) => assert!(msg.contains(CONFIG_FILENAME)),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = TasklistConfig {
            file: PathBuf::from("/tmp/todo.json"),
            utc_offset_hours: -5,
            color: false,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TasklistConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
