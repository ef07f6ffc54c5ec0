//! User configuration
//!
//! Read from `<config_dir>/kdm/config.toml` unless a path is given on the
//! command line. Every key is optional.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use kdm_core::{BoundsPreset, MAX_SURVIVORS, SlotIndex, StatBounds};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::ThemeChoice;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Too many survivor names: {count} given, at most {max} allowed", max = MAX_SURVIVORS)]
    TooManySurvivors { count: usize },

    #[error("Survivor name {} is blank", .index + 1)]
    EmptySurvivorName { index: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub theme: ThemeChoice,
    pub bounds: BoundsPreset,
    /// Tab labels; missing entries fall back to "Survivor N"
    pub survivors: Vec<String>,
}

impl Config {
    /// Parse and validate TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load an explicit config file; a missing file is an error
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load the default config file if there is one
    pub fn load_default() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn stat_bounds(&self) -> StatBounds {
        self.bounds.into()
    }

    /// One label per roster slot
    pub fn survivor_labels(&self) -> [String; MAX_SURVIVORS] {
        SlotIndex::ALL.map(|slot| {
            self.survivors
                .get(slot.get())
                .map(|name| name.trim().to_string())
                .unwrap_or_else(|| slot.label())
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.survivors.len() > MAX_SURVIVORS {
            return Err(ConfigError::TooManySurvivors {
                count: self.survivors.len(),
            });
        }
        if let Some(index) = self.survivors.iter().position(|name| name.trim().is_empty()) {
            return Err(ConfigError::EmptySurvivorName { index });
        }
        Ok(())
    }
}

/// `<config_dir>/kdm/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kdm").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.stat_bounds(), StatBounds::extended());
    }

    #[test]
    fn test_full_file() {
        let config = Config::from_toml_str(
            r#"
            theme = "light"
            bounds = "legacy"
            survivors = ["Allister", "Erza"]
            "#,
        )
        .unwrap();
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.stat_bounds(), StatBounds::legacy());
        assert_eq!(
            config.survivor_labels(),
            [
                "Allister".to_string(),
                "Erza".to_string(),
                "Survivor 3".to_string(),
                "Survivor 4".to_string()
            ]
        );
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_bad_preset_is_rejected() {
        assert!(Config::from_toml_str("bounds = \"huge\"").is_err());
    }

    #[test]
    fn test_too_many_survivors() {
        let err = Config::from_toml_str(r#"survivors = ["a", "b", "c", "d", "e"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::TooManySurvivors { count: 5 }));
    }

    #[test]
    fn test_blank_survivor_name() {
        let err = Config::from_toml_str(r#"survivors = ["a", "  "]"#).unwrap_err();
        assert_eq!(err.to_string(), "Survivor name 2 is blank");
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Path::new("/nonexistent/kdm/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
