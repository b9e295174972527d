//! Configuration system
//!
//! Settings structs implement [`Config`] to get TOML/RON loading and saving,
//! selected by file extension.

use std::path::Path;

pub use serde::{Serialize, Deserialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        match Format::of(path)? {
            Format::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Format::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match Format::of(path)? {
            Format::Toml => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Load from `path`, falling back to defaults on any fault.
    ///
    /// A missing or broken config file never stops the game; the fault is
    /// logged and the defaults are used instead.
    fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No configuration at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring configuration {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Toml,
    Ron,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Sample {
        name: String,
        rate: u32,
    }

    impl Default for Sample {
        fn default() -> Self {
            Self { name: "default".to_string(), rate: 50 }
        }
    }

    impl Config for Sample {}

    fn scratch(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("arcade_engine_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_round_trip_toml_and_ron() {
        let sample = Sample { name: "tuned".to_string(), rate: 60 };
        for file in ["sample.toml", "sample.ron"] {
            let path = scratch(file);
            sample.save_to_file(&path).unwrap();
            assert_eq!(Sample::load_from_file(&path).unwrap(), sample);
            std::fs::remove_file(&path).unwrap();
        }
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = scratch("partial.toml");
        std::fs::write(&path, "rate = 25\n").unwrap();
        let loaded = Sample::load_from_file(&path).unwrap();
        assert_eq!(loaded.rate, 25);
        assert_eq!(loaded.name, "default");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Sample::load_from_file(scratch("sample.json")).unwrap_err();
        // The read fails first because the file does not exist
        assert!(matches!(err, ConfigError::Io(_)));

        let err = Sample::default().save_to_file(scratch("sample.json")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_or_default_on_missing_and_broken() {
        assert_eq!(Sample::load_or_default(scratch("missing.toml")), Sample::default());

        let path = scratch("broken.toml");
        std::fs::write(&path, "rate = \"fast\"\n").unwrap();
        assert_eq!(Sample::load_or_default(&path), Sample::default());
        std::fs::remove_file(&path).unwrap();
    }
}
