//! Configuration management for keyhelp.
//!
//! Lookup order:
//! 1. explicit path (`--config`)
//! 2. `$KEYHELP_CONFIG`
//! 3. `<config dir>/keyhelp/config.toml`
//!
//! A missing default file means defaults. An explicitly named file must exist.

use crate::error::{KeyHelpError, Result};
use crate::render::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "KEYHELP_CONFIG";

/// File name under the per-user config directory
pub const CONFIG_FILE: &str = "keyhelp/config.toml";

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// text, json or jsonl
    #[serde(default)]
    pub format: OutputFormat,

    /// Order entries by location hint
    #[serde(default)]
    pub sort: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            sort: false,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load from an explicit path, the environment, or the user config dir.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from_path(Path::new(&path));
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            Some(path) => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Config::default())
            }
            None => Ok(Config::default()),
        }
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| KeyHelpError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| KeyHelpError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// `<config dir>/keyhelp/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.sort);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[output]
format = "jsonl"
sort = true
"#;
        let config = Config::parse(toml_str).unwrap();
        assert_eq!(config.output.format, OutputFormat::Jsonl);
        assert!(config.output.sort);
        // Defaults for missing sections
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Config::parse("[output]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[log]\nlevel = \"debug\"").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Config::load(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, KeyHelpError::ConfigRead { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output\nsort = ").unwrap();
        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, KeyHelpError::ConfigParse { .. }));
    }
}
