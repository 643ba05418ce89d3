//! Generator configuration
//!
//! Settings come from a TOML file and are then overridden by command-line
//! flags. The file is looked up in this order: an explicit `--config` path,
//! `./svcgen.toml`, then `<user config dir>/svcgen/config.toml`. When none
//! exists the defaults apply.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::generation::Interpolation;

/// Project-local configuration file name
pub const LOCAL_CONFIG_FILE: &str = "svcgen.toml";

/// Default formatter command run over the generated file
pub const DEFAULT_FORMATTER: &str = "mix format";

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Name of the generated module, e.g. `Bodh.Iot`.
    pub module_name: Option<String>,
    /// Path or URL of the service description.
    pub source: Option<String>,
    /// Template path; the embedded template is used when unset.
    pub template: Option<PathBuf>,
    pub output_dir: PathBuf,
    /// Keep only required structure members.
    pub only_required: bool,
    pub file_extension: String,
    /// Formatter command; empty disables formatting.
    pub formatter: String,
    pub interpolation: Interpolation,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            module_name: None,
            source: None,
            template: None,
            output_dir: PathBuf::from("."),
            only_required: false,
            file_extension: "ex".to_string(),
            formatter: DEFAULT_FORMATTER.to_string(),
            interpolation: Interpolation::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from `explicit`, or from the first default location that exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Self::load_first(&default_locations()),
        }
    }

    /// Load the first candidate that exists, or defaults when none does.
    pub fn load_first(candidates: &[PathBuf]) -> Result<Self, ConfigError> {
        match candidates.iter().find(|path| path.is_file()) {
            Some(path) => Self::from_file(path),
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Formatter command, or `None` when formatting is disabled.
    pub fn formatter_command(&self) -> Option<&str> {
        let command = self.formatter.trim();
        (!command.is_empty()).then_some(command)
    }
}

/// Config file locations searched when no explicit path is given
pub fn default_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("svcgen").join("config.toml"));
    }
    locations
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert!(!config.only_required);
        assert_eq!(config.file_extension, "ex");
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.formatter_command(), Some("mix format"));
        assert_eq!(config.interpolation, Interpolation::default());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = GeneratorConfig::from_toml(
            r#"
            module_name = "Bodh.Iot"
            only_required = true
            formatter = ""

            [interpolation]
            prefix = "${"
            suffix = "}"
            "#,
        )
        .unwrap();

        assert_eq!(config.module_name.as_deref(), Some("Bodh.Iot"));
        assert!(config.only_required);
        assert_eq!(config.formatter_command(), None);
        assert_eq!(config.interpolation.wrap("thing_name"), "${thing_name}");
        assert_eq!(config.file_extension, "ex");
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(GeneratorConfig::from_toml("only_required = \"yes\"").is_err());
    }

    #[test]
    fn test_load_first_existing_candidate() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        let present = dir.path().join("svcgen.toml");
        std::fs::write(&present, "file_extension = \"exs\"").unwrap();

        let config = GeneratorConfig::load_first(&[missing, present]).unwrap();
        assert_eq!(config.file_extension, "exs");
    }

    #[test]
    fn test_load_first_none_found() {
        let dir = TempDir::new().unwrap();
        let config = GeneratorConfig::load_first(&[dir.path().join("nope.toml")]).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = GeneratorConfig::load(Some(Path::new("/nonexistent/svcgen.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
