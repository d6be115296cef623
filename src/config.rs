//! Configuration file for the `sortify` command.
//!
//! Looked up at `$XDG_CONFIG_HOME/sortify/sortify.toml` unless an explicit
//! path is given. A missing file means defaults.

use crate::reorganizer::SortMode;
use serde::Deserialize;
use std::{env, fs, path::Path, path::PathBuf};
use thiserror::Error;

const CONFIG_NAMESPACE: &str = "sortify";
const CONFIG_FILENAME: &str = "sortify.toml";
const DEFAULT_PATTERN: &str = "**/*.js";

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SortifyConfig {
    /// Mode used when none is given on the command line
    #[serde(default)]
    pub mode: Option<SortMode>,
    /// Glob for directory mode, relative to the directory
    #[serde(default)]
    pub pattern: Option<String>,
    /// Ask for the mode interactively
    #[serde(default)]
    pub ask: bool,
}

impl SortifyConfig {
    pub fn mode_or_default(&self) -> SortMode {
        self.mode.unwrap_or_default()
    }

    pub fn pattern_or_default(&self) -> &str {
        self.pattern
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_PATTERN)
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLoadResult {
    pub config: SortifyConfig,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to determine configuration directory via XDG environment variables")]
    MissingConfigDir,
    #[error("failed to read config file at {path:?}: {source}")]
    Io {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config file at {path:?}: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
        path: PathBuf,
    },
}

/// Load the user configuration, if there is one.
pub fn load_config() -> Result<Option<ConfigLoadResult>, ConfigError> {
    let path = match resolve_config_path() {
        Ok(path) => path,
        Err(ConfigError::MissingConfigDir) => return Ok(None),
        Err(err) => return Err(err),
    };

    if !path.exists() {
        log::debug!("no config file at {}", path.display());
        return Ok(None);
    }

    load_config_from(&path).map(Some)
}

/// Load a configuration file that must exist.
pub fn load_config_from(path: &Path) -> Result<ConfigLoadResult, ConfigError> {
    let config_text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    let config = parse_config(&config_text).map_err(|source| ConfigError::Parse {
        source,
        path: path.to_path_buf(),
    })?;

    log::debug!("loaded config from {}", path.display());
    Ok(ConfigLoadResult {
        config,
        path: path.to_path_buf(),
    })
}

pub fn parse_config(text: &str) -> Result<SortifyConfig, toml::de::Error> {
    toml::from_str(text)
}

pub fn resolve_config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_home_dir()?
        .join(CONFIG_NAMESPACE)
        .join(CONFIG_FILENAME))
}

fn config_home_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(dir));
    }

    #[cfg(windows)]
    if let Some(dir) = env::var_os("APPDATA") {
        return Ok(PathBuf::from(dir));
    }

    if let Some(home) = env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".config"));
    }

    #[cfg(windows)]
    if let Some(profile) = env::var_os("USERPROFILE") {
        return Ok(PathBuf::from(profile).join("AppData").join("Roaming"));
    }

    Err(ConfigError::MissingConfigDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config("mode = \"group\"\npattern = \"src/**/*.ts\"\nask = true\n").unwrap();
        assert_eq!(config.mode, Some(SortMode::Group));
        assert_eq!(config.pattern_or_default(), "src/**/*.ts");
        assert!(config.ask);
    }

    #[test]
    fn test_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, SortifyConfig::default());
        assert_eq!(config.mode_or_default(), SortMode::Preserve);
        assert_eq!(config.pattern_or_default(), DEFAULT_PATTERN);
        assert!(!config.ask);
    }

    #[test]
    fn test_blank_pattern_falls_back() {
        let config = parse_config("pattern = \"  \"").unwrap();
        assert_eq!(config.pattern_or_default(), DEFAULT_PATTERN);
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(parse_config("mode = \"alphabetical\"").is_err());
        assert!(parse_config("colour = \"red\"").is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "mode = \"preserve\"").unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.path, path);
        assert_eq!(loaded.config.mode, Some(SortMode::Preserve));
    }

    #[test]
    fn test_load_config_errors_carry_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        match load_config_from(&missing) {
            Err(ConfigError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Io error, got {:?}", other),
        }

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "mode = ").unwrap();
        let err = load_config_from(&broken).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }
}
