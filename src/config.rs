//! Site configuration.
//!
//! Loads `config.toml` from the site root. The file is optional and
//! sparse: defaults cover everything, and a config only needs the values
//! it overrides. Unknown keys are rejected to catch typos early.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_root = "content"   # Directory holding the content collections
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Path to the directory holding the content collections.
    pub content_root: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_root: "content".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_root.is_empty() {
            return Err(ConfigError::Validation(
                "content_root must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Load `config.toml` from `dir`, falling back to defaults if absent.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let path = dir.join("config.toml");
    let config: SiteConfig = match fs::read_to_string(&path) {
        Ok(raw) => toml::from_str(&raw)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => SiteConfig::default(),
        Err(e) => return Err(e.into()),
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.content_root, "content");
    }

    #[test]
    fn loads_overridden_content_root() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "content_root = \"docs\"\n").unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.content_root, "docs");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "content_rot = \"typo\"\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn empty_content_root_fails_validation() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "content_root = \"\"\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "content_root = [broken\n").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }
}
