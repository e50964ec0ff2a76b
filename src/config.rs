use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".unamdrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directories to scan when no paths are given on the command line.
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    /// Glob patterns for paths to skip (e.g. `**/vendor/**`).
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_includes() -> Vec<String> {
    vec![".".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: default_includes(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Load the config from `dir`. A missing file is not an error; defaults
    /// apply.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid config in {}", path.display()))
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config.includes, vec!["."]);
        assert!(config.ignores.is_empty());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "ignores": ["**/vendor/**"] }"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config.includes, vec!["."]);
        assert_eq!(config.ignores, vec!["**/vendor/**"]);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{").unwrap();

        assert!(Config::load(dir.path()).is_err());
    }
}
