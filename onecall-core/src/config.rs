use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::model::{Exclude, RequestParams};

fn default_pretty() -> bool {
    true
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// pretty = true
/// exclude = ["minutely"]
/// log_filter = "onecall_core=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Data blocks left out of every request unless overridden.
    #[serde(default)]
    pub exclude: Vec<Exclude>,

    /// `tracing` filter directive used when `RUST_LOG` is not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self { pretty: default_pretty(), exclude: Vec::new(), log_filter: None }
    }
}

impl Config {
    /// Request parameters built from the configured defaults.
    pub fn request_params(&self) -> RequestParams {
        self.exclude
            .iter()
            .fold(RequestParams::default(), |params, block| params.excluding(*block))
    }

    /// Replace the default exclusions, dropping duplicates.
    pub fn set_exclude(&mut self, exclude: impl IntoIterator<Item = Exclude>) {
        self.exclude.clear();
        for block in exclude {
            if !self.exclude.contains(&block) {
                self.exclude.push(block);
            }
        }
    }

    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "onecall", "onecall-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_pretty_without_exclusions() {
        let cfg = Config::default();

        assert!(cfg.pretty);
        assert!(cfg.exclude.is_empty());
        assert_eq!(cfg.request_params(), RequestParams::default());
    }

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = Config::from_toml("").expect("empty config is valid");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn toml_roundtrip() {
        let cfg = Config {
            pretty: false,
            exclude: vec![Exclude::Minutely, Exclude::Hourly],
            log_filter: Some("onecall_core=debug".to_string()),
        };

        let toml = cfg.to_toml().expect("serialize");
        assert!(toml.contains("pretty = false"));
        assert!(toml.contains("\"minutely\""));

        let parsed = Config::from_toml(&toml).expect("parse");
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn set_exclude_drops_duplicates() {
        let mut cfg = Config::default();
        cfg.set_exclude([Exclude::Daily, Exclude::Daily, Exclude::Currently]);

        assert_eq!(cfg.exclude, vec![Exclude::Daily, Exclude::Currently]);
        assert!(cfg.request_params().is_excluded(Exclude::Daily));
    }

    #[test]
    fn unknown_block_is_a_parse_error() {
        let err = Config::from_toml("exclude = [\"weekly\"]").unwrap_err();
        assert!(err.to_string().contains("weekly"));
    }
}
