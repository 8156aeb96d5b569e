use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{CommitMessage, TagPattern};
use crate::error::{BumpError, Result};

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "bumprelease.toml";

/// File name looked up in the user configuration directory.
pub const USER_CONFIG_FILE: &str = ".bumprelease.toml";

/// Represents the complete configuration for bump-release.
///
/// Names the external tools, the files that make up the release commit, and
/// the formats of the commit message and tag.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub version_manager: VersionManagerConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub source_control: SourceControlConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

fn default_version_manager() -> String {
    "poetry".to_string()
}

fn default_manifest_files() -> Vec<String> {
    vec!["pyproject.toml".to_string()]
}

fn default_lock_file() -> Option<String> {
    Some("poetry.lock".to_string())
}

fn default_git() -> String {
    "git".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_tag_pattern() -> String {
    TagPattern::default().pattern
}

fn default_commit_message() -> String {
    "Bump version: {old} -> {new}".to_string()
}

/// The external program that owns the version in the manifest.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionManagerConfig {
    #[serde(default = "default_version_manager")]
    pub program: String,
}

impl Default for VersionManagerConfig {
    fn default() -> Self {
        VersionManagerConfig {
            program: default_version_manager(),
        }
    }
}

/// Files staged in the release commit, relative to the repository root.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_files")]
    pub files: Vec<String>,

    /// Staged only when present on disk
    #[serde(default = "default_lock_file")]
    pub lock_file: Option<String>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        ManifestConfig {
            files: default_manifest_files(),
            lock_file: default_lock_file(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SourceControlConfig {
    #[serde(default = "default_git")]
    pub program: String,

    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for SourceControlConfig {
    fn default() -> Self {
        SourceControlConfig {
            program: default_git(),
            remote: default_remote(),
        }
    }
}

/// Formats of the release commit and tag.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            tag_pattern: default_tag_pattern(),
            commit_message: default_commit_message(),
        }
    }
}

impl Config {
    /// Checks the values serde cannot: non-empty names and template placeholders.
    pub fn validate(&self) -> Result<()> {
        if self.version_manager.program.trim().is_empty() {
            return Err(BumpError::config("version_manager.program must not be empty"));
        }
        if self.source_control.program.trim().is_empty() {
            return Err(BumpError::config("source_control.program must not be empty"));
        }
        if self.source_control.remote.trim().is_empty() {
            return Err(BumpError::config("source_control.remote must not be empty"));
        }
        if self.manifest.files.is_empty() {
            return Err(BumpError::config("manifest.files must list at least one file"));
        }
        self.tag_pattern()?;
        self.commit_message()?;
        Ok(())
    }

    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.release.tag_pattern.clone())
    }

    pub fn commit_message(&self) -> Result<CommitMessage> {
        CommitMessage::new(self.release.commit_message.clone())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| BumpError::config(e.to_string()))
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumprelease.toml` in current directory
/// 3. `.bumprelease.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded and validated configuration
/// * `Err` - If a file exists but cannot be read, parsed, or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)
            .map_err(|e| BumpError::config(format!("Cannot read '{}': {}", path, e)))?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses and validates configuration text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(config_str).map_err(|e| BumpError::config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
