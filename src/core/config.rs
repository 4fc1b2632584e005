//! Application configuration management
//!
//! Persisted defaults for the command-line front-end:
//! - GitLab hostname and login preferences
//! - Default git config scope
//! - Locations of the `glab` and `git` executables

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::core::git_config::ConfigScope;
use crate::error::{GlabIdentityError, Result};
use crate::gitlab::auth::GitProtocol;

// Environment variable names
const GLAB_PATH_ENV: &str = "GLAB_PATH";
const GIT_PATH_ENV: &str = "GIT_PATH";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// GitLab host used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// Scope written by `setup` when neither --global nor --local is given
    #[serde(default)]
    pub scope: ConfigScope,

    /// Protocol passed to `glab auth login --git-protocol`
    #[serde(default)]
    pub git_protocol: GitProtocol,

    /// Store the token in the OS keyring during login
    #[serde(default)]
    pub use_keyring: bool,

    /// Path to the GitLab CLI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glab_path: Option<String>,

    /// Path to git
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_path: Option<String>,
}

impl Config {
    /// Load configuration from the default location, or defaults if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs =
            ProjectDirs::from("com", "glab-setup-git-identity", "glab-setup-git-identity")
                .ok_or_else(|| {
                    GlabIdentityError::Config("Could not determine config directory".into())
                })?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Apply `GLAB_PATH` / `GIT_PATH` from the environment over file values
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(path) = non_empty(GLAB_PATH_ENV) {
            self.glab_path = Some(path);
        }
        if let Some(path) = non_empty(GIT_PATH_ENV) {
            self.git_path = Some(path);
        }
        self
    }

    /// `glab` executable: config value, else `glab` on PATH
    pub fn glab_executable(&self) -> &str {
        self.glab_path.as_deref().unwrap_or("glab")
    }

    /// `git` executable: config value, else `git` on PATH
    pub fn git_executable(&self) -> &str {
        self.git_path.as_deref().unwrap_or("git")
    }
}
