//! Reading and writing git configuration through the `git` binary

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::logger::Logger;
use crate::core::process::ProcessRunner;
use crate::error::{GlabIdentityError, Result};

/// Which git configuration layer to read or write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigScope {
    /// User-wide configuration (~/.gitconfig)
    #[default]
    Global,
    /// Configuration of the current repository
    Local,
}

impl ConfigScope {
    /// The `git config` flag selecting this scope
    pub fn flag(&self) -> &'static str {
        match self {
            ConfigScope::Global => "--global",
            ConfigScope::Local => "--local",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigScope::Global => "global",
            ConfigScope::Local => "local",
        }
    }
}

impl fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrapper around `git config --global|--local`
#[derive(Debug, Clone)]
pub struct GitConfig<R> {
    runner: R,
    logger: Logger,
    git: String,
}

impl<R: ProcessRunner> GitConfig<R> {
    pub fn new(runner: R, logger: Logger) -> Self {
        Self::with_executable(runner, logger, "git")
    }

    pub fn with_executable(runner: R, logger: Logger, git: impl Into<String>) -> Self {
        Self {
            runner,
            logger,
            git: git.into(),
        }
    }

    /// Write `key = value` at `scope`
    pub async fn set_value(&self, key: &str, value: &str, scope: ConfigScope) -> Result<()> {
        self.logger
            .debug(format!("Setting git config {} = {} ({})", key, value, scope));

        let args = vec![
            "config".to_string(),
            scope.flag().to_string(),
            key.to_string(),
            value.to_string(),
        ];
        let result = self.runner.run_buffered(&self.git, &args).await;

        if !result.success() {
            return Err(GlabIdentityError::ConfigWrite {
                key: key.to_string(),
                message: result.stderr,
            });
        }

        self.logger.debug(format!("Successfully set git config {}", key));
        Ok(())
    }

    /// Read `key` at `scope`; `None` when the key is not set
    pub async fn get_value(&self, key: &str, scope: ConfigScope) -> Option<String> {
        self.logger
            .debug(format!("Getting git config {} ({})", key, scope));

        let args = vec![
            "config".to_string(),
            scope.flag().to_string(),
            key.to_string(),
        ];
        let result = self.runner.run_buffered(&self.git, &args).await;

        if !result.success() {
            self.logger.debug(format!("Git config {} not set", key));
            return None;
        }

        self.logger
            .debug(format!("Git config {} = {}", key, result.stdout));
        Some(result.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::logger::testing::MemorySink;
    use crate::core::process::testing::ScriptedRunner;
    use crate::core::process::SystemRunner;

    #[tokio::test]
    async fn test_set_value_uses_scope_flag() {
        let runner = ScriptedRunner::new().succeed("git config --local user.name alice", "");
        let config = GitConfig::new(runner.clone(), MemorySink::default().logger(false));

        config
            .set_value("user.name", "alice", ConfigScope::Local)
            .await
            .unwrap();

        assert_eq!(
            runner.command_lines(),
            vec!["git config --local user.name alice"]
        );
    }

    #[tokio::test]
    async fn test_set_value_failure_carries_stderr() {
        let runner = ScriptedRunner::new().fail(
            "git config --local user.email a@b.c",
            "fatal: not in a git directory",
        );
        let config = GitConfig::new(runner, MemorySink::default().logger(false));

        let err = config
            .set_value("user.email", "a@b.c", ConfigScope::Local)
            .await
            .unwrap_err();

        match err {
            GlabIdentityError::ConfigWrite { key, message } => {
                assert_eq!(key, "user.email");
                assert_eq!(message, "fatal: not in a git directory");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_value_unset_is_none() {
        let runner = ScriptedRunner::new().respond(
            "git config --global user.name",
            crate::core::process::CommandResult {
                stdout: String::new(),
                stderr: String::new(),
                exit_code: 1,
            },
        );
        let config = GitConfig::new(runner, MemorySink::default().logger(false));

        assert_eq!(config.get_value("user.name", ConfigScope::Global).await, None);
    }

    #[tokio::test]
    async fn test_custom_git_executable() {
        let runner = ScriptedRunner::new().succeed("/opt/git/bin/git config --global user.name", "bob");
        let config = GitConfig::with_executable(
            runner,
            MemorySink::default().logger(false),
            "/opt/git/bin/git",
        );

        assert_eq!(
            config.get_value("user.name", ConfigScope::Global).await.as_deref(),
            Some("bob")
        );
    }

    #[tokio::test]
    async fn test_local_round_trip_with_real_git() {
        let probe = SystemRunner::new()
            .run_buffered("git", &["--version".to_string()])
            .await;
        if !probe.success() {
            eprintln!("git not available, skipping");
            return;
        }

        let repo = tempfile::tempdir().unwrap();
        let runner = SystemRunner::with_current_dir(repo.path());
        let init = runner
            .run_buffered("git", &["init".to_string(), "--quiet".to_string()])
            .await;
        assert!(init.success(), "git init failed: {}", init.stderr);

        let config = GitConfig::new(runner, MemorySink::default().logger(true));

        assert_eq!(config.get_value("user.name", ConfigScope::Local).await, None);

        config
            .set_value("user.name", "Alice Example", ConfigScope::Local)
            .await
            .unwrap();

        assert_eq!(
            config.get_value("user.name", ConfigScope::Local).await.as_deref(),
            Some("Alice Example")
        );
    }
}
