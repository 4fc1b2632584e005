//! GitLab CLI wrapper

use crate::core::logger::Logger;
use crate::core::process::{CommandResult, ProcessRunner};

/// Runs `glab` subcommands through a [`ProcessRunner`]
#[derive(Debug, Clone)]
pub struct GitLabCli<R> {
    pub(crate) runner: R,
    pub(crate) logger: Logger,
    pub(crate) glab: String,
}

impl<R: ProcessRunner> GitLabCli<R> {
    pub fn new(runner: R, logger: Logger) -> Self {
        Self::with_executable(runner, logger, "glab")
    }

    pub fn with_executable(runner: R, logger: Logger, glab: impl Into<String>) -> Self {
        Self {
            runner,
            logger,
            glab: glab.into(),
        }
    }

    /// Run a non-interactive `glab` subcommand
    pub(crate) async fn run(&self, args: &[String]) -> CommandResult {
        self.runner.run_buffered(&self.glab, args).await
    }
}

/// Build an argument list, appending `--hostname H` when a host is given
pub(crate) fn with_hostname(base: &[&str], hostname: Option<&str>) -> Vec<String> {
    let mut args: Vec<String> = base.iter().map(|s| s.to_string()).collect();
    if let Some(host) = hostname.filter(|h| !h.is_empty()) {
        args.push("--hostname".to_string());
        args.push(host.to_string());
    }
    args
}
