//! Shared state for CLI command handlers

use secrecy::SecretString;

use crate::cli::commands::{Cli, LoginArgs};
use crate::core::config::Config;
use crate::core::git_config::{ConfigScope, GitConfig};
use crate::core::identity::IdentitySetup;
use crate::core::logger::Logger;
use crate::core::process::{ProcessRunner, SystemRunner};
use crate::gitlab::auth::{AuthOptions, DEFAULT_HOSTNAME};
use crate::gitlab::client::GitLabCli;

/// Resolved settings plus the runner every handler shares
#[derive(Debug, Clone)]
pub struct Context<R> {
    pub runner: R,
    pub config: Config,
    pub logger: Logger,
    /// Host from --hostname, else the config file
    pub hostname: Option<String>,
    /// Scope from --global/--local, else the config file
    pub scope: ConfigScope,
}

impl Context<SystemRunner> {
    /// Context for a real run: console logger, child processes
    pub fn from_cli(cli: &Cli, config: Config) -> Self {
        Self::new(SystemRunner::new(), cli, config, Logger::console(cli.verbose))
    }
}

impl<R: ProcessRunner + Clone> Context<R> {
    pub fn new(runner: R, cli: &Cli, config: Config, logger: Logger) -> Self {
        let hostname = cli
            .hostname
            .clone()
            .filter(|h| !h.is_empty())
            .or_else(|| config.hostname.clone());
        let scope = cli.scope.resolve(config.scope);

        Self {
            runner,
            config,
            logger,
            hostname,
            scope,
        }
    }

    pub fn gitlab(&self) -> GitLabCli<R> {
        GitLabCli::with_executable(
            self.runner.clone(),
            self.logger.clone(),
            self.config.glab_executable(),
        )
    }

    pub fn git_config(&self) -> GitConfig<R> {
        GitConfig::with_executable(
            self.runner.clone(),
            self.logger.clone(),
            self.config.git_executable(),
        )
    }

    pub fn identity_setup(&self) -> IdentitySetup<R> {
        IdentitySetup::new(self.gitlab(), self.git_config(), self.logger.clone())
    }

    /// Login options: flags first, then the config file, then defaults
    pub fn auth_options(&self, args: &LoginArgs) -> AuthOptions {
        AuthOptions {
            hostname: self
                .hostname
                .clone()
                .unwrap_or_else(|| DEFAULT_HOSTNAME.to_string()),
            token: args
                .token
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(SecretString::from),
            git_protocol: args.git_protocol.unwrap_or(self.config.git_protocol),
            use_keyring: args.use_keyring || self.config.use_keyring,
        }
    }
}
