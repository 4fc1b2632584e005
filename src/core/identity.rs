//! Git identity setup and verification
//!
//! Resolves the GitLab account's username and email and mirrors them into
//! `user.name` / `user.email` at the requested scope.

use crate::core::git_config::{ConfigScope, GitConfig};
use crate::core::logger::Logger;
use crate::core::process::ProcessRunner;
use crate::error::Result;
use crate::gitlab::{GitLabCli, Identity};

pub const USER_NAME_KEY: &str = "user.name";
pub const USER_EMAIL_KEY: &str = "user.email";

/// Options for [`IdentitySetup::setup_identity`]
#[derive(Debug, Clone, Default)]
pub struct SetupOptions {
    /// GitLab host to query; glab's default host when `None`
    pub hostname: Option<String>,
    pub scope: ConfigScope,
    /// Report what would be written without touching git config
    pub dry_run: bool,
}

/// Identity currently present in git config
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfiguredIdentity {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Ties the GitLab lookups to the git config writes
#[derive(Debug, Clone)]
pub struct IdentitySetup<R> {
    gitlab: GitLabCli<R>,
    git_config: GitConfig<R>,
    logger: Logger,
}

impl<R: ProcessRunner> IdentitySetup<R> {
    pub fn new(gitlab: GitLabCli<R>, git_config: GitConfig<R>, logger: Logger) -> Self {
        Self {
            gitlab,
            git_config,
            logger,
        }
    }

    /// Fetch the GitLab identity and write it to git config.
    ///
    /// Writes `user.name` then `user.email`. A failed second write leaves the
    /// first one in place; running setup again converges.
    pub async fn setup_identity(&self, options: &SetupOptions) -> Result<Identity> {
        self.logger.log("\nFetching GitLab user information...");

        let identity = self
            .gitlab
            .fetch_identity(options.hostname.as_deref())
            .await?;

        self.logger
            .log(format!("  GitLab user: {}", identity.username));
        self.logger
            .log(format!("  GitLab email: {}", identity.email));

        let scope = options.scope;

        if options.dry_run {
            self.logger.log("DRY MODE: Would configure the following:");
            self.logger.log(format!(
                "  git config {} {} \"{}\"",
                scope.flag(),
                USER_NAME_KEY,
                identity.username
            ));
            self.logger.log(format!(
                "  git config {} {} \"{}\"",
                scope.flag(),
                USER_EMAIL_KEY,
                identity.email
            ));
            return Ok(identity);
        }

        self.logger.log(format!("\nConfiguring git ({})...", scope));

        self.git_config
            .set_value(USER_NAME_KEY, &identity.username, scope)
            .await?;
        self.git_config
            .set_value(USER_EMAIL_KEY, &identity.email, scope)
            .await?;

        self.logger.log("  Git identity configured successfully!");

        Ok(identity)
    }

    /// Read back `user.name` and `user.email` at `scope`
    pub async fn verify_identity(&self, scope: ConfigScope) -> ConfiguredIdentity {
        let username = self.git_config.get_value(USER_NAME_KEY, scope).await;
        let email = self.git_config.get_value(USER_EMAIL_KEY, scope).await;

        ConfiguredIdentity { username, email }
    }
}
