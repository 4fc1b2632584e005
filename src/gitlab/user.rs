//! Authenticated user lookups
//!
//! Username and primary email come from `glab api user --jq <field>`.

use std::fmt;

use crate::core::process::ProcessRunner;
use crate::error::{GlabIdentityError, Result};
use crate::gitlab::client::{with_hostname, GitLabCli};

/// Which GitLab user field a lookup was asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Username,
    Email,
}

impl UserField {
    /// The `--jq` filter that selects this field from `glab api user`
    pub fn jq_filter(&self) -> &'static str {
        match self {
            UserField::Username => ".username",
            UserField::Email => ".email",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserField::Username => write!(f, "username"),
            UserField::Email => write!(f, "email"),
        }
    }
}

/// The GitLab account's username and primary email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub email: String,
}

impl<R: ProcessRunner> GitLabCli<R> {
    /// Whether `glab auth status` succeeds for `hostname` (or any host)
    pub async fn check_authenticated(&self, hostname: Option<&str>) -> bool {
        self.logger
            .debug("Checking GitLab CLI authentication status...");

        let result = self.run(&with_hostname(&["auth", "status"], hostname)).await;

        if !result.success() {
            self.logger
                .debug(format!("GitLab CLI is not authenticated: {}", result.stderr));
            return false;
        }

        self.logger.debug("GitLab CLI is authenticated");
        true
    }

    async fn fetch_user_field(&self, field: UserField, hostname: Option<&str>) -> Result<String> {
        let args = with_hostname(&["api", "user", "--jq", field.jq_filter()], hostname);
        let result = self.run(&args).await;

        if !result.success() {
            return Err(GlabIdentityError::Lookup {
                field,
                message: result.stderr,
            });
        }

        Ok(result.stdout)
    }

    /// Username of the authenticated user
    pub async fn fetch_username(&self, hostname: Option<&str>) -> Result<String> {
        self.logger.debug("Getting GitLab username...");

        let username = self.fetch_user_field(UserField::Username, hostname).await?;
        self.logger.debug(format!("GitLab username: {}", username));

        Ok(username)
    }

    /// Primary email of the authenticated user
    ///
    /// Fails with [`GlabIdentityError::MissingEmail`] when the account has no
    /// primary email, which GitLab reports as an empty field.
    pub async fn fetch_email(&self, hostname: Option<&str>) -> Result<String> {
        self.logger.debug("Getting GitLab primary email...");

        let email = self.fetch_user_field(UserField::Email, hostname).await?;
        if email.is_empty() {
            return Err(GlabIdentityError::MissingEmail);
        }
        self.logger.debug(format!("GitLab primary email: {}", email));

        Ok(email)
    }

    /// Username and email, looked up concurrently
    pub async fn fetch_identity(&self, hostname: Option<&str>) -> Result<Identity> {
        let (username, email) =
            tokio::try_join!(self.fetch_username(hostname), self.fetch_email(hostname))?;

        Ok(Identity { username, email })
    }
}
