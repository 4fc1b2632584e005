//! GitLab CLI login
//!
//! Drives `glab auth login`, either fully interactive or with a token piped
//! through `--stdin`.

use std::fmt;

use clap::ValueEnum;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::core::process::ProcessRunner;
use crate::gitlab::client::GitLabCli;

/// Default GitLab host for login
pub const DEFAULT_HOSTNAME: &str = "gitlab.com";

/// Protocol glab configures git to use for this host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GitProtocol {
    Ssh,
    #[default]
    Https,
    Http,
}

impl GitProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            GitProtocol::Ssh => "ssh",
            GitProtocol::Https => "https",
            GitProtocol::Http => "http",
        }
    }
}

impl fmt::Display for GitProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for `glab auth login`
#[derive(Debug, Clone)]
pub struct AuthOptions {
    /// GitLab host to log in to
    pub hostname: String,
    /// Access token; when set, login runs non-interactively via `--stdin`
    pub token: Option<SecretString>,
    pub git_protocol: GitProtocol,
    /// Store the token in the OS keyring instead of glab's config file
    pub use_keyring: bool,
}

impl Default for AuthOptions {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            token: None,
            git_protocol: GitProtocol::default(),
            use_keyring: false,
        }
    }
}

impl AuthOptions {
    /// Token to pipe through `--stdin`; an empty token means interactive login
    pub fn piped_token(&self) -> Option<&SecretString> {
        self.token
            .as_ref()
            .filter(|token| !token.expose_secret().is_empty())
    }

    /// Arguments for `glab auth login`
    pub fn login_args(&self) -> Vec<String> {
        let mut args = vec!["auth".to_string(), "login".to_string()];

        if !self.hostname.is_empty() {
            args.push("--hostname".to_string());
            args.push(self.hostname.clone());
        }

        args.push("--git-protocol".to_string());
        args.push(self.git_protocol.to_string());

        if self.use_keyring {
            args.push("--use-keyring".to_string());
        }

        if self.piped_token().is_some() {
            args.push("--stdin".to_string());
        }

        args
    }
}

/// Get a masked version of a token for display (shows first 4 and last 4 chars)
pub fn mask_token(token: &SecretString) -> String {
    let exposed = token.expose_secret();
    let chars: Vec<char> = exposed.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

impl<R: ProcessRunner> GitLabCli<R> {
    /// Run `glab auth login`; true when glab reports success
    pub async fn login(&self, options: &AuthOptions) -> bool {
        let args = options.login_args();

        match options.piped_token() {
            Some(token) => self.logger.debug(format!(
                "Running: {} {} (token {})",
                self.glab,
                args.join(" "),
                mask_token(token)
            )),
            None => self
                .logger
                .debug(format!("Running: {} {}", self.glab, args.join(" "))),
        }

        let input = options
            .piped_token()
            .map(|token| format!("{}\n", token.expose_secret()));

        let result = self
            .runner
            .run_interactive(&self.glab, &args, input.as_deref())
            .await;

        if !result.success() {
            self.logger.error("GitLab CLI authentication failed");
            return false;
        }

        self.logger.log("\nGitLab CLI authentication successful!");
        true
    }
}
