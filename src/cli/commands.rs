//! CLI command definitions using clap
//!
//! Defines the command structure for the `glab-setup-git-identity` tool.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::git_config::ConfigScope;
use crate::gitlab::auth::GitProtocol;

/// glab-setup-git-identity - Set up git identity from your GitLab account
///
/// Uses the GitLab CLI to look up your username and primary email and writes
/// them to git's user.name and user.email. Run without a subcommand to log in
/// if needed and configure git.
#[derive(Parser, Debug)]
#[command(name = "glab-setup-git-identity", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub scope: ScopeArgs,

    /// GitLab hostname (defaults to the configured host, then glab's default)
    #[arg(long, global = true, env = "GLAB_HOSTNAME")]
    pub hostname: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options for the default setup flow
    #[command(flatten)]
    pub setup: SetupArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in if needed, then write user.name and user.email (default)
    Setup(SetupArgs),

    /// Log in to GitLab with glab
    Login(LoginArgs),

    /// Show whether glab is authenticated
    Status,

    /// Show the GitLab username and email
    Whoami {
        /// Print only this field
        #[arg(long)]
        field: Option<IdentityField>,
    },

    /// Show the configured user.name and user.email
    Verify,

    /// Read or write git config values
    Config(ConfigArgs),
}

/// Git config scope selection
#[derive(Args, Debug, Default, Clone)]
pub struct ScopeArgs {
    /// Use global git config (default)
    #[arg(long, global = true, conflicts_with = "local")]
    pub global: bool,

    /// Use repository-local git config
    #[arg(long, global = true)]
    pub local: bool,
}

impl ScopeArgs {
    /// Scope from the flags, or `fallback` when neither flag is given
    pub fn resolve(&self, fallback: ConfigScope) -> ConfigScope {
        if self.local {
            ConfigScope::Local
        } else if self.global {
            ConfigScope::Global
        } else {
            fallback
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Setup / Login
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Args, Debug, Default, Clone)]
pub struct SetupArgs {
    /// Show what would be configured without changing anything
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub login: LoginArgs,
}

#[derive(Args, Debug, Default, Clone)]
pub struct LoginArgs {
    /// GitLab access token for non-interactive login
    #[arg(long, env = "GITLAB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Protocol for git operations
    #[arg(long)]
    pub git_protocol: Option<GitProtocol>,

    /// Store the token in the OS keyring
    #[arg(long)]
    pub use_keyring: bool,
}

/// Fields printable by `whoami --field`
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum IdentityField {
    Username,
    Email,
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Get a git config value
    Get {
        /// Config key (e.g. user.name)
        key: String,
    },

    /// Set a git config value
    Set {
        /// Config key (e.g. user.name)
        key: String,

        /// Value to write
        value: String,
    },

    /// Print the path of this tool's own config file
    Path,
}
