//! Custom error types for glab-setup-git-identity
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

use crate::gitlab::UserField;

/// Main error type for glab-setup-git-identity
#[derive(Error, Debug)]
pub enum GlabIdentityError {
    /// `glab api user` exited non-zero
    #[error("Failed to get GitLab {field}: {message}\n\n  → Run 'glab auth status' to check your authentication.")]
    Lookup { field: UserField, message: String },

    /// The account has no primary email configured
    #[error("No email found on GitLab account. Please set a primary email in your GitLab settings.")]
    MissingEmail,

    /// `git config` write exited non-zero
    #[error("Failed to set git config {key}: {message}")]
    ConfigWrite { key: String, message: String },

    /// GitLab CLI is not logged in
    #[error("GitLab CLI is not authenticated.\n\n  → Run 'glab-setup-git-identity login' to authenticate.")]
    NotAuthenticated,

    /// `glab auth login` did not succeed
    #[error("GitLab CLI authentication failed.\n\n  → Run 'glab auth login' manually to see the full error.")]
    AuthenticationFailed,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),
}

impl From<toml::de::Error> for GlabIdentityError {
    fn from(err: toml::de::Error) -> Self {
        GlabIdentityError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for GlabIdentityError {
    fn from(err: toml::ser::Error) -> Self {
        GlabIdentityError::Toml(err.to_string())
    }
}

/// Result type alias using GlabIdentityError
pub type Result<T> = std::result::Result<T, GlabIdentityError>;
