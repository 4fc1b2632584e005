//! GitLab CLI integration
//!
//! This module wraps the `glab` command:
//! - Authentication status and login
//! - Authenticated user lookups

pub mod auth;
pub mod client;
pub mod user;

pub use auth::{AuthOptions, GitProtocol};
pub use client::GitLabCli;
pub use user::{Identity, UserField};
