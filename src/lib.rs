//! glab-setup-git-identity - Set up git identity from a GitLab account
//!
//! This library uses the GitLab CLI (`glab`) to check authentication, log in
//! and look up the authenticated user's username and primary email, then
//! writes them to git's `user.name` and `user.email`.

pub mod cli;
pub mod core;
pub mod error;
pub mod gitlab;

pub use error::{GlabIdentityError, Result};
