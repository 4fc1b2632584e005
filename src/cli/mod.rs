//! CLI module for glab-setup-git-identity
//!
//! This module contains all CLI command definitions and handlers using clap.

pub mod auth;
pub mod commands;
pub mod config;
pub mod context;
pub mod setup;

pub use commands::{Cli, Commands};
pub use context::Context;
