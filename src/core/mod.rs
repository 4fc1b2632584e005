//! Core functionality for glab-setup-git-identity
//!
//! This module contains shared business logic including:
//! - Process execution
//! - Logging
//! - Git config access
//! - Identity setup and verification
//! - Application configuration

pub mod config;
pub mod git_config;
pub mod identity;
pub mod logger;
pub mod process;

pub use config::Config;
pub use git_config::{ConfigScope, GitConfig};
pub use identity::{ConfiguredIdentity, IdentitySetup, SetupOptions};
pub use logger::{ConsoleSink, LogSink, Logger, TracingSink};
pub use process::{CommandResult, InteractiveResult, ProcessRunner, SystemRunner};
