//! Configuration CLI command handlers

use crate::cli::commands::ConfigCommand;
use crate::cli::context::Context;
use crate::core::config::Config;
use crate::core::process::ProcessRunner;
use crate::error::{GlabIdentityError, Result};

/// Handle configuration commands
pub async fn handle_config<R: ProcessRunner + Clone>(
    ctx: &Context<R>,
    command: ConfigCommand,
) -> Result<()> {
    match command {
        ConfigCommand::Get { key } => handle_get(ctx, &key).await,
        ConfigCommand::Set { key, value } => handle_set(ctx, &key, &value).await,
        ConfigCommand::Path => {
            ctx.logger.log(Config::config_path()?.display().to_string());
            Ok(())
        }
    }
}

/// Handle reading a git config value
async fn handle_get<R: ProcessRunner + Clone>(ctx: &Context<R>, key: &str) -> Result<()> {
    validate_key(key)?;

    match ctx.git_config().get_value(key, ctx.scope).await {
        Some(value) => ctx.logger.log(value),
        None => ctx
            .logger
            .warn(format!("{} is not set ({})", key, ctx.scope)),
    }
    Ok(())
}

/// Handle writing a git config value
async fn handle_set<R: ProcessRunner + Clone>(
    ctx: &Context<R>,
    key: &str,
    value: &str,
) -> Result<()> {
    validate_key(key)?;

    ctx.git_config().set_value(key, value, ctx.scope).await?;
    ctx.logger
        .log(format!("Set {} = {} ({})", key, value, ctx.scope));
    Ok(())
}

/// Git config keys are `section.name`; catch obvious typos before running git
fn validate_key(key: &str) -> Result<()> {
    let valid = key.contains('.')
        && !key.starts_with('.')
        && !key.ends_with('.')
        && !key.chars().any(char::is_whitespace);

    if valid {
        Ok(())
    } else {
        Err(GlabIdentityError::InvalidInput(format!(
            "Invalid git config key '{}'. Expected the form section.name, e.g. user.name",
            key
        )))
    }
}
