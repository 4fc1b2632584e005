//! Authentication and user lookup command handlers

use crate::cli::commands::{IdentityField, LoginArgs};
use crate::cli::context::Context;
use crate::core::process::ProcessRunner;
use crate::error::{GlabIdentityError, Result};

/// Handle the login command
pub async fn handle_login<R: ProcessRunner + Clone>(
    ctx: &Context<R>,
    args: LoginArgs,
) -> Result<()> {
    if ctx.gitlab().login(&ctx.auth_options(&args)).await {
        Ok(())
    } else {
        Err(GlabIdentityError::AuthenticationFailed)
    }
}

/// Handle the status command
pub async fn handle_status<R: ProcessRunner + Clone>(ctx: &Context<R>) -> Result<()> {
    let host = ctx.hostname.as_deref().unwrap_or("default host");

    if !ctx.gitlab().check_authenticated(ctx.hostname.as_deref()).await {
        return Err(GlabIdentityError::NotAuthenticated);
    }

    ctx.logger
        .log(format!("GitLab CLI: Authenticated ({})", host));
    Ok(())
}

/// Handle the whoami command
pub async fn handle_whoami<R: ProcessRunner + Clone>(
    ctx: &Context<R>,
    field: Option<IdentityField>,
) -> Result<()> {
    let gitlab = ctx.gitlab();
    let hostname = ctx.hostname.as_deref();

    match field {
        Some(IdentityField::Username) => ctx.logger.log(gitlab.fetch_username(hostname).await?),
        Some(IdentityField::Email) => ctx.logger.log(gitlab.fetch_email(hostname).await?),
        None => {
            let identity = gitlab.fetch_identity(hostname).await?;
            ctx.logger.log(format!("GitLab user: {}", identity.username));
            ctx.logger.log(format!("GitLab email: {}", identity.email));
        }
    }

    Ok(())
}
