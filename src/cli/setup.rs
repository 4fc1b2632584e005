//! Identity setup and verification command handlers

use crate::cli::commands::SetupArgs;
use crate::cli::context::Context;
use crate::core::git_config::ConfigScope;
use crate::core::identity::{ConfiguredIdentity, SetupOptions};
use crate::core::logger::Logger;
use crate::core::process::ProcessRunner;
use crate::error::{GlabIdentityError, Result};

/// Log in if needed, write the identity, then read it back
pub async fn handle_setup<R: ProcessRunner + Clone>(
    ctx: &Context<R>,
    args: SetupArgs,
) -> Result<()> {
    let gitlab = ctx.gitlab();

    if !gitlab.check_authenticated(ctx.hostname.as_deref()).await {
        ctx.logger
            .log("GitLab CLI is not authenticated. Starting authentication...\n");

        if !gitlab.login(&ctx.auth_options(&args.login)).await {
            return Err(GlabIdentityError::AuthenticationFailed);
        }
    }

    let setup = ctx.identity_setup();
    let options = SetupOptions {
        hostname: ctx.hostname.clone(),
        scope: ctx.scope,
        dry_run: args.dry_run,
    };
    setup.setup_identity(&options).await?;

    if !args.dry_run {
        ctx.logger.log("\nVerifying git configuration...");
        let configured = setup.verify_identity(ctx.scope).await;
        print_configured(&ctx.logger, ctx.scope, &configured);
    }

    Ok(())
}

/// Print the configured user.name and user.email
pub async fn handle_verify<R: ProcessRunner + Clone>(ctx: &Context<R>) -> Result<()> {
    let configured = ctx.identity_setup().verify_identity(ctx.scope).await;
    print_configured(&ctx.logger, ctx.scope, &configured);
    Ok(())
}

fn print_configured(logger: &Logger, scope: ConfigScope, configured: &ConfiguredIdentity) {
    logger.log(format!("Git identity ({}):", scope));
    logger.log(format!(
        "  user.name: {}",
        configured.username.as_deref().unwrap_or("(not set)")
    ));
    logger.log(format!(
        "  user.email: {}",
        configured.email.as_deref().unwrap_or("(not set)")
    ));
}
