//! glab-setup-git-identity - Git identity from your GitLab account
//!
//! Run without arguments to log in to the GitLab CLI if needed and write
//! user.name / user.email, or use subcommands for the individual steps.
//!
//! Also available as the `glab-identity` command.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use glab_setup_git_identity::cli::commands::{Cli, Commands};
use glab_setup_git_identity::cli::{auth, config, setup, Context};
use glab_setup_git_identity::core::Config;
use glab_setup_git_identity::error::Result;

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let app_config = Config::load()?.with_env_overrides();
    let ctx = Context::from_cli(&cli, app_config);

    match cli.command {
        // No subcommand - full setup flow
        None => setup::handle_setup(&ctx, cli.setup).await,
        Some(Commands::Setup(args)) => setup::handle_setup(&ctx, args).await,
        Some(Commands::Login(args)) => auth::handle_login(&ctx, args).await,
        Some(Commands::Status) => auth::handle_status(&ctx).await,
        Some(Commands::Whoami { field }) => auth::handle_whoami(&ctx, field).await,
        Some(Commands::Verify) => setup::handle_verify(&ctx).await,
        Some(Commands::Config(args)) => config::handle_config(&ctx, args.command).await,
    }
}
