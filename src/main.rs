//! Account Service - Application entry point
//!
//! CLI-based entry point that dispatches to the serve, migrate and keys commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use account_service::{
    cli::{Cli, Commands},
    commands,
    config::Config,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Verbose mode forces debug level
    init_tracing(cli.verbose);

    let config = Config::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Migrate(args) => commands::migrate::execute(args, config).await,
        Commands::Keys(args) => commands::keys::execute(args, config).await,
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", describe(&e));
        std::process::exit(1);
    }
}

/// Operator-facing text; unlike the HTTP body this keeps internal details.
fn describe(err: &account_service::AppError) -> String {
    match err {
        account_service::AppError::Internal(detail) => detail.clone(),
        other => other.to_string(),
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
