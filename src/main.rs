//! Herald CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use herald::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(args) => herald::cli::commands::init::execute(args, cli.json).await,
        Commands::Decide(args) => herald::cli::commands::decide::execute(args, cli.json).await,
        Commands::Govern(args) => herald::cli::commands::govern::execute(args, cli.json).await,
    };

    if let Err(err) = result {
        herald::cli::handle_error(err, cli.json);
    }
}
