//! personagen entry point.
//!
//! Binary name: `personagen`
//!
//! Loads `.env`, parses CLI arguments, sets up tracing, wires services, then
//! runs a single persona generation.

mod cli;
mod state;

use clap::Parser;

use cli::Cli;
use personagen_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};
use state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = async {
        let state = AppState::init(&cli).await?;
        cli::run::run(&state, &cli).await
    }
    .await;

    shutdown_tracing();
    result
}
