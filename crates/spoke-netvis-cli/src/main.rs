//! SPOKE Network Visualization CLI
//!
//! Renders the deduplicated, typed, directed graph between an organism and
//! a compound, plus its color legend and layout parameters, as JSON for an
//! external renderer.
//!
//! # Commands
//!
//! - `render`: run one render request (default mode or metapath mode)
//!
//! Database settings come from `config/*.toml` and `SPOKE_NETVIS_`-prefixed
//! environment variables.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// SPOKE Network Visualization - organism-compound path rendering
#[derive(Parser)]
#[command(name = "spoke-netvis")]
#[command(version = "0.1.0")]
#[command(about = "Render SPOKE organism-compound networks as JSON")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one render request and print the network JSON on stdout
    Render(commands::render::RenderArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Render(args) => commands::render::handle_render(args).await,
    };

    std::process::exit(exit_code);
}
