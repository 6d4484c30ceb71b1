//! Rainfall CLI - Command line tool for Barcelona rainfall statistics.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "rainfall-cli",
    version,
    about = "Barcelona rainfall statistics toolkit"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long, global = true, default_value = "rainfall.toml")]
    config: String,

    #[command(subcommand)]
    command: rainfall_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Using configuration {}", cli.config);
    rainfall_cmd::run(cli.command, &cli.config).await
}
