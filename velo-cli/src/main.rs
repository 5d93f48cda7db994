//! velo-cli - Command line tool for collecting and exploring bike-share
//! station history.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "velo-cli",
    version,
    about = "Bike-share station history toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: velo_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let cli = Cli::parse();
    velo_cmd::run(cli.command).await
}
