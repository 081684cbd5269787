//! mensa-cli - Command line tool for weekly mensa menus.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mensa-cli",
    version,
    about = "Print and export weekly mensa menus"
)]
struct Cli {
    #[command(subcommand)]
    command: mensa_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    mensa_cmd::run(cli.command).await
}
