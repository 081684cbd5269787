//! Command implementations for the mensa CLI.
//!
//! Provides subcommands for listing locations, printing a week's menu and
//! exporting it to CSV.

use clap::Subcommand;

pub mod export;
pub mod locations;
pub mod menu;
pub mod selection;

pub use selection::Selection;

#[derive(Subcommand)]
pub enum Command {
    /// List the known locations in dropdown order
    Locations,

    /// Print the menu of one week
    Menu {
        #[command(flatten)]
        selection: Selection,

        /// Only print today's dishes
        #[arg(long)]
        today_only: bool,
    },

    /// Write the menu of one week to a CSV file
    Export {
        /// Output path for the CSV file
        #[arg(short = 'o', long)]
        output: String,

        #[command(flatten)]
        selection: Selection,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Locations => {
            print!("{}", locations::render_locations());
            Ok(())
        }
        Command::Menu {
            selection,
            today_only,
        } => menu::run_menu(&selection, today_only).await,
        Command::Export { output, selection } => export::run_export(&selection, &output).await,
    }
}
