use anyhow::{Context, Result};
use clap::Parser;

use nur::cli::args::{Cli, Commands};
use nur::cli::handlers;
use nur::config::AppConfig;
use nur::tui;

fn main() -> Result<()> {
    env_logger::init();
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    match cli.command {
        Some(Commands::Times) => handlers::handle_times()?,
        Some(Commands::Hadith) => handlers::handle_hadith()?,
        Some(Commands::Dua) => handlers::handle_dua()?,
        Some(Commands::Amal) => handlers::handle_amal()?,
        Some(Commands::Verse) => handlers::handle_verse(&config)?,

        // No subcommand → launch TUI
        None => {
            tui::app::run(config)?;
        }
    }

    Ok(())
}
