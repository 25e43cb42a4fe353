use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "nur", version, about = "A luminous terminal companion for daily Islamic practice")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's prayer times
    Times,
    /// Print the hadith collection
    Hadith,
    /// List dua categories and saved duas
    Dua,
    /// Show the daily amal checklist
    Amal,
    /// Fetch and print the verse of the day
    Verse,
}
