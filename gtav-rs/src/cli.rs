//! Root CLI structure for gtav-rs

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gtav-rs")]
#[command(about = "Command-line tools for Grand Theft Auto V scripting data", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Vehicle model identifier operations
    Vehicle {
        #[command(subcommand)]
        command: crate::commands::vehicle::VehicleCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
