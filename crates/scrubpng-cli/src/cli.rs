// crates/scrubpng-cli/src/cli.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// scrubpng - Convert images to PNG with every trace of metadata removed
#[derive(Parser)]
#[command(name = "scrubpng")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Disable progress bars
    #[arg(long, global = true)]
    pub no_progress: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert images to metadata-free PNG files
    Convert {
        /// Input files, directories or glob patterns (e.g. ./photos/*.jpg)
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Output directory (defaults to the configured one)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// PNG optimization level, 0 (fast) to 6 (smallest)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=6))]
        level: Option<u8>,
    },

    /// List supported input formats
    Formats,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Reset to defaults
    Reset,

    /// Show config file path
    Path,
}
