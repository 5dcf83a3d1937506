use crate::types::{LogLevel, OutputFormat};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "soundbrowser")]
#[command(about = "Browse a sound catalog as a paginated, filterable grid", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (default: $SOUNDBROWSER_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive grid on page 1
    Browse {
        /// Case-insensitive substring filter
        #[arg(default_value = "")]
        filter: String,
    },

    /// Render one page of the grid
    Page {
        #[arg(default_value = "")]
        filter: String,

        /// Zero-based page offset
        #[arg(long, default_value = "0", value_parser = offset_parser())]
        offset: usize,

        /// Playback pitch (defaults to playback.default_pitch)
        #[arg(long)]
        pitch: Option<i64>,
    },

    /// Click a slot on a page and report what it did
    Click {
        /// Zero-based slot index, row-major
        slot: usize,

        #[arg(long, default_value = "")]
        filter: String,

        #[arg(long, default_value = "0", value_parser = offset_parser())]
        offset: usize,

        #[arg(long)]
        pitch: Option<i64>,
    },

    /// Complete a partial sound key
    Complete {
        #[arg(default_value = "")]
        partial: String,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default config.toml into the data directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Offsets travel on carriers as `i64`, so larger values are rejected up front.
fn offset_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(..=i64::MAX as u64)
}
