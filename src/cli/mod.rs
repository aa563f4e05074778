pub mod colour;
pub mod completions;
pub mod date;
pub mod decode;
pub mod device;
pub mod localize;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

/// uxkit - UI helper toolbox
#[derive(Parser, Debug)]
#[command(name = "uxkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./uxkit.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse hex colour codes and print normalised channels
    Colour(colour::ColourArgs),

    /// Convert an HTML fragment to plain text
    Decode(decode::DecodeArgs),

    /// Format a date for display
    Date(date::DateArgs),

    /// Classify a screen from its metrics
    Device(device::DeviceArgs),

    /// Look up keys in a strings table
    Localize(localize::LocalizeArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

impl Cli {
    /// Resolve the config for this invocation.
    pub fn load_config(&self) -> Result<Config> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Config::discover(self.config.as_deref(), &cwd)
    }
}
