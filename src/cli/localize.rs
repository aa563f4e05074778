//! Localize command: look up keys in a strings table.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::{KitError, Result};
use crate::output::{display_path, plural, Printer};
use crate::text::Strings;

/// Look up keys in a strings table
#[derive(Args, Debug)]
pub struct LocalizeArgs {
    /// Keys to translate
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Strings table (JSON or YAML); defaults to the config's `strings`
    #[arg(long, short)]
    pub strings: Option<PathBuf>,
}

pub fn run(args: LocalizeArgs, config: &Config, printer: &Printer) -> Result<()> {
    let path = args
        .strings
        .or_else(|| config.strings.clone())
        .ok_or_else(|| KitError::Validation {
            message: "No strings table given".to_string(),
            help: Some("Pass --strings or set `strings` in uxkit.yaml".to_string()),
        })?;

    let strings = Strings::load(&path)?;
    printer.status(
        "Loaded",
        &format!("{} from {}", plural(strings.len(), "entry", "entries"), display_path(&path)),
    );

    for key in &args.keys {
        let value = strings.localized(key);
        if value == key.as_str() {
            printer.warning("Missing", key);
        }
        println!("{}", value);
    }
    Ok(())
}
