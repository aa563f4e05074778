//! Date command: format a date for display.

use clap::Args;

use crate::config::Config;
use crate::date::{format_date_with, parse_iso_date};
use crate::error::Result;

/// Format a date for display
#[derive(Args, Debug)]
pub struct DateArgs {
    /// Date in YYYY-MM-DD form (defaults to today)
    pub date: Option<String>,

    /// strftime pattern (overrides the config's date_pattern)
    #[arg(long, short)]
    pub format: Option<String>,
}

pub fn run(args: DateArgs, config: &Config) -> Result<()> {
    let date = match &args.date {
        Some(s) => parse_iso_date(s)?,
        None => chrono::Local::now().date_naive(),
    };
    let pattern = args.format.as_deref().unwrap_or(&config.date_pattern);

    println!("{}", format_date_with(date, pattern)?);
    Ok(())
}
