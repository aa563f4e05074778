use clap::Parser;
use miette::Result;
use uxkit::cli::{Cli, Commands};
use uxkit::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();
    let config = cli.load_config()?;

    match cli.command {
        Commands::Colour(args) => uxkit::cli::colour::run(args, &printer)?,
        Commands::Decode(args) => uxkit::cli::decode::run(args, &printer)?,
        Commands::Date(args) => uxkit::cli::date::run(args, &config)?,
        Commands::Device(args) => uxkit::cli::device::run(args, &config)?,
        Commands::Localize(args) => uxkit::cli::localize::run(args, &config, &printer)?,
        Commands::Completions(args) => uxkit::cli::completions::run(args)?,
    }

    Ok(())
}
