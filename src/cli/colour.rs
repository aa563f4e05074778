//! Colour command: parse hex codes.

use clap::Args;
use serde::Serialize;

use crate::error::{KitError, Result};
use crate::output::{plural, Printer};
use crate::types::{parse_hex_color, Colour, Rgba};

/// Parse hex colour codes and print normalised channels
#[derive(Args, Debug)]
pub struct ColourArgs {
    /// Colour codes, e.g. "#FF8800" or 1a1a2e
    #[arg(required = true)]
    pub codes: Vec<String>,

    /// Reject malformed codes instead of reading them as black
    #[arg(long)]
    pub strict: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One parsed code, as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct ColourReport {
    pub input: String,
    pub hex: String,
    #[serde(flatten)]
    pub rgba: Rgba,
}

/// Parse every code. In lenient mode a code the strict parser rejects still
/// succeeds but is reported through `on_fallback`.
pub fn parse_codes(
    codes: &[String],
    strict: bool,
    mut on_fallback: impl FnMut(&str),
) -> Result<Vec<ColourReport>> {
    codes
        .iter()
        .map(|code| -> Result<ColourReport> {
            let colour = if strict {
                Colour::from_hex(code)?
            } else {
                if Colour::from_hex(code).is_err() {
                    on_fallback(code);
                }
                parse_hex_color(code)
            };
            Ok(ColourReport {
                input: code.clone(),
                hex: colour.to_string(),
                rgba: colour.normalized(),
            })
        })
        .collect()
}

pub fn run(args: ColourArgs, printer: &Printer) -> Result<()> {
    let reports = parse_codes(&args.codes, args.strict, |code| {
        printer.warning("Lenient", &format!("'{}' is not a valid hex colour", code));
    })?;

    if args.json {
        let json = serde_json::to_string_pretty(&reports).map_err(|e| KitError::Parse {
            message: format!("Failed to encode JSON: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        for report in &reports {
            let Rgba { r, g, b, a } = report.rgba;
            println!(
                "{} {}",
                report.hex,
                printer.dim(&format!("rgba({:.3}, {:.3}, {:.3}, {:.3})", r, g, b, a))
            );
        }
    }

    printer.status("Parsed", &plural(reports.len(), "colour", "colours"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_lenient_reports_fallbacks() {
        let mut fallbacks = Vec::new();
        let reports =
            parse_codes(&codes(&["#FF0000", "zzzzzz"]), false, |c| fallbacks.push(c.to_string()))
                .unwrap();
        assert_eq!(fallbacks, vec!["zzzzzz"]);
        assert_eq!(reports[0].hex, "#FF0000");
        assert_eq!(reports[1].hex, "#000000");
        assert_eq!(reports[1].rgba.a, 1.0);
    }

    #[test]
    fn test_strict_rejects() {
        assert!(parse_codes(&codes(&["#FFF", "nope"]), true, |_| {}).is_err());
        let reports = parse_codes(&codes(&["#FFF"]), true, |_| {}).unwrap();
        assert_eq!(reports[0].hex, "#FFFFFF");
    }

    #[test]
    fn test_json_shape() {
        let reports = parse_codes(&codes(&["#FFFFFF"]), false, |_| {}).unwrap();
        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "input": "#FFFFFF", "hex": "#FFFFFF", "r": 1.0, "g": 1.0, "b": 1.0, "a": 1.0 }])
        );
    }
}
