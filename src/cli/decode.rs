//! Decode command: unescape HTML character references.

use std::io::Read;

use clap::Args;

use crate::error::{KitError, Result};
use crate::output::Printer;
use crate::text::decode_html_entities;

/// Convert an HTML fragment to plain text
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Text to decode; reads stdin when omitted
    pub text: Vec<String>,
}

pub fn run(args: DecodeArgs, printer: &Printer) -> Result<()> {
    let input = if args.text.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| KitError::Io {
                path: "<stdin>".into(),
                message: e.to_string(),
            })?;
        buf
    } else {
        args.text.join(" ")
    };

    let decoded = decode_html_entities(&input);
    if decoded == input {
        printer.status("Unchanged", "no markup or character references found");
    }
    print!("{}", decoded);
    if !decoded.ends_with('\n') {
        println!();
    }
    Ok(())
}
