//! Core value types.
//!
//! - `Colour` - 8-bit RGBA colour values
//! - `Rgba` - the same colour with channels normalised to `0.0..=1.0`

mod colour;

pub use colour::{parse_hex_color, Colour, Rgba};
