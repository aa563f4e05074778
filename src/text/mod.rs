//! Text helpers: entity decoding, attributed text and string tables.

mod attributed;
mod entities;
mod html;
mod localize;

pub use attributed::{Alignment, AttributedText, Attribute, Font, Paragraph, Run, TextStyle};
pub use html::decode_html_entities;
pub use localize::Strings;
