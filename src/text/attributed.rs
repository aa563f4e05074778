//! Attributed text: a string plus attribute runs over byte ranges.

use std::ops::Range;

use crate::error::{KitError, Result};
use crate::types::Colour;

/// A font reference, resolved by the target UI framework.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
    Justified,
    Natural,
}

/// Paragraph layout attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paragraph {
    pub alignment: Alignment,
    pub line_spacing: f32,
    pub max_line_height: f32,
    pub line_height_multiple: f32,
}

/// Styling applied to a whole string by [`AttributedText::styled`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: Option<Font>,
    pub alignment: Alignment,
    pub colour: Colour,
    pub line_spacing: f32,
    pub max_line_height: f32,
    pub line_height_multiple: f32,
}

impl TextStyle {
    /// Style with the given font, colour and maximum line height, centred
    /// with no extra line spacing and a line height multiple of 1.
    pub fn new(font: Option<Font>, colour: Colour, max_line_height: f32) -> Self {
        Self {
            font,
            alignment: Alignment::default(),
            colour,
            line_spacing: 0.0,
            max_line_height,
            line_height_multiple: 1.0,
        }
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    pub fn line_height_multiple(mut self, multiple: f32) -> Self {
        self.line_height_multiple = multiple;
        self
    }
}

/// A single attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Font(Font),
    Foreground(Colour),
    Paragraph(Paragraph),
}

/// An attribute applied to a byte range of the text.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub range: Range<usize>,
    pub attribute: Attribute,
}

/// Text with attribute runs.
///
/// Later runs take precedence over earlier ones where they overlap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributedText {
    text: String,
    runs: Vec<Run>,
}

impl AttributedText {
    /// Text with no attributes.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            runs: Vec::new(),
        }
    }

    /// Text with font, foreground colour and paragraph style over its full length.
    ///
    /// Fails when the style has no font.
    pub fn styled(text: impl Into<String>, style: &TextStyle) -> Result<Self> {
        let font = style.font.clone().ok_or_else(|| KitError::Validation {
            message: "Attributed text requires a font".to_string(),
            help: Some("Set TextStyle::font before building the text".to_string()),
        })?;

        let text = text.into();
        let full = 0..text.len();
        let paragraph = Paragraph {
            alignment: style.alignment,
            line_spacing: style.line_spacing,
            max_line_height: style.max_line_height,
            line_height_multiple: style.line_height_multiple,
        };

        Ok(Self {
            runs: vec![
                Run { range: full.clone(), attribute: Attribute::Font(font) },
                Run { range: full.clone(), attribute: Attribute::Foreground(style.colour) },
                Run { range: full, attribute: Attribute::Paragraph(paragraph) },
            ],
            text,
        })
    }

    /// Colour the first occurrence of `needle`.
    ///
    /// Returns whether a match was found; the text is unchanged otherwise.
    pub fn highlight(&mut self, needle: &str, colour: Colour) -> bool {
        if needle.is_empty() {
            return false;
        }
        match self.text.find(needle) {
            Some(start) => {
                self.runs.push(Run {
                    range: start..start + needle.len(),
                    attribute: Attribute::Foreground(colour),
                });
                true
            }
            None => false,
        }
    }

    /// Builder form of [`highlight`](Self::highlight).
    pub fn highlighted(mut self, needle: &str, colour: Colour) -> Self {
        self.highlight(needle, colour);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Effective foreground colour at byte offset `index`.
    pub fn foreground_at(&self, index: usize) -> Option<Colour> {
        self.runs
            .iter()
            .rev()
            .filter(|run| run.range.contains(&index))
            .find_map(|run| match run.attribute {
                Attribute::Foreground(c) => Some(c),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn style() -> TextStyle {
        TextStyle::new(Some(Font::new("Inter", 14.0)), Colour::BLACK, 20.0)
    }

    #[test]
    fn test_styled_covers_full_text() {
        let text = AttributedText::styled("Hello", &style()).unwrap();
        assert_eq!(text.as_str(), "Hello");
        assert_eq!(text.runs().len(), 3);
        assert!(text.runs().iter().all(|r| r.range == (0..5)));
    }

    #[test]
    fn test_styled_paragraph_defaults() {
        let text = AttributedText::styled("x", &style().line_spacing(4.0)).unwrap();
        let paragraph = text
            .runs()
            .iter()
            .find_map(|r| match r.attribute {
                Attribute::Paragraph(p) => Some(p),
                _ => None,
            })
            .unwrap();
        assert_eq!(
            paragraph,
            Paragraph {
                alignment: Alignment::Center,
                line_spacing: 4.0,
                max_line_height: 20.0,
                line_height_multiple: 1.0,
            }
        );
    }

    #[test]
    fn test_styled_line_height_multiple() {
        let style = style().line_height_multiple(1.5).alignment(Alignment::Right);
        let text = AttributedText::styled("x", &style).unwrap();
        assert!(text.runs().iter().any(|r| matches!(
            r.attribute,
            Attribute::Paragraph(Paragraph { line_height_multiple, alignment: Alignment::Right, .. })
                if line_height_multiple == 1.5
        )));
    }

    #[test]
    fn test_styled_without_font_fails() {
        let style = TextStyle::new(None, Colour::WHITE, 10.0);
        assert!(AttributedText::styled("x", &style).is_err());
    }

    #[test]
    fn test_highlight_first_occurrence() {
        let red = Colour::rgb(255, 0, 0);
        let text = AttributedText::plain("one two two").highlighted("two", red);
        assert_eq!(text.runs().len(), 1);
        assert_eq!(text.runs()[0].range, 4..7);
        assert_eq!(text.foreground_at(4), Some(red));
        assert_eq!(text.foreground_at(8), None);
    }

    #[test]
    fn test_highlight_missing_is_noop() {
        let mut text = AttributedText::plain("hello");
        assert!(!text.highlight("bye", Colour::WHITE));
        assert!(!text.highlight("", Colour::WHITE));
        assert!(text.runs().is_empty());
    }

    #[test]
    fn test_highlight_overrides_base_colour() {
        let blue = Colour::rgb(0, 0, 255);
        let text = AttributedText::styled("Total: 42", &style())
            .unwrap()
            .highlighted("42", blue);
        assert_eq!(text.foreground_at(0), Some(Colour::BLACK));
        assert_eq!(text.foreground_at(7), Some(blue));
    }
}
