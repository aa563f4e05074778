//! Configure a value in place and keep using it.

/// Adds `apply` to every sized type.
///
/// ```
/// use uxkit::Apply;
///
/// let items = Vec::new().apply(|v| v.push(1));
/// assert_eq!(items, vec![1]);
/// ```
pub trait Apply: Sized {
    /// Run `configure` on `self`, then return it.
    fn apply(mut self, configure: impl FnOnce(&mut Self)) -> Self {
        configure(&mut self);
        self
    }
}

impl<T> Apply for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{Alignment, Font, TextStyle};
    use crate::types::Colour;

    #[test]
    fn test_apply_configures_style() {
        let style = TextStyle::new(Some(Font::new("Inter", 12.0)), Colour::BLACK, 16.0).apply(|s| {
            s.alignment = Alignment::Left;
            s.line_spacing = 2.0;
        });
        assert_eq!(style.alignment, Alignment::Left);
        assert_eq!(style.line_spacing, 2.0);
    }
}
