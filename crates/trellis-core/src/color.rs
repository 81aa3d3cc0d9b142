//! Color handling for Trellis diagrams
//!
//! This module provides the [`Color`] type which validates CSS color strings
//! with the `DynamicColor` type from the color crate. A color is written back
//! out exactly as it was authored (`#333` stays `#333`).

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A validated CSS color that remembers its authored spelling.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    source: String,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_core::color::Color;
    ///
    /// let stroke = Color::new("#333").unwrap();
    /// assert_eq!(stroke.to_string(), "#333");
    ///
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        let source = color_str.trim();
        match DynamicColor::from_str(source) {
            Ok(_) => Ok(Self {
                source: source.to_string(),
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Parses a color that is known to be valid at compile time.
    pub(crate) fn builtin(color_str: &'static str) -> Self {
        Self::new(color_str).unwrap_or_else(|err| panic!("built-in color is invalid: {err}"))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::builtin("black")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert!(red.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "black");
    }

    #[test]
    fn test_color_keeps_authored_spelling() {
        assert_eq!(Color::new("#fff").unwrap().to_string(), "#fff");
        assert_eq!(Color::new("  #fafafa ").unwrap().to_string(), "#fafafa");
        assert_eq!(
            Color::new("rgb(1, 2, 3)").unwrap().to_string(),
            "rgb(1, 2, 3)"
        );
    }

    #[test]
    fn test_color_error_mentions_input() {
        let err = Color::new("#zzzzzz").unwrap_err();
        assert!(err.contains("#zzzzzz"), "unexpected error: {err}");
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::new("red").unwrap();
        let color2 = Color::new("red").unwrap();
        let color3 = Color::new("blue").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
