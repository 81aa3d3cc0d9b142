//! Styling configuration shared by every drawing primitive.
//!
//! A [`Theme`] is a single immutable value handed by reference to the
//! primitives in [`crate::draw`]. It carries the recognized style groups
//! (font, box style, arrow style, text style) plus the typographic constants
//! used for vertically centering multi-line labels.
//!
//! Styles serialize to inline CSS `style` attributes so the generated SVG has
//! no external stylesheet dependency.
//!
//! # Example
//!
//! ```
//! # use trellis_core::theme::Theme;
//! let theme = Theme::default();
//! assert_eq!(theme.box_style().to_css(), "fill:#fff;stroke:#333;stroke-width:1.5");
//! assert_eq!(
//!     theme.text_style().to_css(),
//!     "font:14px system-ui, -apple-system, sans-serif;fill:#111;text-anchor:middle"
//! );
//! ```

use std::{fmt, sync::OnceLock};

use crate::color::Color;

/// Process-wide default theme, initialized on first use and never mutated.
static DEFAULT_THEME: OnceLock<Theme> = OnceLock::new();

/// A CSS `font` shorthand: optional bold weight, pixel size and family list.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: String,
    size: u16,
    bold: bool,
}

impl Font {
    /// Creates a regular-weight font.
    ///
    /// # Arguments
    ///
    /// * `family` - CSS font-family list, e.g. `"system-ui, sans-serif"`.
    /// * `size` - Font size in pixels.
    pub fn new(family: &str, size: u16) -> Self {
        Self {
            family: family.to_string(),
            size,
            bold: false,
        }
    }

    /// Returns a bold copy of this font.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Returns a copy with a different family list.
    pub fn with_family(mut self, family: &str) -> Self {
        self.family = family.to_string();
        self
    }

    /// Returns a copy with a different pixel size.
    pub fn with_size(mut self, size: u16) -> Self {
        self.size = size;
        self
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size(&self) -> u16 {
        self.size
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bold {
            f.write_str("bold ")?;
        }
        write!(f, "{}px {}", self.size, self.family)
    }
}

/// Horizontal alignment of a text element relative to its anchor x.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Left-aligned, used for listings such as directory trees.
    Start,
    /// Centered on the anchor (default).
    #[default]
    Middle,
}

impl TextAnchor {
    /// Returns the CSS `text-anchor` value
    pub fn to_css_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// Font, fill color and alignment of a text element.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    font: Font,
    color: Color,
    anchor: TextAnchor,
}

impl TextStyle {
    pub fn new(font: Font, color: Color, anchor: TextAnchor) -> Self {
        Self {
            font,
            color,
            anchor,
        }
    }

    /// Returns a copy with a different anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    /// Serializes to an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        format!(
            "font:{};fill:{};text-anchor:{}",
            self.font,
            self.color,
            self.anchor.to_css_value()
        )
    }
}

/// Fill and outline of a rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStyle {
    fill: Color,
    stroke: Color,
    stroke_width: f32,
}

impl BoxStyle {
    pub fn new(fill: Color, stroke: Color, stroke_width: f32) -> Self {
        Self {
            fill,
            stroke,
            stroke_width,
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn fill(&self) -> &Color {
        &self.fill
    }

    pub fn stroke(&self) -> &Color {
        &self.stroke
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Serializes to an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        format!(
            "fill:{};stroke:{};stroke-width:{}",
            self.fill, self.stroke, self.stroke_width
        )
    }
}

/// Stroke of an unfilled line such as an arrow shaft.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    stroke: Color,
    stroke_width: f32,
}

impl LineStyle {
    pub fn new(stroke: Color, stroke_width: f32) -> Self {
        Self {
            stroke,
            stroke_width,
        }
    }

    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn stroke(&self) -> &Color {
        &self.stroke
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Serializes to an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        format!(
            "stroke:{};stroke-width:{};fill:none",
            self.stroke, self.stroke_width
        )
    }
}

/// Immutable styling configuration for a diagram.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font | `14px system-ui, -apple-system, sans-serif` |
/// | Text color | `#111` |
/// | Box style | fill `#fff`, stroke `#333`, width `1.5` |
/// | Arrow style | stroke `#333`, width `1.5` |
/// | Panel style | fill `#fafafa`, stroke `#333`, width `2` |
/// | Title font | `bold 16px system-ui` |
/// | Caption | `11px system-ui`, color `#666` |
/// | Background | `#ffffff` |
/// | Line height | `16` |
/// | Baseline offset | `4` |
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    font: Font,
    text_color: Color,
    box_style: BoxStyle,
    arrow_style: LineStyle,
    panel_style: BoxStyle,
    title_font: Font,
    caption_font: Font,
    caption_color: Color,
    background: Color,
    line_height: f32,
    baseline_offset: f32,
}

impl Theme {
    /// Returns a reference to the process-wide default theme.
    pub fn default_borrowed() -> &'static Self {
        DEFAULT_THEME.get_or_init(Theme::default)
    }

    /// Returns a copy using `font` for box labels and listings.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Returns a copy with a different body text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_box_style(mut self, style: BoxStyle) -> Self {
        self.box_style = style;
        self
    }

    /// Returns a copy with a different arrow style; the arrowhead marker follows its color.
    pub fn with_arrow_style(mut self, style: LineStyle) -> Self {
        self.arrow_style = style;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Returns a copy with a different distance between label baselines.
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn box_style(&self) -> &BoxStyle {
        &self.box_style
    }

    pub fn arrow_style(&self) -> &LineStyle {
        &self.arrow_style
    }

    /// Centered body text, used for box labels.
    pub fn text_style(&self) -> TextStyle {
        TextStyle::new(self.font.clone(), self.text_color.clone(), TextAnchor::Middle)
    }

    /// Left-aligned body text, used for structured listings.
    pub fn listing_style(&self) -> TextStyle {
        self.text_style().with_anchor(TextAnchor::Start)
    }

    /// Centered diagram heading.
    pub fn title_style(&self) -> TextStyle {
        TextStyle::new(
            self.title_font.clone(),
            self.text_color.clone(),
            TextAnchor::Middle,
        )
    }

    /// Small centered footnote text.
    pub fn caption_style(&self) -> TextStyle {
        TextStyle::new(
            self.caption_font.clone(),
            self.caption_color.clone(),
            TextAnchor::Middle,
        )
    }

    /// Style of unlabeled framing rectangles.
    pub fn panel_style(&self) -> &BoxStyle {
        &self.panel_style
    }

    pub fn background(&self) -> &Color {
        &self.background
    }

    /// Fill of the arrowhead marker.
    pub fn marker_fill(&self) -> &Color {
        self.arrow_style.stroke()
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Shift from the geometric center to the typographic baseline.
    pub fn baseline_offset(&self) -> f32 {
        self.baseline_offset
    }
}

impl Default for Theme {
    fn default() -> Self {
        let ink = Color::builtin("#333");
        Self {
            font: Font::new("system-ui, -apple-system, sans-serif", 14),
            text_color: Color::builtin("#111"),
            box_style: BoxStyle::new(Color::builtin("#fff"), ink.clone(), 1.5),
            arrow_style: LineStyle::new(ink.clone(), 1.5),
            panel_style: BoxStyle::new(Color::builtin("#fafafa"), ink, 2.0),
            title_font: Font::new("system-ui", 16).bold(),
            caption_font: Font::new("system-ui", 11),
            caption_color: Color::builtin("#666"),
            background: Color::builtin("#ffffff"),
            line_height: 16.0,
            baseline_offset: 4.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_display() {
        assert_eq!(Font::new("system-ui", 11).to_string(), "11px system-ui");
        assert_eq!(
            Font::new("system-ui", 16).bold().to_string(),
            "bold 16px system-ui"
        );
        assert_eq!(
            Font::new("serif", 12).with_size(20).with_family("monospace").to_string(),
            "20px monospace"
        );
    }

    #[test]
    fn test_default_styles_css() {
        let theme = Theme::default();

        assert_eq!(
            theme.arrow_style().to_css(),
            "stroke:#333;stroke-width:1.5;fill:none"
        );
        assert_eq!(
            theme.panel_style().to_css(),
            "fill:#fafafa;stroke:#333;stroke-width:2"
        );
        assert_eq!(
            theme.listing_style().to_css(),
            "font:14px system-ui, -apple-system, sans-serif;fill:#111;text-anchor:start"
        );
        assert_eq!(
            theme.title_style().to_css(),
            "font:bold 16px system-ui;fill:#111;text-anchor:middle"
        );
        assert_eq!(
            theme.caption_style().to_css(),
            "font:11px system-ui;fill:#666;text-anchor:middle"
        );
    }

    #[test]
    fn test_marker_follows_arrow_color() {
        let theme = Theme::default().with_arrow_style(LineStyle::new(Color::new("red").unwrap(), 2.0));
        assert_eq!(theme.marker_fill().to_string(), "red");
    }

    #[test]
    fn test_default_borrowed_matches_default() {
        assert_eq!(Theme::default_borrowed(), &Theme::default());
        assert_eq!(Theme::default_borrowed().line_height(), 16.0);
        assert_eq!(Theme::default_borrowed().baseline_offset(), 4.0);
    }

    #[test]
    fn test_with_font_changes_body_text_only() {
        let theme = Theme::default().with_font(Font::new("serif", 18));
        assert_eq!(theme.text_style().font().to_string(), "18px serif");
        assert_eq!(theme.title_style().font().to_string(), "bold 16px system-ui");
    }
}
