//! Rectangles carrying one or more centered text lines.

use svg::node::element as svg_element;

use crate::{
    draw::{Drawable, Fragment, FragmentKind, label::text_element},
    geometry::{Bounds, Point, Size},
    theme::{BoxStyle, Theme},
};

/// The text lines of a box, top to bottom.
///
/// Converts from a single `&str` or any slice, array or vector of `&str`,
/// so call sites can pass either one label or a stack of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lines<'a>(Vec<&'a str>);

impl<'a> Lines<'a> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.0.iter().copied()
    }
}

impl<'a> From<&'a str> for Lines<'a> {
    fn from(line: &'a str) -> Self {
        Self(vec![line])
    }
}

impl<'a> From<&'a [&'a str]> for Lines<'a> {
    fn from(lines: &'a [&'a str]) -> Self {
        Self(lines.to_vec())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Lines<'a> {
    fn from(lines: [&'a str; N]) -> Self {
        Self(lines.to_vec())
    }
}

impl<'a> From<Vec<&'a str>> for Lines<'a> {
    fn from(lines: Vec<&'a str>) -> Self {
        Self(lines)
    }
}

/// A rectangle with its text block vertically and horizontally centered.
///
/// The first baseline sits at `y + h/2 - (n - 1) * line_height / 2 + baseline_offset`
/// and each further line is one `line_height` lower.
///
/// # Examples
///
/// ```
/// # use trellis_core::draw::LabeledBox;
/// # use trellis_core::theme::Theme;
/// let theme = Theme::default();
/// let stage = LabeledBox::new(30.0, 50.0, 360.0, 62.0, ["Title", "Detail"]);
///
/// let baselines = stage.baselines(&theme);
/// assert_eq!(baselines[0].y(), 77.0);
/// assert_eq!(baselines[1].y(), 93.0);
/// assert_eq!(baselines[0].x(), 210.0);
/// ```
#[derive(Debug, Clone)]
pub struct LabeledBox<'a> {
    bounds: Bounds,
    lines: Lines<'a>,
    style: Option<&'a BoxStyle>,
}

impl<'a> LabeledBox<'a> {
    /// Creates a box at `(x, y)` with size `w` by `h`, styled by the theme's box style.
    pub fn new(x: f32, y: f32, w: f32, h: f32, lines: impl Into<Lines<'a>>) -> Self {
        Self {
            bounds: Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h)),
            lines: lines.into(),
            style: None,
        }
    }

    /// Overrides the theme's box style for this box only.
    pub fn with_style(mut self, style: &'a BoxStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn lines(&self) -> &Lines<'a> {
        &self.lines
    }

    /// Anchor points of each text line: x on the box midline, y on the baseline.
    pub fn baselines(&self, theme: &Theme) -> Vec<Point> {
        let line_height = theme.line_height();
        let center = self.bounds.center();
        let spread = self.lines.len().saturating_sub(1) as f32 * line_height / 2.0;
        let first = center.y() - spread + theme.baseline_offset();

        (0..self.lines.len())
            .map(|i| Point::new(center.x(), first + i as f32 * line_height))
            .collect()
    }
}

impl Drawable for LabeledBox<'_> {
    fn render(&self, theme: &Theme) -> Vec<Fragment> {
        let style = self.style.unwrap_or_else(|| theme.box_style());
        let size = self.bounds.to_size();

        let rect = svg_element::Rectangle::new()
            .set("x", self.bounds.min_x())
            .set("y", self.bounds.min_y())
            .set("width", size.width())
            .set("height", size.height())
            .set("style", style.to_css());

        let mut fragments = Vec::with_capacity(self.lines.len() + 1);
        fragments.push(Fragment::new(FragmentKind::Shape, rect));

        let text_css = theme.text_style().to_css();
        for (line, anchor) in self.lines.iter().zip(self.baselines(theme)) {
            let text = text_element(line, anchor, &text_css);
            fragments.push(Fragment::new(FragmentKind::Text, text));
        }

        fragments
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }
}
