//! Straight directed connectors.

use svg::node::element as svg_element;

use crate::{
    draw::{Drawable, Fragment, FragmentKind, Marker},
    geometry::{Bounds, Point},
    theme::{LineStyle, Theme},
};

/// A straight line from `start` to `end` with the arrowhead marker at `end`.
///
/// The head is oriented by the renderer (`orient="auto"` on the marker), so
/// no angle is computed here.
#[derive(Debug, Clone)]
pub struct Arrow<'a> {
    start: Point,
    end: Point,
    style: Option<&'a LineStyle>,
}

impl<'a> Arrow<'a> {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            style: None,
        }
    }

    /// A vertical connector at `x` from `y1` down (or up) to `y2`.
    pub fn vertical(x: f32, y1: f32, y2: f32) -> Self {
        Self::new(Point::new(x, y1), Point::new(x, y2))
    }

    /// Overrides the theme's arrow style for this arrow only.
    pub fn with_style(mut self, style: &'a LineStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }
}

impl Drawable for Arrow<'_> {
    fn render(&self, theme: &Theme) -> Vec<Fragment> {
        let style = self.style.unwrap_or_else(|| theme.arrow_style());

        let line = svg_element::Line::new()
            .set("x1", self.start.x())
            .set("y1", self.start.y())
            .set("x2", self.end.x())
            .set("y2", self.end.y())
            .set("style", style.to_css())
            .set("marker-end", Marker::arrowhead().reference());

        vec![Fragment::new(FragmentKind::Connector, line)]
    }

    fn bounds(&self) -> Bounds {
        Bounds::new_from_points(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_vertical_arrow_shares_x() {
        let arrow = Arrow::vertical(190.0, 60.0, 85.0);
        assert_eq!(arrow.start(), Point::new(190.0, 60.0));
        assert_eq!(arrow.end(), Point::new(190.0, 85.0));
        assert_eq!(arrow.bounds().width(), 0.0);
        assert_eq!(arrow.bounds().height(), 25.0);
    }

    #[test]
    fn test_render_references_marker() {
        let theme = Theme::default();
        let fragments = Arrow::new(Point::new(200.0, 85.0), Point::new(320.0, 85.0)).render(&theme);

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].kind(), FragmentKind::Connector);

        let markup = fragments[0].to_string();
        assert!(markup.starts_with("<line"));
        assert!(markup.contains(r#"marker-end="url(#arrowhead)""#));
        assert!(markup.contains(r#"x1="200""#));
        assert!(markup.contains(r#"x2="320""#));
        assert!(markup.contains("stroke:#333;stroke-width:1.5;fill:none"));
    }

    #[test]
    fn test_style_override() {
        let theme = Theme::default();
        let dashed = LineStyle::new(Color::new("#c00").unwrap(), 3.0);
        let fragments = Arrow::vertical(0.0, 0.0, 10.0)
            .with_style(&dashed)
            .render(&theme);

        assert!(fragments[0].to_string().contains("stroke:#c00;stroke-width:3;"));
    }

    #[test]
    fn test_bounds_of_diagonal_arrow() {
        let arrow = Arrow::new(Point::new(240.0, 220.0), Point::new(140.0, 260.0));
        let bounds = arrow.bounds();
        assert_eq!(bounds.min_x(), 140.0);
        assert_eq!(bounds.max_x(), 240.0);
        assert_eq!(bounds.min_y(), 220.0);
        assert_eq!(bounds.max_y(), 260.0);
    }
}
