//! Per-document fragment collection and SVG serialization.
//!
//! A [`Scene`] owns the ordered fragments of one diagram. Creating it emits
//! the arrowhead definitions and the background; each `draw_*` call appends
//! more fragments; [`Scene::finish`] consumes the scene and joins everything
//! into a single SVG string.
//!
//! # Example
//!
//! ```
//! # use trellis_core::{scene::{Canvas, Scene}, theme::Theme};
//! let theme = Theme::default();
//! let mut scene = Scene::new(Canvas::new(380.0, 280.0), &theme);
//!
//! scene.draw_box(140.0, 20.0, 100.0, 40.0, "Boot");
//! scene.draw_vertical_arrow(190.0, 60.0, 85.0);
//! scene.draw_box(140.0, 85.0, 100.0, 40.0, ["Home", "(start screen)"]);
//!
//! let svg = scene.finish();
//! assert!(svg.contains("Boot"));
//! assert!(svg.ends_with("</svg>"));
//! ```

use log::{debug, trace, warn};
use svg::{Document, node::element as svg_element};

use crate::{
    draw::{Arrow, Drawable, Fragment, FragmentKind, Label, LabeledBox, Lines, Marker},
    geometry::{Bounds, Point, Size},
    theme::{BoxStyle, TextStyle, Theme},
};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Baseline of the heading drawn by [`Scene::draw_title`].
const TITLE_BASELINE: f32 = 28.0;

/// The drawing surface of one diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    size: Size,
}

impl Canvas {
    /// Creates a canvas filled with the theme's background color.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.width()
    }

    pub fn height(&self) -> f32 {
        self.size.height()
    }

    /// The full canvas area, anchored at the origin.
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(Point::default(), self.size)
    }
}

/// Ordered collection of fragments for one SVG document.
///
/// Fragments render in insertion order: later draws paint over earlier ones.
#[derive(Debug)]
pub struct Scene<'t> {
    canvas: Canvas,
    theme: &'t Theme,
    fragments: Vec<Fragment>,
}

impl<'t> Scene<'t> {
    /// Starts a document: arrowhead definitions first, then the background.
    pub fn new(canvas: Canvas, theme: &'t Theme) -> Self {
        debug!(width = canvas.width(), height = canvas.height(); "Starting scene");

        let rect = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", canvas.width())
            .set("height", canvas.height())
            .set("fill", theme.background());

        let fragments = vec![
            Marker::arrowhead().render_definitions(theme),
            Fragment::new(FragmentKind::Background, rect),
        ];

        Self {
            canvas,
            theme,
            fragments,
        }
    }

    /// Appends the fragments of any drawable.
    ///
    /// Drawables reaching outside the canvas are still emitted; placement
    /// is the caller's responsibility, so this only logs a warning.
    pub fn draw(&mut self, drawable: &impl Drawable) {
        let bounds = drawable.bounds();
        if !self.canvas.bounds().contains(&bounds) {
            warn!(
                min_x = bounds.min_x(),
                min_y = bounds.min_y(),
                max_x = bounds.max_x(),
                max_y = bounds.max_y();
                "Drawable extends beyond the canvas"
            );
        }

        let fragments = drawable.render(self.theme);
        trace!(count = fragments.len(); "Appending fragments");
        self.fragments.extend(fragments);
    }

    /// Draws a box in the theme's box style with its lines vertically centered.
    pub fn draw_box<'a>(&mut self, x: f32, y: f32, w: f32, h: f32, lines: impl Into<Lines<'a>>) {
        self.draw(&LabeledBox::new(x, y, w, h, lines));
    }

    /// Draws a box with an explicit style instead of the theme's box style.
    pub fn draw_styled_box<'a>(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        lines: impl Into<Lines<'a>>,
        style: &'a BoxStyle,
    ) {
        self.draw(&LabeledBox::new(x, y, w, h, lines).with_style(style));
    }

    /// Draws an unlabeled frame in the theme's panel style.
    pub fn draw_panel(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let theme = self.theme;
        self.draw(&LabeledBox::new(x, y, w, h, Lines::default()).with_style(theme.panel_style()));
    }

    /// Draws an arrow from `(x1, y1)` to `(x2, y2)`.
    pub fn draw_arrow(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.draw(&Arrow::new(Point::new(x1, y1), Point::new(x2, y2)));
    }

    /// Draws a vertical arrow at `x` from `y1` to `y2`.
    pub fn draw_vertical_arrow(&mut self, x: f32, y1: f32, y2: f32) {
        self.draw(&Arrow::vertical(x, y1, y2));
    }

    /// Draws text with an explicit style at a baseline point.
    pub fn draw_label(&mut self, x: f32, y: f32, text: &str, style: TextStyle) {
        self.draw(&Label::new(Point::new(x, y), text, style));
    }

    /// Draws the centered heading near the top of the canvas.
    pub fn draw_title(&mut self, text: &str) {
        let x = self.canvas.width() / 2.0;
        let style = self.theme.title_style();
        self.draw_label(x, TITLE_BASELINE, text, style);
    }

    /// Serializes the document, consuming the scene.
    pub fn finish(self) -> String {
        let document = Document::new()
            .set("xmlns", SVG_NAMESPACE)
            .set(
                "viewBox",
                format!("0 0 {} {}", self.canvas.width(), self.canvas.height()),
            )
            .set("width", "100%");

        let fragments_len = self.fragments.len();
        let document = self
            .fragments
            .into_iter()
            .fold(document, |document, fragment| document.add(fragment.into_node()));

        debug!(fragments_len; "Scene finished");
        document.to_string()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::color::Color;

    fn count(scene: &Scene, kind: FragmentKind) -> usize {
        scene
            .fragments
            .iter()
            .filter(|fragment| fragment.kind() == kind)
            .count()
    }

    fn parse_text_nodes(svg: &str) -> Vec<String> {
        let doc = roxmltree::Document::parse(svg).expect("scene output should be well-formed XML");
        doc.descendants()
            .filter(|node| node.has_tag_name("text"))
            .map(|node| node.text().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_new_scene_has_definitions_then_background() {
        let theme = Theme::default();
        let scene = Scene::new(Canvas::new(100.0, 50.0), &theme);

        let kinds: Vec<_> = scene.fragments.iter().map(Fragment::kind).collect();
        assert_eq!(kinds, vec![FragmentKind::Definitions, FragmentKind::Background]);

        let background = scene.fragments[1].to_string();
        assert!(background.contains(r#"width="100""#));
        assert!(background.contains(r##"fill="#ffffff""##));
    }

    #[test]
    fn test_background_follows_theme() {
        let theme = Theme::default().with_background(Color::new("#000").unwrap());
        let scene = Scene::new(Canvas::new(10.0, 10.0), &theme);

        assert!(scene.fragments[1].to_string().contains(r##"fill="#000""##));
    }

    #[test]
    fn test_styled_box_overrides_theme_style() {
        let theme = Theme::default();
        let highlight = BoxStyle::new(Color::new("#ffe").unwrap(), Color::new("#c00").unwrap(), 3.0);
        let mut scene = Scene::new(Canvas::new(200.0, 100.0), &theme);

        scene.draw_styled_box(10.0, 10.0, 180.0, 40.0, ["Sim HAL", "(desktop)"], &highlight);
        scene.draw_box(10.0, 55.0, 180.0, 40.0, "Device HAL");

        assert_eq!(count(&scene, FragmentKind::Shape), 2);
        assert_eq!(count(&scene, FragmentKind::Text), 3);

        let styled = scene.fragments[2].to_string();
        assert!(styled.contains("fill:#ffe;stroke:#c00;stroke-width:3"), "{styled}");
        let plain = scene.fragments[5].to_string();
        assert!(plain.contains("fill:#fff;stroke:#333;stroke-width:1.5"), "{plain}");
    }

    #[test]
    fn test_fragments_keep_call_order() {
        let theme = Theme::default();
        let mut scene = Scene::new(Canvas::new(200.0, 200.0), &theme);

        scene.draw_title("Title");
        scene.draw_box(10.0, 40.0, 100.0, 30.0, "Box");
        scene.draw_vertical_arrow(60.0, 70.0, 100.0);
        scene.draw_panel(5.0, 5.0, 190.0, 190.0);

        let kinds: Vec<_> = scene.fragments.iter().skip(2).map(Fragment::kind).collect();
        assert_eq!(
            kinds,
            vec![
                FragmentKind::Text,
                FragmentKind::Shape,
                FragmentKind::Text,
                FragmentKind::Connector,
                FragmentKind::Shape,
            ]
        );
        assert_eq!(count(&scene, FragmentKind::Shape), 2);
        assert_eq!(count(&scene, FragmentKind::Connector), 1);
    }

    #[test]
    fn test_finish_produces_single_svg_root() {
        let theme = Theme::default();
        let mut scene = Scene::new(Canvas::new(380.0, 280.0), &theme);
        scene.draw_box(130.0, 20.0, 120.0, 40.0, "Boot");
        scene.draw_arrow(190.0, 60.0, 190.0, 85.0);

        let svg = scene.finish();
        let doc = roxmltree::Document::parse(&svg).expect("well-formed");
        let root = doc.root_element();

        assert_eq!(root.tag_name().name(), "svg");
        assert_eq!(root.tag_name().namespace(), Some("http://www.w3.org/2000/svg"));
        assert_eq!(root.attribute("viewBox"), Some("0 0 380 280"));
        assert_eq!(root.attribute("width"), Some("100%"));
        assert_eq!(
            doc.descendants().filter(|n| n.has_tag_name("marker")).count(),
            1
        );
    }

    #[test]
    fn test_finish_is_deterministic() {
        let theme = Theme::default();
        let render = || {
            let mut scene = Scene::new(Canvas::new(120.0, 120.0), &theme);
            scene.draw_box(10.0, 10.0, 100.0, 40.0, ["a", "b"]);
            scene.draw_vertical_arrow(60.0, 50.0, 70.0);
            scene.finish()
        };

        assert_eq!(render(), render());
    }

    #[test]
    fn test_off_canvas_drawables_are_still_emitted() {
        let theme = Theme::default();
        let mut scene = Scene::new(Canvas::new(50.0, 50.0), &theme);
        scene.draw_box(40.0, 40.0, 100.0, 100.0, "overflow");

        assert_eq!(count(&scene, FragmentKind::Shape), 1);
        assert!(scene.finish().contains("overflow"));
    }

    #[test]
    fn test_escaped_label_round_trips() {
        let theme = Theme::default();
        let mut scene = Scene::new(Canvas::new(200.0, 60.0), &theme);
        scene.draw_box(0.0, 0.0, 200.0, 60.0, "A & B < C");

        let svg = scene.finish();
        assert!(svg.contains("A &amp; B &lt; C"));
        assert_eq!(parse_text_nodes(&svg), vec!["A & B < C".to_string()]);
    }

    fn check_label_text_round_trips(lines: Vec<String>) -> Result<(), TestCaseError> {
        let theme = Theme::default();
        let mut scene = Scene::new(Canvas::new(400.0, 400.0), &theme);
        let borrowed: Vec<&str> = lines.iter().map(String::as_str).collect();
        scene.draw_box(10.0, 10.0, 380.0, 380.0, borrowed);

        let parsed = parse_text_nodes(&scene.finish());
        prop_assert_eq!(parsed, lines);
        Ok(())
    }

    proptest! {
        #[test]
        fn label_text_round_trips(lines in prop::collection::vec("[a-zA-Z&<>][a-zA-Z0-9 &<>;#]{0,23}", 1..6)) {
            check_label_text_round_trips(lines)?;
        }
    }
}
