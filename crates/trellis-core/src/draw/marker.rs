//! The arrowhead marker shared by every connector in a document.

use svg::node::element as svg_element;

use crate::{
    draw::{Fragment, FragmentKind},
    theme::Theme,
};

/// A triangular arrowhead declared once per document in `<defs>`.
///
/// The marker is 10 by 7 units with its reference point near the tip, so a
/// line ending at a box edge places the tip on that edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    id: &'static str,
}

impl Marker {
    /// The document's arrowhead marker.
    pub fn arrowhead() -> Self {
        Self { id: "arrowhead" }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Value for a `marker-end` / `marker-start` attribute.
    pub fn reference(&self) -> String {
        format!("url(#{})", self.id)
    }

    /// Renders the `<defs>` block declaring this marker.
    pub fn render_definitions(&self, theme: &Theme) -> Fragment {
        let head = svg_element::Polygon::new()
            .set("points", "0 0, 10 3.5, 0 7")
            .set("fill", theme.marker_fill());

        let marker = svg_element::Marker::new()
            .set("id", self.id)
            .set("markerWidth", 10)
            .set("markerHeight", 7)
            .set("refX", 9)
            .set("refY", 3.5)
            .set("orient", "auto")
            .add(head);

        Fragment::new(
            FragmentKind::Definitions,
            svg_element::Definitions::new().add(marker),
        )
    }
}
