//! Drawable diagram elements and the markup fragments they emit.
//!
//! Every element implements [`Drawable`], turning itself into an ordered list
//! of [`Fragment`]s for a given [`Theme`]. A [`crate::scene::Scene`] appends
//! those fragments in call order, so later elements paint over earlier ones.
//!
//! # Overview
//!
//! - [`LabeledBox`] - A rectangle with vertically centered text lines
//! - [`Arrow`] - A straight connector ending in the shared arrowhead marker
//! - [`Label`] - Free-standing text (titles, captions, listing rows)
//! - [`Marker`] - The reusable arrowhead definition

mod arrow;
mod label;
mod labeled_box;
mod marker;

pub use arrow::Arrow;
pub use label::Label;
pub use labeled_box::{LabeledBox, Lines};
pub use marker::Marker;

use std::fmt;

use crate::{geometry::Bounds, theme::Theme};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// What a fragment depicts. Used for inspection; rendering ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// The `<defs>` block holding reusable markers
    Definitions,
    /// The full-canvas background fill
    Background,
    /// Rectangles: boxes and panels
    Shape,
    /// Text elements
    Text,
    /// Arrows between elements
    Connector,
}

/// A single immutable unit of emitted markup.
#[derive(Debug)]
pub struct Fragment {
    kind: FragmentKind,
    node: SvgNode,
}

impl Fragment {
    pub fn new(kind: FragmentKind, node: impl Into<SvgNode>) -> Self {
        Self {
            kind,
            node: node.into(),
        }
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    /// Consumes the fragment, returning the SVG node for document assembly.
    pub fn into_node(self) -> SvgNode {
        self.node
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.node, f)
    }
}

/// An element that can be turned into SVG fragments.
pub trait Drawable {
    /// Renders the element, in paint order, using `theme` for any style
    /// the element does not override.
    fn render(&self, theme: &Theme) -> Vec<Fragment>;

    /// The area the element occupies on the canvas.
    fn bounds(&self) -> Bounds;
}
