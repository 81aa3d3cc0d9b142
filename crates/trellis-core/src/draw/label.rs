//! Free-standing text: headings, captions and listing rows.

use svg::{
    Node,
    node::{Text as SvgText, element::Element},
};

use crate::{
    draw::{Drawable, Fragment, FragmentKind},
    geometry::{Bounds, Point},
    theme::{TextStyle, Theme},
};

/// A single line of text anchored at a point.
///
/// The anchor's horizontal meaning follows the style's
/// [`TextAnchor`](crate::theme::TextAnchor); `y` is the baseline.
#[derive(Debug, Clone)]
pub struct Label<'a> {
    position: Point,
    content: &'a str,
    style: TextStyle,
}

impl<'a> Label<'a> {
    pub fn new(position: Point, content: &'a str, style: TextStyle) -> Self {
        Self {
            position,
            content,
            style,
        }
    }
}

/// Builds a `<text>` element with its content on the same line as the tags.
///
/// `svg::node::element::Text` writes its content between newlines, which
/// would become part of the parsed text. The text node escapes `&`, `<`
/// and `>`.
pub(crate) fn text_element(content: &str, position: Point, css: &str) -> Element {
    let mut element = Element::new("text");
    element.assign("x", position.x());
    element.assign("y", position.y());
    element.assign("style", css);
    element.append(SvgText::new(content));
    element
}

impl Drawable for Label<'_> {
    fn render(&self, _theme: &Theme) -> Vec<Fragment> {
        let text = text_element(self.content, self.position, &self.style.to_css());
        vec![Fragment::new(FragmentKind::Text, text)]
    }

    // Text extent is not measured; the anchor point stands in for it.
    fn bounds(&self) -> Bounds {
        Bounds::new_from_points(self.position, self.position)
    }
}
