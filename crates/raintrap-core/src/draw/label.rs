//! Text label definitions for axis ticks and annotations.
//!
//! - [`LabelDefinition`] - Reusable label style configuration
//! - [`Label`] - A positioned, renderable text label
//!
//! Labels are rendered as plain SVG `<text>` elements. Unlike full text
//! layout systems there is no measurement or wrapping here: a chart label
//! is a short numeric string anchored at a precomputed position.

use svg::node::{Text as SvgText, element as svg_element};

use crate::{color::Color, draw::SvgNode, geometry::Point};

/// Defines the visual style for chart labels.
///
/// Multiple [`Label`]s share the same definition for consistent styling.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `12` |
/// | Text color | `None` (SVG default, typically black) |
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDefinition {
    font_family: String,
    font_size: u16,
    color: Option<Color>,
}

impl LabelDefinition {
    /// Creates a new label definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family for the label text.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the text color.
    ///
    /// When `None`, the SVG default color (usually black) is used.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    fn font_size(&self) -> u16 {
        self.font_size
    }

    fn font_family(&self) -> &str {
        &self.font_family
    }

    fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

impl Default for LabelDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 12,
            color: None,
        }
    }
}

/// A positioned text label.
///
/// Pairs a string with a position and a [`LabelDefinition`]. The position
/// is the SVG text anchor point (baseline-left).
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    definition: LabelDefinition,
    position: Point,
    content: String,
}

impl Label {
    /// Creates a new label with the given style, position and content.
    pub fn new(definition: LabelDefinition, position: Point, content: impl Into<String>) -> Self {
        Self {
            definition,
            position,
            content: content.into(),
        }
    }

    /// Returns the anchor position of this label.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the text content of this label.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Renders this label to an SVG `<text>` node.
    pub fn render_to_svg(&self) -> SvgNode {
        let mut text = svg_element::Text::new("")
            .set("x", self.position.x())
            .set("y", self.position.y())
            .set("font-size", self.definition.font_size())
            .set("font-family", self.definition.font_family());

        if let Some(color) = self.definition.color() {
            text = text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        Box::new(text.add(SvgText::new(&self.content)))
    }
}
