//! The drawable primitive model.
//!
//! A [`Primitive`] is a minimal drawable instruction: a filled rectangle,
//! a stroked line, or a text label. Primitives carry geometry and style
//! only; they are produced fresh by every layout pass and consumed by the
//! SVG exporter, never mutated or cached in between.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Label, StrokeDefinition, SvgNode},
    geometry::{Point, Size},
};

/// A filled, axis-aligned rectangle anchored at its top-left corner.
///
/// Used for both block bars and the water resting on them; the two differ
/// only in fill color and render layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    min: Point,
    size: Size,
    fill: Color,
}

impl Rect {
    /// Creates a rectangle from its top-left corner, size, and fill color.
    pub fn new(min: Point, size: Size, fill: Color) -> Self {
        Self { min, size, fill }
    }

    /// Returns the top-left corner of the rectangle.
    pub fn min_point(&self) -> Point {
        self.min
    }

    /// Returns the dimensions of the rectangle.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the fill color.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Renders this rectangle to an SVG `<rect>` node.
    pub fn render_to_svg(&self) -> SvgNode {
        let rect = svg_element::Rectangle::new()
            .set("x", self.min.x())
            .set("y", self.min.y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha());

        Box::new(rect)
    }
}

/// A straight stroked line between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    from: Point,
    to: Point,
    stroke: StrokeDefinition,
}

impl Line {
    /// Creates a line between two points with the given stroke.
    pub fn new(from: Point, to: Point, stroke: StrokeDefinition) -> Self {
        Self { from, to, stroke }
    }

    /// Returns the start point of the line.
    pub fn from(&self) -> Point {
        self.from
    }

    /// Returns the end point of the line.
    pub fn to(&self) -> Point {
        self.to
    }

    /// Returns the stroke definition for this line.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Renders this line to an SVG `<line>` node.
    pub fn render_to_svg(&self) -> SvgNode {
        let line = svg_element::Line::new()
            .set("x1", self.from.x())
            .set("y1", self.from.y())
            .set("x2", self.to.x())
            .set("y2", self.to.y());
        let line = apply_stroke!(line, self.stroke);

        Box::new(line)
    }
}

/// A minimal drawable instruction with geometry and style, no behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A filled rectangle
    Rect(Rect),
    /// A stroked line
    Line(Line),
    /// A text label
    Label(Label),
}

impl Primitive {
    /// Renders this primitive to the corresponding SVG node.
    pub fn render_to_svg(&self) -> SvgNode {
        match self {
            Self::Rect(rect) => rect.render_to_svg(),
            Self::Line(line) => line.render_to_svg(),
            Self::Label(label) => label.render_to_svg(),
        }
    }

    /// Returns the inner rectangle, if this primitive is one.
    pub fn as_rect(&self) -> Option<&Rect> {
        match self {
            Self::Rect(rect) => Some(rect),
            _ => None,
        }
    }

    /// Returns the inner line, if this primitive is one.
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Self::Line(line) => Some(line),
            _ => None,
        }
    }

    /// Returns the inner label, if this primitive is one.
    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Self::Label(label) => Some(label),
            _ => None,
        }
    }
}

impl From<Rect> for Primitive {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

impl From<Line> for Primitive {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Label> for Primitive {
    fn from(label: Label) -> Self {
        Self::Label(label)
    }
}
