//! Drawable primitives and the layered SVG output system.
//!
//! A chart layout is a flat list of primitives: filled rectangles for
//! blocks and water, lines for axes, and text labels for ticks. Each
//! primitive carries only geometry and style and knows how to render
//! itself to an SVG node; z-ordering is handled by [`RenderLayer`] and
//! [`LayeredOutput`].

mod label;
mod layer;
mod primitive;
mod stroke;

pub use label::{Label, LabelDefinition};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use primitive::{Line, Primitive, Rect};
pub use stroke::{StrokeDefinition, StrokeStyle};
