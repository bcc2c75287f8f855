//! Stroke and line-style definitions.
//!
//! This module provides the stroke definition used by axis lines and tick
//! marks. The stroke system follows SVG/CSS terminology and semantics.
//!
//! Exported types:
//! - [`StrokeDefinition`]: The stroke properties (color, width, style)
//! - [`StrokeStyle`]: Line patterns (solid, dashed, dotted, custom)
//! - [`apply_stroke!`](crate::apply_stroke!): Macro for applying stroke
//!   attributes to SVG elements
//!
//! # Example
//!
//! ```
//! use raintrap_core::draw::{StrokeDefinition, StrokeStyle};
//! use raintrap_core::color::Color;
//!
//! // Simple solid stroke
//! let stroke = StrokeDefinition::solid(Color::new("black").unwrap(), 1.0);
//!
//! // Dashed stroke
//! let mut stroke = StrokeDefinition::new(Color::new("black").unwrap(), 1.0);
//! stroke.set_style(StrokeStyle::Dashed);
//! ```

use std::str::FromStr;

use crate::color::Color;

/// Defines the visual style of a stroke, including dash patterns.
///
/// # SVG Mapping
///
/// Each variant maps to specific SVG `stroke-dasharray` values:
/// - `Solid`: No dasharray attribute
/// - `Dashed`: "5,5"
/// - `Dotted`: "2,3"
/// - `Custom(pattern)`: Uses the provided pattern string
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line with equal dash and gap lengths (5px dash, 5px gap)
    Dashed,
    /// Dotted line with small dots (2px dot, 3px gap)
    Dotted,
    /// Custom SVG dasharray pattern
    /// Format: comma or space-separated list of dash/gap lengths
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            // Any other value is treated as a custom dasharray pattern
            _ => Ok(Self::Custom(s.to_string())),
        }
    }
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5".to_string()),
            Self::Dotted => Some("2,3".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }
}

/// A stroke definition for rendering lines.
///
/// # Fields
///
/// - `color`: The stroke color
/// - `width`: The stroke width in pixels (f32 for sub-pixel precision)
/// - `style`: The stroke pattern (solid, dashed, dotted, custom)
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width.
    ///
    /// The style defaults to solid.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::default(),
        }
    }

    /// Creates a solid stroke (convenience constructor).
    ///
    /// This is equivalent to `StrokeDefinition::new(color, width)` since
    /// solid is the default style.
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Sets the stroke style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// This macro applies the complete stroke definition including color,
/// opacity, width, and dash pattern (if not solid) to any SVG element.
///
/// # Examples
///
/// ```
/// use raintrap_core::draw::StrokeDefinition;
/// use raintrap_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::solid(Color::new("black").unwrap(), 1.0);
/// let line = svg_element::Line::new()
///     .set("x1", 50)
///     .set("y1", 20)
///     .set("x2", 50)
///     .set("y2", 260);
///
/// let line = raintrap_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}
