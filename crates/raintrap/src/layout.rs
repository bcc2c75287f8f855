//! Chart layout: heights and water to positioned primitives.
//!
//! The layout pass is a pure function from a [`HeightSequence`], its
//! [`WaterProfile`], and the configuration to a [`ChartLayout`]: a flat
//! list of primitives with render layers. Nothing is drawn here; the
//! exporter realizes the primitives into an output document.
//!
//! Degenerate inputs never divide by zero: an empty sequence produces an
//! empty layout, and an all-zero sequence produces zero-height bars with
//! a single y tick at 0.

use log::{debug, warn};
use thiserror::Error;

use raintrap_core::{
    color::Color,
    draw::{Label, LabelDefinition, Line, Primitive, Rect, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
    profile::{HeightSequence, WaterProfile},
};

use crate::config::AppConfig;

/// Horizontal offset of y tick labels left of the axis.
const Y_LABEL_OFFSET_X: f32 = -20.0;
/// Vertical nudge that centers a y tick label on its tick position.
const Y_LABEL_OFFSET_Y: f32 = 5.0;
/// Offset of block index labels relative to the tick x position.
const X_LABEL_OFFSET_X: f32 = 10.0;
/// Offset of block index labels below the baseline.
const X_LABEL_OFFSET_Y: f32 = 25.0;

/// y tick counts above this threshold get a warning: tick generation is
/// O(max height), not O(block count).
const TICK_WARN_THRESHOLD: u64 = 1_000;

/// Errors produced by the layout pass.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The water profile was computed for a different sequence.
    #[error("water profile length {water} does not match block count {heights}")]
    ProfileMismatch { heights: usize, water: usize },

    /// A configured style color failed to parse.
    #[error("{0}")]
    InvalidColor(String),
}

/// Linear conversion factor from a height unit to a pixel unit.
///
/// A scale only exists when the tallest block is positive; degenerate
/// charts (empty or all-zero) are laid out without one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pixels_per_unit: f32,
}

impl Scale {
    /// Creates the scale mapping `max_height` units onto `span` pixels.
    ///
    /// Returns `None` when `max_height` is zero, where the scale would be
    /// undefined.
    pub fn for_max(span: f32, max_height: u32) -> Option<Self> {
        if max_height == 0 {
            return None;
        }
        Some(Self {
            pixels_per_unit: span / max_height as f32,
        })
    }

    /// Converts a height value to pixels.
    pub fn to_pixels(&self, units: u32) -> f32 {
        units as f32 * self.pixels_per_unit
    }

    /// Returns the pixel size of one height unit.
    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }
}

/// A primitive assigned to a render layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPrimitive {
    layer: RenderLayer,
    primitive: Primitive,
}

impl PlacedPrimitive {
    fn new(layer: RenderLayer, primitive: impl Into<Primitive>) -> Self {
        Self {
            layer,
            primitive: primitive.into(),
        }
    }

    /// Returns the render layer this primitive belongs to.
    pub fn layer(&self) -> RenderLayer {
        self.layer
    }

    /// Returns the primitive itself.
    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }
}

/// The complete set of positioned primitives for one chart.
///
/// The list is deterministic for identical inputs and configuration, and
/// is recreated from scratch on every layout pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartLayout {
    items: Vec<PlacedPrimitive>,
    content_size: Size,
}

impl ChartLayout {
    /// Returns all placed primitives in generation order.
    pub fn items(&self) -> &[PlacedPrimitive] {
        &self.items
    }

    /// Returns `true` if the layout contains no primitives.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the size of the chart content, excluding document margins.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Iterates the primitives on a single render layer.
    pub fn layer_items(&self, layer: RenderLayer) -> impl Iterator<Item = &Primitive> {
        self.items
            .iter()
            .filter(move |placed| placed.layer() == layer)
            .map(PlacedPrimitive::primitive)
    }
}

/// Lays out the chart for the given heights and precomputed water profile.
///
/// # Errors
///
/// Returns [`LayoutError::ProfileMismatch`] when the profile length does
/// not match the height count, or [`LayoutError::InvalidColor`] when a
/// configured style color fails to parse. Degenerate geometry is not an
/// error: an empty sequence yields an empty layout.
pub fn layout(
    heights: &HeightSequence,
    profile: &WaterProfile,
    config: &AppConfig,
) -> Result<ChartLayout, LayoutError> {
    if heights.len() != profile.len() {
        return Err(LayoutError::ProfileMismatch {
            heights: heights.len(),
            water: profile.len(),
        });
    }

    if heights.is_empty() {
        debug!("Empty height sequence; producing empty layout");
        return Ok(ChartLayout::default());
    }

    let chart = config.chart();
    let style = config.style();

    let block_fill = style.block_color().map_err(LayoutError::InvalidColor)?;
    let water_fill = style.water_color().map_err(LayoutError::InvalidColor)?;
    let axis_stroke = style.axis_stroke().map_err(LayoutError::InvalidColor)?;
    let label_def = style.label_definition();

    // max_height is Some: the sequence is non-empty here
    let max_height = heights.max_height().unwrap_or(0);
    let scale = Scale::for_max(chart.span(), max_height);

    let mut items = Vec::new();

    push_axes(
        &mut items,
        config,
        heights.len(),
        max_height,
        scale,
        &axis_stroke,
        &label_def,
    );
    push_blocks(&mut items, config, heights, profile, scale, block_fill, water_fill);

    let blocks_width = chart.margin_x()
        + heights.len() as f32 * (chart.block_width() + chart.gap())
        - chart.gap();
    let content_size = Size::new(blocks_width.max(chart.x_axis_end()), chart.height());

    debug!(
        primitive_count = items.len(),
        block_count = heights.len();
        "Chart layout complete"
    );

    Ok(ChartLayout {
        items,
        content_size,
    })
}

/// Generates axis lines and tick labels.
fn push_axes(
    items: &mut Vec<PlacedPrimitive>,
    config: &AppConfig,
    block_count: usize,
    max_height: u32,
    scale: Option<Scale>,
    axis_stroke: &StrokeDefinition,
    label_def: &LabelDefinition,
) {
    let chart = config.chart();

    // Vertical axis
    items.push(PlacedPrimitive::new(
        RenderLayer::Axis,
        Line::new(
            Point::new(chart.axis_x(), chart.axis_top()),
            Point::new(chart.axis_x(), chart.base_y()),
            axis_stroke.clone(),
        ),
    ));

    // One y tick label per integer height unit up to the tallest block.
    // With no scale (all-zero chart) the axis collapses to a single tick.
    match scale {
        Some(scale) => {
            let tick_count = u64::from(max_height) + 1;
            if tick_count > TICK_WARN_THRESHOLD {
                warn!(
                    tick_count;
                    "y-axis tick generation is proportional to the tallest block"
                );
            }

            for unit in 0..=max_height {
                let y = chart.base_y() - scale.to_pixels(unit) + Y_LABEL_OFFSET_Y;
                items.push(PlacedPrimitive::new(
                    RenderLayer::Text,
                    Label::new(
                        label_def.clone(),
                        Point::new(chart.axis_x() + Y_LABEL_OFFSET_X, y),
                        unit.to_string(),
                    ),
                ));
            }
        }
        None => {
            items.push(PlacedPrimitive::new(
                RenderLayer::Text,
                Label::new(
                    label_def.clone(),
                    Point::new(
                        chart.axis_x() + Y_LABEL_OFFSET_X,
                        chart.base_y() + Y_LABEL_OFFSET_Y,
                    ),
                    "0",
                ),
            ));
        }
    }

    // Horizontal axis
    items.push(PlacedPrimitive::new(
        RenderLayer::Axis,
        Line::new(
            Point::new(chart.axis_x(), chart.base_y()),
            Point::new(chart.x_axis_end(), chart.base_y()),
            axis_stroke.clone(),
        ),
    ));

    // One index label per block
    for index in 0..block_count {
        let x = chart.margin_x() + index as f32 * chart.tick_spacing() + X_LABEL_OFFSET_X;
        items.push(PlacedPrimitive::new(
            RenderLayer::Text,
            Label::new(
                label_def.clone(),
                Point::new(x, chart.base_y() + X_LABEL_OFFSET_Y),
                index.to_string(),
            ),
        ));
    }
}

/// Generates block rectangles and the water rectangles stacked on them.
fn push_blocks(
    items: &mut Vec<PlacedPrimitive>,
    config: &AppConfig,
    heights: &HeightSequence,
    profile: &WaterProfile,
    scale: Option<Scale>,
    block_fill: Color,
    water_fill: Color,
) {
    let chart = config.chart();

    for (index, &height) in heights.values().iter().enumerate() {
        let x = chart.margin_x() + index as f32 * (chart.block_width() + chart.gap());
        let block_px = scale.map_or(0.0, |s| s.to_pixels(height));

        items.push(PlacedPrimitive::new(
            RenderLayer::Block,
            Rect::new(
                Point::new(x, chart.base_y() - block_px),
                Size::new(chart.block_width(), block_px),
                block_fill,
            ),
        ));

        let water = profile.values()[index];
        if water > 0 {
            if let Some(scale) = scale {
                let water_px = scale.to_pixels(water);
                items.push(PlacedPrimitive::new(
                    RenderLayer::Water,
                    Rect::new(
                        Point::new(x, chart.base_y() - block_px - water_px),
                        Size::new(chart.block_width(), water_px),
                        water_fill,
                    ),
                ));
            }
        }
    }
}
