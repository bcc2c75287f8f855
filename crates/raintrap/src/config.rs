//! Configuration types for raintrap chart rendering.
//!
//! This module provides configuration structures that control chart
//! geometry and styling. All types implement [`serde::Deserialize`] for
//! loading from TOML config files; every field is optional and falls back
//! to the defaults of the reference chart (300px tall, baseline at y=260,
//! 40px blocks with 10px gaps, 180px vertical span).
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining chart and style settings.
//! - [`ChartConfig`] - Chart geometry: baseline, block width, margins, axis extents.
//! - [`StyleConfig`] - Visual styling: fill colors, axis stroke, label font.
//!
//! # Example
//!
//! ```
//! # use raintrap::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.chart().base_y(), 260.0);
//! assert!(config.style().block_color().is_ok());
//! ```

use serde::Deserialize;

use raintrap_core::{
    color::Color,
    draw::{LabelDefinition, StrokeDefinition, StrokeStyle},
};

/// Top-level application configuration combining chart and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Chart geometry section.
    chart: ChartConfig,

    /// Style section.
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified chart and style configurations.
    pub fn new(chart: ChartConfig, style: StyleConfig) -> Self {
        Self { chart, style }
    }

    /// Returns the chart geometry configuration.
    pub fn chart(&self) -> &ChartConfig {
        &self.chart
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Chart geometry configuration.
///
/// All values are in SVG user units (pixels). The defaults reproduce the
/// reference chart: blocks sit on a baseline at y=260 inside a 300px-tall
/// document, and a height unit maps to `span / max_height` pixels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Total document height.
    height: f32,
    /// Baseline y-coordinate that blocks stand on.
    base_y: f32,
    /// Width of each block rectangle.
    block_width: f32,
    /// Horizontal gap between adjacent blocks.
    gap: f32,
    /// x-coordinate of the first block.
    margin_x: f32,
    /// x-coordinate of the vertical axis.
    axis_x: f32,
    /// Top y-coordinate of the vertical axis.
    axis_top: f32,
    /// Vertical drawable span mapped onto the tallest block.
    span: f32,
    /// Right end of the horizontal axis.
    x_axis_end: f32,
    /// Horizontal spacing of block index labels.
    tick_spacing: f32,
}

impl ChartConfig {
    /// Returns the total document height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the baseline y-coordinate.
    pub fn base_y(&self) -> f32 {
        self.base_y
    }

    /// Returns the block width.
    pub fn block_width(&self) -> f32 {
        self.block_width
    }

    /// Returns the gap between blocks.
    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Returns the x-coordinate of the first block.
    pub fn margin_x(&self) -> f32 {
        self.margin_x
    }

    /// Returns the x-coordinate of the vertical axis.
    pub fn axis_x(&self) -> f32 {
        self.axis_x
    }

    /// Returns the top y-coordinate of the vertical axis.
    pub fn axis_top(&self) -> f32 {
        self.axis_top
    }

    /// Returns the vertical drawable span.
    pub fn span(&self) -> f32 {
        self.span
    }

    /// Returns the right end of the horizontal axis.
    pub fn x_axis_end(&self) -> f32 {
        self.x_axis_end
    }

    /// Returns the spacing of block index labels.
    pub fn tick_spacing(&self) -> f32 {
        self.tick_spacing
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: 300.0,
            base_y: 260.0,
            block_width: 40.0,
            gap: 10.0,
            margin_x: 60.0,
            axis_x: 50.0,
            axis_top: 20.0,
            span: 180.0,
            x_axis_end: 820.0,
            tick_spacing: 50.0,
        }
    }
}

/// Visual styling configuration for rendered charts.
///
/// Colors are stored as CSS color strings and parsed on access, so a bad
/// value in a config file surfaces as an error instead of a panic.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Fill color for block rectangles, as a CSS color string.
    block_color: String,
    /// Fill color for water rectangles, as a CSS color string.
    water_color: String,
    /// Stroke color for axis lines.
    axis_color: String,
    /// Stroke width for axis lines.
    axis_width: f32,
    /// Stroke style for axis lines (`solid`, `dashed`, `dotted`, or a
    /// custom dasharray).
    axis_style: String,
    /// Font family for tick labels.
    label_font_family: String,
    /// Font size for tick labels.
    label_font_size: u16,
    /// Optional document background [`Color`], as a CSS color string.
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed block fill [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn block_color(&self) -> Result<Color, String> {
        Color::new(&self.block_color)
    }

    /// Returns the parsed water fill [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn water_color(&self) -> Result<Color, String> {
        Color::new(&self.water_color)
    }

    /// Builds the axis [`StrokeDefinition`] from the configured color,
    /// width, and style.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured axis color cannot be parsed.
    pub fn axis_stroke(&self) -> Result<StrokeDefinition, String> {
        let mut stroke = StrokeDefinition::new(Color::new(&self.axis_color)?, self.axis_width);
        // Unrecognized style strings become custom dasharray patterns
        stroke.set_style(
            self.axis_style
                .parse::<StrokeStyle>()
                .unwrap_or(StrokeStyle::Solid),
        );
        Ok(stroke)
    }

    /// Builds the tick-label [`LabelDefinition`] from the configured font
    /// settings.
    pub fn label_definition(&self) -> LabelDefinition {
        let mut definition = LabelDefinition::new();
        definition.set_font_family(&self.label_font_family);
        definition.set_font_size(self.label_font_size);
        definition
    }

    /// Returns the parsed background [`Color`], or `None` if no background
    /// is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("invalid background color in config: {err}"))
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            block_color: "#6b7280".to_string(),
            water_color: "#38bdf8".to_string(),
            axis_color: "black".to_string(),
            axis_width: 1.0,
            axis_style: "solid".to_string(),
            label_font_family: "sans-serif".to_string(),
            label_font_size: 12,
            background_color: None,
        }
    }
}
