//! raintrap - trapped rain water computation and chart rendering.
//!
//! Given a sequence of non-negative block heights, raintrap computes how
//! much rain water the blocks would trap and renders the result as an SVG
//! bar/water chart. Parsing, water computation, layout, and SVG export
//! are separate stages tied together by [`ChartBuilder`].

pub mod config;
pub mod layout;
pub mod water;

mod error;
mod export;

pub use raintrap_core::{color, draw, geometry, profile};

pub use error::RaintrapError;

use log::{debug, info};

use raintrap_core::profile::{HeightSequence, WaterProfile};

use config::AppConfig;
use export::svg::SvgRenderer;
use layout::ChartLayout;
use water::WaterSummary;

/// Builder for computing and rendering raintrap charts.
///
/// This provides an API for processing height input through parsing,
/// water computation, layout, and rendering stages.
///
/// # Examples
///
/// ```
/// use raintrap::{ChartBuilder, config::AppConfig};
///
/// let builder = ChartBuilder::new(AppConfig::default());
///
/// let heights = builder.parse("3,0,2,0,4")
///     .expect("Failed to parse");
///
/// let summary = builder.compute(&heights);
/// assert_eq!(summary.total(), 7);
///
/// let chart = builder.layout(&heights, summary.profile())
///     .expect("Failed to lay out");
///
/// let svg = builder.render_svg(&chart)
///     .expect("Failed to render");
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Default)]
pub struct ChartBuilder {
    config: AppConfig,
}

impl ChartBuilder {
    /// Create a new chart builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse comma-separated height text into a [`HeightSequence`].
    ///
    /// # Errors
    ///
    /// Returns `RaintrapError::Parse` carrying one diagnostic per invalid
    /// entry, together with the source text for error reporting.
    pub fn parse(&self, source: &str) -> Result<HeightSequence, RaintrapError> {
        info!("Parsing height input");

        let heights = raintrap_parser::parse(source)
            .map_err(|err| RaintrapError::new_parse_error(err, source))?;

        debug!(block_count = heights.len(); "Input parsed");

        Ok(heights)
    }

    /// Compute the trapped water total and per-block profile.
    ///
    /// The total and the profile come from two independent code paths
    /// (see the [`water`] module); both are returned together.
    pub fn compute(&self, heights: &HeightSequence) -> WaterSummary {
        info!(block_count = heights.len(); "Computing trapped water");
        WaterSummary::compute(heights)
    }

    /// Lay out the chart primitives for the given heights and water profile.
    ///
    /// # Errors
    ///
    /// Returns `RaintrapError::Layout` when the profile does not match the
    /// heights or a configured color is invalid. Degenerate input (empty
    /// or all-zero heights) produces a degenerate layout, not an error.
    pub fn layout(
        &self,
        heights: &HeightSequence,
        profile: &WaterProfile,
    ) -> Result<ChartLayout, RaintrapError> {
        let chart_layout = layout::layout(heights, profile, &self.config)?;
        info!(primitive_count = chart_layout.items().len(); "Layout calculated");
        Ok(chart_layout)
    }

    /// Render a chart layout to an SVG document string.
    ///
    /// # Errors
    ///
    /// Returns `RaintrapError::Export` for rendering errors.
    pub fn render_svg(&self, layout: &ChartLayout) -> Result<String, RaintrapError> {
        let renderer = SvgRenderer::new(self.config.style());
        let svg = renderer.render(layout)?;

        info!("SVG rendered successfully");
        Ok(svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline() {
        let builder = ChartBuilder::default();

        let heights = builder.parse("3, 0, 2, 0, 4").unwrap();
        let summary = builder.compute(&heights);
        assert_eq!(summary.total(), 7);

        let chart = builder.layout(&heights, summary.profile()).unwrap();
        let svg = builder.render_svg(&chart).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("data-layer=\"water\""));
    }

    #[test]
    fn test_parse_error_carries_source() {
        let builder = ChartBuilder::default();
        let err = builder.parse("3,x").unwrap_err();

        match err {
            RaintrapError::Parse { err, src } => {
                assert_eq!(src, "3,x");
                assert_eq!(err.diagnostics().len(), 1);
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_profile_mismatch_maps_to_layout_error() {
        let builder = ChartBuilder::default();
        let heights = HeightSequence::new(vec![1, 2]);
        let profile = WaterProfile::new(vec![0]);

        let err = builder.layout(&heights, &profile).unwrap_err();
        assert!(matches!(err, RaintrapError::Layout(_)));
    }
}
