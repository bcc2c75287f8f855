//! SVG realization of chart layouts.
//!
//! The renderer is a thin adapter: every [`Primitive`] in the layout
//! already knows how to render itself to an SVG node, so this module only
//! assembles the document (size, optional background, z-ordered layer
//! groups) and serializes it to a string in memory.

use log::debug;
use svg::{Document, node::element as svg_element};

use raintrap_core::{draw::LayeredOutput, geometry::Size};

use crate::{config::StyleConfig, export::Error, layout::ChartLayout};

/// Margin added to the right of the chart content in the output document.
const DOCUMENT_MARGIN: f32 = 50.0;

/// Renders a [`ChartLayout`] into an SVG document string.
pub(crate) struct SvgRenderer<'a> {
    style: &'a StyleConfig,
}

impl<'a> SvgRenderer<'a> {
    pub(crate) fn new(style: &'a StyleConfig) -> Self {
        Self { style }
    }

    /// Renders the layout to an SVG document string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the configured background color cannot
    /// be parsed.
    pub(crate) fn render(&self, layout: &ChartLayout) -> Result<String, Error> {
        let size = document_size(layout.content_size());

        let mut document = Document::new()
            .set("width", size.width())
            .set("height", size.height())
            .set("viewBox", (0f32, 0f32, size.width(), size.height()));

        if let Some(background) = self.style.background_color().map_err(Error::Render)? {
            let rect = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", background.to_string())
                .set("fill-opacity", background.alpha());
            document = document.add(rect);
        }

        let mut output = LayeredOutput::new();
        for placed in layout.items() {
            output.add_to_layer(placed.layer(), placed.primitive().render_to_svg());
        }

        for node in output.render() {
            document = document.add(node);
        }

        debug!("SVG document rendered");
        Ok(document.to_string())
    }
}

/// Document dimensions: content plus a right margin, never collapsing to
/// a zero-sized document for empty layouts.
fn document_size(content_size: Size) -> Size {
    Size::new(
        content_size.width() + DOCUMENT_MARGIN,
        content_size.height(),
    )
    .max(Size::new(DOCUMENT_MARGIN, DOCUMENT_MARGIN))
}
