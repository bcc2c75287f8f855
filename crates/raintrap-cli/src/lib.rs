//! CLI logic for the raintrap chart tool.
//!
//! This module contains the core CLI logic for the raintrap chart tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use raintrap::{ChartBuilder, RaintrapError};

/// Run the raintrap CLI application
///
/// This function processes the input file through the raintrap pipeline
/// and writes the resulting SVG to the output file. The computed total is
/// printed to stdout.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `RaintrapError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), RaintrapError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing chart"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process the chart using the ChartBuilder API
    let builder = ChartBuilder::new(app_config);
    let heights = builder.parse(&source)?;
    let summary = builder.compute(&heights);
    let chart = builder.layout(&heights, summary.profile())?;
    let svg = builder.render_svg(&chart)?;

    // Write output file
    fs::write(&args.output, svg)?;

    println!("Total Water Stored: {} Units", summary.total());

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
