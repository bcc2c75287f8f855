//! Entry tokenization and validation for height input.
//!
//! The grammar is deliberately small: one or more entries separated by
//! commas, each entry a decimal `u32` optionally padded with ASCII
//! whitespace. Splitting preserves byte spans so that each invalid entry
//! can be reported with a label pointing at exactly the offending text.

use log::debug;
use winnow::{
    Parser,
    ascii::dec_uint,
    combinator::separated,
    error::{ContextError, ErrMode},
    stream::LocatingSlice,
    token::take_till,
};

use raintrap_core::profile::HeightSequence;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::{Span, Spanned},
};

type Input<'src> = LocatingSlice<&'src str>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// Split the source into comma-separated raw entries with their spans.
///
/// Entries are not validated here; an entry may be empty or contain
/// arbitrary junk, which the validation pass turns into diagnostics.
fn raw_entries<'src>(input: &mut Input<'src>) -> IResult<Vec<Spanned<&'src str>>> {
    separated(
        1..,
        take_till(0.., ',')
            .with_span()
            .map(|(text, range)| Spanned::new(text, Span::new(range))),
        ',',
    )
    .parse_next(input)
}

/// Parse a single trimmed entry as a decimal `u32`.
fn height_value(input: &mut &str) -> IResult<u32> {
    dec_uint.parse_next(input)
}

/// Parse and validate comma-separated height text.
///
/// All entries are checked; diagnostics accumulate so one pass reports
/// every problem in the input.
pub(crate) fn parse_heights(source: &str) -> Result<HeightSequence, ParseError> {
    if source.trim().is_empty() {
        return Err(Diagnostic::error("no block heights given")
            .with_code(ErrorCode::E001)
            .with_label(Span::new(0..source.len()), "empty input")
            .with_help("provide a comma-separated list of heights, e.g. `3,0,2,0,4`")
            .into());
    }

    let entries = raw_entries.parse(LocatingSlice::new(source)).map_err(|err| {
        Diagnostic::error(format!("malformed height list: {err}")).with_code(ErrorCode::E002)
    })?;

    debug!(entry_count = entries.len(); "Validating height entries");

    let mut collector = DiagnosticCollector::new();
    let mut heights = Vec::with_capacity(entries.len());

    for entry in &entries {
        match validate_entry(entry) {
            Ok(height) => heights.push(height),
            Err(diagnostic) => collector.report(diagnostic),
        }
    }

    collector.finish(HeightSequence::new(heights))
}

/// Validate one raw entry, narrowing its span to the trimmed text.
fn validate_entry(entry: &Spanned<&str>) -> Result<u32, Diagnostic> {
    let raw = *entry.inner();
    let trimmed = raw.trim();

    let leading_ws = raw.len() - raw.trim_start().len();
    let start = entry.span().start() + leading_ws;
    let span = Span::new(start..start + trimmed.len());

    if trimmed.is_empty() {
        return Err(Diagnostic::error("missing height between separators")
            .with_code(ErrorCode::E005)
            .with_label(span, "expected a height here"));
    }

    if let Some(rest) = trimmed.strip_prefix('-') {
        if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(
                Diagnostic::error(format!("`{trimmed}` is not a valid block height"))
                    .with_code(ErrorCode::E003)
                    .with_label(span, "negative height")
                    .with_help("block heights must be zero or greater"),
            );
        }
    }

    match height_value.parse(trimmed) {
        Ok(height) => Ok(height),
        Err(_) if trimmed.bytes().all(|b| b.is_ascii_digit()) => {
            Err(Diagnostic::error(format!("height `{trimmed}` is too large"))
                .with_code(ErrorCode::E004)
                .with_label(span, "does not fit in 32 bits")
                .with_help(format!("the largest supported height is {}", u32::MAX)))
        }
        Err(_) => Err(
            Diagnostic::error(format!("`{trimmed}` is not a valid block height"))
                .with_code(ErrorCode::E002)
                .with_label(span, "expected a non-negative integer"),
        ),
    }
}
