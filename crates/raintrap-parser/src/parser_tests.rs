//! Tests for the height input parser.

use crate::{
    error::ErrorCode,
    parse,
    span::Span,
};

#[test]
fn parses_basic_sequence() {
    let heights = parse("3,0,2,0,4").unwrap();
    assert_eq!(heights.values(), &[3, 0, 2, 0, 4]);
}

#[test]
fn parses_single_value() {
    let heights = parse("7").unwrap();
    assert_eq!(heights.values(), &[7]);
}

#[test]
fn parses_whitespace_padded_entries() {
    let heights = parse(" 5,\t5 , 5 ").unwrap();
    assert_eq!(heights.values(), &[5, 5, 5]);
}

#[test]
fn parses_all_zero_sequence() {
    let heights = parse("0,0,0").unwrap();
    assert_eq!(heights.values(), &[0, 0, 0]);
}

#[test]
fn parses_max_height() {
    let heights = parse("4294967295").unwrap();
    assert_eq!(heights.values(), &[u32::MAX]);
}

#[test]
fn rejects_empty_input() {
    let err = parse("").unwrap_err();
    assert_eq!(err.diagnostics().len(), 1);
    assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E001));
}

#[test]
fn rejects_blank_input() {
    let err = parse("   \t ").unwrap_err();
    assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E001));
}

#[test]
fn rejects_non_numeric_entry() {
    let err = parse("3,x,4").unwrap_err();
    assert_eq!(err.diagnostics().len(), 1);

    let diag = &err.diagnostics()[0];
    assert_eq!(diag.code(), Some(ErrorCode::E002));
    assert_eq!(diag.labels().len(), 1);
    assert_eq!(diag.labels()[0].span(), Span::new(2..3));
}

#[test]
fn reports_every_bad_entry() {
    let err = parse("a,b").unwrap_err();
    assert_eq!(err.diagnostics().len(), 2);
    assert_eq!(err.diagnostics()[0].labels()[0].span(), Span::new(0..1));
    assert_eq!(err.diagnostics()[1].labels()[0].span(), Span::new(2..3));
}

#[test]
fn narrows_span_to_trimmed_entry() {
    let err = parse("3, x, 4").unwrap_err();
    let diag = &err.diagnostics()[0];
    // The label points at `x`, not at the surrounding whitespace
    assert_eq!(diag.labels()[0].span(), Span::new(3..4));
}

#[test]
fn rejects_negative_height() {
    let err = parse("-2,3").unwrap_err();
    let diag = &err.diagnostics()[0];
    assert_eq!(diag.code(), Some(ErrorCode::E003));
    assert_eq!(diag.labels()[0].span(), Span::new(0..2));
    assert!(diag.help().is_some());
}

#[test]
fn rejects_overflowing_height() {
    // One past u32::MAX
    let err = parse("4294967296").unwrap_err();
    assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E004));
}

#[test]
fn rejects_missing_value_between_separators() {
    let err = parse("3,,4").unwrap_err();
    assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E005));
}

#[test]
fn rejects_trailing_separator() {
    let err = parse("1,2,").unwrap_err();
    assert_eq!(err.diagnostics().len(), 1);
    assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E005));
}

#[test]
fn rejects_fractional_height() {
    let err = parse("3.5").unwrap_err();
    assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E002));
}

mod proptests {
    use proptest::prelude::*;

    use crate::parse;

    proptest! {
        /// Any sequence of u32 values joined with commas parses back to
        /// exactly the same values.
        #[test]
        fn round_trips_joined_values(values in prop::collection::vec(any::<u32>(), 1..50)) {
            let source = values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(",");

            let heights = parse(&source).unwrap();
            prop_assert_eq!(heights.values(), values.as_slice());
        }

        /// Whitespace padding around entries never changes the result.
        #[test]
        fn whitespace_is_insignificant(values in prop::collection::vec(0u32..1000, 1..20)) {
            let source = values
                .iter()
                .map(|v| format!(" {v}\t"))
                .collect::<Vec<_>>()
                .join(",");

            let heights = parse(&source).unwrap();
            prop_assert_eq!(heights.values(), values.as_slice());
        }
    }
}
