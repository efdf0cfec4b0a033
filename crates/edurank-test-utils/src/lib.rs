//! Fixtures and assertions shared by EduRank tests.

use std::io::Write;

use edurank_ranker::CriterionTable;

/// Criterion names of the default schema, in schema order.
pub const CRITERIA: [&str; 5] = ["Cost", "Ease of Use", "Effectiveness", "Accessibility", "Innovation"];

pub fn criteria() -> Vec<String> {
    CRITERIA.iter().map(|s| s.to_string()).collect()
}

/// A has the highest cost and middling everything else; B is free and
/// best at everything else.
pub fn two_technology_table() -> CriterionTable {
    CriterionTable::from_rows(
        "Technology",
        criteria(),
        vec![
            ("A", vec![10.0, 5.0, 5.0, 5.0, 5.0]),
            ("B", vec![0.0, 10.0, 10.0, 10.0, 10.0]),
        ],
    )
    .expect("fixture table is well formed")
}

/// A small realistic upload in the default schema.
pub const SAMPLE_CSV: &str = "\
Technology,Cost,Ease of Use,Effectiveness,Accessibility,Innovation
Learning Management System,7,8,9,8,6
Virtual Reality Lab,9,4,8,3,10
Interactive Whiteboard,5,7,6,6,5
Online Quiz Platform,2,9,7,9,6
";

/// Write `contents` to a temp file with the given extension.
pub fn temp_file(contents: &str, extension: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{extension}"))
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

#[track_caller]
pub fn assert_within(value: f64, expected: f64, tolerance: f64) {
    let diff = (value - expected).abs();
    assert!(
        diff <= tolerance,
        "Expected value of {expected} +- {tolerance} but got {value} which is off by {diff}",
    );
}
