//! End-to-end tests for the demo transcript.
//!
//! To run these tests:
//! ```bash
//! cargo test --test transcript_test
//!
//! # Run with debug output
//! RUST_LOG=debug cargo test --test transcript_test -- --nocapture
//! ```
mod common;

use common::{BAKERY_LINES, TAIL_LINES, run_to_string, seeded_settings};
use lambda_bakery::DemoSettings;

#[test]
fn test_default_transcript_layout() {
    let (text, summary) = run_to_string(&DemoSettings::default());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), BAKERY_LINES.len() + 10 + TAIL_LINES.len());
    assert_eq!(&lines[..2], &BAKERY_LINES);
    assert_eq!(&lines[12..], &TAIL_LINES);

    // Sample values vary, their count and position do not
    for line in &lines[2..12] {
        let value: f64 = line.parse().expect("sample line should be a number");
        assert!((0.0..1.0).contains(&value), "sample out of range: {value}");
    }
    assert!((summary.converted_sum - 0.21).abs() < 1e-12);
}

#[test]
fn test_decorations_are_exact() {
    let (text, _) = run_to_string(&seeded_settings(3));
    assert!(text.contains("*********\nHELLO\n*********\n\nNON RELAted STRING\n"));
}

#[test]
fn test_seeded_runs_are_identical() {
    let (first, first_summary) = run_to_string(&seeded_settings(11));
    let (second, second_summary) = run_to_string(&seeded_settings(11));

    assert_eq!(first, second);
    assert_eq!(first_summary, second_summary);
}

#[test]
fn test_different_seeds_change_only_samples() {
    let (a, _) = run_to_string(&seeded_settings(1));
    let (b, _) = run_to_string(&seeded_settings(2));
    let a: Vec<&str> = a.lines().collect();
    let b: Vec<&str> = b.lines().collect();

    assert_eq!(a.len(), b.len());
    assert_eq!(a[..2], b[..2]);
    assert_eq!(a[12..], b[12..]);
    assert_ne!(a[2..12], b[2..12]);
}

#[test]
fn test_custom_greeting_only_reaches_border() {
    let settings = DemoSettings {
        greeting: "HI THERE".to_string(),
        ..seeded_settings(5)
    };
    let (text, _) = run_to_string(&settings);

    assert!(text.contains("*********\nHI THERE\n*********\n"));
    assert!(text.contains("\nNON RELAted STRING\n"));
    assert!(!text.contains("HELLO"));
}

#[test]
fn test_custom_bakery_inputs() {
    let settings = DemoSettings {
        ingredient: "cocoa".to_string(),
        amount: 42,
        ..seeded_settings(5)
    };
    let (text, _) = run_to_string(&settings);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], BAKERY_LINES[0]);
    assert_eq!(
        lines[1],
        "We made a cake! This one:Generic cake with42grams of cocoa"
    );
}
