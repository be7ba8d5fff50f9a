//! Common test helpers and utilities.

#![allow(dead_code)]

use lambda_bakery::{DemoSettings, DemoSummary, driver};

/// Lines every default transcript starts with.
pub const BAKERY_LINES: [&str; 2] = [
    "We made a cake! This one:Chocolate cake, no need for extra ingredents",
    "We made a cake! This one:Generic cake with500grams of suger",
];

/// Lines every default transcript ends with, after the random samples.
pub const TAIL_LINES: [&str; 6] = [
    "*********",
    "HELLO",
    "*********",
    "",
    "NON RELAted STRING",
    "0.21000000000000002",
];

/// Default settings with a fixed seed.
pub fn seeded_settings(seed: u64) -> DemoSettings {
    DemoSettings {
        seed: Some(seed),
        ..DemoSettings::default()
    }
}

/// Runs the demo into memory and returns the transcript with the summary.
/// ## Panics
/// if the run fails or the transcript is not UTF-8
pub fn run_to_string(settings: &DemoSettings) -> (String, DemoSummary) {
    let mut out = Vec::new();
    let summary = driver::run(&mut out, settings).expect("demo run should succeed");
    let text = String::from_utf8(out).expect("transcript should be UTF-8");
    (text, summary)
}
