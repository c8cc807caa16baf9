#![allow(unused)]

use std::sync::OnceLock;

use rosu_skill_pp::{Note, NoteSequence};

pub const TEST_MAP: &str = "./resources/test.osu";

pub fn test_map() -> &'static NoteSequence {
    static MAP: OnceLock<NoteSequence> = OnceLock::new();

    MAP.get_or_init(|| NoteSequence::from_path(TEST_MAP).unwrap())
}

/// `count` circles at the same position, `spacing` milliseconds apart.
pub fn stacked(count: i32, spacing: i32) -> NoteSequence {
    let notes = (0..count).map(|i| Note::circle(256, 192, i * spacing)).collect();

    NoteSequence::new(notes).with_difficulty(4.0, 9.0, 8.0)
}

/// Circles alternating between two points `distance` pixels apart.
pub fn jumps(count: i32, spacing: i32, distance: i32) -> NoteSequence {
    let notes = (0..count)
        .map(|i| Note::circle(100 + (i % 2) * distance, 192, i * spacing))
        .collect();

    NoteSequence::new(notes).with_difficulty(4.0, 9.0, 8.0)
}

#[track_caller]
pub fn assert_eq_float(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} but got {actual} (tolerance {tolerance})"
    );
}
