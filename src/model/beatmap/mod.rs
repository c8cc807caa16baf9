use std::{path::Path, str::FromStr};

use crate::{model::note::Note, Performance};

pub use self::{
    attributes::{circle_radius, BeatmapAttributes, BeatmapAttributesBuilder, HitWindows},
    decode::ConvertError,
};

mod attributes;
mod decode;

/// An ordered sequence of [`Note`]s alongside the map's difficulty settings.
///
/// Notes are expected to be sorted by time; the calculators never re-sort
/// them.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteSequence {
    // Metadata
    pub title: String,
    pub artist: String,
    pub creator: String,
    pub version: String,

    // Difficulty
    pub cs: f64,
    pub ar: f64,
    pub od: f64,
    pub slider_tick_rate: f64,

    // HitObjects
    pub notes: Vec<Note>,
}

impl NoteSequence {
    /// Create a [`NoteSequence`] from notes with default difficulty settings.
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            notes,
            ..Self::default()
        }
    }

    /// Specify the circle size, approach rate, and overall difficulty.
    pub fn with_difficulty(mut self, cs: f64, ar: f64, od: f64) -> Self {
        self.cs = cs;
        self.ar = ar;
        self.od = od;

        self
    }

    /// Decode a `.osu` file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConvertError> {
        let map: rosu_map::Beatmap = rosu_map::from_path(path)?;

        Self::try_from(&map)
    }

    /// Decode the content of a `.osu` file given as bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConvertError> {
        let map: rosu_map::Beatmap = rosu_map::from_bytes(bytes)?;

        Self::try_from(&map)
    }

    /// The amount of objects, i.e. circles and sliders.
    pub fn n_objects(&self) -> u32 {
        self.notes.len() as u32
    }

    /// The amount of circles.
    pub fn n_circles(&self) -> u32 {
        self.notes.iter().filter(|note| note.is_circle()).count() as u32
    }

    /// The amount of sliders.
    pub fn n_sliders(&self) -> u32 {
        self.n_objects() - self.n_circles()
    }

    /// Whether the notes are sorted by time.
    pub fn is_time_ascending(&self) -> bool {
        self.notes.windows(2).all(|pair| pair[0].time <= pair[1].time)
    }

    /// Remove all notes so the sequence can be refilled for another map.
    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// Returns a [`BeatmapAttributesBuilder`] to calculate modified
    /// attributes.
    pub fn attributes(&self) -> BeatmapAttributesBuilder {
        BeatmapAttributesBuilder::new().map(self)
    }

    /// Create a performance calculator for this [`NoteSequence`].
    pub fn performance(&self) -> Performance<'_> {
        Performance::new(self)
    }
}

impl Default for NoteSequence {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            creator: String::new(),
            version: String::new(),
            cs: 5.0,
            ar: 5.0,
            od: 5.0,
            slider_tick_rate: 1.0,
            notes: Vec::new(),
        }
    }
}

impl FromStr for NoteSequence {
    type Err = ConvertError;

    /// Decode the content of a `.osu` file given as a string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let map: rosu_map::Beatmap = rosu_map::from_str(s)?;

        Self::try_from(&map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes() -> Vec<Note> {
        vec![
            Note::circle(0, 0, 0),
            Note::slider(100, 0, 200),
            Note::circle(100, 100, 400),
        ]
    }

    #[test]
    fn counts() {
        let seq = NoteSequence::new(notes());

        assert_eq!(seq.n_objects(), 3);
        assert_eq!(seq.n_circles(), 2);
        assert_eq!(seq.n_sliders(), 1);
        assert!(seq.n_circles() <= seq.n_objects());
    }

    #[test]
    fn ascending() {
        let mut seq = NoteSequence::new(notes());
        assert!(seq.is_time_ascending());

        seq.notes.swap(0, 2);
        assert!(!seq.is_time_ascending());
    }

    #[test]
    fn clear_resets_counts() {
        let mut seq = NoteSequence::new(notes()).with_difficulty(4.0, 9.0, 8.0);
        seq.clear();

        assert_eq!(seq.n_objects(), 0);
        assert_eq!(seq.n_circles(), 0);
        assert!((seq.od - 8.0).abs() < f64::EPSILON);
    }
}
