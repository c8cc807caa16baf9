use std::{error, fmt, io};

use rosu_map::section::{general::GameMode, hit_objects::HitObjectKind};

use crate::model::note::Note;

use super::NoteSequence;

/// Error when turning a `.osu` file into a [`NoteSequence`].
#[derive(Debug)]
pub enum ConvertError {
    /// Failed to read or decode the file.
    Io(io::Error),
    /// The beatmap does not belong to osu!standard.
    IncompatibleMode(GameMode),
}

impl From<io::Error> for ConvertError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::IncompatibleMode(_) => None,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(_) => f.write_str("failed to decode beatmap"),
            Self::IncompatibleMode(mode) => {
                write!(f, "cannot calculate osu!standard difficulty on {mode:?} map")
            }
        }
    }
}

impl TryFrom<&rosu_map::Beatmap> for NoteSequence {
    type Error = ConvertError;

    fn try_from(map: &rosu_map::Beatmap) -> Result<Self, Self::Error> {
        if map.mode != GameMode::Osu {
            return Err(ConvertError::IncompatibleMode(map.mode));
        }

        let notes = map.hit_objects.iter().filter_map(|h| {
            let (pos, is_slider) = match h.kind {
                HitObjectKind::Circle(ref circle) => (circle.pos, false),
                HitObjectKind::Slider(ref slider) => (slider.pos, true),
                // Spinners and holds are not aimed at
                _ => return None,
            };

            Some(Note::new(
                pos.x as i32,
                pos.y as i32,
                h.start_time as i32,
                is_slider,
            ))
        });

        let seq = Self {
            title: map.title.clone(),
            artist: map.artist.clone(),
            creator: map.creator.clone(),
            version: map.version.clone(),
            cs: f64::from(map.circle_size),
            ar: f64::from(map.approach_rate),
            od: f64::from(map.overall_difficulty),
            slider_tick_rate: map.slider_tick_rate,
            notes: notes.collect(),
        };

        log_debug!(
            n_objects = seq.n_objects(),
            n_circles = seq.n_circles(),
            "converted beatmap {} - {} [{}]",
            seq.artist,
            seq.title,
            seq.version
        );

        Ok(seq)
    }
}

impl TryFrom<rosu_map::Beatmap> for NoteSequence {
    type Error = ConvertError;

    fn try_from(map: rosu_map::Beatmap) -> Result<Self, Self::Error> {
        Self::try_from(&map)
    }
}
