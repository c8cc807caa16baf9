use std::borrow::Cow;

use crate::{
    difficulty::DifficultyAttributes, model::beatmap::NoteSequence,
    performance::PerformanceAttributes,
};

/// Either a [`NoteSequence`] whose attributes still need to be calculated or
/// previously calculated attributes.
#[derive(Clone, Debug, PartialEq)]
pub enum MapOrAttrs<'map> {
    Map(Cow<'map, NoteSequence>),
    Attrs(DifficultyAttributes),
}

impl<'map> From<&'map NoteSequence> for MapOrAttrs<'map> {
    fn from(map: &'map NoteSequence) -> Self {
        Self::Map(Cow::Borrowed(map))
    }
}

impl From<NoteSequence> for MapOrAttrs<'_> {
    fn from(map: NoteSequence) -> Self {
        Self::Map(Cow::Owned(map))
    }
}

impl From<DifficultyAttributes> for MapOrAttrs<'_> {
    fn from(attrs: DifficultyAttributes) -> Self {
        Self::Attrs(attrs)
    }
}

impl From<PerformanceAttributes> for MapOrAttrs<'_> {
    fn from(attrs: PerformanceAttributes) -> Self {
        Self::Attrs(attrs.difficulty)
    }
}
