//! Calculations for every mod variant of a map at once.

use rayon::prelude::*;

use crate::{
    model::{beatmap::NoteSequence, mods::GameMods},
    performance::{Judgments, Performance, PerformanceAttributes},
};

/// The performance of a play on one variant of a map.
#[derive(Clone, Debug, PartialEq)]
pub struct VariantAttributes {
    pub mods: GameMods,
    pub performance: PerformanceAttributes,
}

/// Calculate the performance of the given judgments for each of
/// [`GameMods::variants`].
///
/// The variants are evaluated in parallel and returned in the same order.
/// The amount of 300s in `judgments` is ignored.
pub fn calculate_all(map: &NoteSequence, judgments: Judgments) -> Vec<VariantAttributes> {
    GameMods::variants()
        .into_par_iter()
        .map(|mods| {
            let performance = Performance::new(map)
                .mods(mods.clone())
                .judgments(judgments)
                .calculate();

            log_debug!(
                mods = mods.label(),
                stars = performance.stars(),
                pp = performance.pp,
                "calculated variant"
            );

            VariantAttributes { mods, performance }
        })
        .collect()
}
