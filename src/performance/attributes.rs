use crate::difficulty::DifficultyAttributes;

use super::{judgments::Judgments, Performance};

/// The result of a performance calculation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerformanceAttributes {
    /// The difficulty attributes that were used for the performance
    /// calculation.
    pub difficulty: DifficultyAttributes,
    /// The final performance points.
    pub pp: f64,
    /// The aim portion of the final pp.
    pub pp_aim: f64,
    /// The tap portion of the final pp.
    pub pp_tap: f64,
    /// The accuracy portion of the final pp.
    pub pp_acc: f64,
    /// Estimated hit-timing standard deviation in milliseconds.
    ///
    /// `+inf` if it could not be estimated.
    pub deviation: f64,
    /// Share of the tap pp that is credited given the deviation.
    pub deviation_scaling_factor: f64,
    /// Accuracy as a percentage in `[0, 100]`.
    pub accuracy: f64,
    /// The judgments that were used.
    pub judgments: Judgments,
}

impl PerformanceAttributes {
    /// Return the star value.
    pub const fn stars(&self) -> f64 {
        self.difficulty.stars
    }

    /// Return the performance point value.
    pub const fn pp(&self) -> f64 {
        self.pp
    }

    /// Return a builder for performance calculation.
    pub fn performance<'a>(self) -> Performance<'a> {
        self.difficulty.into()
    }
}

impl From<PerformanceAttributes> for DifficultyAttributes {
    fn from(attributes: PerformanceAttributes) -> Self {
        attributes.difficulty
    }
}
