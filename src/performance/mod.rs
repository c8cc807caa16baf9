use crate::{
    difficulty::{evaluators::HitProbability, Calibration, Difficulty, DifficultyAttributes},
    model::{beatmap::HitWindows, mods::GameMods},
    util::map_or_attrs::MapOrAttrs,
};

use self::{
    calculator::SkillPerformanceCalculator,
    deviation::{DeviationEstimator, DeviationEstimatorFn, MaximumLikelihood},
};

pub use self::{attributes::PerformanceAttributes, judgments::Judgments};

pub mod attributes;
pub(crate) mod calculator;
pub mod deviation;
pub mod judgments;

/// Performance calculator on osu!standard maps.
///
/// # Example
///
/// ```
/// use rosu_skill_pp::{Note, NoteSequence, Performance};
///
/// let notes = (0..200)
///     .map(|i| Note::circle((i % 4) * 90, 100 + (i % 3) * 60, i * 180))
///     .collect();
///
/// let map = NoteSequence::new(notes).with_difficulty(4.0, 9.0, 8.0);
///
/// let attrs = Performance::new(&map)
///     .mods(16) // HR
///     .n100(4)
///     .misses(1)
///     .calculate();
///
/// assert!(attrs.pp > 0.0);
///
/// // Re-use the difficulty attributes for another play on the same map with
/// // the same settings.
/// let fc = attrs.performance().mods(16).calculate();
///
/// assert!(fc.pp_acc > 0.0);
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub struct Performance<'map> {
    pub(crate) map_or_attrs: MapOrAttrs<'map>,
    pub(crate) difficulty: Difficulty,
    pub(crate) n100: Option<u32>,
    pub(crate) n50: Option<u32>,
    pub(crate) misses: Option<u32>,
    pub(crate) deviation_estimator: DeviationEstimatorFn,
}

// Manual implementation because of the `deviation_estimator` function pointer
impl PartialEq for Performance<'_> {
    fn eq(&self, other: &Self) -> bool {
        let Self {
            map_or_attrs,
            difficulty,
            n100,
            n50,
            misses,
            deviation_estimator: _,
        } = self;

        map_or_attrs == &other.map_or_attrs
            && difficulty == &other.difficulty
            && n100 == &other.n100
            && n50 == &other.n50
            && misses == &other.misses
    }
}

impl<'map> Performance<'map> {
    /// Create a new performance calculator.
    ///
    /// The argument `map_or_attrs` must be either
    /// - previously calculated attributes ([`DifficultyAttributes`]
    ///   or [`PerformanceAttributes`])
    /// - a [`NoteSequence`] (by reference or value)
    ///
    /// If a map is given, difficulty attributes will need to be calculated
    /// internally which is a costly operation. Hence, passing attributes
    /// should be prefered.
    ///
    /// However, when passing previously calculated attributes, make sure they
    /// have been calculated for the same map, [`Difficulty`] settings, and
    /// miss count. Otherwise, the final attributes will be incorrect.
    ///
    /// [`NoteSequence`]: crate::NoteSequence
    pub fn new(map_or_attrs: impl Into<MapOrAttrs<'map>>) -> Self {
        Self {
            map_or_attrs: map_or_attrs.into(),
            difficulty: Difficulty::new(),
            n100: None,
            n50: None,
            misses: None,
            deviation_estimator: MaximumLikelihood::estimate_deviation,
        }
    }

    /// Specify mods.
    ///
    /// Accepted types are
    /// - `u32`
    /// - [`rosu_mods::GameModsLegacy`]
    /// - [`rosu_mods::GameMods`]
    /// - [`rosu_mods::GameModsIntermode`]
    /// - [`&rosu_mods::GameModsIntermode`](rosu_mods::GameModsIntermode)
    ///
    /// See <https://github.com/ppy/osu-api/wiki#mods>
    pub fn mods(mut self, mods: impl Into<GameMods>) -> Self {
        self.difficulty = self.difficulty.mods(mods);

        self
    }

    /// Use the specified settings of the given [`Difficulty`].
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;

        self
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | 0.01    | 100     |
    pub fn clock_rate(mut self, clock_rate: f64) -> Self {
        self.difficulty = self.difficulty.clock_rate(clock_rate);

        self
    }

    /// Override a beatmap's set CS.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | -20     | 20      |
    pub fn cs(mut self, cs: f32, with_mods: bool) -> Self {
        self.difficulty = self.difficulty.cs(cs, with_mods);

        self
    }

    /// Override a beatmap's set AR.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | -20     | 20      |
    pub fn ar(mut self, ar: f32, with_mods: bool) -> Self {
        self.difficulty = self.difficulty.ar(ar, with_mods);

        self
    }

    /// Override a beatmap's set OD.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | -20     | 20      |
    pub fn od(mut self, od: f32, with_mods: bool) -> Self {
        self.difficulty = self.difficulty.od(od, with_mods);

        self
    }

    /// Specify custom [`Calibration`] constants.
    pub fn calibration(mut self, calibration: Calibration) -> Self {
        self.difficulty = self.difficulty.calibration(calibration);

        self
    }

    /// Specify the [`HitProbability`] model of the aim skill.
    pub fn hit_probability<H: HitProbability>(mut self) -> Self {
        self.difficulty = self.difficulty.hit_probability::<H>();

        self
    }

    /// Specify how the hit-timing deviation is estimated.
    ///
    /// Defaults to [`MaximumLikelihood`].
    pub fn deviation_estimator<E: DeviationEstimator>(mut self) -> Self {
        self.deviation_estimator = E::estimate_deviation;

        self
    }

    /// Specify the amount of 100s of a play.
    pub const fn n100(mut self, n100: u32) -> Self {
        self.n100 = Some(n100);

        self
    }

    /// Specify the amount of 50s of a play.
    pub const fn n50(mut self, n50: u32) -> Self {
        self.n50 = Some(n50);

        self
    }

    /// Specify the amount of misses of a play.
    ///
    /// Takes precedence over the miss count of a [`Difficulty`] passed to
    /// [`Performance::difficulty`].
    pub const fn misses(mut self, n_misses: u32) -> Self {
        self.misses = Some(n_misses);

        self
    }

    /// Provide all judgment counts at once.
    ///
    /// The amount of 300s is ignored since it is always derived.
    pub const fn judgments(mut self, judgments: Judgments) -> Self {
        self.n100 = Some(judgments.n100);
        self.n50 = Some(judgments.n50);
        self.misses = Some(judgments.misses);

        self
    }

    /// Calculate all performance related values, including pp and stars.
    pub fn calculate(self) -> PerformanceAttributes {
        let misses = self.misses.unwrap_or(self.difficulty.get_misses());

        let attrs = match self.map_or_attrs {
            MapOrAttrs::Attrs(attrs) => attrs,
            MapOrAttrs::Map(ref map) => self.difficulty.clone().misses(misses).calculate(map),
        };

        let judgments = Judgments::new(
            attrs.n_circles,
            self.n100.unwrap_or(0),
            self.n50.unwrap_or(0),
            misses,
        );

        let deviation = if attrs.n_circles == 0 || attrs.n_objects == 0 {
            f64::INFINITY
        } else {
            let hit_windows = HitWindows::new(attrs.od, attrs.clock_rate);

            (self.deviation_estimator)(&judgments, &hit_windows)
        };

        SkillPerformanceCalculator::new(
            attrs,
            self.difficulty.get_calibration(),
            judgments,
            deviation,
        )
        .calculate()
    }
}

impl From<DifficultyAttributes> for Performance<'_> {
    fn from(attrs: DifficultyAttributes) -> Self {
        Self::new(attrs)
    }
}

impl From<PerformanceAttributes> for Performance<'_> {
    fn from(attrs: PerformanceAttributes) -> Self {
        Self::new(attrs)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use crate::{model::note::Note, NoteSequence};

    use super::{deviation::ClosedForm, *};

    fn map() -> &'static NoteSequence {
        static MAP: OnceLock<NoteSequence> = OnceLock::new();

        MAP.get_or_init(|| {
            let notes = (0..150)
                .map(|i| {
                    let x = (i % 4) * 110;
                    let y = 80 + (i % 3) * 90;

                    if i % 10 == 0 {
                        Note::slider(x, y, i * 170)
                    } else {
                        Note::circle(x, y, i * 170)
                    }
                })
                .collect();

            NoteSequence::new(notes).with_difficulty(4.0, 9.0, 8.0)
        })
    }

    #[test]
    fn fc_has_best_accuracy_pp() {
        let fc = Performance::new(map()).calculate();
        let imperfect = Performance::new(map()).n100(10).n50(2).calculate();

        assert!(fc.pp_acc >= imperfect.pp_acc);
        assert!(fc.deviation <= imperfect.deviation);
        assert!((fc.accuracy - 100.0).abs() < f64::EPSILON);
        assert!(imperfect.accuracy < 100.0);
    }

    #[test]
    fn judgments_use_circles() {
        let attrs = Performance::new(map()).n100(3).misses(2).calculate();

        assert_eq!(attrs.difficulty.n_circles, 135);
        assert_eq!(attrs.judgments.n300, 130);
        assert_eq!(attrs.judgments.total(), 135);
    }

    #[test]
    fn misses_are_solved_for() {
        let fc = Performance::new(map()).calculate();
        let missed = Performance::new(map()).misses(5).calculate();

        assert!(missed.difficulty.aim <= fc.difficulty.aim);
    }

    #[test]
    fn misses_from_difficulty() {
        let via_difficulty = Performance::new(map())
            .difficulty(Difficulty::new().misses(5))
            .calculate();

        let via_performance = Performance::new(map()).misses(5).calculate();

        assert_eq!(via_difficulty, via_performance);
        assert_eq!(via_difficulty.judgments.misses, 5);

        let overridden = Performance::new(map())
            .difficulty(Difficulty::new().misses(5))
            .misses(1)
            .calculate();

        assert_eq!(overridden, Performance::new(map()).misses(1).calculate());
    }

    #[test]
    fn attributes_are_reused() {
        let first = Performance::new(map()).n100(5).calculate();
        let second = first.clone().performance().n100(5).calculate();

        assert_eq!(first, second);
    }

    #[test]
    fn closed_form_estimator() {
        let attrs = Performance::new(map())
            .n100(10)
            .deviation_estimator::<ClosedForm>()
            .calculate();

        assert!(attrs.deviation.is_finite());
        assert!(attrs.pp_acc > 0.0);
    }

    #[test]
    fn only_sliders_have_no_accuracy() {
        let notes = (0..20).map(|i| Note::slider(i * 20, 0, i * 300)).collect();
        let map = NoteSequence::new(notes);

        let attrs = Performance::new(&map).calculate();

        assert!(attrs.pp_acc.abs() < f64::EPSILON);
        assert!(attrs.deviation.is_infinite());
        assert!(attrs.pp_tap.abs() < f64::EPSILON);
    }
}
