use crate::{
    model::{beatmap::NoteSequence, mods::GameMods},
    performance::calculator::total_stars,
};

use self::{
    evaluators::{DiscIntegral, HitProbability, HitProbabilityFn, Movement},
    skill_level::SkillLevel,
    skills::{Aim, Tap},
};

pub use self::attributes::DifficultyAttributes;

pub mod attributes;
pub mod evaluators;
pub(crate) mod skill_level;
pub(crate) mod skills;

/// Calibration constants turning skill values into ratings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Calibration {
    /// Multiplier of the aim star rating.
    pub aim_scaling: f64,
    /// Multiplier of the tap star rating.
    pub tap_scaling: f64,
    /// Numerator of the accuracy pp, i.e. `pp = scaling / deviation^2`.
    pub accuracy_scaling: f64,
}

impl Calibration {
    pub const DEFAULT: Self = Self {
        aim_scaling: 24.0,
        tap_scaling: 14.5,
        accuracy_scaling: 4750.0,
    };
}

impl Default for Calibration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A value that may or may not already include mod adjustments.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModsDependent {
    pub value: f64,
    pub with_mods: bool,
}

impl ModsDependent {
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            with_mods: false,
        }
    }
}

/// Difficulty calculator on osu!standard maps.
///
/// # Example
///
/// ```
/// use rosu_skill_pp::{Difficulty, Note, NoteSequence};
///
/// let notes = (0..50)
///     .map(|i| Note::circle((i % 2) * 200, 192, i * 150))
///     .collect();
///
/// let map = NoteSequence::new(notes).with_difficulty(4.0, 9.0, 8.0);
///
/// let attrs = Difficulty::new()
///     .mods(64) // DT
///     .calculate(&map);
///
/// assert!(attrs.stars > 0.0);
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub struct Difficulty {
    mods: GameMods,
    clock_rate: Option<f64>,
    cs: Option<ModsDependent>,
    ar: Option<ModsDependent>,
    od: Option<ModsDependent>,
    misses: u32,
    calibration: Calibration,
    hit_probability: HitProbabilityFn,
}

// Manual implementation because of the `hit_probability` function pointer
impl PartialEq for Difficulty {
    fn eq(&self, other: &Self) -> bool {
        let Self {
            mods,
            clock_rate,
            cs,
            ar,
            od,
            misses,
            calibration,
            hit_probability: _,
        } = self;

        mods == &other.mods
            && clock_rate == &other.clock_rate
            && cs == &other.cs
            && ar == &other.ar
            && od == &other.od
            && misses == &other.misses
            && calibration == &other.calibration
    }
}

impl Difficulty {
    const MIN_CLOCK_RATE: f64 = 0.01;
    const MAX_CLOCK_RATE: f64 = 100.0;

    const MIN_ATTR: f32 = -20.0;
    const MAX_ATTR: f32 = 20.0;

    /// Create a new difficulty calculator.
    pub fn new() -> Self {
        Self {
            mods: GameMods::DEFAULT,
            clock_rate: None,
            cs: None,
            ar: None,
            od: None,
            misses: 0,
            calibration: Calibration::DEFAULT,
            hit_probability: DiscIntegral::hit_probability,
        }
    }

    /// Perform the difficulty calculation.
    pub fn calculate(&self, map: &NoteSequence) -> DifficultyAttributes {
        let DifficultyValues {
            aim_skill,
            max_strain,
            attrs,
        } = DifficultyValues::calculate(self, map);

        let calibration = &self.calibration;
        let aim = aim_skill.star_rating(calibration.aim_scaling);
        let tap = Tap::star_rating(max_strain, calibration.tap_scaling);

        DifficultyAttributes {
            aim,
            tap,
            stars: total_stars(aim, tap),
            max_strain,
            aim_skill,
            ..attrs
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
    pub fn mods(self, mods: impl Into<GameMods>) -> Self {
        Self {
            mods: mods.into(),
            ..self
        }
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | 0.01    | 100     |
    pub fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            clock_rate: Some(clock_rate.clamp(Self::MIN_CLOCK_RATE, Self::MAX_CLOCK_RATE)),
            ..self
        }
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
    pub fn cs(self, cs: f32, with_mods: bool) -> Self {
        Self {
            cs: Some(Self::mods_dependent(cs, with_mods)),
            ..self
        }
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
    pub fn ar(self, ar: f32, with_mods: bool) -> Self {
        Self {
            ar: Some(Self::mods_dependent(ar, with_mods)),
            ..self
        }
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
    pub fn od(self, od: f32, with_mods: bool) -> Self {
        Self {
            od: Some(Self::mods_dependent(od, with_mods)),
            ..self
        }
    }

    /// Specify the amount of misses the aim skill level is solved for.
    pub const fn misses(mut self, misses: u32) -> Self {
        self.misses = misses;

        self
    }

    /// Specify custom [`Calibration`] constants.
    pub const fn calibration(mut self, calibration: Calibration) -> Self {
        self.calibration = calibration;

        self
    }

    /// Specify the [`HitProbability`] model of the aim skill.
    ///
    /// Defaults to [`DiscIntegral`].
    pub fn hit_probability<H: HitProbability>(mut self) -> Self {
        self.hit_probability = H::hit_probability;

        self
    }

    fn mods_dependent(value: f32, with_mods: bool) -> ModsDependent {
        ModsDependent {
            value: f64::from(value.clamp(Self::MIN_ATTR, Self::MAX_ATTR)),
            with_mods,
        }
    }

    pub const fn get_mods(&self) -> &GameMods {
        &self.mods
    }

    pub fn get_clock_rate(&self) -> f64 {
        self.clock_rate.unwrap_or_else(|| self.mods.clock_rate())
    }

    pub const fn get_cs(&self) -> Option<ModsDependent> {
        self.cs
    }

    pub const fn get_ar(&self) -> Option<ModsDependent> {
        self.ar
    }

    pub const fn get_od(&self) -> Option<ModsDependent> {
        self.od
    }

    pub const fn get_misses(&self) -> u32 {
        self.misses
    }

    pub const fn get_calibration(&self) -> &Calibration {
        &self.calibration
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}

/// Intermediate values of a difficulty calculation before scaling.
pub(crate) struct DifficultyValues {
    pub aim_skill: SkillLevel,
    pub max_strain: f64,
    pub attrs: DifficultyAttributes,
}

impl DifficultyValues {
    pub fn calculate(difficulty: &Difficulty, map: &NoteSequence) -> Self {
        let map_attrs = map.attributes().difficulty(difficulty).build();

        let movements = Movement::from_notes(
            &map.notes,
            map_attrs.clock_rate,
            map_attrs.radius(),
            map_attrs.hit_windows.meh,
        );

        let aim_skill = Aim::new(&movements, map.notes.len(), difficulty.hit_probability)
            .skill_level(difficulty.misses);

        let mut tap = Tap::new();

        for movement in movements.iter() {
            tap.process(movement);
        }

        let attrs = DifficultyAttributes {
            n_objects: map.n_objects(),
            n_circles: map.n_circles(),
            cs: map_attrs.cs,
            ar: map_attrs.ar,
            od: map_attrs.od,
            clock_rate: map_attrs.clock_rate,
            ..Default::default()
        };

        Self {
            aim_skill,
            max_strain: tap.max_strain(),
            attrs,
        }
    }
}
