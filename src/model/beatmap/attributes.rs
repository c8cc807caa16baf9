use crate::{difficulty::ModsDependent, model::mods::GameMods, Difficulty};

use super::NoteSequence;

/// Summary struct for a [`NoteSequence`]'s mod-adjusted attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct BeatmapAttributes {
    /// The circle size.
    pub cs: f64,
    /// The approach rate.
    pub ar: f64,
    /// The overall difficulty.
    pub od: f64,
    /// The clock rate with respect to mods.
    pub clock_rate: f64,
    /// The hit windows for overall difficulty.
    pub hit_windows: HitWindows,
}

impl BeatmapAttributes {
    /// Radius of a circle in playfield pixels.
    pub fn radius(&self) -> f64 {
        circle_radius(self.cs)
    }
}

/// Radius of a circle in playfield pixels for the given circle size.
pub fn circle_radius(cs: f64) -> f64 {
    54.4 - 4.48 * cs
}

/// Clock-rate adjusted OD hit windows in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitWindows {
    /// Time to hit a 300 ("Great").
    pub great: f64,
    /// Time to hit a 100 ("Ok").
    pub ok: f64,
    /// Time to hit a 50 ("Meh").
    pub meh: f64,
}

impl HitWindows {
    pub fn new(od: f64, clock_rate: f64) -> Self {
        Self {
            great: (79.5 - 6.0 * od) / clock_rate,
            ok: (139.5 - 8.0 * od) / clock_rate,
            meh: (199.5 - 10.0 * od) / clock_rate,
        }
    }
}

/// A builder for [`BeatmapAttributes`].
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct BeatmapAttributesBuilder {
    cs: ModsDependent,
    ar: ModsDependent,
    od: ModsDependent,
    mods: GameMods,
    clock_rate: Option<f64>,
}

impl BeatmapAttributesBuilder {
    /// Create a new [`BeatmapAttributesBuilder`].
    ///
    /// Attributes are set to `5.0`.
    pub const fn new() -> Self {
        Self {
            cs: ModsDependent::new(5.0),
            ar: ModsDependent::new(5.0),
            od: ModsDependent::new(5.0),
            mods: GameMods::DEFAULT,
            clock_rate: None,
        }
    }

    /// Use the given [`NoteSequence`]'s attributes.
    pub fn map(self, map: &NoteSequence) -> Self {
        Self {
            cs: ModsDependent::new(map.cs),
            ar: ModsDependent::new(map.ar),
            od: ModsDependent::new(map.od),
            ..self
        }
    }

    /// Specify the circle size.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub const fn cs(mut self, cs: f64, with_mods: bool) -> Self {
        self.cs = ModsDependent {
            value: cs,
            with_mods,
        };

        self
    }

    /// Specify the approach rate.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub const fn ar(mut self, ar: f64, with_mods: bool) -> Self {
        self.ar = ModsDependent {
            value: ar,
            with_mods,
        };

        self
    }

    /// Specify the overall difficulty.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub const fn od(mut self, od: f64, with_mods: bool) -> Self {
        self.od = ModsDependent {
            value: od,
            with_mods,
        };

        self
    }

    /// Specify the mods.
    pub fn mods(mut self, mods: impl Into<GameMods>) -> Self {
        self.mods = mods.into();

        self
    }

    /// Specify a custom clock rate.
    pub const fn clock_rate(mut self, clock_rate: f64) -> Self {
        self.clock_rate = Some(clock_rate);

        self
    }

    /// Specify all settings through [`Difficulty`].
    pub fn difficulty(self, difficulty: &Difficulty) -> Self {
        Self {
            cs: difficulty.get_cs().unwrap_or(self.cs),
            ar: difficulty.get_ar().unwrap_or(self.ar),
            od: difficulty.get_od().unwrap_or(self.od),
            mods: difficulty.get_mods().clone(),
            clock_rate: Some(difficulty.get_clock_rate()),
        }
    }

    /// Calculate the [`BeatmapAttributes`].
    pub fn build(&self) -> BeatmapAttributes {
        let mods = &self.mods;
        let clock_rate = self.clock_rate.unwrap_or_else(|| mods.clock_rate());

        let adjust = |attr: ModsDependent, custom: Option<f64>, apply: fn(&GameMods, f64) -> f64| {
            if attr.with_mods {
                attr.value
            } else if let Some(custom) = custom {
                custom
            } else {
                apply(mods, attr.value)
            }
        };

        let cs = adjust(self.cs, mods.custom_cs(), GameMods::apply_cs);
        let ar = adjust(self.ar, mods.custom_ar(), GameMods::apply_od_ar);
        let od = adjust(self.od, mods.custom_od(), GameMods::apply_od_ar);

        BeatmapAttributes {
            cs,
            ar,
            od,
            clock_rate,
            hit_windows: HitWindows::new(od, clock_rate),
        }
    }
}

impl Default for BeatmapAttributesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
