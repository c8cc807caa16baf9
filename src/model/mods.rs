use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use rosu_mods::{
    generated_mods::DifficultyAdjustOsu, GameMod, GameModIntermode, GameMods as GameModsLazer,
    GameModsIntermode, GameModsLegacy,
};

/// Collection of game mods.
///
/// Only the clock rate and the difficulty-adjusting mods `Easy`, `HardRock`
/// and `DifficultyAdjust` affect the calculation.
///
/// This type can be created through its `From<T>` implementations where `T`
/// can be
/// - `u32`
/// - [`rosu_mods::GameModsLegacy`]
/// - [`rosu_mods::GameMods`]
/// - [`rosu_mods::GameModsIntermode`]
/// - [`&rosu_mods::GameModsIntermode`](rosu_mods::GameModsIntermode)
///
/// # Example
///
/// ```
/// use rosu_skill_pp::GameMods;
/// use rosu_mods::GameModsLegacy;
///
/// let int = GameMods::from(64 + 16);
/// let legacy = GameMods::from(GameModsLegacy::DoubleTime | GameModsLegacy::HardRock);
///
/// assert_eq!(int.to_string(), "DTHR");
/// assert_eq!(legacy.to_string(), "DTHR");
/// ```
#[derive(Clone, PartialEq)]
pub struct GameMods {
    inner: GameModsInner,
}

impl Debug for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.inner {
            GameModsInner::Lazer(ref mods) => Debug::fmt(mods, f),
            GameModsInner::Intermode(ref mods) => Debug::fmt(mods, f),
            GameModsInner::Legacy(ref mods) => Debug::fmt(mods, f),
        }
    }
}

/// Inner type of [`GameMods`] so that remote types contained in variants don't
/// need to be re-exported.
#[derive(Clone, PartialEq)]
enum GameModsInner {
    Lazer(GameModsLazer),
    Intermode(GameModsIntermode),
    Legacy(GameModsLegacy),
}

impl GameMods {
    pub(crate) const DEFAULT: Self = Self {
        inner: GameModsInner::Legacy(GameModsLegacy::NoMod),
    };

    const EASY: u32 = 1 << 1;
    const HARD_ROCK: u32 = 1 << 4;
    const DOUBLE_TIME: u32 = 1 << 6;
    const HALF_TIME: u32 = 1 << 8;

    /// The nine combinations of {HT, none, DT} and {EZ, none, HR}.
    ///
    /// Sorted by clock rate first and by difficulty multiplier second, i.e.
    /// `HTEZ, HT, HTHR, EZ, NM, HR, DTEZ, DT, DTHR`.
    pub fn variants() -> [Self; 9] {
        const CLOCK: [u32; 3] = [GameMods::HALF_TIME, 0, GameMods::DOUBLE_TIME];
        const ADJUST: [u32; 3] = [GameMods::EASY, 0, GameMods::HARD_ROCK];

        std::array::from_fn(|i| Self::from(CLOCK[i / 3] | ADJUST[i % 3]))
    }

    /// Returns the mods' clock rate.
    ///
    /// In case of variable clock rates like for `WindUp`, this will return
    /// `1.0`.
    pub fn clock_rate(&self) -> f64 {
        match self.inner {
            GameModsInner::Lazer(ref mods) => mods.clock_rate().unwrap_or(1.0),
            GameModsInner::Intermode(ref mods) => mods.legacy_clock_rate(),
            GameModsInner::Legacy(mods) => mods.clock_rate(),
        }
    }

    /// Adjust the circle size according to `HardRock` and `Easy`.
    pub(crate) fn apply_cs(&self, cs: f64) -> f64 {
        if self.hr() {
            (cs * 1.3).min(10.0)
        } else if self.ez() {
            cs * 0.5
        } else {
            cs
        }
    }

    /// Adjust the approach rate or overall difficulty according to `HardRock`
    /// and `Easy`.
    pub(crate) fn apply_od_ar(&self, value: f64) -> f64 {
        if self.hr() {
            (value * 1.4).min(10.0)
        } else if self.ez() {
            value * 0.5
        } else {
            value
        }
    }

    /// The acronym label as shown in the variants' order, e.g. `"HTEZ"`.
    ///
    /// `"NM"` if neither a clock rate nor a difficulty mod is set.
    pub fn label(&self) -> &'static str {
        let clock = if self.dt() || self.nc() {
            1
        } else if self.ht() {
            -1
        } else {
            0
        };

        let adjust = if self.hr() {
            1
        } else if self.ez() {
            -1
        } else {
            0
        };

        match (clock, adjust) {
            (-1, -1) => "HTEZ",
            (-1, 0) => "HT",
            (-1, _) => "HTHR",
            (0, -1) => "EZ",
            (0, 0) => "NM",
            (0, _) => "HR",
            (_, -1) => "DTEZ",
            (_, 0) => "DT",
            _ => "DTHR",
        }
    }
}

macro_rules! impl_map_attr {
    ( $( $fn:ident: $field:ident [$s:literal] ;)* ) => {
        impl GameMods {
            $(
                #[doc = "Check whether the mods specify a custom "]
                #[doc = $s]
                #[doc = "value."]
                pub(crate) fn $fn(&self) -> Option<f64> {
                    match self.inner {
                        GameModsInner::Lazer(ref mods) => mods.iter().find_map(|gamemod| match gamemod {
                            GameMod::DifficultyAdjustOsu(DifficultyAdjustOsu { $field, .. }) => {
                                $field.map(f64::from)
                            }
                            _ => None,
                        }),
                        GameModsInner::Intermode(_) | GameModsInner::Legacy(_) => None,
                    }
                }
            )*
        }
    };
}

impl_map_attr! {
    custom_ar: approach_rate ["ar"];
    custom_cs: circle_size ["cs"];
    custom_od: overall_difficulty ["od"];
}

macro_rules! impl_has_mod {
    ( $( $fn:ident: $name:ident [ $s:literal ], )* ) => {
        impl GameMods {
            $(
                // workaround for <https://github.com/rust-lang/rust-analyzer/issues/8092>
                #[doc = "Check whether [`GameMods`] contain `"]
                #[doc = $s]
                #[doc = "`."]
                pub fn $fn(&self) -> bool {
                    match self.inner {
                        GameModsInner::Lazer(ref mods) => {
                            mods.contains_intermode(GameModIntermode::$name)
                        },
                        GameModsInner::Intermode(ref mods) => {
                            mods.contains(GameModIntermode::$name)
                        },
                        GameModsInner::Legacy(mods) => {
                            mods.contains(GameModsLegacy::$name)
                        },
                    }
                }
            )*
        }
    };
}

impl_has_mod! {
    ez: Easy ["Easy"],
    hr: HardRock ["HardRock"],
    dt: DoubleTime ["DoubleTime"],
    nc: Nightcore ["Nightcore"],
    ht: HalfTime ["HalfTime"],
}

impl Display for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

impl Default for GameMods {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<GameModsLazer> for GameMods {
    fn from(mods: GameModsLazer) -> Self {
        Self {
            inner: GameModsInner::Lazer(mods),
        }
    }
}

impl From<GameModsIntermode> for GameMods {
    fn from(mods: GameModsIntermode) -> Self {
        Self {
            inner: GameModsInner::Intermode(mods),
        }
    }
}

impl From<&GameModsIntermode> for GameMods {
    fn from(mods: &GameModsIntermode) -> Self {
        // If only legacy mods are set, use `GameModsLegacy` and thus avoid
        // allocating an owned `GameModsIntermode` instance.
        match mods.checked_bits() {
            Some(bits) => bits.into(),
            None => mods.to_owned().into(),
        }
    }
}

impl From<GameModsLegacy> for GameMods {
    fn from(mods: GameModsLegacy) -> Self {
        Self {
            inner: GameModsInner::Legacy(mods),
        }
    }
}

impl From<u32> for GameMods {
    fn from(bits: u32) -> Self {
        GameModsLegacy::from_bits(bits).into()
    }
}
