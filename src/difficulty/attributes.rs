use crate::{difficulty::skill_level::SkillLevel, performance::Performance};

/// The result of a difficulty calculation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DifficultyAttributes {
    /// The aim star rating.
    pub aim: f64,
    /// The tap star rating.
    pub tap: f64,
    /// The combined star rating.
    pub stars: f64,
    /// The peak strain of the tap skill.
    pub max_strain: f64,
    /// The amount of circles and sliders.
    pub n_objects: u32,
    /// The amount of circles.
    pub n_circles: u32,
    /// The mod-adjusted circle size.
    pub cs: f64,
    /// The mod-adjusted approach rate.
    pub ar: f64,
    /// The mod-adjusted overall difficulty.
    pub od: f64,
    /// The clock rate that was used.
    pub clock_rate: f64,
    pub(crate) aim_skill: SkillLevel,
}

impl DifficultyAttributes {
    /// Return the star value.
    pub const fn stars(&self) -> f64 {
        self.stars
    }

    /// Whether some finite aim skill level suffices for the given misses.
    ///
    /// If not, both the aim star rating and the aim pp are infinite.
    pub const fn is_aim_attainable(&self) -> bool {
        self.aim_skill.is_attainable()
    }

    /// Return a builder for performance calculation.
    pub fn performance<'a>(self) -> Performance<'a> {
        self.into()
    }
}
