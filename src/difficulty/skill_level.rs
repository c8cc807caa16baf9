/// Result of solving for the aim skill level.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum SkillLevel {
    /// A nonnegative skill level that satisfies the miss threshold.
    Finite(f64),
    /// No finite skill level satisfies the miss threshold.
    Unattainable,
}

impl SkillLevel {
    /// Exponent such that a 1.5x skill ratio is a 1.4x rating ratio.
    pub(crate) fn star_rating_power() -> f64 {
        f64::ln(1.4) / f64::ln(1.5)
    }

    pub(crate) const fn is_attainable(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Scale the skill level into a star rating.
    pub(crate) fn star_rating(self, scaling: f64) -> f64 {
        match self {
            Self::Finite(skill) => scaling * skill.powf(Self::star_rating_power()),
            Self::Unattainable => f64::INFINITY,
        }
    }
}

impl Default for SkillLevel {
    fn default() -> Self {
        Self::Finite(0.0)
    }
}
