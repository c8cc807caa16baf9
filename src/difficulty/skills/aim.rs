use crate::{
    difficulty::{
        evaluators::{HitProbabilityFn, Movement},
        skill_level::SkillLevel,
    },
    util::root_finding::RootFinder,
};

/// Aim skill.
///
/// Finds the skill level at which the expected amount of misses equals the
/// given miss count plus one.
pub struct Aim<'a> {
    movements: &'a [Movement],
    n_objects: usize,
    hit_probability: HitProbabilityFn,
}

impl<'a> Aim<'a> {
    const GUESS_LOWER_BOUND: f64 = 0.0;
    const GUESS_UPPER_BOUND: f64 = 0.01;

    pub fn new(
        movements: &'a [Movement],
        n_objects: usize,
        hit_probability: HitProbabilityFn,
    ) -> Self {
        Self {
            movements,
            n_objects,
            hit_probability,
        }
    }

    /// Expected amount of hits for the given skill level.
    ///
    /// The first note is always hit.
    pub fn expected_hits(&self, skill: f64) -> f64 {
        let hit_probability = self.hit_probability;

        1.0 + self
            .movements
            .iter()
            .map(|movement| hit_probability(movement, skill))
            .sum::<f64>()
    }

    pub fn skill_level(&self, misses: u32) -> SkillLevel {
        let threshold = 1.0 + f64::from(misses);
        let n_objects = self.n_objects as f64;

        let expected_misses_over_threshold =
            |skill: f64| n_objects - self.expected_hits(skill) - threshold;

        // Even a skill of zero hits enough notes
        if expected_misses_over_threshold(0.0) <= 0.0 {
            return SkillLevel::Finite(0.0);
        }

        match RootFinder::DEFAULT.find_root_expand(
            expected_misses_over_threshold,
            Self::GUESS_LOWER_BOUND,
            Self::GUESS_UPPER_BOUND,
        ) {
            Ok(skill) => {
                log_debug!(skill, misses, "solved aim skill level");

                SkillLevel::Finite(skill)
            }
            Err(_err) => {
                log_warn!(error = %_err, misses, "aim skill level is unattainable");

                SkillLevel::Unattainable
            }
        }
    }
}
