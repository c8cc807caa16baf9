use crate::{
    difficulty::{Calibration, DifficultyAttributes},
    util::{
        difficulty::{hit_chance, norm},
        float_ext::FloatExt,
    },
};

use super::{attributes::PerformanceAttributes, judgments::Judgments};

/// Deviation in milliseconds at which tap pp is scaled by `erf(1/√2)`.
const TAP_DEVIATION_SCALE: f64 = 13.0;

/// Blend the aim and tap star ratings with a 3-norm.
pub(crate) fn total_stars(aim: f64, tap: f64) -> f64 {
    norm(3.0, [aim, tap])
}

pub(crate) struct SkillPerformanceCalculator<'a> {
    attrs: DifficultyAttributes,
    calibration: &'a Calibration,
    judgments: Judgments,
    deviation: f64,
}

impl<'a> SkillPerformanceCalculator<'a> {
    pub const fn new(
        attrs: DifficultyAttributes,
        calibration: &'a Calibration,
        judgments: Judgments,
        deviation: f64,
    ) -> Self {
        Self {
            attrs,
            calibration,
            judgments,
            deviation,
        }
    }

    pub fn calculate(self) -> PerformanceAttributes {
        let pp_aim = self.compute_aim_value();
        let deviation_scaling_factor = self.compute_deviation_scaling_factor();
        let pp_tap = self.compute_tap_value(deviation_scaling_factor);
        let pp_acc = self.compute_accuracy_value();

        PerformanceAttributes {
            pp: pp_aim + pp_tap + pp_acc,
            pp_aim,
            pp_tap,
            pp_acc,
            deviation: self.deviation,
            deviation_scaling_factor,
            accuracy: self.judgments.accuracy(),
            judgments: self.judgments,
            difficulty: self.attrs,
        }
    }

    fn compute_aim_value(&self) -> f64 {
        if !self.attrs.is_aim_attainable() {
            return f64::INFINITY;
        }

        self.attrs.aim.powi(3)
    }

    fn compute_deviation_scaling_factor(&self) -> f64 {
        hit_chance(TAP_DEVIATION_SCALE, self.deviation)
    }

    fn compute_tap_value(&self, deviation_scaling_factor: f64) -> f64 {
        if FloatExt::eq(deviation_scaling_factor, 0.0) {
            return 0.0;
        }

        self.attrs.tap.powi(3) * deviation_scaling_factor
    }

    fn compute_accuracy_value(&self) -> f64 {
        if self.attrs.n_circles == 0 || self.attrs.n_objects == 0 {
            return 0.0;
        }

        self.calibration.accuracy_scaling / self.deviation.powi(2)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::SQRT_2;

    use proptest::prelude::*;

    use crate::{difficulty::skill_level::SkillLevel, util::difficulty::erf};

    use super::*;

    fn attrs(aim: f64, tap: f64) -> DifficultyAttributes {
        DifficultyAttributes {
            aim,
            tap,
            stars: total_stars(aim, tap),
            n_objects: 100,
            n_circles: 80,
            od: 8.0,
            clock_rate: 1.0,
            aim_skill: SkillLevel::Finite(1.0),
            ..Default::default()
        }
    }

    fn calculate(attrs: DifficultyAttributes, deviation: f64) -> PerformanceAttributes {
        let judgments = Judgments::new(attrs.n_circles, 0, 0, 0);

        SkillPerformanceCalculator::new(attrs, &Calibration::DEFAULT, judgments, deviation)
            .calculate()
    }

    #[test]
    fn parts_add_up() {
        let perf = calculate(attrs(3.0, 2.0), 15.0);

        assert!((perf.pp_aim - 27.0).abs() < 1e-12);
        assert!((perf.pp - (perf.pp_aim + perf.pp_tap + perf.pp_acc)).abs() < 1e-12);
        assert!((perf.pp_acc - 4750.0 / 225.0).abs() < 1e-12);

        let factor = erf(13.0 / (SQRT_2 * 15.0));
        assert!((perf.pp_tap - 8.0 * factor).abs() < 1e-12);
    }

    #[test]
    fn infinite_deviation_voids_tap_and_accuracy() {
        let perf = calculate(attrs(3.0, 2.0), f64::INFINITY);

        assert!(perf.deviation_scaling_factor.abs() < f64::EPSILON);
        assert!(perf.pp_tap.abs() < f64::EPSILON);
        assert!(perf.pp_acc.abs() < f64::EPSILON);
        assert!((perf.pp - 27.0).abs() < 1e-12);
    }

    #[test]
    fn infinite_tap_without_deviation() {
        let perf = calculate(attrs(3.0, f64::INFINITY), f64::INFINITY);

        assert!(perf.pp_tap.abs() < f64::EPSILON);
        assert!(!perf.pp.is_nan());
        assert!((perf.pp - 27.0).abs() < 1e-12);
    }

    #[test]
    fn no_circles_no_accuracy() {
        let attrs = DifficultyAttributes {
            n_circles: 0,
            ..attrs(1.0, 1.0)
        };

        assert!(calculate(attrs, 10.0).pp_acc.abs() < f64::EPSILON);
    }

    #[test]
    fn unattainable_aim_is_infinite() {
        let attrs = DifficultyAttributes {
            aim: f64::INFINITY,
            aim_skill: SkillLevel::Unattainable,
            ..attrs(1.0, 1.0)
        };

        let perf = calculate(attrs, 10.0);

        assert!(perf.pp_aim.is_infinite());
        assert!(perf.pp.is_infinite());
    }

    proptest! {
        #[test]
        fn stars_reduce_to_single_skill(rating in 0.0_f64..20.0) {
            prop_assert!((total_stars(rating, 0.0) - rating).abs() < 1e-9);
            prop_assert!((total_stars(0.0, rating) - rating).abs() < 1e-9);
        }

        #[test]
        fn stars_bounded_by_parts(aim in 0.0_f64..20.0, tap in 0.0_f64..20.0) {
            let stars = total_stars(aim, tap);

            prop_assert!(stars + 1e-9 >= aim.max(tap));
            prop_assert!(stars <= aim + tap + 1e-9);
        }
    }
}
