use std::cmp;

/// Judgment counts of a play on circles.
///
/// The amount of 300s is derived from the other counts so that all of them
/// add up to the amount of circles.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Judgments {
    pub n300: u32,
    pub n100: u32,
    pub n50: u32,
    pub misses: u32,
}

impl Judgments {
    /// Distribute `n_circles` onto the given counts.
    ///
    /// Misses are clamped first, then 100s, then 50s, and the remaining
    /// circles are 300s.
    pub fn new(n_circles: u32, n100: u32, n50: u32, misses: u32) -> Self {
        let misses = cmp::min(misses, n_circles);
        let mut n_remaining = n_circles - misses;

        let n100 = cmp::min(n100, n_remaining);
        n_remaining -= n100;

        let n50 = cmp::min(n50, n_remaining);
        n_remaining -= n50;

        Self {
            n300: n_remaining,
            n100,
            n50,
            misses,
        }
    }

    /// Total amount of judgments.
    pub const fn total(&self) -> u32 {
        self.n300 + self.n100 + self.n50 + self.misses
    }

    /// Accuracy as a percentage in `[0, 100]`.
    pub fn accuracy(&self) -> f64 {
        let total = self.total();

        if total == 0 {
            return 0.0;
        }

        let numerator = 6 * self.n300 + 2 * self.n100 + self.n50;
        let denominator = 6 * total;

        100.0 * f64::from(numerator) / f64::from(denominator)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn derives_n300() {
        let judgments = Judgments::new(100, 5, 2, 1);

        assert_eq!(judgments.n300, 92);
        assert_eq!(judgments.total(), 100);
    }

    #[test]
    fn clamps_in_order() {
        let judgments = Judgments::new(10, 8, 8, 4);

        assert_eq!(
            judgments,
            Judgments {
                n300: 0,
                n100: 6,
                n50: 0,
                misses: 4,
            }
        );
    }

    #[test]
    fn accuracy_values() {
        assert!((Judgments::new(10, 0, 0, 0).accuracy() - 100.0).abs() < f64::EPSILON);
        assert!(Judgments::new(0, 0, 0, 0).accuracy().abs() < f64::EPSILON);

        let acc = Judgments::new(3, 1, 1, 0).accuracy();
        assert!((acc - 100.0 * 450.0 / 900.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn always_sums_to_circles(
            n_circles in 0_u32..10_000,
            n100 in 0_u32..20_000,
            n50 in 0_u32..20_000,
            misses in 0_u32..20_000
        ) {
            let judgments = Judgments::new(n_circles, n100, n50, misses);

            prop_assert_eq!(judgments.total(), n_circles);
            prop_assert!((0.0..=100.0).contains(&judgments.accuracy()));
        }
    }
}
