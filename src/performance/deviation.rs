use std::f64::consts::SQRT_2;

use crate::{
    model::beatmap::HitWindows,
    util::{
        difficulty::{erf_inv, erfc, hit_chance},
        minimize::Minimizer,
    },
};

use super::judgments::Judgments;

/// Signature of [`DeviationEstimator::estimate_deviation`].
pub type DeviationEstimatorFn = fn(&Judgments, &HitWindows) -> f64;

/// Estimates a player's hit-timing standard deviation in milliseconds from
/// their judgments.
///
/// Returns `+inf` if no finite deviation can be estimated.
pub trait DeviationEstimator {
    fn estimate_deviation(judgments: &Judgments, hit_windows: &HitWindows) -> f64;
}

/// [`DeviationEstimator`] maximizing the likelihood of all judgment counts.
///
/// Each count receives one additional pseudo-observation so that counts of
/// zero still carry information.
pub struct MaximumLikelihood;

impl MaximumLikelihood {
    const PRIOR: f64 = 1.0;
    const INITIAL_DEVIATION: f64 = 8.0;

    /// Negative log-likelihood of the judgments for a deviation of
    /// `exp(ln_deviation)`.
    fn negative_log_likelihood(
        judgments: &Judgments,
        hit_windows: &HitWindows,
        ln_deviation: f64,
    ) -> f64 {
        let deviation = ln_deviation.exp();
        let z = |window: f64| window / (SQRT_2 * deviation);

        let p300 = hit_chance(hit_windows.great, deviation);
        let p100 = erfc(z(hit_windows.great)) - erfc(z(hit_windows.ok));
        let p50 = erfc(z(hit_windows.ok)) - erfc(z(hit_windows.meh));

        let weighted =
            |count: u32, probability: f64| (f64::from(count) + Self::PRIOR) * probability.ln();

        -(weighted(judgments.n300, p300)
            + weighted(judgments.n100, p100)
            + weighted(judgments.n50, p50))
    }
}

impl DeviationEstimator for MaximumLikelihood {
    fn estimate_deviation(judgments: &Judgments, hit_windows: &HitWindows) -> f64 {
        let nll =
            |ln_deviation: f64| Self::negative_log_likelihood(judgments, hit_windows, ln_deviation);

        match Minimizer::DEFAULT.minimize(nll, Self::INITIAL_DEVIATION.ln()) {
            Ok(ln_deviation) if ln_deviation.exp().is_finite() => {
                let deviation = ln_deviation.exp();
                log_debug!(deviation, "fitted deviation");

                deviation
            }
            Ok(_ln_deviation) => {
                log_warn!(ln_deviation = _ln_deviation, "fitted deviation is not finite");

                f64::INFINITY
            }
            Err(_err) => {
                log_warn!(error = %_err, "failed to fit deviation");

                f64::INFINITY
            }
        }
    }
}

/// [`DeviationEstimator`] inverting the chance of a 300.
///
/// Only the amount of 300s is taken into account.
pub struct ClosedForm;

impl ClosedForm {
    const PRIOR: f64 = 1.0;
}

impl DeviationEstimator for ClosedForm {
    fn estimate_deviation(judgments: &Judgments, hit_windows: &HitWindows) -> f64 {
        let n300 = f64::from(judgments.n300);
        let total = f64::from(judgments.total());

        let p300 = (n300 + Self::PRIOR) / (total + 2.0 * Self::PRIOR);
        let deviation = hit_windows.great / (SQRT_2 * erf_inv(p300));

        if deviation.is_finite() && deviation > 0.0 {
            deviation
        } else {
            f64::INFINITY
        }
    }
}
