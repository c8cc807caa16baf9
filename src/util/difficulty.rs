use std::f64::consts::{FRAC_2_SQRT_PI, PI, SQRT_2};

use crate::util::float_ext::FloatExt;

/// Arguments below this magnitude use the power series of `erf` instead of
/// `1 - erfc` to keep relative precision around zero.
const ERF_SERIES_THRESHOLD: f64 = 0.5;

const WINITZKI_A: f64 = 0.147;

pub fn norm<const N: usize>(p: f64, values: [f64; N]) -> f64 {
    values
        .into_iter()
        .map(|x| f64::powf(x, p))
        .sum::<f64>()
        .powf(p.recip())
}

/// The error function.
pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }

    if FloatExt::eq(x, 0.0) {
        return 0.0;
    }

    if x.abs() < ERF_SERIES_THRESHOLD {
        return erf_series(x);
    }

    if x.is_sign_positive() {
        1.0 - erfc(x)
    } else {
        erfc(-x) - 1.0
    }
}

/// The complementary error function `1 - erf(x)`.
///
/// Chebyshev fit with a fractional error below `1.2e-7` everywhere, so the
/// far tail keeps its relative precision instead of cancelling to zero.
pub fn erfc(x: f64) -> f64 {
    #![allow(clippy::unreadable_literal)]

    if x.is_nan() {
        return f64::NAN;
    }

    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);

    let poly = -z * z - 1.26551223
        + t * (1.00002368
            + t * (0.37409196
                + t * (0.09678418
                    + t * (-0.18628806
                        + t * (0.27886807
                            + t * (-1.13520398
                                + t * (1.48851587 + t * (-0.82215223 + t * 0.17087277))))))));

    let erfc = t * f64::exp(poly);

    if x >= 0.0 {
        erfc
    } else {
        2.0 - erfc
    }
}

fn erf_series(x: f64) -> f64 {
    let x2 = x * x;
    let mut term = x;
    let mut sum = x;

    for n in 1..24 {
        let n = f64::from(n);
        term *= -x2 / n;
        let addend = term / (2.0 * n + 1.0);
        sum += addend;

        if addend.abs() < f64::EPSILON * sum.abs() {
            break;
        }
    }

    FRAC_2_SQRT_PI * sum
}

/// Inverse of [`erf`].
///
/// Starts from Winitzki's approximation and polishes it with two Newton
/// steps against [`erf`].
pub fn erf_inv(mut x: f64) -> f64 {
    if x <= -1.0 {
        return f64::NEG_INFINITY;
    }

    if x >= 1.0 {
        return f64::INFINITY;
    }

    if FloatExt::eq(x, 0.0) {
        return 0.0;
    }

    let sgn = f64::signum(x);
    x = f64::abs(x);

    let ln = f64::ln(1.0 - x * x);
    let t1 = 2.0 / (PI * WINITZKI_A) + ln / 2.0;
    let t2 = ln / WINITZKI_A;
    let base_approx = f64::sqrt(t1 * t1 - t2) - t1;

    // * Correction reduces max error from -0.005 to -0.00045.
    let c = if x >= 0.85 {
        f64::powf((x - 0.85) / 0.293, 8.0)
    } else {
        0.0
    };

    let mut y = f64::sqrt(base_approx) + c;

    for _ in 0..2 {
        let slope = FRAC_2_SQRT_PI * f64::exp(-y * y);

        if slope <= 0.0 {
            break;
        }

        y -= (erf(y) - x) / slope;
    }

    sgn * y
}

/// Probability that a normally distributed error with standard deviation
/// `deviation` lands within `[-window, window]`.
pub fn hit_chance(window: f64, deviation: f64) -> f64 {
    erf(window / (SQRT_2 * deviation))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn erf_reference_values() {
        assert!((erf(0.1) - 0.112_462_916_018_284_9).abs() < 1e-12);
        assert!((erf(0.5) - 0.520_499_877_813_046_5).abs() < 1e-7);
        assert!((erf(1.0) - 0.842_700_792_949_714_9).abs() < 1e-7);
        assert!((erf(2.0) - 0.995_322_265_018_952_7).abs() < 1e-7);
        assert!((erf(-1.0) + 0.842_700_792_949_714_9).abs() < 1e-7);
    }

    #[test]
    fn erf_limits() {
        assert!(FloatExt::eq(erf(f64::INFINITY), 1.0));
        assert!(FloatExt::eq(erf(f64::NEG_INFINITY), -1.0));
        assert!(erf(f64::NAN).is_nan());
        assert!(FloatExt::eq(erfc(f64::INFINITY), 0.0));
        assert!(FloatExt::eq(erfc(f64::NEG_INFINITY), 2.0));
    }

    #[test]
    fn erfc_keeps_tail_precision() {
        // erfc(5) = 1.5374597944280349e-12
        let expected = 1.537_459_794_428_034_9e-12;

        assert!(((erfc(5.0) - expected) / expected).abs() < 1e-6);
    }

    #[test]
    fn norm_of_single_value() {
        assert!((norm(3.0, [2.5, 0.0]) - 2.5).abs() < 1e-12);
        assert!((norm(3.0, [0.0, 4.0]) - 4.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn erf_is_odd(x in -6.0..6.0_f64) {
            prop_assert!((erf(x) + erf(-x)).abs() < 1e-12);
        }

        #[test]
        fn erf_and_erfc_complement(x in -6.0..6.0_f64) {
            prop_assert!((erf(x) + erfc(x) - 1.0).abs() < 1e-6);
        }

        #[test]
        fn erf_inv_inverts_erf(y in -0.999..0.999_f64) {
            prop_assert!((erf(erf_inv(y)) - y).abs() < 1e-6);
        }
    }
}
