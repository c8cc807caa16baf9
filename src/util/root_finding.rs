use std::{error, fmt};

/// Failure of [`RootFinder::find_root_expand`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RootError {
    /// No sign change was found while expanding the bracket.
    NotBracketed,
    /// Brent's method ran out of iterations.
    NotConverged,
}

impl error::Error for RootError {}

impl fmt::Display for RootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotBracketed => f.write_str("failed to bracket a root"),
            Self::NotConverged => f.write_str("root finder did not converge"),
        }
    }
}

/// Bracket-expanding root finder backed by Brent's method.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RootFinder {
    pub accuracy: f64,
    pub max_iterations: usize,
    pub expansion_factor: f64,
    pub max_expansions: usize,
}

impl RootFinder {
    pub const DEFAULT: Self = Self {
        accuracy: 1e-8,
        max_iterations: 100,
        expansion_factor: 1.6,
        max_expansions: 50,
    };

    /// Finds a root of `f` starting from `[lower, upper]`.
    ///
    /// While `f` has the same sign on both ends, the bracket moves upwards:
    /// the previous upper bound becomes the lower bound and the width grows
    /// by `expansion_factor`. The lower bound never goes below its initial
    /// value.
    pub fn find_root_expand<F>(&self, mut f: F, lower: f64, upper: f64) -> Result<f64, RootError>
    where
        F: FnMut(f64) -> f64,
    {
        let mut lower = lower;
        let mut upper = upper;
        let mut f_lower = f(lower);
        let mut f_upper = f(upper);

        let mut expansions = 0;

        while !Self::is_bracket(f_lower, f_upper) {
            if expansions == self.max_expansions || !f_upper.is_finite() {
                return Err(RootError::NotBracketed);
            }

            let width = upper - lower;
            lower = upper;
            f_lower = f_upper;
            upper += width * (1.0 + self.expansion_factor);
            f_upper = f(upper);
            expansions += 1;
        }

        self.brent(f, lower, upper, f_lower, f_upper)
    }

    fn is_bracket(fa: f64, fb: f64) -> bool {
        fa == 0.0 || fb == 0.0 || (fa < 0.0) != (fb < 0.0)
    }

    fn brent<F>(
        &self,
        mut f: F,
        mut a: f64,
        mut b: f64,
        mut fa: f64,
        mut fb: f64,
    ) -> Result<f64, RootError>
    where
        F: FnMut(f64) -> f64,
    {
        if fa == 0.0 {
            return Ok(a);
        }

        let mut c = b;
        let mut fc = fb;
        let mut d = b - a;
        let mut e = d;

        for _ in 0..self.max_iterations {
            if (fb > 0.0 && fc > 0.0) || (fb < 0.0 && fc < 0.0) {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }

            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }

            let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * self.accuracy;
            let xm = 0.5 * (c - b);

            if xm.abs() <= tol || fb == 0.0 {
                return Ok(b);
            }

            if e.abs() >= tol && fa.abs() > fb.abs() {
                // Inverse quadratic interpolation, or secant if only two
                // distinct points are known
                let s = fb / fa;

                let (mut p, mut q) = if a == c {
                    (2.0 * xm * s, 1.0 - s)
                } else {
                    let q = fa / fc;
                    let r = fb / fc;

                    (
                        s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                        (q - 1.0) * (r - 1.0) * (s - 1.0),
                    )
                };

                if p > 0.0 {
                    q = -q;
                }

                p = p.abs();

                let min1 = 3.0 * xm * q - (tol * q).abs();
                let min2 = (e * q).abs();

                if 2.0 * p < min1.min(min2) {
                    e = d;
                    d = p / q;
                } else {
                    d = xm;
                    e = d;
                }
            } else {
                d = xm;
                e = d;
            }

            a = b;
            fa = fb;

            b += if d.abs() > tol { d } else { tol.copysign(xm) };
            fb = f(b);
        }

        Err(RootError::NotConverged)
    }
}

impl Default for RootFinder {
    fn default() -> Self {
        Self::DEFAULT
    }
}
