use std::{error, fmt};

use crate::util::float_ext::FloatExt;

/// Failure of [`Minimizer::minimize`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MinimizeError {
    /// The objective is flat or non-finite around the initial guess.
    NoDescent,
    /// Walking downhill never reached a point where the objective rises again.
    NotBracketed,
    /// Brent's method ran out of iterations.
    NotConverged,
}

impl error::Error for MinimizeError {}

impl fmt::Display for MinimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDescent => f.write_str("objective is flat around the initial guess"),
            Self::NotBracketed => f.write_str("failed to bracket a minimum"),
            Self::NotConverged => f.write_str("minimizer did not converge"),
        }
    }
}

/// Derivative-free scalar minimizer.
///
/// A downhill walk with doubling steps brackets a minimum, then Brent's
/// combination of golden-section search and parabolic interpolation
/// narrows it down. `NaN` values of the objective count as `+inf`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Minimizer {
    pub initial_step: f64,
    pub tolerance: f64,
    pub max_bracket_steps: usize,
    pub max_iterations: usize,
}

impl Minimizer {
    pub const DEFAULT: Self = Self {
        initial_step: 0.5,
        tolerance: 2e-8,
        max_bracket_steps: 50,
        max_iterations: 100,
    };

    const GOLDEN_SECTION: f64 = 0.381_966_011_250_105_1;
    const ZEPS: f64 = 1e-10;

    /// Returns the argument minimizing `f`, searching from `guess`.
    pub fn minimize<F>(&self, f: F, guess: f64) -> Result<f64, MinimizeError>
    where
        F: Fn(f64) -> f64,
    {
        let f = |x: f64| f(x).nan_to_inf();
        let (a, b, c, fb) = self.bracket(&f, guess)?;

        self.brent(&f, a, b, c, fb)
    }

    /// Finds `a < b < c` (or `a > b > c`) with `f(b)` below both `f(a)` and
    /// `f(c)`.
    fn bracket<F>(&self, f: &F, guess: f64) -> Result<(f64, f64, f64, f64), MinimizeError>
    where
        F: Fn(f64) -> f64,
    {
        let f_guess = f(guess);
        let f_right = f(guess + self.initial_step);
        let f_left = f(guess - self.initial_step);

        let direction = if f_right < f_guess && f_right <= f_left {
            1.0
        } else if f_left < f_guess {
            -1.0
        } else if f_guess.is_finite() && f_guess <= f_left && f_guess <= f_right {
            return Ok((
                guess - self.initial_step,
                guess,
                guess + self.initial_step,
                f_guess,
            ));
        } else {
            return Err(MinimizeError::NoDescent);
        };

        let mut step = self.initial_step;
        let mut prev = guess;
        let mut curr = guess + direction * step;
        let mut f_curr = if direction > 0.0 { f_right } else { f_left };

        for _ in 0..self.max_bracket_steps {
            step *= 2.0;
            let next = curr + direction * step;
            let f_next = f(next);

            if f_next >= f_curr {
                return Ok((prev, curr, next, f_curr));
            }

            prev = curr;
            curr = next;
            f_curr = f_next;
        }

        Err(MinimizeError::NotBracketed)
    }

    fn brent<F>(&self, f: &F, a: f64, b: f64, c: f64, fb: f64) -> Result<f64, MinimizeError>
    where
        F: Fn(f64) -> f64,
    {
        let mut lo = a.min(c);
        let mut hi = a.max(c);

        let mut x = b;
        let mut w = b;
        let mut v = b;
        let mut fx = fb;
        let mut fw = fb;
        let mut fv = fb;

        let mut d: f64 = 0.0;
        let mut e: f64 = 0.0;

        for _ in 0..self.max_iterations {
            let xm = 0.5 * (lo + hi);
            let tol1 = self.tolerance * x.abs() + Self::ZEPS;
            let tol2 = 2.0 * tol1;

            if (x - xm).abs() <= tol2 - 0.5 * (hi - lo) {
                return Ok(x);
            }

            let golden_step = |x: f64| {
                let e = if x >= xm { lo - x } else { hi - x };

                (e, Self::GOLDEN_SECTION * e)
            };

            if e.abs() > tol1 {
                // Fit a parabola through x, v, w
                let r = (x - w) * (fx - fv);
                let mut q = (x - v) * (fx - fw);
                let mut p = (x - v) * q - (x - w) * r;
                q = 2.0 * (q - r);

                if q > 0.0 {
                    p = -p;
                }

                q = q.abs();
                let prev_e = e;
                e = d;

                let parabola_fits = p.abs() < (0.5 * q * prev_e).abs()
                    && p > q * (lo - x)
                    && p < q * (hi - x);

                if parabola_fits {
                    d = p / q;
                    let u = x + d;

                    if u - lo < tol2 || hi - u < tol2 {
                        d = tol1.copysign(xm - x);
                    }
                } else {
                    (e, d) = golden_step(x);
                }
            } else {
                (e, d) = golden_step(x);
            }

            let u = if d.abs() >= tol1 {
                x + d
            } else {
                x + tol1.copysign(d)
            };

            let fu = f(u);

            if fu <= fx {
                if u >= x {
                    lo = x;
                } else {
                    hi = x;
                }

                v = w;
                fv = fw;
                w = x;
                fw = fx;
                x = u;
                fx = fu;
            } else {
                if u < x {
                    lo = u;
                } else {
                    hi = u;
                }

                if fu <= fw || FloatExt::eq(w, x) {
                    v = w;
                    fv = fw;
                    w = u;
                    fw = fu;
                } else if fu <= fv || FloatExt::eq(v, x) || FloatExt::eq(v, w) {
                    v = u;
                    fv = fu;
                }
            }
        }

        Err(MinimizeError::NotConverged)
    }
}

impl Default for Minimizer {
    fn default() -> Self {
        Self::DEFAULT
    }
}
