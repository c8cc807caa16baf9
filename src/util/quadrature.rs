use std::{f64::consts::PI, sync::OnceLock};

/// Fixed-order Gauss–Legendre rule on `[-1, 1]`.
pub struct GaussLegendre<const N: usize> {
    nodes: [f64; N],
    weights: [f64; N],
}

static ORDER_64: OnceLock<GaussLegendre<64>> = OnceLock::new();

impl GaussLegendre<64> {
    /// The shared 64-point rule.
    pub fn order_64() -> &'static Self {
        ORDER_64.get_or_init(Self::new)
    }
}

impl<const N: usize> GaussLegendre<N> {
    const NEWTON_TOLERANCE: f64 = 1e-15;
    const MAX_NEWTON_STEPS: usize = 100;

    /// Computes the nodes as roots of the Legendre polynomial `P_N` via
    /// Newton's method.
    pub fn new() -> Self {
        let mut nodes = [0.0; N];
        let mut weights = [0.0; N];
        let n = N as f64;

        for i in 0..N.div_ceil(2) {
            let mut z = f64::cos(PI * (i as f64 + 0.75) / (n + 0.5));
            let mut derivative = 0.0;

            for _ in 0..Self::MAX_NEWTON_STEPS {
                let (p, dp) = Self::legendre(z);
                derivative = dp;

                let prev = z;
                z -= p / dp;

                if (z - prev).abs() <= Self::NEWTON_TOLERANCE {
                    break;
                }
            }

            let weight = 2.0 / ((1.0 - z * z) * derivative * derivative);

            nodes[i] = -z;
            nodes[N - 1 - i] = z;
            weights[i] = weight;
            weights[N - 1 - i] = weight;
        }

        Self { nodes, weights }
    }

    /// `P_N(z)` and its derivative.
    fn legendre(z: f64) -> (f64, f64) {
        let mut p1 = 1.0;
        let mut p2 = 0.0;

        for j in 0..N {
            let j = j as f64;
            let p3 = p2;
            p2 = p1;
            p1 = ((2.0 * j + 1.0) * z * p2 - j * p3) / (j + 1.0);
        }

        let dp = N as f64 * (z * p1 - p2) / (z * z - 1.0);

        (p1, dp)
    }

    /// Approximates `∫ f(x) dx` over `[a, b]`.
    pub fn integrate<F>(&self, f: F, a: f64, b: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let half_width = 0.5 * (b - a);
        let center = 0.5 * (a + b);

        let sum: f64 = self
            .nodes
            .iter()
            .zip(self.weights.iter())
            .map(|(&node, &weight)| weight * f(center + half_width * node))
            .sum();

        half_width * sum
    }
}

impl<const N: usize> Default for GaussLegendre<N> {
    fn default() -> Self {
        Self::new()
    }
}
