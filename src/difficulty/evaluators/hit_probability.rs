use std::f64::consts::{PI, SQRT_2};

use crate::{
    model::note::Note,
    util::{difficulty::erf, float_ext::FloatExt, quadrature::GaussLegendre},
};

/// The skill-independent part of moving from one note to the next.
///
/// Computed once per calculation so that evaluating the hit probability for
/// many skill levels only has to do the skill-dependent work.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Movement {
    /// Horizontal displacement in playfield pixels.
    pub dx: f64,
    /// Vertical displacement in playfield pixels.
    pub dy: f64,
    /// Clock-rate adjusted time since the previous note.
    pub delta_time: f64,
    /// Extra time gained by tapping early because the previous gap was
    /// longer. The first movement receives the full meh hit window.
    pub early_slack: f64,
    /// Extra time gained by tapping late because the next gap is longer.
    /// The last movement receives the full meh hit window.
    pub late_slack: f64,
    /// Clock-rate adjusted hit window of a 50.
    pub meh_hit_window: f64,
    /// Circle radius in playfield pixels.
    pub radius: f64,
}

impl Movement {
    /// Collect the movements between all consecutive notes.
    pub fn from_notes(
        notes: &[Note],
        clock_rate: f64,
        radius: f64,
        meh_hit_window: f64,
    ) -> Vec<Self> {
        let deltas: Vec<f64> = notes
            .windows(2)
            .map(|pair| pair[1].delta_time(&pair[0], clock_rate))
            .collect();

        let slack = |other: Option<&f64>, delta_time: f64| match other {
            Some(&other) if other > delta_time => meh_hit_window.min(other - delta_time),
            Some(_) => 0.0,
            None => meh_hit_window,
        };

        notes
            .windows(2)
            .zip(deltas.iter())
            .enumerate()
            .map(|(i, (pair, &delta_time))| {
                let (dx, dy) = pair[1].shift_from(&pair[0]);
                let prev_delta = i.checked_sub(1).and_then(|i| deltas.get(i));

                Self {
                    dx,
                    dy,
                    delta_time,
                    early_slack: slack(prev_delta, delta_time),
                    late_slack: slack(deltas.get(i + 1), delta_time),
                    meh_hit_window,
                    radius,
                }
            })
            .collect()
    }

    /// Euclidean distance between both notes.
    pub fn distance(&self) -> f64 {
        self.dx.hypot(self.dy)
    }

    /// Time available to aim when tapping early is taken into account.
    pub fn effective_time(&self) -> f64 {
        self.delta_time + self.early_slack
    }

    /// Resolves cases that do not depend on the model.
    ///
    /// Instant movements, a zero skill, or a zero radius can never be hit
    /// while stacked notes require no movement at all.
    fn trivial_probability(&self, skill: f64) -> Option<f64> {
        if FloatExt::eq(self.delta_time, 0.0)
            || FloatExt::eq(skill, 0.0)
            || FloatExt::eq(self.radius, 0.0)
        {
            Some(0.0)
        } else if FloatExt::eq(self.dx, 0.0) && FloatExt::eq(self.dy, 0.0) {
            Some(1.0)
        } else {
            None
        }
    }
}

/// Signature of [`HitProbability::hit_probability`].
pub type HitProbabilityFn = fn(&Movement, f64) -> f64;

/// Model for the chance that a player of a given skill level hits the note at
/// the end of a [`Movement`].
pub trait HitProbability {
    /// Returns a probability in `[0, 1]` for a nonnegative `skill`.
    fn hit_probability(movement: &Movement, skill: f64) -> f64;
}

/// [`HitProbability`] integrating a bivariate normal aim error over the
/// circle.
///
/// The deviation along each axis grows with the square root of the shift
/// along that axis and shrinks with the available time.
pub struct DiscIntegral;

impl DiscIntegral {
    /// Beyond this many standard deviations the vertical density is
    /// negligible.
    const INTEGRATION_CUTOFF: f64 = 10.0;
}

impl HitProbability for DiscIntegral {
    fn hit_probability(movement: &Movement, skill: f64) -> f64 {
        if let Some(probability) = movement.trivial_probability(skill) {
            return probability;
        }

        let scale = movement.effective_time() * skill;
        let x_deviation = movement.dx.abs().sqrt() / scale;
        let y_deviation = movement.dy.abs().sqrt() / scale;
        let radius = movement.radius;

        if FloatExt::eq(x_deviation, 0.0) {
            return erf(radius / (SQRT_2 * y_deviation));
        } else if FloatExt::eq(y_deviation, 0.0) {
            return erf(radius / (SQRT_2 * x_deviation));
        }

        let integrand = |y: f64| {
            let half_chord = (0.5 * (radius * radius - y * y)).max(0.0).sqrt();

            erf(half_chord / x_deviation) * f64::exp(-0.5 * y * y / (y_deviation * y_deviation))
        };

        let upper = radius.min(Self::INTEGRATION_CUTOFF * y_deviation);
        let integral = GaussLegendre::<64>::order_64().integrate(integrand, 0.0, upper);

        let probability = 2.0 / (y_deviation * f64::sqrt(2.0 * PI)) * integral;

        probability.clamp(0.0, 1.0)
    }
}

/// [`HitProbability`] treating the circle as a square so that both axes
/// contribute independently.
///
/// The aim error grows linearly with the distance and the perpendicular error
/// depends on the movement's angle, peaking at 45 degrees. Both the early and
/// the late slack contribute to the available time.
pub struct SquareApproximation;

impl SquareApproximation {
    const DISTANCE_OFFSET: f64 = 100.0;
    const ROTATION_FACTOR: f64 = 0.75;
}

impl HitProbability for SquareApproximation {
    fn hit_probability(movement: &Movement, skill: f64) -> f64 {
        if let Some(probability) = movement.trivial_probability(skill) {
            return probability;
        }

        let extra_time = (movement.early_slack + movement.late_slack).min(movement.meh_hit_window);
        let scale = skill * (movement.delta_time + extra_time);

        let radius = movement.radius;
        let distance = movement.distance();

        let x_deviation = if distance >= 2.0 * radius {
            (distance + Self::DISTANCE_OFFSET) / scale
        } else {
            distance * (2.0 * radius + Self::DISTANCE_OFFSET) / (2.0 * radius * scale)
        };

        // Rotations close to 0 or 90 degrees barely add vertical error
        let rotation = (movement.dy / movement.dx).atan();
        let y_deviation = Self::ROTATION_FACTOR * x_deviation * (2.0 * rotation).sin().abs();

        let x_hit = erf(radius / (SQRT_2 * x_deviation));

        let y_hit = if y_deviation > 0.0 {
            erf(radius / (SQRT_2 * y_deviation))
        } else {
            1.0
        };

        x_hit * y_hit
    }
}
