use crate::difficulty::evaluators::Movement;

/// Tap skill.
///
/// A single strain accumulator that gains `1 / t` per note and decays by a
/// factor of `1/e` per second, where `t` includes the late slack.
#[derive(Clone, Debug, Default)]
pub struct Tap {
    strain: f64,
    max_strain: f64,
}

impl Tap {
    const STRAIN_DECAY_BASE: f64 = 1.0 / std::f64::consts::E;

    pub const fn new() -> Self {
        Self {
            strain: 0.0,
            max_strain: 0.0,
        }
    }

    pub fn process(&mut self, movement: &Movement) {
        let effective_delta_time = movement.delta_time + movement.late_slack;

        // Simultaneous notes put no load on tapping
        if effective_delta_time <= 0.0 {
            return;
        }

        self.strain += 1.0 / effective_delta_time;
        self.strain *= strain_decay(effective_delta_time, Self::STRAIN_DECAY_BASE);

        self.max_strain = self.max_strain.max(self.strain);
    }

    /// The highest strain after processing all movements.
    pub const fn max_strain(&self) -> f64 {
        self.max_strain
    }

    pub fn star_rating(max_strain: f64, scaling: f64) -> f64 {
        scaling * max_strain.sqrt()
    }
}

fn strain_decay(ms: f64, strain_decay_base: f64) -> f64 {
    strain_decay_base.powf(ms / 1000.0)
}
