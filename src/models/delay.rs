//! Production delay model.
//!
//! Each stage carries a delay probability; when a delay fires, a cause is
//! drawn uniformly from the configured cause list and a duration from a
//! uniform integer range. The draw is a pure decision over an injected
//! random source — no clock, no sleeping — so seeded generators give fully
//! reproducible runs.

use rand::prelude::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// A delay drawn for one stage attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayEvent {
    /// Cause category (e.g., "Equipment Malfunction").
    pub cause: String,
    /// Simulated duration in hours.
    pub duration_hours: u64,
}

/// Per-stage delay probabilities, cause categories, and duration range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayModel {
    /// Stage name → delay probability in [0, 1]. Stages absent from the map
    /// never delay.
    probabilities: HashMap<String, f64>,
    /// Cause categories drawn uniformly when a delay fires.
    causes: Vec<String>,
    /// Uniform inclusive range for delay durations (hours).
    duration_range: RangeInclusive<u64>,
}

impl DelayModel {
    /// Creates a model with no delay-prone stages and the given causes.
    pub fn new<S: Into<String>>(causes: impl IntoIterator<Item = S>) -> Self {
        Self {
            probabilities: HashMap::new(),
            causes: causes.into_iter().map(Into::into).collect(),
            duration_range: 1..=10,
        }
    }

    /// Sets the delay probability for a stage.
    pub fn with_probability(mut self, stage: impl Into<String>, probability: f64) -> Self {
        self.probabilities.insert(stage.into(), probability);
        self
    }

    /// Sets the uniform duration range (hours).
    pub fn with_duration_range(mut self, range: RangeInclusive<u64>) -> Self {
        self.duration_range = range;
        self
    }

    /// Delay probability configured for a stage, if any.
    pub fn probability_for(&self, stage: &str) -> Option<f64> {
        self.probabilities.get(stage).copied()
    }

    /// Draws a delay decision for one attempt at `stage`.
    ///
    /// Consumes one uniform float from `rng`; on a hit, one cause index and
    /// one duration. Returns `None` for stages with no configured
    /// probability, for an empty cause list, and for misses.
    pub fn maybe_delay<R: Rng>(&self, stage: &str, rng: &mut R) -> Option<DelayEvent> {
        let probability = self.probability_for(stage)?;
        if rng.random::<f64>() > probability {
            return None;
        }
        let cause = self.causes.choose(rng)?;
        let duration_hours = rng.random_range(self.duration_range.clone());
        Some(DelayEvent {
            cause: cause.clone(),
            duration_hours,
        })
    }
}

impl Default for DelayModel {
    /// Standard delay profile for the built-in variant pipelines.
    ///
    /// Transmission installation is the bottleneck stage; quality control
    /// rework is the second most frequent delay.
    fn default() -> Self {
        Self::new([
            "Equipment Malfunction",
            "Worker Absenteeism",
            "Part Shortage",
        ])
        .with_probability("Chassis Assembly", 0.05)
        .with_probability("Engine Installation", 0.1)
        .with_probability("Transmission Installation", 0.38)
        .with_probability("Electrical Wiring", 0.12)
        .with_probability("Interior Assembly", 0.07)
        .with_probability("Paint Shop", 0.15)
        .with_probability("Quality Control", 0.22)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_certain_delay_fires() {
        let model = DelayModel::new(["Breakdown"]).with_probability("Paint Shop", 1.0);
        let mut rng = SmallRng::seed_from_u64(7);

        let event = model.maybe_delay("Paint Shop", &mut rng).unwrap();
        assert_eq!(event.cause, "Breakdown");
        assert!((1..=10).contains(&event.duration_hours));
    }

    #[test]
    fn test_zero_probability_never_fires() {
        let model = DelayModel::new(["Breakdown"]).with_probability("Paint Shop", 0.0);
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..100 {
            assert!(model.maybe_delay("Paint Shop", &mut rng).is_none());
        }
    }

    #[test]
    fn test_unconfigured_stage_never_fires() {
        let model = DelayModel::default();
        let mut rng = SmallRng::seed_from_u64(7);
        // Hydraulic Installation carries no delay probability
        assert!(model.maybe_delay("Hydraulic Installation", &mut rng).is_none());
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let model = DelayModel::default();

        let draws = |seed: u64| {
            let mut rng = SmallRng::seed_from_u64(seed);
            (0..50)
                .map(|_| model.maybe_delay("Transmission Installation", &mut rng))
                .collect::<Vec<_>>()
        };

        assert_eq!(draws(42), draws(42));
    }

    #[test]
    fn test_duration_range_respected() {
        let model = DelayModel::new(["Breakdown"])
            .with_probability("Paint Shop", 1.0)
            .with_duration_range(3..=3);
        let mut rng = SmallRng::seed_from_u64(1);

        let event = model.maybe_delay("Paint Shop", &mut rng).unwrap();
        assert_eq!(event.duration_hours, 3);
    }

    #[test]
    fn test_hit_rate_tracks_probability() {
        let model = DelayModel::default();
        let mut rng = SmallRng::seed_from_u64(99);

        let hits = (0..2000)
            .filter(|_| model.maybe_delay("Transmission Installation", &mut rng).is_some())
            .count();
        let rate = hits as f64 / 2000.0;
        assert!((rate - 0.38).abs() < 0.05, "rate {rate} far from 0.38");
    }
}
