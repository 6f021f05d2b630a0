//! Built-in dispatch rules.
//!
//! # Score Convention
//! All rules return lower scores for higher-priority vehicles.
//!
//! The default line order is [`StageProgress`] with [`PartsReady`] as
//! tie-breaker: service the furthest-along vehicles first, and among
//! vehicles at the same stage prefer those that can actually be fed.

use super::{DispatchRule, LineContext, RuleScore};
use crate::models::Vehicle;

/// Furthest stage first.
///
/// Prioritizes vehicles deeper in their pipeline, draining near-complete
/// work before starting more. Minimizes work-in-process on the line.
#[derive(Debug, Clone, Copy)]
pub struct StageProgress;

impl DispatchRule for StageProgress {
    fn name(&self) -> &'static str {
        "STAGE"
    }

    fn evaluate(&self, vehicle: &Vehicle, _context: &LineContext) -> RuleScore {
        -(vehicle.current_stage_index as f64)
    }

    fn description(&self) -> &'static str {
        "Furthest stage first"
    }
}

/// Parts on hand first.
///
/// Prioritizes vehicles whose current-stage parts were available at the
/// start of the pass, so feasible work is not queued behind blocked work.
#[derive(Debug, Clone, Copy)]
pub struct PartsReady;

impl DispatchRule for PartsReady {
    fn name(&self) -> &'static str {
        "READY"
    }

    fn evaluate(&self, vehicle: &Vehicle, context: &LineContext) -> RuleScore {
        if context.is_available(&vehicle.id) {
            0.0
        } else {
            1.0
        }
    }

    fn description(&self) -> &'static str {
        "Parts on hand first"
    }
}

/// Longest stalled first.
///
/// Prioritizes vehicles deferred the most consecutive passes. Counteracts
/// starvation of early-stage vehicles when parts are scarce; not part of
/// the default order.
#[derive(Debug, Clone, Copy)]
pub struct LongestStalled;

impl DispatchRule for LongestStalled {
    fn name(&self) -> &'static str {
        "STALL"
    }

    fn evaluate(&self, vehicle: &Vehicle, _context: &LineContext) -> RuleScore {
        -(vehicle.stalled_passes as f64)
    }

    fn description(&self) -> &'static str {
        "Longest stalled first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VariantKind;

    fn vehicle_at(id: &str, stage: usize) -> Vehicle {
        let mut v = Vehicle::new(id, "M", "grey", VariantKind::Standard);
        v.current_stage_index = stage;
        v
    }

    #[test]
    fn test_stage_progress_prefers_deeper_vehicle() {
        let ctx = LineContext::at_pass(1);
        let near_done = vehicle_at("A", 5);
        let fresh = vehicle_at("B", 0);

        assert!(
            StageProgress.evaluate(&near_done, &ctx) < StageProgress.evaluate(&fresh, &ctx)
        );
    }

    #[test]
    fn test_parts_ready_prefers_feasible_vehicle() {
        let ctx = LineContext::at_pass(1)
            .with_availability("A", true)
            .with_availability("B", false);

        assert!(
            PartsReady.evaluate(&vehicle_at("A", 0), &ctx)
                < PartsReady.evaluate(&vehicle_at("B", 0), &ctx)
        );
    }

    #[test]
    fn test_longest_stalled_prefers_starved_vehicle() {
        let ctx = LineContext::at_pass(1);
        let mut starved = vehicle_at("A", 1);
        starved.stalled_passes = 4;
        let fed = vehicle_at("B", 1);

        assert!(
            LongestStalled.evaluate(&starved, &ctx) < LongestStalled.evaluate(&fed, &ctx)
        );
    }
}
