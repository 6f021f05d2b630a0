//! Line context for dispatch rule evaluation.

use std::collections::HashMap;

/// Per-pass line state passed to dispatch rules.
///
/// Snapshotted by the scheduler before each priority sort. Parts
/// availability is a snapshot against the inventory as it stands at the
/// start of the pass; consumption during the pass is deliberately not
/// reflected until the next snapshot.
#[derive(Debug, Clone, Default)]
pub struct LineContext {
    /// Outer-loop pass number, starting at 1.
    pub pass_number: u64,
    /// Whether each vehicle's current-stage parts are on hand
    /// (vehicle id → availability).
    pub parts_available: HashMap<String, bool>,
}

impl LineContext {
    /// Creates a context for the given pass.
    pub fn at_pass(pass_number: u64) -> Self {
        Self {
            pass_number,
            ..Default::default()
        }
    }

    /// Records a vehicle's parts-availability snapshot.
    pub fn with_availability(mut self, vehicle_id: impl Into<String>, available: bool) -> Self {
        self.parts_available.insert(vehicle_id.into(), available);
        self
    }

    /// Availability snapshot for a vehicle. Unknown vehicles report false.
    pub fn is_available(&self, vehicle_id: &str) -> bool {
        self.parts_available.get(vehicle_id).copied().unwrap_or(false)
    }
}
