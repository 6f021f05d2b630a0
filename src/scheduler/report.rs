//! Production run statistics.
//!
//! Accumulated by the scheduler over a run and reported when the line
//! drains (or the pass bound stops it).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Statistics for one simulation run.
///
/// All durations are simulated hours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineReport {
    /// Vehicles that reached the end of their pipeline.
    pub completed_vehicles: u64,
    /// Delay events encountered across all stages.
    pub total_delay_events: u64,
    /// Cumulative delay duration (hours).
    pub total_delay_hours: u64,
    /// Vehicle-passes deferred for missing parts.
    pub part_shortages: u64,
    /// Outer-loop passes executed.
    pub passes: u64,
    /// Whether the active set drained. False when the configured pass
    /// bound stopped a starved line.
    pub drained: bool,
}

impl LineReport {
    /// Mean delay duration per delay event (hours).
    pub fn avg_delay_hours(&self) -> f64 {
        if self.total_delay_events == 0 {
            0.0
        } else {
            self.total_delay_hours as f64 / self.total_delay_events as f64
        }
    }

    /// Completed vehicles per pass. Zero for an empty run.
    pub fn throughput_per_pass(&self) -> f64 {
        if self.passes == 0 {
            0.0
        } else {
            self.completed_vehicles as f64 / self.passes as f64
        }
    }
}

impl fmt::Display for LineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Production Statistics ---")?;
        writeln!(f, "Total Vehicles Completed: {}", self.completed_vehicles)?;
        writeln!(f, "Total Delays Encountered: {}", self.total_delay_events)?;
        writeln!(f, "Total Delay Time: {} Hours", self.total_delay_hours)?;
        writeln!(f, "Part Shortages: {}", self.part_shortages)?;
        write!(f, "Passes: {}", self.passes)?;
        if !self.drained {
            write!(f, " (stopped at pass bound, line not drained)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avg_delay() {
        let report = LineReport {
            total_delay_events: 4,
            total_delay_hours: 10,
            ..Default::default()
        };
        assert!((report.avg_delay_hours() - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty_run_rates() {
        let report = LineReport::default();
        assert_eq!(report.avg_delay_hours(), 0.0);
        assert_eq!(report.throughput_per_pass(), 0.0);
    }

    #[test]
    fn test_display_mentions_pass_bound() {
        let drained = LineReport {
            drained: true,
            ..Default::default()
        };
        let stopped = LineReport {
            drained: false,
            ..Default::default()
        };
        assert!(!format!("{drained}").contains("pass bound"));
        assert!(format!("{stopped}").contains("pass bound"));
    }
}
