//! The production scheduler and its run statistics.
//!
//! `AssemblyLine` drives the active fleet through passes: re-prioritize,
//! attempt one stage-advance per vehicle, retire completed vehicles, repeat
//! until the line drains. `LineReport` carries the statistics a run
//! accumulates along the way.

mod line;
mod report;

pub use line::{AssemblyLine, LineConfig};
pub use report::LineReport;
