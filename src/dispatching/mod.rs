//! Dispatch rules and rule engine for vehicle prioritization.
//!
//! Before each pass, the scheduler sorts its active vehicles with a rule
//! engine: vehicles further along the pipeline first, and among vehicles at
//! the same stage, those whose parts are currently on hand. The engine is
//! composable, so custom lines can swap in their own service order.
//!
//! # Usage
//!
//! ```
//! use prodline::dispatching::{LineContext, RuleEngine, rules};
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::StageProgress)
//!     .with_tie_breaker(rules::PartsReady);
//!
//! let context = LineContext::at_pass(1);
//! // let order = engine.sort_indices(&vehicles, &context);
//! ```
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
pub mod rules;

pub use context::LineContext;
pub use engine::{EvaluationMode, RuleEngine, TieBreaker};

use crate::models::Vehicle;
use std::fmt::Debug;

/// Score returned by a dispatch rule.
///
/// Lower scores = higher priority (serviced first), following the academic
/// convention for priority dispatching.
pub type RuleScore = f64;

/// A dispatch rule that evaluates vehicle service priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for vehicles that should be serviced first in a pass.
pub trait DispatchRule: Send + Sync + Debug {
    /// Rule name (e.g., "STAGE", "READY").
    fn name(&self) -> &'static str;

    /// Evaluates a vehicle's priority given the current line context.
    ///
    /// Returns a score where lower = serviced earlier.
    fn evaluate(&self, vehicle: &Vehicle, context: &LineContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
