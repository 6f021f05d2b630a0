//! Rule engine for multi-criteria dispatch.
//!
//! Composes multiple dispatch rules with configurable evaluation modes
//! and tie-breaking strategies. Sorting is stable: vehicles tied on every
//! rule keep their previous-pass order, which keeps a run deterministic
//! for deterministic inputs.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::sync::Arc;

use super::{DispatchRule, LineContext, RuleScore};
use crate::models::Vehicle;

/// How multiple rules are combined.
#[derive(Debug, Clone, Default)]
pub enum EvaluationMode {
    /// Apply rules in sequence; use next rule only on ties.
    #[default]
    Sequential,
    /// Compute weighted sum of all rule scores.
    Weighted,
}

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Default)]
pub enum TieBreaker {
    /// Keep the incoming order (default; the sort is stable).
    #[default]
    KeepOrder,
    /// Deterministic by vehicle ID (lexicographic).
    ById,
}

#[derive(Clone)]
struct WeightedRule {
    rule: Arc<dyn DispatchRule>,
    weight: f64,
}

/// A composable rule engine for vehicle prioritization.
///
/// Supports sequential multi-layer evaluation (primary rule → tie-breaker)
/// and weighted combination modes.
///
/// # Example
/// ```
/// use prodline::dispatching::{RuleEngine, rules};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::StageProgress)
///     .with_tie_breaker(rules::PartsReady);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<WeightedRule>,
    mode: EvaluationMode,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            mode: EvaluationMode::Sequential,
            tie_breaker: TieBreaker::KeepOrder,
            epsilon: 1e-9,
        }
    }

    /// The standard line order: furthest stage first, parts on hand as
    /// tie-breaker.
    pub fn line_default() -> Self {
        Self::new()
            .with_rule(super::rules::StageProgress)
            .with_tie_breaker(super::rules::PartsReady)
    }

    /// Adds a primary rule (weight 1.0).
    pub fn with_rule<R: DispatchRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight: 1.0,
        });
        self
    }

    /// Adds a weighted rule.
    pub fn with_weighted_rule<R: DispatchRule + 'static>(
        mut self,
        rule: R,
        weight: f64,
    ) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight,
        });
        self
    }

    /// Adds a tie-breaking rule (weight 0.0, used only in Sequential mode).
    pub fn with_tie_breaker<R: DispatchRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight: 0.0,
        });
        self
    }

    /// Sets the evaluation mode.
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Sorts vehicles into service order (highest priority first).
    ///
    /// Returns indices into the original slice. The underlying sort is
    /// stable, so full ties preserve the incoming order.
    pub fn sort_indices(&self, vehicles: &[Vehicle], context: &LineContext) -> Vec<usize> {
        if vehicles.is_empty() {
            return Vec::new();
        }

        let mut indices: Vec<usize> = (0..vehicles.len()).collect();

        match &self.mode {
            EvaluationMode::Sequential => {
                indices.sort_by(|&a, &b| {
                    self.compare_sequential(&vehicles[a], &vehicles[b], context)
                });
            }
            EvaluationMode::Weighted => {
                let scores: Vec<f64> = vehicles
                    .iter()
                    .map(|v| self.weighted_score(v, context))
                    .collect();
                indices.sort_by(|&a, &b| {
                    scores[a]
                        .partial_cmp(&scores[b])
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            }
        }

        indices
    }

    /// Returns the index of the highest-priority vehicle.
    pub fn select_best(&self, vehicles: &[Vehicle], context: &LineContext) -> Option<usize> {
        self.sort_indices(vehicles, context).first().copied()
    }

    /// Evaluates a single vehicle and returns scores from each rule.
    pub fn evaluate(&self, vehicle: &Vehicle, context: &LineContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|wr| wr.rule.evaluate(vehicle, context) * wr.weight)
            .collect()
    }

    fn compare_sequential(
        &self,
        a: &Vehicle,
        b: &Vehicle,
        context: &LineContext,
    ) -> std::cmp::Ordering {
        for wr in &self.rules {
            let score_a = wr.rule.evaluate(a, context);
            let score_b = wr.rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a
                    .partial_cmp(&score_b)
                    .unwrap_or(std::cmp::Ordering::Equal);
            }
        }

        // All rules tied → use final tie-breaker
        match &self.tie_breaker {
            TieBreaker::KeepOrder => std::cmp::Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }

    fn weighted_score(&self, vehicle: &Vehicle, context: &LineContext) -> f64 {
        self.rules
            .iter()
            .map(|wr| wr.rule.evaluate(vehicle, context) * wr.weight)
            .sum()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::line_default()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self
                    .rules
                    .iter()
                    .map(|r| format!("{}(w={})", r.rule.name(), r.weight))
                    .collect::<Vec<_>>(),
            )
            .field("mode", &self.mode)
            .finish()
    }
}
