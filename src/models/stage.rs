//! Stage requirement table.
//!
//! Maps each assembly stage name to the parts it consumes. One table is
//! shared read-only by all vehicles and variants; stage names overlap across
//! variants, and each variant's own stage sequence determines which entries
//! it looks up.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Immutable stage → required-parts mapping.
///
/// Constructed once at line setup and passed by shared reference into the
/// scheduler and vehicle logic. [`Default`] provides the standard table for
/// the built-in variant pipelines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageRequirements {
    requirements: HashMap<String, Vec<String>>,
}

impl StageRequirements {
    /// Creates an empty table.
    pub fn empty() -> Self {
        Self {
            requirements: HashMap::new(),
        }
    }

    /// Adds a stage with its required part names.
    pub fn with_stage<S: Into<String>>(
        mut self,
        stage: impl Into<String>,
        parts: impl IntoIterator<Item = S>,
    ) -> Self {
        self.requirements
            .insert(stage.into(), parts.into_iter().map(Into::into).collect());
        self
    }

    /// Parts consumed by a stage. Unknown stages consume nothing.
    pub fn parts_for(&self, stage: &str) -> &[String] {
        self.requirements.get(stage).map_or(&[], Vec::as_slice)
    }

    /// Whether the table has an entry for the stage.
    ///
    /// Distinguishes "consumes nothing" (present, empty list) from
    /// "never heard of it" for validation.
    pub fn knows_stage(&self, stage: &str) -> bool {
        self.requirements.contains_key(stage)
    }

    /// Stage names in the table, in no particular order.
    pub fn stage_names(&self) -> impl Iterator<Item = &str> {
        self.requirements.keys().map(String::as_str)
    }
}

impl Default for StageRequirements {
    /// Standard requirement table covering all built-in variant pipelines.
    fn default() -> Self {
        Self::empty()
            .with_stage("Chassis Assembly", ["Chassis", "Wheels"])
            .with_stage("Engine Installation", ["Engine"])
            .with_stage("Transmission Installation", ["Transmission"])
            .with_stage("Hydraulic Installation", ["Hydraulics"])
            .with_stage("Electrical Wiring", ["Wiring"])
            .with_stage("Cabin Assembly", ["Cabin"])
            .with_stage("Blade Assembly", ["Blade"])
            .with_stage("Interior Assembly", ["Seats"])
            .with_stage("Paint Shop", ["Paint"])
            .with_stage("Quality Control", Vec::<String>::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_lookups() {
        let table = StageRequirements::default();
        assert_eq!(table.parts_for("Chassis Assembly"), ["Chassis", "Wheels"]);
        assert_eq!(table.parts_for("Hydraulic Installation"), ["Hydraulics"]);
        // Final inspection consumes nothing but is a known stage
        assert!(table.parts_for("Quality Control").is_empty());
        assert!(table.knows_stage("Quality Control"));
    }

    #[test]
    fn test_unknown_stage_consumes_nothing() {
        let table = StageRequirements::default();
        assert!(table.parts_for("Wing Assembly").is_empty());
        assert!(!table.knows_stage("Wing Assembly"));
    }

    #[test]
    fn test_custom_table() {
        let table = StageRequirements::empty().with_stage("Welding", ["Rod", "Gas"]);
        assert_eq!(table.parts_for("Welding"), ["Rod", "Gas"]);
        assert_eq!(table.stage_names().count(), 1);
    }
}
