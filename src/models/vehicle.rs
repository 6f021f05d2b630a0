//! Vehicle model.
//!
//! A vehicle is one unit of work moving through a fixed, variant-specific
//! pipeline of assembly stages. The variant (Standard, Excavator, Bulldozer)
//! determines the stage sequence; progress is strictly forward, one stage
//! per advance, ending in a terminal completed state.

use serde::{Deserialize, Serialize};

use super::StageRequirements;

/// Standard vehicle pipeline.
const STANDARD_STAGES: &[&str] = &[
    "Chassis Assembly",
    "Engine Installation",
    "Transmission Installation",
    "Electrical Wiring",
    "Interior Assembly",
    "Paint Shop",
    "Quality Control",
];

/// Excavator pipeline: hydraulics instead of transmission, cabin instead of interior.
const EXCAVATOR_STAGES: &[&str] = &[
    "Chassis Assembly",
    "Engine Installation",
    "Hydraulic Installation",
    "Electrical Wiring",
    "Cabin Assembly",
    "Paint Shop",
    "Quality Control",
];

/// Bulldozer pipeline: blade assembly instead of interior.
const BULLDOZER_STAGES: &[&str] = &[
    "Chassis Assembly",
    "Engine Installation",
    "Transmission Installation",
    "Electrical Wiring",
    "Blade Assembly",
    "Paint Shop",
    "Quality Control",
];

/// Vehicle sub-kind, determining its stage sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VariantKind {
    /// Road vehicle with a standard drivetrain and interior.
    #[default]
    Standard,
    /// Tracked excavator with hydraulic systems and an operator cabin.
    Excavator,
    /// Bulldozer with a front blade assembly.
    Bulldozer,
}

impl VariantKind {
    /// Parses a user-supplied variant string.
    ///
    /// Matching is case-insensitive; anything other than "excavator" or
    /// "bulldozer" falls back to [`VariantKind::Standard`]. This permissive
    /// policy means vehicle intake never fails on a typo.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "excavator" => Self::Excavator,
            "bulldozer" => Self::Bulldozer,
            _ => Self::Standard,
        }
    }

    /// The ordered stage pipeline for this variant.
    ///
    /// All variants share the same pipeline length; they differ in the
    /// middle stages (drivetrain and body assembly).
    pub fn stage_sequence(&self) -> &'static [&'static str] {
        match self {
            Self::Standard => STANDARD_STAGES,
            Self::Excavator => EXCAVATOR_STAGES,
            Self::Bulldozer => BULLDOZER_STAGES,
        }
    }
}

/// A vehicle on the assembly line.
///
/// State machine: states are stage indices `0..N-1` plus terminal
/// `completed`. Transitions are strictly forward, one stage per
/// [`advance_stage`](Vehicle::advance_stage) call; no skipping, no going
/// back. Created at stage 0, mutated only through `advance_stage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique vehicle identifier.
    pub id: String,
    /// Model designation (free-form).
    pub model: String,
    /// Body color (free-form).
    pub color: String,
    /// Variant determining the stage pipeline.
    pub variant: VariantKind,
    /// Index into the variant's stage sequence. Valid until `completed`.
    pub current_stage_index: usize,
    /// Whether the vehicle has passed its final stage.
    pub completed: bool,
    /// Simulated hours spent at each completed stage, in stage order.
    pub stage_elapsed_hours: Vec<u64>,
    /// Hours accrued at the current stage, folded into
    /// `stage_elapsed_hours` on the next advance.
    pub hours_at_current_stage: u64,
    /// Consecutive passes this vehicle was deferred for missing parts.
    /// Reset on every successful advance.
    pub stalled_passes: u64,
}

impl Vehicle {
    /// Creates a vehicle at the first stage of its variant's pipeline.
    pub fn new(
        id: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
        variant: VariantKind,
    ) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            color: color.into(),
            variant,
            current_stage_index: 0,
            completed: false,
            stage_elapsed_hours: Vec::new(),
            hours_at_current_stage: 0,
            stalled_passes: 0,
        }
    }

    /// Creates a vehicle from a user-supplied variant string.
    ///
    /// See [`VariantKind::parse`] for the matching policy.
    pub fn from_type_str(
        id: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
        vehicle_type: &str,
    ) -> Self {
        Self::new(id, model, color, VariantKind::parse(vehicle_type))
    }

    /// Name of the stage the vehicle currently occupies.
    pub fn current_stage(&self) -> &'static str {
        self.variant.stage_sequence()[self.current_stage_index]
    }

    /// Whether the vehicle is at the last stage of its pipeline.
    pub fn is_final_stage(&self) -> bool {
        self.current_stage_index == self.variant.stage_sequence().len() - 1
    }

    /// Parts required to advance through the current stage.
    ///
    /// Resolves the vehicle's own stage list against the shared requirement
    /// table, so the same index yields different parts across variants
    /// (an Excavator's third stage needs hydraulics, a Standard vehicle's
    /// needs a transmission).
    pub fn required_parts_for_current_stage<'a>(
        &self,
        requirements: &'a StageRequirements,
    ) -> &'a [String] {
        requirements.parts_for(self.current_stage())
    }

    /// Records elapsed time at the current stage and moves forward.
    ///
    /// If not at the final stage, increments the stage index and resets the
    /// stage clock. At the final stage, marks the vehicle completed instead.
    /// A no-op once completed.
    pub fn advance_stage(&mut self, elapsed_hours: u64) {
        if self.completed {
            return;
        }
        self.stage_elapsed_hours
            .push(self.hours_at_current_stage + elapsed_hours);
        self.hours_at_current_stage = 0;
        self.stalled_passes = 0;
        if self.is_final_stage() {
            self.completed = true;
        } else {
            self.current_stage_index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variant() {
        assert_eq!(VariantKind::parse("Excavator"), VariantKind::Excavator);
        assert_eq!(VariantKind::parse("BULLDOZER"), VariantKind::Bulldozer);
        assert_eq!(VariantKind::parse("  excavator "), VariantKind::Excavator);
        // Permissive fallback
        assert_eq!(VariantKind::parse("truck"), VariantKind::Standard);
        assert_eq!(VariantKind::parse(""), VariantKind::Standard);
    }

    #[test]
    fn test_stage_sequences_diverge_mid_pipeline() {
        assert_eq!(VariantKind::Standard.stage_sequence().len(), 7);
        assert_eq!(VariantKind::Excavator.stage_sequence().len(), 7);
        assert_eq!(VariantKind::Bulldozer.stage_sequence().len(), 7);

        assert_eq!(
            VariantKind::Excavator.stage_sequence()[2],
            "Hydraulic Installation"
        );
        assert_eq!(
            VariantKind::Standard.stage_sequence()[2],
            "Transmission Installation"
        );
        assert_eq!(VariantKind::Bulldozer.stage_sequence()[4], "Blade Assembly");
    }

    #[test]
    fn test_advance_is_strictly_forward() {
        let mut v = Vehicle::new("V1", "X200", "red", VariantKind::Standard);
        let stages = v.variant.stage_sequence().len();

        let mut last_index = 0;
        for _ in 0..stages {
            assert!(!v.completed);
            v.advance_stage(1);
            assert!(v.current_stage_index >= last_index);
            assert!(v.current_stage_index < stages);
            last_index = v.current_stage_index;
        }
        assert!(v.completed);
        assert_eq!(v.stage_elapsed_hours.len(), stages);
    }

    #[test]
    fn test_advance_after_completion_is_noop() {
        let mut v = Vehicle::new("V1", "X200", "red", VariantKind::Bulldozer);
        for _ in 0..v.variant.stage_sequence().len() {
            v.advance_stage(0);
        }
        assert!(v.completed);

        let index = v.current_stage_index;
        let recorded = v.stage_elapsed_hours.len();
        v.advance_stage(5);
        assert_eq!(v.current_stage_index, index);
        assert_eq!(v.stage_elapsed_hours.len(), recorded);
    }

    #[test]
    fn test_elapsed_hours_folds_waiting_time() {
        let mut v = Vehicle::new("V1", "X200", "red", VariantKind::Standard);
        v.hours_at_current_stage = 3;
        v.advance_stage(2);
        assert_eq!(v.stage_elapsed_hours, vec![5]);
        assert_eq!(v.hours_at_current_stage, 0);
    }

    #[test]
    fn test_required_parts_are_variant_specific() {
        let requirements = StageRequirements::default();
        let mut standard = Vehicle::new("S", "A", "blue", VariantKind::Standard);
        let mut excavator = Vehicle::new("E", "B", "yellow", VariantKind::Excavator);
        standard.current_stage_index = 2;
        excavator.current_stage_index = 2;

        assert_eq!(
            standard.required_parts_for_current_stage(&requirements),
            ["Transmission".to_string()]
        );
        assert_eq!(
            excavator.required_parts_for_current_stage(&requirements),
            ["Hydraulics".to_string()]
        );
    }
}
