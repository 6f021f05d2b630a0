//! Input validation for assembly line setups.
//!
//! Checks structural integrity of the fleet, requirement table, and
//! inventory before a run. Detects:
//! - Duplicate vehicle IDs
//! - Stages missing from the requirement table
//! - Required parts missing from the inventory
//!
//! Zero stock is deliberately not an error: an exhausted part is the normal
//! starvation scenario, not a malformed input.

use crate::models::{Inventory, StageRequirements, Vehicle};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two vehicles share the same ID.
    DuplicateVehicleId,
    /// A vehicle's pipeline names a stage absent from the requirement table.
    UnknownStage,
    /// A stage requires a part type the inventory has never stocked.
    UnknownPart,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a line setup before running.
///
/// Checks:
/// 1. No duplicate vehicle IDs
/// 2. Every stage of every vehicle's pipeline exists in the requirement table
/// 3. Every part named by a reachable stage exists in the inventory
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_line(
    vehicles: &[Vehicle],
    requirements: &StageRequirements,
    inventory: &Inventory,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut vehicle_ids = HashSet::new();
    for vehicle in vehicles {
        if !vehicle_ids.insert(vehicle.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateVehicleId,
                format!("Duplicate vehicle ID: {}", vehicle.id),
            ));
        }
    }

    // Stages and parts reachable by this fleet
    let mut checked_stages = HashSet::new();
    for vehicle in vehicles {
        for &stage in vehicle.variant.stage_sequence() {
            if !checked_stages.insert(stage) {
                continue;
            }
            if !requirements.knows_stage(stage) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownStage,
                    format!(
                        "Stage '{stage}' ({:?} pipeline) is not in the requirement table",
                        vehicle.variant
                    ),
                ));
                continue;
            }
            for part in requirements.parts_for(stage) {
                // Stocked-but-empty is fine; never-stocked is a setup bug
                if !inventory.has_part(part) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownPart,
                        format!("Stage '{stage}' requires unstocked part type '{part}'"),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
