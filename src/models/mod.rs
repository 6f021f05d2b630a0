//! Assembly line domain models.
//!
//! Core data types for the simulation: vehicles and their variant-specific
//! stage pipelines, the shared part inventory, the stage requirement table,
//! and the stochastic delay model.
//!
//! # Ownership
//!
//! `StageRequirements` and `DelayModel` are immutable after construction and
//! shared read-only. `Inventory` is mutated exclusively by the scheduler.
//! `Vehicle` state changes go through [`Vehicle::advance_stage`] alone.

mod delay;
mod inventory;
mod stage;
mod vehicle;

pub use delay::{DelayEvent, DelayModel};
pub use inventory::{Inventory, Part};
pub use stage::StageRequirements;
pub use vehicle::{Vehicle, VariantKind};
