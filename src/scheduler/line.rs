//! Assembly line scheduler.
//!
//! # Algorithm
//!
//! Outer loop, repeated until the active set is empty:
//!
//! 1. Re-sort the active vehicles with the dispatch rule engine. Priority
//!    must be recomputed every pass: parts availability changes as the
//!    inventory depletes, so an order computed once goes stale.
//! 2. One pass: attempt a single stage-advance for each vehicle in service
//!    order. A vehicle advances only when every required part is on hand;
//!    consumption by an earlier vehicle is visible to later vehicles in the
//!    same pass, which is what creates contention for scarce parts.
//! 3. Retire completed vehicles from the active set.
//!
//! A vehicle whose required part is permanently exhausted is retried every
//! pass and never completes; nothing detects starvation by default. The
//! optional [`LineConfig`] pass bound and stall warning are the safety
//! valves for that case.

use log::{debug, info, warn};
use rand::Rng;

use super::LineReport;
use crate::dispatching::{LineContext, RuleEngine};
use crate::models::{DelayModel, Inventory, StageRequirements, Vehicle};

/// Run-loop safety limits. Both default to off, which reproduces the
/// classic unbounded behavior.
#[derive(Debug, Clone, Default)]
pub struct LineConfig {
    /// Stop the run after this many passes even if vehicles remain.
    pub max_passes: Option<u64>,
    /// Warn once per vehicle after this many consecutive deferred passes.
    pub stall_warning_after: Option<u64>,
}

impl LineConfig {
    /// Creates a config with both valves off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds the outer loop.
    pub fn with_max_passes(mut self, passes: u64) -> Self {
        self.max_passes = Some(passes);
        self
    }

    /// Enables the starvation diagnostic.
    pub fn with_stall_warning_after(mut self, passes: u64) -> Self {
        self.stall_warning_after = Some(passes);
        self
    }
}

/// The production scheduler: drives all active vehicles through passes
/// until none remain, arbitrating access to the shared part inventory.
///
/// Requirement table and delay model are fixed at construction; the
/// inventory is mutated exclusively here, inside the pass loop.
///
/// # Example
/// ```
/// use prodline::models::{Inventory, Vehicle, VariantKind};
/// use prodline::scheduler::AssemblyLine;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let mut line = AssemblyLine::new(Inventory::standard_stock());
/// line.add_vehicle(Vehicle::new("V-001", "TX5", "red", VariantKind::Excavator));
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let report = line.run(&mut rng);
/// assert_eq!(report.completed_vehicles, 1);
/// ```
#[derive(Debug, Clone)]
pub struct AssemblyLine {
    vehicles: Vec<Vehicle>,
    inventory: Inventory,
    requirements: StageRequirements,
    delay_model: DelayModel,
    engine: RuleEngine,
    config: LineConfig,
    retired: Vec<Vehicle>,
    completed_vehicles: u64,
    total_delay_events: u64,
    total_delay_hours: u64,
    part_shortages: u64,
}

impl AssemblyLine {
    /// Creates a line over the given inventory with the standard
    /// requirement table, delay model, and service order.
    pub fn new(inventory: Inventory) -> Self {
        Self {
            vehicles: Vec::new(),
            inventory,
            requirements: StageRequirements::default(),
            delay_model: DelayModel::default(),
            engine: RuleEngine::line_default(),
            config: LineConfig::default(),
            retired: Vec::new(),
            completed_vehicles: 0,
            total_delay_events: 0,
            total_delay_hours: 0,
            part_shortages: 0,
        }
    }

    /// Sets a custom stage requirement table.
    pub fn with_requirements(mut self, requirements: StageRequirements) -> Self {
        self.requirements = requirements;
        self
    }

    /// Sets a custom delay model.
    pub fn with_delay_model(mut self, delay_model: DelayModel) -> Self {
        self.delay_model = delay_model;
        self
    }

    /// Sets a custom dispatch rule engine.
    pub fn with_engine(mut self, engine: RuleEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Sets the run-loop safety limits.
    pub fn with_config(mut self, config: LineConfig) -> Self {
        self.config = config;
        self
    }

    /// Appends a vehicle to the active set.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        debug!(
            "vehicle {} ({:?}) added at stage '{}'",
            vehicle.id,
            vehicle.variant,
            vehicle.current_stage()
        );
        self.vehicles.push(vehicle);
    }

    /// Vehicles still on the line.
    pub fn active_vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Vehicles retired after completing their pipeline, in completion
    /// order. Read-only; kept for reporting.
    pub fn retired_vehicles(&self) -> &[Vehicle] {
        &self.retired
    }

    /// Current inventory state.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Runs passes until the active set drains or the pass bound trips.
    ///
    /// The random source drives delay draws only; a seeded generator makes
    /// the whole run reproducible.
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> LineReport {
        let mut passes = 0;
        let mut drained = true;

        while !self.vehicles.is_empty() {
            if let Some(max) = self.config.max_passes {
                if passes >= max {
                    warn!(
                        "pass bound {max} reached with {} vehicle(s) still active",
                        self.vehicles.len()
                    );
                    drained = false;
                    break;
                }
            }
            passes += 1;
            self.run_pass(passes, rng);

            // Retire completed vehicles from the active set
            let (done, active): (Vec<_>, Vec<_>) =
                self.vehicles.drain(..).partition(|v| v.completed);
            self.vehicles = active;
            self.retired.extend(done);
        }

        let report = LineReport {
            completed_vehicles: self.completed_vehicles,
            total_delay_events: self.total_delay_events,
            total_delay_hours: self.total_delay_hours,
            part_shortages: self.part_shortages,
            passes,
            drained,
        };
        info!(
            "run finished after {} pass(es): {} completed, {} delay(s), {} shortage(s)",
            report.passes,
            report.completed_vehicles,
            report.total_delay_events,
            report.part_shortages
        );
        report
    }

    /// Runs with a fresh OS-seeded generator. Convenience for callers that
    /// do not need reproducibility.
    pub fn run_default(&mut self) -> LineReport {
        self.run(&mut rand::rng())
    }

    /// Re-prioritizes the active set and attempts one advance per vehicle.
    fn run_pass<R: Rng>(&mut self, pass: u64, rng: &mut R) {
        let context = self.snapshot_context(pass);
        let order = self.engine.sort_indices(&self.vehicles, &context);
        let reordered: Vec<Vehicle> = order
            .into_iter()
            .map(|i| self.vehicles[i].clone())
            .collect();
        self.vehicles = reordered;

        debug!("pass {pass}: {} active vehicle(s)", self.vehicles.len());
        for i in 0..self.vehicles.len() {
            self.step_vehicle(i, rng);
        }
    }

    /// Parts-availability snapshot for the dispatch sort, taken against the
    /// inventory as it stands at the start of the pass.
    fn snapshot_context(&self, pass: u64) -> LineContext {
        let mut context = LineContext::at_pass(pass);
        for vehicle in &self.vehicles {
            let required = vehicle.required_parts_for_current_stage(&self.requirements);
            context = context.with_availability(
                vehicle.id.clone(),
                self.inventory.has_sufficient(required),
            );
        }
        context
    }

    /// One stage-advance attempt for the vehicle at `index`.
    ///
    /// Check, delay draw, consume, advance — in that order. The sequence is
    /// not atomic; nothing between check and consume touches the inventory
    /// in a single-threaded pass.
    fn step_vehicle<R: Rng>(&mut self, index: usize, rng: &mut R) {
        if self.vehicles[index].completed {
            return;
        }

        let stage = self.vehicles[index].current_stage();
        let required: Vec<String> = self.vehicles[index]
            .required_parts_for_current_stage(&self.requirements)
            .to_vec();

        if !self.inventory.has_sufficient(&required) {
            self.defer_vehicle(index, stage);
            return;
        }

        let delay_hours = match self.delay_model.maybe_delay(stage, rng) {
            Some(event) => {
                self.total_delay_events += 1;
                self.total_delay_hours += event.duration_hours;
                info!(
                    "vehicle {} delayed at '{stage}' due to {}: {} hour(s)",
                    self.vehicles[index].id, event.cause, event.duration_hours
                );
                event.duration_hours
            }
            None => 0,
        };

        self.inventory.consume(&required);

        let vehicle = &mut self.vehicles[index];
        // One process hour per advance, plus any delay
        vehicle.advance_stage(delay_hours + 1);
        if vehicle.completed {
            self.completed_vehicles += 1;
            info!("vehicle {} completed assembly", vehicle.id);
        } else {
            info!("vehicle {} moved to '{}'", vehicle.id, vehicle.current_stage());
        }
    }

    /// Leaves a vehicle in place for this pass; it waits out the hour and
    /// is retried next pass.
    fn defer_vehicle(&mut self, index: usize, stage: &str) {
        self.part_shortages += 1;
        let vehicle = &mut self.vehicles[index];
        vehicle.stalled_passes += 1;
        vehicle.hours_at_current_stage += 1;
        info!(
            "not enough parts for '{stage}' (vehicle {}, deferred {} pass(es))",
            vehicle.id, vehicle.stalled_passes
        );

        if let Some(threshold) = self.config.stall_warning_after {
            if vehicle.stalled_passes == threshold {
                warn!(
                    "vehicle {} has stalled {threshold} passes at '{stage}'; \
                     a required part may be exhausted",
                    vehicle.id
                );
            }
        }
    }
}
