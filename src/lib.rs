//! Vehicle assembly line simulation.
//!
//! Simulates a single production line: vehicles progress through an ordered,
//! variant-specific sequence of assembly stages, consuming shared part
//! inventory and subject to randomized delays, until each vehicle completes
//! or the line stalls. The interesting component is the scheduler, which
//! decides each pass which vehicles may advance and arbitrates access to
//! finite parts.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Vehicle`, `VariantKind`, `Inventory`,
//!   `Part`, `StageRequirements`, `DelayModel`
//! - **`dispatching`**: Priority rules and the rule engine that orders
//!   vehicles for service each pass
//! - **`scheduler`**: `AssemblyLine`, the pass loop, and `LineReport`
//! - **`validation`**: Pre-run integrity checks (duplicate IDs, unknown
//!   stages, unstocked parts)
//!
//! # Example
//!
//! ```
//! use prodline::models::{Inventory, Vehicle, VariantKind};
//! use prodline::scheduler::AssemblyLine;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut line = AssemblyLine::new(Inventory::standard_stock());
//! line.add_vehicle(Vehicle::new("V-001", "D9", "yellow", VariantKind::Bulldozer));
//! line.add_vehicle(Vehicle::new("V-002", "GT", "red", VariantKind::Standard));
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let report = line.run(&mut rng);
//! println!("{report}");
//! assert_eq!(report.completed_vehicles, 2);
//! ```
//!
//! Randomness is always injected: the delay model draws from a caller-owned
//! `rand::Rng`, so a seeded generator reproduces a run exactly.
//!
//! # Reference
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod validation;
