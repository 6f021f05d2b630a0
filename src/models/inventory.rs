//! Part inventory model.
//!
//! Tracks quantity-on-hand per part type. The inventory is shared by every
//! vehicle on the line but mutated exclusively by the scheduler, which must
//! follow a check-then-consume discipline: [`Inventory::has_sufficient`]
//! before [`Inventory::consume`]. `consume` itself performs no bounds check.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A part type with its quantity on hand.
///
/// Quantity reaching zero is terminal-low, not an error; further draws must
/// be rejected upstream by a sufficiency check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Part type name (e.g., "Chassis").
    pub name: String,
    /// Units on hand.
    pub quantity: u32,
}

impl Part {
    /// Creates a part with the given stock level.
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// Draws `amount` units from stock.
    ///
    /// Caller contract: sufficiency was verified immediately prior.
    pub fn use_units(&mut self, amount: u32) {
        debug_assert!(
            self.quantity >= amount,
            "part '{}' drawn below zero; caller skipped the sufficiency check",
            self.name
        );
        self.quantity = self.quantity.saturating_sub(amount);
    }
}

/// Shared part inventory for an assembly line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    parts: HashMap<String, Part>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a part type with its stock level.
    pub fn with_part(mut self, name: impl Into<String>, quantity: u32) -> Self {
        let name = name.into();
        self.parts.insert(name.clone(), Part::new(name, quantity));
        self
    }

    /// Default stock levels for a mixed vehicle line.
    pub fn standard_stock() -> Self {
        Self::new()
            .with_part("Chassis", 10)
            .with_part("Wheels", 40)
            .with_part("Engine", 10)
            .with_part("Transmission", 10)
            .with_part("Hydraulics", 10)
            .with_part("Wiring", 10)
            .with_part("Cabin", 5)
            .with_part("Blade", 5)
            .with_part("Seats", 20)
            .with_part("Paint", 10)
    }

    /// Units on hand for a part type. Unknown parts report zero.
    pub fn quantity(&self, name: &str) -> u32 {
        self.parts.get(name).map_or(0, |p| p.quantity)
    }

    /// Whether every named part has at least one unit on hand.
    ///
    /// Pure read, no side effect. A part missing from the inventory counts
    /// as insufficient. An empty requirement list is trivially sufficient.
    pub fn has_sufficient<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required.iter().all(|name| self.quantity(name.as_ref()) > 0)
    }

    /// Draws one unit of each named part.
    ///
    /// Caller contract: [`has_sufficient`](Inventory::has_sufficient) was
    /// checked immediately prior. No bounds check is performed here.
    pub fn consume<S: AsRef<str>>(&mut self, required: &[S]) {
        for name in required {
            if let Some(part) = self.parts.get_mut(name.as_ref()) {
                part.use_units(1);
            }
        }
    }

    /// Whether the inventory has ever stocked a part type.
    ///
    /// True even at zero quantity; exhausted is not the same as unknown.
    pub fn has_part(&self, name: &str) -> bool {
        self.parts.contains_key(name)
    }

    /// Part type names, in no particular order.
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(String::as_str)
    }

    /// Number of distinct part types.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_then_consume() {
        let mut inv = Inventory::new().with_part("Engine", 2).with_part("Wiring", 1);

        assert!(inv.has_sufficient(&["Engine", "Wiring"]));
        inv.consume(&["Engine", "Wiring"]);
        assert_eq!(inv.quantity("Engine"), 1);
        assert_eq!(inv.quantity("Wiring"), 0);

        // Wiring exhausted: check now fails, quantity stays at zero
        assert!(!inv.has_sufficient(&["Engine", "Wiring"]));
        assert!(inv.has_sufficient(&["Engine"]));
        assert_eq!(inv.quantity("Wiring"), 0);
    }

    #[test]
    fn test_missing_part_is_insufficient() {
        let inv = Inventory::new().with_part("Chassis", 1);
        assert!(!inv.has_sufficient(&["Chassis", "Turbo"]));
        assert_eq!(inv.quantity("Turbo"), 0);
    }

    #[test]
    fn test_empty_requirement_is_sufficient() {
        let inv = Inventory::new();
        let none: &[&str] = &[];
        assert!(inv.has_sufficient(none));
    }

    #[test]
    fn test_standard_stock_levels() {
        let inv = Inventory::standard_stock();
        assert_eq!(inv.part_count(), 10);
        assert_eq!(inv.quantity("Wheels"), 40);
        assert_eq!(inv.quantity("Blade"), 5);
    }

    #[test]
    fn test_serde_round_trip() {
        let inv = Inventory::new().with_part("Paint", 3);
        let json = serde_json::to_string(&inv).unwrap();
        let back: Inventory = serde_json::from_str(&json).unwrap();
        assert_eq!(back.quantity("Paint"), 3);
    }
}
