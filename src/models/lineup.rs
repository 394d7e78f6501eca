//! Lineup (solution) model.
//!
//! A lineup is a complete assignment of programs to broadcast slots,
//! with the per-slot rating each assignment earned and the aggregate
//! score. Produced by the optimization driver; consumers iterate the
//! slots for display or export.

use serde::{Deserialize, Serialize};

/// A program occupying one broadcast slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// Caller-supplied slot label (e.g., broadcast hour 6..24).
    pub slot_label: u32,
    /// Assigned program ID.
    pub program: String,
    /// Rating earned by this program in this slot.
    pub rating: f64,
}

/// A complete broadcast lineup (solution).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lineup {
    /// Slot assignments in broadcast order.
    pub slots: Vec<SlotAssignment>,
    /// Sum of per-slot ratings.
    pub total_rating: f64,
}

impl Lineup {
    /// Creates an empty lineup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot assignment, accumulating the total rating.
    pub fn push(&mut self, slot_label: u32, program: impl Into<String>, rating: f64) {
        self.total_rating += rating;
        self.slots.push(SlotAssignment {
            slot_label,
            program: program.into(),
            rating,
        });
    }

    /// Number of filled slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the lineup has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Program IDs in broadcast order.
    pub fn programs(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.program.as_str()).collect()
    }

    /// Assignment for a given slot label, if present.
    pub fn assignment_for_slot(&self, slot_label: u32) -> Option<&SlotAssignment> {
        self.slots.iter().find(|s| s.slot_label == slot_label)
    }
}
