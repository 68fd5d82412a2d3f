//! Domain identifiers (strongly-typed IDs).
//!
//! Meal ids are allocated by the record store as positive integers. The
//! arena never mints ids itself; it only validates raw caller input into a
//! `MealId` (see `Arena::validate_id`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a meal record.
///
/// `Display` prints the bare number so error messages read
/// "Meal with ID 1 not found".
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealId(u64);

impl MealId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for MealId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
