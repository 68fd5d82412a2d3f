//! Meal model: the contestant the arena battles with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::StoreError;
use super::ids::MealId;

/// Preparation difficulty tier.
///
/// Serialized as the upper-case tokens `LOW` / `MED` / `HIGH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Low,
    Med,
    High,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Low, Difficulty::Med, Difficulty::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Low => "LOW",
            Difficulty::Med => "MED",
            Difficulty::High => "HIGH",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| StoreError::InvalidMeal {
                reason: format!("Invalid difficulty level: {s}. Must be 'LOW', 'MED', or 'HIGH'."),
            })
    }
}

/// A meal as seen by the arena: a read-only snapshot of a store record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: MealId,
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
}

impl Meal {
    pub fn new(
        id: impl Into<MealId>,
        name: impl Into<String>,
        cuisine: impl Into<String>,
        price: f64,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cuisine: cuisine.into(),
            price,
            difficulty,
        }
    }

    /// Check the fields a store accepts on create.
    pub fn validate(name: &str, cuisine: &str, price: f64) -> Result<(), StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::InvalidMeal {
                reason: "Meal name must not be empty.".into(),
            });
        }
        if cuisine.trim().is_empty() {
            return Err(StoreError::InvalidMeal {
                reason: "Cuisine must not be empty.".into(),
            });
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(StoreError::InvalidMeal {
                reason: format!("Invalid price: {price}. Price must be a positive number."),
            });
        }
        Ok(())
    }
}
