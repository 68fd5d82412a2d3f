//! JSON session files: meals to create and rounds to fight.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use mealmax_core::ArenaConfig;
use mealmax_core::domain::Difficulty;

/// A scripted battle session.
///
/// ```json
/// {
///   "arena": { "seed": 42 },
///   "meals": [
///     { "name": "Pho", "cuisine": "Vietnamese", "price": 12.0, "difficulty": "MED" },
///     { "name": "Ramen", "cuisine": "Japanese", "price": 14.5, "difficulty": "HIGH" }
///   ],
///   "rounds": [["Pho", "Ramen"]]
/// }
/// ```
///
/// A round names the two meals to fight, in seat order: the first name takes
/// position 1. A meal already in the arena (the previous winner) stays in the
/// arena; anything else is cleared first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub arena: ArenaConfig,

    pub meals: Vec<MealSpec>,

    #[serde(default)]
    pub rounds: Vec<[String; 2]>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSpec {
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
}

impl SessionConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read session file {}", path.display()))?;
        let session: SessionConfig = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse session file {}", path.display()))?;
        session.validate()?;
        Ok(session)
    }

    fn validate(&self) -> Result<()> {
        self.arena.validate()?;
        for [a, b] in &self.rounds {
            if a == b {
                bail!("round pairs '{a}' with itself");
            }
            for name in [a, b] {
                if !self.meals.iter().any(|m| &m.name == name) {
                    bail!("round refers to unknown meal '{name}'");
                }
            }
        }
        Ok(())
    }
}
