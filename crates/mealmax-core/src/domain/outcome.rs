//! Outcome model: what a battle produces.
//!
//! `BattleOutcome` is the token reported to the stats collaborator;
//! `BattleResult` is the full, ephemeral record of one resolved battle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::StoreError;
use super::meal::Meal;

/// Outcome reported for one side of a battle.
///
/// Serialized as the lower-case wire tokens `win` / `loss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleOutcome {
    Win,
    Loss,
}

impl BattleOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            BattleOutcome::Win => "win",
            BattleOutcome::Loss => "loss",
        }
    }
}

impl fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BattleOutcome {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(BattleOutcome::Win),
            "loss" => Ok(BattleOutcome::Loss),
            other => Err(StoreError::InvalidOperation {
                token: other.to_string(),
            }),
        }
    }
}

/// Result of one resolved battle.
///
/// `first_won` records whether the contestant in position 1 took the battle,
/// which is what the draw is compared against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleResult {
    pub winner: Meal,
    pub loser: Meal,
    pub winner_score: f64,
    pub loser_score: f64,

    /// Normalized score gap in [0, 1].
    pub delta: f64,

    /// The random value the delta was compared against.
    pub draw: f64,

    pub first_won: bool,
}

impl BattleResult {
    /// Display name of the winner.
    pub fn winner_name(&self) -> &str {
        &self.winner.name
    }
}
