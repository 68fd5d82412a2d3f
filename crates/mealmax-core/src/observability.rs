//! Serializable status views (leaderboard rows, roster snapshot).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{Difficulty, MealId, MealRecord, StoreError};

/// Leaderboard ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Wins,
    WinPct,
}

impl FromStr for SortBy {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wins" => Ok(SortBy::Wins),
            "win_pct" => Ok(SortBy::WinPct),
            other => Err(StoreError::InvalidSortBy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: MealId,
    pub meal: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
    pub battles: u32,
    pub wins: u32,
    pub win_pct: f64,
}

impl From<&MealRecord> for LeaderboardEntry {
    fn from(record: &MealRecord) -> Self {
        Self {
            id: record.meal.id,
            meal: record.meal.name.clone(),
            cuisine: record.meal.cuisine.clone(),
            price: record.meal.price,
            difficulty: record.meal.difficulty,
            battles: record.battles,
            wins: record.wins,
            win_pct: record.win_pct(),
        }
    }
}

/// Snapshot of an arena roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterStatus {
    pub combatants: Vec<MealId>,
    pub size: usize,
    pub cursor: usize,
    pub total_price: f64,
    pub ready: bool,
}
