//! Meal record: a meal plus its battle statistics, as held by a store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::meal::Meal;
use super::outcome::BattleOutcome;

/// Store-side record of a meal.
///
/// Design:
/// - This is the "single source of truth" for a meal's statistics.
/// - The arena only ever sees the `meal` snapshot.
/// - All state transitions happen here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    pub meal: Meal,

    /// Battles fought (wins + losses).
    pub battles: u32,
    pub wins: u32,

    /// Soft-delete flag. Deleted records keep their name reserved.
    pub deleted: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MealRecord {
    pub fn new(meal: Meal, now: DateTime<Utc>) -> Self {
        Self {
            meal,
            battles: 0,
            wins: 0,
            deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Count one battle and, on a win, one victory.
    pub fn record_outcome(&mut self, outcome: BattleOutcome, now: DateTime<Utc>) {
        self.battles += 1;
        if outcome == BattleOutcome::Win {
            self.wins += 1;
        }
        self.updated_at = now;
    }

    pub fn mark_deleted(&mut self, now: DateTime<Utc>) {
        self.deleted = true;
        self.updated_at = now;
    }

    /// Win percentage rounded to one decimal place; 0 before the first battle.
    pub fn win_pct(&self) -> f64 {
        if self.battles == 0 {
            return 0.0;
        }
        let pct = f64::from(self.wins) / f64::from(self.battles) * 100.0;
        (pct * 10.0).round() / 10.0
    }
}
