//! Score policy: maps a meal to its battle strength.

use serde::{Deserialize, Serialize};

use super::meal::{Difficulty, Meal};

/// Scoring constants.
///
/// Battle fairness depends on these values, so `default_v1()` is fixed:
/// penalties LOW=3, MED=2, HIGH=1 and a delta divisor of 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorePolicy {
    pub low_penalty: f64,
    pub med_penalty: f64,
    pub high_penalty: f64,

    /// Score gap that maps to a delta of 1.0.
    pub delta_divisor: f64,
}

impl ScorePolicy {
    pub fn default_v1() -> Self {
        Self {
            low_penalty: 3.0,
            med_penalty: 2.0,
            high_penalty: 1.0,
            delta_divisor: 100.0,
        }
    }

    pub fn penalty(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Low => self.low_penalty,
            Difficulty::Med => self.med_penalty,
            Difficulty::High => self.high_penalty,
        }
    }

    /// `price * len(cuisine) - penalty(difficulty)`.
    ///
    /// The cuisine length counts characters, not bytes.
    pub fn score(&self, meal: &Meal) -> f64 {
        let cuisine_len = meal.cuisine.chars().count() as f64;
        meal.price * cuisine_len - self.penalty(meal.difficulty)
    }

    /// `|a - b| / delta_divisor`, clamped into [0, 1].
    pub fn delta(&self, a: f64, b: f64) -> f64 {
        let delta = (a - b).abs() / self.delta_divisor;
        if delta.is_nan() {
            return 0.0;
        }
        delta.clamp(0.0, 1.0)
    }
}

/// Score under the default policy.
pub fn battle_score(meal: &Meal) -> f64 {
    ScorePolicy::default_v1().score(meal)
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self::default_v1()
    }
}
