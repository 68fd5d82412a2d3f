//! Domain model (ids, meals, records, outcomes, scoring, errors).
//!
//! Nothing in here performs I/O or draws randomness; collaborators live
//! behind the traits in `ports`.

pub mod errors;
pub mod ids;
pub mod meal;
pub mod outcome;
pub mod record;
pub mod score;

pub use self::errors::{ArenaError, ErrorKind, RandomError, StoreError};
pub use ids::MealId;
pub use meal::{Difficulty, Meal};
pub use outcome::{BattleOutcome, BattleResult};
pub use record::MealRecord;
pub use score::{ScorePolicy, battle_score};
