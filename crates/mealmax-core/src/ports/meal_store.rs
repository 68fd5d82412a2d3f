//! MealStore port - 食事レコードの正本（source of truth）
//!
//! MealStore は以下を管理します：
//! - meal の作成・検索・論理削除
//! - 勝敗統計（battles, wins）
//! - leaderboard
//!
//! 実装は `impls::InMemoryMealStore` のみ（永続化は対象外）。

use crate::domain::{BattleOutcome, Difficulty, Meal, MealId, StoreError};
use crate::observability::{LeaderboardEntry, SortBy};

use super::StatsRecorder;

/// MealStore は meal と統計の正本
///
/// # 設計原則
/// - 論理削除された meal は検索・統計更新の対象外（名前は予約されたまま）
/// - `&self` で操作する（内部可変性）。arena と呼び出し元で共有できる
pub trait MealStore: StatsRecorder + Send + Sync {
    /// Create a meal and return its allocated id.
    fn create_meal(
        &self,
        name: &str,
        cuisine: &str,
        price: f64,
        difficulty: Difficulty,
    ) -> Result<MealId, StoreError>;

    /// Drop every record.
    fn clear_meals(&self) -> Result<(), StoreError>;

    /// Soft-delete a meal.
    fn delete_meal(&self, id: MealId) -> Result<(), StoreError>;

    fn get_meal_by_id(&self, id: MealId) -> Result<Meal, StoreError>;

    fn get_meal_by_name(&self, name: &str) -> Result<Meal, StoreError>;

    /// Meals that have fought at least once, best first.
    fn get_leaderboard(&self, sort_by: SortBy) -> Result<Vec<LeaderboardEntry>, StoreError>;

    /// Record an outcome given as a wire token (`"win"` / `"loss"`).
    fn update_meal_stats(&self, id: MealId, token: &str) -> Result<(), StoreError> {
        let outcome: BattleOutcome = token.parse()?;
        self.record_outcome(id, outcome)
    }
}
