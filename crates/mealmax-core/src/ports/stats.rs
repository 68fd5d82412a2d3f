//! StatsRecorder port - 勝敗統計の記録
//!
//! The arena reports each resolved battle once, as a single winner/loser pair.

use std::sync::Arc;

use crate::domain::{BattleOutcome, MealId, StoreError};

/// StatsRecorder は対戦結果を外部ストアへ反映する
///
/// # 設計原則
/// - 同期呼び出し（呼び出し元の操作が返る前に完了する）
/// - 失敗は `StoreError` としてそのまま伝搬（リトライしない）
/// - `record_battle` は勝者・敗者の両方を反映するか、どちらも反映しない
pub trait StatsRecorder {
    fn record_outcome(&self, id: MealId, outcome: BattleOutcome) -> Result<(), StoreError>;

    /// Record one resolved battle: a win for `winner` and a loss for `loser`.
    ///
    /// On error neither record may have changed.
    fn record_battle(&self, winner: MealId, loser: MealId) -> Result<(), StoreError>;
}

impl<T: StatsRecorder + ?Sized> StatsRecorder for &T {
    fn record_outcome(&self, id: MealId, outcome: BattleOutcome) -> Result<(), StoreError> {
        (**self).record_outcome(id, outcome)
    }

    fn record_battle(&self, winner: MealId, loser: MealId) -> Result<(), StoreError> {
        (**self).record_battle(winner, loser)
    }
}

impl<T: StatsRecorder + ?Sized> StatsRecorder for Arc<T> {
    fn record_outcome(&self, id: MealId, outcome: BattleOutcome) -> Result<(), StoreError> {
        (**self).record_outcome(id, outcome)
    }

    fn record_battle(&self, winner: MealId, loser: MealId) -> Result<(), StoreError> {
        (**self).record_battle(winner, loser)
    }
}
