//! InMemoryMealStore - 開発用・テスト用の meal ストア
//!
//! # 実装詳細
//! - BTreeMap<MealId, MealRecord> で id 順に保持
//! - Mutex で排他制御（arena と呼び出し元で `Arc` 共有できる）
//! - Clock で created_at / updated_at を記録

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::domain::{BattleOutcome, Difficulty, Meal, MealId, MealRecord, StoreError};
use crate::observability::{LeaderboardEntry, SortBy};
use crate::ports::{Clock, MealStore, StatsRecorder, SystemClock};

struct InMemoryMealStoreState {
    records: BTreeMap<MealId, MealRecord>,

    /// Next id to assign.
    next_id: u64,
}

impl InMemoryMealStoreState {
    fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> MealId {
        let id = MealId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Live (not soft-deleted) record by id.
    fn live(&self, id: MealId) -> Result<&MealRecord, StoreError> {
        let record = self.records.get(&id).ok_or(StoreError::NotFound { id })?;
        if record.deleted {
            return Err(StoreError::Deleted { id });
        }
        Ok(record)
    }

    fn live_mut(&mut self, id: MealId) -> Result<&mut MealRecord, StoreError> {
        let record = self
            .records
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;
        if record.deleted {
            return Err(StoreError::Deleted { id });
        }
        Ok(record)
    }
}

/// In-memory implementation of [`MealStore`].
///
/// # 使用例
/// ```ignore
/// let store = Arc::new(InMemoryMealStore::new());
/// let id = store.create_meal("Pho", "Vietnamese", 12.0, Difficulty::Med)?;
/// let mut arena = Arena::new(ThreadRandom, store.clone());
/// arena.add(store.get_meal_by_id(id)?)?;
/// ```
pub struct InMemoryMealStore<C = SystemClock> {
    state: Mutex<InMemoryMealStoreState>,
    clock: C,
}

impl InMemoryMealStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for InMemoryMealStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InMemoryMealStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: Mutex::new(InMemoryMealStoreState::new()),
            clock,
        }
    }

    /// Full record including statistics and the deleted flag.
    pub fn get_record(&self, id: MealId) -> Option<MealRecord> {
        self.lock().records.get(&id).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, InMemoryMealStoreState> {
        // Records are only ever updated whole, so a poisoned guard is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Clock> StatsRecorder for InMemoryMealStore<C> {
    fn record_outcome(&self, id: MealId, outcome: BattleOutcome) -> Result<(), StoreError> {
        let now = self.clock.now();
        let mut state = self.lock();
        let record = state.live_mut(id)?;
        record.record_outcome(outcome, now);
        debug!(meal_id = %id, %outcome, battles = record.battles, wins = record.wins, "meal stats updated");
        Ok(())
    }

    fn record_battle(&self, winner: MealId, loser: MealId) -> Result<(), StoreError> {
        let now = self.clock.now();
        let mut state = self.lock();
        // both checked under the same guard before either is touched
        state.live(winner)?;
        state.live(loser)?;
        state.live_mut(winner)?.record_outcome(BattleOutcome::Win, now);
        state.live_mut(loser)?.record_outcome(BattleOutcome::Loss, now);
        debug!(winner = %winner, loser = %loser, "battle recorded");
        Ok(())
    }
}

impl<C: Clock> MealStore for InMemoryMealStore<C> {
    fn create_meal(
        &self,
        name: &str,
        cuisine: &str,
        price: f64,
        difficulty: Difficulty,
    ) -> Result<MealId, StoreError> {
        Meal::validate(name, cuisine, price)?;
        let now = self.clock.now();
        let mut state = self.lock();
        if state.records.values().any(|r| r.meal.name == name) {
            return Err(StoreError::DuplicateName {
                name: name.to_string(),
            });
        }
        let id = state.allocate_id();
        let meal = Meal::new(id, name, cuisine, price, difficulty);
        state.records.insert(id, MealRecord::new(meal, now));
        info!(meal_id = %id, meal = name, "meal created");
        Ok(id)
    }

    fn clear_meals(&self) -> Result<(), StoreError> {
        let mut state = self.lock();
        *state = InMemoryMealStoreState::new();
        info!("meals cleared");
        Ok(())
    }

    fn delete_meal(&self, id: MealId) -> Result<(), StoreError> {
        let now = self.clock.now();
        let mut state = self.lock();
        let record = state
            .records
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;
        if record.deleted {
            return Err(StoreError::AlreadyDeleted { id });
        }
        record.mark_deleted(now);
        info!(meal_id = %id, "meal marked as deleted");
        Ok(())
    }

    fn get_meal_by_id(&self, id: MealId) -> Result<Meal, StoreError> {
        let mut state = self.lock();
        Ok(state.live_mut(id)?.meal.clone())
    }

    fn get_meal_by_name(&self, name: &str) -> Result<Meal, StoreError> {
        let state = self.lock();
        let record = state
            .records
            .values()
            .find(|r| r.meal.name == name)
            .ok_or_else(|| StoreError::NameNotFound {
                name: name.to_string(),
            })?;
        if record.deleted {
            return Err(StoreError::Deleted { id: record.meal.id });
        }
        Ok(record.meal.clone())
    }

    fn get_leaderboard(&self, sort_by: SortBy) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let state = self.lock();
        let mut entries: Vec<LeaderboardEntry> = state
            .records
            .values()
            .filter(|r| !r.deleted && r.battles > 0)
            .map(LeaderboardEntry::from)
            .collect();
        match sort_by {
            SortBy::Wins => entries.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.id.cmp(&b.id))),
            SortBy::WinPct => entries.sort_by(|a, b| {
                b.win_pct
                    .total_cmp(&a.win_pct)
                    .then(a.id.cmp(&b.id))
            }),
        }
        Ok(entries)
    }
}
