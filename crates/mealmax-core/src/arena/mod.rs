//! Arena: the two-slot combatant roster and everything that acts on it.
//!
//! - roster management (this file)
//! - validation of raw caller input (`validate`)
//! - battle resolution (`battle`)
//! - cursor-based playback (`playback`)
//!
//! The roster holds at most [`ROSTER_CAPACITY`] meals. Playback works over
//! the same roster, so a full playback run resolves at most one battle.

mod battle;
mod playback;
mod validate;

use tracing::{debug, warn};

use crate::config::ArenaConfig;
use crate::domain::{ArenaError, Meal, MealId, ScorePolicy};
use crate::observability::RosterStatus;
use crate::ports::{RandomSource, StatsRecorder};

/// Maximum number of combatants in a roster.
pub const ROSTER_CAPACITY: usize = 2;

/// Arena は対戦の場（roster + cursor + 注入された collaborator）
///
/// # 使用例
/// ```ignore
/// let mut arena = Arena::new(ThreadRandom, store.clone());
/// arena.add(store.get_meal_by_name("Pho")?)?;
/// arena.add(store.get_meal_by_name("Ramen")?)?;
/// let result = arena.resolve_battle()?;
/// println!("winner: {}", result.winner_name());
/// ```
///
/// # 設計原則
/// - 乱数源と統計ストアはコンストラクタで注入（グローバル状態なし）
/// - 検証はすべて変更の前に行う（失敗時に部分的な状態を残さない）
/// - `&mut self` なので 1 インスタンスにつき同時に 1 操作のみ
pub struct Arena<R, S> {
    combatants: Vec<Meal>,
    cursor: usize,
    policy: ScorePolicy,
    random: R,
    stats: S,
}

impl<R: RandomSource, S: StatsRecorder> Arena<R, S> {
    /// Arena with the default score policy.
    pub fn new(random: R, stats: S) -> Self {
        Self::with_policy(ScorePolicy::default_v1(), random, stats)
    }

    pub fn with_policy(policy: ScorePolicy, random: R, stats: S) -> Self {
        Self {
            combatants: Vec::with_capacity(ROSTER_CAPACITY),
            cursor: 0,
            policy,
            random,
            stats,
        }
    }

    pub fn policy(&self) -> &ScorePolicy {
        &self.policy
    }

    pub fn stats(&self) -> &S {
        &self.stats
    }

    /// Battle score of a meal under this arena's policy.
    pub fn score(&self, meal: &Meal) -> f64 {
        self.policy.score(meal)
    }

    /// Append a combatant.
    pub fn add(&mut self, meal: Meal) -> Result<(), ArenaError> {
        if self.contains(meal.id) {
            return Err(ArenaError::Duplicate { id: meal.id });
        }
        if self.combatants.len() >= ROSTER_CAPACITY {
            return Err(ArenaError::Capacity {
                capacity: ROSTER_CAPACITY,
            });
        }
        debug!(meal_id = %meal.id, meal = %meal.name, "combatant added");
        self.combatants.push(meal);
        Ok(())
    }

    pub fn remove_by_id(&mut self, id: MealId) -> Result<Meal, ArenaError> {
        let index = self.index_of(id)?;
        let removed = self.combatants.remove(index);
        self.clamp_cursor();
        debug!(meal_id = %id, "combatant removed");
        Ok(removed)
    }

    /// Remove the combatant at a 1-based position.
    pub fn remove_by_position(&mut self, position: usize) -> Result<Meal, ArenaError> {
        let index = self.index_for(position)?;
        let removed = self.combatants.remove(index);
        self.clamp_cursor();
        debug!(meal_id = %removed.id, position, "combatant removed");
        Ok(removed)
    }

    /// Move a combatant to a 1-based position, shifting the others.
    pub fn move_to_position(&mut self, id: MealId, position: i64) -> Result<(), ArenaError> {
        let from = self.index_of(id)?;
        let to = self.validate_position(position)? - 1;
        let meal = self.combatants.remove(from);
        self.combatants.insert(to, meal);
        debug!(meal_id = %id, position, "combatant moved");
        Ok(())
    }

    /// Swap the combatants at two 1-based positions.
    pub fn swap(&mut self, position_a: i64, position_b: i64) -> Result<(), ArenaError> {
        let a = self.validate_position(position_a)? - 1;
        let b = self.validate_position(position_b)? - 1;
        if a == b {
            return Err(ArenaError::SelfSwap { position: a + 1 });
        }
        self.combatants.swap(a, b);
        debug!(position_a, position_b, "combatants swapped");
        Ok(())
    }

    pub fn move_to_end(&mut self, id: MealId) -> Result<(), ArenaError> {
        let from = self.index_of(id)?;
        let meal = self.combatants.remove(from);
        self.combatants.push(meal);
        Ok(())
    }

    pub fn move_to_front(&mut self, id: MealId) -> Result<(), ArenaError> {
        let from = self.index_of(id)?;
        let meal = self.combatants.remove(from);
        self.combatants.insert(0, meal);
        Ok(())
    }

    /// Empty the roster and reset the cursor. Clearing an empty roster only warns.
    pub fn clear(&mut self) {
        if self.combatants.is_empty() {
            warn!("Clearing an empty combatant list");
        }
        self.combatants.clear();
        self.cursor = 0;
    }

    pub fn list_all(&self) -> &[Meal] {
        &self.combatants
    }

    pub fn size(&self) -> usize {
        self.combatants.len()
    }

    pub fn total_price(&self) -> f64 {
        self.combatants.iter().map(|m| m.price).sum()
    }

    pub fn contains(&self, id: MealId) -> bool {
        self.combatants.iter().any(|m| m.id == id)
    }

    /// Whether a battle can be resolved right now.
    pub fn is_ready(&self) -> bool {
        self.combatants.len() == ROSTER_CAPACITY
    }

    pub fn status(&self) -> RosterStatus {
        RosterStatus {
            combatants: self.combatants.iter().map(|m| m.id).collect(),
            size: self.size(),
            cursor: self.cursor,
            total_price: self.total_price(),
            ready: self.is_ready(),
        }
    }

    fn index_of(&self, id: MealId) -> Result<usize, ArenaError> {
        self.combatants
            .iter()
            .position(|m| m.id == id)
            .ok_or(ArenaError::NotFound { id })
    }

    /// 1-based position -> index.
    fn index_for(&self, position: usize) -> Result<usize, ArenaError> {
        let len = self.combatants.len();
        if position == 0 || position > len {
            return Err(ArenaError::Range { position, len });
        }
        Ok(position - 1)
    }

    /// Keep the cursor inside [0, len); an empty roster parks it at 0.
    fn clamp_cursor(&mut self) {
        let last = self.combatants.len().saturating_sub(1);
        if self.cursor > last {
            self.cursor = last;
        }
    }
}

impl<S: StatsRecorder> Arena<Box<dyn RandomSource>, S> {
    /// Arena wired from configuration: score policy plus a seeded or
    /// thread-local random source.
    pub fn from_config(config: &ArenaConfig, stats: S) -> Self {
        Self::with_policy(config.score.clone(), config.random_source(), stats)
    }
}
