//! Errors - エラー型と分類
//!
//! Every failure raised by the arena or the record store is a distinct,
//! matchable variant carrying the offending value. `Display` keeps the
//! messages existing callers already match on.

use thiserror::Error;

use super::ids::MealId;

/// ErrorKind は呼び出し側（HTTP/CLI adapter）向けの分類
///
/// # 分類
/// - NotFound: 対象が存在しない / 削除済み
/// - BadRequest: 引数の検証エラー、前提条件違反
/// - Conflict: 重複・容量超過
/// - Upstream: 注入された collaborator（乱数源・統計ストア）の障害
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    BadRequest,
    Conflict,
    Upstream,
}

/// Failure of the randomness capability.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RandomError {
    #[error("random draw {0} is outside [0, 1)")]
    OutOfRange(f64),

    #[error("random source unavailable: {0}")]
    Unavailable(String),
}

/// Failures of the meal record store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("Meal with this name already exists")]
    DuplicateName { name: String },

    #[error("Meal with ID {id} not found")]
    NotFound { id: MealId },

    #[error("Meal with name {name} not found")]
    NameNotFound { name: String },

    #[error("Meal with ID {id} is already deleted")]
    AlreadyDeleted { id: MealId },

    #[error("Meal with ID {id} has been deleted")]
    Deleted { id: MealId },

    #[error("Invalid operation: {token}")]
    InvalidOperation { token: String },

    #[error("Invalid meal: {reason}")]
    InvalidMeal { reason: String },

    #[error("Invalid sort_by parameter: {0}")]
    InvalidSortBy(String),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::NotFound { .. }
            | StoreError::NameNotFound { .. }
            | StoreError::Deleted { .. } => ErrorKind::NotFound,
            StoreError::DuplicateName { .. } | StoreError::AlreadyDeleted { .. } => {
                ErrorKind::Conflict
            }
            StoreError::InvalidOperation { .. }
            | StoreError::InvalidMeal { .. }
            | StoreError::InvalidSortBy(_) => ErrorKind::BadRequest,
        }
    }
}

/// Failures raised by the arena.
///
/// Validation variants are always returned before any roster mutation or
/// stats report. `Random` and `Stats` wrap collaborator failures unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArenaError {
    #[error("Meal with ID {id} is already in the combatant list")]
    Duplicate { id: MealId },

    #[error("Combatant list is full, cannot add more combatants.")]
    Capacity { capacity: usize },

    #[error("Meal with ID {id} not found in the combatant list")]
    NotFound { id: MealId },

    #[error("Position {position} is out of range (combatant list has {len} entries)")]
    Range { position: usize, len: usize },

    #[error("Invalid meal id: {value}")]
    InvalidId { value: i64 },

    #[error("Invalid position: {value} (expected 1..={len})")]
    InvalidPosition { value: i64, len: usize },

    #[error("Cannot swap a combatant with itself (position {position})")]
    SelfSwap { position: usize },

    #[error("Two combatants must be prepped for a battle.")]
    NotReady { len: usize },

    #[error(transparent)]
    Random(#[from] RandomError),

    #[error(transparent)]
    Stats(#[from] StoreError),
}

impl ArenaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArenaError::NotFound { .. } => ErrorKind::NotFound,
            ArenaError::Duplicate { .. } | ArenaError::Capacity { .. } => ErrorKind::Conflict,
            ArenaError::Range { .. }
            | ArenaError::InvalidId { .. }
            | ArenaError::InvalidPosition { .. }
            | ArenaError::SelfSwap { .. }
            | ArenaError::NotReady { .. } => ErrorKind::BadRequest,
            ArenaError::Random(_) | ArenaError::Stats(_) => ErrorKind::Upstream,
        }
    }
}
