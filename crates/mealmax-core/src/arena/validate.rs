//! Validation of raw caller input (ids and positions as received from an
//! adapter, before they become typed arguments).

use crate::domain::{ArenaError, MealId};
use crate::ports::{RandomSource, StatsRecorder};

use super::Arena;

impl<R: RandomSource, S: StatsRecorder> Arena<R, S> {
    /// Turn a raw id into a `MealId`.
    ///
    /// Negative values are `InvalidId`. With `check_in_roster`, an id that no
    /// combatant carries is `NotFound`.
    pub fn validate_id(&self, value: i64, check_in_roster: bool) -> Result<MealId, ArenaError> {
        let id = u64::try_from(value)
            .map(MealId::new)
            .map_err(|_| ArenaError::InvalidId { value })?;
        if check_in_roster && !self.contains(id) {
            return Err(ArenaError::NotFound { id });
        }
        Ok(id)
    }

    /// Turn a raw 1-based position into a position within the roster.
    pub fn validate_position(&self, value: i64) -> Result<usize, ArenaError> {
        let len = self.size();
        match usize::try_from(value) {
            Ok(position) if (1..=len).contains(&position) => Ok(position),
            _ => Err(ArenaError::InvalidPosition { value, len }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::arena::test_support::*;
    use crate::domain::{ArenaError, MealId};
    use rstest::rstest;

    #[test]
    fn valid_id_in_roster() {
        let arena = full_arena(0.5);
        assert_eq!(arena.validate_id(2, true).unwrap(), MealId::new(2));
    }

    #[test]
    fn negative_id_is_invalid() {
        let arena = full_arena(0.5);
        assert_eq!(
            arena.validate_id(-1, false).unwrap_err(),
            ArenaError::InvalidId { value: -1 }
        );
    }

    #[test]
    fn id_missing_from_roster() {
        let arena = full_arena(0.5);
        assert_eq!(
            arena.validate_id(5, true).unwrap_err(),
            ArenaError::NotFound { id: MealId::new(5) }
        );
        assert_eq!(arena.validate_id(5, false).unwrap(), MealId::new(5));
    }

    #[test]
    fn zero_is_a_well_formed_id() {
        let arena = arena(0.5);
        assert_eq!(arena.validate_id(0, false).unwrap(), MealId::new(0));
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    fn positions_inside_roster(#[case] value: i64) {
        let arena = full_arena(0.5);
        assert_eq!(arena.validate_position(value).unwrap(), value as usize);
    }

    #[rstest]
    #[case::zero(0)]
    #[case::negative(-3)]
    #[case::past_end(3)]
    fn positions_outside_roster(#[case] value: i64) {
        let arena = full_arena(0.5);
        assert_eq!(
            arena.validate_position(value).unwrap_err(),
            ArenaError::InvalidPosition { value, len: 2 }
        );
    }

    #[test]
    fn no_position_is_valid_in_empty_roster() {
        let arena = arena(0.5);
        assert!(arena.validate_position(1).is_err());
    }
}
