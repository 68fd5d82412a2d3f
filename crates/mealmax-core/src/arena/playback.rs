//! Cursor-based playback over the roster.
//!
//! The cursor is a zero-based index into the roster. Battles always pair
//! positions 1 and 2, so with the two-slot roster a playback run resolves
//! at most one battle.

use crate::domain::{ArenaError, BattleResult, Meal};
use crate::ports::{RandomSource, StatsRecorder};

use super::{Arena, ROSTER_CAPACITY};

impl<R: RandomSource, S: StatsRecorder> Arena<R, S> {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Combatant under the cursor, if the roster is not empty.
    pub fn get_current(&self) -> Option<&Meal> {
        self.combatants.get(self.cursor)
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Jump to a 1-based round.
    pub fn goto_round(&mut self, round: usize) -> Result<(), ArenaError> {
        let len = self.combatants.len();
        if round == 0 || round > len {
            return Err(ArenaError::Range {
                position: round,
                len,
            });
        }
        self.cursor = round - 1;
        Ok(())
    }

    /// Resolve the battle at hand, consuming the loser.
    pub fn play_current(&mut self) -> Result<BattleResult, ArenaError> {
        self.resolve_battle()
    }

    /// Keep resolving battles until fewer than two combatants remain, then
    /// rewind.
    pub fn play_remaining(&mut self) -> Result<Vec<BattleResult>, ArenaError> {
        let mut results = Vec::new();
        while self.combatants.len() >= ROSTER_CAPACITY {
            results.push(self.resolve_battle()?);
        }
        self.rewind();
        Ok(results)
    }

    pub fn play_all(&mut self) -> Result<Vec<BattleResult>, ArenaError> {
        self.rewind();
        self.play_remaining()
    }
}

#[cfg(test)]
mod tests {
    use crate::arena::test_support::*;
    use crate::domain::ArenaError;
    use rstest::rstest;

    #[test]
    fn cursor_starts_at_first_combatant() {
        let arena = full_arena(0.5);
        assert_eq!(arena.cursor(), 0);
        assert_eq!(arena.get_current(), Some(&meal_1()));
    }

    #[test]
    fn get_current_on_empty_roster() {
        let arena = arena(0.5);
        assert_eq!(arena.get_current(), None);
    }

    #[test]
    fn goto_round_moves_cursor() {
        let mut arena = full_arena(0.5);
        arena.goto_round(2).unwrap();
        assert_eq!(arena.cursor(), 1);
        assert_eq!(arena.get_current(), Some(&meal_2()));

        arena.rewind();
        assert_eq!(arena.cursor(), 0);
    }

    #[rstest]
    #[case::zero(0)]
    #[case::past_end(3)]
    fn goto_round_out_of_range(#[case] round: usize) {
        let mut arena = full_arena(0.5);
        arena.goto_round(2).unwrap();
        let err = arena.goto_round(round).unwrap_err();
        assert_eq!(err, ArenaError::Range { position: round, len: 2 });
        assert_eq!(arena.cursor(), 1);
    }

    #[test]
    fn play_current_resolves_one_battle() {
        let mut arena = full_arena(0.02);
        let result = arena.play_current().unwrap();
        assert_eq!(result.winner, meal_1());
        assert_eq!(arena.size(), 1);
        assert_eq!(arena.stats().calls().len(), 2);
    }

    #[test]
    fn play_current_needs_two_combatants() {
        let mut arena = arena(0.02);
        arena.add(meal_1()).unwrap();
        assert!(matches!(
            arena.play_current(),
            Err(ArenaError::NotReady { len: 1 })
        ));
    }

    #[test]
    fn play_all_resolves_exactly_one_battle() {
        let mut arena = full_arena(0.5);
        arena.goto_round(2).unwrap();

        let results = arena.play_all().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].winner, meal_2());
        assert_eq!(arena.list_all(), &[meal_2()]);
        assert_eq!(arena.cursor(), 0);
        assert_eq!(arena.stats().calls().len(), 2);
    }

    #[test]
    fn play_remaining_resets_cursor() {
        let mut arena = full_arena(0.02);
        arena.goto_round(2).unwrap();

        let results = arena.play_remaining().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(arena.cursor(), 0);
    }

    #[test]
    fn play_remaining_with_too_few_combatants_is_a_no_op() {
        let mut arena = arena(0.02);
        arena.add(meal_1()).unwrap();

        let results = arena.play_remaining().unwrap();
        assert!(results.is_empty());
        assert_eq!(arena.size(), 1);
        assert!(arena.stats().calls().is_empty());
    }
}
