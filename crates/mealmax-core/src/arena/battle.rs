//! Battle resolution between the two prepped combatants.

use tracing::info;

use crate::domain::{ArenaError, BattleResult, RandomError};
use crate::ports::{RandomSource, StatsRecorder};

use super::{Arena, ROSTER_CAPACITY};

impl<R: RandomSource, S: StatsRecorder> Arena<R, S> {
    /// Fight the two combatants and evict the loser.
    ///
    /// The first combatant wins iff the draw is below the normalized score
    /// delta; otherwise the second wins. A wide score gap therefore favours
    /// position 1 regardless of which side scored higher.
    ///
    /// The battle is reported as one winner/loser pair before the loser is
    /// evicted. If the stats collaborator fails, the error is returned and the
    /// roster is left untouched.
    pub fn resolve_battle(&mut self) -> Result<BattleResult, ArenaError> {
        let len = self.combatants.len();
        if len != ROSTER_CAPACITY {
            return Err(ArenaError::NotReady { len });
        }

        let first_score = self.policy.score(&self.combatants[0]);
        let second_score = self.policy.score(&self.combatants[1]);
        let delta = self.policy.delta(first_score, second_score);

        let draw = self.random.draw()?;
        if !(0.0..1.0).contains(&draw) {
            return Err(RandomError::OutOfRange(draw).into());
        }

        let first_won = draw < delta;
        let (winner_index, loser_index) = if first_won { (0, 1) } else { (1, 0) };
        let (winner_score, loser_score) = if first_won {
            (first_score, second_score)
        } else {
            (second_score, first_score)
        };

        let winner_id = self.combatants[winner_index].id;
        let loser_id = self.combatants[loser_index].id;
        self.stats.record_battle(winner_id, loser_id)?;

        let loser = self.combatants.remove(loser_index);
        let winner = self.combatants[0].clone();
        self.clamp_cursor();

        info!(
            winner = %winner.name,
            loser = %loser.name,
            winner_score,
            loser_score,
            delta,
            draw,
            "battle resolved"
        );

        Ok(BattleResult {
            winner,
            loser,
            winner_score,
            loser_score,
            delta,
            draw,
            first_won,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::arena::Arena;
    use crate::arena::test_support::*;
    use crate::domain::{
        ArenaError, BattleOutcome, Difficulty, Meal, MealId, RandomError, ScorePolicy, StoreError,
    };
    use crate::ports::FixedRandom;
    use rstest::rstest;

    #[test]
    fn first_meal_wins_on_low_draw() {
        // scores 177 vs 223 -> delta 0.46
        let mut arena = full_arena(0.02);
        let result = arena.resolve_battle().unwrap();

        assert_eq!(result.winner_name(), "Meal 1");
        assert_eq!(result.loser, meal_2());
        assert!(result.first_won);
        assert_eq!(result.winner_score, 177.0);
        assert_eq!(result.loser_score, 223.0);
        assert!((result.delta - 0.46).abs() < 1e-9);
        assert_eq!(arena.list_all(), &[meal_1()]);

        let calls = arena.stats().calls();
        assert!(calls.contains(&(MealId::new(1), BattleOutcome::Win)));
        assert!(calls.contains(&(MealId::new(2), BattleOutcome::Loss)));
    }

    #[test]
    fn second_meal_wins_on_high_draw() {
        let mut arena = full_arena(0.50);
        let result = arena.resolve_battle().unwrap();

        assert_eq!(result.winner_name(), "Meal 2");
        assert!(!result.first_won);
        assert_eq!(arena.list_all(), &[meal_2()]);

        let calls = arena.stats().calls();
        assert!(calls.contains(&(MealId::new(2), BattleOutcome::Win)));
        assert!(calls.contains(&(MealId::new(1), BattleOutcome::Loss)));
    }

    #[test]
    fn draw_equal_to_delta_goes_to_second() {
        // 90 vs 85 -> delta 0.05; the comparison is strict.
        let first = Meal::new(MealId::new(1), "Meal 1", "a", 93.0, Difficulty::Low);
        let second = Meal::new(MealId::new(2), "Meal 2", "a", 87.0, Difficulty::Med);
        let mut arena = Arena::new(FixedRandom::new(0.05), RecordingStats::default());
        arena.add(first).unwrap();
        arena.add(second.clone()).unwrap();

        let result = arena.resolve_battle().unwrap();
        assert!((result.delta - 0.05).abs() < 1e-9);
        assert_eq!(result.winner, second);
    }

    #[test]
    fn wide_gap_favours_first_position_even_when_it_scores_lower() {
        let weak = Meal::new(MealId::new(1), "Weak", "ab", 1.0, Difficulty::Low);
        let strong = Meal::new(MealId::new(2), "Strong", "abcdef", 100.0, Difficulty::High);
        let mut arena = Arena::new(FixedRandom::new(0.99), RecordingStats::default());
        arena.add(weak.clone()).unwrap();
        arena.add(strong).unwrap();

        // delta clamps to 1.0, so any draw in [0, 1) picks position 1
        let result = arena.resolve_battle().unwrap();
        assert_eq!(result.winner, weak);
        assert_eq!(result.delta, 1.0);
    }

    #[test]
    fn equal_scores_always_go_to_second() {
        let a = Meal::new(MealId::new(1), "A", "Same", 10.0, Difficulty::Med);
        let b = Meal::new(MealId::new(2), "B", "Same", 10.0, Difficulty::Med);
        let mut arena = Arena::new(FixedRandom::new(0.0), RecordingStats::default());
        arena.add(a).unwrap();
        arena.add(b.clone()).unwrap();

        assert_eq!(arena.resolve_battle().unwrap().winner, b);
    }

    #[rstest]
    #[case::empty(0)]
    #[case::single(1)]
    fn battle_requires_two_combatants(#[case] count: usize) {
        let mut arena = arena(0.5);
        for meal in [meal_1()].into_iter().take(count) {
            arena.add(meal).unwrap();
        }
        let err = arena.resolve_battle().unwrap_err();
        assert_eq!(err, ArenaError::NotReady { len: count });
        assert_eq!(err.to_string(), "Two combatants must be prepped for a battle.");
        assert!(arena.stats().calls().is_empty());
        assert_eq!(arena.size(), count);
    }

    #[test]
    fn each_outcome_is_reported_exactly_once() {
        let mut arena = full_arena(0.3);
        arena.resolve_battle().unwrap();
        let calls = arena.stats().calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls.iter().filter(|(_, o)| *o == BattleOutcome::Win).count(),
            1
        );
        assert_eq!(
            calls.iter().filter(|(_, o)| *o == BattleOutcome::Loss).count(),
            1
        );
    }

    #[rstest]
    #[case::negative(-0.1)]
    #[case::one(1.0)]
    #[case::nan(f64::NAN)]
    fn out_of_range_draw_is_rejected_before_side_effects(#[case] draw: f64) {
        let mut arena = full_arena(draw);
        let err = arena.resolve_battle().unwrap_err();
        assert!(matches!(err, ArenaError::Random(RandomError::OutOfRange(_))));
        assert_eq!(arena.size(), 2);
        assert!(arena.stats().calls().is_empty());
    }

    #[rstest]
    #[case::on_win(BattleOutcome::Win, 1)]
    #[case::on_loss(BattleOutcome::Loss, 2)]
    fn stats_failure_leaves_everything_untouched(
        #[case] fail_on: BattleOutcome,
        #[case] failing_id: u64,
    ) {
        let mut arena = Arena::new(FixedRandom::new(0.02), RecordingStats::failing_on(fail_on));
        arena.add(meal_1()).unwrap();
        arena.add(meal_2()).unwrap();

        for _ in 0..2 {
            let err = arena.resolve_battle().unwrap_err();
            assert_eq!(
                err,
                ArenaError::Stats(StoreError::NotFound {
                    id: MealId::new(failing_id)
                })
            );
        }
        assert!(arena.stats().calls().is_empty());
        assert_eq!(arena.list_all(), &[meal_1(), meal_2()]);
    }

    #[test]
    fn custom_policy_changes_delta() {
        let policy = ScorePolicy {
            delta_divisor: 1000.0,
            ..ScorePolicy::default_v1()
        };
        let mut arena = Arena::with_policy(policy, FixedRandom::new(0.05), RecordingStats::default());
        arena.add(meal_1()).unwrap();
        arena.add(meal_2()).unwrap();

        // delta 0.046 < 0.05 -> second wins
        let result = arena.resolve_battle().unwrap();
        assert_eq!(result.winner, meal_2());
    }

    #[test]
    fn winner_can_fight_again_after_new_challenger() {
        let mut arena = full_arena(0.02);
        arena.resolve_battle().unwrap();
        arena.add(meal_3()).unwrap();
        let result = arena.resolve_battle().unwrap();
        assert!(result.winner == meal_1() || result.winner == meal_3());
        assert_eq!(arena.size(), 1);
        assert_eq!(arena.stats().calls().len(), 4);
    }
}
