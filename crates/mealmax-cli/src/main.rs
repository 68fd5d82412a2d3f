mod session;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mealmax_core::Arena;
use mealmax_core::domain::{BattleResult, Difficulty, Meal, MealId};
use mealmax_core::impls::InMemoryMealStore;
use mealmax_core::observability::{LeaderboardEntry, SortBy};
use mealmax_core::ports::{MealStore, RandomSource, StatsRecorder};

use crate::session::SessionConfig;

#[derive(Parser, Debug)]
#[command(name = "mealmax", version, about = "Meal battle arena")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scripted battle session and print the results as JSON
    Run {
        /// Session file (JSON)
        session: PathBuf,

        /// Override the session's random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Leaderboard ordering: wins or win_pct
        #[arg(long, default_value = "wins")]
        sort_by: String,
    },
    /// Print the battle score of a meal
    Score {
        #[arg(long)]
        price: f64,
        #[arg(long)]
        cuisine: String,
        /// LOW, MED or HIGH
        #[arg(long)]
        difficulty: String,
    },
}

#[derive(Debug, Serialize)]
struct SessionReport {
    battles: Vec<BattleResult>,
    leaderboard: Vec<LeaderboardEntry>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            session,
            seed,
            sort_by,
        } => {
            let sort_by: SortBy = sort_by.parse()?;
            let mut session = SessionConfig::load_from_file(&session)?;
            if let Some(seed) = seed {
                session.arena.seed = Some(seed);
            }
            let report = run_session(&session, sort_by)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Score {
            price,
            cuisine,
            difficulty,
        } => {
            let difficulty: Difficulty = difficulty.parse()?;
            let meal = Meal::new(MealId::new(0), "", cuisine, price, difficulty);
            println!("{}", mealmax_core::domain::battle_score(&meal));
        }
    }
    Ok(())
}

fn run_session(session: &SessionConfig, sort_by: SortBy) -> Result<SessionReport> {
    let store = Arc::new(InMemoryMealStore::new());
    for spec in &session.meals {
        store
            .create_meal(&spec.name, &spec.cuisine, spec.price, spec.difficulty)
            .with_context(|| format!("failed to create meal '{}'", spec.name))?;
    }

    let mut arena = Arena::from_config(&session.arena, Arc::clone(&store));
    let mut battles = Vec::new();
    for (round, pair) in session.rounds.iter().enumerate() {
        let results = play_round(&mut arena, store.as_ref(), pair)
            .with_context(|| format!("round {} ({} vs {}) failed", round + 1, pair[0], pair[1]))?;
        battles.extend(results);
    }
    info!(battles = battles.len(), "session finished");

    Ok(SessionReport {
        battles,
        leaderboard: store.get_leaderboard(sort_by)?,
    })
}

/// Seat the two named meals in pair order, keeping an incumbent that fights
/// again.
fn play_round<R, S>(
    arena: &mut Arena<R, S>,
    store: &dyn MealStore,
    pair: &[String; 2],
) -> Result<Vec<BattleResult>>
where
    R: RandomSource,
    S: StatsRecorder,
{
    let meals = pair
        .iter()
        .map(|name| store.get_meal_by_name(name))
        .collect::<Result<Vec<_>, _>>()?;

    let keeps_incumbent = arena
        .list_all()
        .iter()
        .all(|seated| meals.iter().any(|m| m.id == seated.id));
    if !keeps_incumbent {
        arena.clear();
    }
    let first = meals[0].id;
    for meal in meals {
        if !arena.contains(meal.id) {
            arena.add(meal)?;
        }
    }
    arena.move_to_position(first, 1)?;
    Ok(arena.play_all()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MealSpec;
    use mealmax_core::ArenaConfig;
    use mealmax_core::ports::FixedRandom;

    fn spec(name: &str, cuisine: &str, price: f64, difficulty: Difficulty) -> MealSpec {
        MealSpec {
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            price,
            difficulty,
        }
    }

    #[test]
    fn session_runs_every_round() {
        let session = SessionConfig {
            arena: ArenaConfig {
                seed: Some(11),
                ..ArenaConfig::default_v1()
            },
            meals: vec![
                spec("Meal 1", "Cuisine 1", 20.0, Difficulty::Low),
                spec("Meal 2", "Cuisine 2", 25.0, Difficulty::Med),
                spec("Meal 3", "Cuisine 3", 15.0, Difficulty::High),
            ],
            rounds: vec![
                ["Meal 1".to_string(), "Meal 2".to_string()],
                ["Meal 3".to_string(), "Meal 1".to_string()],
            ],
        };

        let report = run_session(&session, SortBy::Wins).unwrap();
        assert_eq!(report.battles.len(), 2);
        let total_battles: u32 = report.leaderboard.iter().map(|e| e.battles).sum();
        assert_eq!(total_battles, 4);
    }

    #[test]
    fn rounds_seat_meals_in_pair_order() {
        let store = Arc::new(InMemoryMealStore::new());
        for (name, cuisine, price, difficulty) in [
            ("Meal 1", "Cuisine 1", 20.0, Difficulty::Low),
            ("Meal 2", "Cuisine 2", 25.0, Difficulty::Med),
            ("Meal 3", "Cuisine 3", 15.0, Difficulty::High),
        ] {
            store.create_meal(name, cuisine, price, difficulty).unwrap();
        }
        // a zero draw is below any non-zero delta, so the first seat always wins
        let mut arena = Arena::new(FixedRandom::new(0.0), Arc::clone(&store));

        let pair = |a: &str, b: &str| [a.to_string(), b.to_string()];
        let first = play_round(&mut arena, store.as_ref(), &pair("Meal 1", "Meal 2")).unwrap();
        assert_eq!(first[0].winner_name(), "Meal 1");

        // the incumbent is named second, so the challenger takes seat 1
        let second = play_round(&mut arena, store.as_ref(), &pair("Meal 3", "Meal 1")).unwrap();
        assert_eq!(second[0].winner_name(), "Meal 3");
        assert!(second[0].first_won);
    }
}
