//! RandomSource port - 乱数源の抽象化
//!
//! The arena asks for one uniform draw in [0, 1) per battle. Sources:
//! - **ThreadRandom**: `rand::thread_rng()`（本番用）
//! - **SeededRandom**: `StdRng::seed_from_u64`（再現可能な対戦）
//! - **FixedRandom**: scripted values（テスト用）

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::RandomError;

/// RandomSource は [0, 1) の一様乱数を返す
///
/// Draws must be independent. A source that cannot produce a value (for
/// example a remote entropy service) returns `RandomError::Unavailable`.
pub trait RandomSource {
    fn draw(&mut self) -> Result<f64, RandomError>;
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn draw(&mut self) -> Result<f64, RandomError> {
        (**self).draw()
    }
}

/// Thread-local RNG seeded from the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn draw(&mut self) -> Result<f64, RandomError> {
        Ok(rand::thread_rng().r#gen::<f64>())
    }
}

/// Deterministic RNG for reproducible sessions.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn draw(&mut self) -> Result<f64, RandomError> {
        Ok(self.rng.r#gen::<f64>())
    }
}

/// Returns scripted values in order, then keeps repeating the last one.
///
/// Values are returned as given, so a script may deliberately contain an
/// out-of-range draw to exercise the arena's check.
#[derive(Debug, Clone)]
pub struct FixedRandom {
    values: VecDeque<f64>,
    last: f64,
}

impl FixedRandom {
    pub fn new(value: f64) -> Self {
        Self::sequence([value])
    }

    pub fn sequence(values: impl IntoIterator<Item = f64>) -> Self {
        let values: VecDeque<f64> = values.into_iter().collect();
        let last = values.back().copied().unwrap_or(0.0);
        Self { values, last }
    }
}

impl RandomSource for FixedRandom {
    fn draw(&mut self) -> Result<f64, RandomError> {
        Ok(self.values.pop_front().unwrap_or(self.last))
    }
}
