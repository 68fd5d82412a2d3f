//! mealmax-core
//!
//! Core building blocks for meal battles.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, meal, record, outcome, score, errors）
//! - **ports**: 抽象化レイヤー（MealStore, StatsRecorder, RandomSource, Clock）
//! - **arena**: roster 管理・対戦解決・playback cursor
//! - **impls**: 実装（InMemoryMealStore）
//! - **config**: ArenaConfig（JSON から読み込み可能）
//! - **observability**: status views（leaderboard, roster snapshot）

pub mod arena;
pub mod config;
pub mod domain;
pub mod impls;
pub mod observability;
pub mod ports;

pub use arena::{Arena, ROSTER_CAPACITY};
pub use config::{ArenaConfig, ConfigError};
