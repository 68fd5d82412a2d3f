//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryMealStore**: 開発用・テスト用の MealStore
//!
//! 乱数源と時計の実装は `ports::random` / `ports::clock` にあります。

pub mod inmem_store;

pub use self::inmem_store::InMemoryMealStore;
