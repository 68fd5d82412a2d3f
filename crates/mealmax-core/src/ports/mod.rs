//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! arena は外部 collaborator（record store, 乱数源, 時計）を
//! ここの trait 越しにのみ扱い、コンストラクタで注入されます。

pub mod clock;
pub mod meal_store;
pub mod random;
pub mod stats;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::meal_store::MealStore;
pub use self::random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
pub use self::stats::StatsRecorder;
