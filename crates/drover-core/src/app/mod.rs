//! App - アプリケーション層
//!
//! このモジュールは、ports を組み合わせて実行ループを実装します。
//!
//! # 主要コンポーネント
//! - **FunctionRegistry**: 関数の登録と lookup（登録時に一意性を強制）
//! - **WorkerBuilder**: worker の構築とワイヤリング
//! - **Worker**: タスク実行ループ（decide→execute→report を 1 cycle ずつ）

pub mod builder;
pub mod registry;
pub mod worker;

pub use self::builder::WorkerBuilder;
pub use self::registry::FunctionRegistry;
pub use self::worker::{CycleState, RunOptions, RunStop, StepOutcome, Worker};
