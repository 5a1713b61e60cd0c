//! Ports - 抽象化レイヤー
//!
//! このモジュールは外部コラボレータへの「ポート」を定義します。
//! 各 trait は外部システム（decision authority, 実行可能な関数,
//! 環境プロバイダ, ログ出力先）へのインターフェースを提供し、
//! 実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - decision authority は不透明なリモートオラクル（transport は実装側）
//! - loop はポート越しの呼び出しを厳密に逐次 await する

pub mod decision_client;
pub mod environment;
pub mod function;
pub mod log_sink;

pub use self::decision_client::DecisionClient;
pub use self::environment::{EnvironmentProvider, EnvironmentSource};
pub use self::function::Function;
pub use self::log_sink::{FnLogSink, LogSink, NoopLogSink};
