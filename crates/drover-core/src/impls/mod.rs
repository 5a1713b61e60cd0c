//! Implementations (development/test doubles for the ports).
//!
//! # 収録
//! - **ScriptedClient**: 固定 script を再生する decision client
//! - **StaticEnvironment**: 固定スナップショットを返す environment provider
//!
//! 本番の decision client（HTTP 等）はこの crate の外で実装します。

pub mod scripted_client;
pub mod static_environment;

pub use self::scripted_client::{RequestRecord, ScriptedClient, SubmissionRecord};
pub use self::static_environment::StaticEnvironment;
