//! Domain model (ids, actions, outcomes, environment, errors).
//!
//! モジュール構成:
//! - **ids**: 強い型付きの ID（AgentId / SubmissionId / InvocationId）
//! - **action**: decision authority からの応答（Action / ActionType）
//! - **outcome**: 関数実行の結果とそのワイヤ形（Outcome / OutcomeReport）
//! - **environment**: 環境スナップショット
//! - **descriptor**: worker の能力宣言
//! - **errors**: エラー分類（DroverError）

pub mod action;
pub mod descriptor;
pub mod environment;
pub mod errors;
pub mod ids;
pub mod outcome;

pub use action::{Action, ActionArgs, ActionType};
pub use descriptor::{FunctionDeclaration, WorkerDescriptor};
pub use environment::{Environment, INSTRUCTIONS_KEY};
pub use errors::DroverError;
pub use ids::{AgentId, InvocationId, SubmissionId};
pub use outcome::{Outcome, OutcomeReport, OutcomeStatus};
