//! drover-core
//!
//! Core building blocks for driving an autonomous worker against an external
//! decision authority: the worker asks what to do next, executes the
//! requested local function, reports the outcome on the next request, and
//! stops when the authority says so.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, action, outcome, environment, errors）
//! - **ports**: 抽象化レイヤー（DecisionClient, Function, EnvironmentProvider, LogSink）
//! - **app**: アプリケーションロジック（FunctionRegistry, WorkerBuilder, Worker）
//! - **impls**: 実装（ScriptedClient など開発用）

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{CycleState, FunctionRegistry, RunOptions, RunStop, StepOutcome, Worker, WorkerBuilder};
pub use domain::{
    Action, ActionArgs, ActionType, AgentId, DroverError, Environment, FunctionDeclaration,
    InvocationId, Outcome, OutcomeReport, OutcomeStatus, SubmissionId, WorkerDescriptor,
};
pub use ports::{
    DecisionClient, EnvironmentProvider, EnvironmentSource, FnLogSink, Function, LogSink,
    NoopLogSink,
};
