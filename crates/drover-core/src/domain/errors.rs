//! Error taxonomy for the execution loop.
//!
//! The loop performs no local recovery or retry anywhere: every variant below
//! aborts the current task run and is surfaced to the caller.
//!
//! - configuration errors: caller must fix setup before invoking again
//! - lookup/contract errors: the decision authority and this worker disagree
//! - collaborator errors: a port failed; passed through

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DroverError {
    /// Task execution was attempted before `set_agent_id`.
    #[error("agent not initialized")]
    AgentNotInitialized,

    /// Task execution was attempted before `set_client`.
    #[error("client not initialized")]
    ClientNotInitialized,

    /// A second function with an already-registered name was added.
    #[error("duplicate function: {0}")]
    DuplicateFunction(String),

    /// The authority named a function this worker never declared.
    #[error("function not found: {0}")]
    FunctionNotFound(String),

    /// A function action arrived without a usable argument block.
    #[error("malformed action: {0}")]
    MalformedAction(String),

    /// The decision client failed.
    #[error("decision client error: {0}")]
    Client(String),

    /// The environment provider failed.
    #[error("environment provider error: {0}")]
    Environment(String),

    /// A function raised instead of reporting failure through its outcome.
    #[error("function execution error: {0}")]
    Execution(String),
}
