//! DecisionClient port - the external decision authority.
//!
//! The authority is an opaque remote oracle: transport and serialization of
//! reaching it live behind this trait. The loop only needs the two calls
//! below, and awaits them strictly sequentially.

use async_trait::async_trait;

use crate::domain::{
    Action, AgentId, DroverError, Environment, OutcomeReport, SubmissionId, WorkerDescriptor,
};

/// Narrow interface to the decision authority.
///
/// Design intent:
/// - `create_submission` opens one task instance; the handle is passed
///   unchanged through every subsequent request for that task.
/// - `next_action` receives the report of the previous cycle's execution
///   (None on the very first request). This ordering is the core invariant
///   of the loop and must not be reordered or pipelined by implementations.
#[async_trait]
pub trait DecisionClient: Send + Sync {
    /// Open a submission for a task description.
    async fn create_submission(
        &self,
        agent_id: &AgentId,
        task: &str,
    ) -> Result<SubmissionId, DroverError>;

    /// Ask what to do next.
    async fn next_action(
        &self,
        agent_id: &AgentId,
        submission: &SubmissionId,
        worker: &WorkerDescriptor,
        prior: Option<&OutcomeReport>,
        environment: &Environment,
    ) -> Result<Action, DroverError>;
}
