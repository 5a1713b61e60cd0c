//! ScriptedClient - 開発用の decision client
//!
//! # 用途
//! - ループのテストダブル（どの action をどの順で返すかを固定）
//! - デモ／ローカル開発でのオラクル代わり
//!
//! # 実装詳細
//! - VecDeque に積んだ script を先頭から返す（尽きたら stop action）
//! - submission / request を全部記録して後から検査できる
//! - submission handle は ULID 文字列を発行

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use ulid::Ulid;

use crate::domain::{
    Action, AgentId, DroverError, Environment, OutcomeReport, SubmissionId, WorkerDescriptor,
};
use crate::ports::DecisionClient;

/// One recorded `create_submission` call.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub agent_id: AgentId,
    pub task: String,
}

/// One recorded `next_action` call.
///
/// Captures exactly what the loop handed over: which submission, the prior
/// report (None on the first cycle), and the environment snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestRecord {
    pub submission: SubmissionId,
    pub prior: Option<OutcomeReport>,
    pub environment: Environment,
}

/// Decision client that replays a fixed action sequence.
///
/// When the script runs out it returns a stop action, so dev scripts
/// terminate loops by default instead of hanging them.
pub struct ScriptedClient {
    script: Mutex<VecDeque<Action>>,
    submissions: Mutex<Vec<SubmissionRecord>>,
    requests: Mutex<Vec<RequestRecord>>,
}

impl ScriptedClient {
    pub fn new(script: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            submissions: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every submission created so far.
    pub fn submissions(&self) -> Vec<SubmissionRecord> {
        self.submissions.lock().unwrap().clone()
    }

    /// Every decision request received so far, in order.
    pub fn requests(&self) -> Vec<RequestRecord> {
        self.requests.lock().unwrap().clone()
    }

    /// Actions still left in the script.
    pub fn remaining(&self) -> usize {
        self.script.lock().unwrap().len()
    }
}

#[async_trait]
impl DecisionClient for ScriptedClient {
    async fn create_submission(
        &self,
        agent_id: &AgentId,
        task: &str,
    ) -> Result<SubmissionId, DroverError> {
        let id = SubmissionId::new(Ulid::new().to_string());
        self.submissions.lock().unwrap().push(SubmissionRecord {
            id: id.clone(),
            agent_id: agent_id.clone(),
            task: task.to_string(),
        });
        Ok(id)
    }

    async fn next_action(
        &self,
        _agent_id: &AgentId,
        submission: &SubmissionId,
        _worker: &WorkerDescriptor,
        prior: Option<&OutcomeReport>,
        environment: &Environment,
    ) -> Result<Action, DroverError> {
        self.requests.lock().unwrap().push(RequestRecord {
            submission: submission.clone(),
            prior: prior.cloned(),
            environment: environment.clone(),
        });

        let next = self.script.lock().unwrap().pop_front();
        Ok(next.unwrap_or_else(Action::done))
    }
}
