//! Action model: what the decision authority tells the worker to do next.
//!
//! This module only defines the wire shape of a decision response. How the
//! authority chooses actions is out of scope; the loop merely branches on the
//! discriminator and dispatches function actions by name.

use serde::{Deserialize, Serialize};

use super::ids::InvocationId;

/// Discriminator on a decision response.
///
/// Only the two function variants make the loop continue. Everything else,
/// including values this crate does not know about yet, means "stop", which
/// is why deserialization folds unknown strings into `Unknown` instead of
/// failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Invoke a capability for the first time.
    CallFunction,

    /// Keep driving a capability the authority considers still in progress.
    ContinueFunction,

    /// The authority is finished with this submission.
    Done,

    /// Any discriminator this version does not model. Treated as a stop.
    #[serde(other)]
    Unknown,
}

impl ActionType {
    /// Does this discriminator ask the worker to invoke a capability?
    pub fn is_function_call(self) -> bool {
        matches!(self, ActionType::CallFunction | ActionType::ContinueFunction)
    }
}

/// Argument block of a function action.
///
/// `args` is an opaque JSON value (a mapping from parameter name to value);
/// the loop never interprets it, each function decodes it as it likes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionArgs {
    /// Name of the capability to invoke (must be registered on the worker).
    pub fn_name: String,

    /// Invocation id issued by the authority; echoed back in the report.
    pub fn_id: InvocationId,

    /// Argument bundle, passed through untouched.
    #[serde(default)]
    pub args: serde_json::Value,
}

/// One decision response.
///
/// `action_args` is only present for function actions; a function action
/// without it is a contract violation surfaced as `MalformedAction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub action_type: ActionType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_args: Option<ActionArgs>,
}

impl Action {
    pub fn call_function(
        fn_name: impl Into<String>,
        fn_id: impl Into<InvocationId>,
        args: serde_json::Value,
    ) -> Self {
        Self {
            action_type: ActionType::CallFunction,
            action_args: Some(ActionArgs {
                fn_name: fn_name.into(),
                fn_id: fn_id.into(),
                args,
            }),
        }
    }

    pub fn continue_function(
        fn_name: impl Into<String>,
        fn_id: impl Into<InvocationId>,
        args: serde_json::Value,
    ) -> Self {
        Self {
            action_type: ActionType::ContinueFunction,
            action_args: Some(ActionArgs {
                fn_name: fn_name.into(),
                fn_id: fn_id.into(),
                args,
            }),
        }
    }

    pub fn done() -> Self {
        Self {
            action_type: ActionType::Done,
            action_args: None,
        }
    }
}
