//! Outcome model: common result format for function invocations.
//!
//! This module is loop-agnostic: it only defines the "shape" of results a
//! capability can produce and the wire form the decision authority receives
//! on the next request. The loop round-trips the status; it never branches
//! on it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::InvocationId;

/// Classification of a function invocation result.
///
/// Serialized lowercase to match the wire: success / failure. The catch-all
/// keeps the status opaque to this layer: a value we do not model is carried
/// through unchanged in meaning (the authority interprets it, not us).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Success,
    Failure,

    /// Any status this version does not model.
    #[serde(other)]
    Other,
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeStatus::Success => "success".fmt(f),
            OutcomeStatus::Failure => "failure".fmt(f),
            OutcomeStatus::Other => "other".fmt(f),
        }
    }
}

/// What a function invocation produced.
///
/// Failure here is a *reported* failure: the function ran and told the
/// authority it did not work out. Errors raised by a function are a different
/// thing entirely; those abort the run (see `domain::errors`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub status: OutcomeStatus,

    /// Human-readable feedback for the authority's next decision.
    pub feedback: String,
}

impl Outcome {
    pub fn success(feedback: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Success,
            feedback: feedback.into(),
        }
    }

    pub fn failure(feedback: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Failure,
            feedback: feedback.into(),
        }
    }

    /// Tag this outcome with the invocation id of the action that produced
    /// it, yielding the wire shape carried into the next decision request.
    pub fn report(self, fn_id: InvocationId) -> OutcomeReport {
        OutcomeReport {
            fn_id,
            status: self.status,
            feedback: self.feedback,
        }
    }
}

/// Wire form of an outcome: the result of decision *n*, attached to decision
/// request *n+1*.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeReport {
    /// Invocation id of the action this report answers.
    pub fn_id: InvocationId,

    pub status: OutcomeStatus,
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OutcomeStatus::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(
            serde_json::to_string(&OutcomeStatus::Failure).unwrap(),
            "\"failure\""
        );
    }

    #[test]
    fn unmodeled_status_is_tolerated() {
        let status: OutcomeStatus = serde_json::from_str("\"deferred\"").unwrap();
        assert_eq!(status, OutcomeStatus::Other);
    }

    #[test]
    fn report_carries_the_matching_invocation_id() {
        let report = Outcome::success("ok").report(InvocationId::new("fn-42"));
        assert_eq!(report.fn_id.as_str(), "fn-42");
        assert_eq!(report.status, OutcomeStatus::Success);
        assert_eq!(report.feedback, "ok");
    }

    #[test]
    fn report_roundtrip_json() {
        let report = Outcome::failure("missing input").report(InvocationId::new("fn-7"));
        let s = serde_json::to_string(&report).unwrap();
        let back: OutcomeReport = serde_json::from_str(&s).unwrap();
        assert_eq!(back, report);
    }
}
