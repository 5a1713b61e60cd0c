//! Worker descriptor: the capability-declaring context sent with every
//! decision request.

use serde::{Deserialize, Serialize};

/// Declaration of one registered function, as the decision authority sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
}

/// Identity and declared capabilities of a worker.
///
/// Built fresh from the registry for each request; `functions` preserves
/// registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub functions: Vec<FunctionDeclaration>,
}
