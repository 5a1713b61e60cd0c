//! Function port - a named, locally executable capability.

use async_trait::async_trait;

use crate::domain::{DroverError, FunctionDeclaration, Outcome};
use crate::ports::LogSink;

/// A capability the worker can be instructed to invoke.
///
/// Contract:
/// - `name` must be unique within a worker (enforced at registration).
/// - `execute` decodes `args` as it likes (the loop passes the bundle
///   through untouched) and reports success/failure via the returned
///   `Outcome`; an `Err` is reserved for real faults and aborts the run.
/// - `log` forwards progress strings to the worker's sink; a no-op sink is
///   supplied when none was installed.
#[async_trait]
pub trait Function: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    async fn execute(
        &self,
        args: &serde_json::Value,
        log: &dyn LogSink,
    ) -> Result<Outcome, DroverError>;
}

impl dyn Function {
    /// Declaration of this function for the worker descriptor.
    pub fn declaration(&self) -> FunctionDeclaration {
        FunctionDeclaration {
            name: self.name().to_string(),
            description: self.description().to_string(),
        }
    }
}
