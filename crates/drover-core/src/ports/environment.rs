//! EnvironmentProvider port - per-cycle context snapshots.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{DroverError, Environment, OutcomeReport};

/// Produces the dynamic part of the environment snapshot.
///
/// `prior` is the report of the previous cycle's execution (None on the first
/// cycle); `state` is a caller-supplied snapshot for external drivers (the
/// loop itself passes None). A failing provider is fatal for that cycle.
#[async_trait]
pub trait EnvironmentProvider: Send + Sync {
    async fn snapshot(
        &self,
        prior: Option<&OutcomeReport>,
        state: Option<&Environment>,
    ) -> Result<Environment, DroverError>;
}

/// Where a worker's environment snapshot comes from.
///
/// A tagged variant instead of an `Option` field: composition matches on this
/// exhaustively, so "provider present" and "provider absent" are both
/// explicit, testable branches.
#[derive(Clone, Default)]
pub enum EnvironmentSource {
    /// No provider configured; the snapshot is just the instructions field.
    #[default]
    Static,

    /// Provider output is merged on top of the instructions field.
    Provider(Arc<dyn EnvironmentProvider>),
}

impl fmt::Debug for EnvironmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvironmentSource::Static => f.write_str("Static"),
            EnvironmentSource::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}
