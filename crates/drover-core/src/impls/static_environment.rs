//! StaticEnvironment - 開発用の environment provider

use async_trait::async_trait;

use crate::domain::{DroverError, Environment, OutcomeReport};
use crate::ports::EnvironmentProvider;

/// Provider that returns the same snapshot every cycle.
///
/// Handy for demos and tests where the context does not change; real
/// providers compute their snapshot from live state.
pub struct StaticEnvironment {
    snapshot: Environment,
}

impl StaticEnvironment {
    pub fn new(snapshot: Environment) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl EnvironmentProvider for StaticEnvironment {
    async fn snapshot(
        &self,
        _prior: Option<&OutcomeReport>,
        _state: Option<&Environment>,
    ) -> Result<Environment, DroverError> {
        Ok(self.snapshot.clone())
    }
}
