//! WorkerBuilder - worker の構築とワイヤリング
//!
//! # Fail-fast 設計
//! - 関数の重複は `function()` の時点でエラー（lookup 時ではなく登録時）
//! - 実行時に必要な agent id / decision client は構築後に遅延バインド

use std::sync::Arc;

use crate::app::registry::FunctionRegistry;
use crate::app::worker::Worker;
use crate::domain::DroverError;
use crate::ports::{EnvironmentProvider, EnvironmentSource, Function};

/// Builds a `Worker`.
///
/// # 使用例
/// ```ignore
/// let mut worker = Worker::builder("worker-1", "greeter", "says hello")
///     .function(Arc::new(EchoFunction))?
///     .instructions("greet politely")
///     .build();
/// worker.set_agent_id("agent-1".into());
/// worker.set_client(client);
/// ```
pub struct WorkerBuilder {
    id: String,
    name: String,
    description: String,
    instructions: Option<String>,
    environment: EnvironmentSource,
    functions: FunctionRegistry,
}

impl WorkerBuilder {
    pub(crate) fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            instructions: None,
            environment: EnvironmentSource::Static,
            functions: FunctionRegistry::new(),
        }
    }

    /// Register a function. Duplicate names fail here, not at dispatch time.
    pub fn function(mut self, function: Arc<dyn Function>) -> Result<Self, DroverError> {
        self.functions.register(function)?;
        Ok(self)
    }

    /// Static instructions included in every environment snapshot.
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Install an environment provider; its snapshot is merged on top of the
    /// instructions field each cycle.
    pub fn environment(mut self, provider: Arc<dyn EnvironmentProvider>) -> Self {
        self.environment = EnvironmentSource::Provider(provider);
        self
    }

    pub fn build(self) -> Worker {
        Worker::from_parts(
            self.id,
            self.name,
            self.description,
            self.instructions,
            self.environment,
            self.functions,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::domain::Outcome;
    use crate::ports::LogSink;

    struct Named(&'static str);

    #[async_trait]
    impl Function for Named {
        fn name(&self) -> &str {
            self.0
        }

        async fn execute(
            &self,
            _args: &serde_json::Value,
            _log: &dyn LogSink,
        ) -> Result<Outcome, DroverError> {
            Ok(Outcome::success("ok"))
        }
    }

    #[test]
    fn builder_assembles_descriptor_identity() {
        let worker = Worker::builder("w-1", "greeter", "says hello")
            .function(Arc::new(Named("echo")))
            .unwrap()
            .build();

        let descriptor = worker.descriptor();
        assert_eq!(descriptor.id, "w-1");
        assert_eq!(descriptor.name, "greeter");
        assert_eq!(descriptor.description, "says hello");
        assert_eq!(descriptor.functions.len(), 1);
        assert_eq!(descriptor.functions[0].name, "echo");
    }

    #[test]
    fn builder_rejects_duplicate_functions() {
        let result = Worker::builder("w-1", "greeter", "says hello")
            .function(Arc::new(Named("echo")))
            .unwrap()
            .function(Arc::new(Named("echo")));

        assert!(matches!(
            result,
            Err(DroverError::DuplicateFunction(name)) if name == "echo"
        ));
    }
}
