//! Worker execution loop: one decision/execute cycle at a time.
//!
//! The loop is a small state machine driven entirely by the decision
//! authority:
//!
//! ```text
//! AwaitingDecision -> DecisionReceived -> Executing -> ResultStored -> AwaitingDecision
//!                                      \-> Terminated (first non-function discriminator)
//! ```
//!
//! Sequencing invariant: decision request n+1 always carries exactly the
//! report produced by executing the action of request n (or no report on the
//! very first request). The report travels in an explicit `CycleState` value
//! threaded through `step` (there is no hidden mutable slot), and it is
//! moved out (consumed exactly once) *before* the discriminator is known, so
//! a stop action arriving right after a function call drops that report
//! without it ever reaching the authority.

use std::sync::Arc;

use tokio::sync::watch;

use crate::app::builder::WorkerBuilder;
use crate::app::registry::FunctionRegistry;
use crate::domain::{
    AgentId, DroverError, Environment, INSTRUCTIONS_KEY, OutcomeReport, SubmissionId,
    WorkerDescriptor,
};
use crate::ports::{DecisionClient, EnvironmentSource, LogSink, NoopLogSink};

/// Options for one `step`/`run_task` invocation.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Narrate environment snapshots, chosen functions and their results to
    /// the worker's log sink.
    pub verbose: bool,

    /// Cancellation signal, observed between cycles only. An in-flight
    /// decision request or function invocation always runs to completion;
    /// callers needing hard bounds must wrap the ports externally.
    pub shutdown: Option<watch::Receiver<bool>>,
}

impl RunOptions {
    pub fn verbose() -> Self {
        Self {
            verbose: true,
            shutdown: None,
        }
    }

    pub fn with_shutdown(mut self, shutdown: watch::Receiver<bool>) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    fn cancelled(&self) -> bool {
        self.shutdown.as_ref().is_some_and(|rx| *rx.borrow())
    }
}

/// The report slot threaded through consecutive cycles of one submission.
///
/// Starts empty, carries the previous cycle's `OutcomeReport` afterwards.
/// `step` consumes it by value; whatever the cycle produces comes back in the
/// returned state.
#[derive(Debug, Default, PartialEq)]
pub struct CycleState {
    report: Option<OutcomeReport>,
}

impl CycleState {
    /// State carrying a report, as if the previous cycle executed `report`'s
    /// invocation. Useful for external drivers and tests.
    pub fn carrying(report: OutcomeReport) -> Self {
        Self {
            report: Some(report),
        }
    }

    /// The report that will accompany the next decision request, if any.
    pub fn pending(&self) -> Option<&OutcomeReport> {
        self.report.as_ref()
    }

    fn into_report(self) -> Option<OutcomeReport> {
        self.report
    }
}

/// What one cycle decided about the loop.
#[derive(Debug, PartialEq)]
pub enum StepOutcome {
    /// A function was invoked; drive another cycle with the returned state.
    Continue(CycleState),

    /// The authority signalled termination. Any pending report was consumed
    /// (and dropped) by this cycle.
    Done,
}

impl StepOutcome {
    /// The boolean contract: should another cycle follow?
    pub fn should_continue(&self) -> bool {
        matches!(self, StepOutcome::Continue(_))
    }
}

/// Why `run_task` stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStop {
    /// The decision authority signalled no further action.
    Done,

    /// The shutdown signal was observed between cycles.
    Cancelled,
}

/// An autonomous worker: identity, declared functions, and the loop that
/// drives them against a decision authority.
///
/// Construction happens through [`Worker::builder`]; the agent identity and
/// the decision client are late-bound and must both be set before any task
/// execution (a configuration error otherwise, checked before any request is
/// issued).
pub struct Worker {
    id: String,
    name: String,
    description: String,
    instructions: Option<String>,
    environment: EnvironmentSource,
    functions: FunctionRegistry,

    agent_id: Option<AgentId>,
    logger: Arc<dyn LogSink>,
    client: Option<Arc<dyn DecisionClient>>,
}

impl Worker {
    pub fn builder(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> WorkerBuilder {
        WorkerBuilder::new(id, name, description)
    }

    pub(crate) fn from_parts(
        id: String,
        name: String,
        description: String,
        instructions: Option<String>,
        environment: EnvironmentSource,
        functions: FunctionRegistry,
    ) -> Self {
        Self {
            id,
            name,
            description,
            instructions,
            environment,
            functions,
            agent_id: None,
            logger: Arc::new(NoopLogSink),
            client: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Agent identity used in all decision requests. Must be set before any
    /// task execution.
    pub fn set_agent_id(&mut self, agent_id: AgentId) {
        self.agent_id = Some(agent_id);
    }

    /// Install a progress-string sink. Until one is set, logging is a no-op.
    pub fn set_logger(&mut self, logger: Arc<dyn LogSink>) {
        self.logger = logger;
    }

    /// Bind the decision authority. Must be set before any task execution.
    pub fn set_client(&mut self, client: Arc<dyn DecisionClient>) {
        self.client = Some(client);
    }

    /// Identity + function declarations, as sent with every decision request.
    pub fn descriptor(&self) -> WorkerDescriptor {
        WorkerDescriptor {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            functions: self.functions.declarations(),
        }
    }

    /// Compose the per-cycle environment snapshot.
    ///
    /// The static `instructions` key is present only when instructions are
    /// configured; the provider snapshot (if a provider is installed) is
    /// merged on top, so provider keys win on collision. `state` is for
    /// external callers; the loop passes None.
    pub async fn compose_environment(
        &self,
        prior: Option<&OutcomeReport>,
        state: Option<&Environment>,
    ) -> Result<Environment, DroverError> {
        let mut snapshot = Environment::new();
        if let Some(instructions) = &self.instructions {
            snapshot.insert(
                INSTRUCTIONS_KEY.to_string(),
                serde_json::Value::String(instructions.clone()),
            );
        }
        match &self.environment {
            EnvironmentSource::Static => {}
            EnvironmentSource::Provider(provider) => {
                for (key, value) in provider.snapshot(prior, state).await? {
                    snapshot.insert(key, value);
                }
            }
        }
        Ok(snapshot)
    }

    /// Perform exactly one decision/execute cycle for an existing submission.
    ///
    /// One decision request, at most one function invocation. Returns
    /// `StepOutcome::Done` the first time the discriminator is not a
    /// function-call variant. Errors are never retried here (see
    /// `domain::errors` for the taxonomy).
    pub async fn step(
        &self,
        submission: &SubmissionId,
        state: CycleState,
        options: &RunOptions,
    ) -> Result<StepOutcome, DroverError> {
        let agent_id = self
            .agent_id
            .as_ref()
            .ok_or(DroverError::AgentNotInitialized)?;
        let client = self.client.as_ref().ok_or(DroverError::ClientNotInitialized)?;

        // Consumed exactly once, before the discriminator is known. A stop
        // action drops the report unseen.
        let prior = state.into_report();

        let environment = self.compose_environment(prior.as_ref(), None).await?;

        if options.verbose {
            self.logger.log(&format!(
                "Environment state: {}",
                serde_json::Value::Object(environment.clone())
            ));
        }

        let action = client
            .next_action(
                agent_id,
                submission,
                &self.descriptor(),
                prior.as_ref(),
                &environment,
            )
            .await?;

        if !action.action_type.is_function_call() {
            return Ok(StepOutcome::Done);
        }

        let args = action.action_args.ok_or_else(|| {
            DroverError::MalformedAction("function action without action_args".to_string())
        })?;

        let function = self
            .functions
            .get(&args.fn_name)
            .ok_or_else(|| DroverError::FunctionNotFound(args.fn_name.clone()))?;

        if options.verbose {
            self.logger.log(&format!(
                "Performing function {} with args {}.",
                args.fn_name, args.args
            ));
        }

        let outcome = function.execute(&args.args, self.logger.as_ref()).await?;

        if options.verbose {
            self.logger.log(&format!(
                "Function status: {} - {}.",
                outcome.status, outcome.feedback
            ));
        }

        Ok(StepOutcome::Continue(CycleState::carrying(
            outcome.report(args.fn_id),
        )))
    }

    /// Run one task to completion.
    ///
    /// Creates the submission exactly once, then drives `step` until the
    /// authority stops the loop or the shutdown signal is observed between
    /// cycles. No iteration cap or timeout is imposed at this layer.
    pub async fn run_task(
        &self,
        task: &str,
        options: &RunOptions,
    ) -> Result<RunStop, DroverError> {
        let agent_id = self
            .agent_id
            .as_ref()
            .ok_or(DroverError::AgentNotInitialized)?;
        let client = self.client.as_ref().ok_or(DroverError::ClientNotInitialized)?;

        let submission = client.create_submission(agent_id, task).await?;

        let mut state = CycleState::default();
        loop {
            if options.cancelled() {
                return Ok(RunStop::Cancelled);
            }

            match self.step(&submission, state, options).await? {
                StepOutcome::Continue(next) => state = next,
                StepOutcome::Done => return Ok(RunStop::Done),
            }
        }
    }
}
