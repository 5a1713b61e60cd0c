use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use drover_core::impls::{ScriptedClient, StaticEnvironment};
use drover_core::{
    Action, DroverError, Environment, FnLogSink, Function, LogSink, Outcome, RunOptions, Worker,
};

#[derive(Debug, Deserialize)]
struct EchoArgs {
    text: String,
}

/// 挨拶を繰り返すだけのデモ関数
struct EchoFunction;

#[async_trait]
impl Function for EchoFunction {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "repeats the given text"
    }

    async fn execute(
        &self,
        args: &serde_json::Value,
        log: &dyn LogSink,
    ) -> Result<Outcome, DroverError> {
        let args: EchoArgs = serde_json::from_value(args.clone())
            .map_err(|e| DroverError::Execution(format!("json decode: {e}")))?;

        log.log(&format!("echo: {}", args.text));
        Ok(Outcome::success(format!("echoed \"{}\"", args.text)))
    }
}

#[tokio::main]
async fn main() -> Result<(), DroverError> {
    // (A) decision client を用意（デモなので script を固定）
    //     本番はここがリモートの decision authority になる
    let client = Arc::new(ScriptedClient::new([
        Action::call_function("echo", "fn-1", serde_json::json!({ "text": "hello drover" })),
        Action::call_function("echo", "fn-2", serde_json::json!({ "text": "one more time" })),
        Action::done(),
    ]));

    // (B) 環境スナップショット（固定値で十分）
    let mut env = Environment::new();
    env.insert("locale".to_string(), serde_json::json!("en"));

    // (C) worker を組み立てて依存を遅延バインド
    let mut worker = Worker::builder("worker-1", "echoer", "echoes whatever it is told")
        .function(Arc::new(EchoFunction))?
        .instructions("repeat exactly, no improvising")
        .environment(Arc::new(StaticEnvironment::new(env)))
        .build();
    worker.set_agent_id("agent-1".into());
    worker.set_logger(Arc::new(FnLogSink(|m: &str| println!("[worker] {m}"))));
    worker.set_client(client.clone());

    // (D) 1 タスク実行（verbose で cycle を全部ナレーション）
    let stop = worker.run_task("echo twice then stop", &RunOptions::verbose()).await?;

    println!("run stopped: {stop:?}");
    println!("decision requests served: {}", client.requests().len());
    Ok(())
}
