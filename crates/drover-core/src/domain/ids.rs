//! Domain identifiers (strongly-typed IDs).
//!
//! # 設計: 文字列ベースの ID + Phantom type
//! ここでの ID はすべて decision authority 側で発行されるワイヤ値なので、
//! 中身は不透明な文字列です。Phantom type パターンで共通実装を 1 つに
//! まとめつつ、AgentId / SubmissionId / InvocationId をコンパイル時に
//! 区別します（混同できない）。
//!
//! 開発用クライアントは ULID 文字列を発行します（`impls::ScriptedClient`）。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// IdMarker は各 ID 型のマーカー trait
///
/// エラーメッセージ等で使う種別名（"agent", "submission", "invocation"）を提供します。
pub trait IdMarker: Send + Sync + 'static {
    /// 種別名（例: "agent"）
    fn kind() -> &'static str;
}

/// ジェネリック ID 型
///
/// `T` は PhantomData で、実行時にはメモリを消費しませんが、
/// コンパイル時に型安全性を提供します。ワイヤ上では素の文字列です
/// (`#[serde(transparent)]`)。
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T: IdMarker> {
    value: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T: IdMarker> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

// ========================================
// マーカー型の定義
// ========================================

/// Agent のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Agent {}

impl IdMarker for Agent {
    fn kind() -> &'static str {
        "agent"
    }
}

/// Submission のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Submission {}

impl IdMarker for Submission {
    fn kind() -> &'static str {
        "submission"
    }
}

/// Invocation のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Invocation {}

impl IdMarker for Invocation {
    fn kind() -> &'static str {
        "invocation"
    }
}

// ========================================
// Type Alias（使いやすさのため）
// ========================================

/// Identifier of the agent this worker acts for (assigned post-construction).
pub type AgentId = Id<Agent>;

/// Identifier of one in-progress task submission (one per `run_task`).
pub type SubmissionId = Id<Submission>;

/// Identifier of one function invocation, issued by the decision authority
/// and echoed back on the next request via the outcome report.
pub type InvocationId = Id<Invocation>;
