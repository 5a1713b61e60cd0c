//! Environment snapshot: per-cycle context attached to decision requests.
//!
//! The loop composes this from the worker's static instructions plus whatever
//! the environment provider contributes; it is passed to the decision client
//! opaquely and never interpreted here.

/// String-keyed snapshot of contextual state.
///
/// Plain JSON object so providers can put anything in it. Provider keys win
/// over the static `instructions` key on collision (merge order is fixed in
/// `Worker::compose_environment`).
pub type Environment = serde_json::Map<String, serde_json::Value>;

/// Key under which the worker's static instructions appear in the snapshot.
///
/// Absent when the worker has no instructions; consumers must not rely on
/// the key existing.
pub const INSTRUCTIONS_KEY: &str = "instructions";
