//! # vintage-engine
//!
//! Assessment orchestrator. One call binds the current registry snapshot,
//! then runs evidence collection, era inference, conflict detection, and
//! confidence classification against it.

pub mod engine;
pub mod tracing_setup;

pub use engine::{AssessmentEngine, AssessmentRequest};
pub use tracing_setup::init_tracing;
