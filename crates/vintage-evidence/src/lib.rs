//! # vintage-evidence
//!
//! Normalizes heterogeneous evidence (prose, code snippets, declared
//! versions, error output) into a flat, order-preserving list of
//! [`EvidenceToken`](vintage_core::models::EvidenceToken)s.
//!
//! Collection never fails: a fragment the tokenizer cannot make sense of
//! becomes a single free-text token.

pub mod collector;
pub mod patterns;

pub use collector::{collect, EvidenceCollector};
