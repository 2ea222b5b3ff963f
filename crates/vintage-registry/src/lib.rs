//! # vintage-registry
//!
//! Technology registry and signal rule set.
//!
//! Profile batches are validated as a whole, compiled into an immutable
//! [`RegistrySnapshot`], and published through [`RegistryStore`] with an
//! atomic swap. Assessments hold the `Arc` of the snapshot they started
//! with, so a reload never changes data under a running assessment.
//!
//! ## Load-time checks
//! - **Hard** (reject the batch): empty or duplicate names, missing eras,
//!   duplicate or non-chronological eras, fact ordering, duplicate facts,
//!   duplicate rule ids, empty or invalid patterns.
//! - **Soft** (warnings): ambiguous signal patterns, empty eras.

pub mod loader;
pub mod matcher;
pub mod snapshot;
pub mod store;
pub mod validation;

pub use matcher::TokenMatcher;
pub use snapshot::{CompiledProfile, CompiledRule, RegistrySnapshot};
pub use store::{LoadReport, RegistryStore};
