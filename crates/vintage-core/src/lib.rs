//! # vintage-core
//!
//! Foundation crate for the Vintage knowledge currency engine.
//! Defines the data model, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VintageConfig;
pub use errors::{VintageError, VintageResult};
pub use models::{
    Assessment, Claim, ConfidenceLevel, Conflict, ConflictKind, EvidenceToken, ResponsePattern,
    TechnologyProfile, TokenKind, VolatilityTier,
};
