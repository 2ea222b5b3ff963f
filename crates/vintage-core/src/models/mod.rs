//! Data model shared by every stage of the assessment pipeline.

pub mod assessment;
pub mod claim;
pub mod conflict;
pub mod evidence;
pub mod inference;
pub mod profile;
pub mod signal;
pub mod tier;
pub mod version;

pub use assessment::{Assessment, ConfidenceLevel, EraEstimate, ResponsePattern};
pub use claim::Claim;
pub use conflict::{Conflict, ConflictKind};
pub use evidence::{EvidenceToken, TokenKind};
pub use inference::{EraInference, EraScore, InferenceOutcome, SignalMatch};
pub use profile::{normalize_fact_text, Era, Fact, TechnologyProfile};
pub use signal::{SignalPattern, SignalRule};
pub use tier::VolatilityTier;
