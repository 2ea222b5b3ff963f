use crate::errors::VintageResult;
use crate::models::{Assessment, Claim};

/// Entry point external callers (response layer, CLI, service endpoint) use.
pub trait IAssessor: Send + Sync {
    /// Assess `claim` about `technology` given raw evidence fragments.
    fn assess(
        &self,
        technology: &str,
        claim: &str,
        evidence: &[String],
    ) -> VintageResult<Assessment>;

    /// Assess a pre-built claim.
    fn assess_claim(&self, claim: &Claim, evidence: &[String]) -> VintageResult<Assessment> {
        self.assess(&claim.technology, &claim.fact, evidence)
    }
}
