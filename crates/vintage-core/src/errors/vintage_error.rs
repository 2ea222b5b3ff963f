use super::{ConfigError, RegistryLoadError};

/// Root error type. Only the input contract, registry loading, and config
/// loading are fatal; everything else is reported as data in an assessment.
#[derive(Debug, thiserror::Error)]
pub enum VintageError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("registry load failed: {0}")]
    RegistryLoad(#[from] RegistryLoadError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

pub type VintageResult<T> = Result<T, VintageError>;
