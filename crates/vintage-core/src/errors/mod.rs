//! Error handling for Vintage.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod registry_error;
pub mod vintage_error;

pub use config_error::ConfigError;
pub use registry_error::{RegistryLoadError, RegistryWarning};
pub use vintage_error::{VintageError, VintageResult};
