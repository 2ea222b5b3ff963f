//! Configuration for Vintage.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod collector_config;
pub mod defaults;
pub mod inference_config;
pub mod observability_config;
pub mod registry_config;
pub mod vintage_config;

pub use collector_config::CollectorConfig;
pub use inference_config::InferenceConfig;
pub use observability_config::ObservabilityConfig;
pub use registry_config::RegistryConfig;
pub use vintage_config::VintageConfig;
