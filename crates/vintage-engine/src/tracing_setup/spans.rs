//! Span definitions per operation: assessment, batch assessment, registry reload.

/// Create an assessment span.
#[macro_export]
macro_rules! assess_span {
    ($technology:expr, $snapshot_version:expr) => {
        tracing::info_span!(
            $crate::tracing_setup::spans::names::ASSESS,
            technology = %$technology,
            snapshot_version = $snapshot_version
        )
    };
}

/// Create a batch assessment span.
#[macro_export]
macro_rules! batch_span {
    ($batch_size:expr, $snapshot_version:expr) => {
        tracing::info_span!(
            $crate::tracing_setup::spans::names::ASSESS_BATCH,
            batch_size = $batch_size,
            snapshot_version = $snapshot_version
        )
    };
}

/// Create a registry reload span.
#[macro_export]
macro_rules! reload_span {
    ($source:expr) => {
        tracing::info_span!(
            $crate::tracing_setup::spans::names::RELOAD,
            source = %$source
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ASSESS: &str = "vintage.assess";
    pub const ASSESS_BATCH: &str = "vintage.assess_batch";
    pub const RELOAD: &str = "vintage.reload";
    /// Opened by the registry store around each snapshot build.
    pub const PUBLISH: &str = vintage_registry::store::PUBLISH_SPAN;
}
