//! Error types for the engine binary.
//!
//! [`EngineError`] is the top-level error type that `main` can
//! propagate with `?` from any startup step.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },
}
