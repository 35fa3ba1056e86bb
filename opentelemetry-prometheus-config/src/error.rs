use thiserror::Error;

/// Errors returned while publishing into the configured registry.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// The registry rejected a collector, typically because a collector with
    /// the same descriptors is already registered.
    #[error("Failed to register collector: {0}")]
    Registration(#[from] prometheus::Error),
}
