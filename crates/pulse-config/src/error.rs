use thiserror::Error;

/// Failure to assemble a usable [`crate::PulseConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be parsed or a value had the wrong type.
    #[error("config: {0}")]
    Figment(#[from] figment::Error),

    /// Values parsed but contradict each other or a bound.
    #[error("config: `{field}` {reason}")]
    InvalidValue { field: String, reason: String },
}
