/// Convenience result type used across folio.
pub type FolioResult<T> = Result<T, FolioError>;

/// Error taxonomy for the configuration and data boundaries of the motion core.
///
/// Event handling and frame sampling never fail; only loading configuration,
/// building springs from untrusted parameters and parsing collaborator data can.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// Invalid caller-provided data (unknown category, malformed script step, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Animation parameters that cannot produce a well-defined motion.
    #[error("animation error: {0}")]
    Animation(String),

    /// Rejected motion configuration values.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Build a [`FolioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FolioError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`FolioError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FolioError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
