/// Convenience result type used across zmerge APIs.
pub type ZmergeResult<T> = Result<T, ZmergeError>;

#[derive(thiserror::Error, Debug)]
/// Top-level error type for zmerge.
///
/// Every run is all-or-nothing: any of these aborts before an output file is written.
pub enum ZmergeError {
    /// Unsupported channel count or bit depth in a decoded input image.
    #[error("format error: {0}")]
    Format(String),

    /// Color/depth dimensions of a layer disagree, or layers of a stack disagree.
    #[error("resolution mismatch: {0}")]
    ResolutionMismatch(String),

    /// A blend-mode tag outside `Normal`, `Multiply`, `Screen`.
    #[error("unknown blend mode: {0}")]
    UnknownBlendMode(String),

    /// Empty or malformed layer list, or invalid run parameters.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error (file I/O, image codecs).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ZmergeError {
    /// Build a [`ZmergeError::Format`] value.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Build a [`ZmergeError::ResolutionMismatch`] value.
    pub fn resolution(msg: impl Into<String>) -> Self {
        Self::ResolutionMismatch(msg.into())
    }

    /// Build a [`ZmergeError::UnknownBlendMode`] value.
    pub fn blend_mode(msg: impl Into<String>) -> Self {
        Self::UnknownBlendMode(msg.into())
    }

    /// Build a [`ZmergeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
