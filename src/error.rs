use thiserror::Error;

/// Failure surfaced by an argument-transform stage.
///
/// The stage performs no local recovery: a failing transform or a failing
/// pending value fails the whole field resolution, through the same error
/// channel the surrounding engine already uses. Zero matched arguments and
/// absent values are not errors.
#[derive(Debug, Error)]
pub enum StageError {
    /// A caller-supplied transform rejected.
    #[error("transform failed: {0}")]
    Transform(anyhow::Error),

    /// A pending argument value failed to resolve.
    #[error("pending value failed to resolve: {0}")]
    Pending(anyhow::Error),

    /// The downstream resolver failed.
    #[error("resolver failed: {0}")]
    Resolve(anyhow::Error),

    /// The upload preset could not project a raw value into a descriptor.
    #[error("invalid upload value: {0}")]
    InvalidUpload(String),
}

impl StageError {
    pub fn transform(source: impl Into<anyhow::Error>) -> Self {
        StageError::Transform(source.into())
    }

    pub fn pending(source: impl Into<anyhow::Error>) -> Self {
        StageError::Pending(source.into())
    }

    pub fn resolve(source: impl Into<anyhow::Error>) -> Self {
        StageError::Resolve(source.into())
    }

    pub fn invalid_upload(message: impl Into<String>) -> Self {
        StageError::InvalidUpload(message.into())
    }
}
