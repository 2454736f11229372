/// Convenience result type used across formicon.
pub type FormiconResult<T> = Result<T, FormiconError>;

/// Top-level error taxonomy used by synthesis and encoding APIs.
///
/// Every variant is terminal for the operation that produced it; nothing is retried internally.
#[derive(thiserror::Error, Debug)]
pub enum FormiconError {
    /// A requested image size is zero, negative, or too large to address.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Pixel data does not agree with its declared dimensions or color model.
    #[error("invalid raster: {0}")]
    InvalidRaster(String),

    /// The zlib compressor reported an internal failure.
    #[error("compression failure: {0}")]
    CompressionFailure(String),

    /// A byte stream handed to the chunk reader is not a well-formed container.
    #[error("malformed container: {0}")]
    MalformedContainer(String),

    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FormiconError {
    /// Build a [`FormiconError::InvalidDimensions`] value.
    pub fn invalid_dimensions(msg: impl Into<String>) -> Self {
        Self::InvalidDimensions(msg.into())
    }

    /// Build a [`FormiconError::InvalidRaster`] value.
    pub fn invalid_raster(msg: impl Into<String>) -> Self {
        Self::InvalidRaster(msg.into())
    }

    /// Build a [`FormiconError::CompressionFailure`] value.
    pub fn compression(msg: impl Into<String>) -> Self {
        Self::CompressionFailure(msg.into())
    }

    /// Build a [`FormiconError::MalformedContainer`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedContainer(msg.into())
    }

    /// Build a [`FormiconError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
