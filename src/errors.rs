use thiserror::Error;

/// Coarse classification of a [`TamperError`], stable across message changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TamperErrorKind {
    InvalidArgument,
    DecodeFailure,
    Config,
}

#[derive(Debug, Error)]
pub enum TamperError {
    /// Input was neither a usable path nor a buffer, a required frame is
    /// missing, or frame dimensions do not line up.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input bytes could not be turned into a non-empty pixel buffer.
    #[error("Decode failure: {0}")]
    DecodeFailure(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TamperError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn decode_failure(message: impl Into<String>) -> Self {
        Self::DecodeFailure(message.into())
    }

    pub fn dimension_mismatch(expected: (u32, u32), got: (u32, u32)) -> Self {
        Self::InvalidArgument(format!(
            "frame dimension mismatch: expected {}x{}, got {}x{}",
            expected.0, expected.1, got.0, got.1
        ))
    }

    pub fn kind(&self) -> TamperErrorKind {
        match self {
            Self::InvalidArgument(_) => TamperErrorKind::InvalidArgument,
            Self::DecodeFailure(_) => TamperErrorKind::DecodeFailure,
            Self::Config(_) => TamperErrorKind::Config,
        }
    }
}
