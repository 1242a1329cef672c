/// Result type used across sigilcraft.
pub type SigilResult<T> = Result<T, SigilError>;

/// Errors produced while validating, rendering or encoding a sigil.
///
/// Only [`SigilError::EmptyOrUnusableInput`] is reachable from the core engine for a
/// positive, in-range size; the remaining variants cover caller policy and IO edges.
#[derive(thiserror::Error, Debug)]
pub enum SigilError {
    /// The phrase contains no ASCII letters once normalized.
    #[error("phrase must contain at least one letter A-Z")]
    EmptyOrUnusableInput,

    /// Caller policy violation (size range, phrase length, options).
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterizer or worker pool failure.
    #[error("render error: {0}")]
    Render(String),

    /// Image serialization failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// Any other failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SigilError {
    /// Build a [`SigilError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SigilError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SigilError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Return `true` for the empty-input rejection.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyOrUnusableInput)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
