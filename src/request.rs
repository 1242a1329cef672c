use crate::foundation::error::{SigilError, SigilResult};
use crate::generator::SigilOpts;

/// A generation request as a caller (CLI, HTTP handler) receives it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SigilRequest {
    /// Phrase to turn into a sigil.
    pub phrase: String,
    /// Sigil size; the image side is `2 * size`. Defaults to `SigilOpts::default_size`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl SigilRequest {
    /// Request with the default size.
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            size: None,
        }
    }

    /// Request with an explicit size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Apply caller policy and return the size to render at.
    ///
    /// Letter content is not checked here; a phrase without letters is rejected by the
    /// generator with [`SigilError::EmptyOrUnusableInput`].
    pub fn validate(&self, opts: &SigilOpts) -> SigilResult<u32> {
        if self.phrase.trim().is_empty() {
            return Err(SigilError::validation("phrase must be non-empty"));
        }
        let chars = self.phrase.chars().count();
        if chars > opts.max_phrase_chars {
            return Err(SigilError::validation(format!(
                "phrase must be at most {} characters, got {chars}",
                opts.max_phrase_chars
            )));
        }
        let size = self.size.unwrap_or(opts.default_size);
        opts.check_size(size)?;
        Ok(size)
    }
}

#[cfg(test)]
#[path = "../tests/unit/request.rs"]
mod tests;
