use crate::foundation::error::{SigilError, SigilResult};

/// Uppercase `A-Z` letters of a phrase, de-duplicated in first-appearance order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct LetterSequence(String);

impl LetterSequence {
    /// Letters in ring order.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate letters in ring order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Number of distinct letters (each is one byte).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` when the phrase had no letters at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the sequence, or the empty-input error when there are no letters.
    pub fn require_non_empty(self) -> SigilResult<Self> {
        if self.is_empty() {
            return Err(SigilError::EmptyOrUnusableInput);
        }
        Ok(self)
    }
}

impl std::fmt::Display for LetterSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Uppercase, keep `A-Z`, drop repeats after their first appearance.
pub fn normalize_letters(phrase: &str) -> LetterSequence {
    let mut seen = [false; 26];
    let mut out = String::with_capacity(26);
    for c in phrase.chars().map(|c| c.to_ascii_uppercase()) {
        if !c.is_ascii_uppercase() {
            continue;
        }
        let slot = usize::from(c as u8 - b'A');
        if !seen[slot] {
            seen[slot] = true;
            out.push(c);
        }
    }
    LetterSequence(out)
}

#[cfg(test)]
#[path = "../../tests/unit/phrase/letters.rs"]
mod tests;
