use crate::foundation::error::{SigilError, SigilResult};
use crate::foundation::math::digit_sum;

/// Reduced numerology class of a phrase: one of `1..=9`, `11`, `22` or `33`.
///
/// Master numbers (11, 22, 33) are kept as-is instead of being reduced further.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct NumerologyClass(u8);

impl NumerologyClass {
    /// Every reachable class, in ascending order.
    pub const ALL: [NumerologyClass; 12] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
        Self(11),
        Self(22),
        Self(33),
    ];

    /// Validate a raw class value.
    pub fn new(v: u32) -> Option<Self> {
        match v {
            1..=9 | 11 | 22 | 33 => Some(Self(v as u8)),
            _ => None,
        }
    }

    /// Integer value of the class.
    pub fn value(self) -> u32 {
        u32::from(self.0)
    }

    /// Value as `usize`, for counts and indices.
    pub fn count(self) -> usize {
        usize::from(self.0)
    }

    /// Value as `f64`, for geometry.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Return `true` for 11, 22 and 33.
    pub fn is_master(self) -> bool {
        matches!(self.0, 11 | 22 | 33)
    }
}

impl TryFrom<u32> for NumerologyClass {
    type Error = String;

    fn try_from(v: u32) -> Result<Self, Self::Error> {
        Self::new(v).ok_or_else(|| format!("{v} is not a numerology class"))
    }
}

impl From<NumerologyClass> for u32 {
    fn from(c: NumerologyClass) -> Self {
        c.value()
    }
}

impl std::fmt::Display for NumerologyClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Alphabet value of a character: `A=1 .. Z=26` (case-insensitive), anything else 0.
pub fn letter_value(c: char) -> u32 {
    let u = c.to_ascii_uppercase();
    if u.is_ascii_uppercase() {
        u32::from(u as u8 - b'A') + 1
    } else {
        0
    }
}

/// Collapse a letter sum by repeated digit summing until it is a single digit or a master
/// number.
///
/// Returns `None` for 0, which only arises from phrases without letters.
pub fn reduce_to_class(sum: u32) -> Option<NumerologyClass> {
    let mut v = sum;
    while v > 9 && !matches!(v, 11 | 22 | 33) {
        v = digit_sum(v);
    }
    NumerologyClass::new(v)
}

/// Numerology class of a phrase, summing the alphabet value of every letter it contains.
///
/// Duplicated letters count each time they appear.
pub fn numerology_of(phrase: &str) -> SigilResult<NumerologyClass> {
    let sum = phrase
        .chars()
        .map(letter_value)
        .fold(0u32, u32::saturating_add);
    reduce_to_class(sum).ok_or(SigilError::EmptyOrUnusableInput)
}

#[cfg(test)]
#[path = "../../tests/unit/phrase/numerology.rs"]
mod tests;
