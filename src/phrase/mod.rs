//! Phrase-derived inputs: numerology class, ring letters and the deterministic hash.

pub mod hash;
pub mod letters;
pub mod numerology;
