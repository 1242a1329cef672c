//! Reproducible pseudo-random integers.
//!
//! Every "random" choice in the engine (jitter, sparkle, chaos grid seeds) is drawn from
//! this module so that a phrase renders to byte-identical output across runs, processes
//! and platforms. Inputs are fed as little-endian integers and length-prefixed UTF-8 into a
//! seeded XXH3-64 state.

use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x5167_11c4_a7d3_e9b1;

/// Incremental stable hasher.
#[derive(Clone)]
pub struct SeedHasher {
    inner: Xxh3,
}

impl Default for SeedHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedHasher {
    /// Hasher with the engine-wide seed.
    pub fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    /// Feed raw bytes.
    pub fn write_bytes(&mut self, b: &[u8]) -> &mut Self {
        self.inner.update(b);
        self
    }

    /// Feed a `u32`.
    pub fn write_u32(&mut self, v: u32) -> &mut Self {
        self.write_bytes(&v.to_le_bytes())
    }

    /// Feed a `u64`.
    pub fn write_u64(&mut self, v: u64) -> &mut Self {
        self.write_bytes(&v.to_le_bytes())
    }

    /// Feed a string, length-prefixed so concatenations cannot collide.
    pub fn write_str(&mut self, s: &str) -> &mut Self {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes())
    }

    /// Final 64-bit digest.
    pub fn finish(&self) -> u64 {
        self.inner.digest()
    }
}

/// Hash of a phrase alone.
pub fn hash_phrase(phrase: &str) -> u64 {
    SeedHasher::new().write_str(phrase).finish()
}

/// Hash of a `(phrase, salt)` pair, used for per-item jitter.
pub fn hash_salted(phrase: &str, salt: u64) -> u64 {
    SeedHasher::new().write_str(phrase).write_u64(salt).finish()
}

/// Hash of a background pixel; `dist` is the integer part of its distance to the center.
pub fn hash_pixel(x: u32, y: u32, dist: u32, numerology: u32) -> u64 {
    SeedHasher::new()
        .write_u32(x)
        .write_u32(y)
        .write_u32(dist)
        .write_u32(numerology)
        .finish()
}

/// Map a 16-bit field of `h` (selected by `field` in `0..4`) into `[0, 1]`.
pub fn unit_from_bits(h: u64, field: u32) -> f64 {
    let shift = (field % 4) * 16;
    ((h >> shift) & 0xffff) as f64 / 65535.0
}

#[cfg(test)]
#[path = "../../tests/unit/phrase/hash.rs"]
mod tests;
