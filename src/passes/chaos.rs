use std::f64::consts::TAU;

use crate::foundation::core::Point;
use crate::foundation::math::polar;
use crate::passes::{PassParams, PatternPass, spectral};
use crate::phrase::hash::unit_from_bits;
use crate::render::raster::Mark;

const SALT: u64 = 0x5000;
const ALPHA: u8 = 110;

/// Short angled segments snapped to a coarse grid.
///
/// Every segment is seeded from the phrase hash alone, so this is the pass whose layout
/// changes with the phrase even when the numerology class does not.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChaosGrid;

impl ChaosGrid {
    /// Number of segments for these parameters.
    pub fn count(p: &PassParams<'_>) -> usize {
        12 + (p.phrase_hash() % 13) as usize + p.n()
    }

    /// Grid cells along each canvas side.
    pub fn cells(p: &PassParams<'_>) -> usize {
        8 + p.n() % 5
    }

    /// Grid cell side in pixels.
    pub fn cell(p: &PassParams<'_>) -> f64 {
        2.0 * p.size / Self::cells(p) as f64
    }
}

impl PatternPass for ChaosGrid {
    fn name(&self) -> &'static str {
        "chaos_grid"
    }

    fn marks(&self, p: &PassParams<'_>) -> Vec<Mark> {
        let cells = Self::cells(p);
        let cell = Self::cell(p);
        let snap = |u: f64| {
            let idx = ((u * cells as f64) as usize).min(cells - 1);
            (idx as f64 + 0.5) * cell
        };
        let width = p.px(0.003);

        (0..Self::count(p))
            .map(|i| {
                let h = p.jitter(SALT + i as u64);
                let start = Point::new(snap(unit_from_bits(h, 0)), snap(unit_from_bits(h, 1)));
                let angle = ((h >> 32) & 0xff) as f64 / 255.0 * TAU;
                let len = p.px(0.03 + 0.07 * ((h >> 40) & 0xff) as f64 / 255.0);
                let color = spectral(((h >> 48) & 0xffff) as f64 / 65535.0 * TAU, ALPHA);
                Mark::line(start, polar(start, angle, len), color, width)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/passes/chaos.rs"]
mod tests;
