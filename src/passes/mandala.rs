use std::f64::consts::PI;

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::math::{even_angle, polar};
use crate::passes::{PassParams, PatternPass, spectral};
use crate::phrase::numerology::NumerologyClass;
use crate::render::raster::{Mark, Shape};

const LAYERS: usize = 4;
const MASTER_STAR_POINTS: usize = 12;

/// Symbol at the very center of the mandala.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CentralSymbol {
    /// Twelve-point star, reserved for master numbers.
    MasterStar,
    /// Plain filled circle.
    Disc,
}

impl CentralSymbol {
    /// Master numbers (11, 22, 33) get the star, everything else the disc.
    pub fn for_class(numerology: NumerologyClass) -> Self {
        if numerology.is_master() {
            Self::MasterStar
        } else {
            Self::Disc
        }
    }

    /// Marks of the symbol centered at `center`.
    pub fn marks(self, p: &PassParams<'_>, center: Point) -> Vec<Mark> {
        match self {
            Self::MasterStar => {
                let star = Shape::Star {
                    center,
                    outer: p.px(0.07),
                    inner: p.px(0.035),
                    points: MASTER_STAR_POINTS,
                    rotation: -PI / 2.0,
                };
                vec![
                    Mark::fill(star.clone(), Rgba8::new(255, 215, 120, 210)),
                    Mark::stroke(star, Rgba8::new(255, 255, 255, 230), p.px(0.003)),
                ]
            }
            Self::Disc => vec![Mark::dot(center, p.px(0.03), Rgba8::new(255, 255, 255, 180))],
        }
    }
}

/// Four point-rings joined by chords, around the central symbol.
#[derive(Clone, Copy, Debug, Default)]
pub struct CentralMandala;

impl CentralMandala {
    /// Points on ring `layer`.
    pub fn ring_points(n: usize, layer: usize) -> usize {
        n + layer * 2
    }

    /// Chord step on a ring of `points` points.
    pub fn chord_step(n: usize, points: usize) -> usize {
        (points / n.max(1)).max(1)
    }
}

impl PatternPass for CentralMandala {
    fn name(&self) -> &'static str {
        "central_mandala"
    }

    fn marks(&self, p: &PassParams<'_>) -> Vec<Mark> {
        let n = p.n();
        let mut out = Vec::new();

        for layer in 0..LAYERS {
            let m = Self::ring_points(n, layer);
            let step = Self::chord_step(n, m);
            let r = p.px(0.06 + 0.045 * layer as f64);
            let color = spectral(layer as f64 * 0.9 + p.nf() * 0.4, 150);
            let pts: Vec<Point> = (0..m)
                .map(|i| polar(p.center, even_angle(i, m) - PI / 2.0 + layer as f64 * 0.1, r))
                .collect();

            for i in 0..m {
                let j = (i + step) % m;
                if i != j {
                    out.push(Mark::line(pts[i], pts[j], color, p.px(0.003)));
                }
            }
            out.extend(pts.iter().map(|pt| Mark::dot(*pt, p.px(0.006), color.with_alpha(200))));
        }

        out.extend(CentralSymbol::for_class(p.numerology).marks(p, p.center));
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/passes/mandala.rs"]
mod tests;
