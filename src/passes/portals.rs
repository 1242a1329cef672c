use std::f64::consts::PI;

use crate::foundation::core::{Rgba8, Vec2};
use crate::foundation::math::even_angle;
use crate::passes::ring::{Placement, Polar, RingPass, Slot, Tuning};
use crate::passes::{PassParams, spectral};
use crate::phrase::hash::unit_from_bits;
use crate::render::raster::{Mark, Shape};

const SALT: u64 = 0x2000_0000;

/// Tilted elliptical rings ("portals") with an inner echo ring.
pub fn dimensional_portals() -> RingPass {
    RingPass {
        name: "dimensional_portals",
        tuning: Tuning {
            alpha: 120,
            ..Tuning::default()
        },
        layers,
        items,
        position,
        color,
        shape,
        links: None,
    }
}

fn layers(p: &PassParams<'_>) -> usize {
    2 + p.n() % 4
}

fn items(p: &PassParams<'_>, layer: usize) -> usize {
    3 + p.n() % 5 + layer
}

fn position(p: &PassParams<'_>, _t: &Tuning, s: Slot) -> Polar {
    let h = p.jitter(s.salt(SALT));
    let angle = even_angle(s.item, s.items)
        + s.layer as f64 * PI / s.items as f64
        + (unit_from_bits(h, 0) - 0.5) * 0.3;
    let radius = p.px(0.25 + 0.12 * s.layer as f64) + p.px(0.05) * (unit_from_bits(h, 1) - 0.5) * 2.0;
    Polar { angle, radius }
}

fn color(p: &PassParams<'_>, t: &Tuning, s: Slot) -> Rgba8 {
    spectral(1.3 * s.layer as f64 + 0.6 * s.item as f64 + p.nf(), t.alpha)
}

fn shape(
    p: &PassParams<'_>,
    _t: &Tuning,
    s: Slot,
    at: &Placement,
    color: Rgba8,
    out: &mut Vec<Mark>,
) {
    let rx = p.px(0.05 + 0.012 * s.layer as f64);
    let width = p.px(0.004);
    for (scale, alpha) in [(1.0, color.a), (0.55, color.a / 2)] {
        out.push(Mark::stroke(
            Shape::Ellipse {
                center: at.at,
                radii: Vec2::new(rx * scale, rx * 0.6 * scale),
                rotation: at.angle,
            },
            color.with_alpha(alpha),
            width,
        ));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/passes/portals.rs"]
mod tests;
