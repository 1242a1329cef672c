use crate::foundation::core::Rgba8;
use crate::foundation::math::even_angle;
use crate::passes::ring::{Placement, Polar, RingPass, Slot, Tuning};
use crate::passes::{PassParams, spectral};
use crate::phrase::hash::unit_from_bits;
use crate::render::raster::{Mark, Shape};

const SALT: u64 = 0x1000_0000;

/// Jittered particle clouds on widening shells.
pub fn quantum_fields() -> RingPass {
    RingPass {
        name: "quantum_fields",
        tuning: Tuning {
            alpha: 90,
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
    3 + p.n() % 3
}

fn items(p: &PassParams<'_>, layer: usize) -> usize {
    6 + p.n() + layer * 4
}

fn position(p: &PassParams<'_>, _t: &Tuning, s: Slot) -> Polar {
    let h = p.jitter(s.salt(SALT));
    let angle =
        even_angle(s.item, s.items) + s.layer as f64 * 0.35 + (unit_from_bits(h, 0) - 0.5) * 0.4;
    let radius = p.px(0.15 + 0.16 * s.layer as f64) * (0.85 + 0.3 * unit_from_bits(h, 1));
    Polar { angle, radius }
}

fn color(p: &PassParams<'_>, t: &Tuning, s: Slot) -> Rgba8 {
    spectral(
        0.9 * s.layer as f64 + 0.35 * s.item as f64 + 0.5 * p.nf(),
        t.alpha,
    )
}

fn shape(
    p: &PassParams<'_>,
    _t: &Tuning,
    s: Slot,
    at: &Placement,
    color: Rgba8,
    out: &mut Vec<Mark>,
) {
    let r = p.px(0.008) * (1 + s.layer % 3) as f64;
    out.push(Mark::dot(at.at, r, color));
    if s.item % 3 == 0 {
        out.push(Mark::stroke(
            Shape::Circle {
                center: at.at,
                radius: r * 2.5,
            },
            color.with_alpha(color.a / 2),
            p.px(0.002),
        ));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/passes/quantum.rs"]
mod tests;
