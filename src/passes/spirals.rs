//! Logarithmic spiral arms walking two full turns.

use std::f64::consts::PI;

use crate::foundation::core::Rgba8;
use crate::foundation::math::even_angle;
use crate::passes::ring::{Placement, Polar, RingPass, Slot, Tuning};
use crate::passes::{PassParams, spectral};
use crate::render::raster::Mark;

const TWO_TURNS: f64 = 4.0 * PI;

/// Two opposed arms of dots growing outwards.
pub fn dual_spirals() -> RingPass {
    RingPass {
        name: "dual_spirals",
        tuning: Tuning {
            alpha: 120,
            ..Tuning::default()
        },
        layers: |_| 2,
        items: dual_items,
        position: dual_position,
        color: dual_color,
        shape: dual_shape,
        links: None,
    }
}

fn dual_items(p: &PassParams<'_>, _: usize) -> usize {
    48 + 2 * p.n()
}

fn dual_position(p: &PassParams<'_>, _: &Tuning, s: Slot) -> Polar {
    let t = s.t_closed();
    Polar {
        angle: s.layer as f64 * PI + t * TWO_TURNS,
        radius: p.px(0.04) * 18f64.powf(t) * (1.0 + 0.08 * (s.item as f64 * 0.6).sin()),
    }
}

fn dual_color(p: &PassParams<'_>, t: &Tuning, s: Slot) -> Rgba8 {
    spectral(s.t() * 6.0 + s.layer as f64 * PI + p.nf() * 0.2, t.alpha)
}

fn dual_shape(
    p: &PassParams<'_>,
    _: &Tuning,
    s: Slot,
    at: &Placement,
    color: Rgba8,
    out: &mut Vec<Mark>,
) {
    out.push(Mark::dot(at.at, p.px(0.006) * (1.0 + 1.5 * s.t()), color));
}

/// Several arms winding inwards, drawn as connected segments.
pub fn fractal_spirals() -> RingPass {
    RingPass {
        name: "fractal_spirals",
        tuning: Tuning {
            alpha: 100,
            ..Tuning::default()
        },
        layers: fractal_layers,
        items: |_, _| 40,
        position: fractal_position,
        color: fractal_color,
        shape: fractal_shape,
        links: None,
    }
}

fn fractal_layers(p: &PassParams<'_>) -> usize {
    3 + p.n() % 3
}

fn fractal_position(p: &PassParams<'_>, _: &Tuning, s: Slot) -> Polar {
    let t = s.t_closed();
    Polar {
        angle: even_angle(s.layer, s.layers) - t * TWO_TURNS,
        radius: p.px(0.03) * (0.55f64 / 0.03).powf(t) * (1.0 + 0.12 * (s.item as f64 * 0.9).sin()),
    }
}

fn fractal_color(p: &PassParams<'_>, t: &Tuning, s: Slot) -> Rgba8 {
    spectral(
        s.layer as f64 * 1.1 + s.t_closed() * 3.0 + p.nf() * 0.5,
        t.alpha,
    )
}

fn fractal_shape(
    p: &PassParams<'_>,
    _: &Tuning,
    s: Slot,
    at: &Placement,
    color: Rgba8,
    out: &mut Vec<Mark>,
) {
    if let Some(prev) = at.prev {
        out.push(Mark::line(prev, at.at, color, p.px(0.004)));
    }
    if s.item % 8 == 0 {
        out.push(Mark::dot(at.at, p.px(0.008), color));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/passes/spirals.rs"]
mod tests;
