use std::f64::consts::PI;

use crate::foundation::core::{Rgba8, Vec2};
use crate::foundation::math::even_angle;
use crate::passes::ring::{Placement, Polar, RingPass, Slot, Tuning};
use crate::passes::{PassParams, spectral};
use crate::render::raster::{Mark, Shape};

/// Arms of flattened ellipses swirling into the center; odd classes turn clockwise.
pub fn vortex_overlay() -> RingPass {
    RingPass {
        name: "vortex_overlay",
        tuning: Tuning {
            alpha: 60,
            ..Tuning::default()
        },
        layers,
        items: |_, _| 24,
        position,
        color,
        shape,
        links: None,
    }
}

fn layers(p: &PassParams<'_>) -> usize {
    2 + p.n() % 3
}

fn position(p: &PassParams<'_>, _: &Tuning, s: Slot) -> Polar {
    let t = s.t();
    let turn = if p.n() % 2 == 0 { 1.0 } else { -1.0 };
    Polar {
        angle: even_angle(s.layer, s.layers) + turn * t * 3.0 * PI,
        radius: p.px(0.92 - 0.8 * t),
    }
}

fn color(p: &PassParams<'_>, t: &Tuning, s: Slot) -> Rgba8 {
    spectral(p.nf() * 0.7 + s.layer as f64 * 2.1 + s.t() * 2.0, t.alpha)
}

fn shape(
    p: &PassParams<'_>,
    _: &Tuning,
    s: Slot,
    at: &Placement,
    color: Rgba8,
    out: &mut Vec<Mark>,
) {
    let rx = p.px(0.02 * (1.0 - 0.6 * s.t()));
    out.push(Mark::fill(
        Shape::Ellipse {
            center: at.at,
            radii: Vec2::new(rx, rx * 0.35),
            rotation: at.angle + PI / 2.0,
        },
        color,
    ));
}

#[cfg(test)]
#[path = "../../tests/unit/passes/vortex.rs"]
mod tests;
