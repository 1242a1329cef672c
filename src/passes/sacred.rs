use std::f64::consts::{PI, TAU};

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::math::{even_angle, polar};
use crate::passes::ring::{Placement, Polar, RingPass, Slot, Tuning};
use crate::passes::{PassParams, spectral};
use crate::phrase::numerology::NumerologyClass;
use crate::render::raster::{Mark, Shape};

/// Figure drawn at every ring position of the sacred-geometry pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SacredForm {
    /// Three triangles rotated against each other.
    TriangleTrio,
    /// Four-sided rhombus.
    Diamond,
    /// Regular pentagon.
    Pentagon,
    /// Regular hexagon.
    Hexagon,
}

impl SacredForm {
    /// Form for a numerology class; multiples of 3 win over 4, 4 over 5.
    pub fn for_class(numerology: NumerologyClass) -> Self {
        let n = numerology.value();
        if n % 3 == 0 {
            Self::TriangleTrio
        } else if n % 4 == 0 {
            Self::Diamond
        } else if n % 5 == 0 {
            Self::Pentagon
        } else {
            Self::Hexagon
        }
    }

    /// Outline shapes of this form around `center`.
    pub fn shapes(self, center: Point, r: f64, rotation: f64) -> Vec<Shape> {
        match self {
            Self::TriangleTrio => (0..3)
                .map(|k| Shape::regular(center, r, 3, rotation + k as f64 * TAU / 9.0))
                .collect(),
            Self::Diamond => {
                // horizontal diagonal at 0.6 of the vertical one
                let pts = (0..4)
                    .map(|i| {
                        let reach = if i % 2 == 0 { 0.6 * r } else { r };
                        polar(center, rotation + even_angle(i, 4), reach)
                    })
                    .collect();
                vec![Shape::Polygon(pts)]
            }
            Self::Pentagon => vec![Shape::regular(center, r, 5, rotation - PI / 2.0)],
            Self::Hexagon => vec![Shape::regular(center, r, 6, rotation)],
        }
    }
}

/// Sacred-geometry figures on three rings.
pub fn sacred_geometry() -> RingPass {
    RingPass {
        name: "sacred_geometry",
        tuning: Tuning {
            radius_scale: 1.0,
            alpha: 140,
            phase: 0.0,
        },
        ..SACRED_BASE
    }
}

/// The sacred-geometry pass drawn again, smaller and fainter, later in the order.
pub fn sacred_geometry_overlay() -> RingPass {
    RingPass {
        name: "sacred_geometry_overlay",
        tuning: Tuning {
            radius_scale: 0.6,
            alpha: 80,
            phase: PI / 6.0,
        },
        ..SACRED_BASE
    }
}

const SACRED_BASE: RingPass = RingPass {
    name: "sacred",
    tuning: Tuning {
        radius_scale: 1.0,
        alpha: 255,
        phase: 0.0,
    },
    layers,
    items,
    position,
    color,
    shape,
    links: None,
};

fn layers(_: &PassParams<'_>) -> usize {
    3
}

fn items(p: &PassParams<'_>, layer: usize) -> usize {
    p.n() + layer * 3
}

fn position(p: &PassParams<'_>, t: &Tuning, s: Slot) -> Polar {
    Polar {
        angle: even_angle(s.item, s.items) + t.phase + s.layer as f64 * 0.2,
        radius: p.px(t.radius_scale * (0.3 + 0.22 * s.layer as f64)),
    }
}

fn color(p: &PassParams<'_>, t: &Tuning, s: Slot) -> Rgba8 {
    spectral(
        0.7 * s.layer as f64 + 0.25 * s.item as f64 + 0.4 * p.nf() + t.phase,
        t.alpha,
    )
}

fn shape(
    p: &PassParams<'_>,
    t: &Tuning,
    s: Slot,
    at: &Placement,
    color: Rgba8,
    out: &mut Vec<Mark>,
) {
    let r = p.px(t.radius_scale * (0.035 + 0.01 * s.layer as f64));
    let width = p.px(0.003);
    for shape in SacredForm::for_class(p.numerology).shapes(at.at, r, at.angle) {
        out.push(Mark::stroke(shape, color, width));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/passes/sacred.rs"]
mod tests;
