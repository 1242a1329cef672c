use crate::foundation::core::{Point, Rgba8};
use crate::foundation::math::{even_angle, polar};
use crate::passes::ring::{Placement, Polar, RingPass, Slot, Tuning};
use crate::passes::{PassParams, spectral};
use crate::phrase::hash::unit_from_bits;
use crate::render::raster::Mark;

const SALT: u64 = 0x7000_0000;
const RAYS: usize = 8;

/// Hash-placed stars with eight rays, each linked to the star two positions ahead.
pub fn constellations() -> RingPass {
    RingPass {
        name: "constellations",
        tuning: Tuning {
            alpha: 170,
            ..Tuning::default()
        },
        layers: |_| 2,
        items,
        position,
        color,
        shape,
        links: Some(links),
    }
}

fn items(p: &PassParams<'_>, _: usize) -> usize {
    4 + p.n()
}

fn position(p: &PassParams<'_>, _: &Tuning, s: Slot) -> Polar {
    let h = p.jitter(s.salt(SALT));
    Polar {
        angle: unit_from_bits(h, 0) * std::f64::consts::TAU,
        radius: p.px(0.2 + 0.65 * unit_from_bits(h, 1)),
    }
}

fn color(p: &PassParams<'_>, t: &Tuning, s: Slot) -> Rgba8 {
    let c = spectral(s.item as f64 * 0.8 + s.layer as f64 * 2.0 + p.nf(), t.alpha);
    // pull toward white
    let lift = |v: u8| v / 2 + 128;
    Rgba8::new(lift(c.r), lift(c.g), lift(c.b), c.a)
}

fn shape(
    p: &PassParams<'_>,
    _: &Tuning,
    _: Slot,
    at: &Placement,
    color: Rgba8,
    out: &mut Vec<Mark>,
) {
    let long = p.px(0.02);
    let width = p.px(0.002);
    out.push(Mark::dot(at.at, p.px(0.005), color));
    for k in 0..RAYS {
        let reach = if k % 2 == 0 { long } else { long * 0.55 };
        let tip = polar(at.at, even_angle(k, RAYS), reach);
        out.push(Mark::line(at.at, tip, color, width));
    }
}

fn links(p: &PassParams<'_>, t: &Tuning, _: usize, pts: &[Point], out: &mut Vec<Mark>) {
    if pts.len() < 3 {
        return;
    }
    let color = Rgba8::new(230, 230, 255, (t.alpha / 4).max(1));
    for (i, from) in pts.iter().enumerate() {
        let to = pts[(i + 2) % pts.len()];
        out.push(Mark::line(*from, to, color, p.px(0.002)));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/passes/constellations.rs"]
mod tests;
