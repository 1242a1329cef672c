use crate::foundation::math::{even_angle, polar};
use crate::passes::{PassParams, PatternPass, spectral};
use crate::render::raster::{Mark, Shape};

/// Number of concentric rings for a numerology value.
pub fn ring_count(n: usize) -> usize {
    n.clamp(3, 12)
}

/// Concentric rings with energy-node dots on every other ring.
#[derive(Clone, Copy, Debug, Default)]
pub struct MysticalCircles;

impl PatternPass for MysticalCircles {
    fn name(&self) -> &'static str {
        "mystical_circles"
    }

    fn marks(&self, p: &PassParams<'_>) -> Vec<Mark> {
        let n = p.n();
        let rings = ring_count(n);
        let step = p.px(0.8) / rings as f64;
        let mut out = Vec::new();

        for i in 0..rings {
            let radius = p.px(0.08) + i as f64 * step;
            let color = spectral(i as f64 * 0.5 + p.nf() * 0.3, 70);
            out.push(Mark::stroke(
                Shape::Circle {
                    center: p.center,
                    radius,
                },
                color,
                p.px(0.004),
            ));

            if i % 2 == 0 {
                let nodes = (n + i).clamp(3, 48);
                let node_color = color.with_alpha(160);
                out.extend((0..nodes).map(|k| {
                    let at = polar(p.center, even_angle(k, nodes) + i as f64 * 0.15, radius);
                    Mark::dot(at, p.px(0.01), node_color)
                }));
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/passes/circles.rs"]
mod tests;
