use crate::foundation::core::{Point, Rgba8};
use crate::foundation::math::polar;
use crate::passes::{PassParams, PatternPass};
use crate::render::raster::Mark;

/// Position of one item in the `layer x item` loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Layer index.
    pub layer: usize,
    /// Item index within the layer.
    pub item: usize,
    /// Layer count of the pass.
    pub layers: usize,
    /// Item count of this layer.
    pub items: usize,
}

impl Slot {
    /// Progress through the layer, `item / items` in `[0, 1)`.
    pub fn t(&self) -> f64 {
        if self.items == 0 {
            return 0.0;
        }
        self.item as f64 / self.items as f64
    }

    /// Progress through the layer reaching exactly 1 on the last item.
    pub fn t_closed(&self) -> f64 {
        if self.items <= 1 {
            return 0.0;
        }
        self.item as f64 / (self.items - 1) as f64
    }

    /// Salt unique to this slot within a pass, offset by `base`.
    pub fn salt(&self, base: u64) -> u64 {
        base + (self.layer as u64) * 1000 + self.item as u64
    }
}

/// Polar coordinates around the canvas center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polar {
    /// Angle in radians.
    pub angle: f64,
    /// Distance from the center in pixels.
    pub radius: f64,
}

/// Resolved placement handed to a shape function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Polar angle.
    pub angle: f64,
    /// Polar radius.
    pub radius: f64,
    /// Cartesian point.
    pub at: Point,
    /// Point of the previous item in the same layer.
    pub prev: Option<Point>,
}

/// Per-instance constants, so one pass description can be drawn at several scales.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    /// Multiplier on placement radii.
    pub radius_scale: f64,
    /// Alpha of the primary marks.
    pub alpha: u8,
    /// Angular offset in radians.
    pub phase: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            radius_scale: 1.0,
            alpha: 255,
            phase: 0.0,
        }
    }
}

/// Table-driven pass over the shared `layer x item` polar loop.
///
/// For every layer in `0..layers(p)` and item in `0..items(p, layer)` the pass places the
/// item with `position`, colors it with `color` and lets `shape` emit its marks. `links`,
/// when present, sees all points of a finished layer and may emit connecting marks.
#[derive(Clone, Copy)]
pub struct RingPass {
    /// Pass name.
    pub name: &'static str,
    /// Instance constants.
    pub tuning: Tuning,
    /// Layer count.
    pub layers: fn(&PassParams<'_>) -> usize,
    /// Item count of a layer.
    pub items: fn(&PassParams<'_>, usize) -> usize,
    /// Polar position of a slot.
    pub position: fn(&PassParams<'_>, &Tuning, Slot) -> Polar,
    /// Color of a slot.
    pub color: fn(&PassParams<'_>, &Tuning, Slot) -> Rgba8,
    /// Marks of a placed slot.
    pub shape: fn(&PassParams<'_>, &Tuning, Slot, &Placement, Rgba8, &mut Vec<Mark>),
    /// Marks connecting the points of one layer.
    pub links: Option<fn(&PassParams<'_>, &Tuning, usize, &[Point], &mut Vec<Mark>)>,
}

impl std::fmt::Debug for RingPass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RingPass")
            .field("name", &self.name)
            .field("tuning", &self.tuning)
            .finish_non_exhaustive()
    }
}

impl RingPass {
    /// Placements of every slot, grouped per layer.
    pub fn placements(&self, p: &PassParams<'_>) -> Vec<Vec<(Slot, Placement)>> {
        let layers = (self.layers)(p);
        (0..layers)
            .map(|layer| {
                let items = (self.items)(p, layer);
                let mut prev = None;
                (0..items)
                    .map(|item| {
                        let slot = Slot {
                            layer,
                            item,
                            layers,
                            items,
                        };
                        let Polar { angle, radius } = (self.position)(p, &self.tuning, slot);
                        let at = polar(p.center, angle, radius);
                        let placed = Placement {
                            angle,
                            radius,
                            at,
                            prev,
                        };
                        prev = Some(at);
                        (slot, placed)
                    })
                    .collect()
            })
            .collect()
    }
}

impl PatternPass for RingPass {
    fn name(&self) -> &'static str {
        self.name
    }

    fn marks(&self, p: &PassParams<'_>) -> Vec<Mark> {
        let mut out = Vec::new();
        for (layer, placed) in self.placements(p).into_iter().enumerate() {
            for (slot, placement) in &placed {
                let color = (self.color)(p, &self.tuning, *slot);
                (self.shape)(p, &self.tuning, *slot, placement, color, &mut out);
            }
            if let Some(links) = self.links {
                let points: Vec<Point> = placed.iter().map(|(_, pl)| pl.at).collect();
                links(p, &self.tuning, layer, &points, &mut out);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/passes/ring.rs"]
mod tests;
