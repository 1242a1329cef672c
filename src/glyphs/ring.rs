use std::f64::consts::PI;

use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::foundation::error::SigilResult;
use crate::foundation::math::{even_angle, polar};
use crate::glyphs::GlyphSet;
use crate::phrase::letters::LetterSequence;
use crate::render::raster::{Mark, Shape, ShapeLayer};

const RING_RADIUS: f64 = 0.35;
const LETTER_HEIGHT: f64 = 0.08;
const BACKDROP_RADIUS: f64 = 0.065;
const STROKE_WIDTH: f64 = 0.006;

const BACKDROP: Rgba8 = Rgba8::new(0, 0, 0, 140);
const LETTER: Rgba8 = Rgba8::new(255, 255, 255, 235);
const SIGIL_STROKE: Rgba8 = Rgba8::new(255, 236, 190, 200);

/// Unique letters placed evenly on a circle, starting at the top and going clockwise.
#[derive(Clone, Debug, PartialEq)]
pub struct LetterRing {
    size: f64,
    slots: Vec<(char, Point)>,
}

impl LetterRing {
    /// Place `letters` on a ring of radius `0.35 * size` around `center`.
    pub fn layout(letters: &LetterSequence, center: Point, size: f64) -> Self {
        let count = letters.len();
        let radius = size * RING_RADIUS;
        let slots = letters
            .chars()
            .enumerate()
            .map(|(i, c)| (c, polar(center, -PI / 2.0 + even_angle(i, count), radius)))
            .collect();
        Self { size, slots }
    }

    /// Letters with their ring points, in sequence order.
    pub fn slots(&self) -> &[(char, Point)] {
        &self.slots
    }

    /// Ring points in sequence order.
    pub fn points(&self) -> Vec<Point> {
        self.slots.iter().map(|(_, p)| *p).collect()
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Return `true` when there are no letters.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The open polyline joining the ring points; `None` below two letters.
    pub fn sigil_stroke(&self) -> Option<Mark> {
        if self.slots.len() < 2 {
            return None;
        }
        Some(Mark::stroke(
            Shape::Polyline(self.points()),
            SIGIL_STROKE,
            self.size * STROKE_WIDTH,
        ))
    }

    /// Draw backdrops, letters and the sigil stroke into `layer`.
    pub fn draw(&self, layer: &mut ShapeLayer, glyphs: &GlyphSet) {
        let height = self.size * LETTER_HEIGHT;
        for (c, at) in &self.slots {
            layer.draw(&Mark::dot(*at, self.size * BACKDROP_RADIUS, BACKDROP));
            glyphs.draw_letter(layer, *c, *at, height, LETTER);
        }
        if let Some(stroke) = self.sigil_stroke() {
            layer.draw(&stroke);
        }
    }

    /// Draw the ring into its own layer and composite it over `canvas`.
    pub fn composite_onto(&self, canvas: &mut Canvas, glyphs: &GlyphSet) -> SigilResult<()> {
        let mut layer = ShapeLayer::for_canvas(canvas)?;
        self.draw(&mut layer, glyphs);
        tracing::debug!(letters = self.len(), drawn = layer.drawn(), "letter ring");
        layer.composite_onto(canvas)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyphs/ring.rs"]
mod tests;
