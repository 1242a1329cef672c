//! Layered pattern passes.
//!
//! A pass turns the read-only [`PassParams`] into an ordered list of [`Mark`]s. The
//! [`Pipeline`] rasterizes each pass into its own transparent layer and composites the
//! layers onto the canvas in a fixed order, so later passes dominate earlier ones.
//!
//! Most passes share the same `layer x item` polar loop and are described as data by
//! [`RingPass`]; the few with different structure implement [`PatternPass`] directly.

use rayon::prelude::*;

use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::foundation::error::{SigilError, SigilResult};
use crate::phrase::hash::{hash_phrase, hash_salted};
use crate::phrase::numerology::NumerologyClass;
use crate::render::raster::{LayerPixels, Mark, ShapeLayer};

mod chaos;
mod circles;
mod constellations;
mod mandala;
mod portals;
mod quantum;
mod ring;
mod sacred;
mod spirals;
mod vortex;

pub use chaos::ChaosGrid;
pub use circles::{MysticalCircles, ring_count};
pub use constellations::constellations;
pub use mandala::{CentralMandala, CentralSymbol};
pub use portals::dimensional_portals;
pub use quantum::quantum_fields;
pub use ring::{Placement, Polar, RingPass, Slot, Tuning};
pub use sacred::{SacredForm, sacred_geometry, sacred_geometry_overlay};
pub use spirals::{dual_spirals, fractal_spirals};
pub use vortex::vortex_overlay;

/// Composition order of the standard pipeline, first to last.
pub const STANDARD_ORDER: [&str; 11] = [
    "quantum_fields",
    "dimensional_portals",
    "sacred_geometry",
    "chaos_grid",
    "dual_spirals",
    "fractal_spirals",
    "mystical_circles",
    "sacred_geometry_overlay",
    "constellations",
    "central_mandala",
    "vortex_overlay",
];

/// Read-only inputs shared by every pass of one generation.
#[derive(Clone, Debug)]
pub struct PassParams<'a> {
    /// Numerology class of the phrase.
    pub numerology: NumerologyClass,
    /// Raw phrase.
    pub phrase: &'a str,
    /// Sigil size; the canvas side is `2 * size`.
    pub size: f64,
    /// Canvas center.
    pub center: Point,
    phrase_hash: u64,
}

impl<'a> PassParams<'a> {
    /// Bundle the pass inputs for a canvas of side `2 * size`.
    pub fn new(numerology: NumerologyClass, phrase: &'a str, size: u32) -> Self {
        let size = f64::from(size);
        Self {
            numerology,
            phrase,
            size,
            center: Point::new(size, size),
            phrase_hash: hash_phrase(phrase),
        }
    }

    /// Numerology value as a count.
    pub fn n(&self) -> usize {
        self.numerology.count()
    }

    /// Numerology value as a float.
    pub fn nf(&self) -> f64 {
        self.numerology.as_f64()
    }

    /// Fraction of `size`, in pixels.
    pub fn px(&self, frac: f64) -> f64 {
        self.size * frac
    }

    /// Hash of the phrase alone.
    pub fn phrase_hash(&self) -> u64 {
        self.phrase_hash
    }

    /// Hash of the phrase with a salt, for per-item jitter.
    pub fn jitter(&self, salt: u64) -> u64 {
        hash_salted(self.phrase, salt)
    }
}

/// Sinusoidal hue wheel: three phase-shifted sines sampled at `phase`.
pub fn spectral(phase: f64, alpha: u8) -> Rgba8 {
    const THIRD: f64 = std::f64::consts::TAU / 3.0;
    Rgba8::from_f64(
        128.0 + 127.0 * phase.sin(),
        128.0 + 127.0 * (phase + THIRD).sin(),
        128.0 + 127.0 * (phase + 2.0 * THIRD).sin(),
        f64::from(alpha),
    )
}

/// One stage of the layered drawing pipeline.
pub trait PatternPass: Send + Sync {
    /// Stable pass name.
    fn name(&self) -> &'static str;

    /// Marks of this pass in draw order. Must be a pure function of `p`.
    fn marks(&self, p: &PassParams<'_>) -> Vec<Mark>;
}

/// Counters from one pipeline run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Passes executed.
    pub passes: usize,
    /// Marks drawn across all passes.
    pub marks: usize,
}

/// Ordered list of passes.
pub struct Pipeline {
    passes: Vec<Box<dyn PatternPass>>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("passes", &self.names())
            .finish()
    }
}

impl Pipeline {
    /// The eleven standard passes in [`STANDARD_ORDER`].
    pub fn standard() -> Self {
        Self::from_passes(vec![
            Box::new(quantum_fields()),
            Box::new(dimensional_portals()),
            Box::new(sacred_geometry()),
            Box::new(ChaosGrid),
            Box::new(dual_spirals()),
            Box::new(fractal_spirals()),
            Box::new(MysticalCircles),
            Box::new(sacred_geometry_overlay()),
            Box::new(constellations()),
            Box::new(CentralMandala),
            Box::new(vortex_overlay()),
        ])
    }

    /// Pipeline over an explicit pass list, composited in the given order.
    pub fn from_passes(passes: Vec<Box<dyn PatternPass>>) -> Self {
        Self { passes }
    }

    /// Pass names in composition order.
    pub fn names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// Number of passes.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Return `true` when there are no passes.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Exchange the positions of two passes by name.
    pub fn swap(&mut self, a: &str, b: &str) -> SigilResult<()> {
        let ia = self.position(a)?;
        let ib = self.position(b)?;
        self.passes.swap(ia, ib);
        Ok(())
    }

    fn position(&self, name: &str) -> SigilResult<usize> {
        self.passes
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| SigilError::validation(format!("unknown pass '{name}'")))
    }

    /// Marks of every pass, in composition order.
    pub fn marks(&self, p: &PassParams<'_>) -> Vec<(&'static str, Vec<Mark>)> {
        self.passes.iter().map(|pass| (pass.name(), pass.marks(p))).collect()
    }

    /// Draw every pass onto `canvas`, one layer per pass, in order.
    pub fn run(&self, canvas: &mut Canvas, p: &PassParams<'_>) -> SigilResult<PipelineStats> {
        let mut stats = PipelineStats::default();
        for pass in &self.passes {
            let (layer, drawn) = rasterize_pass(pass.as_ref(), canvas.width(), canvas.height(), p)?;
            if let Some(layer) = layer {
                layer.composite_onto(canvas)?;
            }
            stats.passes += 1;
            stats.marks += drawn;
        }
        Ok(stats)
    }

    /// Like [`Pipeline::run`], but rasterizes the pass layers in parallel.
    ///
    /// Layers are still composited in pipeline order, so the result is byte-identical to
    /// the sequential run.
    pub fn run_par(
        &self,
        canvas: &mut Canvas,
        p: &PassParams<'_>,
        pool: Option<&rayon::ThreadPool>,
    ) -> SigilResult<PipelineStats> {
        let (w, h) = (canvas.width(), canvas.height());
        let render = || -> SigilResult<Vec<(Option<LayerPixels>, usize)>> {
            self.passes
                .par_iter()
                .map(|pass| rasterize_pass(pass.as_ref(), w, h, p))
                .collect()
        };
        let layers = match pool {
            Some(pool) => pool.install(render)?,
            None => render()?,
        };

        let mut stats = PipelineStats::default();
        for (layer, drawn) in layers {
            if let Some(layer) = layer {
                layer.composite_onto(canvas)?;
            }
            stats.passes += 1;
            stats.marks += drawn;
        }
        Ok(stats)
    }
}

fn rasterize_pass(
    pass: &dyn PatternPass,
    width: u32,
    height: u32,
    p: &PassParams<'_>,
) -> SigilResult<(Option<LayerPixels>, usize)> {
    let marks = pass.marks(p);
    let mut layer = ShapeLayer::new(width, height)?;
    layer.draw_all(&marks);
    let drawn = layer.drawn();
    tracing::debug!(pass = pass.name(), marks = marks.len(), drawn, "pattern pass");
    Ok((layer.finish(), drawn))
}

#[cfg(test)]
#[path = "../../tests/unit/passes/pipeline.rs"]
mod tests;
