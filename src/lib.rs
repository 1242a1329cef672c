//! Sigilcraft turns a phrase into a deterministic abstract raster symbol (a "sigil").
//!
//! # Pipeline overview
//!
//! 1. **Validate**: normalize the phrase to its unique letters ([`LetterSequence`]) and
//!    reject phrases without any `A`-`Z`.
//! 2. **Map**: reduce the letter sum to a [`NumerologyClass`] (`1..=9`, or master 11/22/33).
//! 3. **Synthesize**: fill a `2·size` square [`Canvas`] with a per-pixel background keyed
//!    by the class.
//! 4. **Composite**: rasterize the eleven pattern passes into transparent layers and blend
//!    them over the canvas in a fixed order, then draw the [`LetterRing`].
//! 5. **Encode**: write a PNG, optionally wrapped as a base64 data URI.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: every pseudo-random choice comes from a seeded XXH3 hash, so the
//!   same `(phrase, size)` produces byte-identical PNGs across runs and processes.
//! - **Parallel-safe**: background rows and pass layers may be computed on rayon workers;
//!   layers are always composited in pipeline order, so results match sequential runs.
//! - **Premultiplied RGBA8** end-to-end until encoding.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod foundation;
mod generator;
mod glyphs;
mod passes;
mod phrase;
mod render;
mod request;

pub use encode::png::{PNG_DATA_URI_PREFIX, encode_png, to_data_uri};
pub use foundation::core::{Affine, BezPath, Canvas, MAX_CANVAS_SIDE, Point, Rgba8, Vec2};
pub use foundation::error::{SigilError, SigilResult};
pub use foundation::math::{even_angle, polar};
pub use generator::{
    GenerationStage, MAX_SUPPORTED_SIZE, RenderedCanvas, Sigil, SigilGenerator, SigilOpts,
    generate_sigil,
};
pub use glyphs::strokes::{CELL_ASPECT, Stroke, letter_strokes, placed_strokes};
pub use glyphs::{GlyphSet, GlyphSource, LetterRing};
pub use passes::{
    CentralMandala, CentralSymbol, ChaosGrid, MysticalCircles, PassParams, PatternPass, Pipeline,
    PipelineStats, Placement, Polar, RingPass, STANDARD_ORDER, SacredForm, Slot, Tuning,
    constellations, dimensional_portals, dual_spirals, fractal_spirals, quantum_fields,
    ring_count, sacred_geometry, sacred_geometry_overlay, spectral, vortex_overlay,
};
pub use phrase::hash::{SeedHasher, hash_phrase, hash_pixel, hash_salted, unit_from_bits};
pub use phrase::letters::{LetterSequence, normalize_letters};
pub use phrase::numerology::{NumerologyClass, letter_value, numerology_of, reduce_to_class};
pub use render::background::{
    background_pixel, palette_for, synthesize_background, synthesize_background_par,
};
pub use render::composite::{PremulRgba8, over, over_in_place};
pub use render::raster::{
    FontData, LayerPixels, MIN_FEATURE_PX, Mark, Paint, PlacedGlyph, Shape, ShapeLayer,
};
pub use request::SigilRequest;
