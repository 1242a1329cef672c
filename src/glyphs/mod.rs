//! Letter glyphs and the letter ring.
//!
//! A [`GlyphSet`] is built once per generator and shared read-only between generations.
//! With a font it holds the capital letters pre-shaped by parley; without one, or when
//! the font cannot be used, letters are drawn from the built-in stroke alphabet.

use std::borrow::Cow;
use std::path::Path;

use crate::foundation::core::{Affine, Point, Rgba8, Vec2};
use crate::foundation::error::{SigilError, SigilResult};
use crate::render::raster::{FontData, Mark, PlacedGlyph, Shape, ShapeLayer};

mod ring;
pub mod strokes;

pub use ring::LetterRing;

/// Em size the font letters are shaped at; drawing scales from here.
const SHAPING_PX: f32 = 64.0;

/// Where letter shapes come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphSource {
    /// Pre-shaped font glyphs.
    Font,
    /// Built-in stroke alphabet.
    Strokes,
}

#[derive(Clone, Debug)]
struct ShapedLetter {
    glyphs: Vec<PlacedGlyph>,
    width: f32,
    height: f32,
}

#[derive(Clone)]
struct FontGlyphs {
    font: FontData,
    family: String,
    letters: Vec<ShapedLetter>,
}

/// Immutable set of letter shapes for `A`-`Z`.
#[derive(Clone)]
pub struct GlyphSet {
    font: Option<FontGlyphs>,
}

impl std::fmt::Debug for GlyphSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphSet")
            .field("source", &self.source())
            .field("family", &self.family())
            .finish()
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GlyphSet {
    /// Stroke alphabet only.
    pub fn builtin() -> Self {
        Self { font: None }
    }

    /// Load a font file if one is given, falling back to the stroke alphabet on any failure.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };
        let loaded = std::fs::read(path)
            .map_err(|e| SigilError::validation(format!("read font '{}': {e}", path.display())))
            .and_then(Self::from_font_bytes);
        match loaded {
            Ok(set) => {
                tracing::debug!(path = %path.display(), family = ?set.family(), "letter font loaded");
                set
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "letter font unavailable, using stroke glyphs");
                Self::builtin()
            }
        }
    }

    /// Shape `A`-`Z` with the given font bytes.
    pub fn from_font_bytes(bytes: Vec<u8>) -> SigilResult<Self> {
        let font = FontData::new(vello_cpu::peniko::Blob::from(bytes.clone()), 0);
        let mut font_ctx = parley::FontContext::default();
        let mut layout_ctx = parley::LayoutContext::<()>::new();

        let families = font_ctx.collection.register_fonts(parley::fontique::Blob::from(bytes), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| SigilError::validation("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| SigilError::validation("registered font family has no name"))?
            .to_string();

        let mut letters = Vec::with_capacity(26);
        for c in 'A'..='Z' {
            let text = c.to_string();
            let mut builder = layout_ctx.ranged_builder(&mut font_ctx, &text, 1.0, true);
            builder.push_default(parley::style::StyleProperty::FontStack(
                parley::style::FontStack::Source(Cow::Owned(family.clone())),
            ));
            builder.push_default(parley::style::StyleProperty::FontSize(SHAPING_PX));
            let mut layout: parley::Layout<()> = builder.build(&text);
            layout.break_all_lines(None);

            let mut glyphs = Vec::new();
            for line in layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    glyphs.extend(run.glyphs().map(|g| PlacedGlyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    }));
                }
            }
            // id 0 is .notdef: the font has no such letter
            if glyphs.is_empty() || glyphs.iter().all(|g| g.id == 0) {
                return Err(SigilError::validation(format!(
                    "font '{family}' has no glyph for '{c}'"
                )));
            }
            letters.push(ShapedLetter {
                glyphs,
                width: layout.width(),
                height: layout.height(),
            });
        }

        Ok(Self {
            font: Some(FontGlyphs {
                font,
                family,
                letters,
            }),
        })
    }

    /// Source of the letter shapes.
    pub fn source(&self) -> GlyphSource {
        match self.font {
            Some(_) => GlyphSource::Font,
            None => GlyphSource::Strokes,
        }
    }

    /// Font family name, when a font is in use.
    pub fn family(&self) -> Option<&str> {
        self.font.as_ref().map(|f| f.family.as_str())
    }

    /// Draw `letter` centered at `center` with an em/cell height of `height` pixels.
    ///
    /// Characters outside `A`-`Z` draw nothing.
    pub fn draw_letter(
        &self,
        layer: &mut ShapeLayer,
        letter: char,
        center: Point,
        height: f64,
        color: Rgba8,
    ) {
        let c = letter.to_ascii_uppercase();
        if !c.is_ascii_uppercase() {
            return;
        }
        match &self.font {
            Some(font) => {
                let shaped = &font.letters[(c as u8 - b'A') as usize];
                let scale = height / f64::from(SHAPING_PX);
                let half = Vec2::new(f64::from(shaped.width), f64::from(shaped.height)) * 0.5;
                let transform = Affine::translate(center.to_vec2())
                    * Affine::scale(scale)
                    * Affine::translate(-half);
                layer.draw_glyphs(&font.font, SHAPING_PX, transform, &shaped.glyphs, color);
            }
            None => {
                let width = (height * 0.1).max(1.0);
                for stroke in strokes::placed_strokes(c, center, height) {
                    layer.draw(&Mark::stroke(Shape::Polyline(stroke), color, width));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyphs/set.rs"]
mod tests;
