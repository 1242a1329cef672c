use std::path::PathBuf;
use std::sync::Arc;

use crate::encode::png::{encode_png, to_data_uri};
use crate::foundation::core::{Canvas, MAX_CANVAS_SIDE};
use crate::foundation::error::{SigilError, SigilResult};
use crate::glyphs::{GlyphSet, LetterRing};
use crate::passes::{PassParams, Pipeline};
use crate::phrase::letters::{LetterSequence, normalize_letters};
use crate::phrase::numerology::{NumerologyClass, numerology_of};
use crate::render::background::{synthesize_background, synthesize_background_par};
use crate::request::SigilRequest;

/// Largest `size` the rasterizer can address (canvas side is `2 * size`).
pub const MAX_SUPPORTED_SIZE: u32 = MAX_CANVAS_SIDE / 2;

/// Generator configuration.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SigilOpts {
    /// Size used when a request does not name one.
    pub default_size: u32,
    /// Largest accepted size.
    pub max_size: u32,
    /// Longest accepted phrase, in characters.
    pub max_phrase_chars: usize,
    /// Synthesize the background and rasterize pass layers on rayon workers.
    pub parallel: bool,
    /// Worker threads for a dedicated pool. `None` uses the global rayon pool.
    pub threads: Option<usize>,
    /// TTF/OTF font for the letter ring. `None` uses the built-in stroke letters.
    pub font_path: Option<PathBuf>,
}

impl Default for SigilOpts {
    fn default() -> Self {
        Self {
            default_size: 400,
            max_size: 2048,
            max_phrase_chars: 500,
            parallel: true,
            threads: None,
            font_path: None,
        }
    }
}

impl SigilOpts {
    /// Defaults with `SIGILCRAFT_*` environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Apply `SIGILCRAFT_*` environment overrides. Unparseable values are ignored.
    pub fn with_env(self) -> Self {
        self.with_vars(|k| std::env::var(k).ok())
    }

    pub(crate) fn with_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = var("SIGILCRAFT_FONT_PATH").filter(|v| !v.trim().is_empty()) {
            self.font_path = Some(PathBuf::from(path));
        }
        if let Some(n) = var("SIGILCRAFT_THREADS")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
        {
            self.threads = Some(n);
        }
        if let Some(n) = var("SIGILCRAFT_MAX_SIZE")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|&n| n > 0)
        {
            self.max_size = n;
        }
        if let Some(v) = var("SIGILCRAFT_SEQUENTIAL") {
            let v = v.trim().to_ascii_lowercase();
            if matches!(v.as_str(), "1" | "true" | "yes" | "on") {
                self.parallel = false;
            }
        }
        self
    }

    /// Check that the options are usable.
    pub fn validate(&self) -> SigilResult<()> {
        if self.max_size == 0 || self.max_size > MAX_SUPPORTED_SIZE {
            return Err(SigilError::validation(format!(
                "max_size must be in 1..={MAX_SUPPORTED_SIZE}"
            )));
        }
        if self.default_size == 0 || self.default_size > self.max_size {
            return Err(SigilError::validation(
                "default_size must be in 1..=max_size",
            ));
        }
        if self.max_phrase_chars == 0 {
            return Err(SigilError::validation("max_phrase_chars must be > 0"));
        }
        if self.threads == Some(0) {
            return Err(SigilError::validation("threads must be > 0"));
        }
        Ok(())
    }

    /// Reject sizes outside `1..=max_size`.
    pub fn check_size(&self, size: u32) -> SigilResult<()> {
        if size == 0 || size > self.max_size {
            return Err(SigilError::validation(format!(
                "size must be in 1..={}, got {size}",
                self.max_size
            )));
        }
        Ok(())
    }
}

/// States of one generation. Every run starts in `Validating` and ends in `Done` or
/// `Failed`; only `Validating` can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenerationStage {
    /// Checking size and letters.
    Validating,
    /// Computing the numerology class.
    Mapping,
    /// Filling the background.
    Synthesizing,
    /// Drawing pattern layers and the letter ring.
    Compositing,
    /// Writing the PNG.
    Encoding,
    /// Finished.
    Done,
    /// Rejected input.
    Failed,
}

impl GenerationStage {
    /// Successor on the success path; `None` for terminal states.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Validating => Some(Self::Mapping),
            Self::Mapping => Some(Self::Synthesizing),
            Self::Synthesizing => Some(Self::Compositing),
            Self::Compositing => Some(Self::Encoding),
            Self::Encoding => Some(Self::Done),
            Self::Done | Self::Failed => None,
        }
    }

    /// Return `true` for `Done` and `Failed`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

/// A finished sigil.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sigil {
    /// PNG bytes.
    pub png: Vec<u8>,
    /// Numerology class of the phrase.
    pub numerology: NumerologyClass,
    /// Letters on the ring.
    pub letters: LetterSequence,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl Sigil {
    /// PNG as a `data:image/png;base64,...` URI.
    pub fn data_uri(&self) -> String {
        to_data_uri(&self.png)
    }
}

/// Composited canvas before encoding.
#[derive(Clone, Debug)]
pub struct RenderedCanvas {
    /// Premultiplied pixels.
    pub canvas: Canvas,
    /// Numerology class of the phrase.
    pub numerology: NumerologyClass,
    /// Letters on the ring.
    pub letters: LetterSequence,
}

/// Reusable sigil generator.
///
/// Holds only read-only state (options, pass pipeline, shaped letters, worker pool), so
/// one generator can serve concurrent calls; each call owns its canvas.
pub struct SigilGenerator {
    opts: SigilOpts,
    pipeline: Pipeline,
    glyphs: Arc<GlyphSet>,
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl std::fmt::Debug for SigilGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigilGenerator")
            .field("opts", &self.opts)
            .field("pipeline", &self.pipeline)
            .field("glyphs", &self.glyphs)
            .field("dedicated_pool", &self.pool.is_some())
            .finish()
    }
}

impl SigilGenerator {
    /// Build a generator; loads the letter font once if one is configured.
    pub fn new(opts: SigilOpts) -> SigilResult<Self> {
        opts.validate()?;
        let glyphs = Arc::new(GlyphSet::load(opts.font_path.as_deref()));
        let pool = if opts.parallel && opts.threads.is_some() {
            Some(Arc::new(build_thread_pool(opts.threads)?))
        } else {
            None
        };
        Ok(Self {
            opts,
            pipeline: Pipeline::standard(),
            glyphs,
            pool,
        })
    }

    /// Replace the pass pipeline.
    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Share an already loaded glyph set.
    pub fn with_glyphs(mut self, glyphs: Arc<GlyphSet>) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Options in effect.
    pub fn opts(&self) -> &SigilOpts {
        &self.opts
    }

    /// Pass pipeline in effect.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Letter shapes in use.
    pub fn glyphs(&self) -> &Arc<GlyphSet> {
        &self.glyphs
    }

    /// Generate a sigil PNG for `phrase` at `size`.
    pub fn generate(&self, phrase: &str, size: u32) -> SigilResult<Sigil> {
        self.generate_observed(phrase, size, |_| {})
    }

    /// Generate from a caller request, applying its phrase and size policy first.
    pub fn generate_request(&self, request: &SigilRequest) -> SigilResult<Sigil> {
        let size = request.validate(&self.opts)?;
        self.generate(&request.phrase, size)
    }

    /// Run validation through compositing and return the canvas without encoding it.
    pub fn render_canvas(&self, phrase: &str, size: u32) -> SigilResult<RenderedCanvas> {
        let mut stages = StageCursor::new(|_| {});
        self.render_stages(phrase, size, &mut stages)
    }

    /// Like [`SigilGenerator::generate`], reporting every state entered to `on_stage`.
    #[tracing::instrument(level = "debug", skip_all, fields(phrase_len = phrase.len(), size = size))]
    pub fn generate_observed(
        &self,
        phrase: &str,
        size: u32,
        on_stage: impl FnMut(GenerationStage),
    ) -> SigilResult<Sigil> {
        let mut stages = StageCursor::new(on_stage);
        let rendered = self.render_stages(phrase, size, &mut stages)?;

        stages.advance();
        let png = encode_png(&rendered.canvas)?;
        stages.advance();

        Ok(Sigil {
            png,
            numerology: rendered.numerology,
            letters: rendered.letters,
            width: rendered.canvas.width(),
            height: rendered.canvas.height(),
        })
    }

    fn render_stages<F: FnMut(GenerationStage)>(
        &self,
        phrase: &str,
        size: u32,
        stages: &mut StageCursor<F>,
    ) -> SigilResult<RenderedCanvas> {
        let letters = match self.validate(phrase, size) {
            Ok(letters) => letters,
            Err(err) => {
                stages.fail(&err);
                return Err(err);
            }
        };

        stages.advance();
        let numerology = numerology_of(phrase)?;

        stages.advance();
        let mut canvas = Canvas::for_size(size)?;
        if self.opts.parallel {
            synthesize_background_par(&mut canvas, size, numerology, self.pool.as_deref());
        } else {
            synthesize_background(&mut canvas, size, numerology);
        }

        stages.advance();
        let params = PassParams::new(numerology, phrase, size);
        let stats = if self.opts.parallel {
            self.pipeline
                .run_par(&mut canvas, &params, self.pool.as_deref())?
        } else {
            self.pipeline.run(&mut canvas, &params)?
        };
        tracing::debug!(passes = stats.passes, marks = stats.marks, "pattern layers composited");

        LetterRing::layout(&letters, params.center, params.size)
            .composite_onto(&mut canvas, &self.glyphs)?;

        Ok(RenderedCanvas {
            canvas,
            numerology,
            letters,
        })
    }

    fn validate(&self, phrase: &str, size: u32) -> SigilResult<LetterSequence> {
        self.opts.check_size(size)?;
        normalize_letters(phrase).require_non_empty()
    }
}

/// Walks the success path of [`GenerationStage`], logging and reporting each state.
struct StageCursor<F> {
    stage: GenerationStage,
    on_stage: F,
}

impl<F: FnMut(GenerationStage)> StageCursor<F> {
    fn new(mut on_stage: F) -> Self {
        let stage = GenerationStage::Validating;
        tracing::debug!(?stage, "generation stage");
        on_stage(stage);
        Self { stage, on_stage }
    }

    fn advance(&mut self) {
        if let Some(next) = self.stage.next() {
            self.enter(next);
        }
    }

    fn fail(&mut self, err: &SigilError) {
        tracing::debug!(%err, "generation rejected");
        self.enter(GenerationStage::Failed);
    }

    fn enter(&mut self, stage: GenerationStage) {
        tracing::debug!(?stage, "generation stage");
        self.stage = stage;
        (self.on_stage)(stage);
    }
}

/// One-shot generation with default options.
pub fn generate_sigil(phrase: &str, size: u32) -> SigilResult<Sigil> {
    SigilGenerator::new(SigilOpts::default())?.generate(phrase, size)
}

fn build_thread_pool(threads: Option<usize>) -> SigilResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(SigilError::validation("threads must be > 0"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SigilError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/generator.rs"]
mod tests;
