use kurbo::Shape as _;

use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rgba8, Vec2};
use crate::foundation::error::{SigilError, SigilResult};
use crate::render::composite::over_in_place;

const CURVE_TOLERANCE: f64 = 0.1;

/// Smallest stroke width and dot radius drawn, in pixels.
pub const MIN_FEATURE_PX: f64 = 1.0;

/// Font handle the rasterizer draws glyph runs with.
pub type FontData = vello_cpu::peniko::FontData;

/// Glyph positioned relative to its run origin, in font-size units of the run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedGlyph {
    /// Glyph id in the font.
    pub id: u32,
    /// Horizontal offset.
    pub x: f32,
    /// Baseline offset.
    pub y: f32,
}

/// Geometry of one drawing mark.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Closed polygon through the given vertices.
    Polygon(Vec<Point>),
    /// Open path through the given points.
    Polyline(Vec<Point>),
    /// Circle.
    Circle {
        /// Center.
        center: Point,
        /// Radius in pixels.
        radius: f64,
    },
    /// Rotated ellipse.
    Ellipse {
        /// Center.
        center: Point,
        /// Semi-axes in pixels.
        radii: Vec2,
        /// Rotation of the x semi-axis, radians.
        rotation: f64,
    },
    /// Straight segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Star polygon alternating between outer and inner radius.
    Star {
        /// Center.
        center: Point,
        /// Tip radius.
        outer: f64,
        /// Notch radius.
        inner: f64,
        /// Number of tips.
        points: usize,
        /// Angle of the first tip, radians.
        rotation: f64,
    },
}

impl Shape {
    /// Regular polygon with `sides` vertices on a circle of `radius`.
    pub fn regular(center: Point, radius: f64, sides: usize, rotation: f64) -> Self {
        let verts = (0..sides)
            .map(|i| {
                crate::foundation::math::polar(
                    center,
                    rotation + crate::foundation::math::even_angle(i, sides),
                    radius,
                )
            })
            .collect();
        Self::Polygon(verts)
    }

    /// Number of tips for stars, `None` for every other shape.
    pub fn star_points(&self) -> Option<usize> {
        match self {
            Self::Star { points, .. } => Some(*points),
            _ => None,
        }
    }

    /// Build the outline as a path. Degenerate shapes produce an empty path.
    pub fn to_path(&self) -> BezPath {
        match self {
            Self::Polygon(pts) => points_path(pts, true),
            Self::Polyline(pts) => points_path(pts, false),
            Self::Circle { center, radius } => {
                kurbo::Circle::new(*center, *radius).to_path(CURVE_TOLERANCE)
            }
            Self::Ellipse {
                center,
                radii,
                rotation,
            } => kurbo::Ellipse::new(*center, *radii, *rotation).to_path(CURVE_TOLERANCE),
            Self::Line { from, to } => kurbo::Line::new(*from, *to).to_path(CURVE_TOLERANCE),
            Self::Star {
                center,
                outer,
                inner,
                points,
                rotation,
            } => {
                let n = points * 2;
                let verts: Vec<Point> = (0..n)
                    .map(|i| {
                        let r = if i % 2 == 0 { *outer } else { *inner };
                        crate::foundation::math::polar(
                            *center,
                            rotation + crate::foundation::math::even_angle(i, n),
                            r,
                        )
                    })
                    .collect();
                points_path(&verts, true)
            }
        }
    }

    fn is_finite(&self) -> bool {
        fn pt(p: &Point) -> bool {
            p.x.is_finite() && p.y.is_finite()
        }
        match self {
            Self::Polygon(pts) | Self::Polyline(pts) => pts.iter().all(pt),
            Self::Circle { center, radius } => pt(center) && radius.is_finite(),
            Self::Ellipse {
                center,
                radii,
                rotation,
            } => pt(center) && radii.is_finite() && rotation.is_finite(),
            Self::Line { from, to } => pt(from) && pt(to),
            Self::Star {
                center,
                outer,
                inner,
                rotation,
                ..
            } => pt(center) && outer.is_finite() && inner.is_finite() && rotation.is_finite(),
        }
    }
}

fn points_path(pts: &[Point], close: bool) -> BezPath {
    let mut path = BezPath::new();
    let mut it = pts.iter();
    let Some(first) = it.next() else {
        return path;
    };
    path.move_to(*first);
    for p in it {
        path.line_to(*p);
    }
    if close {
        path.close_path();
    }
    path
}

/// How a shape is painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// Solid fill.
    Fill(Rgba8),
    /// Outline of the given width.
    Stroke {
        /// Stroke color.
        color: Rgba8,
        /// Stroke width in pixels.
        width: f64,
    },
}

impl Paint {
    /// Color of the paint.
    pub fn color(&self) -> Rgba8 {
        match self {
            Self::Fill(c) => *c,
            Self::Stroke { color, .. } => *color,
        }
    }
}

/// A shape with its paint: the unit every pattern pass emits.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Geometry.
    pub shape: Shape,
    /// Paint.
    pub paint: Paint,
}

impl Mark {
    /// Filled mark.
    pub fn fill(shape: Shape, color: Rgba8) -> Self {
        Self {
            shape,
            paint: Paint::Fill(color),
        }
    }

    /// Outlined mark; width is raised to [`MIN_FEATURE_PX`].
    pub fn stroke(shape: Shape, color: Rgba8, width: f64) -> Self {
        Self {
            shape,
            paint: Paint::Stroke {
                color,
                width: width.max(MIN_FEATURE_PX),
            },
        }
    }

    /// Filled dot; radius is raised to [`MIN_FEATURE_PX`].
    pub fn dot(center: Point, radius: f64, color: Rgba8) -> Self {
        Self::fill(
            Shape::Circle {
                center,
                radius: radius.max(MIN_FEATURE_PX),
            },
            color,
        )
    }

    /// Straight segment.
    pub fn line(from: Point, to: Point, color: Rgba8, width: f64) -> Self {
        Self::stroke(Shape::Line { from, to }, color, width)
    }
}

/// Transparent raster layer that marks are drawn into before it is composited onto a
/// canvas.
///
/// Marks drawn into one layer blend with each other in draw order; the finished layer is
/// then laid over the canvas with premultiplied source-over.
pub struct ShapeLayer {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    drawn: usize,
}

impl ShapeLayer {
    /// Layer matching the canvas dimensions.
    pub fn for_canvas(canvas: &Canvas) -> SigilResult<Self> {
        Self::new(canvas.width(), canvas.height())
    }

    /// Transparent layer of the given size.
    pub fn new(width: u32, height: u32) -> SigilResult<Self> {
        let width: u16 = width
            .try_into()
            .map_err(|_| SigilError::render("layer width exceeds u16"))?;
        let height: u16 = height
            .try_into()
            .map_err(|_| SigilError::render("layer height exceeds u16"))?;
        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(Self {
            width,
            height,
            ctx,
            drawn: 0,
        })
    }

    /// Number of marks drawn so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// Draw one mark. Non-finite or fully transparent marks are skipped.
    pub fn draw(&mut self, mark: &Mark) {
        let color = mark.paint.color();
        if color.a == 0 || !mark.shape.is_finite() {
            return;
        }
        let path = bezpath_to_cpu(&mark.shape.to_path());
        if path.elements().is_empty() {
            return;
        }

        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        match mark.paint {
            Paint::Fill(_) => self.ctx.fill_path(&path),
            Paint::Stroke { width, .. } => {
                self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
                self.ctx.stroke_path(&path);
            }
        }
        self.drawn += 1;
    }

    /// Fill a shaped glyph run with `transform` applied to the run.
    pub fn draw_glyphs(
        &mut self,
        font: &FontData,
        font_size: f32,
        transform: Affine,
        glyphs: &[PlacedGlyph],
        color: Rgba8,
    ) {
        if color.a == 0 || glyphs.is_empty() || !font_size.is_finite() || font_size <= 0.0 {
            return;
        }
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        self.ctx
            .glyph_run(font)
            .font_size(font_size)
            .fill_glyphs(glyphs.iter().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            }));
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.drawn += 1;
    }

    /// Draw marks in order.
    pub fn draw_all<'a>(&mut self, marks: impl IntoIterator<Item = &'a Mark>) {
        for m in marks {
            self.draw(m);
        }
    }

    /// Rasterize into premultiplied RGBA8 pixels; `None` when nothing was drawn.
    pub fn finish(mut self) -> Option<LayerPixels> {
        if self.drawn == 0 {
            return None;
        }
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Some(LayerPixels {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
        })
    }

    /// Rasterize the layer and blend it over `canvas`.
    pub fn composite_onto(self, canvas: &mut Canvas) -> SigilResult<()> {
        match self.finish() {
            Some(px) => px.composite_onto(canvas),
            None => Ok(()),
        }
    }
}

/// Rasterized layer awaiting composition.
#[derive(Clone, Debug)]
pub struct LayerPixels {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl LayerPixels {
    /// Premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Blend over `canvas` with premultiplied source-over.
    pub fn composite_onto(&self, canvas: &mut Canvas) -> SigilResult<()> {
        if self.width != canvas.width() || self.height != canvas.height() {
            return Err(SigilError::render("layer/canvas size mismatch"));
        }
        over_in_place(canvas.data_mut(), &self.data, 1.0)
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
