//! Continuous background field.
//!
//! Each pixel is an independent function of `(x, y, size, numerology)`: a base palette
//! color faded by distance, perturbed by fractal, cosmic and vortex sinusoids, with sparse
//! hash-driven sparkles and an aurora band. Rows can be filled in any order or in parallel
//! and produce identical bytes.

use std::f64::consts::{PI, SQRT_2};

use rayon::prelude::*;

use crate::foundation::core::{Canvas, Rgba8};
use crate::phrase::hash::hash_pixel;
use crate::phrase::numerology::NumerologyClass;

/// Coordinates are rescaled to this half-side so the field looks the same at every size.
const REFERENCE_SIZE: f64 = 400.0;

/// `hash % 512` above this value lights a sparkle.
const SPARKLE_THRESHOLD: u64 = 505;
const SPARKLE_BOOST: f64 = 70.0;

const AURORA_THRESHOLD: f64 = 1.2;

/// Base RGB per numerology class; unmapped classes fall back to class 1.
pub fn palette_for(numerology: NumerologyClass) -> [u8; 3] {
    match numerology.value() {
        2 => [120, 40, 180],
        3 => [80, 140, 60],
        4 => [180, 120, 60],
        5 => [120, 180, 60],
        6 => [60, 180, 120],
        7 => [180, 60, 120],
        8 => [120, 60, 180],
        9 => [180, 120, 180],
        11 => [255, 200, 255],
        22 => [255, 255, 200],
        33 => [200, 255, 255],
        _ => [60, 20, 120],
    }
}

/// Opaque background color of pixel `(x, y)` on a canvas of side `2*size`.
pub fn background_pixel(x: u32, y: u32, size: u32, numerology: NumerologyClass) -> Rgba8 {
    let size = f64::from(size.max(1));
    let n = numerology.as_f64();

    let dx = f64::from(x) - size;
    let dy = f64::from(y) - size;
    let d = dx.hypot(dy);
    let gradient = (d / (SQRT_2 * size)).min(1.0);
    let angle = dy.atan2(dx);

    let scale = REFERENCE_SIZE / size;
    let (xs, ys, ds) = (f64::from(x) * scale, f64::from(y) * scale, d * scale);

    let fractal = [
        (xs * 0.02).sin() * (ys * 0.02).cos(),
        (xs * 0.05 + ys * 0.03).sin(),
        (ds * 0.04).sin() * (ds * 0.015).cos(),
    ];
    let cosmic = [
        (ds * 0.01 + n).sin(),
        (angle * n).cos(),
        ((xs + ys) * 0.01 + n * PI).sin(),
    ];

    let strength = 1.0 / (1.0 + d / (0.3 * size));
    let k = f64::from(numerology.value() % 5 + 2);
    let vortex = [
        (angle * k + ds * 0.05).sin() * strength,
        (angle * k - ds * 0.03).cos() * strength,
    ];

    let [br, bg, bb] = palette_for(numerology);
    let fade = 1.0 - gradient * 0.6;
    let mut r = f64::from(br) * fade
        + gradient * 18.0
        + fractal[0] * 25.0
        + cosmic[0] * 20.0
        + vortex[0] * 30.0
        + fractal[2] * 10.0;
    let mut g = f64::from(bg) * fade
        + gradient * 10.0
        + fractal[1] * 25.0
        + cosmic[1] * 15.0
        + vortex[1] * 25.0;
    let mut b = f64::from(bb) * (1.0 - gradient * 0.5)
        + gradient * 30.0
        + fractal[2] * 30.0
        + cosmic[2] * 20.0
        + (vortex[0] + vortex[1]) * 15.0;

    if hash_pixel(x, y, d as u32, numerology.value()) % 512 > SPARKLE_THRESHOLD {
        let boost = SPARKLE_BOOST * (1.0 - gradient * 0.5);
        r += boost;
        g += boost;
        b += boost;
    }

    let aurora = (xs * 0.01 + n).sin() * (ys * 0.008).cos() + (ds * 0.02).sin() * 0.5;
    if aurora > AURORA_THRESHOLD {
        let t = (aurora - AURORA_THRESHOLD) / (1.5 - AURORA_THRESHOLD);
        r += 10.0 * t;
        g += 40.0 * t;
        b += 25.0 * t;
    }

    Rgba8::from_f64(r, g, b, 255.0)
}

fn fill_row(row: &mut [u8], y: u32, size: u32, numerology: NumerologyClass) {
    for (x, px) in row.chunks_exact_mut(4).enumerate() {
        let c = background_pixel(x as u32, y, size, numerology);
        px.copy_from_slice(&[c.r, c.g, c.b, 255]);
    }
}

/// Fill the whole canvas with the background field, one row at a time.
pub fn synthesize_background(canvas: &mut Canvas, size: u32, numerology: NumerologyClass) {
    let stride = canvas.stride();
    for (y, row) in canvas.data_mut().chunks_exact_mut(stride).enumerate() {
        fill_row(row, y as u32, size, numerology);
    }
}

/// Row-parallel variant of [`synthesize_background`]; output is byte-identical.
///
/// Runs inside `pool` when given, otherwise on rayon's global pool.
pub fn synthesize_background_par(
    canvas: &mut Canvas,
    size: u32,
    numerology: NumerologyClass,
    pool: Option<&rayon::ThreadPool>,
) {
    let stride = canvas.stride();
    let data = canvas.data_mut();
    let mut run = move || {
        data.par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(|(y, row)| fill_row(row, y as u32, size, numerology));
    };
    match pool {
        Some(pool) => pool.install(run),
        None => run(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
