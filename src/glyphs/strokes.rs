//! Built-in stroke alphabet.
//!
//! Each capital letter is a handful of polylines on a unit cell, `(0, 0)` top-left to
//! `(1, 1)` bottom-right. It needs no font data and is what letters fall back to.

use crate::foundation::core::Point;

/// One polyline in unit-cell coordinates.
pub type Stroke = &'static [(f64, f64)];

const ALPHABET: [&[Stroke]; 26] = [
    // A
    &[&[(0.0, 1.0), (0.5, 0.0), (1.0, 1.0)], &[(0.25, 0.5), (0.75, 0.5)]],
    // B
    &[
        &[(0.0, 0.5), (0.0, 1.0), (0.7, 1.0), (1.0, 0.75), (0.7, 0.5), (0.0, 0.5)],
        &[(0.0, 0.5), (0.0, 0.0), (0.65, 0.0), (0.9, 0.25), (0.65, 0.5)],
    ],
    // C
    &[&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]],
    // D
    &[&[
        (0.0, 0.0),
        (0.0, 1.0),
        (0.6, 1.0),
        (1.0, 0.6),
        (1.0, 0.4),
        (0.6, 0.0),
        (0.0, 0.0),
    ]],
    // E
    &[&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0), (1.0, 1.0)], &[(0.0, 0.5), (0.7, 0.5)]],
    // F
    &[&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0)], &[(0.0, 0.5), (0.7, 0.5)]],
    // G
    &[&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.5), (0.5, 0.5)]],
    // H
    &[
        &[(0.0, 0.0), (0.0, 1.0)],
        &[(1.0, 0.0), (1.0, 1.0)],
        &[(0.0, 0.5), (1.0, 0.5)],
    ],
    // I
    &[
        &[(0.5, 0.0), (0.5, 1.0)],
        &[(0.2, 0.0), (0.8, 0.0)],
        &[(0.2, 1.0), (0.8, 1.0)],
    ],
    // J
    &[&[(1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.7)]],
    // K
    &[&[(0.0, 0.0), (0.0, 1.0)], &[(1.0, 0.0), (0.0, 0.5), (1.0, 1.0)]],
    // L
    &[&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]],
    // M
    &[&[(0.0, 1.0), (0.0, 0.0), (0.5, 0.5), (1.0, 0.0), (1.0, 1.0)]],
    // N
    &[&[(0.0, 1.0), (0.0, 0.0), (1.0, 1.0), (1.0, 0.0)]],
    // O
    &[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]],
    // P
    &[&[(0.0, 1.0), (0.0, 0.0), (1.0, 0.0), (1.0, 0.5), (0.0, 0.5)]],
    // Q
    &[
        &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)],
        &[(0.6, 0.6), (1.0, 1.0)],
    ],
    // R
    &[&[(0.0, 1.0), (0.0, 0.0), (1.0, 0.0), (1.0, 0.5), (0.0, 0.5), (1.0, 1.0)]],
    // S
    &[&[(1.0, 0.0), (0.0, 0.0), (0.0, 0.5), (1.0, 0.5), (1.0, 1.0), (0.0, 1.0)]],
    // T
    &[&[(0.0, 0.0), (1.0, 0.0)], &[(0.5, 0.0), (0.5, 1.0)]],
    // U
    &[&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]],
    // V
    &[&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]],
    // W
    &[&[(0.0, 0.0), (0.25, 1.0), (0.5, 0.5), (0.75, 1.0), (1.0, 0.0)]],
    // X
    &[&[(0.0, 0.0), (1.0, 1.0)], &[(1.0, 0.0), (0.0, 1.0)]],
    // Y
    &[&[(0.0, 0.0), (0.5, 0.5), (1.0, 0.0)], &[(0.5, 0.5), (0.5, 1.0)]],
    // Z
    &[&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]],
];

/// Cell width relative to its height.
pub const CELL_ASPECT: f64 = 0.6;

/// Unit-cell strokes of an ASCII letter, case-insensitive.
pub fn letter_strokes(letter: char) -> Option<&'static [Stroke]> {
    let c = letter.to_ascii_uppercase();
    c.is_ascii_uppercase()
        .then(|| ALPHABET[(c as u8 - b'A') as usize])
}

/// Strokes of `letter` in a cell of `height` pixels centered at `center`.
pub fn placed_strokes(letter: char, center: Point, height: f64) -> Vec<Vec<Point>> {
    let Some(strokes) = letter_strokes(letter) else {
        return Vec::new();
    };
    let width = height * CELL_ASPECT;
    let origin = Point::new(center.x - width / 2.0, center.y - height / 2.0);
    strokes
        .iter()
        .map(|s| {
            s.iter()
                .map(|&(u, v)| Point::new(origin.x + u * width, origin.y + v * height))
                .collect()
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/glyphs/strokes.rs"]
mod tests;
