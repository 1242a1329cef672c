use std::f64::consts::TAU;

use kurbo::Point;

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Undo premultiplication for one channel; `a` must be non-zero.
pub(crate) fn unpremul_u8(c: u8, a: u8) -> u8 {
    let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
    v.min(255) as u8
}

/// Point at `radius` from `center` along `angle` (radians, y grows downwards).
pub fn polar(center: Point, angle: f64, radius: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Angle of slot `i` when `n` slots are spread evenly around a full turn.
pub fn even_angle(i: usize, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    TAU * i as f64 / n as f64
}

/// Decimal digit sum.
pub(crate) fn digit_sum(mut v: u32) -> u32 {
    let mut s = 0;
    while v > 0 {
        s += v % 10;
        v /= 10;
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
