use super::*;
use crate::passes::PatternPass;
use crate::phrase::numerology::NumerologyClass;
use crate::render::raster::Shape;

fn params(n: u32) -> PassParams<'static> {
    PassParams::new(NumerologyClass::new(n).unwrap(), "spiral", 200)
}

#[test]
fn dual_arms_are_opposed_and_grow() {
    let p = params(4);
    let placed = dual_spirals().placements(&p);
    assert_eq!(placed.len(), 2);
    assert_eq!(placed[0].len(), 56);

    let a = placed[0][0].1;
    let b = placed[1][0].1;
    assert!((b.angle - a.angle - PI).abs() < 1e-9);

    let last = placed[0].last().unwrap().1;
    assert!(last.radius > 10.0 * a.radius);
    assert!(placed[0][0].1.angle.abs() < 1e-9);
    assert!((last.angle - TWO_TURNS).abs() < 1e-9);
    let last_b = placed[1].last().unwrap().1;
    assert!((last_b.angle - PI - TWO_TURNS).abs() < 1e-9);
}

#[test]
fn fractal_arms_reach_outer_radius_on_last_step() {
    let p = params(2);
    let placed = fractal_spirals().placements(&p);
    assert_eq!(placed.len(), 5);
    let last = placed[0].last().unwrap().1;
    let expected = p.px(0.55) * (1.0 + 0.12 * (39.0f64 * 0.9).sin());
    assert!((last.radius - expected).abs() < 1e-6);
    assert!((last.angle + TWO_TURNS).abs() < 1e-9);
}

#[test]
fn fractal_spirals_connect_consecutive_steps() {
    let p = params(3);
    let marks = fractal_spirals().marks(&p);
    let lines = marks
        .iter()
        .filter(|m| matches!(m.shape, Shape::Line { .. }))
        .count();
    let dots = marks.len() - lines;
    // 3 arms of 40 steps: 39 segments and 5 dots each
    assert_eq!(lines, 3 * 39);
    assert_eq!(dots, 3 * 5);
}
