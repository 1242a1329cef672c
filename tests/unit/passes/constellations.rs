use super::*;
use crate::passes::PatternPass;
use crate::phrase::numerology::NumerologyClass;
use crate::render::raster::Shape;

fn params(phrase: &str, n: u32) -> PassParams<'_> {
    PassParams::new(NumerologyClass::new(n).unwrap(), phrase, 200)
}

#[test]
fn each_star_has_core_and_eight_rays() {
    let p = params("stars", 3);
    let marks = constellations().marks(&p);
    let stars = 2 * (4 + 3);
    let links = 2 * (4 + 3);
    assert_eq!(marks.len(), stars * (1 + RAYS) + links);
    assert!(matches!(marks[0].shape, Shape::Circle { .. }));
}

#[test]
fn links_point_two_ahead_with_low_alpha() {
    let pts: Vec<Point> = (0..5).map(|i| Point::new(i as f64, 0.0)).collect();
    let p = params("x", 1);
    let mut out = Vec::new();
    links(&p, &constellations().tuning, 0, &pts, &mut out);
    assert_eq!(out.len(), 5);
    let Shape::Line { from, to } = out[4].shape else {
        panic!("expected line");
    };
    assert_eq!(from.x, 4.0);
    assert_eq!(to.x, 1.0);
    assert!(out[0].paint.color().a < 50);
}

#[test]
fn stars_stay_inside_the_canvas_and_move_with_phrase() {
    let a = params("alpha", 9);
    let b = params("omega", 9);
    let pa = constellations().placements(&a);
    for (_, pl) in pa.iter().flatten() {
        assert!(pl.radius >= a.px(0.2) && pl.radius <= a.px(0.85) + 1e-9);
    }
    assert_ne!(pa, constellations().placements(&b));
}
