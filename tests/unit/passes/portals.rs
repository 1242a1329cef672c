use super::*;
use crate::passes::PatternPass;
use crate::phrase::numerology::NumerologyClass;

fn params(phrase: &str, n: u32) -> PassParams<'_> {
    PassParams::new(NumerologyClass::new(n).unwrap(), phrase, 200)
}

#[test]
fn rings_and_portals_follow_the_number() {
    let p = params("gateway", 7);
    let placed = dimensional_portals().placements(&p);
    assert_eq!(placed.len(), 2 + 7 % 4);
    let counts: Vec<usize> = placed.iter().map(Vec::len).collect();
    assert_eq!(counts, vec![5, 6, 7, 8, 9]);

    let p = params("gateway", 22);
    let placed = dimensional_portals().placements(&p);
    assert_eq!(placed.len(), 2 + 22 % 4);
    assert_eq!(placed[0].len(), 3 + 22 % 5);
}

#[test]
fn ring_radius_stays_within_jitter_band() {
    let p = params("portal", 6);
    for (slot, pl) in dimensional_portals().placements(&p).iter().flatten() {
        let base = p.px(0.25 + 0.12 * slot.layer as f64);
        assert!((pl.radius - base).abs() <= p.px(0.05) + 1e-9);
    }
}

#[test]
fn each_portal_is_an_ellipse_with_an_inner_echo() {
    let p = params("echo", 2);
    let marks = dimensional_portals().marks(&p);
    let portals: usize = dimensional_portals().placements(&p).iter().map(Vec::len).sum();
    assert_eq!(marks.len(), 2 * portals);
    let (Shape::Ellipse { radii: outer, .. }, Shape::Ellipse { radii: inner, .. }) =
        (&marks[0].shape, &marks[1].shape)
    else {
        panic!("expected ellipses");
    };
    assert!((inner.x - outer.x * 0.55).abs() < 1e-9);
    assert!(marks[1].paint.color().a < marks[0].paint.color().a);
}

#[test]
fn portals_move_with_phrase_of_same_class() {
    let a = params("alpha", 9);
    let b = params("omega", 9);
    assert_ne!(
        dimensional_portals().placements(&a),
        dimensional_portals().placements(&b)
    );
}
