use super::*;
use crate::phrase::letters::normalize_letters;

fn ring(phrase: &str) -> LetterRing {
    LetterRing::layout(&normalize_letters(phrase), Point::new(200.0, 200.0), 200.0)
}

#[test]
fn first_letter_sits_at_the_top() {
    let r = ring("BANANA");
    assert_eq!(r.len(), 3);
    let (c, p) = r.slots()[0];
    assert_eq!(c, 'B');
    assert!((p.x - 200.0).abs() < 1e-9);
    assert!((p.y - 130.0).abs() < 1e-9);
}

#[test]
fn letters_are_evenly_spaced_on_the_ring() {
    let r = ring("ABCD");
    let pts = r.points();
    // clockwise quarter turns: top, right, bottom, left
    assert!((pts[1].x - 270.0).abs() < 1e-9);
    assert!((pts[2].y - 270.0).abs() < 1e-9);
    assert!((pts[3].x - 130.0).abs() < 1e-9);
    for p in &pts {
        assert!((p.distance(Point::new(200.0, 200.0)) - 70.0).abs() < 1e-9);
    }
}

#[test]
fn stroke_joins_points_in_order_and_stays_open() {
    let r = ring("SIGIL");
    let stroke = r.sigil_stroke().unwrap();
    let Shape::Polyline(pts) = &stroke.shape else {
        panic!("expected polyline");
    };
    assert_eq!(pts, &r.points());
    assert_eq!(pts.len(), 4);
}

#[test]
fn single_letter_has_no_stroke() {
    let r = ring("aaaa");
    assert_eq!(r.len(), 1);
    assert!(r.sigil_stroke().is_none());
}

#[test]
fn drawing_with_builtin_glyphs_marks_the_canvas() {
    let mut canvas = Canvas::for_size(100).unwrap();
    for px in canvas.data_mut().chunks_exact_mut(4) {
        px.copy_from_slice(&[40, 40, 40, 255]);
    }
    let before = canvas.clone();
    let r = LetterRing::layout(&normalize_letters("RUNE"), canvas.center(), 100.0);
    r.composite_onto(&mut canvas, &GlyphSet::builtin()).unwrap();
    assert_ne!(canvas, before);
    assert!(canvas.is_opaque());
}
