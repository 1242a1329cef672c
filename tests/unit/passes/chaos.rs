use super::*;
use crate::phrase::numerology::NumerologyClass;
use crate::render::raster::Shape;

fn params(phrase: &str) -> PassParams<'_> {
    PassParams::new(NumerologyClass::new(7).unwrap(), phrase, 150)
}

#[test]
fn segment_count_tracks_hash_and_class() {
    let p = params("chaos");
    let marks = ChaosGrid.marks(&p);
    assert_eq!(marks.len(), ChaosGrid::count(&p));
    assert!((19..=31).contains(&marks.len()));
}

#[test]
fn segments_start_on_cell_centers() {
    let p = params("grid alignment");
    let cell = ChaosGrid::cell(&p);
    for m in ChaosGrid.marks(&p) {
        let Shape::Line { from, .. } = m.shape else {
            panic!("chaos grid emits lines");
        };
        let fx = from.x / cell - 0.5;
        assert!((fx - fx.round()).abs() < 1e-9, "x={} not centered", from.x);
        assert_eq!(m.paint.color().a, ALPHA);
    }
}

#[test]
fn layout_depends_on_phrase_not_only_class() {
    // same class (7), different phrases
    let a = ChaosGrid.marks(&params("GGG"));
    let b = ChaosGrid.marks(&params("P"));
    assert_ne!(a, b);
    assert_eq!(ChaosGrid.marks(&params("GGG")), a);
}
