use super::*;

fn class(n: u32) -> NumerologyClass {
    NumerologyClass::new(n).unwrap()
}

#[test]
fn form_follows_class_divisibility() {
    assert_eq!(SacredForm::for_class(class(3)), SacredForm::TriangleTrio);
    assert_eq!(SacredForm::for_class(class(6)), SacredForm::TriangleTrio);
    assert_eq!(SacredForm::for_class(class(33)), SacredForm::TriangleTrio);
    assert_eq!(SacredForm::for_class(class(4)), SacredForm::Diamond);
    assert_eq!(SacredForm::for_class(class(8)), SacredForm::Diamond);
    assert_eq!(SacredForm::for_class(class(5)), SacredForm::Pentagon);
    assert_eq!(SacredForm::for_class(class(1)), SacredForm::Hexagon);
    assert_eq!(SacredForm::for_class(class(7)), SacredForm::Hexagon);
    assert_eq!(SacredForm::for_class(class(11)), SacredForm::Hexagon);
    assert_eq!(SacredForm::for_class(class(22)), SacredForm::Hexagon);
}

#[test]
fn triangle_trio_emits_three_triangles() {
    let shapes = SacredForm::TriangleTrio.shapes(Point::new(50.0, 50.0), 10.0, 0.0);
    assert_eq!(shapes.len(), 3);
    for s in &shapes {
        let Shape::Polygon(v) = s else {
            panic!("expected polygon");
        };
        assert_eq!(v.len(), 3);
    }
    assert_ne!(shapes[0], shapes[1]);
}

#[test]
fn diamond_is_narrower_than_tall() {
    let c = Point::new(0.0, 0.0);
    let Shape::Polygon(v) = &SacredForm::Diamond.shapes(c, 10.0, 0.0)[0] else {
        panic!("expected polygon");
    };
    assert_eq!(v.len(), 4);
    assert!((v[0].x - 6.0).abs() < 1e-9);
    assert!((v[1].y - 10.0).abs() < 1e-9);
}

#[test]
fn overlay_is_the_same_pass_scaled_down() {
    let p = PassParams::new(class(4), "sacred", 200);
    let base = sacred_geometry();
    let overlay = sacred_geometry_overlay();
    assert_eq!(base.name, "sacred_geometry");
    assert_eq!(overlay.name, "sacred_geometry_overlay");

    let a = base.placements(&p);
    let b = overlay.placements(&p);
    assert_eq!(a.len(), b.len());
    let ra = a[2][0].1.radius;
    let rb = b[2][0].1.radius;
    assert!((rb - 0.6 * ra).abs() < 1e-9);

    let marks = crate::passes::PatternPass::marks(&overlay, &p);
    assert!(marks.iter().all(|m| m.paint.color().a == 80));
}

#[test]
fn item_counts_grow_per_layer() {
    let p = PassParams::new(class(5), "x", 100);
    let counts: Vec<usize> = sacred_geometry()
        .placements(&p)
        .iter()
        .map(Vec::len)
        .collect();
    assert_eq!(counts, vec![5, 8, 11]);
}
