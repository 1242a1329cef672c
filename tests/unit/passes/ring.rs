use super::*;
use crate::phrase::numerology::NumerologyClass;
use crate::render::raster::Shape;

fn params(n: u32) -> PassParams<'static> {
    PassParams::new(NumerologyClass::new(n).unwrap(), "ring test", 100)
}

fn two_by_three() -> RingPass {
    fn layers(_: &PassParams<'_>) -> usize {
        2
    }
    fn items(_: &PassParams<'_>, _: usize) -> usize {
        3
    }
    fn position(p: &PassParams<'_>, t: &Tuning, s: Slot) -> Polar {
        Polar {
            angle: t.phase + crate::foundation::math::even_angle(s.item, s.items),
            radius: p.px(0.1) * (s.layer + 1) as f64 * t.radius_scale,
        }
    }
    fn color(_: &PassParams<'_>, t: &Tuning, _: Slot) -> Rgba8 {
        Rgba8::new(10, 20, 30, t.alpha)
    }
    fn shape(_: &PassParams<'_>, _: &Tuning, _: Slot, at: &Placement, c: Rgba8, out: &mut Vec<Mark>) {
        out.push(Mark::dot(at.at, 2.0, c));
    }
    fn links(_: &PassParams<'_>, _: &Tuning, _: usize, pts: &[Point], out: &mut Vec<Mark>) {
        out.push(Mark::stroke(
            Shape::Polyline(pts.to_vec()),
            Rgba8::opaque(0, 0, 0),
            1.0,
        ));
    }
    RingPass {
        name: "two_by_three",
        tuning: Tuning::default(),
        layers,
        items,
        position,
        color,
        shape,
        links: Some(links),
    }
}

#[test]
fn slot_progress_and_salts() {
    let s = Slot {
        layer: 2,
        item: 3,
        layers: 4,
        items: 4,
    };
    assert_eq!(s.t(), 0.75);
    assert_eq!(s.t_closed(), 1.0);
    assert_eq!(s.salt(7), 7 + 2003);

    let single = Slot {
        layer: 0,
        item: 0,
        layers: 1,
        items: 1,
    };
    assert_eq!(single.t_closed(), 0.0);
}

#[test]
fn placements_follow_layer_item_loop() {
    let pass = two_by_three();
    let p = params(5);
    let placed = pass.placements(&p);
    assert_eq!(placed.len(), 2);
    assert!(placed.iter().all(|l| l.len() == 3));

    let (slot, first) = placed[1][0];
    assert_eq!((slot.layer, slot.item), (1, 0));
    assert!(first.prev.is_none());
    assert!((first.at.x - (p.center.x + 20.0)).abs() < 1e-9);
    assert_eq!(placed[1][1].1.prev, Some(first.at));
}

#[test]
fn marks_include_shapes_then_links_per_layer() {
    let pass = two_by_three();
    let marks = pass.marks(&params(3));
    // (3 dots + 1 link) per layer
    assert_eq!(marks.len(), 8);
    assert!(matches!(marks[3].shape, Shape::Polyline(_)));
    assert!(matches!(marks[4].shape, Shape::Circle { .. }));
}

#[test]
fn tuning_scales_an_instance() {
    let mut pass = two_by_three();
    pass.tuning.radius_scale = 0.5;
    pass.tuning.alpha = 40;
    let p = params(3);
    let placed = pass.placements(&p);
    assert!((placed[0][0].1.radius - 5.0).abs() < 1e-9);
    assert_eq!(pass.marks(&p)[0].paint.color().a, 40);
    assert_eq!(PatternPass::name(&pass), "two_by_three");
}
