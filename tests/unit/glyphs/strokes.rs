use super::*;

#[test]
fn every_capital_has_strokes_inside_the_unit_cell() {
    for c in 'A'..='Z' {
        let strokes = letter_strokes(c).unwrap();
        assert!(!strokes.is_empty(), "{c}");
        for s in strokes {
            assert!(s.len() >= 2, "{c} has a degenerate stroke");
            for &(u, v) in s.iter() {
                assert!((0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v), "{c}");
            }
        }
    }
}

#[test]
fn lowercase_maps_to_capitals_and_others_have_none() {
    assert_eq!(letter_strokes('q'), letter_strokes('Q'));
    assert!(letter_strokes('7').is_none());
    assert!(letter_strokes('é').is_none());
    assert!(placed_strokes(' ', Point::ZERO, 10.0).is_empty());
}

#[test]
fn placed_strokes_are_centered_on_the_point() {
    let center = Point::new(100.0, 50.0);
    let strokes = placed_strokes('T', center, 20.0);
    // top bar spans the cell width
    assert_eq!(strokes[0][0], Point::new(94.0, 40.0));
    assert_eq!(strokes[0][1], Point::new(106.0, 40.0));
    // stem ends on the bottom edge
    assert_eq!(strokes[1][1], Point::new(100.0, 60.0));
}

#[test]
fn distinct_letters_look_different() {
    let all: Vec<_> = ('A'..='Z').map(|c| letter_strokes(c).unwrap()).collect();
    for i in 0..all.len() {
        for j in (i + 1)..all.len() {
            assert_ne!(all[i], all[j]);
        }
    }
}
