use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn unpremul_inverts_premul_for_opaque_and_half() {
    assert_eq!(unpremul_u8(200, 255), 200);
    let premul = mul_div255_u8(200, 128);
    let back = unpremul_u8(premul, 128);
    assert!(back.abs_diff(200) <= 1);
}

#[test]
fn polar_quarter_turn_points_down() {
    let p = polar(Point::new(10.0, 10.0), std::f64::consts::FRAC_PI_2, 5.0);
    assert!((p.x - 10.0).abs() < 1e-9);
    assert!((p.y - 15.0).abs() < 1e-9);
}

#[test]
fn even_angle_handles_empty_ring() {
    assert_eq!(even_angle(3, 0), 0.0);
    assert!((even_angle(1, 4) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn digit_sum_of_multi_digit_values() {
    assert_eq!(digit_sum(0), 0);
    assert_eq!(digit_sum(54), 9);
    assert_eq!(digit_sum(199), 19);
}
