use golden_borders::constants::GOLDEN_RATIO;
use golden_borders::equation::Cubic;
use golden_borders::*;

#[test]
fn test_window_coefficients() {
    let cubic = Cubic::build(RectSize::new(9.0, 6.0), 2.0, Mode::FromWindow).unwrap();

    assert_eq!(cubic.c3, 6.0);
    assert_eq!(cubic.c2, 7.0 * 9.0 + 2.0 * 6.0);
    assert_eq!(cubic.c1, 9.0 * ((3.0 - 2.0) * 6.0 + 2.0 * 9.0));
    assert_eq!(cubic.c0, (1.0 - 2.0) * 81.0 * 6.0);
}

#[test]
fn test_mat_coefficients() {
    let cubic = Cubic::build(RectSize::new(9.0, 6.0), 2.0, Mode::FromMat).unwrap();

    assert_eq!(cubic.c3, -4.0);
    assert_eq!(cubic.c2, 5.0 * 9.0 * 2.0 + 2.0 * 6.0 * 2.0);
    assert_eq!(cubic.c1, -2.0 * 81.0 * 2.0 - 3.0 * 54.0 * 2.0 + 54.0);
    assert_eq!(cubic.c0, 81.0 * 6.0 * (2.0 - 1.0));
}

#[test]
fn test_coefficients_order() {
    let cubic = Cubic::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(cubic.coefficients(), [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_eval_and_derivative() {
    // b^3 - 6b^2 + 11b - 6 = (b - 1)(b - 2)(b - 3)
    let cubic = Cubic::new(1.0, -6.0, 11.0, -6.0);

    assert_eq!(cubic.eval(1.0), 0.0);
    assert_eq!(cubic.eval(2.0), 0.0);
    assert_eq!(cubic.eval(0.0), -6.0);
    assert_eq!(cubic.derivative_at(0.0), 11.0);
    assert_eq!(cubic.derivative_at(2.0), -1.0);
}

#[test]
fn test_unit_ratio_has_zero_root() {
    // With a ratio of 1 the constant term vanishes in both directions
    let dims = RectSize::new(228.6, 152.4);
    assert_eq!(Cubic::build(dims, 1.0, Mode::FromWindow).unwrap().c0, 0.0);
    assert_eq!(Cubic::build(dims, 1.0, Mode::FromMat).unwrap().c0, 0.0);
}

#[test]
fn test_rejects_non_positive_dimensions() {
    for dims in [
        RectSize::new(0.0, 152.4),
        RectSize::new(228.6, 0.0),
        RectSize::new(-1.0, 152.4),
        RectSize::new(f64::NAN, 152.4),
    ] {
        match Cubic::build(dims, GOLDEN_RATIO, Mode::FromWindow) {
            Err(BorderError::InvalidDimensions { .. }) => {}
            other => panic!("Expected InvalidDimensions, got {:?}", other),
        }
    }
}

#[test]
fn test_rejects_non_positive_ratio() {
    let dims = RectSize::new(228.6, 152.4);
    for ratio in [0.0, -1.0, f64::INFINITY] {
        match Cubic::build(dims, ratio, Mode::FromMat) {
            Err(BorderError::InvalidRatio(_)) => {}
            other => panic!("Expected InvalidRatio, got {:?}", other),
        }
    }
}
