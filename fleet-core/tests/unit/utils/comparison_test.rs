use super::*;

#[test]
fn can_compare_floats_with_nan() {
    assert_eq!(compare_floats(1., 2.), Ordering::Less);
    assert_eq!(compare_floats(Float::NAN, 2.), Ordering::Greater);
    assert_eq!(compare_floats(2., Float::NAN), Ordering::Less);
    assert_eq!(compare_floats(Float::NAN, Float::NAN), Ordering::Equal);
}

#[test]
fn can_check_closeness() {
    assert!(is_close(0.1 + 0.2, 0.3, 1E-9));
    assert!(is_close(1E9, 1E9 + 0.5, 1E-9));
    assert!(!is_close(0.1, 0.2, 1E-9));
}
