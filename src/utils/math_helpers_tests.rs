use crate::assert_vector_eq;
use crate::utils::math_helpers::*;

#[test]
fn test_cross_product_follows_right_hand_rule() {
    assert_vector_eq(cross_product((1.0, 0.0, 0.0), (0.0, 1.0, 0.0)), (0.0, 0.0, 1.0), 1e-12, None);
    assert_vector_eq(cross_product((0.0, 1.0, 0.0), (1.0, 0.0, 0.0)), (0.0, 0.0, -1.0), 1e-12, None);
}

#[test]
fn test_normalize_zero_vector_returns_zero() {
    assert_eq!(normalize_vector((0.0, 0.0, 0.0)), (0.0, 0.0, 0.0));
    assert_eq!(normalize_vector((1e-15, 0.0, 0.0)), (0.0, 0.0, 0.0));
}

#[test]
fn test_project_vector_ignores_axis_length() {
    let v = (3.0, 4.0, 5.0);
    assert_vector_eq(project_vector(v, (0.0, 2.0, 0.0)), (0.0, 4.0, 0.0), 1e-12, None);
    assert_vector_eq(project_vector(v, (0.0, -0.5, 0.0)), (0.0, 4.0, 0.0), 1e-12, None);
    assert_eq!(project_vector(v, (0.0, 0.0, 0.0)), (0.0, 0.0, 0.0));
}

#[test]
fn test_reject_vector_removes_axis_component() {
    let rejected = reject_vector((3.0, 4.0, 5.0), (1.0, 0.0, 0.0));
    assert_vector_eq(rejected, (0.0, 4.0, 5.0), 1e-12, Some("x component should be removed"));
    assert!(dot_product(rejected, (1.0, 0.0, 0.0)).abs() < 1e-12);
}
