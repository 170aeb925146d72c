use std::f64::consts::FRAC_PI_2;

use crate::colliders::{AabbCollider, Collider, ConvexHullCollider, SphereCollider};
use crate::models::FrameOfReference;
use crate::utils::math_helpers::normalize_vector;
use crate::utils::PhysicsError;
use crate::{assert_float_eq, assert_vector_eq};

#[test]
fn test_furthest_points_cube_face() {
    let cube = ConvexHullCollider::new_cube(2.0).unwrap();
    let furthest = ConvexHullCollider::furthest_points(cube.points(), (0.0, 1.0, 0.0));

    assert_eq!(furthest.len(), 4, "a face query should return 4 vertices");
    for point in &furthest {
        assert_float_eq(point.1, 1.0, 1e-12, Some("all returned vertices lie on y = +1"));
    }
}

#[test]
fn test_furthest_points_cube_vertex() {
    let cube = ConvexHullCollider::new_cube(2.0).unwrap();
    let furthest = ConvexHullCollider::furthest_points(cube.points(), normalize_vector((1.0, 1.0, 1.0)));

    assert_eq!(furthest, vec![(1.0, 1.0, 1.0)]);
}

#[test]
fn test_furthest_points_cube_edge() {
    let cube = ConvexHullCollider::new_cube(2.0).unwrap();
    let furthest = ConvexHullCollider::furthest_points(cube.points(), normalize_vector((1.0, 1.0, 0.0)));

    assert_eq!(furthest.len(), 2);
    assert!(furthest.contains(&(1.0, 1.0, 1.0)));
    assert!(furthest.contains(&(1.0, 1.0, -1.0)));
}

#[test]
fn test_furthest_points_tolerates_rounding_after_rotation() {
    let cube = ConvexHullCollider::new_cube(2.0).unwrap();
    // A full turn leaves tiny rounding errors in the oriented points
    let frame = FrameOfReference::default().with_rotation((0.3, 1.0, -0.2), 2.0 * std::f64::consts::PI);
    let oriented = cube.oriented_model_points(&frame);

    let furthest = ConvexHullCollider::furthest_points(&oriented, (0.0, 1.0, 0.0));
    assert_eq!(furthest.len(), 4);
}

#[test]
fn test_furthest_points_empty_input() {
    assert!(ConvexHullCollider::furthest_points(&[], (1.0, 0.0, 0.0)).is_empty());
}

#[test]
fn test_oriented_points_apply_rotation_scale_and_translation() {
    let hull = ConvexHullCollider::new(vec![(1.0, 0.0, 0.0)], vec![(1.0, 0.0, 0.0)], vec![(0.0, 1.0, 0.0)]).unwrap();
    let frame = FrameOfReference::new((10.0, 0.0, 0.0))
        .with_scale((2.0, 1.0, 1.0))
        .with_rotation((0.0, 0.0, 1.0), FRAC_PI_2);

    assert_vector_eq(hull.oriented_model_points(&frame)[0], (0.0, 2.0, 0.0), 1e-12, Some("scaled then rotated"));
    assert_vector_eq(hull.oriented_world_points(&frame)[0], (10.0, 2.0, 0.0), 1e-12, Some("plus translation"));
    // Directions are only rotated
    assert_vector_eq(hull.oriented_axes(&frame)[0], (0.0, 1.0, 0.0), 1e-12, None);
    assert_vector_eq(hull.oriented_edges(&frame)[0], (-1.0, 0.0, 0.0), 1e-12, None);
}

#[test]
fn test_generate_minimum_aabb_of_rotated_cube() {
    let cube = ConvexHullCollider::new_cube(2.0).unwrap();
    let frame = FrameOfReference::new((1.0, 2.0, 3.0)).with_rotation((0.0, 0.0, 1.0), std::f64::consts::FRAC_PI_4);
    let aabb = cube.generate_minimum_aabb(&frame);

    let diagonal = 2.0_f64.sqrt();
    assert_vector_eq(aabb.half_extents, (diagonal, diagonal, 1.0), 1e-10, None);
    assert_vector_eq(aabb.centroid, (1.0, 2.0, 3.0), 1e-10, None);
}

#[test]
fn test_minimum_aabb_is_placed_in_world_space() {
    let frame = FrameOfReference::new((5.0, -2.0, 1.0));
    let hull = Collider::ConvexHull(ConvexHullCollider::new_cube(2.0).unwrap());
    let sphere = Collider::Sphere(SphereCollider::new(0.5).unwrap());

    let hull_box = hull.generate_minimum_aabb(&frame);
    let (min, max) = hull_box.world_bounds(&FrameOfReference::default());
    assert_vector_eq(min, (4.0, -3.0, 0.0), 1e-12, Some("hull box min"));
    assert_vector_eq(max, (6.0, -1.0, 2.0), 1e-12, Some("hull box max"));

    let sphere_box = sphere.generate_minimum_aabb(&FrameOfReference::new((5.0, -0.5, 1.0)));
    let (min, max) = sphere_box.world_bounds(&FrameOfReference::default());
    assert_vector_eq(min, (4.5, -1.0, 0.5), 1e-12, Some("sphere box min"));
    assert_vector_eq(max, (5.5, 0.0, 1.5), 1e-12, Some("sphere box max"));

    let origin = FrameOfReference::default();
    assert!(hull_box.overlaps(&origin, &sphere_box, &origin), "boxes touching at y = -1 overlap");

    // Re-applying the source frame would shift the box a second time
    let (shifted_min, _) = hull_box.world_bounds(&frame);
    assert_vector_eq(shifted_min, (9.0, -5.0, 1.0), 1e-12, None);
}

#[test]
fn test_rectangular_hull_dimensions() {
    let hull = ConvexHullCollider::new_rectangular(0.8, 2.0, 0.8).unwrap();
    assert_eq!(hull.points().len(), 8);
    assert_eq!(hull.axes().len(), 3);
    assert_eq!(hull.edges().len(), 3);
    assert!(hull.points().contains(&(0.4, 1.0, 0.4)));
    assert!(hull.points().contains(&(-0.4, -1.0, -0.4)));
}

#[test]
fn test_aabb_to_convex_hull_respects_centroid() {
    let aabb = AabbCollider::with_centroid(2.0, 4.0, 6.0, (1.0, 0.0, 0.0)).unwrap();
    let hull = aabb.to_convex_hull();

    assert!(hull.points().contains(&(2.0, 2.0, 3.0)));
    assert!(hull.points().contains(&(0.0, -2.0, -3.0)));
}

#[test]
fn test_aabb_world_bounds_and_overlap() {
    let a = AabbCollider::new(2.0, 2.0, 2.0).unwrap();
    let frame_a = FrameOfReference::default().with_scale((2.0, 1.0, 1.0));
    let (min, max) = a.world_bounds(&frame_a);
    assert_vector_eq(min, (-2.0, -1.0, -1.0), 1e-12, None);
    assert_vector_eq(max, (2.0, 1.0, 1.0), 1e-12, None);

    let near = FrameOfReference::new((3.5, 0.0, 0.0));
    let far = FrameOfReference::new((3.5, 2.5, 0.0));
    assert!(a.overlaps(&frame_a, &a, &near));
    assert!(!a.overlaps(&frame_a, &a, &far));
}

#[test]
fn test_sphere_scaled_radius_uses_largest_scale() {
    let sphere = SphereCollider::new(0.5).unwrap();
    let frame = FrameOfReference::default().with_scale((1.0, 3.0, 2.0));
    assert_float_eq(sphere.scaled_radius(&frame), 1.5, 1e-12, None);
}

#[test]
fn test_invalid_dimensions_are_rejected() {
    assert_eq!(SphereCollider::new(0.0), Err(PhysicsError::InvalidDimension));
    assert_eq!(AabbCollider::new(1.0, -1.0, 1.0), Err(PhysicsError::InvalidDimension));
    assert_eq!(ConvexHullCollider::new(vec![], vec![], vec![]), Err(PhysicsError::InvalidDimension));
    assert!(ConvexHullCollider::new_cube(f64::NAN).is_err());
}

#[test]
fn test_collider_as_convex_hull() {
    assert!(Collider::new_sphere(1.0).unwrap().as_convex_hull().is_none());

    let from_box = Collider::new_aabb(2.0, 2.0, 2.0).unwrap();
    assert_eq!(from_box.as_convex_hull().unwrap().points().len(), 8);

    let hull = Collider::new_cube_hull(1.0).unwrap();
    assert!(hull.is_convex_hull());
    assert_eq!(hull.as_convex_hull().unwrap().points(), ConvexHullCollider::new_cube(1.0).unwrap().points());
}
