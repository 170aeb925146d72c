use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::colliders::{Collider, SphereCollider};
use crate::interactions::{
    aabb_contact_point, determine_collision_points, edge_contact_point, face_contact_point, hull_contact_point,
    sphere_contact_point, vertex_contact_point, Collision, ContactGeometry, ContactSide,
};
use crate::models::{FrameOfReference, PhysicalObject};
use crate::utils::math_helpers::{add_vectors, scale_vector, subtract_vectors};
use crate::utils::FURTHEST_POINT_TOLERANCE;
use crate::assert_vector_eq;

fn side(frame: FrameOfReference, direction: (f64, f64, f64), furthest_points: Vec<(f64, f64, f64)>) -> ContactSide {
    ContactSide {
        direction,
        frame,
        model_points: furthest_points.clone(),
        furthest_points,
        is_convex_hull: true,
    }
}

fn geometry_for(objects: &[PhysicalObject], mtv: (f64, f64, f64), overlap: f64) -> (Collision, ContactGeometry) {
    let collision = Collision::between(objects, 0, 1, mtv, overlap).unwrap();
    let geometry = ContactGeometry::compute(&objects[0], &objects[1], &collision, FURTHEST_POINT_TOLERANCE);
    (collision, geometry)
}

#[test]
fn test_sphere_contact_point_uses_scaled_radius() {
    let sphere = SphereCollider::new(0.5).unwrap();
    let frame = FrameOfReference::new((1.0, 2.0, 3.0)).with_scale((1.0, 4.0, 2.0));
    let point = sphere_contact_point(&sphere, &frame, (0.0, 0.0, -1.0));
    assert_vector_eq(point, (1.0, 2.0, 1.0), 1e-12, None);
}

#[test]
fn test_aabb_contact_point_is_the_center() {
    let frame = FrameOfReference::new((4.0, -1.0, 0.5)).with_scale((3.0, 3.0, 3.0));
    assert_eq!(aabb_contact_point(&frame), (4.0, -1.0, 0.5));
}

#[test]
fn test_sphere_pair_shares_the_second_spheres_point() {
    let objects = vec![
        PhysicalObject::new_static(Collider::new_sphere(1.0).unwrap(), FrameOfReference::new((1.5, 0.0, 0.0))),
        PhysicalObject::new_static(Collider::new_sphere(1.0).unwrap(), FrameOfReference::new((0.0, 0.0, 0.0))),
    ];
    let (collision, geometry) = geometry_for(&objects, (1.0, 0.0, 0.0), 0.5);

    let points = determine_collision_points(&objects[0], &objects[1], &collision, &geometry);
    assert_vector_eq(points[0], (1.0, 0.0, 0.0), 1e-12, None);
    assert_vector_eq(points[1], (1.0, 0.0, 0.0), 1e-12, None);
}

#[test]
fn test_box_against_sphere_keeps_its_own_center() {
    let objects = vec![
        PhysicalObject::new_static(Collider::new_aabb(2.0, 2.0, 2.0).unwrap(), FrameOfReference::new((0.0, 2.0, 0.0))),
        PhysicalObject::new_static(Collider::new_sphere(1.5).unwrap(), FrameOfReference::new((0.0, 0.0, 0.0))),
    ];
    let (collision, geometry) = geometry_for(&objects, (0.0, 1.0, 0.0), 0.5);

    let points = determine_collision_points(&objects[0], &objects[1], &collision, &geometry);
    assert_vector_eq(points[0], (0.0, 2.0, 0.0), 1e-12, Some("box reports its center"));
    assert_vector_eq(points[1], (0.0, 1.5, 0.0), 1e-12, Some("sphere reports its surface point"));
}

#[test]
fn test_sphere_against_hull_is_shared() {
    let objects = vec![
        PhysicalObject::new_static(Collider::new_sphere(1.0).unwrap(), FrameOfReference::new((0.0, 1.8, 0.0))),
        PhysicalObject::new_static(Collider::new_cube_hull(2.0).unwrap(), FrameOfReference::new((0.0, 0.0, 0.0))),
    ];
    let (collision, geometry) = geometry_for(&objects, (0.0, 1.0, 0.0), 0.2);

    let points = determine_collision_points(&objects[0], &objects[1], &collision, &geometry);
    assert_vector_eq(points[0], (0.0, 0.8, 0.0), 1e-12, None);
    assert_eq!(points[0], points[1]);
}

#[test]
fn test_stacked_cubes_meet_at_face_center() {
    let objects = vec![
        PhysicalObject::new_static(Collider::new_cube_hull(2.0).unwrap(), FrameOfReference::new((0.5, 1.9, 0.0))),
        PhysicalObject::new_static(Collider::new_cube_hull(2.0).unwrap(), FrameOfReference::new((0.0, 0.0, 0.0))),
    ];
    let (collision, geometry) = geometry_for(&objects, (0.0, 1.0, 0.0), 0.1);
    assert_eq!(geometry.side1.furthest_points.len(), 4);
    assert_eq!(geometry.side2.furthest_points.len(), 4);

    let points = determine_collision_points(&objects[0], &objects[1], &collision, &geometry);
    // x spans [-1, 1] and [-0.5, 1.5]; trimming the extremes leaves -0.5 and 1
    assert_vector_eq(points[0], (0.25, 0.95, 0.0), 1e-12, None);
    assert_eq!(points[0], points[1]);
}

#[test]
fn test_hull_against_box_uses_hull_routine_for_hull_side() {
    let objects = vec![
        PhysicalObject::new_static(Collider::new_cube_hull(2.0).unwrap(), FrameOfReference::new((0.0, 1.9, 0.0))),
        PhysicalObject::new_static(Collider::new_aabb(2.0, 2.0, 2.0).unwrap(), FrameOfReference::new((0.0, 0.0, 0.0))),
    ];
    let (collision, geometry) = geometry_for(&objects, (0.0, 1.0, 0.0), 0.1);

    let points = determine_collision_points(&objects[0], &objects[1], &collision, &geometry);
    assert_vector_eq(points[0], (0.0, 0.95, 0.0), 1e-12, None);
    assert_vector_eq(points[1], (0.0, 0.0, 0.0), 1e-12, None);
}

#[test]
fn test_vertex_contact_prefers_the_first_side() {
    let frame1 = FrameOfReference::new((0.0, 2.0, 0.0));
    let frame2 = FrameOfReference::new((0.0, 0.0, 0.0));
    let tip = side(frame1, (0.0, -1.0, 0.0), vec![(0.0, -1.2, 0.0)]);
    let face = side(frame2, (0.0, 1.0, 0.0), vec![(-1.0, 1.0, -1.0), (1.0, 1.0, -1.0), (1.0, 1.0, 1.0), (-1.0, 1.0, 1.0)]);

    assert_vector_eq(hull_contact_point(&tip, &face), (0.0, 0.8, 0.0), 1e-12, None);
    assert_vector_eq(hull_contact_point(&face, &tip), (0.0, 0.8, 0.0), 1e-12, Some("falls back to the other side's vertex"));
    assert_eq!(vertex_contact_point((1.0, 1.0, 1.0), &frame1), (1.0, 3.0, 1.0));
}

#[test]
fn test_crossing_edges_meet_at_their_intersection() {
    let frame = FrameOfReference::default();
    let along_x = ((-1.0, 0.0, 0.0), (1.0, 0.0, 0.0));
    let along_z = ((0.0, 0.0, -1.0), (0.0, 0.0, 1.0));

    assert_vector_eq(edge_contact_point(along_x, &frame, along_z, &frame), (0.0, 0.0, 0.0), 1e-12, None);
}

#[test]
fn test_edge_contact_through_hull_sides() {
    let frame1 = FrameOfReference::new((0.0, 1.0, 0.0));
    let frame2 = FrameOfReference::new((0.0, -1.0, 0.0));
    let upper = side(frame1, (0.0, -1.0, 0.0), vec![(-1.0, -1.0, 0.5), (1.0, -1.0, 0.5)]);
    let lower = side(frame2, (0.0, 1.0, 0.0), vec![(0.5, 1.0, -1.0), (0.5, 1.0, 1.0)]);

    assert_vector_eq(hull_contact_point(&upper, &lower), (0.5, 0.0, 0.5), 1e-12, None);
}

#[test]
fn test_edges_meeting_at_a_shared_parameter_recover_the_meeting_point() {
    let mut rng = StdRng::seed_from_u64(7);
    let random_vector = |rng: &mut StdRng| -> (f64, f64, f64) {
        (rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0))
    };

    for _ in 0..200 {
        let meeting = random_vector(&mut rng);
        let direction1 = random_vector(&mut rng);
        let direction2 = random_vector(&mut rng);
        let t: f64 = rng.random_range(0.1..0.9);
        let frame1 = FrameOfReference::new(random_vector(&mut rng));
        let frame2 = FrameOfReference::new(random_vector(&mut rng));

        // Both lines pass through `meeting` at parameter t; edge points are stored relative to their frames
        let edge = |direction: (f64, f64, f64), frame: &FrameOfReference| {
            let start = subtract_vectors(meeting, scale_vector(direction, t));
            let end = add_vectors(start, direction);
            (subtract_vectors(start, frame.position), subtract_vectors(end, frame.position))
        };

        let point = edge_contact_point(edge(direction1, &frame1), &frame1, edge(direction2, &frame2), &frame2);
        assert_vector_eq(point, meeting, 1e-6, None);
    }
}

#[test]
fn test_parallel_edges_fall_back_to_first_edge_origin() {
    let frame1 = FrameOfReference::new((0.0, 1.0, 0.0));
    let frame2 = FrameOfReference::new((0.0, -1.0, 0.0));
    let edge = ((-1.0, 0.0, 0.0), (1.0, 0.0, 0.0));

    assert_vector_eq(edge_contact_point(edge, &frame1, edge, &frame2), (-1.0, 1.0, 0.0), 1e-12, None);
}

#[test]
fn test_face_contact_trims_extremes_per_axis() {
    let points1 = [(0.0, 0.0, 0.0)];
    let points2 = [(2.0, 0.0, 1.0), (4.0, 0.0, 3.0)];

    assert_vector_eq(face_contact_point(&points1, &points2), (2.0, 0.0, 1.0), 1e-12, None);
}

#[test]
fn test_face_contact_averages_two_points() {
    let points1 = [(0.0, 1.0, 2.0)];
    let points2 = [(2.0, 3.0, 4.0)];

    assert_vector_eq(face_contact_point(&points1, &points2), (1.0, 2.0, 3.0), 1e-12, None);
}
