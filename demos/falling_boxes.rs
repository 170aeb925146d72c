// demos/falling_boxes.rs
//
// Run with `RUST_LOG=debug cargo run --example falling_boxes` to see per-step summaries.

use rs_rigid_dynamics::colliders::Collider;
use rs_rigid_dynamics::dynamics::{FixedTimeStep, PhysicsSystem};
use rs_rigid_dynamics::interactions::Collision;
use rs_rigid_dynamics::models::{FrameOfReference, PhysicalObject};
use rs_rigid_dynamics::utils::{PhysicsError, SimulationConfig};

const GROUND: usize = 0;

/// A minimal narrow phase: every object against the ground slab's top face
fn detect_ground_contacts(objects: &[PhysicalObject]) -> Vec<Collision> {
    let Some(ground) = objects.get(GROUND) else {
        return Vec::new();
    };
    let Collider::Aabb(slab) = &ground.collider else {
        return Vec::new();
    };
    let (_, ground_max) = slab.world_bounds(&ground.frame);
    let ground_top = ground_max.1;

    objects
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != GROUND)
        .filter_map(|(index, object)| {
            let bounds = object.collider.generate_minimum_aabb(&object.frame);
            let overlap = ground_top - (bounds.centroid.1 - bounds.half_extents.1);
            if overlap > 0.0 {
                Collision::between(objects, index, GROUND, (0.0, 1.0, 0.0), overlap).ok()
            } else {
                None
            }
        })
        .collect()
}

fn main() -> Result<(), PhysicsError> {
    env_logger::init();

    let config = SimulationConfig::new(None, Some(0.6), Some(0.8), Some(0.5), None, None);
    let mut system = PhysicsSystem::new(config)?;
    system.apply_gravity();

    system.add_object(PhysicalObject::new_static(
        Collider::new_aabb(40.0, 2.0, 40.0)?,
        FrameOfReference::new((0.0, -1.0, 0.0)),
    ));
    let crate_box = system.add_object(PhysicalObject::new_dynamic(
        Collider::new_cube_hull(1.0)?,
        FrameOfReference::new((-2.0, 4.0, 0.0)).with_rotation((0.0, 1.0, 0.0), 0.3),
        5.0,
        &config,
    )?);
    let plank = system.add_object(PhysicalObject::new_dynamic(
        Collider::new_rectangular_hull(3.0, 0.5, 1.0)?,
        FrameOfReference::new((2.0, 6.0, 0.0)),
        8.0,
        &config,
    )?);
    let ball = system.add_object(PhysicalObject::new_dynamic(
        Collider::new_sphere(0.5)?,
        FrameOfReference::new((0.0, 3.0, 0.0)),
        1.0,
        &config,
    )?);
    if let Some(body) = system.object_mut(ball).and_then(PhysicalObject::body_mut) {
        body.velocity = (1.5, 0.0, 0.0);
    }

    let mut clock = FixedTimeStep::new(1.0 / 60.0);
    for frame in 0..=240 {
        let resolved = system.step_with(&mut clock, detect_ground_contacts)?;
        if frame % 30 == 0 {
            println!("Frame {} ({} contacts resolved)", frame, resolved);
            for (name, index) in [("box", crate_box), ("plank", plank), ("ball", ball)] {
                if let Some(object) = system.object(index) {
                    let velocity = object.body().map_or((0.0, 0.0, 0.0), |body| body.velocity);
                    println!(
                        "  {:<5} position ({:>6.3}, {:>6.3}, {:>6.3}) velocity ({:>6.3}, {:>6.3}, {:>6.3})",
                        name,
                        object.frame.position.0,
                        object.frame.position.1,
                        object.frame.position.2,
                        velocity.0,
                        velocity.1,
                        velocity.2
                    );
                }
            }
        }
    }
    Ok(())
}
