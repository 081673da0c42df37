//! Demo application showing basic viewlock-rs usage.
//!
//! Builds a small host scene with an orbit camera and one actor, starts
//! point-of-view tracking, animates the actor for a few frames, tilts the
//! camera, and stops.

use viewlock::*;

fn main() -> Result<()> {
    env_logger::init();

    // Initialize viewlock
    init()?;

    // Build a host scene: an orbit camera plus an actor with a head joint
    // and a handful of renderable parts.
    let mut scene = Scene::new();
    scene.set_orbit_control(OrbitCameraControl::new(
        Vec3::new(0.0, 1.0, 4.0),
        Vec3::new(10.0, 180.0, 0.0),
        Vec3::new(0.0, 0.0, -4.0),
    ));

    let root = scene
        .graph_mut()
        .add_root("subject_root", Vec3::ZERO, Quat::IDENTITY);
    let head = scene.graph_mut().add_child(
        root,
        "cf_J_Head",
        Vec3::new(0.0, 1.5, 0.0),
        Quat::IDENTITY,
    );
    let mut actor = Actor::new("subject", root);
    actor.add_joint("cf_J_Head", head);
    actor.add_renderable(Renderable::new("cf_o_head", true, Vec3::new(0.0, 1.5, 0.0)));
    actor.add_renderable(Renderable::new("cf_o_hair_b", true, Vec3::new(0.0, 1.6, -0.1)));
    actor.add_renderable(Renderable::new("cf_o_body", true, Vec3::new(0.0, 0.7, 0.0)));
    scene.add_actor(actor);

    install_scene(scene);

    // Start tracking the actor's head.
    let subject = find_actor("subject").expect("actor missing");
    start_tracking(subject)?;
    println!("tracking: {}", is_tracking());

    // Animate: slide the actor sideways and let the camera follow.
    for frame in 0..10 {
        with_scene_mut(|scene| {
            let root = scene
                .actor(subject)
                .map(Actor::body_root)
                .expect("actor missing");
            scene
                .graph_mut()
                .set_local_position(root, Vec3::new(0.1 * frame as f32, 0.0, 0.0));
        });
        frame_tick();
    }

    // Operator tilts the view down a step, then resets.
    adjust_tilt(-10.0);
    frame_tick();
    reset_tilt();

    with_context(|ctx| {
        let control = ctx.scene.orbit_control().expect("orbit control missing");
        println!("camera anchor: {}", control.target_pos);
        println!("camera angle:  {}", control.camera_angle);
    });

    // Stop tracking: head geometry and the free camera come back.
    stop_tracking();
    println!("tracking: {}", is_tracking());

    // Cleanup
    shutdown();

    Ok(())
}
