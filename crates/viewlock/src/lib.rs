//! viewlock-rs: point-of-view camera tracking for hosted 3D scenes.
//!
//! Viewlock pins the host's camera to a skeletal joint of a selected actor,
//! frame after frame, with an operator-controlled tilt offset — and hides
//! exactly the actor's own head geometry so it cannot occlude the view,
//! restoring everything when tracking stops.
//!
//! # Quick Start
//!
//! ```no_run
//! use viewlock::*;
//!
//! fn main() -> Result<()> {
//!     // Initialize viewlock and hand it the host scene.
//!     init()?;
//!     install_scene(Scene::new());
//!
//!     // Start tracking an actor's head joint.
//!     let actor = find_actor("subject").expect("actor missing");
//!     start_tracking(actor)?;
//!
//!     // Drive it from the host's frame loop.
//!     loop {
//!         frame_tick();
//!     }
//! }
//! ```
//!
//! # Architecture
//!
//! - [`Scene`] models the slice of the host world this system borrows:
//!   actors with named joints and renderable parts, the camera rig objects,
//!   and introspectable items.
//! - A rig adapter places the camera uniformly over the two camera
//!   representations a scene may carry (parented dual-transform rig, or
//!   single-pivot orbit camera).
//! - The tracking controller owns the start/stop lifecycle, the tilt offset,
//!   and the settle-frame scheduler; the visibility suppressor owns the
//!   hidden-part set.

pub mod physics;
pub mod state;
pub mod suppress;
pub mod tracking;

// Re-export core types
pub use viewlock_core::{
    attribute::{clear_first_flag, try_get, try_set, FieldAccess},
    error::{Result, ViewlockError},
    options::TrackingOptions,
    scene::{
        Actor, ActorId, OrbitCameraControl, PoseController, Renderable, RenderableId, Scene,
        SceneItem, HEAD_JOINT_NAMES, VR_RIG_MARKER,
    },
    transform::{NodeId, Pose, TransformGraph},
};

// Re-export rig types
pub use viewlock_rig::{
    DualTransformAdapter, PivotOrbitAdapter, RigAdapter, RigKind, RigState, RigStateSnapshot,
};

pub use state::{with_context, with_context_mut, Context};
pub use suppress::{name_matches_head, VisibilitySuppressor, HEAD_KEYWORDS};
pub use tracking::TrackingController;

// Re-export glam types for convenience
pub use glam::{Quat, Vec3};

/// Initializes viewlock with default settings.
///
/// This must be called before any other viewlock functions.
pub fn init() -> Result<()> {
    state::init_context()?;
    log::info!("viewlock-rs initialized");
    Ok(())
}

/// Returns whether viewlock has been initialized.
pub fn is_initialized() -> bool {
    state::is_initialized()
}

/// Shuts down viewlock, stopping any active tracking.
pub fn shutdown() {
    state::shutdown_context();
    log::info!("viewlock-rs shut down");
}

/// Installs the host scene, replacing any previous one.
///
/// Active tracking on the previous scene is stopped first.
pub fn install_scene(scene: Scene) {
    with_context_mut(|ctx| {
        let Context { tracker, scene: old, .. } = &mut *ctx;
        tracker.stop(old);
        ctx.scene = scene;
    });
}

/// Runs `f` with mutable access to the installed scene.
///
/// This is how the host applies its own per-frame mutations (animation,
/// camera resets) between [`frame_tick`] calls.
pub fn with_scene_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Scene) -> R,
{
    with_context_mut(|ctx| f(&mut ctx.scene))
}

/// Finds an actor handle by exact name in the installed scene.
#[must_use]
pub fn find_actor(name: &str) -> Option<ActorId> {
    with_context(|ctx| ctx.scene.find_actor(name))
}

/// Starts point-of-view tracking on `actor`.
///
/// # Errors
///
/// Returns [`ViewlockError::NoHeadJointFound`] when the actor's skeleton has
/// no resolvable head joint.
pub fn start_tracking(actor: ActorId) -> Result<()> {
    with_context_mut(|ctx| {
        let Context { tracker, scene, .. } = &mut *ctx;
        tracker.start(scene, actor)
    })
}

/// Stops tracking, restoring visibility and the free camera's state.
pub fn stop_tracking() {
    with_context_mut(|ctx| {
        let Context { tracker, scene, .. } = &mut *ctx;
        tracker.stop(scene);
    });
}

/// Returns whether tracking is currently active.
#[must_use]
pub fn is_tracking() -> bool {
    with_context(|ctx| ctx.tracker.is_tracking())
}

/// Adjusts the camera tilt by `delta_degrees` about the lateral axis.
pub fn adjust_tilt(delta_degrees: f32) {
    with_context_mut(|ctx| {
        let Context { tracker, scene, .. } = &mut *ctx;
        tracker.adjust_tilt(scene, delta_degrees);
    });
}

/// Tilts the camera up by one operator step
/// ([`TrackingOptions::tilt_step_degrees`]).
pub fn tilt_up() {
    with_context_mut(|ctx| {
        let step = ctx.tracker.options().tilt_step_degrees;
        let Context { tracker, scene, .. } = &mut *ctx;
        tracker.adjust_tilt(scene, step);
    });
}

/// Tilts the camera down by one operator step.
pub fn tilt_down() {
    with_context_mut(|ctx| {
        let step = ctx.tracker.options().tilt_step_degrees;
        let Context { tracker, scene, .. } = &mut *ctx;
        tracker.adjust_tilt(scene, -step);
    });
}

/// Resets the camera tilt to zero.
pub fn reset_tilt() {
    with_context_mut(|ctx| {
        let Context { tracker, scene, .. } = &mut *ctx;
        tracker.reset_tilt(scene);
    });
}

/// Performs one iteration of the tracking loop.
///
/// Call once per frame from the host's main loop.
pub fn frame_tick() {
    with_context_mut(|ctx| {
        let Context { tracker, scene, .. } = &mut *ctx;
        tracker.on_frame(scene);
    });
}

/// Replaces the tracking options.
pub fn set_options(options: TrackingOptions) {
    with_context_mut(|ctx| ctx.tracker.set_options(options));
}

/// Returns a copy of the current tracking options.
#[must_use]
pub fn options() -> TrackingOptions {
    with_context(|ctx| ctx.tracker.options().clone())
}

/// Clears the scan flags on every physics-bone item in the installed scene.
///
/// Returns the number of items modified.
pub fn disable_physics_editors() -> usize {
    with_context_mut(|ctx| physics::disable_physics_editors(&mut ctx.scene))
}
