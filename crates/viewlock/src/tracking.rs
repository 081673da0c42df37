//! Per-frame tracking orchestration.
//!
//! The controller is a two-state machine (idle/active). Activation resolves
//! the target's head joint, probes the rig kind once, snapshots the free
//! camera, and applies suppression; every frame after that samples the head
//! pose and hands it to the rig adapter. Deactivation unwinds completely
//! from any point: visibility first, then the rig snapshot.

use viewlock_core::error::Result;
use viewlock_core::options::TrackingOptions;
use viewlock_core::scene::{ActorId, Scene};
use viewlock_rig::{adapter_for, probe_rig_kind, RigAdapter, RigKind, RigStateSnapshot};

use crate::suppress::VisibilitySuppressor;

struct Activation {
    actor: ActorId,
    rig_kind: RigKind,
    adapter: Box<dyn RigAdapter>,
    rig_warned: bool,
}

/// Drives point-of-view tracking for one selected actor at a time.
pub struct TrackingController {
    activation: Option<Activation>,
    tilt_degrees: f32,
    settle_remaining: u32,
    snapshot: RigStateSnapshot,
    suppressor: VisibilitySuppressor,
    options: TrackingOptions,
}

impl Default for TrackingController {
    fn default() -> Self {
        Self::new(TrackingOptions::default())
    }
}

impl TrackingController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new(options: TrackingOptions) -> Self {
        Self {
            activation: None,
            tilt_degrees: 0.0,
            settle_remaining: 0,
            snapshot: RigStateSnapshot::new(),
            suppressor: VisibilitySuppressor::new(),
            options,
        }
    }

    /// Returns whether tracking is active.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.activation.is_some()
    }

    /// Returns the actor currently tracked, if any.
    #[must_use]
    pub fn tracked_actor(&self) -> Option<ActorId> {
        self.activation.as_ref().map(|a| a.actor)
    }

    /// Returns the current tilt offset in degrees.
    #[must_use]
    pub fn tilt_degrees(&self) -> f32 {
        self.tilt_degrees
    }

    /// Returns the rig kind of the current activation, if any.
    #[must_use]
    pub fn rig_kind(&self) -> Option<RigKind> {
        self.activation.as_ref().map(|a| a.rig_kind)
    }

    /// Returns the active options.
    #[must_use]
    pub fn options(&self) -> &TrackingOptions {
        &self.options
    }

    /// Replaces the options. Takes effect from the next operation.
    pub fn set_options(&mut self, options: TrackingOptions) {
        self.options = options;
    }

    /// Starts tracking `actor`.
    ///
    /// Fails with [`NoHeadJointFound`](viewlock_core::ViewlockError::NoHeadJointFound)
    /// when the actor's skeleton lacks a resolvable head joint; the previous
    /// activation (if any) is stopped first either way, so switching actors
    /// restores the previous actor's visibility before the new actor is
    /// touched.
    pub fn start(&mut self, scene: &mut Scene, actor: ActorId) -> Result<()> {
        if self.is_tracking() {
            self.stop(scene);
        }

        // Validate the head joint before mutating anything.
        scene.head_pose(actor)?;

        let rig_kind = probe_rig_kind(scene);
        if rig_kind == RigKind::PivotOrbit {
            self.snapshot.capture(scene);
        }

        self.activation = Some(Activation {
            actor,
            rig_kind,
            adapter: adapter_for(rig_kind),
            rig_warned: false,
        });
        log::info!("tracking started (rig: {rig_kind:?})");

        if self.options.hide_head {
            self.suppressor
                .suppress(scene, actor, self.options.proximity_threshold);
        }

        self.settle_remaining = self.options.settle_frames;
        self.tick(scene);
        Ok(())
    }

    /// Stops tracking and unwinds: suppressed visibility is restored, the
    /// rig snapshot (if captured) is written back, tilt resets to zero.
    ///
    /// No-op when idle; safe to call mid-activation.
    pub fn stop(&mut self, scene: &mut Scene) {
        if self.activation.take().is_none() {
            return;
        }
        self.suppressor.restore(scene);
        self.snapshot.restore(scene);
        self.snapshot.release();
        self.tilt_degrees = 0.0;
        self.settle_remaining = 0;
        log::info!("tracking stopped");
    }

    /// Samples the head pose and places the camera. One frame's work.
    pub fn tick(&mut self, scene: &mut Scene) {
        let Some(activation) = self.activation.as_mut() else {
            return;
        };
        let Ok(pose) = scene.head_pose(activation.actor) else {
            log::debug!("tick skipped: head joint unresolvable this frame");
            return;
        };
        let applied = activation.adapter.apply(scene, pose, self.tilt_degrees);
        if !applied && !activation.rig_warned {
            log::warn!("camera rig unavailable; tracking is inert until the scene stabilizes");
            activation.rig_warned = true;
        }
    }

    /// Per-frame scheduler hook.
    ///
    /// Ticks while active when following every frame, otherwise only while
    /// settle ticks remain from a recent start or tilt change.
    pub fn on_frame(&mut self, scene: &mut Scene) {
        if !self.is_tracking() {
            return;
        }
        if self.options.follow_every_frame || self.settle_remaining > 0 {
            self.tick(scene);
        }
        self.settle_remaining = self.settle_remaining.saturating_sub(1);
    }

    /// Adds `delta` degrees of tilt. Wrap-free: the offset is unbounded.
    ///
    /// While active, queues settle frames and fires one synchronous tick so
    /// the change is visible even when per-frame following is off.
    pub fn adjust_tilt(&mut self, scene: &mut Scene, delta: f32) {
        self.tilt_degrees += delta;
        log::info!("camera tilt: {}", self.tilt_degrees);
        if self.is_tracking() {
            self.settle_remaining = self.options.settle_frames;
            self.tick(scene);
        }
    }

    /// Resets the tilt offset to zero, with the same settle behavior as
    /// [`adjust_tilt`](Self::adjust_tilt).
    pub fn reset_tilt(&mut self, scene: &mut Scene) {
        self.tilt_degrees = 0.0;
        log::info!("camera tilt reset");
        if self.is_tracking() {
            self.settle_remaining = self.options.settle_frames;
            self.tick(scene);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};
    use viewlock_core::attribute::try_get;
    use viewlock_core::scene::{Actor, OrbitCameraControl, Renderable};
    use viewlock_core::ViewlockError;

    const HEAD: Vec3 = Vec3::new(0.0, 1.5, 0.0);

    fn add_actor(scene: &mut Scene, name: &str, origin: Vec3) -> ActorId {
        let root = scene
            .graph_mut()
            .add_root(format!("{name}_root"), origin, Quat::IDENTITY);
        let head = scene
            .graph_mut()
            .add_child(root, "cf_J_Head", HEAD, Quat::from_rotation_y(0.3));
        let mut actor = Actor::new(name, root);
        actor.add_joint("cf_J_Head", head);
        actor.add_renderable(Renderable::new("cf_o_head", true, origin + HEAD));
        actor.add_renderable(Renderable::new(
            "cf_o_body",
            true,
            origin + Vec3::new(0.0, 0.7, 0.0),
        ));
        scene.add_actor(actor)
    }

    fn orbit_scene() -> (Scene, ActorId) {
        let mut scene = Scene::new();
        scene.set_orbit_control(OrbitCameraControl::default());
        let actor = add_actor(&mut scene, "subject", Vec3::ZERO);
        (scene, actor)
    }

    fn headless_actor(scene: &mut Scene) -> ActorId {
        let root = scene
            .graph_mut()
            .add_root("no_head_root", Vec3::ZERO, Quat::IDENTITY);
        scene.add_actor(Actor::new("headless", root))
    }

    #[test]
    fn test_start_requires_head_joint() {
        let (mut scene, _) = orbit_scene();
        let headless = headless_actor(&mut scene);

        let mut controller = TrackingController::default();
        let err = controller.start(&mut scene, headless).unwrap_err();
        assert!(matches!(err, ViewlockError::NoHeadJointFound(_)));
        assert!(!controller.is_tracking());
    }

    #[test]
    fn test_start_places_camera_and_hides_head() {
        let (mut scene, actor) = orbit_scene();
        let mut controller = TrackingController::default();
        controller.start(&mut scene, actor).unwrap();

        assert!(controller.is_tracking());
        assert_eq!(controller.rig_kind(), Some(RigKind::PivotOrbit));

        let head = scene.head_pose(actor).unwrap();
        let control = scene.orbit_control().unwrap();
        assert!((control.target_pos - head.position).length() < 1e-5);
        assert_eq!(try_get::<Vec3>(control, "camera_distance"), Some(Vec3::ZERO));

        // The head renderable is suppressed, the body is not.
        let parts = scene.actor(actor).unwrap().renderables();
        assert!(!parts[0].is_enabled());
        assert!(parts[1].is_enabled());
    }

    #[test]
    fn test_stop_restores_rig_and_visibility() {
        let (mut scene, actor) = orbit_scene();
        let before_anchor = scene.orbit_control().unwrap().target_pos;
        let before_distance =
            try_get::<Vec3>(scene.orbit_control().unwrap(), "camera_distance").unwrap();

        let mut controller = TrackingController::default();
        controller.start(&mut scene, actor).unwrap();
        controller.adjust_tilt(&mut scene, 10.0);
        controller.stop(&mut scene);

        assert!(!controller.is_tracking());
        assert!((controller.tilt_degrees()).abs() < f32::EPSILON);

        let control = scene.orbit_control().unwrap();
        assert_eq!(control.target_pos, before_anchor);
        assert_eq!(
            try_get::<Vec3>(control, "camera_distance"),
            Some(before_distance)
        );
        assert!(scene.actor(actor).unwrap().renderables()[0].is_enabled());
    }

    #[test]
    fn test_capture_once_across_restart() {
        let (mut scene, actor) = orbit_scene();
        let original_anchor = scene.orbit_control().unwrap().target_pos;

        let mut controller = TrackingController::default();
        controller.start(&mut scene, actor).unwrap();
        // Restarting on the same actor stops (restoring the snapshot) and
        // captures again; the snapshot never silently overwrites.
        controller.start(&mut scene, actor).unwrap();
        controller.stop(&mut scene);

        assert_eq!(scene.orbit_control().unwrap().target_pos, original_anchor);
    }

    #[test]
    fn test_actor_switch_restores_previous_actor() {
        let mut scene = Scene::new();
        scene.set_orbit_control(OrbitCameraControl::default());
        let first = add_actor(&mut scene, "first", Vec3::ZERO);
        let second = add_actor(&mut scene, "second", Vec3::new(2.0, 0.0, 0.0));

        let mut controller = TrackingController::default();
        controller.start(&mut scene, first).unwrap();
        assert!(!scene.actor(first).unwrap().renderables()[0].is_enabled());

        controller.start(&mut scene, second).unwrap();
        assert_eq!(controller.tracked_actor(), Some(second));
        // First actor's head is back; second actor's head is now hidden.
        assert!(scene.actor(first).unwrap().renderables()[0].is_enabled());
        assert!(!scene.actor(second).unwrap().renderables()[0].is_enabled());
    }

    #[test]
    fn test_tilt_change_applies_without_frame_ticking() {
        let (mut scene, actor) = orbit_scene();
        let options = TrackingOptions {
            follow_every_frame: false,
            ..TrackingOptions::default()
        };
        let mut controller = TrackingController::new(options);
        controller.start(&mut scene, actor).unwrap();

        let baseline = scene.orbit_control().unwrap().camera_angle;
        controller.adjust_tilt(&mut scene, 10.0);
        let tilted = scene.orbit_control().unwrap().camera_angle;
        assert!((tilted - baseline).length() > 1e-3);

        // Tilt is fully reversible; it never accumulates.
        controller.adjust_tilt(&mut scene, -10.0);
        let level = scene.orbit_control().unwrap().camera_angle;
        assert!((level - baseline).length() < 1e-3);
    }

    #[test]
    fn test_settle_frames_consumed_by_scheduler() {
        let (mut scene, actor) = orbit_scene();
        let options = TrackingOptions {
            follow_every_frame: false,
            settle_frames: 2,
            ..TrackingOptions::default()
        };
        let mut controller = TrackingController::new(options);
        controller.start(&mut scene, actor).unwrap();

        // Another system knocks the anchor away each frame; settle ticks
        // keep re-pinning it, then stop winning once consumed.
        for expect_pinned in [true, true, false] {
            scene.orbit_control_mut().unwrap().target_pos = Vec3::splat(50.0);
            controller.on_frame(&mut scene);
            let anchor = scene.orbit_control().unwrap().target_pos;
            assert_eq!(anchor == Vec3::splat(50.0), !expect_pinned);
        }
    }

    #[test]
    fn test_rig_unavailable_degrades_quietly() {
        // No orbit control and no VR rig: apply is a no-op, tracking stays
        // active, nothing panics.
        let mut scene = Scene::new();
        let actor = add_actor(&mut scene, "subject", Vec3::ZERO);

        let mut controller = TrackingController::default();
        controller.start(&mut scene, actor).unwrap();
        assert!(controller.is_tracking());
        controller.on_frame(&mut scene);
        controller.stop(&mut scene);
    }

    #[test]
    fn test_dual_transform_rig_selected_when_marker_present() {
        let mut scene = Scene::new();
        scene.set_orbit_control(OrbitCameraControl::default());
        scene.add_vr_rig(Vec3::new(0.0, 0.1, 0.0), Quat::IDENTITY);
        let actor = add_actor(&mut scene, "subject", Vec3::ZERO);

        let mut controller = TrackingController::default();
        controller.start(&mut scene, actor).unwrap();
        assert_eq!(controller.rig_kind(), Some(RigKind::DualTransform));

        // The orbit control is not the selected rig, so its state was never
        // captured and stop leaves it untouched.
        let anchor_before = scene.orbit_control().unwrap().target_pos;
        controller.stop(&mut scene);
        assert_eq!(scene.orbit_control().unwrap().target_pos, anchor_before);
    }
}
