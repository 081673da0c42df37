//! Pre-tracking rig state capture and restore.
//!
//! The orbit camera is owned by the host; tracking borrows it for one
//! activation. The snapshot records where the free camera was and puts it
//! back on deactivation. The accessor layer provides no rollback of its own,
//! so this is the only undo there is.

use glam::Vec3;

use viewlock_core::attribute::{try_get, try_set, FieldAccess};
use viewlock_core::scene::Scene;

/// Snapshot of the orbit control's field triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigState {
    /// Orbit anchor position.
    pub target_pos: Vec3,
    /// Orbit angles in XYZ Euler degrees.
    pub camera_angle: Vec3,
    /// Standoff distance vector.
    pub camera_distance: Vec3,
}

/// Holds at most one [`RigState`] per activation cycle.
#[derive(Debug, Default)]
pub struct RigStateSnapshot {
    state: Option<RigState>,
}

impl RigStateSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a state is currently held.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.state.is_some()
    }

    /// Captures the rig state once.
    ///
    /// A second capture while one is held leaves the first snapshot
    /// unchanged. Absent or unreadable fields leave the snapshot empty.
    pub fn capture(&mut self, scene: &Scene) {
        if self.state.is_some() {
            return;
        }
        let Some(control) = scene.orbit_control() else {
            return;
        };
        let (Some(target_pos), Some(camera_angle), Some(camera_distance)) = (
            try_get::<Vec3>(control, "target_pos"),
            try_get::<Vec3>(control, "camera_angle"),
            try_get::<Vec3>(control, "camera_distance"),
        ) else {
            log::warn!("rig state capture failed: orbit control fields unreadable");
            return;
        };
        self.state = Some(RigState {
            target_pos,
            camera_angle,
            camera_distance,
        });
    }

    /// Restores the held state to the rig and clears the snapshot.
    ///
    /// Returns whether a state was written back.
    pub fn restore(&mut self, scene: &mut Scene) -> bool {
        let Some(state) = self.state.take() else {
            return false;
        };
        let Some(control) = scene.orbit_control_mut() else {
            return false;
        };
        let control: &mut dyn FieldAccess = control;
        let mut ok = try_set(control, "target_pos", state.target_pos);
        ok &= try_set(control, "camera_angle", state.camera_angle);
        ok &= try_set(control, "camera_distance", state.camera_distance);
        if !ok {
            log::warn!("rig state restore wrote only partially");
        }
        ok
    }

    /// Clears the snapshot without restoring.
    pub fn release(&mut self) {
        self.state = None;
    }
}
