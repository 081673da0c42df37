//! Rig adapter trait and rig-kind probing.
//!
//! Two mutually-exclusive camera representations exist in the host scene: a
//! parented dual-transform rig and a single-pivot orbit camera. The adapter
//! gives the tracking loop one "place camera at pose with tilt" operation
//! over both.

use glam::Quat;

use viewlock_core::scene::Scene;
use viewlock_core::transform::Pose;

use crate::dual::DualTransformAdapter;
use crate::orbit::PivotOrbitAdapter;

/// Which camera representation is driving the scene.
///
/// Probed once per activation and held fixed; re-probing every frame is
/// wasteful and can flicker between variants while the scene is loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigKind {
    /// Parented rig: a pivot transform whose child holds a fixed eye offset.
    DualTransform,
    /// Single-pivot orbit camera addressed through its control object.
    PivotOrbit,
}

/// Selects the rig kind for one activation.
#[must_use]
pub fn probe_rig_kind(scene: &Scene) -> RigKind {
    if scene.vr_marker_present() {
        RigKind::DualTransform
    } else {
        RigKind::PivotOrbit
    }
}

/// Uniform "place camera at pose with tilt" over both rig representations.
pub trait RigAdapter: Send + Sync {
    /// Returns the rig kind this adapter drives.
    fn kind(&self) -> RigKind;

    /// Places the camera eyepoint at `pose` with `tilt_degrees` about the
    /// rig-local lateral axis.
    ///
    /// Returns `false` when the rig's required sub-objects cannot be located;
    /// the scene is left untouched in that case.
    fn apply(&mut self, scene: &mut Scene, pose: Pose, tilt_degrees: f32) -> bool;
}

/// Builds the adapter for a probed rig kind.
#[must_use]
pub fn adapter_for(kind: RigKind) -> Box<dyn RigAdapter> {
    match kind {
        RigKind::DualTransform => Box::new(DualTransformAdapter::new()),
        RigKind::PivotOrbit => Box::new(PivotOrbitAdapter::new()),
    }
}

/// Rotation of `degrees` about the rig-local lateral (X) axis.
#[must_use]
pub fn tilt_rotation(degrees: f32) -> Quat {
    Quat::from_rotation_x(degrees.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};

    #[test]
    fn test_probe_prefers_dual_transform_when_marker_present() {
        let mut scene = Scene::new();
        scene.set_orbit_control(viewlock_core::scene::OrbitCameraControl::default());
        assert_eq!(probe_rig_kind(&scene), RigKind::PivotOrbit);

        scene.add_vr_rig(Vec3::new(0.0, 0.1, 0.0), Quat::IDENTITY);
        assert_eq!(probe_rig_kind(&scene), RigKind::DualTransform);
    }

    #[test]
    fn test_tilt_rotation_zero_is_identity() {
        assert!(tilt_rotation(0.0).angle_between(Quat::IDENTITY) < 1e-6);
    }

    #[test]
    fn test_tilt_rotation_axis() {
        let q = tilt_rotation(90.0);
        let rotated = q * Vec3::Y;
        // +Y tilted 90 degrees about +X lands on +Z.
        assert!((rotated - Vec3::Z).length() < 1e-5);
    }
}
