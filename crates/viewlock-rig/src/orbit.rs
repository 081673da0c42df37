//! The single-pivot orbit rig.
//!
//! The orbit camera normally holds its eyepoint at a standoff distance from
//! the anchor. First-person tracking pins the eyepoint on the anchor by
//! forcing the distance to zero on every apply; other host code may reset it
//! between calls, so once is not enough.

use glam::Vec3;

use viewlock_core::attribute::{try_set, FieldAccess};
use viewlock_core::scene::Scene;
use viewlock_core::transform::{euler_degrees, Pose};

use crate::adapter::{tilt_rotation, RigAdapter, RigKind};

/// Adapter for the pivot-orbit rig.
///
/// All three fields go through the attribute accessor; the distance vector is
/// not part of the control object's public contract.
#[derive(Debug, Default)]
pub struct PivotOrbitAdapter;

impl PivotOrbitAdapter {
    /// Creates the adapter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RigAdapter for PivotOrbitAdapter {
    fn kind(&self) -> RigKind {
        RigKind::PivotOrbit
    }

    fn apply(&mut self, scene: &mut Scene, pose: Pose, tilt_degrees: f32) -> bool {
        let Some(control) = scene.orbit_control_mut() else {
            return false;
        };
        let control: &mut dyn FieldAccess = control;

        let angles = euler_degrees(pose.rotation * tilt_rotation(tilt_degrees));

        let mut ok = try_set(control, "target_pos", pose.position);
        ok &= try_set(control, "camera_angle", angles);
        ok &= try_set(control, "camera_distance", Vec3::ZERO);
        ok
    }
}
