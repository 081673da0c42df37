//! The parented dual-transform rig.
//!
//! The camera pose lives on a pivot transform whose child holds a fixed
//! local offset (the "eye offset"). The visible eyepoint, not the pivot,
//! must land exactly on the target position, so the pivot is placed at
//! `target − rotation * eye_offset` after the rotation is composed.

use glam::Vec3;

use viewlock_core::scene::{Scene, VR_RIG_MARKER};
use viewlock_core::transform::{NodeId, Pose};

use crate::adapter::{tilt_rotation, RigAdapter, RigKind};

/// Adapter for the dual-transform rig.
///
/// The eye offset is captured on the first successful apply of an activation;
/// it is static for a given camera setup.
#[derive(Debug, Default)]
pub struct DualTransformAdapter {
    eye_offset: Option<Vec3>,
}

impl DualTransformAdapter {
    /// Creates an adapter with no captured eye offset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Locates the rig pivot and its child eye node.
    fn locate(scene: &Scene) -> Option<(NodeId, NodeId)> {
        let rig = scene.graph().find(VR_RIG_MARKER)?;
        let eye = scene.graph().first_child(rig)?;
        Some((rig, eye))
    }
}

impl RigAdapter for DualTransformAdapter {
    fn kind(&self) -> RigKind {
        RigKind::DualTransform
    }

    fn apply(&mut self, scene: &mut Scene, pose: Pose, tilt_degrees: f32) -> bool {
        let Some((rig, eye)) = Self::locate(scene) else {
            return false;
        };

        let eye_offset = *self
            .eye_offset
            .get_or_insert_with(|| scene.graph().local_position(eye));
        let eye_local_rotation = scene.graph().local_rotation(eye);

        // Rotation first: the eye offset rotates with the pivot, so the
        // pivot position depends on the final rotation.
        let rotation = pose.rotation * eye_local_rotation.inverse() * tilt_rotation(tilt_degrees);
        let position = pose.position - rotation * eye_offset;

        let graph = scene.graph_mut();
        graph.set_local_rotation(rig, rotation);
        graph.set_local_position(rig, position);
        true
    }
}
