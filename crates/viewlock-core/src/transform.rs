//! Transform graph and pose types.
//!
//! The scene owns a flat arena of [`Node`]s linked by parent indices. World
//! poses are composed on demand by walking the parent chain; nothing is
//! cached, so writes through [`TransformGraph`] are always visible to the
//! next read.

use glam::{EulerRot, Quat, Vec3};

/// Handle to a node in a [`TransformGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the raw arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A world-space position + orientation pair.
///
/// Poses are derived values: they are sampled from the graph each frame and
/// never stored by the tracking system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position in world space.
    pub position: Vec3,
    /// Orientation as a unit quaternion.
    pub rotation: Quat,
}

impl Pose {
    /// Creates a new pose.
    #[must_use]
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// The identity pose at the origin.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

/// A single node in the transform graph.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    parent: Option<NodeId>,
    local_position: Vec3,
    local_rotation: Quat,
}

/// Arena of transform nodes with parent links.
#[derive(Debug, Default)]
pub struct TransformGraph {
    nodes: Vec<Node>,
}

impl TransformGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a root node (no parent; local pose is the world pose).
    pub fn add_root(&mut self, name: impl Into<String>, position: Vec3, rotation: Quat) -> NodeId {
        self.push(name.into(), None, position, rotation)
    }

    /// Adds a child node with a local pose relative to `parent`.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        local_position: Vec3,
        local_rotation: Quat,
    ) -> NodeId {
        self.push(name.into(), Some(parent), local_position, local_rotation)
    }

    fn push(
        &mut self,
        name: String,
        parent: Option<NodeId>,
        local_position: Vec3,
        local_rotation: Quat,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name,
            parent,
            local_position,
            local_rotation,
        });
        id
    }

    /// Returns the name of a node.
    #[must_use]
    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    /// Returns the parent of a node, if any.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Returns the first child of a node, in insertion order.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.parent == Some(id))
            .map(NodeId)
    }

    /// Finds a node by exact name anywhere in the graph.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    /// Returns a node's local position.
    #[must_use]
    pub fn local_position(&self, id: NodeId) -> Vec3 {
        self.nodes[id.0].local_position
    }

    /// Returns a node's local rotation.
    #[must_use]
    pub fn local_rotation(&self, id: NodeId) -> Quat {
        self.nodes[id.0].local_rotation
    }

    /// Sets a node's local position.
    pub fn set_local_position(&mut self, id: NodeId, position: Vec3) {
        self.nodes[id.0].local_position = position;
    }

    /// Sets a node's local rotation.
    pub fn set_local_rotation(&mut self, id: NodeId, rotation: Quat) {
        self.nodes[id.0].local_rotation = rotation;
    }

    /// Returns a node's world position by composing the parent chain.
    #[must_use]
    pub fn world_position(&self, id: NodeId) -> Vec3 {
        let node = &self.nodes[id.0];
        match node.parent {
            Some(parent) => {
                self.world_position(parent) + self.world_rotation(parent) * node.local_position
            }
            None => node.local_position,
        }
    }

    /// Returns a node's world rotation by composing the parent chain.
    #[must_use]
    pub fn world_rotation(&self, id: NodeId) -> Quat {
        let node = &self.nodes[id.0];
        match node.parent {
            Some(parent) => self.world_rotation(parent) * node.local_rotation,
            None => node.local_rotation,
        }
    }

    /// Returns a node's full world pose.
    #[must_use]
    pub fn world_pose(&self, id: NodeId) -> Pose {
        Pose::new(self.world_position(id), self.world_rotation(id))
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Converts a rotation to XYZ Euler angles in degrees.
#[must_use]
pub fn euler_degrees(rotation: Quat) -> Vec3 {
    let (x, y, z) = rotation.to_euler(EulerRot::XYZ);
    Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
}

/// Builds a rotation from XYZ Euler angles in degrees.
#[must_use]
pub fn from_euler_degrees(degrees: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        degrees.x.to_radians(),
        degrees.y.to_radians(),
        degrees.z.to_radians(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_world_pose_is_local() {
        let mut graph = TransformGraph::new();
        let root = graph.add_root("root", Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY);
        assert_eq!(graph.world_position(root), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(graph.world_rotation(root), Quat::IDENTITY);
    }

    #[test]
    fn test_child_world_position_composes_parent_rotation() {
        let mut graph = TransformGraph::new();
        let rot = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let root = graph.add_root("root", Vec3::new(1.0, 0.0, 0.0), rot);
        let child = graph.add_child(root, "child", Vec3::new(1.0, 0.0, 0.0), Quat::IDENTITY);

        // +X offset rotated 90 degrees about Y lands on -Z.
        let world = graph.world_position(child);
        assert!((world - Vec3::new(1.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_child_world_rotation_composes() {
        let mut graph = TransformGraph::new();
        let rot_a = Quat::from_rotation_y(0.3);
        let rot_b = Quat::from_rotation_x(0.7);
        let root = graph.add_root("root", Vec3::ZERO, rot_a);
        let child = graph.add_child(root, "child", Vec3::ZERO, rot_b);

        let expected = rot_a * rot_b;
        assert!(graph.world_rotation(child).angle_between(expected) < 1e-5);
    }

    #[test]
    fn test_find_and_first_child() {
        let mut graph = TransformGraph::new();
        let root = graph.add_root("rig", Vec3::ZERO, Quat::IDENTITY);
        let eye = graph.add_child(root, "eye", Vec3::new(0.0, 0.1, 0.0), Quat::IDENTITY);

        assert_eq!(graph.find("rig"), Some(root));
        assert_eq!(graph.find("missing"), None);
        assert_eq!(graph.first_child(root), Some(eye));
        assert_eq!(graph.first_child(eye), None);
    }

    #[test]
    fn test_euler_degree_round_trip() {
        let q = from_euler_degrees(Vec3::new(30.0, -45.0, 10.0));
        let back = euler_degrees(q);
        assert!((back - Vec3::new(30.0, -45.0, 10.0)).length() < 1e-3);
    }
}
