//! Scene model: actors, renderables, camera objects, and items.
//!
//! The scene is owned by the host simulation; this crate models exactly the
//! slice of it the tracking system reads and writes. All mutation happens on
//! the single simulation thread between frame draws.

use std::collections::HashMap;

use glam::{Quat, Vec3};

use crate::attribute::FieldAccess;
use crate::error::{Result, ViewlockError};
use crate::transform::{NodeId, Pose, TransformGraph};

/// Node name marking the parented dual-transform (VR) camera rig.
///
/// Presence of a node with this exact name selects the dual-transform rig for
/// the whole activation.
pub const VR_RIG_MARKER: &str = "VR_Camera (origin)";

/// Joint names tried, in order, when resolving an actor's head joint.
pub const HEAD_JOINT_NAMES: [&str; 5] = ["cf_J_Head", "cf_j_head", "Head", "head", "N_Head"];

/// Handle to an actor in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(pub(crate) usize);

impl ActorId {
    /// Returns the raw index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle to a single renderable part of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderableId {
    /// The owning actor.
    pub actor: ActorId,
    /// Index into the actor's renderable list.
    pub index: usize,
}

/// One renderable part of an actor's body.
#[derive(Debug, Clone)]
pub struct Renderable {
    name: String,
    enabled: bool,
    bounds_center: Vec3,
}

impl Renderable {
    /// Creates a renderable part.
    pub fn new(name: impl Into<String>, enabled: bool, bounds_center: Vec3) -> Self {
        Self {
            name: name.into(),
            enabled,
            bounds_center,
        }
    }

    /// Returns the identifying name of this part.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether this part is currently drawn.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets whether this part is drawn.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns the world-space center of this part's bounding volume.
    #[must_use]
    pub fn bounds_center(&self) -> Vec3 {
        self.bounds_center
    }

    /// Moves the bounding-volume center (the host updates this as the actor
    /// animates).
    pub fn set_bounds_center(&mut self, center: Vec3) {
        self.bounds_center = center;
    }
}

/// A skeletal actor with named joints and renderable body parts.
#[derive(Debug)]
pub struct Actor {
    name: String,
    body_root: NodeId,
    joints: HashMap<String, NodeId>,
    renderables: Vec<Renderable>,
}

impl Actor {
    /// Creates an actor rooted at `body_root`.
    pub fn new(name: impl Into<String>, body_root: NodeId) -> Self {
        Self {
            name: name.into(),
            body_root,
            joints: HashMap::new(),
            renderables: Vec::new(),
        }
    }

    /// Returns the actor's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the root node of the actor's body hierarchy.
    #[must_use]
    pub fn body_root(&self) -> NodeId {
        self.body_root
    }

    /// Registers a named joint.
    pub fn add_joint(&mut self, name: impl Into<String>, node: NodeId) {
        self.joints.insert(name.into(), node);
    }

    /// Looks up a joint by exact name.
    #[must_use]
    pub fn joint(&self, name: &str) -> Option<NodeId> {
        self.joints.get(name).copied()
    }

    /// Appends a renderable part and returns its index.
    pub fn add_renderable(&mut self, renderable: Renderable) -> usize {
        self.renderables.push(renderable);
        self.renderables.len() - 1
    }

    /// Returns the renderable parts in declaration order.
    #[must_use]
    pub fn renderables(&self) -> &[Renderable] {
        &self.renderables
    }

    /// Returns a mutable renderable by index.
    pub fn renderable_mut(&mut self, index: usize) -> Option<&mut Renderable> {
        self.renderables.get_mut(index)
    }
}

/// Editor object controlling collider setup inside a pose controller.
///
/// Foreign state: only reachable through [`FieldAccess`].
#[derive(Debug)]
pub struct CollidersEditor {
    check_new_colliders: bool,
    draw_gizmos: bool,
}

impl Default for CollidersEditor {
    fn default() -> Self {
        Self {
            check_new_colliders: true,
            draw_gizmos: false,
        }
    }
}

impl FieldAccess for CollidersEditor {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["check_new_colliders", "draw_gizmos"]
    }

    fn field(&self, name: &str) -> Option<&dyn std::any::Any> {
        match name {
            "check_new_colliders" => Some(&self.check_new_colliders),
            "draw_gizmos" => Some(&self.draw_gizmos),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn std::any::Any> {
        match name {
            "check_new_colliders" => Some(&mut self.check_new_colliders),
            "draw_gizmos" => Some(&mut self.draw_gizmos),
            _ => None,
        }
    }
}

/// Editor object controlling per-bone physics inside a pose controller.
#[derive(Debug)]
pub struct BonesEditor {
    check_new_bones: bool,
    damping: f32,
}

impl Default for BonesEditor {
    fn default() -> Self {
        Self {
            check_new_bones: true,
            damping: 0.2,
        }
    }
}

impl FieldAccess for BonesEditor {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["check_new_bones", "damping"]
    }

    fn field(&self, name: &str) -> Option<&dyn std::any::Any> {
        match name {
            "check_new_bones" => Some(&self.check_new_bones),
            "damping" => Some(&self.damping),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn std::any::Any> {
        match name {
            "check_new_bones" => Some(&mut self.check_new_bones),
            "damping" => Some(&mut self.damping),
            _ => None,
        }
    }
}

/// Pose controller attached to a scene item, nesting two editor objects.
///
/// The editors are non-public; callers reach them through
/// [`FieldAccess::nested_mut`].
#[derive(Debug, Default)]
pub struct PoseController {
    colliders_editor: CollidersEditor,
    bones_editor: BonesEditor,
}

impl FieldAccess for PoseController {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["colliders_editor", "bones_editor"]
    }

    fn field(&self, name: &str) -> Option<&dyn std::any::Any> {
        match name {
            "colliders_editor" => Some(&self.colliders_editor),
            "bones_editor" => Some(&self.bones_editor),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn std::any::Any> {
        match name {
            "colliders_editor" => Some(&mut self.colliders_editor),
            "bones_editor" => Some(&mut self.bones_editor),
            _ => None,
        }
    }

    fn nested_mut(&mut self, name: &str) -> Option<&mut dyn FieldAccess> {
        match name {
            "colliders_editor" => Some(&mut self.colliders_editor),
            "bones_editor" => Some(&mut self.bones_editor),
            _ => None,
        }
    }
}

/// A non-actor scene object, optionally carrying a pose controller.
#[derive(Debug)]
pub struct SceneItem {
    name: String,
    pose_controller: Option<PoseController>,
}

impl SceneItem {
    /// Creates a scene item.
    pub fn new(name: impl Into<String>, pose_controller: Option<PoseController>) -> Self {
        Self {
            name: name.into(),
            pose_controller,
        }
    }

    /// Returns the item's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attached pose controller, if any.
    pub fn pose_controller_mut(&mut self) -> Option<&mut PoseController> {
        self.pose_controller.as_mut()
    }
}

/// The single-pivot orbit camera control object.
///
/// The anchor and orbit angles are public; the standoff distance is not part
/// of the public contract and is reachable only through [`FieldAccess`].
#[derive(Debug)]
pub struct OrbitCameraControl {
    /// Anchor the camera orbits around.
    pub target_pos: Vec3,
    /// Orbit angles in XYZ Euler degrees.
    pub camera_angle: Vec3,
    camera_distance: Vec3,
}

impl OrbitCameraControl {
    /// Creates an orbit control with the given standoff distance.
    #[must_use]
    pub fn new(target_pos: Vec3, camera_angle: Vec3, camera_distance: Vec3) -> Self {
        Self {
            target_pos,
            camera_angle,
            camera_distance,
        }
    }
}

impl Default for OrbitCameraControl {
    fn default() -> Self {
        Self {
            target_pos: Vec3::ZERO,
            camera_angle: Vec3::ZERO,
            camera_distance: Vec3::new(0.0, 0.0, -3.0),
        }
    }
}

impl FieldAccess for OrbitCameraControl {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["target_pos", "camera_angle", "camera_distance"]
    }

    fn field(&self, name: &str) -> Option<&dyn std::any::Any> {
        match name {
            "target_pos" => Some(&self.target_pos),
            "camera_angle" => Some(&self.camera_angle),
            "camera_distance" => Some(&self.camera_distance),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn std::any::Any> {
        match name {
            "target_pos" => Some(&mut self.target_pos),
            "camera_angle" => Some(&mut self.camera_angle),
            "camera_distance" => Some(&mut self.camera_distance),
            _ => None,
        }
    }
}

/// The host scene, as seen by the tracking system.
#[derive(Debug, Default)]
pub struct Scene {
    graph: TransformGraph,
    actors: Vec<Actor>,
    items: Vec<SceneItem>,
    orbit_control: Option<OrbitCameraControl>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the transform graph.
    #[must_use]
    pub fn graph(&self) -> &TransformGraph {
        &self.graph
    }

    /// Returns the transform graph mutably.
    pub fn graph_mut(&mut self) -> &mut TransformGraph {
        &mut self.graph
    }

    /// Adds an actor and returns its handle.
    pub fn add_actor(&mut self, actor: Actor) -> ActorId {
        self.actors.push(actor);
        ActorId(self.actors.len() - 1)
    }

    /// Returns an actor by handle.
    #[must_use]
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id.0)
    }

    /// Returns an actor by handle, mutably.
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id.0)
    }

    /// Finds an actor handle by exact name.
    #[must_use]
    pub fn find_actor(&self, name: &str) -> Option<ActorId> {
        self.actors.iter().position(|a| a.name == name).map(ActorId)
    }

    /// Returns all actor handles.
    pub fn actor_ids(&self) -> impl Iterator<Item = ActorId> {
        (0..self.actors.len()).map(ActorId)
    }

    /// Adds a scene item.
    pub fn add_item(&mut self, item: SceneItem) {
        self.items.push(item);
    }

    /// Returns the scene items mutably.
    pub fn items_mut(&mut self) -> &mut [SceneItem] {
        &mut self.items
    }

    /// Installs the orbit camera control object.
    pub fn set_orbit_control(&mut self, control: OrbitCameraControl) {
        self.orbit_control = Some(control);
    }

    /// Returns the orbit camera control, if present.
    #[must_use]
    pub fn orbit_control(&self) -> Option<&OrbitCameraControl> {
        self.orbit_control.as_ref()
    }

    /// Returns the orbit camera control mutably, if present.
    pub fn orbit_control_mut(&mut self) -> Option<&mut OrbitCameraControl> {
        self.orbit_control.as_mut()
    }

    /// Adds a dual-transform camera rig: a root marker node plus a child eye
    /// node at the given fixed local offset. Returns (rig, eye).
    pub fn add_vr_rig(&mut self, eye_offset: Vec3, eye_local_rotation: Quat) -> (NodeId, NodeId) {
        let rig = self.graph.add_root(VR_RIG_MARKER, Vec3::ZERO, Quat::IDENTITY);
        let eye = self
            .graph
            .add_child(rig, "eye", eye_offset, eye_local_rotation);
        (rig, eye)
    }

    /// Probes for the dual-transform rig marker. Called once per activation.
    #[must_use]
    pub fn vr_marker_present(&self) -> bool {
        self.graph.find(VR_RIG_MARKER).is_some()
    }

    /// Resolves an actor's head joint, trying [`HEAD_JOINT_NAMES`] in order.
    pub fn head_joint(&self, id: ActorId) -> Result<NodeId> {
        let actor = self
            .actor(id)
            .ok_or_else(|| ViewlockError::ActorNotFound(format!("#{}", id.0)))?;
        HEAD_JOINT_NAMES
            .iter()
            .find_map(|&name| actor.joint(name))
            .ok_or_else(|| ViewlockError::NoHeadJointFound(actor.name.clone()))
    }

    /// Samples the world pose of an actor's head joint.
    pub fn head_pose(&self, id: ActorId) -> Result<Pose> {
        let joint = self.head_joint(id)?;
        Ok(self.graph.world_pose(joint))
    }
}
