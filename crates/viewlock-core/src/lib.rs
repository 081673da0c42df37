//! Core abstractions for viewlock-rs.
//!
//! This crate provides the fundamental types used throughout viewlock-rs:
//! - [`Scene`], [`Actor`], and [`Renderable`] — the slice of the host world
//!   the tracking system borrows
//! - [`TransformGraph`] and [`Pose`] — the transform arena and derived poses
//! - [`FieldAccess`] — by-name access to fields of foreign objects
//! - [`TrackingOptions`] — configuration
//! - Error types

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod attribute;
pub mod error;
pub mod options;
pub mod scene;
pub mod transform;

pub use attribute::{clear_first_flag, try_get, try_set, FieldAccess};
pub use error::{Result, ViewlockError};
pub use options::TrackingOptions;
pub use scene::{
    Actor, ActorId, OrbitCameraControl, PoseController, Renderable, RenderableId, Scene,
    SceneItem, HEAD_JOINT_NAMES, VR_RIG_MARKER,
};
pub use transform::{euler_degrees, from_euler_degrees, NodeId, Pose, TransformGraph};

// Re-export glam types for convenience
pub use glam::{Quat, Vec3};
