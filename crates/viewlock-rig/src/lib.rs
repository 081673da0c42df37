//! Camera rig adapters for viewlock-rs.
//!
//! This crate abstracts over the two camera representations a host scene may
//! carry:
//! - [`DualTransformAdapter`] — a parented pivot/eye transform pair
//! - [`PivotOrbitAdapter`] — a single-pivot orbit camera addressed through
//!   its control object's fields
//!
//! plus [`RigStateSnapshot`], the capture-once/restore discipline for the
//! borrowed rig state.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod adapter;
pub mod dual;
pub mod orbit;
pub mod snapshot;

pub use adapter::{adapter_for, probe_rig_kind, tilt_rotation, RigAdapter, RigKind};
pub use dual::DualTransformAdapter;
pub use orbit::PivotOrbitAdapter;
pub use snapshot::{RigState, RigStateSnapshot};
