//! Error types for viewlock-rs.

use thiserror::Error;

/// The main error type for viewlock-rs operations.
#[derive(Error, Debug)]
pub enum ViewlockError {
    /// Viewlock has not been initialized.
    #[error("viewlock not initialized - call viewlock::init() first")]
    NotInitialized,

    /// Viewlock has already been initialized.
    #[error("viewlock already initialized")]
    AlreadyInitialized,

    /// The actor's skeleton has no resolvable head joint.
    #[error("no head joint found on actor '{0}'")]
    NoHeadJointFound(String),

    /// No actor with the given handle exists in the scene.
    #[error("actor '{0}' not found")]
    ActorNotFound(String),

    /// Neither rig representation's required sub-objects could be located.
    #[error("camera rig unavailable")]
    RigUnavailable,

    /// A named field could not be found or cast on a foreign object.
    #[error("field access failed: {0}")]
    FieldAccessFailure(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for viewlock-rs operations.
pub type Result<T> = std::result::Result<T, ViewlockError>;
