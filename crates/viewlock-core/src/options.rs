//! Configuration options for viewlock.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tunable options for the tracking system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingOptions {
    /// Forced extra ticks issued right after activation or a tilt change, so
    /// the camera snaps even when another system resets it once per frame.
    pub settle_frames: u32,

    /// Whether to re-apply the head pose every frame while active.
    pub follow_every_frame: bool,

    /// Whether to suppress head-related renderables on activation.
    pub hide_head: bool,

    /// Distance from a part's bounding-volume center to the head joint below
    /// which the part counts as head-related, in scene length units.
    pub proximity_threshold: f32,

    /// Tilt adjustment per operator step, in degrees.
    pub tilt_step_degrees: f32,
}

impl Default for TrackingOptions {
    fn default() -> Self {
        Self {
            settle_frames: 5,
            follow_every_frame: true,
            hide_head: true,
            proximity_threshold: 0.2,
            tilt_step_degrees: 10.0,
        }
    }
}

impl TrackingOptions {
    /// Serializes the options to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
