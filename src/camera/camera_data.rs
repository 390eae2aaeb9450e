//! Camera state and tuning. All transformations happen in
//! camera_operations.rs.

use cgmath::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::defaults;

/// First-person camera state, advanced once per simulation tick. Owned by
/// the simulation; the renderer only reads matrices and snapshots derived
/// from it.
#[derive(Debug, Clone, Copy)]
pub struct CameraState {
    /// World-space eye position. Y never changes during movement (fixed eye
    /// height, ground walker).
    pub position: Point3<f32>,

    /// Displacement of the last tick divided by its timestep. For animation
    /// consumers (weapon bobbing and the like); never fed back into
    /// movement.
    pub velocity: Vector3<f32>,

    /// Horizontal look angle, degrees. Unbounded.
    pub yaw_deg: f32,

    /// Vertical look angle, degrees, clamped to ±89. Exactly ±90 would hit
    /// the view-basis singularity.
    pub pitch_deg: f32,

    /// Walk speed in world units per second.
    pub move_speed: f32,

    /// Collision radius of the player body.
    pub radius: f32,

    /// Look sensitivity in degrees per pixel.
    pub sensitivity: f32,

    /// Rescale diagonal movement to walk speed. Off by default: the
    /// reference behavior moves faster on diagonals.
    pub normalize_diagonal: bool,

    /// Unit XZ direction of the last nonzero movement. Feeds the torch cone
    /// and starts out aligned with the initial yaw.
    pub last_move_dir: Vector3<f32>,
}

/// Camera construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub start_position: [f32; 3],
    pub start_yaw_deg: f32,
    pub start_pitch_deg: f32,
    pub move_speed: f32,
    pub radius: f32,
    pub sensitivity: f32,
    pub normalize_diagonal: bool,
    pub fov_y_deg: f32,
    pub near_plane: f32,
    pub far_plane: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: [0.0, defaults::EYE_HEIGHT, defaults::START_Z],
            start_yaw_deg: defaults::START_YAW_DEG,
            start_pitch_deg: 0.0,
            move_speed: defaults::MOVE_SPEED,
            radius: defaults::PLAYER_RADIUS,
            sensitivity: defaults::LOOK_SENSITIVITY,
            normalize_diagonal: false,
            fov_y_deg: defaults::FOV_Y_DEG,
            near_plane: defaults::NEAR_PLANE,
            far_plane: defaults::FAR_PLANE,
        }
    }
}
