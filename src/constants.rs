//! Tuning constants shared across the walkthrough core.

/// Simulation fallbacks and limits.
pub mod sim {
    /// Substituted when the caller hands over a missing or non-finite
    /// timestep. Roughly one frame at 60 Hz.
    pub const NOMINAL_DT: f32 = 1.0 / 60.0;

    /// Hard pitch limit in degrees. Exactly ±90° hits the singularity in the
    /// view-basis derivation.
    pub const PITCH_LIMIT_DEG: f32 = 89.0;

    /// Pointer deltas buffered between ticks; the oldest are dropped beyond
    /// this.
    pub const POINTER_QUEUE_CAP: usize = 64;
}

/// Defaults matching the reference scene tuning.
pub mod defaults {
    /// Walk speed in world units per second.
    pub const MOVE_SPEED: f32 = 3.0;

    /// Collision radius of the player body.
    pub const PLAYER_RADIUS: f32 = 0.35;

    /// Fixed camera height above the floor.
    pub const EYE_HEIGHT: f32 = 1.6;

    /// Look sensitivity in degrees per pixel of pointer movement.
    pub const LOOK_SENSITIVITY: f32 = 0.1;

    /// Spawn depth into the corridor.
    pub const START_Z: f32 = 1.5;

    /// Spawn yaw: facing +Z, down the corridor.
    pub const START_YAW_DEG: f32 = 90.0;

    /// Vertical field of view in degrees.
    pub const FOV_Y_DEG: f32 = 45.0;

    pub const NEAR_PLANE: f32 = 0.1;
    pub const FAR_PLANE: f32 = 800.0;

    /// Corridor sizing: seconds of walking at `MOVE_SPEED` before the hall.
    pub const TARGET_TIME_TO_ROOM: f32 = 10.0;

    /// Slack added past the target walk distance.
    pub const CORRIDOR_EXTRA: f32 = 8.0;

    /// Derived corridor length never goes below this.
    pub const MIN_CORRIDOR_LENGTH: f32 = 10.0;
}

/// Placement of the throne prop at the back of the hall.
pub mod throne {
    pub const SCALE: f32 = 1.5;
    pub const POS_X: f32 = 0.0;

    /// Distance kept between the throne and the hall's rear wall.
    pub const BACK_OFFSET: f32 = 2.0;

    /// The visual silhouette overhangs the solid-feeling footprint; the
    /// collision box is shrunk by this factor before placement.
    pub const AABB_SHRINK: f32 = 0.82;
}
