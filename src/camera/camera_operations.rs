//! Camera operations: look input, per-tick movement integration with slide
//! collision, and view/projection derivation.
//!
//! All functions are pure: they take state, return new state. Neither
//! [`tick`] nor [`apply_pointer_delta`] has an error path; malformed
//! timesteps fall back to a nominal step instead of propagating NaN into
//! the position.

use cgmath::{Matrix4, Point3, Vector3};

use super::camera_data::{CameraConfig, CameraState};
use crate::constants::sim::{NOMINAL_DT, PITCH_LIMIT_DEG};
use crate::input::HeldDirections;
use crate::math;
use crate::physics::CollisionWorld;

pub fn init_camera(config: &CameraConfig) -> CameraState {
    let [x, y, z] = config.start_position;
    let yaw = config.start_yaw_deg.to_radians();
    CameraState {
        position: Point3::new(x, y, z),
        velocity: Vector3::new(0.0, 0.0, 0.0),
        yaw_deg: config.start_yaw_deg,
        pitch_deg: config.start_pitch_deg.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG),
        move_speed: config.move_speed,
        radius: config.radius,
        sensitivity: config.sensitivity,
        normalize_diagonal: config.normalize_diagonal,
        last_move_dir: Vector3::new(yaw.cos(), 0.0, yaw.sin()),
    }
}

/// Pointer-look. The caller gates this on its pointer-capture state; by the
/// time a delta arrives here it is taken at face value.
pub fn apply_pointer_delta(camera: &CameraState, dx: f32, dy: f32) -> CameraState {
    let mut c = *camera;
    c.yaw_deg += dx * c.sensitivity;
    c.pitch_deg = (c.pitch_deg - dy * c.sensitivity).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
    c
}

/// Ground-plane movement basis for a yaw angle: forward and right, both
/// unit, XZ only. Pitch never leaks into movement.
pub fn walk_basis(yaw_deg: f32) -> (Vector3<f32>, Vector3<f32>) {
    let yaw = yaw_deg.to_radians();
    let forward = Vector3::new(yaw.cos(), 0.0, yaw.sin());
    let right = Vector3::new(-yaw.sin(), 0.0, yaw.cos());
    (forward, right)
}

fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        log::debug!("substituting nominal timestep for dt = {dt}");
        NOMINAL_DT
    }
}

/// Advances the camera by one tick: integrates held directions over `dt`
/// and resolves collision per axis.
///
/// Axis order is X first, then Z tested against the updated X. The order is
/// a deliberate tie-break: diagonal movement into a corner keeps whichever
/// axis does not collide instead of stopping dead (wall sliding).
pub fn tick(
    camera: &CameraState,
    held: HeldDirections,
    dt: f32,
    world: &CollisionWorld,
) -> CameraState {
    let dt = sanitize_dt(dt);
    let (forward, right) = walk_basis(camera.yaw_deg);
    let step = camera.move_speed * dt;

    let mut dx = 0.0;
    let mut dz = 0.0;
    if held.forward {
        dx += forward.x * step;
        dz += forward.z * step;
    }
    if held.back {
        dx -= forward.x * step;
        dz -= forward.z * step;
    }
    if held.left {
        dx -= right.x * step;
        dz -= right.z * step;
    }
    if held.right {
        dx += right.x * step;
        dz += right.z * step;
    }

    let mut c = *camera;

    if c.normalize_diagonal {
        let len = (dx * dx + dz * dz).sqrt();
        if len > step {
            dx *= step / len;
            dz *= step / len;
        }
    }

    c.velocity = Vector3::new(dx / dt, 0.0, dz / dt);

    if dx == 0.0 && dz == 0.0 {
        return c;
    }

    let len = (dx * dx + dz * dz).sqrt();
    c.last_move_dir = Vector3::new(dx / len, 0.0, dz / len);

    // X first, then Z against the updated X.
    let mut new_x = c.position.x;
    if !world.blocked(c.position.x + dx, c.position.z, c.radius) {
        new_x = c.position.x + dx;
    }
    let mut new_z = c.position.z;
    if !world.blocked(new_x, c.position.z + dz, c.radius) {
        new_z = c.position.z + dz;
    }

    c.position = Point3::new(new_x, c.position.y, new_z);
    c
}

/// World-to-camera transform for the current pose.
pub fn view_matrix(camera: &CameraState) -> Matrix4<f32> {
    math::view_from_yaw_pitch(camera.position, camera.yaw_deg, camera.pitch_deg)
}

/// Projection for the live canvas aspect ratio.
pub fn projection_matrix(config: &CameraConfig, aspect: f32) -> Matrix4<f32> {
    math::perspective(
        config.fov_y_deg.to_radians(),
        aspect,
        config.near_plane,
        config.far_plane,
    )
}
