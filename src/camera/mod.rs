//! First-person camera.
//!
//! - `camera_data.rs`: state and tuning structures
//! - `camera_operations.rs`: pure functions that advance them

pub mod camera_data;
pub mod camera_operations;

pub use camera_data::{CameraConfig, CameraState};
pub use camera_operations::{
    apply_pointer_delta, init_camera, projection_matrix, tick, view_matrix, walk_basis,
};
