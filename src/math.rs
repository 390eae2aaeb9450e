//! Fixed-function 3D math for the walkthrough core.
//!
//! These are the handful of constructions the camera and renderer seams
//! need, built over cgmath types. They are written out explicitly (instead
//! of going through `cgmath::perspective`/`look_at_rh`) because their
//! degenerate-input behavior is pinned: `normalize` of a zero vector is the
//! zero vector and `normal_matrix` clamps a vanishing determinant instead of
//! blowing up. Neither case is an error; both occur legitimately at
//! initialization edges and must not take down the frame loop.

use cgmath::{EuclideanSpace, InnerSpace, Matrix3, Matrix4, Point3, Vector3};

/// World up axis used for all basis derivations.
pub const WORLD_UP: Vector3<f32> = Vector3 {
    x: 0.0,
    y: 1.0,
    z: 0.0,
};

/// Determinant magnitudes below this are clamped in [`normal_matrix`].
const DET_EPSILON: f32 = 1e-12;

/// Returns `v / |v|`, or the zero vector when `|v|` is exactly zero.
pub fn normalize(v: Vector3<f32>) -> Vector3<f32> {
    let len = v.magnitude();
    if len == 0.0 {
        Vector3::new(0.0, 0.0, 0.0)
    } else {
        v / len
    }
}

/// Right-handed cross product.
pub fn cross(a: Vector3<f32>, b: Vector3<f32>) -> Vector3<f32> {
    a.cross(b)
}

/// Symmetric-frustum perspective projection, OpenGL clip conventions,
/// column-major.
///
/// Preconditions: `fov_y_radians` in (0, π), `near > 0`, `far > near`.
/// Checked in debug builds; release builds produce a garbage matrix for
/// garbage input rather than asserting.
pub fn perspective(fov_y_radians: f32, aspect: f32, near: f32, far: f32) -> Matrix4<f32> {
    debug_assert!(fov_y_radians > 0.0 && fov_y_radians < std::f32::consts::PI);
    debug_assert!(aspect > 0.0);
    debug_assert!(near > 0.0 && far > near);

    let f = 1.0 / (fov_y_radians / 2.0).tan();

    #[rustfmt::skip]
    let m = Matrix4::new(
        f / aspect, 0.0, 0.0,                                0.0,
        0.0,        f,   0.0,                                0.0,
        0.0,        0.0, (far + near) / (near - far),       -1.0,
        0.0,        0.0, (2.0 * far * near) / (near - far),  0.0,
    );
    m
}

/// View matrix for a camera at `position` looking along the yaw/pitch front
/// vector, with translation folded in (standard LookAt, front row negated
/// per OpenGL view-space convention).
pub fn view_from_yaw_pitch(position: Point3<f32>, yaw_deg: f32, pitch_deg: f32) -> Matrix4<f32> {
    let yaw = yaw_deg.to_radians();
    let pitch = pitch_deg.to_radians();

    let front = normalize(Vector3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    ));
    let right = normalize(front.cross(WORLD_UP));
    let up = right.cross(front);

    let pos = position.to_vec();

    #[rustfmt::skip]
    let m = Matrix4::new(
        right.x,         up.x,         -front.x,       0.0,
        right.y,         up.y,         -front.y,       0.0,
        right.z,         up.z,         -front.z,       0.0,
        -right.dot(pos), -up.dot(pos),  front.dot(pos), 1.0,
    );
    m
}

/// Inverse-transpose of the upper-left 3x3 of `model`, for transforming
/// normals under non-uniform or mirrored model transforms.
///
/// Near-singular input (|det| < 1e-12) gets a clamped determinant: the
/// result is defined but numerically poor, which is an accepted
/// approximation rather than correct behavior.
pub fn normal_matrix(model: &Matrix4<f32>) -> Matrix3<f32> {
    let m00 = model.x.x;
    let m01 = model.y.x;
    let m02 = model.z.x;
    let m10 = model.x.y;
    let m11 = model.y.y;
    let m12 = model.z.y;
    let m20 = model.x.z;
    let m21 = model.y.z;
    let m22 = model.z.z;

    // Cofactor expansion along the first row.
    let b01 = m22 * m11 - m12 * m21;
    let b11 = -m22 * m10 + m12 * m20;
    let b21 = m21 * m10 - m11 * m20;

    let mut det = m00 * b01 + m01 * b11 + m02 * b21;
    if det.abs() < DET_EPSILON {
        det = DET_EPSILON;
    }
    let inv_det = 1.0 / det;

    let i00 = b01 * inv_det;
    let i01 = (-m22 * m01 + m02 * m21) * inv_det;
    let i02 = (m12 * m01 - m02 * m11) * inv_det;

    let i10 = b11 * inv_det;
    let i11 = (m22 * m00 - m02 * m20) * inv_det;
    let i12 = (-m12 * m00 + m02 * m10) * inv_det;

    let i20 = b21 * inv_det;
    let i21 = (-m21 * m00 + m01 * m20) * inv_det;
    let i22 = (m11 * m00 - m01 * m10) * inv_det;

    // Transpose of the inverse: rows of the inverse become columns.
    #[rustfmt::skip]
    let n = Matrix3::new(
        i00, i01, i02,
        i10, i11, i12,
        i20, i21, i22,
    );
    n
}
