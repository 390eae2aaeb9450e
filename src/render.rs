//! Seam to the rendering collaborator.
//!
//! The core hands vertex data across this boundary once per mesh and
//! per-frame shading state per draw. Shader compilation, texture decoding,
//! model parsing and the GL/GPU object model all live on the other side of
//! [`RenderBackend`].

use bytemuck::{Pod, Zeroable};
use cgmath::{Matrix4, Point3, Vector3};

use crate::camera::{self, CameraConfig, CameraState};
use crate::level::{Level, LevelParams, Mesh};

/// Borrowed view of one mesh for upload: flat positions, flat normals, and
/// the vertex count the draw call needs.
#[derive(Debug, Clone, Copy)]
pub struct MeshSlice<'a> {
    pub positions: &'a [f32],
    pub normals: &'a [f32],
    pub vertex_count: usize,
}

impl<'a> From<&'a Mesh> for MeshSlice<'a> {
    fn from(mesh: &'a Mesh) -> Self {
        Self {
            positions: mesh.positions(),
            normals: mesh.normals(),
            vertex_count: mesh.vertex_count(),
        }
    }
}

/// Stable names for the level's renderable parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelPart {
    Floor,
    Carpet,
    Walls,
    Ceiling,
    Door,
}

impl LevelPart {
    pub const ALL: [LevelPart; 5] = [
        LevelPart::Floor,
        LevelPart::Carpet,
        LevelPart::Walls,
        LevelPart::Ceiling,
        LevelPart::Door,
    ];

    pub fn mesh(self, level: &Level) -> &Mesh {
        let meshes = level.meshes();
        match self {
            LevelPart::Floor => &meshes.floor,
            LevelPart::Carpet => &meshes.carpet,
            LevelPart::Walls => &meshes.walls,
            LevelPart::Ceiling => &meshes.ceiling,
            LevelPart::Door => &meshes.door,
        }
    }
}

/// Blinn-Phong material parameters, uploaded with each draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub base_color: [f32; 3],
    pub ka: f32,
    pub kd: f32,
    pub ks: f32,
    pub shininess: f32,
}

/// Reference material table for the level parts.
pub fn level_part_material(part: LevelPart) -> Material {
    match part {
        LevelPart::Floor => Material {
            base_color: [0.35, 0.18, 0.08],
            ka: 0.35,
            kd: 0.75,
            ks: 0.08,
            shininess: 12.0,
        },
        LevelPart::Carpet => Material {
            base_color: [0.75, 0.08, 0.10],
            ka: 0.35,
            kd: 0.85,
            ks: 0.05,
            shininess: 8.0,
        },
        LevelPart::Walls => Material {
            base_color: [0.45, 0.45, 0.48],
            ka: 0.25,
            kd: 0.7,
            ks: 0.15,
            shininess: 22.0,
        },
        LevelPart::Ceiling => Material {
            base_color: [0.08, 0.08, 0.22],
            ka: 0.35,
            kd: 0.6,
            ks: 0.12,
            shininess: 18.0,
        },
        LevelPart::Door => Material {
            base_color: [0.35, 0.20, 0.10],
            ka: 0.35,
            kd: 0.65,
            ks: 0.18,
            shininess: 28.0,
        },
    }
}

/// What the rendering collaborator must provide: one upload per mesh, one
/// draw per mesh per frame given a model transform and material.
pub trait RenderBackend {
    type MeshHandle;

    fn upload_mesh(&mut self, mesh: MeshSlice<'_>) -> Self::MeshHandle;

    fn draw_mesh(&mut self, handle: &Self::MeshHandle, model: Matrix4<f32>, material: &Material);
}

/// Camera data mirrored to the GPU once per frame. Layout must match the
/// shader side exactly.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    /// View matrix (column-major).
    pub view: [[f32; 4]; 4],
    /// Projection matrix (column-major).
    pub projection: [[f32; 4]; 4],
    /// Projection * view.
    pub view_projection: [[f32; 4]; 4],
    /// Eye position (vec3 + padding).
    pub position: [f32; 4],
    /// Unit look direction from yaw/pitch (vec3 + padding).
    pub forward: [f32; 4],
    /// Last walk direction on the ground plane (vec3 + padding).
    pub move_dir: [f32; 4],
}

pub fn build_camera_uniform(
    camera: &CameraState,
    config: &CameraConfig,
    aspect: f32,
) -> CameraUniform {
    let view = camera::view_matrix(camera);
    let projection = camera::projection_matrix(config, aspect);
    let view_projection = projection * view;

    let yaw = camera.yaw_deg.to_radians();
    let pitch = camera.pitch_deg.to_radians();
    let forward = Vector3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    );

    CameraUniform {
        view: view.into(),
        projection: projection.into(),
        view_projection: view_projection.into(),
        position: [
            camera.position.x,
            camera.position.y,
            camera.position.z,
            1.0,
        ],
        forward: [forward.x, forward.y, forward.z, 0.0],
        move_dir: [
            camera.last_move_dir.x,
            camera.last_move_dir.y,
            camera.last_move_dir.z,
            0.0,
        ],
    }
}

/// Scene-wide ambient term.
pub const AMBIENT_COLOR: [f32; 3] = [0.10, 0.10, 0.12];

/// Point light parameters for the wandering hall light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Point3<f32>,
    pub color: [f32; 3],
    pub intensity: f32,
    /// Constant, linear, quadratic attenuation.
    pub attenuation: [f32; 3],
}

/// Warm light that wanders the length of the scene near the ceiling,
/// oscillating between corridor and hall.
pub fn moving_light(params: &LevelParams, time_seconds: f32) -> PointLight {
    let t = time_seconds;
    let travel = params.corridor_length + params.room_size - 4.0;
    let z = 2.0 + ((t * 0.35).sin() * 0.5 + 0.5) * travel;
    let x = (t * 0.9).sin() * 2.0;
    let y = params.wall_height - 0.6;

    PointLight {
        position: Point3::new(x, y, z),
        color: [1.0, 0.95, 0.85],
        intensity: 1.5,
        attenuation: [1.0, 0.08, 0.02],
    }
}

/// Spot light carried by the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub position: Point3<f32>,
    pub direction: Vector3<f32>,
    pub color: [f32; 3],
    pub intensity: f32,
    pub attenuation: [f32; 3],
    /// cos of the inner cone angle.
    pub inner_cutoff: f32,
    /// cos of the outer cone angle.
    pub outer_cutoff: f32,
}

/// Torch cone aimed along the last walk direction, so it keeps pointing
/// where the player was headed while they look around.
pub fn torch_light(camera: &CameraState) -> SpotLight {
    SpotLight {
        position: camera.position,
        direction: camera.last_move_dir,
        color: [1.0, 0.85, 0.6],
        intensity: 1.0,
        attenuation: [1.0, 0.14, 0.07],
        inner_cutoff: (12.0_f32).to_radians().cos(),
        outer_cutoff: (20.0_f32).to_radians().cos(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::init_camera;
    use crate::level;
    use approx::assert_relative_eq;

    #[test]
    fn every_part_resolves_to_a_nonempty_mesh() {
        let lvl = level::generate(LevelParams::default()).unwrap();
        for part in LevelPart::ALL {
            let slice = MeshSlice::from(part.mesh(&lvl));
            assert!(slice.vertex_count > 0);
            assert_eq!(slice.positions.len(), slice.vertex_count * 3);
            assert_eq!(slice.normals.len(), slice.positions.len());
        }
    }

    #[test]
    fn material_table_matches_reference_palette() {
        assert_eq!(
            level_part_material(LevelPart::Floor).base_color,
            [0.35, 0.18, 0.08]
        );
        assert_eq!(level_part_material(LevelPart::Walls).shininess, 22.0);
        assert_eq!(level_part_material(LevelPart::Carpet).kd, 0.85);
    }

    #[test]
    fn camera_uniform_composes_view_projection() {
        let config = CameraConfig::default();
        let cam = init_camera(&config);
        let uniform = build_camera_uniform(&cam, &config, 16.0 / 9.0);

        let view: Matrix4<f32> = uniform.view.into();
        let projection: Matrix4<f32> = uniform.projection.into();
        let vp: Matrix4<f32> = uniform.view_projection.into();
        let expected = projection * view;
        for c in 0..4 {
            for r in 0..4 {
                assert_relative_eq!(vp[c][r], expected[c][r], epsilon = 1e-5);
            }
        }
        assert_eq!(uniform.position[1], 1.6);
        assert_eq!(uniform.position[3], 1.0);
        // Spawn yaw faces +Z with no pitch.
        assert_relative_eq!(uniform.forward[2], 1.0, epsilon = 1e-6);
        assert_relative_eq!(uniform.forward[1], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn moving_light_stays_inside_the_scene() {
        let params = LevelParams {
            corridor_width: 5.0,
            corridor_length: 25.0,
            room_size: 10.0,
            ..LevelParams::default()
        };
        let mut t = 0.0;
        while t < 30.0 {
            let light = moving_light(&params, t);
            assert!(light.position.z >= 2.0 - 1e-4);
            assert!(light.position.z <= 2.0 + 25.0 + 10.0 - 4.0 + 1e-4);
            assert!(light.position.x.abs() <= 2.0 + 1e-4);
            assert_eq!(light.position.y, params.wall_height - 0.6);
            t += 0.37;
        }
    }

    #[test]
    fn torch_points_along_last_move_direction() {
        let cam = init_camera(&CameraConfig::default());
        let torch = torch_light(&cam);
        assert_eq!(torch.position, cam.position);
        assert_relative_eq!(torch.direction.z, 1.0, epsilon = 1e-6);
        assert!(torch.inner_cutoff > torch.outer_cutoff);
    }
}
