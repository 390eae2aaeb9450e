//! Level data structures. Generation and the collision predicate live in
//! level_operations.rs.

use cgmath::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{WalkError, WalkResult};

/// Dimensions of the corridor-and-hall level, in world units. Fixed at
/// generation time; never mutated afterwards.
///
/// Coordinate convention: the corridor occupies z in [0, corridor_length],
/// the hall z in [corridor_length, corridor_length + room_size], both
/// centered on x = 0, with the door opening centered in the wall at z = 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelParams {
    pub corridor_width: f32,
    pub corridor_length: f32,
    pub room_size: f32,
    pub wall_height: f32,
    pub door_width: f32,
    pub door_height: f32,
    /// Offset of the door slab along +Z, which also keeps it off the entry
    /// wall plane (z-fighting).
    pub door_thickness: f32,
}

impl Default for LevelParams {
    fn default() -> Self {
        Self {
            corridor_width: 6.0,
            corridor_length: 18.0,
            room_size: 20.0,
            wall_height: 4.0,
            door_width: 2.2,
            door_height: 3.0,
            door_thickness: 0.08,
        }
    }
}

fn require_positive(field: &'static str, value: f32) -> WalkResult<()> {
    // Negated comparison also rejects NaN.
    if !(value > 0.0) {
        return Err(WalkError::InvalidConfig {
            field,
            value,
            reason: "must be positive",
        });
    }
    Ok(())
}

impl LevelParams {
    /// Fails fast on dimensions that would produce broken geometry.
    pub fn validate(&self) -> WalkResult<()> {
        require_positive("corridor_width", self.corridor_width)?;
        require_positive("corridor_length", self.corridor_length)?;
        require_positive("room_size", self.room_size)?;
        require_positive("wall_height", self.wall_height)?;
        require_positive("door_width", self.door_width)?;
        require_positive("door_height", self.door_height)?;
        require_positive("door_thickness", self.door_thickness)?;

        if self.door_width > self.corridor_width {
            return Err(WalkError::InvalidConfig {
                field: "door_width",
                value: self.door_width,
                reason: "wider than the corridor",
            });
        }
        if self.door_height > self.wall_height {
            return Err(WalkError::InvalidConfig {
                field: "door_height",
                value: self.door_height,
                reason: "taller than the walls",
            });
        }
        // The collision predicate treats the corridor/hall boundary as a
        // seamless transition, which only holds when the hall is at least as
        // wide as the corridor.
        if self.room_size < self.corridor_width {
            return Err(WalkError::InvalidConfig {
                field: "room_size",
                value: self.room_size,
                reason: "narrower than the corridor",
            });
        }
        Ok(())
    }
}

/// Flat, non-indexed triangle list: positions and normals run parallel, and
/// each triangle's three vertices share one flat normal. Built once by the
/// generator, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    positions: Vec<f32>,
    normals: Vec<f32>,
}

impl Mesh {
    /// Vertex positions as a flat x/y/z array, 9 floats per triangle.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat per-vertex normals, parallel to `positions`.
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    pub(crate) fn push_tri(
        &mut self,
        a: Vector3<f32>,
        b: Vector3<f32>,
        c: Vector3<f32>,
        n: Vector3<f32>,
    ) {
        for v in [a, b, c] {
            self.positions.extend([v.x, v.y, v.z]);
            self.normals.extend([n.x, n.y, n.z]);
        }
    }

    /// Two triangles a-b-c and a-c-d sharing the flat normal `n`.
    pub(crate) fn push_quad(
        &mut self,
        a: Vector3<f32>,
        b: Vector3<f32>,
        c: Vector3<f32>,
        d: Vector3<f32>,
        n: Vector3<f32>,
    ) {
        self.push_tri(a, b, c, n);
        self.push_tri(a, c, d, n);
    }
}

/// The renderable parts of a generated level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelMeshes {
    pub floor: Mesh,
    pub carpet: Mesh,
    pub ceiling: Mesh,
    pub walls: Mesh,
    pub door: Mesh,
}

/// A generated level: parameters, meshes and the collision predicate over
/// the XZ ground plane. Created once at startup, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub(crate) params: LevelParams,
    pub(crate) meshes: LevelMeshes,
}

impl Level {
    pub fn params(&self) -> &LevelParams {
        &self.params
    }

    pub fn meshes(&self) -> &LevelMeshes {
        &self.meshes
    }

    /// True when a circle of `radius` at (x, z) may not stand there. See
    /// [`level_operations::collides`](super::level_operations::collides).
    pub fn collides(&self, x: f32, z: f32, radius: f32) -> bool {
        super::level_operations::collides(&self.params, x, z, radius)
    }
}
