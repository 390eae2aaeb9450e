//! Level generation and the ground-plane collision predicate.
//!
//! Everything here is a pure function of [`LevelParams`]: no randomness,
//! identical input yields byte-identical position/normal arrays.

use cgmath::Vector3;

use super::level_data::{Level, LevelMeshes, LevelParams, Mesh};
use crate::error::WalkResult;

/// Lift of the carpet strip above the floor plane, against z-fighting.
const CARPET_LIFT: f32 = 0.01;

fn add_floor(mesh: &mut Mesh, x0: f32, x1: f32, z0: f32, z1: f32, y: f32) {
    // Seen from above, normal +Y; counter-clockwise from +Y.
    let n = Vector3::new(0.0, 1.0, 0.0);
    let a = Vector3::new(x0, y, z0);
    let b = Vector3::new(x0, y, z1);
    let c = Vector3::new(x1, y, z1);
    let d = Vector3::new(x1, y, z0);
    mesh.push_quad(a, b, c, d, n);
}

fn add_ceiling(mesh: &mut Mesh, x0: f32, x1: f32, z0: f32, z1: f32, y: f32) {
    // Seen from below, normal -Y. Vertex order reversed relative to the
    // floor so the winding stays consistent with the face normal.
    let n = Vector3::new(0.0, -1.0, 0.0);
    let a = Vector3::new(x0, y, z0);
    let b = Vector3::new(x1, y, z0);
    let c = Vector3::new(x1, y, z1);
    let d = Vector3::new(x0, y, z1);
    mesh.push_quad(a, b, c, d, n);
}

/// Vertical wall at x = const. `normal_x` picks which way the face looks;
/// winding is chosen to match it.
fn add_wall_x(mesh: &mut Mesh, x: f32, z0: f32, z1: f32, y0: f32, y1: f32, normal_x: f32) {
    let n = Vector3::new(normal_x, 0.0, 0.0);
    let a = Vector3::new(x, y0, z0);
    let b = Vector3::new(x, y0, z1);
    let c = Vector3::new(x, y1, z1);
    let d = Vector3::new(x, y1, z0);

    if normal_x > 0.0 {
        mesh.push_quad(a, d, c, b, n);
    } else {
        mesh.push_quad(a, b, c, d, n);
    }
}

/// Vertical wall at z = const, winding chosen from `normal_z`.
fn add_wall_z(mesh: &mut Mesh, z: f32, x0: f32, x1: f32, y0: f32, y1: f32, normal_z: f32) {
    let n = Vector3::new(0.0, 0.0, normal_z);
    let a = Vector3::new(x0, y0, z);
    let b = Vector3::new(x1, y0, z);
    let c = Vector3::new(x1, y1, z);
    let d = Vector3::new(x0, y1, z);

    if normal_z > 0.0 {
        mesh.push_quad(a, b, c, d, n);
    } else {
        mesh.push_quad(a, d, c, b, n);
    }
}

/// Builds the full level: floor, carpet, ceiling, walls with a door opening
/// at z = 0, the door slab, and validated parameters.
pub fn generate(params: LevelParams) -> WalkResult<Level> {
    params.validate()?;

    let wc = params.corridor_width;
    let lc = params.corridor_length;
    let s = params.room_size;
    let h = params.wall_height;
    let half_door = params.door_width / 2.0;

    let mut meshes = LevelMeshes::default();

    // Floor: one quad for the corridor footprint, one for the hall.
    add_floor(&mut meshes.floor, -wc / 2.0, wc / 2.0, 0.0, lc, 0.0);
    add_floor(&mut meshes.floor, -s / 2.0, s / 2.0, lc, lc + s, 0.0);

    // Carpet strip of door width down the middle, slightly above the floor.
    add_floor(
        &mut meshes.carpet,
        -half_door,
        half_door,
        0.0,
        lc + s,
        CARPET_LIFT,
    );

    // Ceiling mirrors the floor footprint at wall height.
    add_ceiling(&mut meshes.ceiling, -wc / 2.0, wc / 2.0, 0.0, lc, h);
    add_ceiling(&mut meshes.ceiling, -s / 2.0, s / 2.0, lc, lc + s, h);

    // Corridor side walls, normals facing inward.
    add_wall_x(&mut meshes.walls, -wc / 2.0, 0.0, lc, 0.0, h, 1.0);
    add_wall_x(&mut meshes.walls, wc / 2.0, 0.0, lc, 0.0, h, -1.0);

    // Hall side walls and rear wall.
    add_wall_x(&mut meshes.walls, -s / 2.0, lc, lc + s, 0.0, h, 1.0);
    add_wall_x(&mut meshes.walls, s / 2.0, lc, lc + s, 0.0, h, -1.0);
    add_wall_z(&mut meshes.walls, lc + s, -s / 2.0, s / 2.0, 0.0, h, -1.0);

    // Entry wall at z = 0 in three segments, leaving the door opening:
    // left of the door, right of the door, and the strip above it.
    add_wall_z(&mut meshes.walls, 0.0, -wc / 2.0, -half_door, 0.0, h, 1.0);
    add_wall_z(&mut meshes.walls, 0.0, half_door, wc / 2.0, 0.0, h, 1.0);
    add_wall_z(
        &mut meshes.walls,
        0.0,
        -half_door,
        half_door,
        params.door_height,
        h,
        1.0,
    );

    // Closures where the corridor meets the hall (z = lc): the hall's front
    // wall on both sides of the corridor opening.
    add_wall_z(&mut meshes.walls, lc, -s / 2.0, -wc / 2.0, 0.0, h, 1.0);
    add_wall_z(&mut meshes.walls, lc, wc / 2.0, s / 2.0, 0.0, h, 1.0);

    // Door slab filling the opening, offset along +Z off the entry plane.
    add_wall_z(
        &mut meshes.door,
        params.door_thickness,
        -half_door,
        half_door,
        0.0,
        params.door_height,
        1.0,
    );

    let level = Level { params, meshes };
    log::info!(
        "generated level: corridor {:.1}x{:.1}, hall {:.1}, {} wall tris, {} total verts",
        wc,
        lc,
        s,
        level.meshes.walls.triangle_count(),
        level.meshes.floor.vertex_count()
            + level.meshes.carpet.vertex_count()
            + level.meshes.ceiling.vertex_count()
            + level.meshes.walls.vertex_count()
            + level.meshes.door.vertex_count(),
    );
    Ok(level)
}

/// True when a circle of `radius` at (x, z) overlaps the level bounds.
///
/// Checks, in order: the entry plane (`z < radius`), the corridor width,
/// the hall width, and the rear wall. The corridor/hall boundary at
/// z = corridor_length is a seamless transition (the hall is validated to be
/// at least corridor-wide). The door opening itself is NOT enforced here:
/// no |x| bound is applied near z = 0 beyond the entry plane. Known
/// simplification inherited from the scene this level reproduces; the solid
/// wall segments beside the door are visual-only.
pub fn collides(params: &LevelParams, x: f32, z: f32, radius: f32) -> bool {
    if z < radius {
        return true;
    }

    let corridor_max_x = params.corridor_width / 2.0 - radius;
    let room_max_x = params.room_size / 2.0 - radius;

    // Corridor.
    if z < params.corridor_length {
        return x.abs() > corridor_max_x;
    }

    // Hall, short of the rear wall.
    if z <= params.corridor_length + params.room_size - radius {
        return x.abs() > room_max_x;
    }

    // Past the rear wall.
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math;

    fn reference_params() -> LevelParams {
        LevelParams {
            corridor_width: 5.0,
            corridor_length: 25.0,
            room_size: 10.0,
            wall_height: 4.0,
            door_width: 2.2,
            door_height: 3.0,
            door_thickness: 0.08,
        }
    }

    fn all_meshes(level: &Level) -> [(&'static str, &Mesh); 5] {
        let m = level.meshes();
        [
            ("floor", &m.floor),
            ("carpet", &m.carpet),
            ("ceiling", &m.ceiling),
            ("walls", &m.walls),
            ("door", &m.door),
        ]
    }

    #[test]
    fn generation_is_bit_identical() {
        let a = generate(reference_params()).unwrap();
        let b = generate(reference_params()).unwrap();
        for ((name, ma), (_, mb)) in all_meshes(&a).iter().zip(all_meshes(&b).iter()) {
            let pa: Vec<u32> = ma.positions().iter().map(|f| f.to_bits()).collect();
            let pb: Vec<u32> = mb.positions().iter().map(|f| f.to_bits()).collect();
            assert_eq!(pa, pb, "{name} positions differ between runs");

            let na: Vec<u32> = ma.normals().iter().map(|f| f.to_bits()).collect();
            let nb: Vec<u32> = mb.normals().iter().map(|f| f.to_bits()).collect();
            assert_eq!(na, nb, "{name} normals differ between runs");
        }
    }

    #[test]
    fn meshes_hold_flat_triangle_list_invariants() {
        let level = generate(reference_params()).unwrap();
        for (name, mesh) in all_meshes(&level) {
            assert!(mesh.vertex_count() > 0, "{name} is empty");
            assert_eq!(
                mesh.positions().len(),
                mesh.normals().len(),
                "{name} positions/normals not parallel"
            );
            assert_eq!(mesh.vertex_count() % 3, 0, "{name} not a triangle list");
        }
    }

    #[test]
    fn winding_matches_stored_flat_normal() {
        let level = generate(reference_params()).unwrap();
        for (name, mesh) in all_meshes(&level) {
            let pos = mesh.positions();
            let nor = mesh.normals();
            for t in 0..mesh.triangle_count() {
                let i = t * 9;
                let a = Vector3::new(pos[i], pos[i + 1], pos[i + 2]);
                let b = Vector3::new(pos[i + 3], pos[i + 4], pos[i + 5]);
                let c = Vector3::new(pos[i + 6], pos[i + 7], pos[i + 8]);
                let stored = Vector3::new(nor[i], nor[i + 1], nor[i + 2]);

                let computed = math::normalize(math::cross(b - a, c - a));
                let dot = computed.x * stored.x + computed.y * stored.y + computed.z * stored.z;
                assert!(
                    dot > 0.999,
                    "{name} triangle {t}: winding normal {computed:?} disagrees with stored {stored:?}"
                );
            }
        }
    }

    #[test]
    fn entry_wall_leaves_the_door_opening() {
        let params = reference_params();
        let level = generate(params).unwrap();
        let half_door = params.door_width / 2.0;
        let pos = level.meshes().walls.positions();

        // Any entry-plane vertex strictly inside the opening's x-range must
        // belong to the strip above the door.
        for v in pos.chunks_exact(3) {
            if v[2] == 0.0 && v[0].abs() < half_door - 1e-4 {
                assert!(
                    v[1] >= params.door_height - 1e-4,
                    "wall vertex ({}, {}, {}) intrudes into the door opening",
                    v[0],
                    v[1],
                    v[2]
                );
            }
        }
    }

    #[test]
    fn door_slab_sits_off_the_entry_plane() {
        let params = reference_params();
        let level = generate(params).unwrap();
        for v in level.meshes().door.positions().chunks_exact(3) {
            assert_eq!(v[2], params.door_thickness);
        }
    }

    #[test]
    fn interior_is_free_at_zero_radius() {
        let params = reference_params();
        // Strictly inside the corridor footprint, excluding the entry plane.
        for &(x, z) in &[(0.0, 0.1), (2.4, 12.0), (-2.4, 24.9)] {
            assert!(!collides(&params, x, z, 0.0), "({x}, {z}) should be free");
        }
        // Strictly inside the hall footprint.
        for &(x, z) in &[(0.0, 30.0), (4.9, 25.5), (-4.9, 34.9)] {
            assert!(!collides(&params, x, z, 0.0), "({x}, {z}) should be free");
        }
        // Anything before the entry plane collides.
        assert!(collides(&params, 0.0, -0.001, 0.0));
    }

    #[test]
    fn collision_reference_scenario() {
        let params = reference_params();
        // Inside the corridor, near the entry.
        assert!(!collides(&params, 0.0, 1.5, 0.35));
        // Outside the corridor half-width minus radius (2.5 - 0.35 = 2.15).
        assert!(collides(&params, 3.0, 1.5, 0.35));
        // Before the entry plane.
        assert!(collides(&params, 0.0, -0.1, 0.35));
    }

    #[test]
    fn collision_respects_radius_at_walls_and_rear() {
        let params = reference_params();
        let r = 0.35;
        // Corridor wall: 2.5 half-width, blocked within a radius of it.
        assert!(collides(&params, 2.2, 10.0, r));
        assert!(!collides(&params, 2.1, 10.0, r));
        // Rear wall at z = 35, blocked within a radius of it.
        assert!(collides(&params, 0.0, 34.7, r));
        assert!(!collides(&params, 0.0, 34.6, r));
        // Entry plane keeps the radius out.
        assert!(collides(&params, 0.0, 0.3, r));
        assert!(!collides(&params, 0.0, 0.4, r));
    }

    #[test]
    fn hall_transition_is_seamless_at_corridor_width() {
        let params = reference_params();
        let r = 0.35;
        // Walking straight down the middle across z = corridor_length never
        // collides.
        let mut z = 24.0;
        while z < 27.0 {
            assert!(!collides(&params, 0.0, z, r), "blocked at z = {z}");
            z += 0.05;
        }
    }

    #[test]
    fn generate_rejects_invalid_params() {
        let params = LevelParams {
            room_size: -1.0,
            ..reference_params()
        };
        assert!(generate(params).is_err());
    }

    #[test]
    fn carpet_is_lifted_and_door_wide() {
        let params = reference_params();
        let level = generate(params).unwrap();
        let half_door = params.door_width / 2.0;
        for v in level.meshes().carpet.positions().chunks_exact(3) {
            assert_eq!(v[1], CARPET_LIFT);
            assert!(v[0].abs() <= half_door + 1e-6);
        }
    }
}
