//! XZ footprint collider for static props.
//!
//! A loaded prop mesh is reduced once to a conservative axis-aligned box on
//! the ground plane; runtime queries are then circle-vs-box. Pure functions,
//! no stored state.

use crate::error::{WalkError, WalkResult};

/// Axis-aligned box restricted to the XZ (horizontal) plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AabbXz {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

/// Ground-plane transform shared by a prop's model matrix and its collision
/// box: per-axis scale (negative values encode a 180° flip) plus an XZ
/// translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropPlacement {
    pub scale_x: f32,
    pub scale_z: f32,
    pub tx: f32,
    pub tz: f32,
}

/// Scans flat x/y/z vertex positions for their XZ extent in local space.
///
/// An empty mesh is an error: an all-infinity box would silently block (or
/// fail to block) everything.
pub fn local_aabb_xz(positions: &[f32]) -> WalkResult<AabbXz> {
    if positions.is_empty() {
        return Err(WalkError::EmptyPropMesh);
    }
    if positions.len() % 3 != 0 {
        return Err(WalkError::RaggedPropMesh {
            len: positions.len(),
        });
    }

    let mut aabb = AabbXz {
        min_x: f32::INFINITY,
        max_x: f32::NEG_INFINITY,
        min_z: f32::INFINITY,
        max_z: f32::NEG_INFINITY,
    };
    for v in positions.chunks_exact(3) {
        let (x, z) = (v[0], v[2]);
        aabb.min_x = aabb.min_x.min(x);
        aabb.max_x = aabb.max_x.max(x);
        aabb.min_z = aabb.min_z.min(z);
        aabb.max_z = aabb.max_z.max(z);
    }
    Ok(aabb)
}

/// Shrinks the box toward its center, `factor` applied to each half-extent.
/// Compensates for a visual silhouette that is larger than the prop's
/// solid-feeling footprint.
pub fn shrink_aabb_xz(aabb: AabbXz, factor: f32) -> AabbXz {
    let cx = (aabb.min_x + aabb.max_x) * 0.5;
    let cz = (aabb.min_z + aabb.max_z) * 0.5;
    let ex = (aabb.max_x - aabb.min_x) * 0.5 * factor;
    let ez = (aabb.max_z - aabb.min_z) * 0.5 * factor;
    AabbXz {
        min_x: cx - ex,
        max_x: cx + ex,
        min_z: cz - ez,
        max_z: cz + ez,
    }
}

/// Applies the prop's placement to the box corners and re-derives min/max.
/// A negative scale swaps which corner is "min", so the ordering cannot be
/// assumed to survive the transform.
pub fn transform_aabb_xz(local: AabbXz, placement: PropPlacement) -> AabbXz {
    let x1 = placement.scale_x * local.min_x + placement.tx;
    let x2 = placement.scale_x * local.max_x + placement.tx;
    let z1 = placement.scale_z * local.min_z + placement.tz;
    let z2 = placement.scale_z * local.max_z + placement.tz;

    AabbXz {
        min_x: x1.min(x2),
        max_x: x1.max(x2),
        min_z: z1.min(z2),
        max_z: z1.max(z2),
    }
}

/// Circle-vs-box: clamp the center into the box, compare squared distance.
pub fn circle_intersects_aabb_xz(cx: f32, cz: f32, radius: f32, aabb: &AabbXz) -> bool {
    let closest_x = cx.clamp(aabb.min_x, aabb.max_x);
    let closest_z = cz.clamp(aabb.min_z, aabb.max_z);
    let dx = cx - closest_x;
    let dz = cz - closest_z;
    dx * dx + dz * dz < radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_positions_are_an_error() {
        assert!(matches!(
            local_aabb_xz(&[]),
            Err(WalkError::EmptyPropMesh)
        ));
    }

    #[test]
    fn ragged_positions_are_an_error() {
        assert!(matches!(
            local_aabb_xz(&[1.0, 2.0]),
            Err(WalkError::RaggedPropMesh { len: 2 })
        ));
    }

    #[test]
    fn local_aabb_spans_all_vertices() {
        // Two vertices; y is ignored.
        let aabb = local_aabb_xz(&[-1.0, 9.0, 2.0, 3.0, -9.0, -4.0]).unwrap();
        assert_eq!(aabb.min_x, -1.0);
        assert_eq!(aabb.max_x, 3.0);
        assert_eq!(aabb.min_z, -4.0);
        assert_eq!(aabb.max_z, 2.0);
    }

    #[test]
    fn shrink_keeps_center_and_scales_extent() {
        let aabb = AabbXz {
            min_x: 0.0,
            max_x: 4.0,
            min_z: -2.0,
            max_z: 2.0,
        };
        let shrunk = shrink_aabb_xz(aabb, 0.5);
        assert_relative_eq!(shrunk.min_x, 1.0);
        assert_relative_eq!(shrunk.max_x, 3.0);
        assert_relative_eq!(shrunk.min_z, -1.0);
        assert_relative_eq!(shrunk.max_z, 1.0);
    }

    #[test]
    fn negative_scale_reorders_min_and_max() {
        let local = AabbXz {
            min_x: 1.0,
            max_x: 2.0,
            min_z: 3.0,
            max_z: 5.0,
        };
        // 180°-rotation-as-negative-scale, as used for the throne.
        let world = transform_aabb_xz(
            local,
            PropPlacement {
                scale_x: -1.5,
                scale_z: -1.5,
                tx: 0.0,
                tz: 33.0,
            },
        );
        assert!(world.min_x <= world.max_x);
        assert!(world.min_z <= world.max_z);
        assert_relative_eq!(world.min_x, -3.0);
        assert_relative_eq!(world.max_x, -1.5);
        assert_relative_eq!(world.min_z, 33.0 - 7.5);
        assert_relative_eq!(world.max_z, 33.0 - 4.5);
    }

    #[test]
    fn circle_test_clamps_to_closest_point() {
        let aabb = AabbXz {
            min_x: -1.0,
            max_x: 1.0,
            min_z: -1.0,
            max_z: 1.0,
        };
        // Center inside.
        assert!(circle_intersects_aabb_xz(0.0, 0.0, 0.1, &aabb));
        // Near an edge, within the radius.
        assert!(circle_intersects_aabb_xz(1.2, 0.0, 0.3, &aabb));
        // Near a corner: diagonal distance sqrt(0.08) > 0.25.
        assert!(!circle_intersects_aabb_xz(1.2, 1.2, 0.25, &aabb));
        // Exactly touching counts as separate (strict inequality).
        assert!(!circle_intersects_aabb_xz(1.5, 0.0, 0.5, &aabb));
    }
}
