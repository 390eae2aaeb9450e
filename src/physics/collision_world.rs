//! Composition of every static collider the player can run into.

use super::prop_aabb::{circle_intersects_aabb_xz, AabbXz};
use crate::level::{level_operations, LevelParams};

/// The level predicate OR'd with all registered prop boxes.
///
/// Props load asynchronously and join the world only once their box has been
/// derived; until then they have no entry here and block nothing. That gap
/// is expected, not a bug: collision starts applying from the tick the box
/// is registered.
#[derive(Debug, Clone)]
pub struct CollisionWorld {
    level: LevelParams,
    props: Vec<AabbXz>,
}

impl CollisionWorld {
    pub fn new(level: LevelParams) -> Self {
        Self {
            level,
            props: Vec::new(),
        }
    }

    pub fn add_prop(&mut self, world_aabb: AabbXz) {
        self.props.push(world_aabb);
    }

    pub fn prop_count(&self) -> usize {
        self.props.len()
    }

    /// True when a circle of `radius` at (x, z) hits the level bounds or any
    /// registered prop.
    pub fn blocked(&self, x: f32, z: f32, radius: f32) -> bool {
        level_operations::collides(&self.level, x, z, radius)
            || self
                .props
                .iter()
                .any(|aabb| circle_intersects_aabb_xz(x, z, radius, aabb))
    }
}
