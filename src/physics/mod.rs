//! Player-vs-static collision.
//!
//! - `prop_aabb.rs`: pure functions reducing a prop mesh to an XZ box
//! - `collision_world.rs`: composition of the level predicate with all
//!   registered prop boxes

pub mod collision_world;
pub mod prop_aabb;

pub use collision_world::CollisionWorld;
pub use prop_aabb::{
    circle_intersects_aabb_xz, local_aabb_xz, shrink_aabb_xz, transform_aabb_xz, AabbXz,
    PropPlacement,
};
