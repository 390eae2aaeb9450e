//! Procedural corridor-and-hall level.
//!
//! - `level_data.rs`: parameter and mesh data structures
//! - `level_operations.rs`: generation and the XZ collision predicate

pub mod level_data;
pub mod level_operations;

pub use level_data::{Level, LevelMeshes, LevelParams, Mesh};
pub use level_operations::{collides, generate};
