//! First-person walkthrough core: a procedurally generated corridor-and-hall
//! level, ground-plane slide collision, and a first-person camera, kept
//! independent of any particular renderer or window layer.
//!
//! The crate owns simulation state and geometry; rendering crosses the
//! [`render::RenderBackend`] seam as flat triangle lists and per-frame
//! shading state. A typical embedding:
//!
//! ```
//! use hallwalk::input::HeldDirections;
//! use hallwalk::scene::{WalkConfig, Walkthrough};
//!
//! let mut walk = Walkthrough::new(WalkConfig::default())?;
//! walk.input_mut().set_held(HeldDirections {
//!     forward: true,
//!     ..HeldDirections::default()
//! });
//! walk.tick(1.0 / 60.0);
//! let view = walk.view_matrix();
//! # let _ = view;
//! # Ok::<(), hallwalk::error::WalkError>(())
//! ```

pub mod camera;
pub mod constants;
pub mod error;
pub mod input;
pub mod level;
pub mod math;
pub mod physics;
pub mod render;
pub mod scene;

pub use error::{WalkError, WalkResult};
pub use scene::{WalkConfig, Walkthrough};
