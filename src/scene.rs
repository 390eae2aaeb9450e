//! The walkthrough scene: configuration, construction, and the per-tick
//! update that ties input, camera and collision together.

use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use anyhow::Context;
use cgmath::Matrix4;
use serde::{Deserialize, Serialize};

use crate::camera::{self, CameraConfig, CameraState};
use crate::constants::{defaults, throne};
use crate::error::{WalkError, WalkResult};
use crate::input::InputState;
use crate::level::{self, Level, LevelParams};
use crate::physics::{
    local_aabb_xz, shrink_aabb_xz, transform_aabb_xz, AabbXz, CollisionWorld, PropPlacement,
};
use crate::render::{self, CameraUniform, LevelPart, RenderBackend};

/// Everything needed to build a walkthrough, loadable from TOML. Every field
/// has a default, so an empty document is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WalkConfig {
    /// Derive the corridor length from walk speed instead of taking
    /// `level.corridor_length` as given. The explicit value is for tests
    /// and hand-tuned levels.
    pub derive_corridor_length: bool,
    pub level: LevelParams,
    pub camera: CameraConfig,
}

impl WalkConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let config: WalkConfig = toml::from_str(text).context("parsing walkthrough config")?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> WalkResult<()> {
        self.resolved_level().validate()?;

        let cam = &self.camera;
        if !(cam.move_speed > 0.0) {
            return Err(WalkError::InvalidConfig {
                field: "move_speed",
                value: cam.move_speed,
                reason: "must be positive",
            });
        }
        if !(cam.radius > 0.0) {
            return Err(WalkError::InvalidConfig {
                field: "radius",
                value: cam.radius,
                reason: "must be positive",
            });
        }
        if !(cam.sensitivity.is_finite() && cam.sensitivity > 0.0) {
            return Err(WalkError::InvalidConfig {
                field: "sensitivity",
                value: cam.sensitivity,
                reason: "must be finite and positive",
            });
        }
        if !(cam.fov_y_deg > 0.0 && cam.fov_y_deg < 180.0) {
            return Err(WalkError::InvalidConfig {
                field: "fov_y_deg",
                value: cam.fov_y_deg,
                reason: "must be in (0, 180)",
            });
        }
        if !(cam.near_plane > 0.0) {
            return Err(WalkError::InvalidConfig {
                field: "near_plane",
                value: cam.near_plane,
                reason: "must be positive",
            });
        }
        if !(cam.far_plane > cam.near_plane) {
            return Err(WalkError::InvalidConfig {
                field: "far_plane",
                value: cam.far_plane,
                reason: "must exceed the near plane",
            });
        }
        Ok(())
    }

    /// Level parameters with the corridor length resolved. The derived
    /// length gives a fixed walking time to the hall at the configured
    /// speed, plus slack, and never shrinks below the minimum.
    pub fn resolved_level(&self) -> LevelParams {
        let mut params = self.level;
        if self.derive_corridor_length {
            let target = self.camera.move_speed * defaults::TARGET_TIME_TO_ROOM
                + self.camera.start_position[2]
                + defaults::CORRIDOR_EXTRA;
            params.corridor_length = target.max(defaults::MIN_CORRIDOR_LENGTH);
        }
        params
    }
}

/// The running walkthrough: generated level, collision world, camera and
/// input, advanced by [`Walkthrough::tick`].
#[derive(Debug)]
pub struct Walkthrough {
    config: WalkConfig,
    level: Level,
    collision: CollisionWorld,
    camera: CameraState,
    input: InputState,
}

impl Walkthrough {
    pub fn new(config: WalkConfig) -> WalkResult<Self> {
        if let Err(err) = config.validate() {
            log::error!("rejecting walkthrough config: {err}");
            return Err(err);
        }
        let params = config.resolved_level();
        let level = level::generate(params)?;
        let collision = CollisionWorld::new(params);
        let camera = camera::init_camera(&config.camera);
        log::info!(
            "walkthrough ready: corridor length {:.1}, spawn at z = {:.1}",
            params.corridor_length,
            config.camera.start_position[2]
        );
        Ok(Self {
            config,
            level,
            collision,
            camera,
            input: InputState::new(),
        })
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn collision(&self) -> &CollisionWorld {
        &self.collision
    }

    /// One simulation step: applies queued pointer-look, then integrates
    /// movement over `dt` with slide collision.
    pub fn tick(&mut self, dt: f32) {
        for delta in self.input.drain_pointer_deltas() {
            self.camera = camera::apply_pointer_delta(&self.camera, delta.dx, delta.dy);
        }
        let held = self.input.held();
        self.camera = camera::tick(&self.camera, held, dt, &self.collision);
    }

    /// Derives a prop's world-space footprint from its vertex positions and
    /// registers it as a collider. The prop blocks movement from this call
    /// onward; callers register each prop as its mesh finishes loading.
    ///
    /// `shrink` must be in (0, 1]. A NaN factor would otherwise put a NaN
    /// box into the collision world and stall every later tick inside the
    /// clamp; a negative one would be silently reordered away by the
    /// world-space transform.
    pub fn register_prop(
        &mut self,
        positions: &[f32],
        placement: PropPlacement,
        shrink: f32,
    ) -> WalkResult<AabbXz> {
        if !(shrink > 0.0 && shrink <= 1.0) {
            return Err(WalkError::InvalidConfig {
                field: "shrink",
                value: shrink,
                reason: "must be in (0, 1]",
            });
        }
        let local = local_aabb_xz(positions)?;
        let world = transform_aabb_xz(shrink_aabb_xz(local, shrink), placement);
        self.collision.add_prop(world);
        log::debug!(
            "prop collider registered: x [{:.2}, {:.2}], z [{:.2}, {:.2}]",
            world.min_x,
            world.max_x,
            world.min_z,
            world.max_z
        );
        Ok(world)
    }

    /// Placement for the throne at the back of the hall, facing the
    /// entrance. The 180° turn is encoded as a negative scale on both axes.
    pub fn throne_placement(&self) -> PropPlacement {
        let params = self.level.params();
        PropPlacement {
            scale_x: -throne::SCALE,
            scale_z: -throne::SCALE,
            tx: throne::POS_X,
            tz: params.corridor_length + params.room_size - throne::BACK_OFFSET,
        }
    }

    /// Registers the throne's collider from its loaded vertex positions.
    pub fn register_throne(&mut self, positions: &[f32]) -> WalkResult<AabbXz> {
        let placement = self.throne_placement();
        self.register_prop(positions, placement, throne::AABB_SHRINK)
    }

    /// Uploads every level part through the backend once, returning the
    /// handles paired with their parts for later draws.
    pub fn upload_level<B: RenderBackend>(&self, backend: &mut B) -> Vec<(LevelPart, B::MeshHandle)> {
        LevelPart::ALL
            .iter()
            .map(|&part| {
                let handle = backend.upload_mesh(part.mesh(&self.level).into());
                (part, handle)
            })
            .collect()
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        camera::view_matrix(&self.camera)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Matrix4<f32> {
        camera::projection_matrix(&self.config.camera, aspect)
    }

    pub fn camera_uniform(&self, aspect: f32) -> CameraUniform {
        render::build_camera_uniform(&self.camera, &self.config.camera, aspect)
    }
}

/// Wall decoration slot along the corridor: position plus a yaw turning the
/// decal to face across the corridor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosterPlacement {
    pub x: f32,
    /// Mounting height of the decal center.
    pub y: f32,
    pub z: f32,
    pub rotate_y_rad: f32,
}

/// Eye-level mounting height shared by every poster slot.
const POSTER_MOUNT_Y: f32 = 1.8;

/// Poster slots along both corridor walls, staggered so facing pairs never
/// line up, stopping short of the hall.
pub fn poster_placements(params: &LevelParams) -> Vec<PosterPlacement> {
    let inset = params.corridor_width / 2.0 - 0.05;
    let limit = params.corridor_length - 1.0;
    let mut slots = Vec::new();

    let mut z = 4.0;
    while z < limit {
        slots.push(PosterPlacement {
            x: -inset,
            y: POSTER_MOUNT_Y,
            z,
            rotate_y_rad: FRAC_PI_2,
        });
        z += 5.0;
    }

    let mut z = 6.5;
    while z < limit {
        slots.push(PosterPlacement {
            x: inset,
            y: POSTER_MOUNT_Y,
            z,
            rotate_y_rad: -FRAC_PI_2,
        });
        z += 5.0;
    }

    slots
}
