//! Crate-wide error type.
//!
//! Only configuration and prop-registration problems surface as errors.
//! Degenerate math (zero-length normalize, near-singular normal matrix) and
//! timestep anomalies recover locally with defined fallbacks so the frame
//! loop never stalls on a fault from this crate.

use thiserror::Error;

/// Type alias for Results in the walkthrough core.
pub type WalkResult<T> = Result<T, WalkError>;

#[derive(Debug, Error)]
pub enum WalkError {
    /// A dimension or tuning value that must be rejected at build time.
    /// Silently clamping would change the generated geometry unexpectedly.
    #[error("invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },

    /// A prop mesh with no vertices has no derivable footprint.
    #[error("prop mesh has no vertices")]
    EmptyPropMesh,

    /// Vertex positions must come in x/y/z triples.
    #[error("prop mesh positions length {len} is not a multiple of 3")]
    RaggedPropMesh { len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_display_names_field_and_reason() {
        let err = WalkError::InvalidConfig {
            field: "corridor_width",
            value: -1.0,
            reason: "must be positive",
        };
        assert_eq!(
            err.to_string(),
            "invalid config: corridor_width = -1 (must be positive)"
        );
    }
}
