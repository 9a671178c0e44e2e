//! Configuration errors
//!
//! Gesture and camera operations never fail at runtime: probe misses and
//! rejected rotations are silent no-ops. The only fallible step is building
//! a rig from settings that cannot produce a stable camera.

use thiserror::Error;

/// Error returned when rig or gesture settings are unusable
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Tween duration must be positive and finite, got {0}")]
    InvalidTweenDuration(f32),
    #[error("Invalid zoom distance range: min {min}, max {max}")]
    InvalidZoomRange { min: f32, max: f32 },
    #[error("Bound radius must be positive and finite, got {0}")]
    InvalidBoundRadius(f32),
    #[error("Invalid pitch clamp range: [{min}, {max}] degrees")]
    InvalidPitchRange { min: f32, max: f32 },
    #[error("Initial zoom must lie in [0, 1], got {0}")]
    InvalidInitialZoom(f32),
    #[error("Invalid curve: {0}")]
    InvalidCurve(String),
    #[error("Invalid projection: {0}")]
    InvalidProjection(String),
    #[error("Click radius must be non-negative and finite, got {0}")]
    InvalidClickRadius(f32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
