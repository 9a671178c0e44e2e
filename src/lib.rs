//! Camera Rig - gesture disambiguation and a ground-anchored camera rig
//!
//! Turns a raw pointer and keyboard stream into semantic gestures and
//! drives a bounded, smoothed camera rig from them.
//!
//! # Features
//! - Click versus drag disambiguation by pointer travel radius
//! - Drag-pan that keeps the grabbed ground point under the pointer
//! - Orbit around the ground point under the pointer with a pitch clamp
//! - Zoom toward the cursor
//! - Eased position and zoom interpolation
//! - UI occlusion filtering (egui support behind the `egui` feature)
//! - winit event adapter behind the `winit` feature
//!
//! # Frame flow
//!
//! ```text
//! InputSampler -> InputSnapshot -> GestureEngine -> GestureEvent
//!     -> CameraRig (queries GroundProbe) -> RigTransform
//! ```
//!
//! [`RigDriver`] runs this flow once per frame.

pub mod driver;
pub mod error;
pub mod input;
pub mod rig;

pub use driver::RigDriver;
pub use error::{ConfigError, ConfigResult};
pub use input::{GestureConfig, GestureEngine, GestureEvent, InputSampler, InputSnapshot};
pub use rig::{CameraRig, CameraSettings, FlatGround, GroundProbe, RigTransform};

/// Configuration for a [`RigDriver`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RigConfig {
    /// Motion model settings
    pub camera: CameraSettings,
    /// Gesture thresholds and bindings
    pub gesture: GestureConfig,
}

impl RigConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the camera settings
    pub fn with_camera(mut self, camera: CameraSettings) -> Self {
        self.camera = camera;
        self
    }

    /// Builder method to set the gesture config
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.camera.validate()?;
        self.gesture.validate()
    }
}
