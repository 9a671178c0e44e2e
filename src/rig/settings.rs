//! Camera rig settings

use super::curve::Curve;
use crate::error::{ConfigError, ConfigResult};

/// Read-only configuration of a [`CameraRig`](super::CameraRig).
///
/// Distances are world units, angles are degrees and rotate speeds are
/// degrees per pixel of pointer travel.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraSettings {
    /// Keyboard pan distance per frame per held key (before zoom scaling)
    pub directional_speed: f32,
    /// Yaw degrees per horizontal pixel while rotating
    pub rotate_horizontal_speed: f32,
    /// Pitch degrees per vertical pixel while rotating
    pub rotate_vertical_speed: f32,
    /// Camera height at zoom level 0
    pub min_zoom_distance: f32,
    /// Height added at zoom level 1 (`height = min + zoom * max`)
    pub max_zoom_distance: f32,
    /// Seconds for a tween clock to run from 0 to 1
    pub tween_duration: f32,
    /// Easing applied to the tween clock
    pub tween_curve: Curve,
    /// Scroll sensitivity as a function of the current zoom level
    pub zoom_curve: Curve,
    /// Radius of the disk around the origin the rig pivot is confined to
    pub bound_radius: f32,
    /// Allowed pitch range in degrees; 0 looks straight down
    pub pitch_clamp: (f32, f32),
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Zoom level the rig starts at and is reset to
    pub initial_zoom: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            directional_speed: 0.5,
            rotate_horizontal_speed: 0.25,
            rotate_vertical_speed: 0.25,
            min_zoom_distance: 5.0,
            max_zoom_distance: 60.0,
            tween_duration: 0.25,
            tween_curve: Curve::EaseInOut,
            zoom_curve: Curve::from_points(&[(0.0, 0.02), (1.0, 0.1)]),
            bound_radius: 100.0,
            pitch_clamp: (0.0, 85.0),
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 1000.0,
            initial_zoom: 1.0,
        }
    }
}

impl CameraSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the keyboard pan speed
    pub fn with_directional_speed(mut self, speed: f32) -> Self {
        self.directional_speed = speed;
        self
    }

    /// Set yaw and pitch speeds (degrees per pixel)
    pub fn with_rotate_speeds(mut self, horizontal: f32, vertical: f32) -> Self {
        self.rotate_horizontal_speed = horizontal;
        self.rotate_vertical_speed = vertical;
        self
    }

    /// Set the zoom height mapping
    pub fn with_zoom_distances(mut self, min: f32, max: f32) -> Self {
        self.min_zoom_distance = min;
        self.max_zoom_distance = max;
        self
    }

    /// Set tween duration and easing
    pub fn with_tween(mut self, duration: f32, curve: Curve) -> Self {
        self.tween_duration = duration;
        self.tween_curve = curve;
        self
    }

    /// Set the zoom sensitivity curve
    pub fn with_zoom_curve(mut self, curve: Curve) -> Self {
        self.zoom_curve = curve;
        self
    }

    /// Set the bound disk radius
    pub fn with_bound_radius(mut self, radius: f32) -> Self {
        self.bound_radius = radius;
        self
    }

    /// Set the pitch clamp range in degrees
    pub fn with_pitch_clamp(mut self, min: f32, max: f32) -> Self {
        self.pitch_clamp = (min, max);
        self
    }

    /// Set the starting zoom level
    pub fn with_initial_zoom(mut self, zoom: f32) -> Self {
        self.initial_zoom = zoom;
        self
    }

    /// Set the perspective lens
    pub fn with_lens(mut self, fov_y_degrees: f32, near: f32, far: f32) -> Self {
        self.fov_y_degrees = fov_y_degrees;
        self.near = near;
        self.far = far;
        self
    }

    /// Camera height above the pivot for a zoom level
    pub fn height_for_zoom(&self, zoom: f32) -> f32 {
        self.min_zoom_distance + zoom * self.max_zoom_distance
    }

    /// Check every field the motion model relies on
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.tween_duration.is_finite() && self.tween_duration > 0.0) {
            return Err(ConfigError::InvalidTweenDuration(self.tween_duration));
        }

        let (min, max) = (self.min_zoom_distance, self.max_zoom_distance);
        if !(min.is_finite() && max.is_finite() && min >= 0.0 && max > 0.0) {
            return Err(ConfigError::InvalidZoomRange { min, max });
        }

        if !(self.bound_radius.is_finite() && self.bound_radius > 0.0) {
            return Err(ConfigError::InvalidBoundRadius(self.bound_radius));
        }

        let (pitch_min, pitch_max) = self.pitch_clamp;
        if !(pitch_min > -90.0 && pitch_max < 90.0 && pitch_min <= pitch_max) {
            return Err(ConfigError::InvalidPitchRange {
                min: pitch_min,
                max: pitch_max,
            });
        }

        if !(0.0..=1.0).contains(&self.initial_zoom) {
            return Err(ConfigError::InvalidInitialZoom(self.initial_zoom));
        }

        self.tween_curve.validate()?;
        self.zoom_curve.validate()?;

        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(ConfigError::InvalidProjection(format!(
                "field of view {} is outside (0, 180) degrees",
                self.fov_y_degrees
            )));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(ConfigError::InvalidProjection(format!(
                "clip planes near {} / far {} are not ordered",
                self.near, self.far
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(CameraSettings::default().validate().is_ok());
    }

    #[test]
    fn height_follows_zoom_mapping() {
        let settings = CameraSettings::default().with_zoom_distances(5.0, 60.0);
        assert_eq!(settings.height_for_zoom(0.0), 5.0);
        assert_eq!(settings.height_for_zoom(1.0), 65.0);
        assert_eq!(settings.height_for_zoom(0.5), 35.0);
    }

    #[test]
    fn zero_tween_duration_is_rejected() {
        let settings = CameraSettings::default().with_tween(0.0, Curve::Linear);
        assert_eq!(
            settings.validate(),
            Err(ConfigError::InvalidTweenDuration(0.0))
        );
    }

    #[test]
    fn inverted_pitch_range_is_rejected() {
        let settings = CameraSettings::default().with_pitch_clamp(40.0, 10.0);
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidPitchRange { .. })
        ));
    }

    #[test]
    fn vertical_pitch_limit_is_rejected() {
        let settings = CameraSettings::default().with_pitch_clamp(0.0, 90.0);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn bad_curve_surfaces_as_curve_error() {
        let settings = CameraSettings::default().with_zoom_curve(Curve::Keyframes(Vec::new()));
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidCurve(_))
        ));
    }
}
