//! Ground-anchored camera rig driven by semantic gestures
//!
//! The rig is a pivot on the ground plane with the camera mounted above it
//! at a height derived from the zoom level. Pivot position and zoom are
//! each smoothed by a [`Tween`]; yaw and pitch apply immediately.

use glam::{Quat, Vec2, Vec3};

use super::geometry::{clamp_pitch, constrain_to_disk, rig_rotation, rotate_around};
use super::probe::GroundProbe;
use super::settings::CameraSettings;
use super::transform::RigTransform;
use super::tween::Tween;
use super::view::{CameraView, Projection, Ray, Viewport};
use crate::error::ConfigResult;

/// A pan in progress
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    screen: Vec2,
    origin: Vec3,
    height: f32,
}

/// An orbit in progress
#[derive(Debug, Clone, Copy, PartialEq)]
struct RotateAnchor {
    /// Previous pointer sample; rotate deltas are incremental
    screen: Vec2,
    pivot: Vec3,
}

/// The camera motion model
#[derive(Debug, Clone)]
pub struct CameraRig {
    settings: CameraSettings,
    position: Tween<Vec3>,
    /// Target is the zoom level, current is the smoothed zoom
    zoom: Tween<f32>,
    yaw: f32,
    pitch: f32,
    two_d_mode: bool,
    viewport: Viewport,
    drag: Option<DragAnchor>,
    rotate: Option<RotateAnchor>,
}

impl CameraRig {
    /// Create a rig resting at the origin with the configured initial zoom
    pub fn new(settings: CameraSettings) -> ConfigResult<Self> {
        settings.validate()?;
        let zoom = settings.initial_zoom;
        let pitch = 0.0f32.clamp(settings.pitch_clamp.0, settings.pitch_clamp.1);
        Ok(Self {
            settings,
            position: Tween::new(Vec3::ZERO),
            zoom: Tween::new(zoom),
            yaw: 0.0,
            pitch,
            two_d_mode: false,
            viewport: Viewport::default(),
            drag: None,
            rotate: None,
        })
    }

    /// Builder method to start in 2D mode
    pub fn with_2d_mode(mut self, enabled: bool) -> Self {
        self.two_d_mode = enabled;
        self
    }

    /// Builder method to set the viewport
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    /// Smoothed pivot position
    pub fn position(&self) -> Vec3 {
        self.position.current()
    }

    /// Position the pivot is gliding toward
    pub fn target_position(&self) -> Vec3 {
        self.position.target()
    }

    /// Zoom level in `[0, 1]`
    pub fn zoom_level(&self) -> f32 {
        self.zoom.target()
    }

    pub fn smoothed_zoom(&self) -> f32 {
        self.zoom.current()
    }

    /// Position interpolation clock in `[0, 1]`
    pub fn position_clock(&self) -> f32 {
        self.position.clock()
    }

    /// Zoom interpolation clock in `[0, 1]`
    pub fn zoom_clock(&self) -> f32 {
        self.zoom.clock()
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn rotation(&self) -> Quat {
        rig_rotation(self.yaw, self.pitch)
    }

    /// Camera height above the pivot for the smoothed zoom
    pub fn height(&self) -> f32 {
        self.settings.height_for_zoom(self.zoom.current())
    }

    pub fn is_2d_mode(&self) -> bool {
        self.two_d_mode
    }

    /// Toggle 2D mode; while enabled rotate gestures only yaw
    pub fn set_2d_mode(&mut self, enabled: bool) {
        self.two_d_mode = enabled;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_rotating(&self) -> bool {
        self.rotate.is_some()
    }

    pub fn projection(&self) -> Projection {
        Projection::perspective(
            self.settings.fov_y_degrees,
            self.viewport.aspect(),
            self.settings.near,
            self.settings.far,
        )
    }

    /// Current smoothed pose
    pub fn transform(&self) -> RigTransform {
        self.transform_at(self.position.current(), self.height())
    }

    /// View of the current pose, used for all screen-space probing
    pub fn view(&self) -> CameraView {
        self.transform().view()
    }

    fn transform_at(&self, pivot: Vec3, height: f32) -> RigTransform {
        RigTransform::new(
            pivot,
            self.rotation(),
            height,
            self.projection(),
            self.viewport,
        )
    }

    fn constrain(&self, point: Vec3) -> Vec3 {
        constrain_to_disk(point, self.settings.bound_radius)
    }

    /// Place the rig without smoothing and drop any gesture anchors.
    ///
    /// Gesture sessions held elsewhere stay open; drag and rotate updates
    /// are ignored until a new `begin_*`. [`RigDriver::reset`](crate::RigDriver::reset)
    /// closes both sides together.
    pub fn set_pose(&mut self, pivot: Vec3, yaw: f32, pitch: f32) {
        let (min, max) = self.settings.pitch_clamp;
        self.position.snap(self.constrain(pivot));
        self.yaw = wrap_degrees(yaw);
        self.pitch = pitch.clamp(min, max);
        self.drag = None;
        self.rotate = None;
    }

    /// Set the zoom level without smoothing
    pub fn set_zoom(&mut self, level: f32) {
        if level.is_finite() {
            self.zoom.snap(level.clamp(0.0, 1.0));
        }
    }

    /// Stop both tweens where they are and forget gesture anchors
    pub fn reanchor(&mut self) {
        self.position.snap(self.position.current());
        self.zoom.snap(self.zoom.current());
        self.drag = None;
        self.rotate = None;
    }

    /// Return to the initial pose, dropping gesture anchors as
    /// [`set_pose`](Self::set_pose) does
    pub fn reset(&mut self) {
        let (min, max) = self.settings.pitch_clamp;
        self.position.snap(Vec3::ZERO);
        self.zoom.snap(self.settings.initial_zoom);
        self.yaw = 0.0;
        self.pitch = 0.0f32.clamp(min, max);
        self.drag = None;
        self.rotate = None;
    }

    /// Nudge the pivot along a screen-relative direction (`+y` is away
    /// from the viewer).
    ///
    /// The step is taken from the smoothed position and becomes the new
    /// target immediately, without restarting the position clock, so held
    /// keys compound every frame.
    pub fn apply_movement(&mut self, direction: Vec2) {
        let planar = Quat::from_rotation_y(self.yaw.to_radians())
            * Vec3::new(direction.x, 0.0, -direction.y);
        let step = planar.normalize_or_zero()
            * (1.0 + self.zoom.target())
            * self.settings.directional_speed;
        let target = self.constrain(self.position.current() + step);
        self.position.set_target(target);
    }

    /// Start a pan at `screen`
    pub fn begin_drag<P: GroundProbe + ?Sized>(&mut self, screen: Vec2, probe: &P) {
        let height = match probe.probe_ground(&self.view(), screen) {
            Some(anchor) => anchor.y,
            None => {
                log::trace!("drag start at {screen:?} missed the ground, anchoring at y = 0");
                0.0
            }
        };
        self.drag = Some(DragAnchor {
            screen,
            origin: self.position.current(),
            height,
        });
    }

    /// Pan so the ground point grabbed at drag start follows the pointer.
    ///
    /// Does nothing if either plane probe misses.
    pub fn update_drag<P: GroundProbe + ?Sized>(&mut self, screen: Vec2, probe: &P) {
        let Some(drag) = self.drag else {
            log::trace!("drag update without an active drag");
            return;
        };
        let view = self.view();
        let start = probe.probe_plane(&view, drag.screen, drag.height);
        let now = probe.probe_plane(&view, screen, drag.height);
        match (start, now) {
            (Some(start), Some(now)) => {
                let target = self.constrain(drag.origin + (start - now));
                self.position.retarget(target);
            }
            _ => log::trace!("drag probe missed at {screen:?}, keeping target"),
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Zoom by a raw scroll delta while keeping the ground point under
    /// `cursor` in place.
    pub fn apply_zoom<P: GroundProbe + ?Sized>(&mut self, delta: f32, cursor: Vec2, probe: &P) {
        if !delta.is_finite() {
            log::trace!("ignoring non-finite zoom delta {delta}");
            return;
        }

        let view = self.view();
        let level = self.zoom.target();
        let sensitivity = self.settings.zoom_curve.evaluate(level);
        let new_level = (level - sensitivity * delta).clamp(0.0, 1.0);
        self.zoom.retarget(new_level);

        let Some(grabbed) = probe.probe_ground(&view, cursor) else {
            log::trace!("zoom cursor {cursor:?} missed the ground, zooming on center");
            return;
        };

        let pivot = self.position.current();
        let zoomed = self
            .transform_at(pivot, self.settings.height_for_zoom(new_level))
            .view();
        match probe.probe_plane(&zoomed, cursor, grabbed.y) {
            Some(moved) => {
                let target = self.constrain(pivot - (moved - grabbed));
                self.position.retarget(target);
            }
            None => log::trace!("post-zoom probe missed at {cursor:?}, pivot unshifted"),
        }
    }

    /// Start orbiting around the ground point under `screen`
    pub fn begin_rotate<P: GroundProbe + ?Sized>(&mut self, screen: Vec2, probe: &P) {
        let pivot = match probe.probe_ground(&self.view(), screen) {
            Some(point) => point,
            None => {
                log::trace!("rotate start at {screen:?} missed the ground, orbiting the pivot");
                self.position.current()
            }
        };
        self.rotate = Some(RotateAnchor { screen, pivot });
    }

    /// Orbit by the pointer travel since the previous rotate sample.
    ///
    /// Horizontal travel yaws around the anchor. Vertical travel pitches
    /// around it unless in 2D mode; a pitch that would leave the clamp
    /// range is rejected as a whole. The resulting pivot is applied
    /// without smoothing.
    pub fn update_rotate(&mut self, screen: Vec2) {
        let Some(mut session) = self.rotate else {
            log::trace!("rotate update without an active rotate");
            return;
        };
        let delta_yaw = (session.screen.x - screen.x) * self.settings.rotate_horizontal_speed;
        let delta_pitch = (session.screen.y - screen.y) * self.settings.rotate_vertical_speed;
        session.screen = screen;
        self.rotate = Some(session);

        let anchor = session.pivot;
        let yawed = self.constrain(rotate_around(
            self.position.current(),
            anchor,
            Vec3::Y,
            delta_yaw,
        ));
        self.yaw = wrap_degrees(self.yaw + delta_yaw);

        let pivot = if self.two_d_mode {
            yawed
        } else {
            self.apply_pitch(yawed, anchor, delta_pitch)
        };
        self.position.snap(pivot);
    }

    /// Returns the pivot to use after pitching by `delta` around `anchor`
    fn apply_pitch(&mut self, pivot: Vec3, anchor: Vec3, delta: f32) -> Vec3 {
        let rotation = self.rotation();
        let tilt = Quat::from_axis_angle(rotation * Vec3::X, delta.to_radians());
        let candidate_pivot = anchor + tilt * (pivot - anchor);
        let candidate_rotation = tilt * rotation;

        let (min, max) = self.settings.pitch_clamp;
        let clamp = match clamp_pitch(candidate_rotation, self.yaw, min, max) {
            Some(clamp) if clamp.is_within_range() => clamp,
            Some(clamp) => {
                log::trace!(
                    "pitch {:.3} outside [{min}, {max}], rotate rejected",
                    clamp.unclamped
                );
                return pivot;
            }
            None => {
                log::trace!("pitch at a half turn, rotate rejected");
                return pivot;
            }
        };

        self.pitch = clamp.clamped;
        let rotation = self.rotation();
        let camera = candidate_pivot + rotation * Vec3::new(0.0, self.height(), 0.0);
        let ray = Ray::new(camera, rotation * Vec3::NEG_Y);
        let reach = self.settings.min_zoom_distance + self.settings.max_zoom_distance;
        match ray.intersect_horizontal_plane(0.0) {
            Some(distance) if distance <= reach => {
                let level = (distance - self.settings.min_zoom_distance)
                    / self.settings.max_zoom_distance;
                self.zoom.set_target(level.clamp(0.0, 1.0));
                self.constrain(ray.point_at(distance))
            }
            _ => {
                log::trace!("ground out of zoom reach after pitch, keeping pivot");
                pivot
            }
        }
    }

    pub fn end_rotate(&mut self) {
        self.rotate = None;
    }

    /// Advance both tweens by `dt` seconds.
    ///
    /// A zero, negative or NaN `dt` leaves the rig untouched.
    pub fn tick(&mut self, dt: f32) -> RigTransform {
        let step = dt / self.settings.tween_duration;
        if step > 0.0 {
            self.zoom.advance(step, &self.settings.tween_curve);
            self.position.advance(step, &self.settings.tween_curve);
        }
        self.transform()
    }
}

/// Wrap an angle into `(-180, 180]`
fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
