//! Ground and plane probes used by the rig to anchor gestures in the world

use glam::{Vec2, Vec3};

use super::view::{CameraView, Ray};

/// Default reach of a [`SurfaceProbe`] raycast in world units
pub const DEFAULT_RAYCAST_DISTANCE: f32 = 500.0;

/// Turns screen positions into world points under a given camera view.
///
/// Both queries return `None` on a miss; callers treat that as "leave the
/// camera where it is" rather than an error.
pub trait GroundProbe {
    /// World point under `screen`, on scene geometry if any, otherwise on
    /// the ground plane `y = 0`
    fn probe_ground(&self, view: &CameraView, screen: Vec2) -> Option<Vec3>;

    /// World point under `screen` on the horizontal plane `y = height`
    fn probe_plane(&self, view: &CameraView, screen: Vec2, height: f32) -> Option<Vec3> {
        let ray = view.screen_ray(screen)?;
        let distance = ray.intersect_horizontal_plane(height)?;
        Some(ray.point_at(distance))
    }
}

impl<P: GroundProbe + ?Sized> GroundProbe for &P {
    fn probe_ground(&self, view: &CameraView, screen: Vec2) -> Option<Vec3> {
        (**self).probe_ground(view, screen)
    }

    fn probe_plane(&self, view: &CameraView, screen: Vec2, height: f32) -> Option<Vec3> {
        (**self).probe_plane(view, screen, height)
    }
}

impl<P: GroundProbe + ?Sized> GroundProbe for Box<P> {
    fn probe_ground(&self, view: &CameraView, screen: Vec2) -> Option<Vec3> {
        (**self).probe_ground(view, screen)
    }

    fn probe_plane(&self, view: &CameraView, screen: Vec2, height: f32) -> Option<Vec3> {
        (**self).probe_plane(view, screen, height)
    }
}

/// An infinite flat world at `y = 0`
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatGround;

impl GroundProbe for FlatGround {
    fn probe_ground(&self, view: &CameraView, screen: Vec2) -> Option<Vec3> {
        self.probe_plane(view, screen, 0.0)
    }
}

/// Scene geometry a [`SurfaceProbe`] can cast rays against
pub trait GroundSurface {
    /// Closest hit along `ray` no further than `max_distance`
    fn raycast(&self, ray: &Ray, max_distance: f32) -> Option<Vec3>;
}

impl<F> GroundSurface for F
where
    F: Fn(&Ray, f32) -> Option<Vec3>,
{
    fn raycast(&self, ray: &Ray, max_distance: f32) -> Option<Vec3> {
        self(ray, max_distance)
    }
}

/// Probe that hits scene geometry first and falls back to the plane `y = 0`
#[derive(Debug, Clone)]
pub struct SurfaceProbe<S> {
    surface: S,
    max_distance: f32,
}

impl<S: GroundSurface> SurfaceProbe<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            max_distance: DEFAULT_RAYCAST_DISTANCE,
        }
    }

    /// Set how far the geometry raycast reaches
    pub fn with_max_distance(mut self, distance: f32) -> Self {
        self.max_distance = distance;
        self
    }

    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: GroundSurface> GroundProbe for SurfaceProbe<S> {
    fn probe_ground(&self, view: &CameraView, screen: Vec2) -> Option<Vec3> {
        let ray = view.screen_ray(screen)?;
        if let Some(hit) = self.surface.raycast(&ray, self.max_distance) {
            return Some(hit);
        }
        let distance = ray.intersect_horizontal_plane(0.0)?;
        Some(ray.point_at(distance))
    }
}
