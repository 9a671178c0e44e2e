//! Camera view: projection, viewport and screen-to-world rays

use glam::{Mat4, Vec2, Vec3};

/// Perspective lens of the rig camera. The aspect ratio comes from the
/// viewport the projection was built for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::perspective(45.0, Viewport::default().aspect(), 0.1, 1000.0)
    }
}

impl Projection {
    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y_degrees,
            aspect,
            near,
            far,
        }
    }

    /// Near and far clip distances
    pub fn depth_range(&self) -> (f32, f32) {
        (self.near, self.far)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}

/// Size of the screen area pointer positions are measured in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width / height. Returns 1.0 for a degenerate viewport.
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// A half-line in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }

    /// Distance along the ray to the horizontal plane `y = height`.
    ///
    /// `None` when the ray runs parallel to the plane or the plane lies
    /// behind the origin.
    pub fn intersect_horizontal_plane(&self, height: f32) -> Option<f32> {
        let denom = self.direction.y;
        if denom.abs() < 1e-6 {
            return None;
        }
        let distance = (height - self.origin.y) / denom;
        (distance >= 0.0).then_some(distance)
    }
}

/// Everything needed to turn a screen position into a world ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub projection: Projection,
    pub viewport: Viewport,
}

impl CameraView {
    /// Get the view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward, self.up)
    }

    /// Get combined view-projection matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection.matrix() * self.view_matrix()
    }

    /// Ray from the camera through a screen position (top-left origin, y down).
    ///
    /// Returns `None` for a degenerate viewport or a singular view.
    pub fn screen_ray(&self, screen_pos: Vec2) -> Option<Ray> {
        if self.viewport.is_degenerate() {
            return None;
        }

        let ndc = Vec2::new(
            (screen_pos.x / self.viewport.width) * 2.0 - 1.0,
            1.0 - (screen_pos.y / self.viewport.height) * 2.0,
        );

        let view_proj = self.view_projection_matrix();
        if view_proj.determinant().abs() < f32::EPSILON {
            return None;
        }
        let inv = view_proj.inverse();

        // glam's right-handed projections map depth to [0, 1]
        let near_point = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far_point = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        let direction = (far_point - near_point).normalize_or_zero();
        if direction == Vec3::ZERO || !direction.is_finite() {
            return None;
        }

        Some(Ray {
            origin: near_point,
            direction,
        })
    }
}
