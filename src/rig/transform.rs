//! Final camera pose produced by the rig each frame

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3, Vec4};

use super::view::{CameraView, Projection, Viewport};

/// Pose of the rig after a tick, ready to hand to a renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigTransform {
    /// Smoothed rig pivot on the ground plane
    pub pivot: Vec3,
    /// Camera position in world space
    pub position: Vec3,
    /// Camera orientation (`yaw * pitch`)
    pub rotation: Quat,
    /// Camera height above the pivot, derived from the smoothed zoom
    pub height: f32,
    pub projection: Projection,
    pub viewport: Viewport,
}

impl RigTransform {
    /// Build the pose for a pivot, orientation and height
    pub fn new(
        pivot: Vec3,
        rotation: Quat,
        height: f32,
        projection: Projection,
        viewport: Viewport,
    ) -> Self {
        Self {
            pivot,
            position: pivot + rotation * Vec3::new(0.0, height, 0.0),
            rotation,
            height,
            projection,
            viewport,
        }
    }

    /// Viewing direction
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Y
    }

    /// Screen-up direction
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Screen-right direction
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Mat4 {
        self.view().view_matrix()
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    /// Get combined view-projection matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// The view used for screen-space probing
    pub fn view(&self) -> CameraView {
        CameraView {
            position: self.position,
            forward: self.forward(),
            up: self.up(),
            projection: self.projection,
            viewport: self.viewport,
        }
    }

    /// Pack the pose for upload to a GPU uniform buffer
    pub fn uniform_data(&self) -> CameraUniformData {
        let view_proj = self.view_projection_matrix();
        let (near, far) = self.projection.depth_range();

        CameraUniformData {
            view_proj,
            inv_view_proj: view_proj.inverse(),
            position: self.position.extend(1.0),
            pivot: self.pivot.extend(1.0),
            depth_height: Vec4::new(near, far, self.height, 0.0),
        }
    }
}

/// GPU layout of a [`RigTransform`]
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniformData {
    pub view_proj: Mat4,
    /// For unprojecting screen positions in shaders
    pub inv_view_proj: Mat4,
    pub position: Vec4,
    pub pivot: Vec4,
    /// `(near, far, height, 0)`
    pub depth_height: Vec4,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rig::geometry::rig_rotation;

    #[test]
    fn level_rig_sits_above_pivot() {
        let transform = RigTransform::new(
            Vec3::new(3.0, 0.0, -2.0),
            Quat::IDENTITY,
            10.0,
            Projection::default(),
            Viewport::default(),
        );
        assert!((transform.position - Vec3::new(3.0, 10.0, -2.0)).length() < 1e-6);
        assert!((transform.forward() - Vec3::NEG_Y).length() < 1e-6);
    }

    #[test]
    fn pitched_rig_still_looks_at_pivot() {
        let transform = RigTransform::new(
            Vec3::ZERO,
            rig_rotation(45.0, 30.0),
            20.0,
            Projection::default(),
            Viewport::default(),
        );
        let to_pivot = (transform.pivot - transform.position).normalize();
        assert!((to_pivot - transform.forward()).length() < 1e-5);
    }

    #[test]
    fn uniform_data_is_plain_bytes() {
        let transform = RigTransform::new(
            Vec3::ZERO,
            Quat::IDENTITY,
            5.0,
            Projection::default(),
            Viewport::default(),
        );
        let data = transform.uniform_data();
        let bytes: &[u8] = bytemuck::bytes_of(&data);
        assert_eq!(bytes.len(), std::mem::size_of::<CameraUniformData>());
        assert_eq!(data.position, Vec4::new(0.0, 5.0, 0.0, 1.0));
        assert_eq!(data.depth_height, Vec4::new(0.1, 1000.0, 5.0, 0.0));
    }
}
