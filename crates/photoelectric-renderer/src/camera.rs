//! Orbit camera for the 3D scene

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

/// Camera uniform for GPU
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Camera-space right axis, for billboards
    pub right: [f32; 3],
    pub time: f32,
    /// Camera-space up axis, for billboards
    pub up: [f32; 3],
    pub surface_height: f32,
    /// min x, max x, min z, max z of the metal slab top
    pub surface_bounds: [f32; 4],
    pub surface_color: [f32; 4],
}

/// Camera orbiting a target point
pub struct Camera {
    pub distance: f32,
    pub rotation: Quat,
    pub target: Vec3,
    pub aspect: f32,
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Looks at the origin from (0, 15, 35), slightly above the beam
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            distance: Self::HOME_OFFSET.length(),
            rotation: Self::home_rotation(),
            target: Vec3::ZERO,
            aspect: width as f32 / height.max(1) as f32,
            fovy: 75.0_f32.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    const HOME_OFFSET: Vec3 = Vec3::new(0.0, 15.0, 35.0);

    fn home_rotation() -> Quat {
        Quat::from_rotation_x(-Self::HOME_OFFSET.y.atan2(Self::HOME_OFFSET.z))
    }

    /// Return to the initial viewpoint
    pub fn reset(&mut self) {
        self.distance = Self::HOME_OFFSET.length();
        self.rotation = Self::home_rotation();
        self.target = Vec3::ZERO;
    }

    pub fn position(&self) -> Vec3 {
        let offset = self.rotation * Vec3::new(0.0, 0.0, self.distance);
        self.target + offset
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    pub fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        let yaw_rotation = Quat::from_axis_angle(Vec3::Y, delta_x);

        let right = self.rotation * Vec3::X;
        let pitch_rotation = Quat::from_axis_angle(right, -delta_y);

        self.rotation = yaw_rotation * pitch_rotation * self.rotation;
        self.rotation = self.rotation.normalize();
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance + delta).clamp(5.0, 200.0);
    }

    pub fn build_view_projection_matrix(&self) -> Mat4 {
        let position = self.position();
        let rotation_matrix = Mat4::from_quat(self.rotation.conjugate());
        let translation_matrix = Mat4::from_translation(-position);
        let view = rotation_matrix * translation_matrix;
        let proj = Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn starts_above_and_in_front_of_origin() {
        let camera = Camera::new(1600, 900);
        assert!(close(camera.position(), Vec3::new(0.0, 15.0, 35.0)));
    }

    #[test]
    fn origin_projects_to_screen_centre() {
        let camera = Camera::new(1600, 900);
        let clip = camera.build_view_projection_matrix() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn reset_undoes_orbit() {
        let mut camera = Camera::new(800, 600);
        camera.rotate(0.7, -0.2);
        camera.zoom(20.0);
        camera.reset();
        assert!(close(camera.position(), Vec3::new(0.0, 15.0, 35.0)));
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = Camera::new(800, 600);
        camera.zoom(-1000.0);
        assert_eq!(camera.distance, 5.0);
        camera.zoom(1000.0);
        assert_eq!(camera.distance, 200.0);
    }
}
