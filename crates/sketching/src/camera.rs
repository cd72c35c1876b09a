//! Camera abstraction for pick rays.
//!
//! The host's camera only needs to expose its world placement and projection
//! matrix; ray construction and un-projection are provided on top of that.

use glam::{Mat3, Mat4, Quat, Vec2, Vec3};
use skysketch_config::CameraDefaults;

use crate::constants::PICK_NDC_DEPTH;
use crate::raycast::Ray;

/// Camera that can cast rays through normalized device coordinates.
///
/// View space follows the right-handed convention: the camera looks down its
/// local -Z axis with +Y up.
pub trait PickCamera {
    /// World-space position
    fn position(&self) -> Vec3;

    /// World-space orientation
    fn rotation(&self) -> Quat;

    /// View-to-clip projection matrix
    fn projection(&self) -> Mat4;

    /// Clip-to-view matrix
    fn inverse_projection(&self) -> Mat4 {
        self.projection().inverse()
    }

    /// Ray from the camera position through an NDC point
    fn pick_ray(&self, ndc: Vec2) -> Ray {
        let view_point = self
            .inverse_projection()
            .project_point3(Vec3::new(ndc.x, ndc.y, PICK_NDC_DEPTH));
        Ray::new(self.position(), self.rotation() * view_point)
    }

    /// World-space point for an NDC position at the given view depth
    /// (distance along the camera's forward axis)
    fn ndc_to_world(&self, ndc: Vec2, depth: f32) -> Vec3 {
        let view_point = self
            .inverse_projection()
            .project_point3(Vec3::new(ndc.x, ndc.y, PICK_NDC_DEPTH));
        // Rescale along the ray so that -z equals the requested depth
        let scaled = view_point * (depth / -view_point.z);
        self.position() + self.rotation() * scaled
    }

    /// NDC position of a world-space point, `None` if it is behind the camera
    fn world_to_ndc(&self, point: Vec3) -> Option<Vec3> {
        let view_point = self.rotation().inverse() * (point - self.position());
        if view_point.z >= 0.0 {
            return None;
        }
        Some(self.projection().project_point3(view_point))
    }

    /// Unit forward direction in world space
    fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }
}

/// Free-standing perspective camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub rotation: Quat,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Viewport width / height
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    /// Create a camera at `position` with `rotation` and default lens settings
    pub fn new(position: Vec3, rotation: Quat, aspect: f32) -> Self {
        Self::from_config(&CameraDefaults::default(), position, rotation, aspect)
    }

    /// Create a camera using lens settings from configuration
    pub fn from_config(config: &CameraDefaults, position: Vec3, rotation: Quat, aspect: f32) -> Self {
        Self {
            position,
            rotation,
            fov_y: config.fov_y,
            aspect,
            near: config.near,
            far: config.far,
        }
    }

    /// Set the vertical field of view in radians
    pub fn with_fov_y(mut self, fov_y: f32) -> Self {
        self.fov_y = fov_y;
        self
    }

    /// Point the camera at `target`, keeping `up` as close to vertical as possible
    pub fn looking_at(mut self, target: Vec3, up: Vec3) -> Self {
        let forward = (target - self.position).normalize();
        let right = forward.cross(up).normalize();
        let up = right.cross(forward);
        self.rotation = Quat::from_mat3(&Mat3::from_cols(right, up, -forward));
        self
    }
}

impl PickCamera for PerspectiveCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-4;

    fn square_camera(position: Vec3) -> PerspectiveCamera {
        PerspectiveCamera::new(position, Quat::IDENTITY, 1.0).with_fov_y(FRAC_PI_2)
    }

    #[test]
    fn test_center_ray_points_forward() {
        let camera = square_camera(Vec3::new(1.0, 2.0, 3.0));
        let ray = camera.pick_ray(Vec2::ZERO);
        assert!((ray.origin - Vec3::new(1.0, 2.0, 3.0)).length() < EPSILON);
        assert!((ray.direction - Vec3::NEG_Z).length() < EPSILON);
        assert!((camera.forward() - Vec3::NEG_Z).length() < EPSILON);
    }

    #[test]
    fn test_edge_ray_matches_field_of_view() {
        let camera = square_camera(Vec3::ZERO);
        let ray = camera.pick_ray(Vec2::new(1.0, 0.0));
        let expected = Vec3::new(1.0, 0.0, -1.0).normalize();
        assert!((ray.direction - expected).length() < EPSILON);

        let ray = camera.pick_ray(Vec2::new(0.0, -1.0));
        let expected = Vec3::new(0.0, -1.0, -1.0).normalize();
        assert!((ray.direction - expected).length() < EPSILON);
    }

    #[test]
    fn test_rotated_camera_ray() {
        // Turn to face +X
        let rotation = Quat::from_rotation_y(-FRAC_PI_2);
        let camera = PerspectiveCamera::new(Vec3::ZERO, rotation, 1.0);
        let ray = camera.pick_ray(Vec2::ZERO);
        assert!((ray.direction - Vec3::X).length() < EPSILON);
    }

    #[test]
    fn test_looking_at() {
        let camera = square_camera(Vec3::new(0.0, 0.0, 5.0)).looking_at(Vec3::new(5.0, 0.0, 5.0), Vec3::Y);
        assert!((camera.forward() - Vec3::X).length() < EPSILON);
        assert!((camera.rotation * Vec3::Y - Vec3::Y).length() < EPSILON);
    }

    #[test]
    fn test_ndc_world_round_trip() {
        let camera = square_camera(Vec3::new(0.0, 1.0, 0.0))
            .looking_at(Vec3::new(3.0, 0.0, -4.0), Vec3::Y);
        let ndc = Vec2::new(0.25, -0.5);
        let world = camera.ndc_to_world(ndc, 2.0);

        let back = camera.world_to_ndc(world).unwrap();
        assert!((back.truncate() - ndc).length() < EPSILON);

        let depth = (world - camera.position).dot(camera.forward());
        assert!((depth - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_world_to_ndc_behind_camera() {
        let camera = square_camera(Vec3::ZERO);
        assert!(camera.world_to_ndc(Vec3::new(0.0, 0.0, 1.0)).is_none());
    }
}
