//! Screen-space overlay placement.
//!
//! Hosts without a 2D drawing layer can show the live stroke by placing it in
//! the 3D scene on a plane just in front of the camera. Each NDC vertex is
//! un-projected through the camera's inverse projection onto that plane, so
//! the mesh covers exactly the same pixels as the flat stroke.

use crate::camera::PickCamera;
use crate::types::{Mesh2d, Mesh3d};

/// Camera-facing plane used to display a 2D mesh in a 3D scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenOverlay {
    /// Distance in front of the camera along its forward axis
    pub depth: f32,
}

impl Default for ScreenOverlay {
    fn default() -> Self {
        Self { depth: 1.0 }
    }
}

impl ScreenOverlay {
    pub fn new(depth: f32) -> Self {
        Self { depth }
    }

    /// Lift a screen-space mesh into world space in front of `camera`.
    ///
    /// Vertex order, indices and color are kept as is.
    pub fn place<C>(&self, mesh: &Mesh2d, camera: &C) -> Mesh3d
    where
        C: PickCamera + ?Sized,
    {
        Mesh3d {
            positions: mesh
                .positions
                .iter()
                .map(|&ndc| camera.ndc_to_world(ndc, self.depth))
                .collect(),
            indices: mesh.indices.clone(),
            color: mesh.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::PerspectiveCamera;
    use crate::types::Color;
    use glam::{Quat, Vec2, Vec3};

    #[test]
    fn test_overlay_covers_same_pixels() {
        let camera = PerspectiveCamera::new(Vec3::new(0.0, 2.0, 4.0), Quat::IDENTITY, 16.0 / 9.0)
            .looking_at(Vec3::ZERO, Vec3::Y);
        let mesh = Mesh2d {
            positions: vec![Vec2::new(-0.5, 0.1), Vec2::new(0.3, -0.7), Vec2::new(0.9, 0.9)],
            indices: vec![0, 1, 2],
            color: Color::BLACK,
        };

        let overlay = ScreenOverlay::new(0.5);
        let placed = overlay.place(&mesh, &camera);

        assert_eq!(placed.indices, mesh.indices);
        assert_eq!(placed.color, mesh.color);
        for (world, ndc) in placed.positions.iter().zip(&mesh.positions) {
            let back = camera.world_to_ndc(*world).unwrap();
            assert!((back.truncate() - *ndc).length() < 1e-4);

            let depth = (*world - camera.position).dot(camera.forward());
            assert!((depth - 0.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_overlay_empty_mesh() {
        let camera = PerspectiveCamera::new(Vec3::ZERO, Quat::IDENTITY, 1.0);
        let placed = ScreenOverlay::default().place(&Mesh2d::default(), &camera);
        assert!(placed.positions.is_empty());
        assert!(placed.indices.is_empty());
    }
}
