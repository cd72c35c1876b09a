//! Bevy integration: mesh conversion and camera adapter.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::{Camera, GlobalTransform, Mat4, Mesh, Quat, Vec3};

use crate::camera::PickCamera;
use crate::types::{Color, Mesh2d, Mesh3d};

/// Uniform stroke color repeated for every vertex
fn vertex_colors(color: Color, count: usize) -> Vec<[f32; 4]> {
    vec![color.to_array(); count]
}

impl From<&Mesh3d> for Mesh {
    fn from(source: &Mesh3d) -> Self {
        let positions: Vec<[f32; 3]> = source.positions.iter().map(|p| p.to_array()).collect();
        let vertex_count = positions.len();

        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, vertex_colors(source.color, vertex_count));
        mesh.insert_indices(Indices::U32(source.indices.clone()));
        mesh
    }
}

impl From<&Mesh2d> for Mesh {
    /// Positions are placed in the XY plane at z = 0
    fn from(source: &Mesh2d) -> Self {
        let positions: Vec<[f32; 3]> = source
            .positions
            .iter()
            .map(|p| [p.x, p.y, 0.0])
            .collect();
        let vertex_count = positions.len();

        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, vertex_colors(source.color, vertex_count));
        mesh.insert_indices(Indices::U32(source.indices.clone()));
        mesh
    }
}

impl From<Color> for bevy::color::Color {
    fn from(color: Color) -> Self {
        bevy::color::Color::linear_rgba(color.r, color.g, color.b, color.a)
    }
}

/// Pick camera view of a Bevy camera entity
pub struct BevyPickCamera<'a> {
    pub camera: &'a Camera,
    pub transform: &'a GlobalTransform,
}

impl<'a> BevyPickCamera<'a> {
    pub fn new(camera: &'a Camera, transform: &'a GlobalTransform) -> Self {
        Self { camera, transform }
    }
}

impl PickCamera for BevyPickCamera<'_> {
    fn position(&self) -> Vec3 {
        self.transform.translation()
    }

    fn rotation(&self) -> Quat {
        self.transform.rotation()
    }

    fn projection(&self) -> Mat4 {
        self.camera.clip_from_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::camera::{CameraProjection, PerspectiveProjection};
    use bevy::mesh::VertexAttributeValues;
    use bevy::prelude::Transform;
    use glam::Vec2;
    use std::f32::consts::FRAC_PI_2;

    /// Bevy projection with a transform, without needing a camera entity
    struct ProjectedTransform {
        projection: PerspectiveProjection,
        transform: GlobalTransform,
    }

    impl PickCamera for ProjectedTransform {
        fn position(&self) -> Vec3 {
            self.transform.translation()
        }

        fn rotation(&self) -> Quat {
            self.transform.rotation()
        }

        fn projection(&self) -> Mat4 {
            self.projection.get_clip_from_view()
        }
    }

    fn square_projection() -> PerspectiveProjection {
        PerspectiveProjection {
            fov: FRAC_PI_2,
            aspect_ratio: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_mesh3d_to_bevy() {
        let color = Color::rgba(0.1, 0.2, 0.3, 0.4);
        let source = Mesh3d {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            indices: vec![0, 1, 2],
            color,
        };
        let mesh = Mesh::from(&source);

        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("expected Float32x3 positions");
        };
        assert_eq!(positions.len(), 3);
        assert_eq!(positions[1], [1.0, 0.0, 0.0]);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(3));

        let Some(VertexAttributeValues::Float32x4(colors)) = mesh.attribute(Mesh::ATTRIBUTE_COLOR)
        else {
            panic!("expected Float32x4 colors");
        };
        assert_eq!(colors, &vec![color.to_array(); 3]);
    }

    #[test]
    fn test_mesh2d_to_bevy() {
        let source = Mesh2d {
            positions: vec![Vec2::new(0.5, -0.5), Vec2::ZERO],
            indices: vec![],
            color: Color::BLACK,
        };
        let mesh = Mesh::from(&source);

        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("expected Float32x3 positions");
        };
        assert_eq!(positions[0], [0.5, -0.5, 0.0]);

        let Some(VertexAttributeValues::Float32x4(colors)) = mesh.attribute(Mesh::ATTRIBUTE_COLOR)
        else {
            panic!("expected Float32x4 colors");
        };
        assert_eq!(colors.len(), 2);
        assert!(colors.iter().all(|c| *c == Color::BLACK.to_array()));
    }

    #[test]
    fn test_pick_ray_through_reverse_z_projection() {
        let camera = ProjectedTransform {
            projection: square_projection(),
            transform: GlobalTransform::from(Transform::from_xyz(1.0, 2.0, 3.0)),
        };

        let ray = camera.pick_ray(Vec2::ZERO);
        assert!((ray.origin - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-4);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-4);

        let ray = camera.pick_ray(Vec2::new(1.0, 0.0));
        assert!((ray.direction - Vec3::new(1.0, 0.0, -1.0).normalize()).length() < 1e-4);

        let ray = camera.pick_ray(Vec2::new(0.0, 1.0));
        assert!((ray.direction - Vec3::new(0.0, 1.0, -1.0).normalize()).length() < 1e-4);
    }

    #[test]
    fn test_ndc_to_world_through_reverse_z_projection() {
        let camera = ProjectedTransform {
            projection: square_projection(),
            transform: GlobalTransform::from(
                Transform::from_xyz(0.0, 1.0, 0.0).looking_at(Vec3::new(4.0, 1.0, 0.0), Vec3::Y),
            ),
        };

        let world = camera.ndc_to_world(Vec2::new(0.5, -0.25), 2.0);
        let depth = (world - camera.position()).dot(camera.forward());
        assert!((depth - 2.0).abs() < 1e-4);

        let back = camera.world_to_ndc(world).unwrap();
        assert!((back.truncate() - Vec2::new(0.5, -0.25)).length() < 1e-4);
    }
}
