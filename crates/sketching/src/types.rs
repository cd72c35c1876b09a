use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Uniform RGBA stroke color
///
/// Laid out for direct upload as a shader uniform.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);

    /// Create a color from its components
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Get the color as an `[r, g, b, a]` array
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

/// Result of feeding one path sample to a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// First sample of the stroke, pushed as a zero-width cross-section
    Seeded,
    /// Sample accepted, one cross-section and two triangles added
    Accepted,
    /// Sample too close to the last accepted one (or not finite), nothing changed
    Rejected,
}

/// Screen-space triangle mesh with position-only 2D vertices
///
/// Indices are a flat triangle list (3 per triangle).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh2d {
    pub positions: Vec<Vec2>,
    pub indices: Vec<u32>,
    pub color: Color,
}

impl Mesh2d {
    /// Get the number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex positions as raw bytes for GPU upload
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Index buffer as raw bytes for GPU upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// World-space triangle mesh produced by projection or overlay placement
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh3d {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub color: Color,
}

impl Mesh3d {
    /// Get the number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether every index references an existing vertex
    pub fn indices_in_bounds(&self) -> bool {
        let count = self.positions.len() as u32;
        self.indices.iter().all(|&i| i < count)
    }

    /// Vertex positions as raw bytes for GPU upload
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Index buffer as raw bytes for GPU upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Stroke mesh standing upright on the ground, facing the camera it was drawn from
#[derive(Debug, Clone, PartialEq)]
pub struct Billboard {
    /// World point the plane passes through
    pub anchor: Vec3,
    /// Horizontal unit normal pointing toward the drawing camera
    pub normal: Vec3,
    /// Projected stroke in world space
    pub mesh: Mesh3d,
}

/// Surface a finished stroke is projected onto
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceTarget {
    /// Sphere surrounding the scene
    Sky { center: Vec3, radius: f32 },
    /// Vertical plane through `anchor`, turned toward the camera
    Ground { anchor: Vec3 },
}

impl SurfaceTarget {
    /// Sky sphere centered at the world origin
    pub fn sky(radius: f32) -> Self {
        SurfaceTarget::Sky {
            center: Vec3::ZERO,
            radius,
        }
    }
}

/// Finished stroke placed in the scene
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectedArtwork {
    Sky(Mesh3d),
    Billboard(Billboard),
}

impl ProjectedArtwork {
    /// The world-space mesh regardless of the surface kind
    pub fn mesh(&self) -> &Mesh3d {
        match self {
            ProjectedArtwork::Sky(mesh) => mesh,
            ProjectedArtwork::Billboard(billboard) => &billboard.mesh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_mesh2d_byte_views() {
        let mesh = Mesh2d {
            positions: vec![Vec2::new(0.0, 1.0), Vec2::new(-0.5, 0.25), Vec2::ZERO],
            indices: vec![0, 1, 2],
            color: Color::WHITE,
        };
        assert_eq!(mesh.position_bytes().len(), 3 * size_of::<Vec2>());
        assert_eq!(mesh.index_bytes().len(), 3 * size_of::<u32>());
        assert_eq!(&mesh.position_bytes()[4..8], &1.0f32.to_ne_bytes());
        assert_eq!(&mesh.index_bytes()[8..12], &2u32.to_ne_bytes());
    }

    #[test]
    fn test_mesh3d_byte_views() {
        let mesh = Mesh3d {
            positions: vec![Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0)],
            indices: vec![0, 1, 1, 1, 0, 0],
            color: Color::BLACK,
        };
        assert_eq!(mesh.position_bytes().len(), 2 * size_of::<Vec3>());
        assert_eq!(mesh.index_bytes().len(), 6 * size_of::<u32>());
        assert_eq!(&mesh.position_bytes()[20..24], &3.0f32.to_ne_bytes());
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.indices_in_bounds());
    }

    #[test]
    fn test_mesh3d_indices_out_of_bounds() {
        let mesh = Mesh3d {
            positions: vec![Vec3::ZERO, Vec3::X],
            indices: vec![0, 1, 2],
            color: Color::WHITE,
        };
        assert!(!mesh.indices_in_bounds());
    }

    #[test]
    fn test_empty_mesh_byte_views() {
        let mesh = Mesh2d::default();
        assert!(mesh.position_bytes().is_empty());
        assert!(mesh.index_bytes().is_empty());
    }

    #[test]
    fn test_color_array_conversions() {
        let color = Color::from([0.1, 0.2, 0.3, 0.4]);
        assert_eq!(color, Color::rgba(0.1, 0.2, 0.3, 0.4));
        assert_eq!(<[f32; 4]>::from(color), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(bytemuck::bytes_of(&color).len(), 4 * size_of::<f32>());
    }
}
