//! Surface projection for finished strokes.
//!
//! A flattened stroke is placed in the scene by casting a pick ray from the
//! camera through each of its NDC vertices and intersecting it with a target
//! surface:
//! - [`project_onto_sky`] / [`project_onto_sphere`] - a sphere around the scene
//! - [`project_onto_ground`] - a vertical plane anchored at a world point,
//!   turned toward the camera
//!
//! Rays that miss the surface drop their vertex. Triangles touching a dropped
//! vertex are removed and the remaining indices are remapped, so the output
//! index buffer always references valid vertices. When nothing misses the
//! index buffer is identical to the stroke's.

use glam::{Vec2, Vec3};
use thiserror::Error;
use tracing::{debug, warn};

use crate::camera::PickCamera;
use crate::constants::MIN_GROUND_DISTANCE_SQ;
use crate::raycast::{ray_plane_intersection, ray_sphere_intersection, Ray};
use crate::types::{Billboard, Mesh2d, Mesh3d, ProjectedArtwork, SurfaceTarget};

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProjectionError {
    #[error("Invalid sphere radius: {0} (must be positive and finite)")]
    InvalidRadius(f32),
    #[error("Camera at {camera:?} is directly above or below ground anchor {anchor:?}")]
    DegenerateGroundNormal { anchor: Vec3, camera: Vec3 },
}

/// Surface that pick rays can be intersected with
pub trait ProjectionSurface {
    /// Intersect a ray with the surface, `None` on a miss
    fn intersect(&self, ray: &Ray) -> Option<Vec3>;
}

/// Sphere surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    /// Create a sphere, rejecting non-positive or non-finite radii
    pub fn new(center: Vec3, radius: f32) -> Result<Self, ProjectionError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ProjectionError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }
}

impl ProjectionSurface for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        ray_sphere_intersection(ray, self.center, self.radius)
    }
}

/// Infinite plane surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    /// Unit normal
    pub normal: Vec3,
}

impl Plane {
    /// Vertical plane through `anchor` whose normal is the horizontal
    /// direction from the anchor toward `camera_position`
    pub fn facing_camera(anchor: Vec3, camera_position: Vec3) -> Result<Self, ProjectionError> {
        let mut to_camera = camera_position - anchor;
        to_camera.y = 0.0;

        if to_camera.length_squared() < MIN_GROUND_DISTANCE_SQ {
            return Err(ProjectionError::DegenerateGroundNormal {
                anchor,
                camera: camera_position,
            });
        }

        Ok(Self {
            point: anchor,
            normal: to_camera.normalize(),
        })
    }

    /// Signed distance from the plane (positive on the normal side)
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        (point - self.point).dot(self.normal)
    }
}

impl ProjectionSurface for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        ray_plane_intersection(ray, self.point, self.normal)
    }
}

/// Result of projecting a stroke onto a surface
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// Projected mesh with reconciled indices
    pub mesh: Mesh3d,
    /// NDC positions whose rays missed the surface, in input order
    pub missed: Vec<Vec2>,
    /// Triangles removed because they referenced a missed vertex
    pub dropped_triangles: usize,
}

impl Projection {
    /// Whether every vertex hit the surface
    pub fn is_complete(&self) -> bool {
        self.missed.is_empty()
    }
}

/// Project every vertex of `stroke` onto `surface` along the camera's pick rays.
pub fn project_onto_surface<S, C>(stroke: &Mesh2d, camera: &C, surface: &S) -> Projection
where
    S: ProjectionSurface + ?Sized,
    C: PickCamera + ?Sized,
{
    let mut positions = Vec::with_capacity(stroke.positions.len());
    let mut remap: Vec<Option<u32>> = Vec::with_capacity(stroke.positions.len());
    let mut missed = Vec::new();

    for &ndc in &stroke.positions {
        let ray = camera.pick_ray(ndc);
        match surface.intersect(&ray) {
            Some(hit) => {
                remap.push(Some(positions.len() as u32));
                positions.push(hit);
            }
            None => {
                remap.push(None);
                missed.push(ndc);
            }
        }
    }

    let (indices, dropped_triangles) = remap_triangles(&stroke.indices, &remap);

    Projection {
        mesh: Mesh3d {
            positions,
            indices,
            color: stroke.color,
        },
        missed,
        dropped_triangles,
    }
}

/// Rewrite a flat triangle list through an old-to-new vertex remap.
///
/// Triangles with any unmapped (or out of range) vertex are dropped.
/// Returns the new index list and the number of dropped triangles.
pub fn remap_triangles(indices: &[u32], remap: &[Option<u32>]) -> (Vec<u32>, usize) {
    let mut out = Vec::with_capacity(indices.len());
    let mut dropped = 0;

    for tri in indices.chunks_exact(3) {
        match remap_triangle(tri, remap) {
            Some(mapped) => out.extend_from_slice(&mapped),
            None => dropped += 1,
        }
    }

    (out, dropped)
}

fn remap_triangle(tri: &[u32], remap: &[Option<u32>]) -> Option<[u32; 3]> {
    let &[a, b, c] = tri else {
        return None;
    };
    let lookup = |i: u32| remap.get(i as usize).copied().flatten();
    Some([lookup(a)?, lookup(b)?, lookup(c)?])
}

/// Project a stroke onto a sphere.
///
/// # Arguments
/// * `stroke` - Flattened stroke in NDC
/// * `camera` - Camera the stroke was drawn from
/// * `center` - Sphere center in world space
/// * `radius` - Sphere radius
pub fn project_onto_sphere<C>(
    stroke: &Mesh2d,
    camera: &C,
    center: Vec3,
    radius: f32,
) -> Result<Projection, ProjectionError>
where
    C: PickCamera + ?Sized,
{
    let sphere = Sphere::new(center, radius)?;
    let projection = project_onto_surface(stroke, camera, &sphere);

    if !projection.is_complete() {
        debug!(
            "project_onto_sphere: {} of {} vertices missed the sphere, dropped {} triangles",
            projection.missed.len(),
            stroke.positions.len(),
            projection.dropped_triangles
        );
    }

    Ok(projection)
}

/// Project a stroke onto the sky sphere centered at the world origin.
pub fn project_onto_sky<C>(
    stroke: &Mesh2d,
    camera: &C,
    radius: f32,
) -> Result<Projection, ProjectionError>
where
    C: PickCamera + ?Sized,
{
    project_onto_sphere(stroke, camera, Vec3::ZERO, radius)
}

/// Project a stroke onto a vertical plane through `anchor` facing the camera.
///
/// The plane normal is the horizontal direction from the anchor to the
/// camera, so the billboard stands upright with no tilt.
pub fn project_onto_ground<C>(
    stroke: &Mesh2d,
    camera: &C,
    anchor: Vec3,
) -> Result<Billboard, ProjectionError>
where
    C: PickCamera + ?Sized,
{
    let plane = Plane::facing_camera(anchor, camera.position())?;
    let projection = project_onto_surface(stroke, camera, &plane);

    for ndc in &projection.missed {
        warn!("project_onto_ground: ray through {ndc:?} missed the billboard plane");
    }
    if projection.dropped_triangles > 0 {
        debug!(
            "project_onto_ground: dropped {} triangles",
            projection.dropped_triangles
        );
    }

    Ok(Billboard {
        anchor,
        normal: plane.normal,
        mesh: projection.mesh,
    })
}

/// Project a stroke onto the given target surface.
pub fn project<C>(
    stroke: &Mesh2d,
    camera: &C,
    target: &SurfaceTarget,
) -> Result<ProjectedArtwork, ProjectionError>
where
    C: PickCamera + ?Sized,
{
    match *target {
        SurfaceTarget::Sky { center, radius } => {
            project_onto_sphere(stroke, camera, center, radius).map(|p| ProjectedArtwork::Sky(p.mesh))
        }
        SurfaceTarget::Ground { anchor } => {
            project_onto_ground(stroke, camera, anchor).map(ProjectedArtwork::Billboard)
        }
    }
}
