//! Ray-surface intersection for stroke projection.
//!
//! Analytic intersection of pick rays with the two surfaces a finished stroke
//! can be projected onto: a sphere (the sky) and an infinite plane (a ground
//! billboard).

use glam::Vec3;

use crate::constants::RAY_EPSILON;

/// Half-line in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing the direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point at distance `t` along the ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Intersect a ray with a sphere.
///
/// Returns the nearest hit in front of the ray origin. When the origin is
/// inside the sphere this is the exit point.
///
/// # Arguments
/// * `ray` - Ray with a unit direction
/// * `center` - Sphere center
/// * `radius` - Sphere radius
///
/// # Returns
/// `Some(point)` on the sphere surface, `None` if the ray misses
pub fn ray_sphere_intersection(ray: &Ray, center: Vec3, radius: f32) -> Option<Vec3> {
    // Solve |o + t*d - c|^2 = r^2 with |d| = 1:
    // t^2 + 2t(d . oc) + (oc . oc - r^2) = 0
    let oc = ray.origin - center;
    let half_b = ray.direction.dot(oc);
    let c = oc.length_squared() - radius * radius;
    let discriminant = half_b * half_b - c;

    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let near = -half_b - sqrt_d;
    let far = -half_b + sqrt_d;

    let t = if near >= RAY_EPSILON {
        near
    } else if far >= RAY_EPSILON {
        far
    } else {
        // Sphere is entirely behind the ray
        return None;
    };

    Some(ray.at(t))
}

/// Intersect a ray with an infinite plane.
///
/// # Arguments
/// * `ray` - Ray with a unit direction
/// * `plane_point` - Any point on the plane
/// * `plane_normal` - Plane normal (any length, non-zero)
///
/// # Returns
/// `Some(point)` on the plane, `None` if the ray is parallel to the plane or
/// the plane is behind the ray origin
pub fn ray_plane_intersection(ray: &Ray, plane_point: Vec3, plane_normal: Vec3) -> Option<Vec3> {
    // t = (plane_point - origin) . n / (direction . n)
    let denom = ray.direction.dot(plane_normal);

    if denom.abs() < RAY_EPSILON {
        return None;
    }

    let t = (plane_point - ray.origin).dot(plane_normal) / denom;

    if t < 0.0 {
        return None;
    }

    Some(ray.at(t))
}
