//! Stroke mesh builder
//!
//! Widens a freehand centerline into a triangle strip as samples arrive.
//! Each accepted sample contributes one cross-section (a left and a right
//! vertex) and two triangles joining it to the previous cross-section, so the
//! mesh can be shown while the user is still drawing.

use glam::Vec2;
use tracing::{debug, trace};

use crate::constants::DEFAULT_STROKE_WIDTH;
use crate::types::{Color, Mesh2d, SampleOutcome};
use crate::validation::{is_valid_sample, validate_stroke_width, StrokeError};

/// Incremental triangle-strip builder for one drawing gesture
///
/// Invariants:
/// - `vertices.len() == 2 * path.len()`
/// - every index is less than `vertices.len()`
#[derive(Debug, Clone)]
pub struct StrokeMeshBuilder {
    /// Full stroke width in NDC units
    width: f32,
    /// Accepted centerline samples
    path: Vec<Vec2>,
    /// Left/right strip vertices, two per centerline sample
    vertices: Vec<Vec2>,
    /// Flat triangle list
    indices: Vec<u32>,
    /// Uniform stroke color
    color: Color,
    /// Mesh changed since the host last took it
    dirty: bool,
}

impl StrokeMeshBuilder {
    /// Create an empty stroke with the given color and width
    pub fn new(color: Color, width: f32) -> Result<Self, StrokeError> {
        let width = validate_stroke_width(width)?;
        Ok(Self::from_validated_width(color, width))
    }

    /// Create an empty stroke using the default width
    pub fn with_default_width(color: Color) -> Self {
        Self::from_validated_width(color, DEFAULT_STROKE_WIDTH)
    }

    /// Create an empty stroke from a width that already passed
    /// [`validate_stroke_width`]
    pub(crate) fn from_validated_width(color: Color, width: f32) -> Self {
        debug_assert!(validate_stroke_width(width).is_ok());
        Self {
            width,
            path: Vec::new(),
            vertices: Vec::new(),
            indices: Vec::new(),
            color,
            dirty: false,
        }
    }

    /// Feed the next path sample (NDC)
    ///
    /// The first sample seeds a zero-width cross-section. Later samples are
    /// accepted only if they are more than half the stroke width away from
    /// the last accepted sample.
    pub fn add_sample(&mut self, point: Vec2) -> SampleOutcome {
        if !is_valid_sample(point) {
            debug!("StrokeMeshBuilder::add_sample: ignoring non-finite sample {point:?}");
            return SampleOutcome::Rejected;
        }

        let Some(&last) = self.path.last() else {
            self.path.push(point);
            self.vertices.push(point);
            self.vertices.push(point);
            self.dirty = true;
            trace!("StrokeMeshBuilder::add_sample: seeded at {point:?}");
            return SampleOutcome::Seeded;
        };

        let half_width = self.half_width();
        let delta = point - last;
        let distance = delta.length();
        if distance <= half_width {
            return SampleOutcome::Rejected;
        }

        // Rotate the direction 90 degrees counter-clockwise
        let offset = delta.perp() / distance * half_width;
        self.vertices.push(point - offset);
        self.vertices.push(point + offset);

        let base = (self.vertices.len() - 2) as u32;
        self.indices
            .extend_from_slice(&[base, base + 1, base - 2, base - 1, base - 2, base + 1]);
        self.path.push(point);
        self.dirty = true;

        trace!(
            "StrokeMeshBuilder::add_sample: accepted {point:?} ({} samples, {} triangles)",
            self.path.len(),
            self.triangle_count()
        );
        SampleOutcome::Accepted
    }

    /// Full stroke width
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Perpendicular offset applied on each side of the centerline
    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }

    /// Accepted centerline samples
    pub fn path(&self) -> &[Vec2] {
        &self.path
    }

    /// Strip vertices (left, right, left, right, ...)
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Flat triangle index list
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn sample_count(&self) -> usize {
        self.path.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether no sample has been accepted yet
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Change the stroke color; the rendered mesh picks it up on the next update
    pub fn set_color(&mut self, color: Color) {
        if self.color != color {
            self.color = color;
            self.dirty = true;
        }
    }

    /// Build the renderable 2D mesh view of the stroke
    pub fn to_mesh(&self) -> Mesh2d {
        Mesh2d {
            positions: self.vertices.clone(),
            indices: self.indices.clone(),
            color: self.color,
        }
    }

    /// Check if the mesh changed since the last [`Self::take_mesh_update`]
    pub fn has_mesh_update(&self) -> bool {
        self.dirty
    }

    /// Take the mesh for republishing if it changed, clearing the changed flag
    pub fn take_mesh_update(&mut self) -> Option<Mesh2d> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        Some(self.to_mesh())
    }
}
