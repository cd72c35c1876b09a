//! Complete sketching pipeline
//!
//! This module connects:
//! - Input handling (NDC samples from the host's input systems)
//! - Stroke mesh building (live triangle strip)
//! - Surface projection (sky sphere or ground billboard)
//! - Artwork storage (finished strokes owned by the scene)
//!
//! The pipeline is driven from the host's per-frame callbacks but does not
//! depend on any engine itself.

mod artworks;
mod stroke;

use glam::Vec3;
use skysketch_config::SketchConfig;
use thiserror::Error;

use crate::projection::ProjectionError;
use crate::stroke::StrokeMeshBuilder;
use crate::types::{Color, SurfaceTarget};
use crate::validation::{validate_stroke_width, StrokeError};

pub use artworks::{Artwork, ArtworkId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("No stroke in progress - call begin_stroke() first")]
    NoActiveStroke,
    #[error("Stroke {0} has no triangles to project")]
    EmptyStroke(u64),
    #[error("Stroke error: {0}")]
    Stroke(#[from] StrokeError),
    #[error("Projection error: {0}")]
    Projection(#[from] ProjectionError),
}

/// Stroke currently being drawn
#[derive(Debug, Clone)]
pub(crate) struct ActiveStroke {
    pub(crate) stroke_id: u64,
    pub(crate) builder: StrokeMeshBuilder,
}

/// Sketching pipeline for one viewport
///
/// This struct manages the full drawing workflow:
/// 1. Input comes in via `begin_stroke`, `stroke_to`, `finish_stroke`
/// 2. The stroke builder widens samples into a triangle strip
/// 3. The live strip is handed to the host through `take_preview`
/// 4. On finish the strip is projected onto a surface and stored as an artwork
pub struct SketchPipeline {
    /// Configuration the pipeline was created with
    pub(crate) config: SketchConfig,
    /// Color for new strokes (and the active one)
    pub(crate) color: Color,
    /// Width for new strokes
    pub(crate) stroke_width: f32,
    /// Stroke in progress (None if not drawing)
    pub(crate) active: Option<ActiveStroke>,
    /// Finished artworks in creation order
    pub(crate) artworks: Vec<Artwork>,
    /// Next artwork id to hand out
    pub(crate) next_artwork_id: u64,
}

impl Default for SketchPipeline {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}

impl SketchPipeline {
    /// Create a new pipeline from configuration
    ///
    /// An invalid configured stroke width falls back to the default width.
    pub fn new(config: SketchConfig) -> Self {
        let stroke_width = validate_stroke_width(config.stroke.width)
            .unwrap_or(crate::constants::DEFAULT_STROKE_WIDTH);
        Self {
            color: Color::from(config.stroke.color),
            stroke_width,
            config,
            active: None,
            artworks: Vec::new(),
            next_artwork_id: 0,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Set the stroke color (applies to the active stroke too)
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        if let Some(active) = self.active.as_mut() {
            active.builder.set_color(color);
        }
    }

    /// Get the current stroke color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the width used for the next stroke
    pub fn set_stroke_width(&mut self, width: f32) -> Result<(), PipelineError> {
        self.stroke_width = validate_stroke_width(width)?;
        Ok(())
    }

    /// Get the width used for new strokes
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Sky sphere target from configuration
    pub fn sky_target(&self) -> SurfaceTarget {
        SurfaceTarget::Sky {
            center: Vec3::from(self.config.sky.center),
            radius: self.config.sky.radius,
        }
    }
}
