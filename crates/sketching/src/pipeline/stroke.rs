//! Stroke handling for the sketching pipeline

use glam::Vec2;
use tracing::{debug, info};

use crate::camera::PickCamera;
use crate::projection::project;
use crate::stroke::StrokeMeshBuilder;
use crate::types::{Mesh2d, SampleOutcome, SurfaceTarget};

use super::{ActiveStroke, ArtworkId, PipelineError, SketchPipeline};

impl SketchPipeline {
    /// Begin a stroke
    ///
    /// A stroke already in progress is discarded.
    pub fn begin_stroke(&mut self, stroke_id: u64) {
        if let Some(previous) = self.active.take() {
            debug!(
                "begin_stroke: discarding unfinished stroke {} ({} samples)",
                previous.stroke_id,
                previous.builder.sample_count()
            );
        }

        // stroke_width is validated in new() and set_stroke_width()
        let builder = StrokeMeshBuilder::from_validated_width(self.color, self.stroke_width);
        self.active = Some(ActiveStroke { stroke_id, builder });
    }

    /// Continue the stroke with a new NDC sample
    ///
    /// Returns `None` if no stroke is in progress.
    pub fn stroke_to(&mut self, point: Vec2) -> Option<SampleOutcome> {
        let Some(active) = self.active.as_mut() else {
            debug!("stroke_to: no active stroke, ignoring");
            return None;
        };
        Some(active.builder.add_sample(point))
    }

    /// Take the live preview mesh if it changed since the last call
    pub fn take_preview(&mut self) -> Option<Mesh2d> {
        self.active
            .as_mut()
            .and_then(|active| active.builder.take_mesh_update())
    }

    /// Finish the current stroke by projecting it onto `target`
    ///
    /// A stroke without triangles is discarded with [`PipelineError::EmptyStroke`].
    /// If projection fails the stroke stays active so it can be finished onto
    /// another target.
    pub fn finish_stroke<C>(
        &mut self,
        camera: &C,
        target: &SurfaceTarget,
    ) -> Result<ArtworkId, PipelineError>
    where
        C: PickCamera + ?Sized,
    {
        let active = self.active.take().ok_or(PipelineError::NoActiveStroke)?;

        if active.builder.triangle_count() == 0 {
            debug!("finish_stroke: stroke {} has no triangles", active.stroke_id);
            return Err(PipelineError::EmptyStroke(active.stroke_id));
        }

        let mesh = active.builder.to_mesh();
        let artwork = match project(&mesh, camera, target) {
            Ok(artwork) => artwork,
            Err(err) => {
                self.active = Some(active);
                return Err(err.into());
            }
        };

        let id = self.store_artwork(active.stroke_id, artwork);
        info!(
            "Finished stroke {} as artwork {:?} ({} triangles)",
            active.stroke_id,
            id,
            active.builder.triangle_count()
        );
        Ok(id)
    }

    /// Cancel the current stroke
    ///
    /// The stroke is discarded without producing an artwork.
    pub fn cancel_stroke(&mut self) {
        if let Some(active) = self.active.take() {
            debug!("cancel_stroke: discarded stroke {}", active.stroke_id);
        }
    }

    /// Check if a stroke is currently in progress
    pub fn is_stroking(&self) -> bool {
        self.active.is_some()
    }
}
