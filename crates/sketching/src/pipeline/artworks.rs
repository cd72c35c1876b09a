//! Finished artwork storage for the sketching pipeline

use crate::types::ProjectedArtwork;

use super::SketchPipeline;

/// Identifier of a finished artwork within a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtworkId(pub u64);

/// A projected stroke owned by the scene
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    pub id: ArtworkId,
    /// Stroke this artwork was projected from
    pub stroke_id: u64,
    pub artwork: ProjectedArtwork,
}

impl SketchPipeline {
    /// Store a projected artwork and return its id
    pub(crate) fn store_artwork(&mut self, stroke_id: u64, artwork: ProjectedArtwork) -> ArtworkId {
        let id = ArtworkId(self.next_artwork_id);
        self.next_artwork_id += 1;
        self.artworks.push(Artwork {
            id,
            stroke_id,
            artwork,
        });
        id
    }

    /// All finished artworks in creation order
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    /// Look up an artwork by id
    pub fn artwork(&self, id: ArtworkId) -> Option<&Artwork> {
        self.artworks.iter().find(|a| a.id == id)
    }

    /// Remove an artwork from the scene, returning it
    pub fn remove_artwork(&mut self, id: ArtworkId) -> Option<Artwork> {
        let index = self.artworks.iter().position(|a| a.id == id)?;
        Some(self.artworks.remove(index))
    }
}
