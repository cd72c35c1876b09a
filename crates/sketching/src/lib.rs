//! SkySketch sketching core - stroke meshing and surface projection
//!
//! This crate turns freehand screen-space strokes into 3D scene geometry:
//! - [`stroke::StrokeMeshBuilder`] - Live triangle strip from NDC samples
//! - [`raycast`] - Ray-sphere and ray-plane intersection
//! - [`camera::PickCamera`] - Camera abstraction for pick rays
//! - [`projection`] - Sky sphere and ground billboard projection
//! - [`overlay::ScreenOverlay`] - Screen-space mesh placement in 3D
//! - [`pipeline::SketchPipeline`] - Complete drawing pipeline

pub mod camera;
pub mod constants;
pub mod overlay;
pub mod pipeline;
pub mod projection;
pub mod raycast;
pub mod stroke;
pub mod types;
pub mod validation;

#[cfg(feature = "bevy")]
pub mod bevy_mesh;

pub use camera::*;
pub use constants::*;
pub use overlay::*;
pub use pipeline::*;
pub use projection::*;
pub use raycast::*;
pub use stroke::*;
pub use types::*;
pub use validation::*;
