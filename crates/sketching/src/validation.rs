use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StrokeError {
    #[error("Invalid stroke width: {0} (must be positive and finite)")]
    InvalidWidth(f32),
}

/// Check that a stroke width can be used to build a strip
pub fn validate_stroke_width(width: f32) -> Result<f32, StrokeError> {
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(StrokeError::InvalidWidth(width))
    }
}

/// Check that a path sample has finite coordinates
pub fn is_valid_sample(point: Vec2) -> bool {
    point.is_finite()
}
