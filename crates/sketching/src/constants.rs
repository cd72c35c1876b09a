/// Default stroke width in NDC units.
pub const DEFAULT_STROKE_WIDTH: f32 = skysketch_config::DEFAULT_STROKE_WIDTH;

/// Epsilon for ray intersection tests (parallel rays, hits at the origin).
pub const RAY_EPSILON: f32 = 1e-6;

/// Minimum squared horizontal distance between camera and ground anchor.
pub const MIN_GROUND_DISTANCE_SQ: f32 = 1e-8;

/// NDC depth used when un-projecting pick rays. Inside the clip range for
/// both [-1, 1] and [0, 1] depth conventions.
pub const PICK_NDC_DEPTH: f32 = 0.5;
