pub const PI: f64 = std::f64::consts::PI;
pub const TAU: f64 = std::f64::consts::TAU;

pub const DEG_2_RAD: f64 = PI / 180.0;
pub const RAD_2_DEG: f64 = 180.0 / PI;

/// Per-component tolerance used by `Vector2D::equals`.
pub const DEFAULT_TOLERANCE: f64 = 0.001;
