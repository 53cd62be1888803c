//! Default tolerances and layout settings (panel units, usually pixels)

/// Edge lengths, radii and tangent distances below this count as zero.
pub const EPSILON: f64 = 1e-4;
/// Cosines are kept this far inside [-1, 1] before `acos`.
pub const COS_CLAMP: f64 = 1e-4;
/// Significant digits kept when formatting path coordinates.
pub const COORD_SIG_FIGS: i32 = 6;
/// Formatted values closer to zero than this print as `0`.
pub const SNAP_TO_ZERO: f64 = 1e-9;

pub const MIN_BAR_WIDTH: f64 = 20.0;
pub const TEXT_GAP: f64 = 5.0;
