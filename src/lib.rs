//! Geometry for stylized control panels: rounded bars, endcaps, elbows and
//! chiseled caps as SVG-compatible outlines, plus the bar/text/bar space
//! allocator that decides whether a label is shown in full, abbreviated or
//! hidden.
//!
//! Everything here is a pure function of its inputs. Text is never measured
//! by this crate; hosts pass in the widths they measured.
//!
//! ```
//! use lcars_geom::{Direction, FitParams, fit, rounded_endcap};
//!
//! let cap = rounded_endcap(40.0, 20.0, Direction::Right, 0.0, 0.0);
//! assert_eq!(cap.arc_count(), 2);
//!
//! let label = fit(0.0, 200.0, "MAIN POWER", 80.0, &FitParams::default());
//! assert!(label.shows_text());
//! ```

pub mod errors;
pub mod log;
pub mod render;
pub mod text_fit;
pub mod types;

pub use errors::{GeometryError, ParseEnumError};
pub use render::{
    ChiselEndcap, Elbow, Outline, PanelShape, PathCommand, Rectangle, RoundedEndcap, ShapeEnum,
    Triangle, build_path, build_path_or_empty, chisel_endcap, elbow, rectangle, rounded_endcap,
    triangle,
};
pub use text_fit::{FitParams, FitResult, TextMode, abbreviate, fit, fit_measured};
pub use types::{Direction, ElbowOrientation, MeasuredText, Point, RoundedVertex};
