//! Outline generation for panel shapes
//!
//! This module is organized into submodules:
//! - `defaults`: Tolerances and default layout settings
//! - `outline`: The `Outline` value type and its SVG path-data form
//! - `path_builder`: Rounded-polygon outline synthesis
//! - `shapes`: Panel shape types and their constructor functions

pub mod defaults;
pub mod outline;
pub mod path_builder;
pub mod shapes;

// Re-export commonly used items
pub use outline::{Outline, PathCommand};
pub use path_builder::{build_path, build_path_or_empty};
pub use shapes::{
    ChiselEndcap, Elbow, PanelShape, Rectangle, RoundedEndcap, ShapeEnum, Triangle,
    chisel_endcap, elbow, rectangle, rounded_endcap, triangle,
};
