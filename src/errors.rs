//! Error types with diagnostics using miette
//!
//! Most public entry points degrade instead of failing; these errors surface
//! from the fallible building blocks underneath them.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Geometry Errors
// ============================================================================

/// Errors raised while turning shape parameters into an outline
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("polygon needs at least 3 vertices, got {vertex_count}")]
    #[diagnostic(
        code(lcars_geom::geometry::degenerate),
        help("a closed outline is only defined for triangles and up")
    )]
    DegenerateGeometry { vertex_count: usize },

    #[error("vertex {index} has a NaN or infinite coordinate")]
    #[diagnostic(code(lcars_geom::geometry::non_finite_vertex))]
    NonFiniteVertex { index: usize },

    #[error("{shape}: {name} must be a finite positive number, got {value}")]
    #[diagnostic(code(lcars_geom::geometry::invalid_dimension))]
    InvalidDimension {
        shape: &'static str,
        name: &'static str,
        value: f64,
    },

    #[error("elbow height {height} must exceed arm height {arm_height}")]
    #[diagnostic(
        code(lcars_geom::geometry::elbow_too_short),
        help("the vertical body needs room below the horizontal arm")
    )]
    ElbowTooShort { height: f64, arm_height: f64 },
}

impl GeometryError {
    /// Check that a shape dimension is finite and strictly positive.
    pub(crate) fn check_positive(
        shape: &'static str,
        name: &'static str,
        value: f64,
    ) -> Result<(), GeometryError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(GeometryError::InvalidDimension { shape, name, value })
        }
    }
}

// ============================================================================
// Parse Errors
// ============================================================================

/// A direction or orientation keyword that isn't recognized
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
#[diagnostic(code(lcars_geom::parse::unknown_variant), help("expected one of: {expected}"))]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
