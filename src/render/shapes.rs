//! Panel shape types
//!
//! Each shape is its own type that knows how to:
//! - Validate its dimensions
//! - Produce its rounded vertex list
//! - Collapse to a degenerate fallback polygon when the dimensions are unusable
//!
//! Outlines always come out of [`build_path`]; a shape never fails a render
//! pass, it logs and draws its collapsed fallback instead.

use enum_dispatch::enum_dispatch;
use glam::dvec2;

use super::outline::Outline;
use super::path_builder::{build_path, build_path_or_empty};
use crate::errors::GeometryError;
use crate::log::{debug, warn};
use crate::types::{Direction, ElbowOrientation, Point, RoundedVertex};

/// Common behavior for all panel shapes
#[enum_dispatch]
pub trait PanelShape {
    /// Short name used in diagnostics
    fn kind(&self) -> &'static str;

    /// The validated vertex list, corner radii included.
    fn vertices(&self) -> Result<Vec<RoundedVertex>, GeometryError>;

    /// The point every vertex collapses to when validation fails.
    fn anchor(&self) -> Point;

    /// How many vertices the shape normally has.
    fn vertex_count(&self) -> usize;

    /// Vertices to draw when validation fails: all collapsed onto the anchor.
    fn fallback_vertices(&self) -> Vec<RoundedVertex> {
        let anchor = self.anchor();
        vec![RoundedVertex::sharp(anchor.x, anchor.y); self.vertex_count()]
    }

    /// Build the outline, falling back to the collapsed polygon on bad input.
    fn outline(&self) -> Outline {
        match self.vertices() {
            Ok(vertices) => build_path_or_empty(&vertices),
            Err(err) => {
                warn!(shape = self.kind(), error = %err, "invalid shape, using degenerate fallback");
                build_path(&self.fallback_vertices()).unwrap_or_else(|_| Outline::new())
            }
        }
    }
}

/// Any panel shape, for callers that keep mixed lists of them.
#[enum_dispatch(PanelShape)]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeEnum {
    Rectangle(Rectangle),
    RoundedEndcap(RoundedEndcap),
    Elbow(Elbow),
    ChiselEndcap(ChiselEndcap),
    Triangle(Triangle),
}

// ============================================================================
// Shape Types
// ============================================================================

/// An axis-aligned rectangle with one radius shared by all four corners
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            corner_radius: 0.0,
        }
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }
}

impl PanelShape for Rectangle {
    fn kind(&self) -> &'static str {
        "rectangle"
    }

    fn vertices(&self) -> Result<Vec<RoundedVertex>, GeometryError> {
        GeometryError::check_positive(self.kind(), "width", self.width)?;
        GeometryError::check_positive(self.kind(), "height", self.height)?;

        let (x, y, r) = (self.x, self.y, self.corner_radius);
        let (right, bottom) = (x + self.width, y + self.height);
        Ok(vec![
            RoundedVertex::new(x, y, r),
            RoundedVertex::new(right, y, r),
            RoundedVertex::new(right, bottom, r),
            RoundedVertex::new(x, bottom, r),
        ])
    }

    fn anchor(&self) -> Point {
        dvec2(self.x, self.y)
    }

    fn vertex_count(&self) -> usize {
        4
    }
}

/// A bar terminator with its short edge on one side rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedEndcap {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub direction: Direction,
}

impl RoundedEndcap {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            direction: Direction::Right,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Radius for the rounded side.
    ///
    /// Half the height when the cap is wide enough for it, otherwise the whole
    /// width. Narrow caps therefore look lopsided; downstream layouts rely on
    /// that exact radius.
    pub fn corner_radius(&self) -> f64 {
        if self.width >= self.height / 2.0 {
            self.height / 2.0
        } else {
            self.width
        }
    }
}

impl PanelShape for RoundedEndcap {
    fn kind(&self) -> &'static str {
        "rounded endcap"
    }

    fn vertices(&self) -> Result<Vec<RoundedVertex>, GeometryError> {
        GeometryError::check_positive(self.kind(), "width", self.width)?;
        GeometryError::check_positive(self.kind(), "height", self.height)?;

        let r = self.corner_radius();
        let (left_r, right_r) = match self.direction {
            Direction::Left => (r, 0.0),
            Direction::Right => (0.0, r),
        };
        let (x, y) = (self.x, self.y);
        let (right, bottom) = (x + self.width, y + self.height);
        Ok(vec![
            RoundedVertex::new(x, y, left_r),
            RoundedVertex::new(right, y, right_r),
            RoundedVertex::new(right, bottom, right_r),
            RoundedVertex::new(x, bottom, left_r),
        ])
    }

    fn anchor(&self) -> Point {
        dvec2(self.x, self.y)
    }

    fn vertex_count(&self) -> usize {
        4
    }
}

/// An L-shaped connector joining a horizontal arm to a vertical body.
///
/// The canonical shape has its outer bend at the top-left: the arm runs along
/// the top edge for the full `width`, the body runs down the left edge for the
/// full `height`. Other orientations are reflections of that template inside
/// the same bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Elbow {
    pub x: f64,
    pub y: f64,
    /// Total horizontal extent
    pub width: f64,
    /// Width of the vertical body
    pub body_width: f64,
    /// Thickness of the horizontal arm
    pub arm_height: f64,
    /// Total vertical extent
    pub height: f64,
    pub orientation: ElbowOrientation,
    pub outer_corner_radius: f64,
}

impl Elbow {
    pub fn new(x: f64, y: f64, width: f64, body_width: f64, arm_height: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            body_width,
            arm_height,
            height,
            orientation: ElbowOrientation::TopLeft,
            outer_corner_radius: 0.0,
        }
    }

    pub fn with_orientation(mut self, orientation: ElbowOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_outer_corner_radius(mut self, radius: f64) -> Self {
        self.outer_corner_radius = radius;
        self
    }

    pub fn inner_radius(&self) -> f64 {
        (self.arm_height / 2.0).min(self.body_width)
    }

    pub fn outer_radius(&self) -> f64 {
        // NaN would otherwise lose to the other operand of `min`
        if !(self.outer_corner_radius > 0.0) {
            return 0.0;
        }
        self.outer_corner_radius.min(self.width.min(self.height))
    }

    fn validate(&self) -> Result<(), GeometryError> {
        let kind = self.kind();
        GeometryError::check_positive(kind, "width", self.width)?;
        GeometryError::check_positive(kind, "height", self.height)?;
        GeometryError::check_positive(kind, "body_width", self.body_width)?;
        GeometryError::check_positive(kind, "arm_height", self.arm_height)?;
        if self.height <= self.arm_height {
            return Err(GeometryError::ElbowTooShort {
                height: self.height,
                arm_height: self.arm_height,
            });
        }
        Ok(())
    }
}

impl PanelShape for Elbow {
    fn kind(&self) -> &'static str {
        "elbow"
    }

    fn vertices(&self) -> Result<Vec<RoundedVertex>, GeometryError> {
        self.validate()?;

        // Top-left template, offsets from the bounding box origin
        let template = [
            (0.0, 0.0, self.outer_radius()),
            (self.width, 0.0, 0.0),
            (self.width, self.arm_height, 0.0),
            (self.body_width, self.arm_height, self.inner_radius()),
            (self.body_width, self.height, 0.0),
            (0.0, self.height, 0.0),
        ];

        let (flip_x, flip_y) = self.orientation.flips();
        debug!(orientation = %self.orientation, flip_x, flip_y, "elbow vertices");
        Ok(template
            .into_iter()
            .map(|(dx, dy, r)| {
                let dx = if flip_x { self.width - dx } else { dx };
                let dy = if flip_y { self.height - dy } else { dy };
                RoundedVertex::new(self.x + dx, self.y + dy, r)
            })
            .collect())
    }

    fn anchor(&self) -> Point {
        dvec2(self.x, self.y)
    }

    fn vertex_count(&self) -> usize {
        6
    }
}

/// An endcap whose cut side is an angled trapezoid edge instead of an arc.
///
/// Facing right, the top edge is shortened by `height / 2` so the cut slopes
/// down to the full-width bottom corner. Facing left, the bottom edge is
/// shortened instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ChiselEndcap {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub side: Direction,
    pub top_corner_radius: f64,
    pub bottom_corner_radius: f64,
}

impl ChiselEndcap {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            side: Direction::Right,
            top_corner_radius: 0.0,
            bottom_corner_radius: 0.0,
        }
    }

    pub fn with_side(mut self, side: Direction) -> Self {
        self.side = side;
        self
    }

    pub fn with_corner_radii(mut self, top: f64, bottom: f64) -> Self {
        self.top_corner_radius = top;
        self.bottom_corner_radius = bottom;
        self
    }

    /// Horizontal inset of the cut, never more than the cap is wide.
    pub fn cut(&self) -> f64 {
        (self.height / 2.0).min(self.width)
    }
}

impl PanelShape for ChiselEndcap {
    fn kind(&self) -> &'static str {
        "chisel endcap"
    }

    fn vertices(&self) -> Result<Vec<RoundedVertex>, GeometryError> {
        GeometryError::check_positive(self.kind(), "width", self.width)?;
        GeometryError::check_positive(self.kind(), "height", self.height)?;

        let (x, y) = (self.x, self.y);
        let (right, bottom) = (x + self.width, y + self.height);
        let (top_r, bottom_r) = (self.top_corner_radius, self.bottom_corner_radius);
        let cut = self.cut();
        Ok(match self.side {
            Direction::Right => vec![
                RoundedVertex::sharp(x, y),
                RoundedVertex::new(right - cut, y, top_r),
                RoundedVertex::new(right, bottom, bottom_r),
                RoundedVertex::sharp(x, bottom),
            ],
            Direction::Left => vec![
                RoundedVertex::new(x, y, top_r),
                RoundedVertex::sharp(right, y),
                RoundedVertex::sharp(right, bottom),
                RoundedVertex::new(x + cut, bottom, bottom_r),
            ],
        })
    }

    fn anchor(&self) -> Point {
        dvec2(self.x, self.y)
    }

    fn vertex_count(&self) -> usize {
        4
    }
}

/// An equilateral triangle pointing left or right, positioned by its centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub center: Point,
    pub side_length: f64,
    pub direction: Direction,
    pub corner_radius: f64,
}

impl Triangle {
    pub fn new(center: Point, side_length: f64) -> Self {
        Self {
            center,
            side_length,
            direction: Direction::Right,
            corner_radius: 0.0,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn altitude(&self) -> f64 {
        3f64.sqrt() / 2.0 * self.side_length
    }
}

impl PanelShape for Triangle {
    fn kind(&self) -> &'static str {
        "triangle"
    }

    fn vertices(&self) -> Result<Vec<RoundedVertex>, GeometryError> {
        GeometryError::check_positive(self.kind(), "side_length", self.side_length)?;

        let h = self.altitude();
        let sign = match self.direction {
            Direction::Right => 1.0,
            Direction::Left => -1.0,
        };
        // Centroid sits 2h/3 from the tip and h/3 from the base
        let tip_x = self.center.x + sign * h * 2.0 / 3.0;
        let base_x = self.center.x - sign * h / 3.0;
        let half = self.side_length / 2.0;
        let r = self.corner_radius;
        Ok(vec![
            RoundedVertex::new(tip_x, self.center.y, r),
            RoundedVertex::new(base_x, self.center.y + half, r),
            RoundedVertex::new(base_x, self.center.y - half, r),
        ])
    }

    fn anchor(&self) -> Point {
        self.center
    }

    fn vertex_count(&self) -> usize {
        3
    }
}

// ============================================================================
// Constructor Functions
// ============================================================================

/// Outline of a rectangle with a shared corner radius.
pub fn rectangle(x: f64, y: f64, width: f64, height: f64, corner_radius: f64) -> Outline {
    Rectangle::new(x, y, width, height)
        .with_corner_radius(corner_radius)
        .outline()
}

/// Outline of an endcap rounded on the `direction` side.
pub fn rounded_endcap(width: f64, height: f64, direction: Direction, x: f64, y: f64) -> Outline {
    RoundedEndcap::new(x, y, width, height)
        .with_direction(direction)
        .outline()
}

/// Outline of an L-shaped elbow.
#[allow(clippy::too_many_arguments)]
pub fn elbow(
    x: f64,
    width: f64,
    body_width: f64,
    arm_height: f64,
    height: f64,
    orientation: ElbowOrientation,
    y: f64,
    outer_corner_radius: f64,
) -> Outline {
    Elbow::new(x, y, width, body_width, arm_height, height)
        .with_orientation(orientation)
        .with_outer_corner_radius(outer_corner_radius)
        .outline()
}

/// Outline of a chiseled endcap cut on `side`.
pub fn chisel_endcap(
    width: f64,
    height: f64,
    side: Direction,
    x: f64,
    y: f64,
    top_corner_radius: f64,
    bottom_corner_radius: f64,
) -> Outline {
    ChiselEndcap::new(x, y, width, height)
        .with_side(side)
        .with_corner_radii(top_corner_radius, bottom_corner_radius)
        .outline()
}

/// Outline of an equilateral triangle centred on `(center_x, center_y)`.
pub fn triangle(
    side_length: f64,
    direction: Direction,
    center_x: f64,
    center_y: f64,
    corner_radius: f64,
) -> Outline {
    Triangle::new(dvec2(center_x, center_y), side_length)
        .with_direction(direction)
        .with_corner_radius(corner_radius)
        .outline()
}

// ============================================================================
// Tests
// ============================================================================
