//! Value types shared by the path builder, the shape constructors and the
//! text allocator.

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, dvec2};

use crate::errors::ParseEnumError;

/// A point in panel space (x grows right, y grows down, like SVG).
pub type Point = DVec2;

/// A polygon vertex together with the corner radius wanted at that vertex.
///
/// A radius of 0 (or anything non-positive) asks for a sharp corner.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RoundedVertex {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl RoundedVertex {
    #[inline]
    pub const fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    /// A vertex with no rounding.
    #[inline]
    pub const fn sharp(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    #[inline]
    pub fn position(self) -> Point {
        dvec2(self.x, self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64, f64)> for RoundedVertex {
    fn from((x, y, radius): (f64, f64, f64)) -> Self {
        Self::new(x, y, radius)
    }
}

/// Text dimensions measured by the host; the crate never measures text itself.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct MeasuredText {
    pub width: f64,
    pub height: f64,
}

impl MeasuredText {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Horizontal facing of an endcap, chisel or triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    pub fn mirrored(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

impl FromStr for Direction {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseEnumError {
                kind: "direction",
                value: s.to_string(),
                expected: "left, right",
            }),
        }
    }
}

/// Which corner of its bounding box an elbow's outer bend sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ElbowOrientation {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ElbowOrientation {
    pub const ALL: [ElbowOrientation; 4] = [
        ElbowOrientation::TopLeft,
        ElbowOrientation::TopRight,
        ElbowOrientation::BottomLeft,
        ElbowOrientation::BottomRight,
    ];

    /// Horizontal and vertical reflections applied to the top-left template.
    pub fn flips(self) -> (bool, bool) {
        match self {
            ElbowOrientation::TopLeft => (false, false),
            ElbowOrientation::TopRight => (true, false),
            ElbowOrientation::BottomLeft => (false, true),
            ElbowOrientation::BottomRight => (true, true),
        }
    }
}

impl fmt::Display for ElbowOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElbowOrientation::TopLeft => "top-left",
            ElbowOrientation::TopRight => "top-right",
            ElbowOrientation::BottomLeft => "bottom-left",
            ElbowOrientation::BottomRight => "bottom-right",
        })
    }
}

impl FromStr for ElbowOrientation {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "top-left" => Ok(ElbowOrientation::TopLeft),
            "top-right" => Ok(ElbowOrientation::TopRight),
            "bottom-left" => Ok(ElbowOrientation::BottomLeft),
            "bottom-right" => Ok(ElbowOrientation::BottomRight),
            _ => Err(ParseEnumError {
                kind: "elbow orientation",
                value: s.to_string(),
                expected: "top-left, top-right, bottom-left, bottom-right",
            }),
        }
    }
}
