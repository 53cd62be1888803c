//! Closed outline descriptions and their SVG path-data form

use std::fmt;

use super::defaults;
use crate::types::Point;

/// One drawing instruction of an outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc from the current point to `to`.
    ///
    /// `sweep` is the SVG sweep flag: `true` turns clockwise on screen.
    ArcTo { radius: f64, sweep: bool, to: Point },
    Close,
}

impl PathCommand {
    /// The point this command ends on, if it moves the pen.
    pub fn endpoint(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::ArcTo { to, .. } => Some(to),
            PathCommand::Close => None,
        }
    }
}

/// A vector outline built from move/line/arc/close instructions.
///
/// Build one fluently, the same way SVG path data reads:
///
/// ```
/// use glam::dvec2;
/// use lcars_geom::Outline;
///
/// let outline = Outline::new()
///     .m(dvec2(0.0, 0.0))
///     .l(dvec2(10.0, 0.0))
///     .a(5.0, true, dvec2(10.0, 10.0))
///     .z();
/// assert_eq!(outline.to_string(), "M0,0 L10,0 A5,5 0 0,1 10,10 Z");
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Outline {
    commands: Vec<PathCommand>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, to: Point) -> Self {
        self.commands.push(PathCommand::MoveTo(to));
        self
    }

    pub fn l(mut self, to: Point) -> Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    pub fn a(mut self, radius: f64, sweep: bool, to: Point) -> Self {
        self.commands.push(PathCommand::ArcTo { radius, sweep, to });
        self
    }

    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn arc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::ArcTo { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count()
    }

    /// True when the outline starts with a move and ends with a close.
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.first(), Some(PathCommand::MoveTo(_)))
            && matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// A copy shifted by `offset`, for callers that position shapes after
    /// building them at the origin.
    pub fn translated(&self, offset: Point) -> Outline {
        let commands = self
            .commands
            .iter()
            .map(|c| match *c {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(p + offset),
                PathCommand::LineTo(p) => PathCommand::LineTo(p + offset),
                PathCommand::ArcTo { radius, sweep, to } => PathCommand::ArcTo {
                    radius,
                    sweep,
                    to: to + offset,
                },
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Outline { commands }
    }

    /// Min and max corners of the command endpoints.
    ///
    /// Arc bulges are not included; for the convex corners the shape
    /// constructors produce they stay inside the vertex hull anyway.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut points = self.commands.iter().filter_map(PathCommand::endpoint);
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *command {
                PathCommand::MoveTo(p) => write!(f, "M{},{}", fmt_num(p.x), fmt_num(p.y))?,
                PathCommand::LineTo(p) => write!(f, "L{},{}", fmt_num(p.x), fmt_num(p.y))?,
                PathCommand::ArcTo { radius, sweep, to } => {
                    let r = fmt_num(radius);
                    write!(
                        f,
                        "A{r},{r} 0 0,{} {},{}",
                        u8::from(sweep),
                        fmt_num(to.x),
                        fmt_num(to.y)
                    )?
                }
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Format a coordinate with `COORD_SIG_FIGS` significant digits, trailing
/// zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, defaults::COORD_SIG_FIGS)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value.abs() < defaults::SNAP_TO_ZERO {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", value, prec = decimals);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    // Rounding can leave "-0" behind for tiny negatives
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
