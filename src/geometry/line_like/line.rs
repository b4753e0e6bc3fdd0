use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::geometry::Plane;
use crate::math::format::{parse_named, write_named};
use crate::math::{Direction, Location, Rotation, Vect};

use super::{reflection_off_plane, LineLike};

/// An infinite line through a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    point_on_line: Location,
    direction: Direction,
}

impl Line {
    #[must_use]
    pub const fn new(point_on_line: Location, direction: Direction) -> Self {
        Self {
            point_on_line,
            direction,
        }
    }

    /// The line through `a` and `b`, directed from `a` towards `b`.
    #[must_use]
    pub fn from_two_points(a: Location, b: Location) -> Self {
        Self::new(a, (b - a).direction())
    }

    #[must_use]
    pub const fn point_on_line(&self) -> Location {
        self.point_on_line
    }

    #[must_use]
    pub fn flipped(&self) -> Self {
        Self::new(self.point_on_line, self.direction.reversed())
    }

    #[must_use]
    pub fn with_point_on_line(&self, point_on_line: Location) -> Self {
        Self::new(point_on_line, self.direction)
    }

    #[must_use]
    pub fn with_direction(&self, direction: Direction) -> Self {
        Self::new(self.point_on_line, direction)
    }

    /// The line leaving the crossing point with `plane` in the mirrored
    /// direction. `None` when the line never crosses the plane.
    #[must_use]
    pub fn reflected_by(&self, plane: &Plane) -> Option<Self> {
        reflection_off_plane(self, plane).map(|(_, hit, direction)| Self::new(hit, direction))
    }

    /// The shadow of this line on `plane`. `None` when the line is
    /// perpendicular to the plane and its shadow is a single point.
    #[must_use]
    pub fn projected_on_to(&self, plane: &Plane) -> Option<Self> {
        let direction = plane.parallelization_of(self.direction);
        (!direction.is_none())
            .then(|| Self::new(plane.closest_point_to_location(self.point_on_line), direction))
    }

    /// Interpolates anchor point and direction independently.
    #[must_use]
    pub fn interpolate(start: &Self, end: &Self, t: f64) -> Self {
        Self::new(
            Location::interpolate(start.point_on_line, end.point_on_line, t),
            Direction::interpolate(start.direction, end.direction, t),
        )
    }
}

impl LineLike for Line {
    fn start_point(&self) -> Location {
        self.point_on_line
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn length(&self) -> Option<f64> {
        None
    }

    fn is_unbounded_in_both_directions(&self) -> bool {
        true
    }

    fn moved_by(&self, vect: Vect) -> Self {
        Self::new(self.point_on_line + vect, self.direction)
    }

    fn rotated_around(&self, pivot: Location, rotation: Rotation) -> Self {
        Self::new(
            self.point_on_line.rotated_around(pivot, rotation),
            rotation.rotate_direction(self.direction),
        )
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_named(f, "Line", &[
            ("PointOnLine", &self.point_on_line),
            ("Direction", &self.direction),
        ])
    }
}

impl FromStr for Line {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [point, direction] = parse_named(s, "Line", ["PointOnLine", "Direction"])?;
        Ok(Self::new(point.parse()?, direction.parse()?))
    }
}
