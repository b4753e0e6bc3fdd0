use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::geometry::Plane;
use crate::math::format::{parse_named, write_named};
use crate::math::{Direction, Location, Rotation, Vect};

use super::{reflection_off_plane, BoundedRay, LineLike};

/// A half-line starting at a point and extending forever in one direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    start_point: Location,
    direction: Direction,
}

impl Ray {
    #[must_use]
    pub const fn new(start_point: Location, direction: Direction) -> Self {
        Self {
            start_point,
            direction,
        }
    }

    /// The ray from `start` through `target`.
    #[must_use]
    pub fn from_start_toward(start: Location, target: Location) -> Self {
        Self::new(start, (target - start).direction())
    }

    #[must_use]
    pub fn with_start_point(&self, start_point: Location) -> Self {
        Self::new(start_point, self.direction)
    }

    #[must_use]
    pub fn with_direction(&self, direction: Direction) -> Self {
        Self::new(self.start_point, direction)
    }

    /// The ray from the same start in the opposite direction.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self::new(self.start_point, self.direction.reversed())
    }

    /// The first `length` of this ray.
    #[must_use]
    pub fn with_length(&self, length: f64) -> BoundedRay {
        self.coerce_to_bounded_ray(length)
    }

    /// The ray bouncing off `plane`, starting where this ray hits it.
    #[must_use]
    pub fn reflected_by(&self, plane: &Plane) -> Option<Self> {
        reflection_off_plane(self, plane).map(|(_, hit, direction)| Self::new(hit, direction))
    }

    /// The shadow of this ray on `plane`; `None` when perpendicular to it.
    #[must_use]
    pub fn projected_on_to(&self, plane: &Plane) -> Option<Self> {
        let direction = plane.parallelization_of(self.direction);
        (!direction.is_none())
            .then(|| Self::new(plane.closest_point_to_location(self.start_point), direction))
    }

    #[must_use]
    pub fn interpolate(start: &Self, end: &Self, t: f64) -> Self {
        Self::new(
            Location::interpolate(start.start_point, end.start_point, t),
            Direction::interpolate(start.direction, end.direction, t),
        )
    }
}

impl LineLike for Ray {
    fn start_point(&self) -> Location {
        self.start_point
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn length(&self) -> Option<f64> {
        None
    }

    fn is_unbounded_in_both_directions(&self) -> bool {
        false
    }

    fn moved_by(&self, vect: Vect) -> Self {
        Self::new(self.start_point + vect, self.direction)
    }

    fn rotated_around(&self, pivot: Location, rotation: Rotation) -> Self {
        Self::new(
            self.start_point.rotated_around(pivot, rotation),
            rotation.rotate_direction(self.direction),
        )
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_named(f, "Ray", &[
            ("StartPoint", &self.start_point),
            ("Direction", &self.direction),
        ])
    }
}

impl FromStr for Ray {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [start, direction] = parse_named(s, "Ray", ["StartPoint", "Direction"])?;
        Ok(Self::new(start.parse()?, direction.parse()?))
    }
}
