use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::geometry::Plane;
use crate::math::format::{parse_named, write_named};
use crate::math::intersect_3d::unbounded_plane_intersection_distance;
use crate::math::{Direction, Location, Rotation, Vect};

use super::{reflection_off_plane, LineLike};

/// A line segment from a start point to an end point.
///
/// A zero-length segment is valid; its direction is `Direction::NONE`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedRay {
    start_point: Location,
    end_point: Location,
}

impl BoundedRay {
    #[must_use]
    pub const fn new(start_point: Location, end_point: Location) -> Self {
        Self {
            start_point,
            end_point,
        }
    }

    #[must_use]
    pub fn from_start_point_and_vect(start_point: Location, start_to_end: Vect) -> Self {
        Self::new(start_point, start_point + start_to_end)
    }

    /// The segment of `length` centred on `middle`.
    #[must_use]
    pub fn from_middle_point(middle: Location, direction: Direction, length: f64) -> Self {
        let half = direction.to_vect(length * 0.5);
        Self::new(middle - half, middle + half)
    }

    #[must_use]
    pub const fn end(&self) -> Location {
        self.end_point
    }

    #[must_use]
    pub fn vect(&self) -> Vect {
        self.end_point - self.start_point
    }

    #[must_use]
    pub fn middle_point(&self) -> Location {
        Location::interpolate(self.start_point, self.end_point, 0.5)
    }

    #[must_use]
    pub fn flipped(&self) -> Self {
        Self::new(self.end_point, self.start_point)
    }

    /// Same start and direction, new length.
    #[must_use]
    pub fn with_length(&self, length: f64) -> Self {
        Self::from_start_point_and_vect(self.start_point, self.vect().with_length(length))
    }

    #[must_use]
    pub fn with_start_point(&self, start_point: Location) -> Self {
        Self::new(start_point, self.end_point)
    }

    #[must_use]
    pub fn with_end_point(&self, end_point: Location) -> Self {
        Self::new(self.start_point, end_point)
    }

    /// Scales the segment about its start point.
    #[must_use]
    pub fn scaled_from_start(&self, factor: f64) -> Self {
        Self::from_start_point_and_vect(self.start_point, self.vect().scaled_by(factor))
    }

    /// Scales the segment about its middle point.
    #[must_use]
    pub fn scaled_from_middle(&self, factor: f64) -> Self {
        let middle = self.middle_point();
        let half = self.vect().scaled_by(factor * 0.5);
        Self::new(middle - half, middle + half)
    }

    /// Scales the segment about its end point.
    #[must_use]
    pub fn scaled_from_end(&self, factor: f64) -> Self {
        Self::new(self.end_point - self.vect().scaled_by(factor), self.end_point)
    }

    /// The remainder of this segment after bouncing off `plane`. `None` when the
    /// segment does not reach the plane.
    #[must_use]
    pub fn reflected_by(&self, plane: &Plane) -> Option<Self> {
        let length = self.vect().length();
        reflection_off_plane(self, plane).map(|(distance, hit, direction)| {
            Self::from_start_point_and_vect(hit, direction.to_vect(length - distance))
        })
    }

    /// The shadow of this segment on `plane`. A segment perpendicular to the
    /// plane projects to a zero-length segment.
    #[must_use]
    pub fn projected_on_to(&self, plane: &Plane) -> Self {
        Self::new(
            plane.closest_point_to_location(self.start_point),
            plane.closest_point_to_location(self.end_point),
        )
    }

    /// The two pieces either side of the point where `plane` cuts this segment.
    /// `None` when the plane does not cut it.
    #[must_use]
    pub fn split_by(&self, plane: &Plane) -> Option<(Self, Self)> {
        let distance = unbounded_plane_intersection_distance(self, plane)?;
        let cut = self.location_at_distance_or_none(distance)?;
        Some((Self::new(self.start_point, cut), Self::new(cut, self.end_point)))
    }

    #[must_use]
    pub fn interpolate(start: &Self, end: &Self, t: f64) -> Self {
        Self::new(
            Location::interpolate(start.start_point, end.start_point, t),
            Location::interpolate(start.end_point, end.end_point, t),
        )
    }
}

impl LineLike for BoundedRay {
    fn start_point(&self) -> Location {
        self.start_point
    }

    fn direction(&self) -> Direction {
        self.vect().direction()
    }

    fn length(&self) -> Option<f64> {
        Some(self.vect().length())
    }

    fn is_unbounded_in_both_directions(&self) -> bool {
        false
    }

    fn moved_by(&self, vect: Vect) -> Self {
        Self::new(self.start_point + vect, self.end_point + vect)
    }

    fn rotated_around(&self, pivot: Location, rotation: Rotation) -> Self {
        Self::new(
            self.start_point.rotated_around(pivot, rotation),
            self.end_point.rotated_around(pivot, rotation),
        )
    }

    fn start_to_end_vect(&self) -> Option<Vect> {
        Some(self.vect())
    }

    fn end_point(&self) -> Option<Location> {
        Some(self.end_point)
    }
}

impl fmt::Display for BoundedRay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_named(f, "BoundedRay", &[
            ("StartPoint", &self.start_point),
            ("EndPoint", &self.end_point),
        ])
    }
}

impl FromStr for BoundedRay {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [start, end] = parse_named(s, "BoundedRay", ["StartPoint", "EndPoint"])?;
        Ok(Self::new(start.parse()?, end.parse()?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::relation::{ClosestPointTo, DistanceFrom, IntersectionWith};
    use crate::geometry::{Line, Ray};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Location {
        Location::new(x, y, z)
    }

    #[test]
    fn construction_from_vect_matches_endpoints() {
        let from_points = BoundedRay::new(p(100.0, 0.0, 0.0), p(0.0, 0.0, 0.0));
        let from_vect =
            BoundedRay::from_start_point_and_vect(p(100.0, 0.0, 0.0), Vect::new(-100.0, 0.0, 0.0));
        assert_eq!(from_points, from_vect);
        assert_eq!(from_points.length(), Some(100.0));
        assert_eq!(from_points.direction(), Direction::RIGHT);
    }

    #[test]
    fn closest_point_to_lines_and_rays() {
        let segment = BoundedRay::new(p(100.0, 0.0, 0.0), p(0.0, 0.0, 0.0));

        let line = Line::new(p(0.0, 1.0, 0.0), Direction::UP);
        assert!(segment.closest_point_to(&line).approx_eq(p(0.0, 0.0, 0.0), 1e-12));

        let ray = Ray::new(p(50.0, 1.0, 0.0), Direction::DOWN);
        assert!(segment.closest_point_to(&ray).approx_eq(p(50.0, 0.0, 0.0), 1e-12));
        assert!(segment.intersection_with(&ray).unwrap().approx_eq(p(50.0, 0.0, 0.0), 1e-12));

        let beyond = Ray::new(p(150.0, 1.0, 0.0), Direction::DOWN);
        assert!(segment.closest_point_to(&beyond).approx_eq(p(100.0, 0.0, 0.0), 1e-12));
        assert!(segment.intersection_with(&beyond).is_none());
        assert_relative_eq!(segment.distance_from(&beyond), 50.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_length_segment_is_a_point() {
        let point = BoundedRay::new(p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0));
        assert_eq!(point.length(), Some(0.0));
        assert!(point.direction().is_none());
        assert_eq!(point.bind_distance(5.0), 0.0);
        let line = Line::new(p(0.0, 0.0, 0.0), Direction::UP);
        assert_relative_eq!(point.distance_from(&line), 2.0_f64.sqrt(), epsilon = 1e-12);
        assert!(point.intersection_with(&line).is_none());
    }

    #[test]
    fn middle_and_scaling() {
        let segment = BoundedRay::new(p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0));
        assert_eq!(segment.middle_point(), p(2.0, 0.0, 0.0));
        assert_eq!(segment.scaled_from_start(0.5).end(), p(2.0, 0.0, 0.0));
        assert_eq!(
            segment.scaled_from_middle(0.5),
            BoundedRay::new(p(1.0, 0.0, 0.0), p(3.0, 0.0, 0.0))
        );
        assert_eq!(segment.scaled_from_end(0.25).start_point(), p(3.0, 0.0, 0.0));
        assert_eq!(segment.with_length(10.0).end(), p(10.0, 0.0, 0.0));
        assert_eq!(
            BoundedRay::from_middle_point(p(2.0, 0.0, 0.0), Direction::LEFT, 4.0),
            segment
        );
    }

    #[test]
    fn split_by_plane() {
        let segment = BoundedRay::new(p(0.0, -1.0, 0.0), p(0.0, 3.0, 0.0));
        let plane = Plane::new(Direction::UP, p(0.0, 0.0, 0.0));
        let (below, above) = segment.split_by(&plane).unwrap();
        assert_eq!(below.start_point(), p(0.0, -1.0, 0.0));
        assert!(below.end().approx_eq(p(0.0, 0.0, 0.0), 1e-12));
        assert_eq!(above.end(), p(0.0, 3.0, 0.0));

        let clear = Plane::new(Direction::UP, p(0.0, 5.0, 0.0));
        assert!(segment.split_by(&clear).is_none());
    }

    #[test]
    fn reflection_keeps_remaining_length() {
        let segment = BoundedRay::new(p(0.0, 2.0, 0.0), p(0.0, -3.0, 0.0));
        let floor = Plane::new(Direction::UP, p(0.0, 0.0, 0.0));
        let bounced = segment.reflected_by(&floor).unwrap();
        assert!(bounced.start_point().approx_eq(p(0.0, 0.0, 0.0), 1e-12));
        assert!(bounced.end().approx_eq(p(0.0, 3.0, 0.0), 1e-12));
    }

    #[test]
    fn projection_of_vertical_segment_collapses() {
        let segment = BoundedRay::new(p(1.0, 2.0, 3.0), p(1.0, 8.0, 3.0));
        let floor = Plane::new(Direction::UP, p(0.0, 0.0, 0.0));
        let shadow = segment.projected_on_to(&floor);
        assert_eq!(shadow.length(), Some(0.0));
        assert_eq!(shadow.start_point(), p(1.0, 0.0, 3.0));
    }

    #[test]
    fn display_round_trips() {
        let segment = BoundedRay::new(p(0.1, 0.2, 0.3), p(-4.0, 5.5, 6.0));
        assert_eq!(
            segment.to_string(),
            "BoundedRay[StartPoint: <0.1, 0.2, 0.3>; EndPoint: <-4, 5.5, 6>]"
        );
        assert_eq!(segment.to_string().parse::<BoundedRay>().unwrap(), segment);
    }
}
