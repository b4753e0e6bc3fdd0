use std::fmt;
use std::str::FromStr;

use crate::error::{GeometryError, ParseError, Result};
use crate::math::format::{parse_named, write_named};
use crate::math::intersect_3d::{plane_plane_intersect, unbounded_plane_intersection_distance, PlanePairRelation};
use crate::math::{Direction, Location, Rotation, Vect, DEFAULT_PLANE_THICKNESS, TOLERANCE};

use super::relation::{
    mirror_distance_from, ClosestPointTo, Contains, DistanceFrom, IntersectionWith,
    SignedDistanceFrom,
};
use super::{Line, LineLike};

/// An infinite plane in 3D space.
///
/// Stored as its unit normal and the point on the plane nearest the origin.
/// Signed distances are positive on the side the normal points towards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Direction,
    point_closest_to_origin: Location,
}

/// Which side of a plane an object lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneObjectRelationship {
    /// The object is entirely on the side the normal points towards.
    PlaneFacesTowardsObject,
    /// The object is entirely on the side opposite the normal.
    PlaneFacesAwayFromObject,
    /// The plane passes through the object.
    PlaneIntersectsObject,
}

impl Plane {
    /// The plane with `normal` passing through `point_on_plane`.
    ///
    /// A `NONE` normal gives a degenerate plane; use [`Plane::try_new`] to reject it.
    #[must_use]
    pub fn new(normal: Direction, point_on_plane: Location) -> Self {
        let offset = normal.to_vect(1.0).dot(point_on_plane.as_vect());
        Self {
            normal,
            point_closest_to_origin: Location::from_vect(normal.to_vect(offset)),
        }
    }

    /// Like [`Plane::new`] but from an unnormalized normal vector.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `normal` has no direction.
    pub fn try_new(normal: Vect, point_on_plane: Location) -> Result<Self> {
        let normal = normal.direction();
        if normal.is_none() {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self::new(normal, point_on_plane))
    }

    /// The plane with `normal` whose signed distance from the origin along the
    /// normal is `translation`.
    #[must_use]
    pub fn from_normal_and_translation_from_origin(normal: Direction, translation: f64) -> Self {
        Self {
            normal,
            point_closest_to_origin: Location::from_vect(normal.to_vect(translation)),
        }
    }

    /// The plane whose foot of perpendicular from the origin is `point`.
    ///
    /// `None` when `point` is the origin, as the normal is then undefined.
    #[must_use]
    pub fn from_point_closest_to_origin(point: Location, normal_faces_origin: bool) -> Option<Self> {
        let outward = point.as_vect().direction();
        if outward.is_none() {
            return None;
        }
        let normal = if normal_faces_origin {
            outward.reversed()
        } else {
            outward
        };
        Some(Self::new(normal, point))
    }

    /// The plane through three points, with the normal chosen so that `a`, `b`,
    /// `c` wind anticlockwise when viewed from the side it faces.
    ///
    /// `None` when the points are collinear.
    #[must_use]
    pub fn from_triangle_on_surface(a: Location, b: Location, c: Location) -> Option<Self> {
        let normal = (b - a).cross(c - a).direction();
        if normal.is_none() {
            tracing::trace!(%a, %b, %c, "collinear triangle does not define a plane");
            return None;
        }
        Some(Self::new(normal, a))
    }

    #[must_use]
    pub const fn normal(&self) -> Direction {
        self.normal
    }

    #[must_use]
    pub const fn point_closest_to_origin(&self) -> Location {
        self.point_closest_to_origin
    }

    /// Two orthogonal in-plane directions `(u, v)` with `u × v = normal`.
    #[must_use]
    pub fn basis(&self) -> (Direction, Direction) {
        let u = self.normal.any_orthogonal();
        let v = self.normal.cross(u);
        (u, v)
    }

    /// The same surface facing the other way.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            normal: self.normal.reversed(),
            point_closest_to_origin: self.point_closest_to_origin,
        }
    }

    #[must_use]
    pub fn signed_distance_from_origin(&self) -> f64 {
        self.signed_distance_to_location(Location::ORIGIN)
    }

    #[must_use]
    pub fn distance_from_origin(&self) -> f64 {
        self.point_closest_to_origin.as_vect().length()
    }

    /// Signed distance of `location`; positive on the side the normal faces.
    #[must_use]
    pub fn signed_distance_to_location(&self, location: Location) -> f64 {
        (location - self.point_closest_to_origin).dot(self.normal.to_vect(1.0))
    }

    /// Foot of the perpendicular from `location`.
    #[must_use]
    pub fn closest_point_to_location(&self, location: Location) -> Location {
        location - self.normal.to_vect(self.signed_distance_to_location(location))
    }

    /// Whether `location` is further than `thickness` in front of the plane.
    #[must_use]
    pub fn faces_towards(&self, location: Location, thickness: f64) -> bool {
        self.signed_distance_to_location(location) > thickness
    }

    /// Whether `location` is further than `thickness` behind the plane.
    #[must_use]
    pub fn faces_away_from(&self, location: Location, thickness: f64) -> bool {
        self.signed_distance_to_location(location) < -thickness
    }

    #[must_use]
    pub fn contains_with_thickness(&self, location: Location, thickness: f64) -> bool {
        self.signed_distance_to_location(location).abs() <= thickness
    }

    /// Whether `direction` runs along the plane.
    #[must_use]
    pub fn is_parallel_to_direction(&self, direction: Direction) -> bool {
        self.normal.is_orthogonal_to(direction)
    }

    /// Whether `direction` is within `tolerance_radians` of running along the plane.
    #[must_use]
    pub fn is_approximately_parallel_to_direction(&self, direction: Direction, tolerance_radians: f64) -> bool {
        !direction.is_none() && self.angle_to_direction(direction) <= tolerance_radians
    }

    #[must_use]
    pub fn is_parallel_to_plane(&self, other: &Self) -> bool {
        self.normal.is_parallel_to(other.normal)
    }

    /// Angle in radians between `direction` and the plane surface, in `[0, PI/2]`.
    #[must_use]
    pub fn angle_to_direction(&self, direction: Direction) -> f64 {
        if direction.is_none() {
            return 0.0;
        }
        self.normal.dot(direction).abs().clamp(0.0, 1.0).asin()
    }

    /// Dihedral angle in radians between the planes, in `[0, PI/2]`.
    #[must_use]
    pub fn angle_to_plane(&self, other: &Self) -> f64 {
        self.normal.dot(other.normal).abs().clamp(0.0, 1.0).acos()
    }

    /// Angle in radians between `direction` and the normal line; `None` when
    /// `direction` runs along the plane.
    #[must_use]
    pub fn incident_angle_with(&self, direction: Direction) -> Option<f64> {
        let perpendicularity = self.normal.dot(direction).abs();
        (perpendicularity >= TOLERANCE).then(|| perpendicularity.clamp(0.0, 1.0).acos())
    }

    /// Mirror image of `direction`; `None` when it runs along the plane.
    #[must_use]
    pub fn reflection_of_direction(&self, direction: Direction) -> Option<Direction> {
        (self.normal.dot(direction).abs() >= TOLERANCE).then(|| self.fast_reflection_of_direction(direction))
    }

    /// Mirror image of `direction` without the parallel check; a direction along
    /// the plane comes back unchanged.
    #[must_use]
    pub fn fast_reflection_of_direction(&self, direction: Direction) -> Direction {
        self.fast_reflection_of_vect(direction.to_vect(1.0)).direction()
    }

    #[must_use]
    pub fn reflection_of_vect(&self, vect: Vect) -> Option<Vect> {
        (self.normal.to_vect(1.0).dot(vect).abs() >= TOLERANCE).then(|| self.fast_reflection_of_vect(vect))
    }

    #[must_use]
    pub fn fast_reflection_of_vect(&self, vect: Vect) -> Vect {
        let n = self.normal.to_vect(1.0);
        vect - n.scaled_by(2.0 * n.dot(vect))
    }

    /// Mirror image of `location` through the plane.
    #[must_use]
    pub fn reflection_of_location(&self, location: Location) -> Location {
        location - self.normal.to_vect(2.0 * self.signed_distance_to_location(location))
    }

    /// The in-plane component of `vect`. Zero when `vect` is perpendicular.
    #[must_use]
    pub fn projection_of_vect(&self, vect: Vect) -> Vect {
        vect.orthogonalized_against(self.normal)
    }

    /// The in-plane component of `direction`, renormalized; `NONE` when
    /// `direction` is perpendicular to the plane.
    #[must_use]
    pub fn parallelization_of(&self, direction: Direction) -> Direction {
        direction.orthogonalized_against(self.normal)
    }

    #[must_use]
    pub fn moved_by(&self, vect: Vect) -> Self {
        Self::new(self.normal, self.point_closest_to_origin + vect)
    }

    /// The plane rotated about `pivot`.
    #[must_use]
    pub fn rotated_around(&self, pivot: Location, rotation: Rotation) -> Self {
        let anchor = self.closest_point_to_location(pivot);
        Self::new(
            rotation.rotate_direction(self.normal),
            anchor.rotated_around(pivot, rotation),
        )
    }

    /// Interpolates normal (spherically) and anchor point (linearly).
    #[must_use]
    pub fn interpolate(start: &Self, end: &Self, t: f64) -> Self {
        Self::new(
            Direction::interpolate(start.normal, end.normal, t),
            Location::interpolate(start.point_closest_to_origin, end.point_closest_to_origin, t),
        )
    }

    /// Which side of this plane `object` lies on.
    #[must_use]
    pub fn relationship_to<T>(&self, object: &T) -> PlaneObjectRelationship
    where
        Self: SignedDistanceFrom<T>,
    {
        let signed_distance = self.signed_distance_from(object);
        if signed_distance > 0.0 {
            PlaneObjectRelationship::PlaneFacesTowardsObject
        } else if signed_distance < 0.0 {
            PlaneObjectRelationship::PlaneFacesAwayFromObject
        } else {
            PlaneObjectRelationship::PlaneIntersectsObject
        }
    }

    /// Where `line` crosses this plane within its bounds.
    #[must_use]
    pub fn intersection_with_line_like<L: LineLike>(&self, line: &L) -> Option<Location> {
        let distance = unbounded_plane_intersection_distance(line, self)?;
        line.location_at_distance_or_none(distance)
    }

    /// Signed distance of the nearest part of `line`: zero when it crosses the
    /// plane, otherwise measured from its closest bounded end.
    #[must_use]
    pub fn signed_distance_to_line_like<L: LineLike>(&self, line: &L) -> f64 {
        if self.intersection_with_line_like(line).is_some() {
            return 0.0;
        }
        self.signed_distance_to_location(self.nearest_point_on_line_like(line))
    }

    /// The point on this plane nearest to `line`.
    #[must_use]
    pub fn closest_point_to_line_like<L: LineLike>(&self, line: &L) -> Location {
        self.intersection_with_line_like(line)
            .unwrap_or_else(|| self.closest_point_to_location(self.nearest_point_on_line_like(line)))
    }

    /// The point on `line` nearest to this plane. A line parallel to the plane
    /// is equally near everywhere, so its start point is used.
    #[must_use]
    pub fn nearest_point_on_line_like<L: LineLike>(&self, line: &L) -> Location {
        line.bounded_location_at_distance(unbounded_plane_intersection_distance(line, self).unwrap_or(0.0))
    }
}

impl SignedDistanceFrom<Location> for Plane {
    fn signed_distance_from(&self, location: &Location) -> f64 {
        self.signed_distance_to_location(*location)
    }
}

impl DistanceFrom<Location> for Plane {
    fn distance_from(&self, location: &Location) -> f64 {
        self.signed_distance_to_location(*location).abs()
    }
}

impl ClosestPointTo<Location> for Plane {
    fn closest_point_to(&self, location: &Location) -> Location {
        self.closest_point_to_location(*location)
    }
}

impl Contains<Location> for Plane {
    fn contains(&self, location: &Location) -> bool {
        self.contains_with_thickness(*location, DEFAULT_PLANE_THICKNESS)
    }
}

mirror_distance_from!(Plane => Location);

impl DistanceFrom<Plane> for Plane {
    /// Zero unless the planes are parallel.
    fn distance_from(&self, other: &Plane) -> f64 {
        match plane_plane_intersect(self, other) {
            PlanePairRelation::Parallel { distance } => distance,
            PlanePairRelation::IntersectionLine(_) | PlanePairRelation::Coincident => 0.0,
        }
    }
}

impl IntersectionWith<Plane> for Plane {
    type Output = Line;

    fn intersection_with(&self, other: &Plane) -> Option<Line> {
        match plane_plane_intersect(self, other) {
            PlanePairRelation::IntersectionLine(line) => Some(line),
            PlanePairRelation::Parallel { .. } | PlanePairRelation::Coincident => None,
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_named(f, "Plane", &[
            ("Normal", &self.normal),
            ("PointClosestToOrigin", &self.point_closest_to_origin),
        ])
    }
}

impl FromStr for Plane {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let [normal, point] = parse_named(s, "Plane", ["Normal", "PointClosestToOrigin"])?;
        Ok(Self {
            normal: normal.parse()?,
            point_closest_to_origin: point.parse()?,
        })
    }
}
