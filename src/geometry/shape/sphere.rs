use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::geometry::{LineLike, Plane};
use crate::math::format::{parse_named, parse_number, write_named};
use crate::math::{Direction, Location, Vect, TOLERANCE};

use super::{impl_positioned_convex_shape, ConvexShape};

/// A solid sphere centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OriginSphere {
    radius: f64,
}

impl OriginSphere {
    #[must_use]
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn radius_squared(&self) -> f64 {
        self.radius * self.radius
    }

    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.radius.powi(3)
    }

    #[must_use]
    pub fn surface_area(&self) -> f64 {
        4.0 * PI * self.radius_squared()
    }

    #[must_use]
    pub fn scaled_by(&self, factor: f64) -> Self {
        Self::new(self.radius * factor)
    }

    /// This sphere moved to `center`.
    #[must_use]
    pub const fn at(&self, center: Location) -> Sphere {
        Sphere::new(center, self.radius)
    }

    /// Radius of the circular slice `distance_from_center` from the centre;
    /// zero beyond the surface.
    #[must_use]
    pub fn circle_radius_at_distance_from_center(&self, distance_from_center: f64) -> f64 {
        (self.radius_squared() - distance_from_center * distance_from_center)
            .max(0.0)
            .sqrt()
    }

    /// Centre and radius of the circle where `plane` cuts the sphere.
    #[must_use]
    pub fn split_by(&self, plane: &Plane) -> Option<(Location, f64)> {
        let center = plane.point_closest_to_origin();
        let distance = center.as_vect().length();
        (distance <= self.radius).then(|| (center, self.circle_radius_at_distance_from_center(distance)))
    }

    #[must_use]
    pub fn interpolate(start: &Self, end: &Self, t: f64) -> Self {
        Self::new(start.radius + (end.radius - start.radius) * t)
    }

    /// Any point on the circle cut by `plane`, or `None` if it misses.
    fn any_point_on_split_circle(&self, plane: &Plane) -> Option<Location> {
        let (center, circle_radius) = self.split_by(plane)?;
        let outward = center.as_vect().direction();
        let axis = if outward.is_none() {
            plane.normal()
        } else {
            outward
        };
        Some(center + axis.any_orthogonal().to_vect(circle_radius))
    }
}

impl ConvexShape for OriginSphere {
    /// Points up to [`TOLERANCE`] beyond the surface count as inside.
    fn contains_location(&self, location: Location) -> bool {
        location.as_vect().length() - self.radius < TOLERANCE
    }

    fn distance_to_location(&self, location: Location) -> f64 {
        (location.as_vect().length() - self.radius).max(0.0)
    }

    fn surface_distance_to_location(&self, location: Location) -> f64 {
        (location.as_vect().length() - self.radius).abs()
    }

    fn closest_point_to_location(&self, location: Location) -> Location {
        Location::from_vect(location.as_vect().with_max_length(self.radius))
    }

    /// The centre maps to the top of the sphere.
    fn surface_point_closest_to_location(&self, location: Location) -> Location {
        Location::from_vect(self.surface_normal_at(location).to_vect(self.radius))
    }

    fn surface_normal_at(&self, location: Location) -> Direction {
        let outward = location.as_vect().direction();
        if outward.is_none() {
            Direction::UP
        } else {
            outward
        }
    }

    fn unbounded_surface_intersection_distances<L: LineLike>(&self, line: &L) -> Option<(f64, f64)> {
        let direction = line.direction();
        if direction.is_none() {
            return None;
        }
        // |s + t*d|^2 = r^2 with |d| = 1
        let start = line.start_point().as_vect();
        let b = 2.0 * start.dot(direction.to_vect(1.0));
        let c = start.length_squared() - self.radius_squared();
        let discriminant = b * b - 4.0 * c;
        if discriminant < -TOLERANCE {
            return None;
        }
        if discriminant <= TOLERANCE {
            let tangent = -b * 0.5;
            return Some((tangent, tangent));
        }
        let root = discriminant.sqrt();
        Some(((-b - root) * 0.5, (-b + root) * 0.5))
    }

    fn closest_point_on_line_like<L: LineLike>(&self, line: &L) -> Location {
        line.closest_point_to_origin()
    }

    fn closest_point_to_surface_on_line_like<L: LineLike>(&self, line: &L) -> Location {
        let Some((entry, exit)) = self.unbounded_surface_intersection_distances(line) else {
            return line.closest_point_to_origin();
        };
        let entry_point = line.unbounded_location_at_distance(entry);
        let exit_point = line.unbounded_location_at_distance(exit);
        let nearest = if line.closest_point_to_location(exit_point).distance_squared_to(exit_point)
            < line.closest_point_to_location(entry_point).distance_squared_to(entry_point)
        {
            exit_point
        } else {
            entry_point
        };
        line.closest_point_to_location(nearest)
    }

    fn signed_distance_to_plane(&self, plane: &Plane) -> f64 {
        let center_distance = plane.signed_distance_from_origin();
        if center_distance.abs() <= self.radius {
            0.0
        } else {
            center_distance - self.radius.copysign(center_distance)
        }
    }

    fn closest_point_to_plane(&self, plane: &Plane) -> Location {
        Location::from_vect(plane.point_closest_to_origin().as_vect().with_max_length(self.radius))
    }

    fn surface_point_closest_to_plane(&self, plane: &Plane) -> Location {
        self.any_point_on_split_circle(plane)
            .unwrap_or_else(|| self.closest_point_to_plane(plane))
    }
}

impl fmt::Display for OriginSphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_named(f, "OriginSphere", &[("Radius", &self.radius)])
    }
}

impl FromStr for OriginSphere {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [radius] = parse_named(s, "OriginSphere", ["Radius"])?;
        Ok(Self::new(parse_number(radius)?))
    }
}

/// A solid sphere at an arbitrary centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Location,
    radius: f64,
}

impl Sphere {
    #[must_use]
    pub const fn new(center: Location, radius: f64) -> Self {
        Self { center, radius }
    }

    #[must_use]
    pub const fn center(&self) -> Location {
        self.center
    }

    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// The same sphere centred on the origin.
    #[must_use]
    pub const fn as_origin_sphere(&self) -> OriginSphere {
        OriginSphere::new(self.radius)
    }

    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.as_origin_sphere().diameter()
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        self.as_origin_sphere().volume()
    }

    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.as_origin_sphere().surface_area()
    }

    #[must_use]
    pub const fn with_center(&self, center: Location) -> Self {
        Self::new(center, self.radius)
    }

    #[must_use]
    pub const fn with_radius(&self, radius: f64) -> Self {
        Self::new(self.center, radius)
    }

    #[must_use]
    pub fn moved_by(&self, vect: Vect) -> Self {
        self.with_center(self.center + vect)
    }

    /// Scales the radius; the centre stays put.
    #[must_use]
    pub fn scaled_by(&self, factor: f64) -> Self {
        self.with_radius(self.radius * factor)
    }

    /// Centre and radius of the circle where `plane` cuts the sphere.
    #[must_use]
    pub fn split_by(&self, plane: &Plane) -> Option<(Location, f64)> {
        self.as_origin_sphere()
            .split_by(&plane.moved_by(-self.center.as_vect()))
            .map(|(center, radius)| (center + self.center.as_vect(), radius))
    }

    #[must_use]
    pub fn interpolate(start: &Self, end: &Self, t: f64) -> Self {
        Self::new(
            Location::interpolate(start.center, end.center, t),
            start.radius + (end.radius - start.radius) * t,
        )
    }
}

impl From<OriginSphere> for Sphere {
    fn from(sphere: OriginSphere) -> Self {
        sphere.at(Location::ORIGIN)
    }
}

impl_positioned_convex_shape!(Sphere => as_origin_sphere);

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_named(f, "Sphere", &[("Center", &self.center), ("Radius", &self.radius)])
    }
}

impl FromStr for Sphere {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [center, radius] = parse_named(s, "Sphere", ["Center", "Radius"])?;
        Ok(Self::new(center.parse()?, parse_number(radius)?))
    }
}
