mod bounded_ray;
mod line;
mod ray;

use std::fmt;

pub use bounded_ray::BoundedRay;
pub use line::Line;
pub use ray::Ray;

use crate::math::{Direction, Location, Vect};

/// Shared behaviour of [`Line`], [`Ray`] and [`BoundedRay`].
///
/// A line-like is a start point plus a direction, with a parameter (distance
/// from the start point) that is unbounded for a `Line`, non-negative for a
/// `Ray` and in `[0, length]` for a `BoundedRay`.
pub trait LineLike: Copy + fmt::Debug {
    /// The anchor point. For a `Line` this is any point on the line.
    fn start_point(&self) -> Location;

    /// Unit direction; `NONE` only for a zero-length `BoundedRay`.
    fn direction(&self) -> Direction;

    /// Length, or `None` for infinite line-likes.
    fn length(&self) -> Option<f64>;

    /// Whether negative distances are valid.
    fn is_unbounded_in_both_directions(&self) -> bool;

    /// The same line-like translated by `vect`.
    #[must_use]
    fn moved_by(&self, vect: Vect) -> Self;

    /// The same line-like rotated about `pivot`.
    #[must_use]
    fn rotated_around(&self, pivot: Location, rotation: crate::math::Rotation) -> Self;

    fn is_finite_length(&self) -> bool {
        self.length().is_some()
    }

    fn length_squared(&self) -> Option<f64> {
        self.length().map(|l| l * l)
    }

    fn start_to_end_vect(&self) -> Option<Vect> {
        self.length().map(|l| self.direction().to_vect(l))
    }

    fn end_point(&self) -> Option<Location> {
        self.start_to_end_vect().map(|v| self.start_point() + v)
    }

    /// Inclusive range of valid distances.
    fn distance_bounds(&self) -> (f64, f64) {
        match self.length() {
            Some(length) => (0.0, length),
            None if self.is_unbounded_in_both_directions() => (f64::NEG_INFINITY, f64::INFINITY),
            None => (0.0, f64::INFINITY),
        }
    }

    /// Clamps `distance` into [`distance_bounds`](Self::distance_bounds).
    fn bind_distance(&self, distance: f64) -> f64 {
        let (lo, hi) = self.distance_bounds();
        distance.clamp(lo, hi)
    }

    fn distance_is_within_bounds(&self, distance: f64) -> bool {
        self.distance_is_within_bounds_with_tolerance(distance, 0.0)
    }

    fn distance_is_within_bounds_with_tolerance(&self, distance: f64, tolerance: f64) -> bool {
        let (lo, hi) = self.distance_bounds();
        lo - tolerance <= distance && distance <= hi + tolerance
    }

    /// The point `distance` along the infinite extension of this line-like.
    fn unbounded_location_at_distance(&self, distance: f64) -> Location {
        self.start_point() + self.direction().to_vect(distance)
    }

    /// The point `distance` along this line-like, clamped to its bounds.
    fn bounded_location_at_distance(&self, distance: f64) -> Location {
        self.unbounded_location_at_distance(self.bind_distance(distance))
    }

    /// The point `distance` along this line-like, or `None` if out of bounds.
    fn location_at_distance_or_none(&self, distance: f64) -> Option<Location> {
        self.distance_is_within_bounds(distance)
            .then(|| self.unbounded_location_at_distance(distance))
    }

    /// Signed distance along the infinite extension to the foot of the
    /// perpendicular from `location`.
    fn unbounded_distance_at_point_closest_to(&self, location: Location) -> f64 {
        (location - self.start_point()).dot(self.direction().to_vect(1.0))
    }

    fn bounded_distance_at_point_closest_to(&self, location: Location) -> f64 {
        self.bind_distance(self.unbounded_distance_at_point_closest_to(location))
    }

    fn closest_point_to_location(&self, location: Location) -> Location {
        self.unbounded_location_at_distance(self.bounded_distance_at_point_closest_to(location))
    }

    fn closest_point_to_origin(&self) -> Location {
        self.closest_point_to_location(Location::ORIGIN)
    }

    fn distance_from_origin(&self) -> f64 {
        self.closest_point_to_origin().as_vect().length()
    }

    /// Whether `location` is within `thickness` of this line-like.
    fn contains_with_thickness(&self, location: Location, thickness: f64) -> bool {
        self.closest_point_to_location(location)
            .distance_squared_to(location)
            <= thickness * thickness
    }

    /// Crossing point with `other`, allowing either bound to be overshot by
    /// `tolerance`.
    fn intersection_with_tolerance<L: LineLike>(&self, other: &L, tolerance: f64) -> Option<Location> {
        crate::math::intersect_3d::bounded_intersection(self, other, tolerance)
    }

    fn is_parallel_to<L: LineLike>(&self, other: &L) -> bool {
        self.direction().is_parallel_to(other.direction())
    }

    /// Whether `other` runs along the infinite extension of this line-like,
    /// within `thickness`. Bounds play no part.
    fn is_colinear_with<L: LineLike>(&self, other: &L, thickness: f64) -> bool {
        self.is_parallel_to(other)
            && self
                .coerce_to_line()
                .contains_with_thickness(other.start_point(), thickness)
    }

    /// Angle in radians between the two directions, in `[0, PI]`.
    fn angle_to<L: LineLike>(&self, other: &L) -> f64 {
        self.direction().angle_to(other.direction())
    }

    /// The infinite line through this line-like.
    fn coerce_to_line(&self) -> Line {
        Line::new(self.start_point(), self.direction())
    }

    /// A ray from this line-like's start point.
    fn coerce_to_ray(&self) -> Ray {
        Ray::new(self.start_point(), self.direction())
    }

    /// A bounded ray of the given length from this line-like's start point.
    fn coerce_to_bounded_ray(&self, length: f64) -> BoundedRay {
        BoundedRay::from_start_point_and_vect(self.start_point(), self.direction().to_vect(length))
    }
}

/// Where `line` hits `plane` (distance and location) and the mirrored
/// direction leaving that point.
fn reflection_off_plane<L: LineLike>(
    line: &L,
    plane: &crate::geometry::Plane,
) -> Option<(f64, Location, Direction)> {
    let distance = crate::math::intersect_3d::unbounded_plane_intersection_distance(line, plane)?;
    let hit = line.location_at_distance_or_none(distance)?;
    let direction = plane.reflection_of_direction(line.direction())?;
    Some((distance, hit, direction))
}

/// Implements every relation between the listed line-like types and
/// locations, planes and each other.
macro_rules! impl_line_like_relations {
    (@pairs $this:ty; $($other:ty),+) => {
        $(
            impl $crate::geometry::relation::ClosestPointTo<$other> for $this {
                fn closest_point_to(&self, other: &$other) -> $crate::math::Location {
                    let distances = $crate::math::intersect_3d::closest_approach_distances(self, other);
                    self.unbounded_location_at_distance(distances.this)
                }
            }

            impl $crate::geometry::relation::DistanceFrom<$other> for $this {
                fn distance_from(&self, other: &$other) -> f64 {
                    let distances = $crate::math::intersect_3d::closest_approach_distances(self, other);
                    self.unbounded_location_at_distance(distances.this)
                        .distance_to(other.unbounded_location_at_distance(distances.other))
                }
            }

            impl $crate::geometry::relation::IntersectionWith<$other> for $this {
                type Output = $crate::math::Location;

                fn intersection_with(&self, other: &$other) -> Option<$crate::math::Location> {
                    $crate::math::intersect_3d::bounded_intersection(self, other, 0.0)
                }
            }
        )+
    };
    ($($line:ty),+ $(,)?) => {
        $(
            impl $crate::geometry::relation::DistanceFrom<$crate::math::Location> for $line {
                fn distance_from(&self, other: &$crate::math::Location) -> f64 {
                    self.closest_point_to_location(*other).distance_to(*other)
                }
            }

            impl $crate::geometry::relation::ClosestPointTo<$crate::math::Location> for $line {
                fn closest_point_to(&self, other: &$crate::math::Location) -> $crate::math::Location {
                    self.closest_point_to_location(*other)
                }
            }

            impl $crate::geometry::relation::Contains<$crate::math::Location> for $line {
                fn contains(&self, other: &$crate::math::Location) -> bool {
                    self.contains_with_thickness(*other, $crate::math::DEFAULT_LINE_THICKNESS)
                }
            }

            $crate::geometry::relation::mirror_distance_from!($line => $crate::math::Location);

            impl $crate::geometry::relation::ClosestPointTo<$crate::geometry::Plane> for $line {
                fn closest_point_to(&self, plane: &$crate::geometry::Plane) -> $crate::math::Location {
                    plane.nearest_point_on_line_like(self)
                }
            }

            impl $crate::geometry::relation::ClosestPointTo<$line> for $crate::geometry::Plane {
                fn closest_point_to(&self, line: &$line) -> $crate::math::Location {
                    self.closest_point_to_line_like(line)
                }
            }

            impl $crate::geometry::relation::SignedDistanceFrom<$line> for $crate::geometry::Plane {
                fn signed_distance_from(&self, line: &$line) -> f64 {
                    self.signed_distance_to_line_like(line)
                }
            }

            impl $crate::geometry::relation::DistanceFrom<$line> for $crate::geometry::Plane {
                fn distance_from(&self, line: &$line) -> f64 {
                    self.signed_distance_to_line_like(line).abs()
                }
            }

            impl $crate::geometry::relation::IntersectionWith<$line> for $crate::geometry::Plane {
                type Output = $crate::math::Location;

                fn intersection_with(&self, line: &$line) -> Option<$crate::math::Location> {
                    self.intersection_with_line_like(line)
                }
            }

            $crate::geometry::relation::mirror_distance_from!($crate::geometry::Plane => $line);
            $crate::geometry::relation::mirror_intersection_with!($crate::geometry::Plane => $line);

            impl_line_like_relations!(@pairs $line; $crate::geometry::Line, $crate::geometry::Ray, $crate::geometry::BoundedRay);
        )+
    };
}

impl_line_like_relations!(Line, Ray, BoundedRay);
