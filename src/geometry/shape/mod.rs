mod cuboid;
mod sphere;

use std::fmt;

pub use cuboid::{Cuboid, OriginCuboid};
pub use sphere::{OriginSphere, Sphere};

use crate::math::{Direction, Location, TOLERANCE};

use super::{BoundedRay, Line, LineLike, Plane, Ray};

/// Where a line-like crosses the surface of a convex shape.
///
/// `first` comes before `second` along the line's direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvexShapeLineIntersection {
    pub first: Location,
    pub second: Option<Location>,
}

impl ConvexShapeLineIntersection {
    /// Packs up to two crossing points, promoting `b` when `a` is absent.
    #[must_use]
    pub fn from_two(a: Option<Location>, b: Option<Location>) -> Option<Self> {
        match (a, b) {
            (Some(first), second) => Some(Self { first, second }),
            (None, Some(first)) => Some(Self { first, second: None }),
            (None, None) => None,
        }
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        if self.second.is_some() {
            2
        } else {
            1
        }
    }
}

impl fmt::Display for ConvexShapeLineIntersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.second {
            Some(second) => write!(f, "{} and {}", self.first, second),
            None => write!(f, "{}", self.first),
        }
    }
}

/// Queries shared by every solid, closed, convex shape.
///
/// Implementors supply the location, line and plane primitives; everything
/// else is derived. Points "to" the shape lie on or inside it, points "on" a
/// line-like or plane lie on that object.
pub trait ConvexShape: Copy + fmt::Debug {
    fn contains_location(&self, location: Location) -> bool;

    /// Zero for any location inside the shape.
    fn distance_to_location(&self, location: Location) -> f64;

    /// Distance to the surface, measured from inside as well as outside.
    fn surface_distance_to_location(&self, location: Location) -> f64;

    /// `location` itself when inside the shape.
    fn closest_point_to_location(&self, location: Location) -> Location;

    fn surface_point_closest_to_location(&self, location: Location) -> Location;

    /// Outward normal at the surface point nearest `location`.
    fn surface_normal_at(&self, location: Location) -> Direction;

    /// Distances along the infinite extension of `line` at which it enters
    /// and leaves the shape, entry first. `None` when it misses.
    fn unbounded_surface_intersection_distances<L: LineLike>(&self, line: &L) -> Option<(f64, f64)>;

    /// The point on `line` nearest the shape (inside it if they overlap).
    fn closest_point_on_line_like<L: LineLike>(&self, line: &L) -> Location;

    /// The point on `line` nearest the shape's surface.
    fn closest_point_to_surface_on_line_like<L: LineLike>(&self, line: &L) -> Location;

    /// Signed distance from `plane`: positive when the whole shape is on the
    /// side the normal faces, zero when the plane cuts it.
    fn signed_distance_to_plane(&self, plane: &Plane) -> f64;

    /// The point on or in the shape nearest `plane`.
    fn closest_point_to_plane(&self, plane: &Plane) -> Location;

    /// The point on the surface nearest `plane`.
    fn surface_point_closest_to_plane(&self, plane: &Plane) -> Location;

    fn distance_to_line_like<L: LineLike>(&self, line: &L) -> f64 {
        self.distance_to_location(self.closest_point_on_line_like(line))
    }

    fn closest_point_to_line_like<L: LineLike>(&self, line: &L) -> Location {
        self.closest_point_to_location(self.closest_point_on_line_like(line))
    }

    fn surface_distance_to_line_like<L: LineLike>(&self, line: &L) -> f64 {
        self.surface_distance_to_location(self.closest_point_to_surface_on_line_like(line))
    }

    fn surface_point_closest_to_line_like<L: LineLike>(&self, line: &L) -> Location {
        self.surface_point_closest_to_location(self.closest_point_to_surface_on_line_like(line))
    }

    /// Surface crossings within `line`'s bounds. A tangent line gives one point.
    fn intersection_with_line_like<L: LineLike>(&self, line: &L) -> Option<ConvexShapeLineIntersection> {
        let (entry, exit) = self.unbounded_surface_intersection_distances(line)?;
        let second = if (exit - entry).abs() < TOLERANCE {
            None
        } else {
            line.location_at_distance_or_none(exit)
        };
        ConvexShapeLineIntersection::from_two(line.location_at_distance_or_none(entry), second)
    }

    fn is_intersected_by_line_like<L: LineLike>(&self, line: &L) -> bool {
        self.unbounded_surface_intersection_distances(line)
            .is_some_and(|(entry, exit)| {
                line.distance_is_within_bounds(entry) || line.distance_is_within_bounds(exit)
            })
    }

    /// Distance along `line` to the first surface crossing and the point hit.
    fn first_surface_hit<L: LineLike>(&self, line: &L) -> Option<(f64, Location)> {
        let (entry, exit) = self.unbounded_surface_intersection_distances(line)?;
        [entry, exit]
            .into_iter()
            .find(|&distance| line.distance_is_within_bounds(distance))
            .map(|distance| (distance, line.unbounded_location_at_distance(distance)))
    }

    /// Angle in radians between `line` and the surface normal where it first
    /// hits, `0` for a head-on hit.
    fn incident_angle_with_line_like<L: LineLike>(&self, line: &L) -> Option<f64> {
        let (_, hit) = self.first_surface_hit(line)?;
        Some(self.surface_normal_at(hit).angle_to(line.direction().reversed()))
    }

    /// Where `line` first hits the surface and the mirrored direction leaving
    /// it. `None` on a miss or a grazing hit.
    fn reflection_off_surface<L: LineLike>(&self, line: &L) -> Option<(f64, Location, Direction)> {
        let (distance, hit) = self.first_surface_hit(line)?;
        let tangent_plane = Plane::new(self.surface_normal_at(hit), hit);
        let direction = tangent_plane.reflection_of_direction(line.direction())?;
        Some((distance, hit, direction))
    }

    fn reflection_of_line(&self, line: &Line) -> Option<Ray> {
        self.reflection_off_surface(line)
            .map(|(_, hit, direction)| Ray::new(hit, direction))
    }

    fn reflection_of_ray(&self, ray: &Ray) -> Option<Ray> {
        self.reflection_off_surface(ray)
            .map(|(_, hit, direction)| Ray::new(hit, direction))
    }

    /// The bounced remainder of `ray`, keeping its total length.
    fn reflection_of_bounded_ray(&self, ray: &BoundedRay) -> Option<BoundedRay> {
        let length = ray.vect().length();
        self.reflection_off_surface(ray).map(|(distance, hit, direction)| {
            BoundedRay::from_start_point_and_vect(hit, direction.to_vect(length - distance))
        })
    }

    /// Whether the whole segment lies within the shape.
    fn contains_bounded_ray(&self, ray: &BoundedRay) -> bool {
        self.contains_location(ray.start_point()) && self.contains_location(ray.end())
    }

    fn distance_to_plane(&self, plane: &Plane) -> f64 {
        self.signed_distance_to_plane(plane).abs()
    }

    /// The point on `plane` nearest the shape.
    fn closest_point_on_plane(&self, plane: &Plane) -> Location {
        plane.closest_point_to_location(self.closest_point_to_plane(plane))
    }

    fn closest_point_to_surface_on_plane(&self, plane: &Plane) -> Location {
        plane.closest_point_to_location(self.surface_point_closest_to_plane(plane))
    }
}

/// Implements `ConvexShape` for a shape positioned at `center()` by moving
/// every query into the frame of its origin-centred counterpart.
macro_rules! impl_positioned_convex_shape {
    ($shape:ty => $local:ident) => {
        impl $crate::geometry::shape::ConvexShape for $shape {
            fn contains_location(&self, location: Location) -> bool {
                self.$local().contains_location(location - self.center().as_vect())
            }

            fn distance_to_location(&self, location: Location) -> f64 {
                self.$local().distance_to_location(location - self.center().as_vect())
            }

            fn surface_distance_to_location(&self, location: Location) -> f64 {
                self.$local().surface_distance_to_location(location - self.center().as_vect())
            }

            fn closest_point_to_location(&self, location: Location) -> Location {
                self.$local().closest_point_to_location(location - self.center().as_vect())
                    + self.center().as_vect()
            }

            fn surface_point_closest_to_location(&self, location: Location) -> Location {
                self.$local().surface_point_closest_to_location(location - self.center().as_vect())
                    + self.center().as_vect()
            }

            fn surface_normal_at(&self, location: Location) -> Direction {
                self.$local().surface_normal_at(location - self.center().as_vect())
            }

            fn unbounded_surface_intersection_distances<L: LineLike>(&self, line: &L) -> Option<(f64, f64)> {
                self.$local()
                    .unbounded_surface_intersection_distances(&line.moved_by(-self.center().as_vect()))
            }

            fn closest_point_on_line_like<L: LineLike>(&self, line: &L) -> Location {
                self.$local().closest_point_on_line_like(&line.moved_by(-self.center().as_vect()))
                    + self.center().as_vect()
            }

            fn closest_point_to_surface_on_line_like<L: LineLike>(&self, line: &L) -> Location {
                self.$local()
                    .closest_point_to_surface_on_line_like(&line.moved_by(-self.center().as_vect()))
                    + self.center().as_vect()
            }

            fn signed_distance_to_plane(&self, plane: &Plane) -> f64 {
                self.$local().signed_distance_to_plane(&plane.moved_by(-self.center().as_vect()))
            }

            fn closest_point_to_plane(&self, plane: &Plane) -> Location {
                self.$local().closest_point_to_plane(&plane.moved_by(-self.center().as_vect()))
                    + self.center().as_vect()
            }

            fn surface_point_closest_to_plane(&self, plane: &Plane) -> Location {
                self.$local().surface_point_closest_to_plane(&plane.moved_by(-self.center().as_vect()))
                    + self.center().as_vect()
            }
        }
    };
}

pub(crate) use impl_positioned_convex_shape;

/// Implements every relation between the listed shapes and locations,
/// line-likes and planes, in both phrasings.
macro_rules! impl_convex_shape_relations {
    (@lines $shape:ty; $($line:ty),+) => {
        $(
            impl DistanceFrom<$line> for $shape {
                fn distance_from(&self, line: &$line) -> f64 {
                    self.distance_to_line_like(line)
                }
            }

            impl ClosestPointTo<$line> for $shape {
                fn closest_point_to(&self, line: &$line) -> Location {
                    self.closest_point_to_line_like(line)
                }
            }

            impl ClosestPointTo<$shape> for $line {
                fn closest_point_to(&self, shape: &$shape) -> Location {
                    shape.closest_point_on_line_like(self)
                }
            }

            impl SurfaceDistanceFrom<$line> for $shape {
                fn surface_distance_from(&self, line: &$line) -> f64 {
                    self.surface_distance_to_line_like(line)
                }
            }

            impl SurfacePointClosestTo<$line> for $shape {
                fn surface_point_closest_to(&self, line: &$line) -> Location {
                    self.surface_point_closest_to_line_like(line)
                }
            }

            impl IntersectionWith<$line> for $shape {
                type Output = ConvexShapeLineIntersection;

                fn intersection_with(&self, line: &$line) -> Option<ConvexShapeLineIntersection> {
                    self.intersection_with_line_like(line)
                }

                fn is_intersected_by(&self, line: &$line) -> bool {
                    self.is_intersected_by_line_like(line)
                }
            }

            mirror_distance_from!($shape => $line);
            mirror_intersection_with!($shape => $line);
        )+
    };
    ($($shape:ty),+ $(,)?) => {
        $(
            impl DistanceFrom<Location> for $shape {
                fn distance_from(&self, location: &Location) -> f64 {
                    self.distance_to_location(*location)
                }
            }

            impl ClosestPointTo<Location> for $shape {
                fn closest_point_to(&self, location: &Location) -> Location {
                    self.closest_point_to_location(*location)
                }
            }

            impl Contains<Location> for $shape {
                fn contains(&self, location: &Location) -> bool {
                    self.contains_location(*location)
                }
            }

            impl Contains<BoundedRay> for $shape {
                fn contains(&self, ray: &BoundedRay) -> bool {
                    self.contains_bounded_ray(ray)
                }
            }

            impl SurfaceDistanceFrom<Location> for $shape {
                fn surface_distance_from(&self, location: &Location) -> f64 {
                    self.surface_distance_to_location(*location)
                }
            }

            impl SurfacePointClosestTo<Location> for $shape {
                fn surface_point_closest_to(&self, location: &Location) -> Location {
                    self.surface_point_closest_to_location(*location)
                }
            }

            mirror_distance_from!($shape => Location);

            impl SignedDistanceFrom<$shape> for Plane {
                fn signed_distance_from(&self, shape: &$shape) -> f64 {
                    shape.signed_distance_to_plane(self)
                }
            }

            impl DistanceFrom<Plane> for $shape {
                fn distance_from(&self, plane: &Plane) -> f64 {
                    self.distance_to_plane(plane)
                }
            }

            impl ClosestPointTo<Plane> for $shape {
                fn closest_point_to(&self, plane: &Plane) -> Location {
                    self.closest_point_to_plane(plane)
                }
            }

            impl ClosestPointTo<$shape> for Plane {
                fn closest_point_to(&self, shape: &$shape) -> Location {
                    shape.closest_point_on_plane(self)
                }
            }

            impl SurfaceDistanceFrom<Plane> for $shape {
                fn surface_distance_from(&self, plane: &Plane) -> f64 {
                    self.distance_to_plane(plane)
                }
            }

            impl SurfacePointClosestTo<Plane> for $shape {
                fn surface_point_closest_to(&self, plane: &Plane) -> Location {
                    self.surface_point_closest_to_plane(plane)
                }
            }

            mirror_distance_from!($shape => Plane);

            impl_convex_shape_relations!(@lines $shape; Line, Ray, BoundedRay);
        )+
    };
}

mod relations {
    use super::{
        BoundedRay, ConvexShape, ConvexShapeLineIntersection, Cuboid, Line, Location,
        OriginCuboid, OriginSphere, Plane, Ray, Sphere,
    };
    use crate::geometry::relation::{
        mirror_distance_from, mirror_intersection_with, ClosestPointTo, Contains, DistanceFrom,
        IntersectionWith, SignedDistanceFrom, SurfaceDistanceFrom, SurfacePointClosestTo,
    };

    impl_convex_shape_relations!(OriginSphere, Sphere, OriginCuboid, Cuboid);
}
