//! Common types and every relation trait, for glob import.

pub use crate::error::{GeoprimError, GeometryError, ParseError, Result};
pub use crate::geometry::relation::{
    ClosestPointOn, ClosestPointOnSurfaceOf, ClosestPointTo, Contains, DistanceFrom,
    DistanceFromSurfaceOf, IntersectionWith, IsContainedWithin, SignedDistanceFrom,
    SurfaceDistanceFrom, SurfacePointClosestTo,
};
pub use crate::geometry::{
    Axis, BoundedRay, CardinalOrientation, ConvexShape, ConvexShapeLineIntersection, Cuboid, Line,
    LineLike, OriginCuboid, OriginSphere, Plane, PlaneObjectRelationship, Polygon, Ray, Sphere,
};
#[cfg(feature = "random")]
pub use crate::math::random::RandomIn;
pub use crate::math::{
    Direction, Location, Rotation, Transform, Vect, DEFAULT_ANGLE_TOLERANCE,
    DEFAULT_LINE_THICKNESS, DEFAULT_PLANE_THICKNESS, TOLERANCE,
};
