mod line_like;
mod orientation;
mod plane;
mod polygon;
pub mod relation;
pub mod shape;

pub use line_like::{BoundedRay, Line, LineLike, Ray};
pub use orientation::{Axis, CardinalOrientation};
pub use plane::{Plane, PlaneObjectRelationship};
pub use polygon::Polygon;
pub use shape::{ConvexShape, ConvexShapeLineIntersection, Cuboid, OriginCuboid, OriginSphere, Sphere};
