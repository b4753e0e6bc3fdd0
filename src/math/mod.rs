mod direction;
pub mod format;
pub mod intersect_3d;
mod location;
pub mod polygon_3d;
#[cfg(feature = "random")]
pub mod random;
mod rotation;
mod transform;
mod vect;

pub use direction::Direction;
pub use location::Location;
pub use rotation::Rotation;
pub use transform::Transform;
pub use vect::Vect;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Unit quaternion backing [`Rotation`].
pub type UnitQuaternion = nalgebra::UnitQuaternion<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Maximum separation (relative to the distance between start points) at which
/// two non-parallel lines are still treated as coplanar.
pub const COPLANARITY_TOLERANCE: f64 = 1e-7;

/// Distance within which a point counts as lying on a line-like.
pub const DEFAULT_LINE_THICKNESS: f64 = 0.01;

/// Distance within which a point counts as lying on a plane.
pub const DEFAULT_PLANE_THICKNESS: f64 = DEFAULT_LINE_THICKNESS;

/// Default angular tolerance (0.1 degrees, in radians) for approximate
/// parallel/orthogonal checks.
pub const DEFAULT_ANGLE_TOLERANCE: f64 = 0.1 * std::f64::consts::PI / 180.0;
