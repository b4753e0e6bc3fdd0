//! Immutable 3D geometry primitives.
//!
//! Value types for locations, directions, line-likes, planes, convex shapes and
//! polygons, plus the relation traits in [`geometry::relation`] that answer
//! distance, containment, closest-point and intersection queries between them.
//! Every relation can be asked from either side: `a.distance_from(&b)` and
//! `b.distance_from(&a)` agree.

pub mod error;
pub mod geometry;
pub mod math;
pub mod prelude;

pub use error::{GeoprimError, Result};
