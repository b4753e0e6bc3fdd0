//! Pairwise relationship queries between geometric values.
//!
//! Each relationship is implemented once, on the type that owns the algorithm
//! (`ClosestPointTo`, `Contains`, `SurfaceDistanceFrom`, ...). The opposite
//! phrasing (`ClosestPointOn`, `IsContainedWithin`, `DistanceFromSurfaceOf`, ...)
//! is provided for every pair by a blanket impl that forwards to the owner, so
//! both phrasings always agree.

/// Shortest distance between `self` and `other`.
pub trait DistanceFrom<T: ?Sized> {
    fn distance_from(&self, other: &T) -> f64;

    fn distance_squared_from(&self, other: &T) -> f64 {
        let distance = self.distance_from(other);
        distance * distance
    }
}

/// Signed distance of `other` from `self`; positive on the side `self` faces.
pub trait SignedDistanceFrom<T: ?Sized> {
    fn signed_distance_from(&self, other: &T) -> f64;
}

/// The point on (or in) `self` closest to `other`.
pub trait ClosestPointTo<T: ?Sized> {
    fn closest_point_to(&self, other: &T) -> crate::math::Location;
}

/// The point on (or in) `other` closest to `self`.
pub trait ClosestPointOn<T: ?Sized> {
    fn closest_point_on(&self, other: &T) -> crate::math::Location;
}

impl<S, T> ClosestPointOn<T> for S
where
    T: ClosestPointTo<S> + ?Sized,
{
    fn closest_point_on(&self, other: &T) -> crate::math::Location {
        other.closest_point_to(self)
    }
}

/// Whether `other` lies on or within `self`.
pub trait Contains<T: ?Sized> {
    fn contains(&self, other: &T) -> bool;
}

/// Whether `self` lies on or within `container`.
pub trait IsContainedWithin<T: ?Sized> {
    fn is_contained_within(&self, container: &T) -> bool;
}

impl<S, T> IsContainedWithin<T> for S
where
    T: Contains<S> + ?Sized,
{
    fn is_contained_within(&self, container: &T) -> bool {
        container.contains(self)
    }
}

/// Distance from the surface of the shape `self` to `other`, measured from
/// inside as well as outside.
pub trait SurfaceDistanceFrom<T: ?Sized> {
    fn surface_distance_from(&self, other: &T) -> f64;
}

/// Distance from `self` to the surface of `shape`.
pub trait DistanceFromSurfaceOf<T: ?Sized> {
    fn distance_from_surface_of(&self, shape: &T) -> f64;
}

impl<S, T> DistanceFromSurfaceOf<T> for S
where
    T: SurfaceDistanceFrom<S> + ?Sized,
{
    fn distance_from_surface_of(&self, shape: &T) -> f64 {
        shape.surface_distance_from(self)
    }
}

/// The point on the surface of the shape `self` closest to `other`.
pub trait SurfacePointClosestTo<T: ?Sized> {
    fn surface_point_closest_to(&self, other: &T) -> crate::math::Location;
}

/// The point on the surface of `shape` closest to `self`.
pub trait ClosestPointOnSurfaceOf<T: ?Sized> {
    fn closest_point_on_surface_of(&self, shape: &T) -> crate::math::Location;
}

impl<S, T> ClosestPointOnSurfaceOf<T> for S
where
    T: SurfacePointClosestTo<S> + ?Sized,
{
    fn closest_point_on_surface_of(&self, shape: &T) -> crate::math::Location {
        shape.surface_point_closest_to(self)
    }
}

/// Where `self` and `other` meet, if they do.
pub trait IntersectionWith<T: ?Sized> {
    type Output;

    fn intersection_with(&self, other: &T) -> Option<Self::Output>;

    fn is_intersected_by(&self, other: &T) -> bool {
        self.intersection_with(other).is_some()
    }
}

/// Implements `DistanceFrom<$owner>` for each `$other` by forwarding to
/// `$owner: DistanceFrom<$other>`.
macro_rules! mirror_distance_from {
    ($owner:ty => $($other:ty),+ $(,)?) => {
        $(
            impl $crate::geometry::relation::DistanceFrom<$owner> for $other {
                fn distance_from(&self, other: &$owner) -> f64 {
                    $crate::geometry::relation::DistanceFrom::distance_from(other, self)
                }
            }
        )+
    };
}

/// Implements `IntersectionWith<$owner>` for each `$other` by forwarding to
/// `$owner: IntersectionWith<$other>`.
macro_rules! mirror_intersection_with {
    ($owner:ty => $($other:ty),+ $(,)?) => {
        $(
            impl $crate::geometry::relation::IntersectionWith<$owner> for $other {
                type Output = <$owner as $crate::geometry::relation::IntersectionWith<$other>>::Output;

                fn intersection_with(&self, other: &$owner) -> Option<Self::Output> {
                    $crate::geometry::relation::IntersectionWith::intersection_with(other, self)
                }
            }
        )+
    };
}

pub(crate) use mirror_distance_from;
pub(crate) use mirror_intersection_with;
