use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use crate::error::ParseError;
use crate::geometry::Plane;

use super::format::{parse_triple, write_triple};
use super::{Rotation, Vect, Vector3, TOLERANCE};

/// A unit-length 3D direction, or the distinguished zero value [`Direction::NONE`].
///
/// Every constructor normalizes its input; inputs too short to normalize become `NONE`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Direction {
    x: f64,
    y: f64,
    z: f64,
}

impl Direction {
    pub const NONE: Self = Self::from_unit(0.0, 0.0, 0.0);
    pub const FORWARD: Self = Self::from_unit(0.0, 0.0, 1.0);
    pub const BACKWARD: Self = Self::from_unit(0.0, 0.0, -1.0);
    pub const UP: Self = Self::from_unit(0.0, 1.0, 0.0);
    pub const DOWN: Self = Self::from_unit(0.0, -1.0, 0.0);
    pub const LEFT: Self = Self::from_unit(1.0, 0.0, 0.0);
    pub const RIGHT: Self = Self::from_unit(-1.0, 0.0, 0.0);

    /// The six axis-aligned directions.
    pub const CARDINALS: [Self; 6] = [
        Self::FORWARD,
        Self::BACKWARD,
        Self::UP,
        Self::DOWN,
        Self::LEFT,
        Self::RIGHT,
    ];

    const fn from_unit(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Normalizes `(x, y, z)`.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_vector3(Vector3::new(x, y, z))
    }

    /// Normalizes `v`, or returns `NONE` when `v` is (near) zero or not finite.
    #[must_use]
    pub fn from_vector3(v: Vector3) -> Self {
        let length = v.norm();
        if !length.is_finite() || length < TOLERANCE {
            return Self::NONE;
        }
        let unit = v / length;
        Self::from_unit(unit.x, unit.y, unit.z)
    }

    /// Accepts components that are already unit length (within `1e-6`) as-is,
    /// otherwise normalizes them.
    #[must_use]
    pub fn from_prenormalized(x: f64, y: f64, z: f64) -> Self {
        let length_squared = x * x + y * y + z * z;
        if length_squared == 0.0 || (length_squared - 1.0).abs() < 1e-6 {
            Self::from_unit(x, y, z)
        } else {
            Self::new(x, y, z)
        }
    }

    #[must_use]
    pub const fn x(self) -> f64 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> f64 {
        self.y
    }

    #[must_use]
    pub const fn z(self) -> f64 {
        self.z
    }

    #[must_use]
    pub fn to_vector3(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// A vector of the given length along this direction.
    #[must_use]
    pub fn to_vect(self, length: f64) -> Vect {
        Vect::new(self.x * length, self.y * length, self.z * length)
    }

    #[must_use]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Normalized cross product; `NONE` when the directions are parallel.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::from_vector3(self.to_vector3().cross(&other.to_vector3()))
    }

    /// Angle between the two directions in radians, in `[0, PI]`.
    ///
    /// Zero when either direction is `NONE`.
    #[must_use]
    pub fn angle_to(self, other: Self) -> f64 {
        if self.is_none() || other.is_none() {
            return 0.0;
        }
        self.dot(other).clamp(-1.0, 1.0).acos()
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        -self
    }

    /// Whether the directions are parallel or anti-parallel.
    #[must_use]
    pub fn is_parallel_to(self, other: Self) -> bool {
        !self.is_none()
            && !other.is_none()
            && self.to_vector3().cross(&other.to_vector3()).norm() < TOLERANCE
    }

    #[must_use]
    pub fn is_approximately_parallel_to(self, other: Self, tolerance_radians: f64) -> bool {
        if self.is_none() || other.is_none() {
            return false;
        }
        let angle = self.angle_to(other);
        angle <= tolerance_radians || angle >= PI - tolerance_radians
    }

    #[must_use]
    pub fn is_orthogonal_to(self, other: Self) -> bool {
        !self.is_none() && !other.is_none() && self.dot(other).abs() < TOLERANCE
    }

    #[must_use]
    pub fn is_approximately_orthogonal_to(self, other: Self, tolerance_radians: f64) -> bool {
        if self.is_none() || other.is_none() {
            return false;
        }
        (self.angle_to(other) - FRAC_PI_2).abs() <= tolerance_radians
    }

    /// Some direction orthogonal to this one; `NONE` for `NONE`.
    #[must_use]
    pub fn any_orthogonal(self) -> Self {
        if self.is_none() {
            return Self::NONE;
        }
        // Cross with whichever axis is furthest from parallel.
        let axis = if self.x.abs() < 0.9 {
            Self::LEFT
        } else {
            Self::UP
        };
        self.cross(axis)
    }

    /// The component of this direction orthogonal to `other`, renormalized.
    ///
    /// `NONE` when the two are parallel.
    #[must_use]
    pub fn orthogonalized_against(self, other: Self) -> Self {
        self.to_vect(1.0).orthogonalized_against(other).direction()
    }

    /// Mirror image in `plane`; `None` when this direction lies in the plane.
    #[must_use]
    pub fn reflected_by(self, plane: &Plane) -> Option<Self> {
        plane.reflection_of_direction(self)
    }

    #[must_use]
    pub fn rotated_by(self, rotation: Rotation) -> Self {
        rotation.rotate_direction(self)
    }

    /// Spherical interpolation; `t` outside `[0, 1]` keeps rotating past the ends.
    ///
    /// Falls back to a normalized linear blend when either end is `NONE`.
    #[must_use]
    pub fn interpolate(start: Self, end: Self, t: f64) -> Self {
        if start.is_none() || end.is_none() {
            return Vect::interpolate(start.to_vect(1.0), end.to_vect(1.0), t).direction();
        }
        Rotation::from_start_and_end_direction(start, end)
            .scaled_by(t)
            .rotate_direction(start)
    }

    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        self.to_vect(1.0).approx_eq(other.to_vect(1.0), tolerance)
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_unit(-self.x, -self.y, -self.z)
    }
}

impl From<Direction> for Vector3 {
    fn from(d: Direction) -> Self {
        d.to_vector3()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_triple(f, self.x, self.y, self.z)
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, z] = parse_triple(s)?;
        Ok(Self::from_prenormalized(x, y, z))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn constructors_normalize() {
        let d = Direction::new(0.0, 10.0, 0.0);
        assert_eq!(d, Direction::UP);
        let diagonal = Direction::new(1.0, 1.0, 0.0);
        assert_relative_eq!(diagonal.to_vector3().norm(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn zero_input_is_none() {
        assert!(Direction::new(0.0, 0.0, 0.0).is_none());
        assert!(Direction::new(1e-14, 0.0, 0.0).is_none());
        assert!(Direction::new(f64::NAN, 0.0, 0.0).is_none());
    }

    #[test]
    fn cardinal_conventions() {
        assert_eq!(Direction::FORWARD.reversed(), Direction::BACKWARD);
        assert_eq!(Direction::UP.reversed(), Direction::DOWN);
        assert_eq!(Direction::LEFT.reversed(), Direction::RIGHT);
        assert_eq!(Direction::LEFT.cross(Direction::UP), Direction::FORWARD);
    }

    #[test]
    fn angles() {
        assert_relative_eq!(Direction::UP.angle_to(Direction::LEFT), FRAC_PI_2);
        assert_relative_eq!(Direction::UP.angle_to(Direction::DOWN), PI);
        assert_relative_eq!(Direction::UP.angle_to(Direction::NONE), 0.0);
    }

    #[test]
    fn parallel_and_orthogonal() {
        assert!(Direction::UP.is_parallel_to(Direction::DOWN));
        assert!(!Direction::UP.is_parallel_to(Direction::LEFT));
        assert!(!Direction::UP.is_parallel_to(Direction::NONE));
        assert!(Direction::UP.is_orthogonal_to(Direction::FORWARD));
        let nearly_up = Direction::new(0.0001, 1.0, 0.0);
        assert!(nearly_up.is_approximately_parallel_to(Direction::UP, 0.001));
        assert!(!nearly_up.is_parallel_to(Direction::UP));
        assert!(nearly_up.is_approximately_orthogonal_to(Direction::LEFT, 0.001));
    }

    #[test]
    fn any_orthogonal_is_orthogonal() {
        for d in Direction::CARDINALS
            .into_iter()
            .chain([Direction::new(1.0, 2.0, 3.0)])
        {
            let o = d.any_orthogonal();
            assert!(!o.is_none());
            assert!(o.dot(d).abs() < 1e-12, "{o} not orthogonal to {d}");
        }
    }

    #[test]
    fn orthogonalization() {
        let d = Direction::new(1.0, 1.0, 0.0).orthogonalized_against(Direction::UP);
        assert!(d.approx_eq(Direction::LEFT, 1e-12));
        assert!(Direction::UP
            .orthogonalized_against(Direction::DOWN)
            .is_none());
    }

    #[test]
    fn interpolation_endpoints_and_midpoint() {
        let a = Direction::UP;
        let b = Direction::LEFT;
        assert!(Direction::interpolate(a, b, 0.0).approx_eq(a, 1e-12));
        assert!(Direction::interpolate(a, b, 1.0).approx_eq(b, 1e-12));
        let mid = Direction::interpolate(a, b, 0.5);
        assert!(mid.approx_eq(Direction::new(1.0, 1.0, 0.0), 1e-12));
    }

    #[test]
    fn interpolation_extrapolates_past_the_end() {
        let beyond = Direction::interpolate(Direction::UP, Direction::LEFT, 2.0);
        assert!(beyond.approx_eq(Direction::DOWN, 1e-9), "got {beyond}");
    }

    #[test]
    fn interpolation_between_opposites_stays_unit() {
        let mid = Direction::interpolate(Direction::UP, Direction::DOWN, 0.5);
        assert_relative_eq!(mid.to_vector3().norm(), 1.0, epsilon = 1e-12);
        assert!(mid.dot(Direction::UP).abs() < 1e-9, "got {mid}");
    }

    #[test]
    fn display_round_trips() {
        let d = Direction::new(1.0, -2.0, 3.0);
        let parsed: Direction = d.to_string().parse().unwrap();
        assert_eq!(parsed, d);
    }
}
