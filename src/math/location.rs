use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::error::ParseError;

use super::format::{parse_triple, write_triple};
use super::{Point3, Rotation, Vect};

/// A point in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The location reached by moving `vect` away from the origin.
    #[must_use]
    pub const fn from_vect(vect: Vect) -> Self {
        Self::new(vect.x, vect.y, vect.z)
    }

    #[must_use]
    pub fn from_point3(p: Point3) -> Self {
        Self::new(p.x, p.y, p.z)
    }

    #[must_use]
    pub fn to_point3(self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }

    /// Displacement from the origin to this location.
    #[must_use]
    pub const fn as_vect(self) -> Vect {
        Vect::new(self.x, self.y, self.z)
    }

    /// Displacement from this location to `other`.
    #[must_use]
    pub fn vect_to(self, other: Self) -> Vect {
        other - self
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        self.vect_to(other).length()
    }

    #[must_use]
    pub fn distance_squared_to(self, other: Self) -> f64 {
        self.vect_to(other).length_squared()
    }

    #[must_use]
    pub fn moved_by(self, vect: Vect) -> Self {
        self + vect
    }

    /// Rotates this location about `pivot`.
    #[must_use]
    pub fn rotated_around(self, pivot: Self, rotation: Rotation) -> Self {
        pivot + rotation.rotate_vect(self - pivot)
    }

    #[must_use]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::from_vect(self.as_vect().clamp(min.as_vect(), max.as_vect()))
    }

    /// Linear interpolation; `t` outside `[0, 1]` extrapolates.
    #[must_use]
    pub fn interpolate(start: Self, end: Self, t: f64) -> Self {
        start + (end - start).scaled_by(t)
    }

    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        self.as_vect().approx_eq(other.as_vect(), tolerance)
    }
}

impl Add<Vect> for Location {
    type Output = Self;

    fn add(self, rhs: Vect) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign<Vect> for Location {
    fn add_assign(&mut self, rhs: Vect) {
        *self = *self + rhs;
    }
}

impl Sub<Vect> for Location {
    type Output = Self;

    fn sub(self, rhs: Vect) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign<Vect> for Location {
    fn sub_assign(&mut self, rhs: Vect) {
        *self = *self - rhs;
    }
}

impl Sub for Location {
    type Output = Vect;

    fn sub(self, rhs: Self) -> Vect {
        Vect::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<Point3> for Location {
    fn from(p: Point3) -> Self {
        Self::from_point3(p)
    }
}

impl From<Location> for Point3 {
    fn from(l: Location) -> Self {
        l.to_point3()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_triple(f, self.x, self.y, self.z)
    }
}

impl FromStr for Location {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, z] = parse_triple(s)?;
        Ok(Self::new(x, y, z))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Direction;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Location {
        Location::new(x, y, z)
    }

    #[test]
    fn location_difference_is_a_vect() {
        let a = p(1.0, 2.0, 3.0);
        let b = p(4.0, 6.0, 3.0);
        assert_eq!(b - a, Vect::new(3.0, 4.0, 0.0));
        assert_eq!(a.vect_to(b), Vect::new(3.0, 4.0, 0.0));
        assert_relative_eq!(a.distance_to(b), 5.0);
        assert_relative_eq!(a.distance_squared_to(b), 25.0);
    }

    #[test]
    fn moving_by_a_vect() {
        let a = p(1.0, 2.0, 3.0);
        assert_eq!(a.moved_by(Vect::new(1.0, 1.0, 1.0)), p(2.0, 3.0, 4.0));
        assert_eq!(a - Vect::new(1.0, 2.0, 3.0), Location::ORIGIN);
    }

    #[test]
    fn rotation_about_a_pivot() {
        let rotation = Rotation::from_angle_around_axis(std::f64::consts::FRAC_PI_2, Direction::UP);
        let rotated = p(2.0, 0.0, 1.0).rotated_around(p(1.0, 0.0, 1.0), rotation);
        assert!(rotated.approx_eq(p(1.0, 0.0, 0.0), 1e-9), "got {rotated}");
    }

    #[test]
    fn interpolation_and_clamp() {
        let a = p(0.0, 0.0, 0.0);
        let b = p(2.0, 4.0, 6.0);
        assert_eq!(Location::interpolate(a, b, 0.5), p(1.0, 2.0, 3.0));
        assert_eq!(Location::interpolate(a, b, 2.0), p(4.0, 8.0, 12.0));
        assert_eq!(p(5.0, -1.0, 3.0).clamp(a, b), p(2.0, 0.0, 3.0));
    }

    #[test]
    fn display_round_trips() {
        let a = p(-0.5, 1.0 / 3.0, 100.0);
        assert_eq!(a.to_string().parse::<Location>().unwrap(), a);
    }
}
