use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::ParseError;
use crate::geometry::Plane;

use super::format::{parse_triple, write_triple};
use super::{Direction, Rotation, Vector3, TOLERANCE};

/// A 3D displacement with magnitude and direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vect {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vect {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// `<1, 1, 1>`, the identity scaling.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A vector pointing along `direction` with the given length.
    ///
    /// A `NONE` direction yields the zero vector.
    #[must_use]
    pub fn from_direction_and_length(direction: Direction, length: f64) -> Self {
        direction.to_vect(length)
    }

    #[must_use]
    pub fn from_vector3(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    #[must_use]
    pub fn to_vector3(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Unit direction of this vector, or `Direction::NONE` for the zero vector.
    #[must_use]
    pub fn direction(self) -> Direction {
        Direction::from_vector3(self.to_vector3())
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.length_squared() < TOLERANCE * TOLERANCE
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::from_vector3(self.to_vector3().cross(&other.to_vector3()))
    }

    #[must_use]
    pub fn scaled_by(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Component-wise product.
    #[must_use]
    pub fn scaled_by_vect(self, scale: Self) -> Self {
        Self::new(self.x * scale.x, self.y * scale.y, self.z * scale.z)
    }

    /// Same direction, new length. The zero vector stays zero.
    #[must_use]
    pub fn with_length(self, length: f64) -> Self {
        self.direction().to_vect(length)
    }

    #[must_use]
    pub fn with_max_length(self, max_length: f64) -> Self {
        if self.length_squared() > max_length * max_length {
            self.with_length(max_length)
        } else {
            self
        }
    }

    #[must_use]
    pub fn with_min_length(self, min_length: f64) -> Self {
        if self.length_squared() < min_length * min_length {
            self.with_length(min_length)
        } else {
            self
        }
    }

    #[must_use]
    pub fn lengthened_by(self, amount: f64) -> Self {
        self.with_length(self.length() + amount)
    }

    #[must_use]
    pub fn shortened_by(self, amount: f64) -> Self {
        self.with_length(self.length() - amount)
    }

    /// The component of this vector along `direction`.
    #[must_use]
    pub fn projected_on_to(self, direction: Direction) -> Self {
        let unit = direction.to_vect(1.0);
        unit.scaled_by(self.dot(unit))
    }

    /// The component of this vector orthogonal to `direction`.
    #[must_use]
    pub fn orthogonalized_against(self, direction: Direction) -> Self {
        self - self.projected_on_to(direction)
    }

    /// Mirror image of this vector in `plane`, or `None` when the vector lies
    /// in the plane.
    #[must_use]
    pub fn reflected_by(self, plane: &Plane) -> Option<Self> {
        plane.reflection_of_vect(self)
    }

    #[must_use]
    pub fn rotated_by(self, rotation: Rotation) -> Self {
        rotation.rotate_vect(self)
    }

    #[must_use]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            self.x.clamp(min.x.min(max.x), max.x.max(min.x)),
            self.y.clamp(min.y.min(max.y), max.y.max(min.y)),
            self.z.clamp(min.z.min(max.z), max.z.max(min.z)),
        )
    }

    /// Linear interpolation; `t` outside `[0, 1]` extrapolates.
    #[must_use]
    pub fn interpolate(start: Self, end: Self, t: f64) -> Self {
        start + (end - start).scaled_by(t)
    }

    /// Component-wise comparison within `tolerance`.
    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}

impl Add for Vect {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vect {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vect {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vect {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vect {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vect {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scaled_by(rhs)
    }
}

impl Mul<Vect> for f64 {
    type Output = Vect;

    fn mul(self, rhs: Vect) -> Vect {
        rhs.scaled_by(self)
    }
}

impl Div<f64> for Vect {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<Vector3> for Vect {
    fn from(v: Vector3) -> Self {
        Self::from_vector3(v)
    }
}

impl From<Vect> for Vector3 {
    fn from(v: Vect) -> Self {
        v.to_vector3()
    }
}

impl fmt::Display for Vect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_triple(f, self.x, self.y, self.z)
    }
}

impl FromStr for Vect {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, z] = parse_triple(s)?;
        Ok(Self::new(x, y, z))
    }
}
