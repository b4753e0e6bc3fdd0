use std::f64::consts::PI;
use std::fmt;
use std::ops::Mul;

use nalgebra::{Quaternion, Unit};

use super::format::write_number;
use super::{Direction, Location, UnitQuaternion, Vect, TOLERANCE};

/// A rotation in 3D space, backed by a unit quaternion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    w: f64,
    i: f64,
    j: f64,
    k: f64,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::NONE
    }
}

impl Rotation {
    /// The identity rotation.
    pub const NONE: Self = Self {
        w: 1.0,
        i: 0.0,
        j: 0.0,
        k: 0.0,
    };

    #[must_use]
    pub fn from_unit_quaternion(q: UnitQuaternion) -> Self {
        Self {
            w: q.w,
            i: q.i,
            j: q.j,
            k: q.k,
        }
    }

    #[must_use]
    pub fn to_unit_quaternion(self) -> UnitQuaternion {
        Unit::new_unchecked(Quaternion::new(self.w, self.i, self.j, self.k))
    }

    /// Right-handed rotation of `angle` radians about `axis`.
    ///
    /// A `NONE` axis yields the identity.
    #[must_use]
    pub fn from_angle_around_axis(angle: f64, axis: Direction) -> Self {
        if axis.is_none() {
            return Self::NONE;
        }
        let axis = Unit::new_unchecked(axis.to_vector3());
        Self::from_unit_quaternion(UnitQuaternion::from_axis_angle(&axis, angle))
    }

    /// The shortest rotation taking `start` onto `end`.
    ///
    /// Opposite directions have no unique shortest arc; a half turn about
    /// `start.any_orthogonal()` is used. Either side `NONE` yields the identity.
    #[must_use]
    pub fn from_start_and_end_direction(start: Direction, end: Direction) -> Self {
        if start.is_none() || end.is_none() {
            return Self::NONE;
        }
        let a = start.to_vector3();
        let b = end.to_vector3();
        let cos = a.dot(&b).clamp(-1.0, 1.0);
        match Unit::try_new(a.cross(&b), TOLERANCE) {
            Some(axis) => {
                Self::from_unit_quaternion(UnitQuaternion::from_axis_angle(&axis, cos.acos()))
            }
            None if cos > 0.0 => Self::NONE,
            None => {
                tracing::trace!(%start, %end, "opposite directions, rotating about an arbitrary orthogonal axis");
                Self::from_angle_around_axis(PI, start.any_orthogonal())
            }
        }
    }

    /// Rotation angle in radians, in `[0, PI]`.
    #[must_use]
    pub fn angle(self) -> f64 {
        self.to_unit_quaternion().angle()
    }

    /// Rotation axis, or `NONE` for the identity.
    #[must_use]
    pub fn axis(self) -> Direction {
        self.to_unit_quaternion()
            .axis()
            .map_or(Direction::NONE, |axis| Direction::from_vector3(axis.into_inner()))
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        Self::from_unit_quaternion(self.to_unit_quaternion().inverse())
    }

    /// This rotation then `next`.
    #[must_use]
    pub fn followed_by(self, next: Self) -> Self {
        Self::from_unit_quaternion(next.to_unit_quaternion() * self.to_unit_quaternion())
    }

    /// The same axis with the angle multiplied by `factor`. Negative factors and
    /// factors above one are allowed.
    #[must_use]
    pub fn scaled_by(self, factor: f64) -> Self {
        match self.to_unit_quaternion().axis_angle() {
            Some((axis, angle)) => {
                Self::from_unit_quaternion(UnitQuaternion::from_axis_angle(&axis, angle * factor))
            }
            None => Self::NONE,
        }
    }

    #[must_use]
    pub fn rotate_vect(self, vect: Vect) -> Vect {
        Vect::from_vector3(self.to_unit_quaternion() * vect.to_vector3())
    }

    /// Rotated direction; `NONE` stays `NONE`.
    #[must_use]
    pub fn rotate_direction(self, direction: Direction) -> Direction {
        if direction.is_none() {
            return Direction::NONE;
        }
        Direction::from_vector3(self.to_unit_quaternion() * direction.to_vector3())
    }

    /// Rotates `location` about the origin.
    #[must_use]
    pub fn rotate_location(self, location: Location) -> Location {
        Location::from_vect(self.rotate_vect(location.as_vect()))
    }

    /// Angle in radians of the rotation taking `self` onto `other`.
    #[must_use]
    pub fn angle_to(self, other: Self) -> f64 {
        self.to_unit_quaternion().angle_to(&other.to_unit_quaternion())
    }

    /// Interpolates from `start` to `end`; `t` outside `[0, 1]` extrapolates.
    #[must_use]
    pub fn interpolate(start: Self, end: Self, t: f64) -> Self {
        let delta = start.reversed().followed_by(end);
        start.followed_by(delta.scaled_by(t))
    }

    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance_radians: f64) -> bool {
        self.angle_to(other) <= tolerance_radians
    }
}

impl Mul<Vect> for Rotation {
    type Output = Vect;

    fn mul(self, rhs: Vect) -> Vect {
        self.rotate_vect(rhs)
    }
}

impl Mul<Direction> for Rotation {
    type Output = Direction;

    fn mul(self, rhs: Direction) -> Direction {
        self.rotate_direction(rhs)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_number(f, self.angle().to_degrees())?;
        write!(f, "° around ")?;
        fmt::Display::fmt(&self.axis(), f)
    }
}
