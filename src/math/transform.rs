use std::fmt;

use super::format::write_named;
use super::{Direction, Location, Matrix4, Rotation, Vect};

/// Scaling, then rotation about the origin, then translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vect,
    pub rotation: Rotation,
    pub scaling: Vect,
}

impl Default for Transform {
    fn default() -> Self {
        Self::NONE
    }
}

impl Transform {
    /// The identity transform.
    pub const NONE: Self = Self {
        translation: Vect::ZERO,
        rotation: Rotation::NONE,
        scaling: Vect::ONE,
    };

    #[must_use]
    pub const fn new(translation: Vect, rotation: Rotation, scaling: Vect) -> Self {
        Self {
            translation,
            rotation,
            scaling,
        }
    }

    #[must_use]
    pub const fn from_translation(translation: Vect) -> Self {
        Self::new(translation, Rotation::NONE, Vect::ONE)
    }

    #[must_use]
    pub const fn from_rotation(rotation: Rotation) -> Self {
        Self::new(Vect::ZERO, rotation, Vect::ONE)
    }

    #[must_use]
    pub const fn from_scaling(scaling: Vect) -> Self {
        Self::new(Vect::ZERO, Rotation::NONE, scaling)
    }

    #[must_use]
    pub const fn with_translation(self, translation: Vect) -> Self {
        Self::new(translation, self.rotation, self.scaling)
    }

    #[must_use]
    pub const fn with_rotation(self, rotation: Rotation) -> Self {
        Self::new(self.translation, rotation, self.scaling)
    }

    #[must_use]
    pub const fn with_scaling(self, scaling: Vect) -> Self {
        Self::new(self.translation, self.rotation, scaling)
    }

    #[must_use]
    pub fn with_additional_translation(self, translation: Vect) -> Self {
        self.with_translation(self.translation + translation)
    }

    #[must_use]
    pub fn with_additional_rotation(self, rotation: Rotation) -> Self {
        self.with_rotation(self.rotation.followed_by(rotation))
    }

    #[must_use]
    pub fn with_additional_scaling(self, scaling: Vect) -> Self {
        self.with_scaling(self.scaling.scaled_by_vect(scaling))
    }

    /// Homogeneous matrix equivalent to [`transform_location`](Self::transform_location).
    #[must_use]
    pub fn to_matrix(self) -> Matrix4 {
        Matrix4::new_translation(&self.translation.to_vector3())
            * self.rotation.to_unit_quaternion().to_homogeneous()
            * Matrix4::new_nonuniform_scaling(&self.scaling.to_vector3())
    }

    #[must_use]
    pub fn transform_location(self, location: Location) -> Location {
        Location::from_vect(self.transform_vect(location.as_vect())) + self.translation
    }

    /// Scales and rotates `vect`; translation does not apply to displacements.
    #[must_use]
    pub fn transform_vect(self, vect: Vect) -> Vect {
        self.rotation.rotate_vect(vect.scaled_by_vect(self.scaling))
    }

    #[must_use]
    pub fn transform_direction(self, direction: Direction) -> Direction {
        self.transform_vect(direction.to_vect(1.0)).direction()
    }

    /// Component-wise interpolation; `t` outside `[0, 1]` extrapolates.
    #[must_use]
    pub fn interpolate(start: Self, end: Self, t: f64) -> Self {
        Self::new(
            Vect::interpolate(start.translation, end.translation, t),
            Rotation::interpolate(start.rotation, end.rotation, t),
            Vect::interpolate(start.scaling, end.scaling, t),
        )
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_named(f, "Transform", &[
            ("Translation", &self.translation),
            ("Rotation", &self.rotation),
            ("Scaling", &self.scaling),
        ])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn identity_changes_nothing() {
        let p = Location::new(1.0, -2.0, 3.0);
        assert_eq!(Transform::NONE.transform_location(p), p);
        assert_eq!(Transform::default(), Transform::NONE);
    }

    #[test]
    fn scale_then_rotate_then_translate() {
        let transform = Transform::new(
            Vect::new(0.0, 0.0, 10.0),
            Rotation::from_angle_around_axis(FRAC_PI_2, Direction::UP),
            Vect::new(2.0, 1.0, 1.0),
        );
        // <0,0,1> scales to itself, rotates to <1,0,0>, then moves to <1,0,10>.
        let moved = transform.transform_location(Location::new(0.0, 0.0, 1.0));
        assert!(moved.approx_eq(Location::new(1.0, 0.0, 10.0), 1e-12), "got {moved}");
        // <1,0,0> scales to <2,0,0>, rotates to <0,0,-2>, then moves to <0,0,8>.
        let moved = transform.transform_location(Location::new(1.0, 0.0, 0.0));
        assert!(moved.approx_eq(Location::new(0.0, 0.0, 8.0), 1e-12), "got {moved}");
    }

    #[test]
    fn vects_ignore_translation() {
        let transform = Transform::from_translation(Vect::new(5.0, 5.0, 5.0));
        let v = Vect::new(1.0, 2.0, 3.0);
        assert_eq!(transform.transform_vect(v), v);
    }

    #[test]
    fn matrix_agrees_with_direct_application() {
        let transform = Transform::new(
            Vect::new(1.0, 2.0, 3.0),
            Rotation::from_angle_around_axis(0.7, Direction::new(1.0, 1.0, 0.0)),
            Vect::new(2.0, 3.0, 0.5),
        );
        let p = Location::new(-1.0, 0.5, 4.0);
        let direct = transform.transform_location(p);
        let via_matrix = transform.to_matrix().transform_point(&p.to_point3());
        let via_matrix = Location::from_point3(via_matrix);
        assert!(direct.approx_eq(via_matrix, 1e-12), "{direct} != {via_matrix}");
    }

    #[test]
    fn interpolation_blends_each_component() {
        let start = Transform::NONE;
        let end = Transform::from_translation(Vect::new(10.0, 0.0, 0.0))
            .with_scaling(Vect::new(3.0, 3.0, 3.0));
        let mid = Transform::interpolate(start, end, 0.5);
        assert_eq!(mid.translation, Vect::new(5.0, 0.0, 0.0));
        assert_eq!(mid.scaling, Vect::new(2.0, 2.0, 2.0));
    }
}
