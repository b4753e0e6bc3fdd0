//! Random values for building test data.
//!
//! Ranges are half-open: each component lands in `[min, max)`.

use rand::Rng;

use crate::geometry::{
    BoundedRay, Cuboid, Line, LineLike, OriginCuboid, OriginSphere, Plane, Ray, Sphere,
};

use super::{Direction, Location, Vect};

/// A value drawn between two bounds of the same type.
pub trait RandomIn: Sized {
    fn random_in<R: Rng + ?Sized>(min: &Self, max: &Self, rng: &mut R) -> Self;
}

/// Random f64 in `[min, max)`. Equal bounds give `min`.
pub fn random_f64_range<R: Rng + ?Sized>(min: f64, max: f64, rng: &mut R) -> f64 {
    min + (max - min) * rng.gen::<f64>()
}

impl RandomIn for f64 {
    fn random_in<R: Rng + ?Sized>(min: &Self, max: &Self, rng: &mut R) -> Self {
        random_f64_range(*min, *max, rng)
    }
}

impl RandomIn for Vect {
    fn random_in<R: Rng + ?Sized>(min: &Self, max: &Self, rng: &mut R) -> Self {
        Self::new(
            random_f64_range(min.x, max.x, rng),
            random_f64_range(min.y, max.y, rng),
            random_f64_range(min.z, max.z, rng),
        )
    }
}

impl RandomIn for Location {
    fn random_in<R: Rng + ?Sized>(min: &Self, max: &Self, rng: &mut R) -> Self {
        Self::from_vect(Vect::random_in(&min.as_vect(), &max.as_vect(), rng))
    }
}

/// A direction somewhere along the arc from `min` to `max`.
impl RandomIn for Direction {
    fn random_in<R: Rng + ?Sized>(min: &Self, max: &Self, rng: &mut R) -> Self {
        Self::interpolate(*min, *max, rng.gen::<f64>())
    }
}

impl Direction {
    /// A direction uniformly distributed over the unit sphere.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let z = random_f64_range(-1.0, 1.0, rng);
        let azimuth = random_f64_range(0.0, std::f64::consts::TAU, rng);
        let ring = (1.0 - z * z).max(0.0).sqrt();
        Self::from_prenormalized(ring * azimuth.cos(), ring * azimuth.sin(), z)
    }
}

impl RandomIn for Line {
    fn random_in<R: Rng + ?Sized>(min: &Self, max: &Self, rng: &mut R) -> Self {
        Self::new(
            Location::random_in(&min.start_point(), &max.start_point(), rng),
            Direction::random_in(&min.direction(), &max.direction(), rng),
        )
    }
}

impl RandomIn for Ray {
    fn random_in<R: Rng + ?Sized>(min: &Self, max: &Self, rng: &mut R) -> Self {
        Self::new(
            Location::random_in(&min.start_point(), &max.start_point(), rng),
            Direction::random_in(&min.direction(), &max.direction(), rng),
        )
    }
}

impl RandomIn for BoundedRay {
    fn random_in<R: Rng + ?Sized>(min: &Self, max: &Self, rng: &mut R) -> Self {
        Self::new(
            Location::random_in(&min.start_point(), &max.start_point(), rng),
            Location::random_in(&min.end(), &max.end(), rng),
        )
    }
}

impl RandomIn for Plane {
    fn random_in<R: Rng + ?Sized>(min: &Self, max: &Self, rng: &mut R) -> Self {
        Self::new(
            Direction::random_in(&min.normal(), &max.normal(), rng),
            Location::random_in(&min.point_closest_to_origin(), &max.point_closest_to_origin(), rng),
        )
    }
}

impl RandomIn for OriginSphere {
    fn random_in<R: Rng + ?Sized>(min: &Self, max: &Self, rng: &mut R) -> Self {
        Self::new(random_f64_range(min.radius(), max.radius(), rng))
    }
}

impl RandomIn for Sphere {
    fn random_in<R: Rng + ?Sized>(min: &Self, max: &Self, rng: &mut R) -> Self {
        Self::new(
            Location::random_in(&min.center(), &max.center(), rng),
            random_f64_range(min.radius(), max.radius(), rng),
        )
    }
}

impl RandomIn for OriginCuboid {
    fn random_in<R: Rng + ?Sized>(min: &Self, max: &Self, rng: &mut R) -> Self {
        Self::from_half_dimensions(
            random_f64_range(min.half_width(), max.half_width(), rng),
            random_f64_range(min.half_height(), max.half_height(), rng),
            random_f64_range(min.half_depth(), max.half_depth(), rng),
        )
    }
}

impl RandomIn for Cuboid {
    fn random_in<R: Rng + ?Sized>(min: &Self, max: &Self, rng: &mut R) -> Self {
        Self::new(
            Location::random_in(&min.center(), &max.center(), rng),
            OriginCuboid::random_in(&min.as_origin_cuboid(), &max.as_origin_cuboid(), rng),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn components_stay_in_half_open_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let min = Location::new(-1.0, 2.0, 10.0);
        let max = Location::new(1.0, 3.0, 10.0);
        for _ in 0..200 {
            let l = Location::random_in(&min, &max, &mut rng);
            assert!((-1.0..1.0).contains(&l.x));
            assert!((2.0..3.0).contains(&l.y));
            assert_eq!(l.z, 10.0);
        }
    }

    #[test]
    fn random_directions_are_unit_length() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let d = Direction::random(&mut rng);
            assert!((d.to_vect(1.0).length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn shapes_respect_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let small = OriginCuboid::new(1.0, 1.0, 1.0);
        let large = OriginCuboid::new(2.0, 4.0, 8.0);
        for _ in 0..50 {
            let cuboid = OriginCuboid::random_in(&small, &large, &mut rng);
            assert!((1.0..2.0).contains(&cuboid.width()));
            assert!((1.0..8.0).contains(&cuboid.depth()));
            let sphere = OriginSphere::random_in(&OriginSphere::new(1.0), &OriginSphere::new(2.0), &mut rng);
            assert!((1.0..2.0).contains(&sphere.radius()));
        }
    }
}
