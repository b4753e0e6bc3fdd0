use crate::geometry::{Line, LineLike, Plane};

use super::{Location, COPLANARITY_TOLERANCE, TOLERANCE};

/// A pair of signed distances, one along each of two line-likes, measured from
/// their start points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineDistances {
    /// Distance along the first (`this`) line-like.
    pub this: f64,
    /// Distance along the second (`other`) line-like.
    pub other: f64,
}

impl LineDistances {
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            this: self.other,
            other: self.this,
        }
    }
}

/// Distances along the infinite extensions of `this` and `other` to the point
/// where they cross.
///
/// Bounds are ignored. Returns `None` when the lines are parallel (including
/// coincident), when either direction is `NONE`, or when the lines are skew.
/// Swapping the arguments swaps the result exactly.
#[must_use]
pub fn unbounded_intersection_distances<A: LineLike, B: LineLike>(
    this: &A,
    other: &B,
) -> Option<LineDistances> {
    let d1 = this.direction().to_vector3();
    let d2 = other.direction().to_vector3();

    let n = d1.cross(&d2);
    let n_len = n.norm();
    if n_len < TOLERANCE {
        return None;
    }

    let w = (other.start_point() - this.start_point()).to_vector3();

    // Separation of the two infinite lines along their common normal.
    let separation = w.dot(&n) / n_len;
    if separation.abs() > COPLANARITY_TOLERANCE * w.norm().max(1.0) {
        return None;
    }

    let n_len_sq = n_len * n_len;
    Some(LineDistances {
        this: w.cross(&d2).dot(&n) / n_len_sq,
        other: w.cross(&d1).dot(&n) / n_len_sq,
    })
}

/// Distance along the infinite extension of `this` to where it crosses `other`.
#[must_use]
pub fn unbounded_intersection_distance_on_this_line<A: LineLike, B: LineLike>(
    this: &A,
    other: &B,
) -> Option<f64> {
    unbounded_intersection_distances(this, other).map(|d| d.this)
}

/// Crossing point of two line-likes, accepted only when both distances fall
/// inside their line-like's bounds (widened by `tolerance`).
#[must_use]
pub fn bounded_intersection<A: LineLike, B: LineLike>(
    this: &A,
    other: &B,
    tolerance: f64,
) -> Option<Location> {
    let distances = unbounded_intersection_distances(this, other)?;
    if this.distance_is_within_bounds_with_tolerance(distances.this, tolerance)
        && other.distance_is_within_bounds_with_tolerance(distances.other, tolerance)
    {
        Some(this.unbounded_location_at_distance(distances.this))
    } else {
        None
    }
}

/// Distances along `this` and `other` (both within bounds) to their pair of
/// mutually closest points.
#[must_use]
pub fn closest_approach_distances<A: LineLike, B: LineLike>(this: &A, other: &B) -> LineDistances {
    let this_start = this.start_point();
    let other_start = other.start_point();

    if this.direction().is_none() {
        let other_distance =
            other.bind_distance(other.unbounded_distance_at_point_closest_to(this_start));
        return LineDistances {
            this: 0.0,
            other: other_distance,
        };
    }
    if other.direction().is_none() {
        let this_distance =
            this.bind_distance(this.unbounded_distance_at_point_closest_to(other_start));
        return LineDistances {
            this: this_distance,
            other: 0.0,
        };
    }

    let d1 = this.direction().to_vector3();
    let d2 = other.direction().to_vector3();
    let r = (this_start - other_start).to_vector3();

    let b = d1.dot(&d2);
    let c = d1.dot(&r);
    let f = d2.dot(&r);

    // Same parallel cut-off as `unbounded_intersection_distances`.
    let n = d1.cross(&d2);
    let n_len_sq = n.norm_squared();
    if n_len_sq < TOLERANCE * TOLERANCE {
        return parallel_closest_approach_distances(this, other, c, b);
    }

    let (lo1, hi1) = this.distance_bounds();
    let (lo2, hi2) = other.distance_bounds();

    // Unconstrained solution in cross-product form, which keeps its precision
    // for nearly parallel directions. Then clamp each parameter in turn,
    // re-projecting onto the other line-like after every clamp.
    let w = -r;
    let free1 = w.cross(&d2).dot(&n) / n_len_sq;
    let free2 = w.cross(&d1).dot(&n) / n_len_sq;
    let mut t1 = free1.clamp(lo1, hi1);
    let mut t2 = if (lo1..=hi1).contains(&free1) {
        free2
    } else {
        b * t1 + f
    };
    if t2 < lo2 {
        t2 = lo2;
        t1 = (b * t2 - c).clamp(lo1, hi1);
    } else if t2 > hi2 {
        t2 = hi2;
        t1 = (b * t2 - c).clamp(lo1, hi1);
    }

    LineDistances { this: t1, other: t2 }
}

/// Closest approach when the two directions are (anti-)parallel: the bounds of
/// `other` are mapped onto the parameter axis of `this` and overlapped.
fn parallel_closest_approach_distances<A: LineLike, B: LineLike>(
    this: &A,
    other: &B,
    c: f64,
    b: f64,
) -> LineDistances {
    let (lo1, hi1) = this.distance_bounds();
    let (lo2, hi2) = other.distance_bounds();

    // `other`'s start sits at distance `-c` along `this`.
    let other_start_on_this = -c;
    let mapped_a = other_start_on_this + lo2 * b.signum();
    let mapped_b = other_start_on_this + hi2 * b.signum();
    let (mapped_lo, mapped_hi) = (mapped_a.min(mapped_b), mapped_a.max(mapped_b));

    let overlap_lo = mapped_lo.max(lo1);
    let overlap_hi = mapped_hi.min(hi1);
    let this_distance = if overlap_lo <= overlap_hi {
        other_start_on_this.clamp(overlap_lo, overlap_hi)
    } else if mapped_hi < lo1 {
        lo1
    } else {
        hi1
    };

    let on_this = this.unbounded_location_at_distance(this_distance);
    let other_distance = other.bind_distance(other.unbounded_distance_at_point_closest_to(on_this));
    LineDistances {
        this: this_distance,
        other: other_distance,
    }
}

/// Distance along the infinite extension of `line` to where it crosses `plane`.
///
/// `None` when the line runs parallel to the plane or has no direction.
#[must_use]
pub fn unbounded_plane_intersection_distance<L: LineLike>(line: &L, plane: &Plane) -> Option<f64> {
    let similarity = plane.normal().dot(line.direction());
    if similarity.abs() < TOLERANCE {
        return None;
    }
    Some(-plane.signed_distance_to_location(line.start_point()) / similarity)
}

/// Relationship between two planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlanePairRelation {
    /// Planes intersect along a line.
    IntersectionLine(Line),
    /// Planes are parallel but not coincident.
    Parallel { distance: f64 },
    /// Planes are the same (coincident).
    Coincident,
}

/// Computes the intersection of two planes.
#[must_use]
pub fn plane_plane_intersect(a: &Plane, b: &Plane) -> PlanePairRelation {
    let na = a.normal().to_vector3();
    let nb = b.normal().to_vector3();

    let dir = na.cross(&nb);
    let dir_len = dir.norm();

    if dir_len < TOLERANCE {
        let distance = b.signed_distance_to_location(a.point_closest_to_origin()).abs();
        return if distance < TOLERANCE {
            PlanePairRelation::Coincident
        } else {
            PlanePairRelation::Parallel { distance }
        };
    }

    // p = oa + s * na + t * nb lies on both planes.
    let oa = a.point_closest_to_origin();
    let d2 = nb.dot(&(b.point_closest_to_origin() - oa).to_vector3());
    let dot_nn = na.dot(&nb);
    let denom = 1.0 - dot_nn * dot_nn;
    let s = -dot_nn * d2 / denom;
    let t = d2 / denom;
    let origin = oa + a.normal().to_vect(s) + b.normal().to_vect(t);

    PlanePairRelation::IntersectionLine(Line::new(
        origin,
        crate::math::Direction::from_vector3(dir / dir_len),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{BoundedRay, Ray};
    use crate::math::{Direction, Vect};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Location {
        Location::new(x, y, z)
    }

    fn line(start: Location, direction: Direction) -> Line {
        Line::new(start, direction)
    }

    fn assert_distances(actual: Option<LineDistances>, this: f64, other: f64) {
        let actual = actual.unwrap();
        assert_relative_eq!(actual.this, this, epsilon = 1e-9);
        assert_relative_eq!(actual.other, other, epsilon = 1e-9);
    }

    // ── unbounded_intersection_distances ──

    #[test]
    fn perpendicular_lines_through_origin() {
        let a = line(p(0.0, 0.0, 0.0), Direction::UP);
        let b = line(p(0.0, 0.0, 0.0), Direction::RIGHT);
        assert_distances(unbounded_intersection_distances(&a, &b), 0.0, 0.0);
    }

    #[test]
    fn perpendicular_lines_offset_from_origin() {
        let a = line(p(0.0, -10.0, 0.0), Direction::UP);
        let b = line(p(-10.0, 0.0, 0.0), Direction::RIGHT);
        assert_distances(unbounded_intersection_distances(&a, &b), 10.0, -10.0);
    }

    #[test]
    fn crossing_lines_report_signed_distances() {
        let a = line(p(0.0, 10.0, 0.0), Direction::UP);
        let b = line(p(10.0, 0.0, 0.0), Direction::RIGHT);
        assert_distances(unbounded_intersection_distances(&a, &b), -10.0, 10.0);
    }

    #[test]
    fn diagonal_lines() {
        let a = line(p(1.0, 1.0, 0.0), Direction::new(-1.0, -1.0, 0.0));
        let b = line(p(-1.0, 1.0, 0.0), Direction::new(1.0, -1.0, 0.0));
        let root2 = 2.0_f64.sqrt();
        assert_distances(unbounded_intersection_distances(&a, &b), root2, root2);

        let a = line(p(4.0, 4.0, 0.0), Direction::new(-1.0, -1.0, 0.0));
        let b = line(p(2.0, -2.0, 0.0), Direction::new(1.0, -1.0, 0.0));
        assert_distances(
            unbounded_intersection_distances(&a, &b),
            32.0_f64.sqrt(),
            -(8.0_f64.sqrt()),
        );
    }

    #[test]
    fn swapping_arguments_swaps_distances_exactly() {
        let a = line(p(4.0, 4.0, 0.0), Direction::new(-1.0, -1.0, 0.0));
        let b = line(p(2.0, -2.0, 0.0), Direction::new(1.0, -1.0, 0.0));
        let ab = unbounded_intersection_distances(&a, &b).unwrap();
        let ba = unbounded_intersection_distances(&b, &a).unwrap();
        assert_eq!(ab, ba.swapped());
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let a = line(p(0.0, 0.0, 0.0), Direction::RIGHT);
        let b = line(p(0.0, 1.0, 0.0), Direction::LEFT);
        assert!(unbounded_intersection_distances(&a, &b).is_none());

        let a = line(p(1.0, 1.0, 1.0), Direction::new(1.0, 1.0, 1.0));
        let b = line(p(1.0, 3.0, 1.0), Direction::new(-1.0, -1.0, -1.0));
        assert!(unbounded_intersection_distances(&a, &b).is_none());
    }

    #[test]
    fn coincident_lines_do_not_intersect() {
        let a = line(p(0.0, 0.0, 0.0), Direction::RIGHT);
        let b = line(p(5.0, 0.0, 0.0), Direction::LEFT);
        assert!(unbounded_intersection_distances(&a, &b).is_none());
    }

    #[test]
    fn skew_lines_do_not_intersect() {
        let a = line(p(0.0, 0.0, 0.0), Direction::UP);
        let b = line(p(0.0, 0.0, 1.0), Direction::LEFT);
        assert!(unbounded_intersection_distances(&a, &b).is_none());
    }

    #[test]
    fn ignores_bounds() {
        let a = Ray::new(p(0.0, 10.0, 0.0), Direction::UP);
        let b = Ray::new(p(10.0, 0.0, 0.0), Direction::RIGHT);
        assert_relative_eq!(
            unbounded_intersection_distance_on_this_line(&a, &b).unwrap(),
            -10.0
        );
        assert!(bounded_intersection(&a, &b, 0.0).is_none());
    }

    // ── bounded_intersection ──

    #[test]
    fn bounded_rays_intersect_within_their_lengths() {
        let a = BoundedRay::new(p(-1.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = BoundedRay::new(p(0.0, -1.0, 0.0), p(0.0, 1.0, 0.0));
        let hit = bounded_intersection(&a, &b, 0.0).unwrap();
        assert!(hit.approx_eq(p(0.0, 0.0, 0.0), 1e-12));

        let short = BoundedRay::new(p(0.0, -1.0, 0.0), p(0.0, -0.5, 0.0));
        assert!(bounded_intersection(&a, &short, 0.0).is_none());
        assert!(bounded_intersection(&a, &short, 0.6).is_some());
    }

    // ── closest_approach_distances ──

    #[test]
    fn closest_approach_between_skew_lines() {
        let a = line(p(0.0, 0.0, 0.0), Direction::UP);
        let b = line(p(3.0, 5.0, 1.0), Direction::LEFT);
        let d = closest_approach_distances(&a, &b);
        assert_relative_eq!(d.this, 5.0, epsilon = 1e-12);
        assert_relative_eq!(d.other, -3.0, epsilon = 1e-12);
    }

    #[test]
    fn closest_approach_clamps_to_segment_ends() {
        let a = BoundedRay::new(p(0.0, 0.0, 0.0), p(0.0, 2.0, 0.0));
        let b = line(p(0.0, 5.0, 1.0), Direction::LEFT);
        let d = closest_approach_distances(&a, &b);
        assert_relative_eq!(d.this, 2.0, epsilon = 1e-12);
        assert_relative_eq!(d.other, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn closest_approach_clamps_ray_start() {
        let a = Ray::new(p(0.0, 0.0, 0.0), Direction::UP);
        let b = Ray::new(p(3.0, -5.0, 0.0), Direction::RIGHT);
        let d = closest_approach_distances(&a, &b);
        assert_relative_eq!(d.this, 0.0, epsilon = 1e-12);
        assert_relative_eq!(d.other, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn closest_approach_parallel_line_picks_other_start() {
        let a = line(p(0.0, 0.0, 0.0), Direction::UP);
        let b = Ray::new(p(1.0, 7.0, 0.0), Direction::UP);
        let d = closest_approach_distances(&a, &b);
        assert_relative_eq!(d.this, 7.0, epsilon = 1e-12);
        assert_relative_eq!(d.other, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn closest_approach_parallel_disjoint_segments() {
        let a = BoundedRay::new(p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        let b = BoundedRay::new(p(1.0, 5.0, 0.0), p(1.0, 3.0, 0.0));
        let d = closest_approach_distances(&a, &b);
        assert_relative_eq!(d.this, 1.0, epsilon = 1e-12);
        assert_relative_eq!(d.other, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn closest_approach_of_nearly_parallel_lines_finds_distant_crossing() {
        let a = line(p(0.0, 0.0, 0.0), Direction::LEFT);
        let b = line(p(1e5, 0.5, 0.0), Direction::new(-1e5, -0.5, 0.0));
        assert!(unbounded_intersection_distances(&a, &b).is_some());

        let d = closest_approach_distances(&a, &b);
        assert!(d.this.abs() < 1e-6);
        assert_relative_eq!(d.other, (1e10_f64 + 0.25).sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn closest_approach_with_zero_length_segment() {
        let a = BoundedRay::from_start_point_and_vect(p(2.0, 1.0, 0.0), Vect::ZERO);
        let b = line(p(0.0, 0.0, 0.0), Direction::UP);
        let d = closest_approach_distances(&a, &b);
        assert_relative_eq!(d.this, 0.0);
        assert_relative_eq!(d.other, 1.0, epsilon = 1e-12);
    }

    // ── planes ──

    #[test]
    fn line_crosses_plane() {
        let plane = Plane::new(Direction::UP, p(0.0, 5.0, 0.0));
        let l = line(p(1.0, 0.0, 1.0), Direction::UP);
        assert_relative_eq!(
            unbounded_plane_intersection_distance(&l, &plane).unwrap(),
            5.0,
            epsilon = 1e-12
        );
        let l = line(p(1.0, 0.0, 1.0), Direction::DOWN);
        assert_relative_eq!(
            unbounded_plane_intersection_distance(&l, &plane).unwrap(),
            -5.0,
            epsilon = 1e-12
        );
        let parallel = line(p(1.0, 0.0, 1.0), Direction::LEFT);
        assert!(unbounded_plane_intersection_distance(&parallel, &plane).is_none());
    }

    #[test]
    fn perpendicular_planes_intersect() {
        let xz = Plane::new(Direction::UP, p(0.0, 0.0, 0.0));
        let xy = Plane::new(Direction::FORWARD, p(0.0, 0.0, 0.0));
        match plane_plane_intersect(&xz, &xy) {
            PlanePairRelation::IntersectionLine(l) => {
                assert!(l.direction().is_parallel_to(Direction::LEFT));
            }
            other => panic!("expected IntersectionLine, got {other:?}"),
        }
    }

    #[test]
    fn intersection_line_lies_on_both_planes() {
        let a = Plane::new(Direction::LEFT, p(1.0, 0.0, 0.0));
        let b = Plane::new(Direction::new(0.0, 1.0, 1.0), p(0.0, 2.0, 0.0));
        match plane_plane_intersect(&a, &b) {
            PlanePairRelation::IntersectionLine(l) => {
                for distance in [-3.0, 0.0, 4.0] {
                    let on_line = l.unbounded_location_at_distance(distance);
                    assert!(a.signed_distance_to_location(on_line).abs() < 1e-9);
                    assert!(b.signed_distance_to_location(on_line).abs() < 1e-9);
                }
            }
            other => panic!("expected IntersectionLine, got {other:?}"),
        }
    }

    #[test]
    fn parallel_and_coincident_planes() {
        let a = Plane::new(Direction::UP, p(0.0, 0.0, 0.0));
        let b = Plane::new(Direction::DOWN, p(0.0, 3.0, 0.0));
        match plane_plane_intersect(&a, &b) {
            PlanePairRelation::Parallel { distance } => assert_relative_eq!(distance, 3.0),
            other => panic!("expected Parallel, got {other:?}"),
        }
        let c = Plane::new(Direction::DOWN, p(4.0, 0.0, 1.0));
        assert_eq!(plane_plane_intersect(&a, &c), PlanePairRelation::Coincident);
    }
}
