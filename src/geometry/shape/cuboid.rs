use std::fmt;
use std::str::FromStr;

use crate::error::{GeometryError, ParseError, Result};
use crate::geometry::{Axis, BoundedRay, CardinalOrientation, LineLike, Plane};
use crate::math::format::{parse_named, parse_number, write_named};
use crate::math::intersect_3d::closest_approach_distances;
use crate::math::{Direction, Location, Vect, TOLERANCE};

use super::{impl_positioned_convex_shape, ConvexShape};

/// A solid axis-aligned box centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OriginCuboid {
    half_width: f64,
    half_height: f64,
    half_depth: f64,
}

impl OriginCuboid {
    /// A box `width` along X, `height` along Y and `depth` along Z.
    #[must_use]
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self::from_half_dimensions(width * 0.5, height * 0.5, depth * 0.5)
    }

    #[must_use]
    pub const fn from_half_dimensions(half_width: f64, half_height: f64, half_depth: f64) -> Self {
        Self {
            half_width,
            half_height,
            half_depth,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.half_width * 2.0
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.half_height * 2.0
    }

    #[must_use]
    pub fn depth(&self) -> f64 {
        self.half_depth * 2.0
    }

    #[must_use]
    pub const fn half_width(&self) -> f64 {
        self.half_width
    }

    #[must_use]
    pub const fn half_height(&self) -> f64 {
        self.half_height
    }

    #[must_use]
    pub const fn half_depth(&self) -> f64 {
        self.half_depth
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        self.width() * self.height() * self.depth()
    }

    #[must_use]
    pub fn surface_area(&self) -> f64 {
        2.0 * (self.width() * self.height() + self.height() * self.depth() + self.depth() * self.width())
    }

    /// Half the box's size along `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnspecifiedOrientation`] for `Axis::None`.
    pub fn half_extent(&self, axis: Axis) -> Result<f64> {
        Ok(self.half_extents()[axis.index()?])
    }

    /// The box's size along `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnspecifiedOrientation`] for `Axis::None`.
    pub fn extent(&self, axis: Axis) -> Result<f64> {
        Ok(self.half_extent(axis)? * 2.0)
    }

    /// The plane containing the face on `side`, with its normal pointing out
    /// of the box.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnspecifiedOrientation`] for
    /// `CardinalOrientation::None`.
    pub fn side_surface_plane(&self, side: CardinalOrientation) -> Result<Plane> {
        if side == CardinalOrientation::None {
            return Err(GeometryError::UnspecifiedOrientation { parameter: "side" }.into());
        }
        Ok(Plane::from_normal_and_translation_from_origin(
            side.direction(),
            self.half_extent(side.axis())?,
        ))
    }

    /// Area of the face on `side`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnspecifiedOrientation`] for
    /// `CardinalOrientation::None`.
    pub fn side_surface_area(&self, side: CardinalOrientation) -> Result<f64> {
        match side.axis() {
            Axis::X => Ok(self.height() * self.depth()),
            Axis::Y => Ok(self.depth() * self.width()),
            Axis::Z => Ok(self.width() * self.height()),
            Axis::None => Err(GeometryError::UnspecifiedOrientation { parameter: "side" }.into()),
        }
    }

    /// The eight corners, ordered by the sign of X, then Y, then Z.
    #[must_use]
    pub fn corners(&self) -> [Location; 8] {
        let mut corners = [Location::ORIGIN; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            let sign = |bit: usize| if i & bit == 0 { -1.0 } else { 1.0 };
            *corner = Location::new(
                sign(4) * self.half_width,
                sign(2) * self.half_height,
                sign(1) * self.half_depth,
            );
        }
        corners
    }

    /// The twelve edges, each running in the positive direction of its axis.
    #[must_use]
    pub fn edges(&self) -> [BoundedRay; 12] {
        let [hw, hh, hd] = self.half_extents();
        let mut edges = [BoundedRay::new(Location::ORIGIN, Location::ORIGIN); 12];
        let signs = [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)];
        for (i, (a, b)) in signs.into_iter().enumerate() {
            edges[i] = BoundedRay::new(Location::new(-hw, a * hh, b * hd), Location::new(hw, a * hh, b * hd));
            edges[i + 4] = BoundedRay::new(Location::new(a * hw, -hh, b * hd), Location::new(a * hw, hh, b * hd));
            edges[i + 8] = BoundedRay::new(Location::new(a * hw, b * hh, -hd), Location::new(a * hw, b * hh, hd));
        }
        edges
    }

    #[must_use]
    pub fn scaled_by(&self, factor: f64) -> Self {
        Self::from_half_dimensions(
            self.half_width * factor,
            self.half_height * factor,
            self.half_depth * factor,
        )
    }

    /// The same proportions scaled to `volume`.
    #[must_use]
    pub fn with_volume(&self, volume: f64) -> Self {
        self.scaled_by((volume / self.volume()).cbrt())
    }

    /// The same proportions scaled to `surface_area`.
    #[must_use]
    pub fn with_surface_area(&self, surface_area: f64) -> Self {
        self.scaled_by((surface_area / self.surface_area()).sqrt())
    }

    /// This box moved to `center`.
    #[must_use]
    pub const fn at(&self, center: Location) -> Cuboid {
        Cuboid::new(center, *self)
    }

    #[must_use]
    pub fn interpolate(start: &Self, end: &Self, t: f64) -> Self {
        let lerp = |a: f64, b: f64| a + (b - a) * t;
        Self::from_half_dimensions(
            lerp(start.half_width, end.half_width),
            lerp(start.half_height, end.half_height),
            lerp(start.half_depth, end.half_depth),
        )
    }

    const fn half_extents(&self) -> [f64; 3] {
        [self.half_width, self.half_height, self.half_depth]
    }

    /// Whether `plane` passes through the box.
    fn is_cut_by(&self, plane: &Plane) -> bool {
        let n = plane.normal();
        let projected_radius = self.half_width * n.x().abs()
            + self.half_height * n.y().abs()
            + self.half_depth * n.z().abs();
        plane.distance_from_origin() <= projected_radius
    }

    /// The side whose face plane is nearest `location`, measured inwards from
    /// each face. Ties go to the earlier axis; a zero coordinate counts as
    /// positive.
    fn nearest_side(&self, location: Location) -> CardinalOrientation {
        let coordinates = [location.x, location.y, location.z];
        let half = self.half_extents();
        let depth_inside = |i: usize| half[i] - coordinates[i].abs();
        let nearest = (1..3).fold(0, |best, i| if depth_inside(i) < depth_inside(best) { i } else { best });
        CardinalOrientation::from_axis_and_sign(Axis::ALL[nearest], coordinates[nearest])
    }

    fn corner_nearest(&self, plane: &Plane) -> Location {
        self.corners()
            .into_iter()
            .min_by(|a, b| {
                plane
                    .signed_distance_to_location(*a)
                    .abs()
                    .total_cmp(&plane.signed_distance_to_location(*b).abs())
            })
            .unwrap_or(Location::ORIGIN)
    }
}

impl ConvexShape for OriginCuboid {
    /// Points up to [`TOLERANCE`] beyond a face count as inside.
    fn contains_location(&self, location: Location) -> bool {
        location.x.abs() - self.half_width < TOLERANCE
            && location.y.abs() - self.half_height < TOLERANCE
            && location.z.abs() - self.half_depth < TOLERANCE
    }

    fn distance_to_location(&self, location: Location) -> f64 {
        let outside = |coordinate: f64, half: f64| (coordinate.abs() - half).max(0.0);
        Vect::new(
            outside(location.x, self.half_width),
            outside(location.y, self.half_height),
            outside(location.z, self.half_depth),
        )
        .length()
    }

    fn surface_distance_to_location(&self, location: Location) -> f64 {
        let dx = location.x.abs() - self.half_width;
        let dy = location.y.abs() - self.half_height;
        let dz = location.z.abs() - self.half_depth;
        if dx < 0.0 && dy < 0.0 && dz < 0.0 {
            return dx.max(dy).max(dz).abs();
        }
        Vect::new(dx.max(0.0), dy.max(0.0), dz.max(0.0)).length()
    }

    fn closest_point_to_location(&self, location: Location) -> Location {
        Location::new(
            location.x.clamp(-self.half_width, self.half_width),
            location.y.clamp(-self.half_height, self.half_height),
            location.z.clamp(-self.half_depth, self.half_depth),
        )
    }

    /// Inside the box, pushes `location` out through the nearest face.
    fn surface_point_closest_to_location(&self, location: Location) -> Location {
        let clamped = self.closest_point_to_location(location);
        if clamped != location {
            return clamped;
        }
        let side = self.nearest_side(location);
        let mut pushed = [location.x, location.y, location.z];
        if let Ok(axis) = side.axis().index() {
            pushed[axis] = self.half_extents()[axis] * side.axis_sign();
        }
        Location::new(pushed[0], pushed[1], pushed[2])
    }

    /// The outward normal of the face whose plane is nearest `location`.
    fn surface_normal_at(&self, location: Location) -> Direction {
        self.nearest_side(location).direction()
    }

    fn unbounded_surface_intersection_distances<L: LineLike>(&self, line: &L) -> Option<(f64, f64)> {
        let direction = line.direction();
        if direction.is_none() {
            return None;
        }
        let start = line.start_point();
        let starts = [start.x, start.y, start.z];
        let steps = [direction.x(), direction.y(), direction.z()];
        let half = self.half_extents();

        let mut entry = f64::NEG_INFINITY;
        let mut exit = f64::INFINITY;
        for i in 0..3 {
            if steps[i].abs() < TOLERANCE {
                if starts[i].abs() > half[i] {
                    return None;
                }
                continue;
            }
            let to_positive_face = (half[i] - starts[i]) / steps[i];
            let to_negative_face = (-half[i] - starts[i]) / steps[i];
            entry = entry.max(to_positive_face.min(to_negative_face));
            exit = exit.min(to_positive_face.max(to_negative_face));
        }
        (entry <= exit).then_some((entry, exit))
    }

    fn closest_point_on_line_like<L: LineLike>(&self, line: &L) -> Location {
        if self.contains_location(line.start_point()) {
            return line.start_point();
        }
        self.closest_point_to_surface_on_line_like(line)
    }

    /// The first surface crossing if there is one, otherwise the best of the
    /// line's end points and its closest approaches to each edge.
    fn closest_point_to_surface_on_line_like<L: LineLike>(&self, line: &L) -> Location {
        if let Some((_, hit)) = self.first_surface_hit(line) {
            return hit;
        }
        let ends = [Some(line.start_point()), line.end_point()].into_iter().flatten();
        let near_edges = self.edges().into_iter().map(|edge| {
            line.unbounded_location_at_distance(closest_approach_distances(line, &edge).this)
        });
        ends.chain(near_edges)
            .min_by(|a, b| {
                self.surface_distance_to_location(*a)
                    .total_cmp(&self.surface_distance_to_location(*b))
            })
            .unwrap_or(line.start_point())
    }

    fn signed_distance_to_plane(&self, plane: &Plane) -> f64 {
        if self.is_cut_by(plane) {
            return 0.0;
        }
        plane.signed_distance_to_location(self.corner_nearest(plane))
    }

    fn closest_point_to_plane(&self, plane: &Plane) -> Location {
        self.surface_point_closest_to_plane(plane)
    }

    fn surface_point_closest_to_plane(&self, plane: &Plane) -> Location {
        if self.is_cut_by(plane) {
            if let Some(crossing) = self
                .edges()
                .iter()
                .find_map(|edge| plane.intersection_with_line_like(edge))
            {
                return crossing;
            }
        }
        self.corner_nearest(plane)
    }
}

impl fmt::Display for OriginCuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_named(f, "OriginCuboid", &[
            ("Width", &self.width()),
            ("Height", &self.height()),
            ("Depth", &self.depth()),
        ])
    }
}

impl FromStr for OriginCuboid {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let [width, height, depth] = parse_named(s, "OriginCuboid", ["Width", "Height", "Depth"])?;
        Ok(Self::new(parse_number(width)?, parse_number(height)?, parse_number(depth)?))
    }
}

/// A solid axis-aligned box at an arbitrary centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    center: Location,
    extents: OriginCuboid,
}

impl Cuboid {
    #[must_use]
    pub const fn new(center: Location, extents: OriginCuboid) -> Self {
        Self { center, extents }
    }

    #[must_use]
    pub const fn center(&self) -> Location {
        self.center
    }

    /// The same box centred on the origin.
    #[must_use]
    pub const fn as_origin_cuboid(&self) -> OriginCuboid {
        self.extents
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        self.extents.volume()
    }

    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.extents.surface_area()
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::UnspecifiedOrientation`] for `Axis::None`.
    pub fn extent(&self, axis: Axis) -> Result<f64> {
        self.extents.extent(axis)
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::UnspecifiedOrientation`] for `Axis::None`.
    pub fn half_extent(&self, axis: Axis) -> Result<f64> {
        self.extents.half_extent(axis)
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::UnspecifiedOrientation`] for
    /// `CardinalOrientation::None`.
    pub fn side_surface_plane(&self, side: CardinalOrientation) -> Result<Plane> {
        Ok(self.extents.side_surface_plane(side)?.moved_by(self.center.as_vect()))
    }

    #[must_use]
    pub fn corners(&self) -> [Location; 8] {
        self.extents.corners().map(|corner| corner + self.center.as_vect())
    }

    #[must_use]
    pub fn edges(&self) -> [BoundedRay; 12] {
        self.extents.edges().map(|edge| edge.moved_by(self.center.as_vect()))
    }

    #[must_use]
    pub const fn with_center(&self, center: Location) -> Self {
        Self::new(center, self.extents)
    }

    #[must_use]
    pub const fn with_extents(&self, extents: OriginCuboid) -> Self {
        Self::new(self.center, extents)
    }

    #[must_use]
    pub fn moved_by(&self, vect: Vect) -> Self {
        self.with_center(self.center + vect)
    }

    /// Scales about the centre.
    #[must_use]
    pub fn scaled_by(&self, factor: f64) -> Self {
        self.with_extents(self.extents.scaled_by(factor))
    }

    #[must_use]
    pub fn interpolate(start: &Self, end: &Self, t: f64) -> Self {
        Self::new(
            Location::interpolate(start.center, end.center, t),
            OriginCuboid::interpolate(&start.extents, &end.extents, t),
        )
    }
}

impl From<OriginCuboid> for Cuboid {
    fn from(cuboid: OriginCuboid) -> Self {
        cuboid.at(Location::ORIGIN)
    }
}

impl_positioned_convex_shape!(Cuboid => as_origin_cuboid);

impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_named(f, "Cuboid", &[
            ("Center", &self.center),
            ("Width", &self.extents.width()),
            ("Height", &self.extents.height()),
            ("Depth", &self.extents.depth()),
        ])
    }
}

impl FromStr for Cuboid {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let [center, width, height, depth] =
            parse_named(s, "Cuboid", ["Center", "Width", "Height", "Depth"])?;
        Ok(Self::new(
            center.parse()?,
            OriginCuboid::new(parse_number(width)?, parse_number(height)?, parse_number(depth)?),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::relation::{
        ClosestPointTo, Contains, DistanceFrom, IntersectionWith, SignedDistanceFrom,
        SurfaceDistanceFrom, SurfacePointClosestTo,
    };
    use crate::geometry::{Line, PlaneObjectRelationship, Ray};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Location {
        Location::new(x, y, z)
    }

    fn unit_cube() -> OriginCuboid {
        OriginCuboid::new(2.0, 2.0, 2.0)
    }

    // ── dimensions ──

    #[test]
    fn half_extents_of_measured_box() {
        let cuboid = OriginCuboid::new(7.2, 13.6, 1.4);
        assert_relative_eq!(cuboid.distance_from(&p(4.6, 0.0, 0.0)), 1.0, epsilon = 1e-12);
        assert!(cuboid.contains(&p(3.6, 6.8, 0.7)));
        assert!(cuboid.contains(&p(-3.6, -6.8, -0.7)));
        assert!(!cuboid.contains(&p(3.601, 0.0, 0.0)));
        assert!(!cuboid.contains(&p(0.0, -6.801, 0.0)));
        assert!(!cuboid.contains(&p(0.0, 0.0, 0.701)));
    }

    #[test]
    fn axis_lookups_reject_none() {
        let cuboid = OriginCuboid::new(2.0, 4.0, 6.0);
        assert_eq!(cuboid.half_extent(Axis::Y).unwrap(), 2.0);
        assert_eq!(cuboid.extent(Axis::Z).unwrap(), 6.0);
        assert!(cuboid.extent(Axis::None).is_err());
        assert!(cuboid.side_surface_plane(CardinalOrientation::None).is_err());
        assert!(cuboid.side_surface_area(CardinalOrientation::None).is_err());
        assert_eq!(cuboid.side_surface_area(CardinalOrientation::Left).unwrap(), 24.0);

        let top = cuboid.side_surface_plane(CardinalOrientation::Up).unwrap();
        assert_eq!(top.normal(), Direction::UP);
        assert_eq!(top.point_closest_to_origin(), p(0.0, 2.0, 0.0));
    }

    #[test]
    fn corners_and_edges() {
        let cuboid = OriginCuboid::new(2.0, 4.0, 6.0);
        assert!(cuboid.corners().iter().all(|corner| cuboid.contains(corner)));
        assert!(cuboid.corners().contains(&p(1.0, 2.0, 3.0)));
        let total: f64 = cuboid.edges().iter().map(|edge| edge.length().unwrap()).sum();
        assert_relative_eq!(total, 48.0);
        assert!(cuboid.edges().iter().all(|edge| cuboid.contains(edge)));
    }

    #[test]
    fn closed_forms_and_scaling() {
        let cuboid = OriginCuboid::new(2.0, 4.0, 6.0);
        assert_relative_eq!(cuboid.volume(), 48.0);
        assert_relative_eq!(cuboid.surface_area(), 88.0);
        assert_relative_eq!(cuboid.with_volume(48.0 * 8.0).width(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(cuboid.with_surface_area(88.0 * 4.0).depth(), 12.0, epsilon = 1e-12);
        let mid = OriginCuboid::interpolate(&cuboid, &cuboid.scaled_by(3.0), 0.5);
        assert_relative_eq!(mid.height(), 8.0);
    }

    // ── locations ──

    #[test]
    fn surface_queries_from_inside() {
        let cuboid = OriginCuboid::new(2.0, 4.0, 6.0);
        assert_relative_eq!(cuboid.surface_distance_from(&Location::ORIGIN), 1.0);
        assert_eq!(cuboid.surface_point_closest_to(&p(0.5, 0.0, 0.0)), p(1.0, 0.0, 0.0));
        assert_eq!(cuboid.surface_point_closest_to(&p(0.0, -1.5, 0.2)), p(0.0, -2.0, 0.2));
        assert_eq!(cuboid.surface_point_closest_to(&p(5.0, 0.0, 0.0)), p(1.0, 0.0, 0.0));
        assert_eq!(cuboid.closest_point_to(&p(5.0, -5.0, 0.0)), p(1.0, -2.0, 0.0));
    }

    // ── lines ──

    #[test]
    fn slab_intersection() {
        let cube = unit_cube();
        let line = Line::new(p(-5.0, 0.0, 0.0), Direction::LEFT);
        let hit = cube.intersection_with(&line).unwrap();
        assert!(hit.first.approx_eq(p(-1.0, 0.0, 0.0), 1e-12));
        assert!(hit.second.unwrap().approx_eq(p(1.0, 0.0, 0.0), 1e-12));

        let miss = Line::new(p(-5.0, 1.5, 0.0), Direction::LEFT);
        assert!(cube.intersection_with(&miss).is_none());
        assert_relative_eq!(cube.distance_from(&miss), 0.5, epsilon = 1e-12);

        let from_inside = Ray::new(Location::ORIGIN, Direction::DOWN);
        let hit = cube.intersection_with(&from_inside).unwrap();
        assert_eq!(hit.point_count(), 1);
        assert!(hit.first.approx_eq(p(0.0, -1.0, 0.0), 1e-12));
    }

    #[test]
    fn closest_points_for_non_crossing_lines() {
        let cube = unit_cube();
        let hovering = BoundedRay::new(p(-0.5, 2.0, 0.0), p(0.5, 2.0, 0.0));
        assert_relative_eq!(cube.distance_from(&hovering), 1.0, epsilon = 1e-12);
        assert_relative_eq!(cube.closest_point_to(&hovering).y, 1.0, epsilon = 1e-12);

        let past_edge = Line::new(p(2.0, 2.0, 0.0), Direction::FORWARD);
        assert_relative_eq!(cube.distance_from(&past_edge), 2.0_f64.sqrt(), epsilon = 1e-12);
        let on_line = past_edge.closest_point_to(&cube);
        assert_relative_eq!(on_line.x, 2.0);
        assert!(on_line.z.abs() <= 1.0 + 1e-12);

        let inside = BoundedRay::new(p(-0.5, 0.0, 0.0), p(0.5, 0.0, 0.9));
        assert_relative_eq!(cube.distance_from(&inside), 0.0);
        assert_relative_eq!(cube.surface_distance_from(&inside), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn reflection_off_faces() {
        let cube = unit_cube();
        let falling = Ray::new(p(0.0, 5.0, 0.0), Direction::DOWN);
        let bounced = cube.reflection_of_ray(&falling).unwrap();
        assert!(bounced.start_point().approx_eq(p(0.0, 1.0, 0.0), 1e-12));
        assert!(bounced.direction().approx_eq(Direction::UP, 1e-12));

        let slanted = Ray::new(p(-3.0, 4.0, 0.0), Direction::new(1.0, -1.0, 0.0));
        let bounced = cube.reflection_of_ray(&slanted).unwrap();
        assert!(bounced.start_point().approx_eq(p(0.0, 1.0, 0.0), 1e-9));
        assert!(bounced.direction().approx_eq(Direction::new(1.0, 1.0, 0.0), 1e-9));
        assert_relative_eq!(
            cube.incident_angle_with_line_like(&slanted).unwrap(),
            std::f64::consts::FRAC_PI_4,
            epsilon = 1e-9
        );
    }

    // ── planes ──

    #[test]
    fn plane_queries() {
        let cube = unit_cube();
        let floor = Plane::new(Direction::UP, p(0.0, -3.0, 0.0));
        assert_relative_eq!(floor.signed_distance_from(&cube), 2.0);
        assert_relative_eq!(cube.distance_from(&floor), 2.0);
        assert_relative_eq!(cube.closest_point_to(&floor).y, -1.0);
        assert_relative_eq!(floor.closest_point_to(&cube).y, -3.0);
        assert_eq!(floor.relationship_to(&cube), PlaneObjectRelationship::PlaneFacesTowardsObject);

        let tilted = Plane::new(Direction::new(1.0, 1.0, 1.0), p(0.5, 0.0, 0.0));
        assert_relative_eq!(tilted.signed_distance_from(&cube), 0.0);
        assert_eq!(tilted.relationship_to(&cube), PlaneObjectRelationship::PlaneIntersectsObject);
        let on_both = cube.surface_point_closest_to(&tilted);
        assert!(tilted.contains_with_thickness(on_both, 1e-9));
        assert!(cube.contains(&on_both));
    }

    #[test]
    fn plane_just_outside_a_corner_does_not_cut() {
        let cube = unit_cube();
        let beyond_corner = Plane::new(Direction::new(1.0, 1.0, 1.0), p(1.1, 1.1, 1.1));
        assert!(beyond_corner.signed_distance_from(&cube) < 0.0);
    }

    // ── positioned ──

    #[test]
    fn positioned_cuboid_translates_queries() {
        let cuboid = Cuboid::new(p(10.0, 0.0, 0.0), OriginCuboid::new(7.2, 13.6, 1.4));
        assert_relative_eq!(cuboid.distance_from(&p(14.6, 0.0, 0.0)), 1.0, epsilon = 1e-12);
        assert!(cuboid.contains(&p(13.6, 6.8, 0.7)));
        assert!(cuboid.corners().contains(&p(13.6, 6.8, 0.7)));

        let side = cuboid.side_surface_plane(CardinalOrientation::Right).unwrap();
        assert_eq!(side.normal(), Direction::RIGHT);
        assert!(side.contains_with_thickness(p(6.4, 0.0, 0.0), 1e-12));

        let line = Line::new(p(0.0, 0.0, 0.0), Direction::LEFT);
        let hit = cuboid.intersection_with(&line).unwrap();
        assert!(hit.first.approx_eq(p(6.4, 0.0, 0.0), 1e-12));
    }

    #[test]
    fn display_round_trips() {
        let cuboid = Cuboid::new(p(1.0, 2.0, 3.0), OriginCuboid::new(7.2, 13.6, 1.4));
        assert_eq!(
            cuboid.to_string(),
            "Cuboid[Center: <1, 2, 3>; Width: 7.2; Height: 13.6; Depth: 1.4]"
        );
        assert_eq!(cuboid.to_string().parse::<Cuboid>().unwrap(), cuboid);
        let origin = OriginCuboid::new(1.0, 0.5, 2.0);
        assert_eq!(origin.to_string().parse::<OriginCuboid>().unwrap(), origin);
    }
}
