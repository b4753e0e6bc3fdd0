use crate::geometry::Plane;

use super::{Direction, Location, Vect};

/// Projects `location` onto the plane's `(u, v)` basis, measured from the
/// plane's point closest to the origin.
#[must_use]
fn project_to_uv(location: Location, plane: &Plane, basis: (Direction, Direction)) -> (f64, f64) {
    let diff = location - plane.point_closest_to_origin();
    (diff.dot(basis.0.to_vect(1.0)), diff.dot(basis.1.to_vect(1.0)))
}

/// Point-in-polygon test for a location coplanar with `polygon`.
///
/// Projects to the plane's UV coordinates and uses the winding number
/// algorithm, so non-convex outlines are handled.
#[must_use]
pub fn point_in_polygon_3d(location: Location, polygon: &[Location], plane: &Plane) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let basis = plane.basis();
    let (px, py) = project_to_uv(location, plane, basis);
    winding_number_2d(px, py, polygon.iter().map(|v| project_to_uv(*v, plane, basis))) != 0
}

/// Winding number of point `(px, py)` with respect to the closed outline
/// `verts`. Non-zero => inside, zero => outside.
fn winding_number_2d(px: f64, py: f64, verts: impl Iterator<Item = (f64, f64)> + Clone) -> i32 {
    let mut winding = 0i32;
    let next = verts.clone().skip(1).chain(verts.clone().take(1));
    for ((x0, y0), (x1, y1)) in verts.zip(next) {
        if y0 <= py {
            if y1 > py && cross_2d(x1 - x0, y1 - y0, px - x0, py - y0) > 0.0 {
                winding += 1;
            }
        } else if y1 <= py && cross_2d(x1 - x0, y1 - y0, px - x0, py - y0) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// 2D cross product: `(ax * by - ay * bx)`.
#[inline]
fn cross_2d(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}

/// Twice the vector area of the closed outline (Newell's method). Its
/// direction is the normal about which the outline turns anticlockwise.
#[must_use]
pub fn doubled_vector_area(polygon: &[Location]) -> Vect {
    let next = polygon.iter().skip(1).chain(polygon.iter().take(1));
    polygon
        .iter()
        .zip(next)
        .fold(Vect::ZERO, |sum, (a, b)| sum + a.as_vect().cross(b.as_vect()))
}

/// The normal most consecutive vertex triangles agree on, assuming
/// anticlockwise winding.
///
/// Each non-degenerate triangle `(v[i-2], v[i-1], v[i])` votes either for the
/// first triangle's normal or, when its own normal points more than a quarter
/// turn away from it, for the first opposing normal seen. A tie goes to the
/// first triangle's normal. Returns `None` when every triangle is degenerate.
#[must_use]
pub fn most_likely_normal(polygon: &[Location]) -> Option<Direction> {
    let mut first: Option<Direction> = None;
    let mut second: Option<Direction> = None;
    let mut first_votes = 0usize;
    let mut second_votes = 0usize;

    for triangle in polygon.windows(3) {
        let Some(plane) = Plane::from_triangle_on_surface(triangle[0], triangle[1], triangle[2]) else {
            continue;
        };
        match first {
            None => {
                first = Some(plane.normal());
                first_votes += 1;
            }
            Some(candidate) if candidate.angle_to(plane.normal()) < std::f64::consts::FRAC_PI_2 => {
                first_votes += 1;
            }
            Some(_) => {
                second.get_or_insert(plane.normal());
                second_votes += 1;
            }
        }
    }

    let winner = if first_votes >= second_votes { first } else { second };
    if winner.is_none() {
        tracing::debug!(vertices = polygon.len(), "no triangle voted for a polygon normal");
    }
    winner
}
