use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::polygon_3d::{doubled_vector_area, most_likely_normal, point_in_polygon_3d};
use crate::math::{Direction, Location, DEFAULT_PLANE_THICKNESS};

use super::{BoundedRay, Plane};

/// A simple planar polygon over a borrowed, ordered vertex list.
///
/// The last vertex joins back to the first. Edges are not expected to cross.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polygon<'a> {
    vertices: &'a [Location],
    normal: Direction,
    is_wound_clockwise: bool,
}

impl<'a> Polygon<'a> {
    /// Winding assumed when none is given.
    pub const DEFAULT_CLOCKWISE_EXPECTATION: bool = false;

    /// Builds a polygon whose normal is voted for by its vertex triangles,
    /// assuming anticlockwise winding.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InsufficientVertices`] for fewer than three
    /// vertices, or [`GeometryError::Degenerate`] when all vertices are
    /// collinear.
    pub fn new(vertices: &'a [Location]) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::InsufficientVertices {
                required: 3,
                actual: vertices.len(),
            }
            .into());
        }
        let normal = most_likely_normal(vertices)
            .ok_or_else(|| GeometryError::Degenerate("polygon vertices are collinear".to_owned()))?;
        Ok(Self::with_normal(vertices, normal))
    }

    #[must_use]
    pub const fn with_normal(vertices: &'a [Location], normal: Direction) -> Self {
        Self::with_normal_and_winding(vertices, normal, Self::DEFAULT_CLOCKWISE_EXPECTATION)
    }

    #[must_use]
    pub const fn with_normal_and_winding(
        vertices: &'a [Location],
        normal: Direction,
        is_wound_clockwise: bool,
    ) -> Self {
        Self {
            vertices,
            normal,
            is_wound_clockwise,
        }
    }

    #[must_use]
    pub const fn vertices(&self) -> &'a [Location] {
        self.vertices
    }

    #[must_use]
    pub const fn normal(&self) -> Direction {
        self.normal
    }

    #[must_use]
    pub const fn is_wound_clockwise(&self) -> bool {
        self.is_wound_clockwise
    }

    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub const fn edge_count(&self) -> usize {
        match self.vertices.len() {
            0 | 1 => 0,
            2 => 1,
            n => n,
        }
    }

    #[must_use]
    pub const fn triangle_count(&self) -> usize {
        self.vertices.len().saturating_sub(2)
    }

    /// Edges in vertex order, ending with the one that closes the outline.
    pub fn edges(&self) -> impl Iterator<Item = BoundedRay> + 'a {
        let vertices = self.vertices;
        let count = self.edge_count();
        (0..count).map(move |i| BoundedRay::new(vertices[i], vertices[(i + 1) % vertices.len()]))
    }

    /// The plane through the first vertex with this polygon's normal.
    #[must_use]
    pub fn plane(&self) -> Option<Plane> {
        self.vertices.first().map(|first| Plane::new(self.normal, *first))
    }

    /// Mean of the vertices.
    #[must_use]
    pub fn centroid(&self) -> Option<Location> {
        let first = self.vertices.first()?;
        let sum = self
            .vertices
            .iter()
            .fold(crate::math::Vect::ZERO, |sum, v| sum + (*v - *first));
        #[allow(clippy::cast_precision_loss)]
        let count = self.vertices.len() as f64;
        Some(*first + sum / count)
    }

    /// Enclosed area, regardless of winding.
    #[must_use]
    pub fn area(&self) -> f64 {
        doubled_vector_area(self.vertices).dot(self.normal.to_vect(1.0)).abs() * 0.5
    }

    /// Whether the vertex order turns the way [`is_wound_clockwise`](Self::is_wound_clockwise)
    /// says when viewed from the normal's side.
    #[must_use]
    pub fn winding_matches_normal(&self) -> bool {
        let turn = doubled_vector_area(self.vertices).dot(self.normal.to_vect(1.0));
        if self.is_wound_clockwise {
            turn < 0.0
        } else {
            turn > 0.0
        }
    }

    /// Whether `location` lies in the polygon's plane (within the default
    /// plane thickness) and inside its outline.
    #[must_use]
    pub fn contains(&self, location: Location) -> bool {
        self.plane().is_some_and(|plane| {
            plane.contains_with_thickness(location, DEFAULT_PLANE_THICKNESS)
                && point_in_polygon_3d(location, self.vertices, &plane)
        })
    }

    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.is_wound_clockwise == other.is_wound_clockwise
            && self.normal.approx_eq(other.normal, tolerance)
            && self.vertices.len() == other.vertices.len()
            && self
                .vertices
                .iter()
                .zip(other.vertices)
                .all(|(a, b)| a.approx_eq(*b, tolerance))
    }
}

impl fmt::Display for Polygon<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon[{} vertices]", self.vertex_count())
    }
}
