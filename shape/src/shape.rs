//! The renderable shape tree and its derived buffers.

use crate::arc::ArcStyle;
use crate::math::Point;

use log::warn;

/// An outline edge, as a pair of vertex indices.
pub type Edge = [u32; 2];

/// A fill triangle, as a triple of vertex indices.
///
/// Indices address the shape's outer vertices first, then its contour
/// vertices.
pub type Face = [u32; 3];

/// How a shape's vertex sequence is interpreted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    /// Isolated points, no edges and no fill.
    Point,
    /// An open chain of segments, no fill.
    Path,
    /// A fillable boundary.
    Polygon,
}

/// Whether a polygon's boundary loops back to its first vertex.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Closure {
    Open,
    Closed,
}

/// The descriptive attributes of a shape.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Attribs {
    pub kind: ShapeKind,
    pub closure: Closure,
    /// Arc tessellation hints, present on shapes derived from arcs.
    pub arc: Option<ArcStyle>,
}

impl Attribs {
    /// A closed polygon, the default for constructed primitives.
    pub fn polygon() -> Self {
        Attribs {
            kind: ShapeKind::Polygon,
            closure: Closure::Closed,
            arc: None,
        }
    }

    /// An open chain of segments.
    pub fn path() -> Self {
        Attribs {
            kind: ShapeKind::Path,
            closure: Closure::Open,
            arc: None,
        }
    }

    /// Isolated points.
    pub fn point() -> Self {
        Attribs {
            kind: ShapeKind::Point,
            closure: Closure::Open,
            arc: None,
        }
    }

    pub fn with_closure(mut self, closure: Closure) -> Self {
        self.closure = closure;
        self
    }
}

impl Default for Attribs {
    fn default() -> Self {
        Attribs::polygon()
    }
}

/// The renderable unit: an ordered vertex sequence, an optional hole
/// contour, descriptive attributes and child shapes.
///
/// The outline edges and fill faces are derived data, computed lazily
/// from the vertices and attributes on first access and cached until a
/// mutation clears them — an empty cache is the dirty flag, so stale
/// buffers are never observed.
///
/// A shape with no vertices of its own can still serve as a container
/// for children (vertex-stream sessions build such containers).
///
/// A contour, when present, must wind opposite to the outer boundary.
/// This is a caller contract; the engine does not validate winding.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Shape {
    vertices: Vec<Point>,
    contour: Vec<Point>,
    attribs: Attribs,
    children: Vec<Shape>,
    #[cfg_attr(feature = "serialization", serde(skip))]
    edges: Option<Vec<Edge>>,
    #[cfg_attr(feature = "serialization", serde(skip))]
    faces: Option<Vec<Face>>,
}

impl Shape {
    /// An empty container shape.
    pub fn new() -> Shape {
        Shape::default()
    }

    /// An empty shape with the given attributes.
    pub fn with_attribs(attribs: Attribs) -> Shape {
        Shape {
            attribs,
            ..Shape::default()
        }
    }

    /// A shape from a vertex sequence.
    ///
    /// Consecutive duplicate vertices are dropped.
    pub fn from_vertices(vertices: Vec<Point>, attribs: Attribs) -> Shape {
        let mut shape = Shape::with_attribs(attribs);
        shape.set_vertices(vertices);
        shape
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Replace the vertex sequence, invalidating the derived buffers.
    ///
    /// Consecutive duplicate vertices are dropped; an explicit closing
    /// vertex (equal to the first) is kept.
    pub fn set_vertices(&mut self, vertices: Vec<Point>) {
        self.vertices = sanitize(vertices);
        self.invalidate();
    }

    /// Edit an individual vertex, invalidating the derived buffers.
    pub fn update_vertex(&mut self, index: usize, vertex: Point) {
        self.vertices[index] = vertex;
        self.invalidate();
    }

    pub fn contour(&self) -> &[Point] {
        &self.contour
    }

    /// Replace the hole contour, invalidating the derived buffers.
    pub fn set_contour(&mut self, contour: Vec<Point>) {
        self.contour = sanitize(contour);
        self.invalidate();
    }

    pub fn attribs(&self) -> Attribs {
        self.attribs
    }

    pub fn set_attribs(&mut self, attribs: Attribs) {
        self.attribs = attribs;
        self.invalidate();
    }

    pub fn add_child(&mut self, child: Shape) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Shape] {
        &mut self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The outline edges, computed on first access.
    ///
    /// Points have no edges; paths and open polygons chain consecutive
    /// vertices; closed polygons additionally close the ring, unless the
    /// vertex sequence already repeats its first vertex at the end.
    pub fn edges(&mut self) -> &[Edge] {
        if self.edges.is_none() {
            self.edges = Some(self.compute_edges());
        }

        self.edges.as_deref().unwrap_or(&[])
    }

    /// The fill faces, computed on first access.
    ///
    /// Only polygons are filled; the contour, when present, is treated
    /// as a hole. Face indices address the outer vertices first, then
    /// the contour vertices.
    pub fn faces(&mut self) -> &[Face] {
        if self.faces.is_none() {
            self.faces = Some(self.compute_faces());
        }

        self.faces.as_deref().unwrap_or(&[])
    }

    fn invalidate(&mut self) {
        self.edges = None;
        self.faces = None;
    }

    /// Install precomputed derived buffers (used by arc tessellation,
    /// which has its own edge and face rules).
    pub(crate) fn install_buffers(&mut self, edges: Vec<Edge>, faces: Vec<Face>) {
        self.edges = Some(edges);
        self.faces = Some(faces);
    }

    fn compute_edges(&self) -> Vec<Edge> {
        let n = self.vertices.len() as u32;

        match self.attribs.kind {
            ShapeKind::Point => Vec::new(),
            ShapeKind::Path => chain_edges(n),
            ShapeKind::Polygon => match self.attribs.closure {
                Closure::Open => chain_edges(n),
                Closure::Closed => {
                    let mut edges = chain_edges(n);
                    // A ring that already repeats its first vertex needs
                    // no second closing edge.
                    if n > 2 && self.vertices.first() != self.vertices.last() {
                        edges.push([n - 1, 0]);
                    }
                    edges
                }
            },
        }
    }

    fn compute_faces(&self) -> Vec<Face> {
        if self.attribs.kind != ShapeKind::Polygon {
            return Vec::new();
        }

        triangulate(&self.vertices, &self.contour)
    }
}

fn chain_edges(n: u32) -> Vec<Edge> {
    if n < 2 {
        return Vec::new();
    }

    (0..n - 1).map(|i| [i, i + 1]).collect()
}

fn sanitize(vertices: Vec<Point>) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(vertices.len());
    for v in vertices {
        if out.last() == Some(&v) {
            continue;
        }
        out.push(v);
    }

    out
}

/// Strip the explicit closing vertex, if any, so that rings are handed
/// to the triangulator without a duplicated corner.
fn open_ring(vertices: &[Point]) -> &[Point] {
    match (vertices.first(), vertices.last()) {
        (Some(first), Some(last)) if vertices.len() > 1 && first == last => {
            &vertices[..vertices.len() - 1]
        }
        _ => vertices,
    }
}

fn triangulate(vertices: &[Point], contour: &[Point]) -> Vec<Face> {
    let outer = open_ring(vertices);
    if outer.len() < 3 {
        return Vec::new();
    }

    let hole = open_ring(contour);

    let mut coords = Vec::with_capacity((outer.len() + hole.len()) * 2);
    for p in outer {
        coords.push(p.x as f64);
        coords.push(p.y as f64);
    }

    let mut hole_indices = Vec::new();
    if hole.len() >= 3 {
        hole_indices.push(outer.len());
        for p in hole {
            coords.push(p.x as f64);
            coords.push(p.y as f64);
        }
    }

    match earcutr::earcut(&coords, &hole_indices, 2) {
        Ok(indices) => indices
            .chunks_exact(3)
            .map(|t| [t[0] as u32, t[1] as u32, t[2] as u32])
            .collect(),
        Err(e) => {
            warn!("polygon triangulation failed: {:?}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;

    #[test]
    fn sanitize_drops_consecutive_duplicates() {
        let shape = Shape::from_vertices(
            vec![
                point(0.0, 0.0),
                point(0.0, 0.0),
                point(1.0, 0.0),
                point(1.0, 1.0),
                point(1.0, 1.0),
                point(0.0, 0.0),
            ],
            Attribs::default(),
        );

        // The interior duplicates go away, the closing vertex stays.
        assert_eq!(shape.vertices().len(), 4);
        assert_eq!(shape.vertices().first(), shape.vertices().last());
    }

    #[test]
    fn closed_polygon_ring_edges() {
        let mut shape = Shape::from_vertices(
            vec![
                point(0.0, 0.0),
                point(4.0, 0.0),
                point(4.0, 3.0),
                point(0.0, 3.0),
            ],
            Attribs::default(),
        );

        assert_eq!(shape.edges(), &[[0, 1], [1, 2], [2, 3], [3, 0]]);
    }

    #[test]
    fn explicitly_closed_ring_has_no_duplicate_edge() {
        let mut shape = Shape::from_vertices(
            vec![
                point(0.0, 0.0),
                point(4.0, 0.0),
                point(4.0, 3.0),
                point(0.0, 0.0),
            ],
            Attribs::default(),
        );

        assert_eq!(shape.edges(), &[[0, 1], [1, 2], [2, 3]]);
    }

    #[test]
    fn path_edges_stay_open() {
        let mut shape = Shape::from_vertices(
            vec![point(0.0, 0.0), point(1.0, 0.0), point(2.0, 1.0)],
            Attribs::path(),
        );

        assert_eq!(shape.edges(), &[[0, 1], [1, 2]]);

        let mut points = Shape::from_vertices(vec![point(0.0, 0.0)], Attribs::point());
        assert!(points.edges().is_empty());
        assert!(points.faces().is_empty());
    }

    #[test]
    fn mutation_invalidates_caches() {
        let mut shape = Shape::from_vertices(
            vec![
                point(0.0, 0.0),
                point(2.0, 0.0),
                point(2.0, 2.0),
                point(0.0, 2.0),
            ],
            Attribs::default(),
        );

        assert_eq!(shape.edges().len(), 4);
        assert_eq!(shape.faces().len(), 2);

        shape.set_vertices(vec![point(0.0, 0.0), point(1.0, 0.0), point(0.0, 1.0)]);
        assert_eq!(shape.edges().len(), 3);
        assert_eq!(shape.faces().len(), 1);
    }

    #[test]
    fn quad_fill_is_two_triangles() {
        let mut shape = Shape::from_vertices(
            vec![
                point(0.0, 0.0),
                point(4.0, 0.0),
                point(4.0, 3.0),
                point(0.0, 3.0),
            ],
            Attribs::default(),
        );

        assert_eq!(shape.faces().len(), 2);
    }

    #[test]
    fn contour_is_a_hole() {
        let mut shape = Shape::from_vertices(
            vec![
                point(0.0, 0.0),
                point(10.0, 0.0),
                point(10.0, 10.0),
                point(0.0, 10.0),
            ],
            Attribs::default(),
        );
        shape.set_contour(vec![
            point(4.0, 4.0),
            point(4.0, 6.0),
            point(6.0, 6.0),
            point(6.0, 4.0),
        ]);

        let faces = shape.faces().to_vec();
        // A square with a square hole triangulates into 8 faces, and
        // some of them must use the contour vertices (indices 4..8).
        assert_eq!(faces.len(), 8);
        assert!(faces.iter().any(|f| f.iter().any(|&i| i >= 4)));

        // No face may sit inside the hole: the hole center must not be
        // covered by any triangle's centroid.
        for f in &faces {
            let all = [
                shape.vertices().to_vec(),
                shape.contour().to_vec(),
            ]
            .concat();
            let cx = (all[f[0] as usize].x + all[f[1] as usize].x + all[f[2] as usize].x) / 3.0;
            let cy = (all[f[0] as usize].y + all[f[1] as usize].y + all[f[2] as usize].y) / 3.0;
            let inside_hole = cx > 4.0 && cx < 6.0 && cy > 4.0 && cy < 6.0;
            assert!(!inside_hole);
        }
    }
}
