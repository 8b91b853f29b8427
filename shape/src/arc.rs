//! Elliptic arcs and their adaptive tessellation.
//!
//! Arcs are tessellated against a precomputed sine/cosine lookup table,
//! with a subdivision count proportional to the arc's on-screen size.
//! The number of boundary samples is
//!
//! ```text
//! clamp(2π · size / ACCURACY_FACTOR, MIN_ACCURACY, MAX_ACCURACY)
//! ```
//!
//! where `size` is the distance between the projected center and the
//! projected corner point `center + (rx, ry)` under the current view
//! transform. Zooming in adds detail, zooming out removes it, and the
//! clamp bounds the cost regardless of the transform.

use crate::math::{Angle, Point, Transform, Vector2};
use crate::shape::{Attribs, Closure, Edge, Face, Shape, ShapeKind};

use log::debug;

use std::f32::consts::PI;
use std::sync::OnceLock;

/// Smallest number of boundary samples of a tessellated arc.
pub const MIN_ACCURACY: usize = 20;

/// Largest number of boundary samples of a tessellated arc.
pub const MAX_ACCURACY: usize = 200;

/// Divisor applied to the projected arc size when deriving the sample
/// count. Smaller values produce more detailed arcs.
pub const ACCURACY_FACTOR: f32 = 10.0;

// One sine/cosine entry per half degree.
const SINCOS_LENGTH: usize = 720;

/// The shared (sin, cos) lookup table, built once and read-only after.
fn sincos() -> &'static [(f32, f32)] {
    static TABLE: OnceLock<Vec<(f32, f32)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        (0..SINCOS_LENGTH)
            .map(|i| {
                let angle = i as f32 * (2.0 * PI) / SINCOS_LENGTH as f32;
                (angle.sin(), angle.cos())
            })
            .collect()
    })
}

/// Maps an angle to its index in the sine/cosine table.
///
/// The index is unbounded here; it is taken modulo the table length at
/// lookup time, which is what keeps stored angles outside [0, 2π) well
/// defined.
fn table_index(angle: Angle) -> i64 {
    ((angle.radians / (2.0 * PI)) * SINCOS_LENGTH as f32).round() as i64
}

fn table_entry(index: i64) -> (f32, f32) {
    sincos()[index.rem_euclid(SINCOS_LENGTH as i64) as usize]
}

/// How an arc's boundary is closed and filled.
///
/// `chord` closes the outline straight across the two boundary
/// endpoints; otherwise the outline closes through the center (a pie
/// wedge). `pie` is a fill hint for renderers. The default is an open
/// outline with a pie fill.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcStyle {
    pub chord: bool,
    pub pie: bool,
}

impl ArcStyle {
    pub const OPEN: ArcStyle = ArcStyle {
        chord: false,
        pie: false,
    };
    pub const CHORD: ArcStyle = ArcStyle {
        chord: true,
        pie: false,
    };
    pub const PIE: ArcStyle = ArcStyle {
        chord: false,
        pie: true,
    };
    pub const OPEN_PIE: ArcStyle = ArcStyle {
        chord: false,
        pie: true,
    };
}

impl Default for ArcStyle {
    fn default() -> Self {
        ArcStyle::OPEN_PIE
    }
}

/// An elliptic arc: a shape whose vertex/edge/face buffers are derived
/// from its center, radii and angle span.
///
/// The buffers are recomputed lazily whenever the center, radii, angles
/// or view transform change; reading them through the accessors never
/// observes stale data.
#[derive(Clone, Debug)]
pub struct Arc {
    center: Point,
    radii: Vector2,
    start_angle: Angle,
    stop_angle: Angle,
    style: ArcStyle,
    view: Transform,
    shape: Shape,
    dirty: bool,
}

impl Arc {
    /// An arc around `center` with radii `(rx, ry)`, sweeping from
    /// `start_angle` to `stop_angle`.
    ///
    /// `view` is the transform used to estimate the arc's on-screen
    /// size; pass `Transform::identity()` when no transform applies.
    pub fn new(
        center: Point,
        radii: Vector2,
        start_angle: Angle,
        stop_angle: Angle,
        style: ArcStyle,
        view: Transform,
    ) -> Arc {
        let attribs = Attribs {
            kind: ShapeKind::Polygon,
            closure: if style.chord {
                Closure::Closed
            } else {
                Closure::Open
            },
            arc: Some(style),
        };

        Arc {
            center,
            radii,
            start_angle,
            stop_angle,
            style,
            view,
            shape: Shape::with_attribs(attribs),
            dirty: true,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radii(&self) -> Vector2 {
        self.radii
    }

    pub fn start_angle(&self) -> Angle {
        self.start_angle
    }

    pub fn stop_angle(&self) -> Angle {
        self.stop_angle
    }

    pub fn style(&self) -> ArcStyle {
        self.style
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
        self.dirty = true;
    }

    pub fn set_radii(&mut self, radii: Vector2) {
        self.radii = radii;
        self.dirty = true;
    }

    pub fn set_angles(&mut self, start: Angle, stop: Angle) {
        self.start_angle = start;
        self.stop_angle = stop;
        self.dirty = true;
    }

    pub fn set_view(&mut self, view: Transform) {
        self.view = view;
        self.dirty = true;
    }

    /// The tessellated vertices: the center, then the boundary samples.
    pub fn vertices(&mut self) -> &[Point] {
        self.ensure_tessellated();
        self.shape.vertices()
    }

    /// The outline edges: the boundary chain, closed across the
    /// endpoints (`chord`) or through the center (pie wedge).
    pub fn edges(&mut self) -> &[Edge] {
        self.ensure_tessellated();
        self.shape.edges()
    }

    /// The fill faces: a triangle fan from the center over the boundary.
    pub fn faces(&mut self) -> &[Face] {
        self.ensure_tessellated();
        self.shape.faces()
    }

    /// The tessellated shape, for uniform handling in a shape tree.
    pub fn shape_mut(&mut self) -> &mut Shape {
        self.ensure_tessellated();
        &mut self.shape
    }

    /// Consume the arc, yielding its tessellated shape.
    pub fn into_shape(mut self) -> Shape {
        self.ensure_tessellated();
        self.shape
    }

    fn ensure_tessellated(&mut self) {
        if self.dirty {
            self.tessellate();
        }
    }

    /// Number of boundary samples for the arc's projected size.
    fn accuracy(&self) -> usize {
        let corner = self.center + crate::math::vector(self.radii.x, self.radii.y, 0.0);
        let s1 = self.view.transform_point3d(self.center).unwrap_or(self.center);
        let s2 = self.view.transform_point3d(corner).unwrap_or(corner);

        let size_acc = (s2 - s1).length() * PI * 2.0 / ACCURACY_FACTOR;

        (size_acc as usize).clamp(MIN_ACCURACY, MAX_ACCURACY)
    }

    fn tessellate(&mut self) {
        let accuracy = self.accuracy();
        // The stride rounds up so the sample count stays within the
        // accuracy bound.
        let inc = ((SINCOS_LENGTH + accuracy - 1) / accuracy).max(1) as i64;

        let start_index = table_index(self.start_angle);
        let stop_index = table_index(self.stop_angle);

        let (cx, cy, cz) = (self.center.x, self.center.y, self.center.z);
        let (rx, ry) = (self.radii.x, self.radii.y);

        let mut vertices = Vec::with_capacity(accuracy + 2);
        vertices.push(self.center);

        let mut index = start_index;
        while index < stop_index {
            let (sin, cos) = table_entry(index);
            vertices.push(Point::new(cx + rx * cos, cy + ry * sin, cz));
            index += inc;
        }

        // Always land exactly on the stop angle's sample.
        let (sin, cos) = table_entry(stop_index);
        vertices.push(Point::new(cx + rx * cos, cy + ry * sin, cz));

        self.shape.set_vertices(vertices);

        let n = self.shape.vertices().len() as u32;
        debug!(
            "arc tessellated with {} samples (accuracy {})",
            n.saturating_sub(1),
            accuracy
        );

        // Boundary chain over samples 1..n-1.
        let mut edges: Vec<Edge> = if n > 2 {
            (1..n - 1).map(|i| [i, i + 1]).collect()
        } else {
            Vec::new()
        };
        if self.style.chord {
            if n > 2 {
                edges.push([1, n - 1]);
            }
        } else if n > 1 {
            edges.push([0, n - 1]);
        }

        // Fill is a fan from the center vertex.
        let faces: Vec<Face> = if n > 2 {
            (1..n - 1).map(|i| [0, i, i + 1]).collect()
        } else {
            Vec::new()
        };

        self.shape.install_buffers(edges, faces);
        self.dirty = false;
    }
}
