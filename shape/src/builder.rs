//! The vertex-stream shape builder.
//!
//! A [ShapeBuilder] records raw vertex commands between its creation
//! and [build](ShapeBuilder::build), then expands them into one or more
//! concrete sub-shapes according to its topology mode:
//!
//! ```
//! use easel_shape::builder::{EndMode, ShapeBuilder, ShapeMode};
//! use easel_shape::DrawingContext;
//!
//! let ctx = DrawingContext::new();
//! let mut builder = ShapeBuilder::new(Some(ShapeMode::Lines));
//! builder.vertex(0.0, 0.0);
//! builder.vertex(10.0, 0.0);
//! builder.vertex(0.0, 10.0);
//! builder.vertex(10.0, 10.0);
//!
//! let shape = builder.build(&ctx, EndMode::Open).unwrap().unwrap();
//! assert_eq!(shape.child_count(), 2);
//! ```
//!
//! Each builder value is one recording session. `build` consumes it, so
//! a session can never leak state into the next one — including when it
//! fails.

use crate::context::DrawingContext;
use crate::curves::{
    CatmullRomSegment, CubicBezierSegment, CurveSettings, QuadraticBezierSegment, Segment,
};
use crate::math::{point, point3, Point};
use crate::shape::{Attribs, Closure, Shape};
use crate::ShapeError;

use log::debug;

/// The vertex-grouping scheme used when a recording session is expanded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ShapeMode {
    Points,
    Lines,
    Triangles,
    TriangleStrip,
    TriangleFan,
    Quads,
    QuadStrip,
    Polygon,
}

/// Whether the recorded boundary loops back to its first vertex.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum EndMode {
    Open,
    Close,
}

/// A recorded vertex command, tagged with its kind.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Command {
    /// A plain anchor vertex.
    Vertex(Point),
    /// A Catmull-Rom guide point.
    CurveVertex(Point),
    /// Two control points and an anchor.
    BezierVertex {
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    /// One control point and an anchor.
    QuadraticVertex { ctrl: Point, to: Point },
}

impl Command {
    fn anchor(&self) -> Point {
        match *self {
            Command::Vertex(p) => p,
            Command::CurveVertex(p) => p,
            Command::BezierVertex { to, .. } => to,
            Command::QuadraticVertex { to, .. } => to,
        }
    }
}

/// A vertex-stream recording session.
///
/// Commands accumulate in the outer list, or in the contour list while
/// a contour is open. The contour must wind opposite to the outer
/// boundary; that is the caller's contract.
#[derive(Clone, Debug, Default)]
pub struct ShapeBuilder {
    kind: Option<ShapeMode>,
    commands: Vec<Command>,
    contour: Vec<Command>,
    in_contour: bool,
    any_curve: bool,
    any_bezier: bool,
    any_quadratic: bool,
}

impl ShapeBuilder {
    /// Start a recording session.
    ///
    /// `None` behaves like [ShapeMode::Polygon].
    pub fn new(kind: Option<ShapeMode>) -> ShapeBuilder {
        ShapeBuilder {
            kind,
            ..ShapeBuilder::default()
        }
    }

    /// Append a plain vertex.
    pub fn vertex(&mut self, x: f32, y: f32) {
        self.push(Command::Vertex(point(x, y)));
    }

    /// Append a plain vertex with an explicit z coordinate.
    pub fn vertex3(&mut self, x: f32, y: f32, z: f32) {
        self.push(Command::Vertex(point3(x, y, z)));
    }

    /// Append a Catmull-Rom guide point, marking the session
    /// curve-flavored.
    ///
    /// The first and last guide points shape the curve's ends; at least
    /// four are needed before anything is interpolated.
    pub fn curve_vertex(&mut self, x: f32, y: f32) {
        self.any_curve = true;
        self.push(Command::CurveVertex(point(x, y)));
    }

    /// Append a Catmull-Rom guide point with an explicit z coordinate.
    pub fn curve_vertex3(&mut self, x: f32, y: f32, z: f32) {
        self.any_curve = true;
        self.push(Command::CurveVertex(point3(x, y, z)));
    }

    /// Append a cubic bézier span: two control points and an anchor.
    ///
    /// Requires a previously recorded vertex to curve away from; the
    /// requirement is checked when the session is built.
    pub fn bezier_vertex(&mut self, x2: f32, y2: f32, x3: f32, y3: f32, x4: f32, y4: f32) {
        self.any_bezier = true;
        self.push(Command::BezierVertex {
            ctrl1: point(x2, y2),
            ctrl2: point(x3, y3),
            to: point(x4, y4),
        });
    }

    /// Append a quadratic bézier span: a control point and an anchor.
    pub fn quadratic_vertex(&mut self, cx: f32, cy: f32, x3: f32, y3: f32) {
        self.any_quadratic = true;
        self.push(Command::QuadraticVertex {
            ctrl: point(cx, cy),
            to: point(x3, y3),
        });
    }

    /// Start recording the hole contour.
    ///
    /// Contour vertices must wind opposite to the outer boundary.
    pub fn begin_contour(&mut self) {
        self.in_contour = true;
        self.contour.clear();
    }

    /// Stop recording the hole contour.
    pub fn end_contour(&mut self) {
        self.in_contour = false;
    }

    /// Number of commands recorded on the outer boundary.
    pub fn vertex_count(&self) -> usize {
        self.commands.len()
    }

    fn push(&mut self, command: Command) {
        if self.in_contour {
            self.contour.push(command);
        } else {
            self.commands.push(command);
        }
    }

    /// Finish the session and expand it into a shape tree.
    ///
    /// Returns `Ok(None)` when there is nothing to build: no vertex was
    /// recorded, or fill and stroke are both disabled on the context.
    /// Otherwise the result is a vertex-less container shape holding one
    /// child per expanded sub-shape.
    pub fn build(
        mut self,
        ctx: &DrawingContext,
        end: EndMode,
    ) -> Result<Option<Shape>, ShapeError> {
        if self.commands.is_empty() {
            return Ok(None);
        }

        let style = ctx.style();
        if !style.fill_enabled && !style.stroke_enabled {
            debug!("shape discarded: fill and stroke both disabled");
            return Ok(None);
        }

        let closure = match end {
            EndMode::Close => Closure::Closed,
            EndMode::Open => Closure::Open,
        };
        if closure == Closure::Closed && !self.in_contour {
            let first = self.commands[0];
            self.commands.push(first);
        }

        let settings = *ctx.curve_settings();
        let polygonal = matches!(self.kind, None | Some(ShapeMode::Polygon));

        let mut parent = Shape::new();

        if self.any_curve && polygonal {
            if self.commands.len() > 3 {
                let mut child = Shape::from_vertices(
                    flatten_spline(&self.commands, &settings),
                    Attribs::polygon().with_closure(closure),
                );
                child.set_contour(flatten_spline(&self.contour, &settings));
                parent.add_child(child);
            } else {
                debug!(
                    "curve shape discarded: {} of 4 required points",
                    self.commands.len()
                );
            }
        } else if (self.any_bezier || self.any_quadratic) && polygonal {
            let mut child = Shape::from_vertices(
                flatten_controls(&self.commands, &settings)?,
                Attribs::polygon().with_closure(closure),
            );
            child.set_contour(flatten_controls(&self.contour, &settings)?);
            parent.add_child(child);
        } else {
            self.expand_topology(closure, &mut parent)?;
        }

        Ok(Some(parent))
    }

    /// Group the raw recorded points into sub-shapes per topology mode.
    fn expand_topology(&self, closure: Closure, parent: &mut Shape) -> Result<(), ShapeError> {
        let points: Vec<Point> = self.commands.iter().map(|c| c.anchor()).collect();
        let n = points.len();

        let insufficient = |kind: ShapeMode| ShapeError::InsufficientVertices { kind, count: n };

        match self.kind {
            Some(ShapeMode::Points) => {
                for p in &points {
                    parent.add_child(Shape::from_vertices(vec![*p], Attribs::point()));
                }
            }
            Some(ShapeMode::Lines) => {
                if n < 2 || n % 2 != 0 {
                    return Err(insufficient(ShapeMode::Lines));
                }
                for pair in points.chunks_exact(2) {
                    parent.add_child(Shape::from_vertices(pair.to_vec(), Attribs::path()));
                }
            }
            Some(ShapeMode::Triangles) => {
                if n < 3 {
                    return Err(insufficient(ShapeMode::Triangles));
                }
                for tri in points.chunks_exact(3) {
                    parent.add_child(Shape::from_vertices(tri.to_vec(), Attribs::polygon()));
                }
            }
            Some(ShapeMode::TriangleStrip) => {
                if n < 3 {
                    return Err(insufficient(ShapeMode::TriangleStrip));
                }
                for tri in points.windows(3) {
                    parent.add_child(Shape::from_vertices(tri.to_vec(), Attribs::polygon()));
                }
            }
            Some(ShapeMode::TriangleFan) => {
                if n < 3 {
                    return Err(insufficient(ShapeMode::TriangleFan));
                }
                for i in 1..n - 1 {
                    parent.add_child(Shape::from_vertices(
                        vec![points[0], points[i], points[i + 1]],
                        Attribs::polygon(),
                    ));
                }
            }
            Some(ShapeMode::Quads) => {
                if n < 4 {
                    return Err(insufficient(ShapeMode::Quads));
                }
                for quad in points.chunks_exact(4) {
                    parent.add_child(Shape::from_vertices(quad.to_vec(), Attribs::polygon()));
                }
            }
            Some(ShapeMode::QuadStrip) => {
                if n < 4 {
                    return Err(insufficient(ShapeMode::QuadStrip));
                }
                // Windows of four, stepping by two, with the third and
                // fourth vertex swapped to keep the documented winding.
                let mut i = 0;
                while i + 3 < n {
                    parent.add_child(Shape::from_vertices(
                        vec![points[i], points[i + 1], points[i + 3], points[i + 2]],
                        Attribs::polygon(),
                    ));
                    i += 2;
                }
            }
            Some(ShapeMode::Polygon) | None => {
                let mut child = Shape::from_vertices(
                    points,
                    Attribs::polygon().with_closure(closure),
                );
                child.set_contour(self.contour.iter().map(|c| c.anchor()).collect());
                parent.add_child(child);
            }
        }

        Ok(())
    }
}

/// Flatten a curve-flavored command sequence through Catmull-Rom
/// evaluation.
///
/// Only the interior spans are interpolated: the first emitted anchor is
/// the second recorded point and the walk stops at the second-to-last,
/// each span using its two neighbors as guide points. Fewer than four
/// points flatten to nothing.
fn flatten_spline(commands: &[Command], settings: &CurveSettings) -> Vec<Point> {
    if commands.len() < 4 {
        return Vec::new();
    }

    let pts: Vec<Point> = commands.iter().map(|c| c.anchor()).collect();
    let tightness = settings.tightness();
    let detail = settings.curve_detail();

    let mut out = vec![pts[1]];
    for window in pts.windows(4) {
        let segment = CatmullRomSegment::new(window[0], window[1], window[2], window[3])
            .with_tightness(tightness);
        out.extend(segment.to_cubic_bezier().flattened(detail));
    }

    out
}

/// Flatten a control-flavored command sequence: plain and curve-tagged
/// commands emit their anchors, bezier/quadratic commands expand into
/// `detail + 1` samples from the previously emitted anchor.
fn flatten_controls(
    commands: &[Command],
    settings: &CurveSettings,
) -> Result<Vec<Point>, ShapeError> {
    let detail = settings.curve_detail();

    let mut out: Vec<Point> = Vec::new();
    for command in commands {
        match *command {
            Command::Vertex(p) | Command::CurveVertex(p) => out.push(p),
            Command::BezierVertex { ctrl1, ctrl2, to } => {
                let from = *out.last().ok_or(ShapeError::MissingAnchor)?;
                let segment = CubicBezierSegment {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                };
                out.extend(segment.flattened(detail));
            }
            Command::QuadraticVertex { ctrl, to } => {
                let from = *out.last().ok_or(ShapeError::MissingAnchor)?;
                let segment = QuadraticBezierSegment { from, ctrl, to };
                out.extend(segment.flattened(detail));
            }
        }
    }

    Ok(out)
}
