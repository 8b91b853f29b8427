//! Primitive shape constructors.
//!
//! All constructors are methods on [DrawingContext](crate::DrawingContext)
//! and are pure: they build a [Shape](crate::Shape) or an
//! [Arc](crate::Arc) and hand it back without drawing anything. Hand the
//! result to [submit](crate::submit) to render it.
//!
//! The corner-interpretation mode of each constructor defaults to the
//! context's active mode (`rect_mode` for rect/square, `ellipse_mode`
//! for ellipse/circle/arc) and can be overridden per call.

use crate::arc::{Arc, ArcStyle};
use crate::context::{DrawMode, DrawingContext};
use crate::curves::{CatmullRomSegment, CubicBezierSegment, Segment};
use crate::math::{point3, vector2, Angle, Point, Vector2};
use crate::shape::{Attribs, Shape};
use crate::ShapeError;

use std::f32::consts::PI;

/// A closed description of a primitive, for the shape factory.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Primitive {
    Point {
        position: Point,
    },
    Line {
        from: Point,
        to: Point,
    },
    Triangle {
        a: Point,
        b: Point,
        c: Point,
    },
    Quad {
        a: Point,
        b: Point,
        c: Point,
        d: Point,
    },
    Rect {
        coordinate: Point,
        dim1: f32,
        dim2: f32,
    },
    Square {
        coordinate: Point,
        side: f32,
    },
    Ellipse {
        coordinate: Point,
        dim1: f32,
        dim2: f32,
    },
    Circle {
        coordinate: Point,
        diameter: f32,
    },
    Arc {
        coordinate: Point,
        width: f32,
        height: f32,
        start: Angle,
        stop: Angle,
        style: ArcStyle,
    },
}

impl DrawingContext {
    /// A single point.
    pub fn point(&self, x: f32, y: f32) -> Shape {
        self.point3(x, y, 0.0)
    }

    /// A single point with an explicit z coordinate.
    pub fn point3(&self, x: f32, y: f32, z: f32) -> Shape {
        Shape::from_vertices(vec![point3(x, y, z)], Attribs::point())
    }

    /// A straight line segment.
    pub fn line(&self, from: Point, to: Point) -> Shape {
        Shape::from_vertices(vec![from, to], Attribs::path())
    }

    /// A triangle.
    pub fn triangle(&self, a: Point, b: Point, c: Point) -> Shape {
        Shape::from_vertices(vec![a, b, c], Attribs::polygon())
    }

    /// A quad from four explicit corners.
    pub fn quad(&self, a: Point, b: Point, c: Point, d: Point) -> Shape {
        Shape::from_vertices(vec![a, b, c, d], Attribs::polygon())
    }

    /// A rectangle.
    ///
    /// `coordinate` is a corner under `Corner`/`Corners`, the center
    /// under `Center`/`Radius`. `dim1`/`dim2` are width/height under
    /// `Corner`/`Center`, half-extents under `Radius`, and the opposite
    /// corner's x/y under `Corners`.
    pub fn rect(&self, coordinate: Point, dim1: f32, dim2: f32, mode: Option<DrawMode>) -> Shape {
        let mode = mode.unwrap_or(self.rect_mode());
        let (corner, width, height) = resolve_corner(coordinate, dim1, dim2, mode);

        let p1 = corner;
        let p2 = point3(p1.x + width, p1.y, p1.z);
        let p3 = point3(p2.x, p2.y + height, p2.z);
        let p4 = point3(p1.x, p3.y, p3.z);
        self.quad(p1, p2, p3, p4)
    }

    /// A square with the given side length.
    ///
    /// Fails in `Corners` mode, which is ambiguous for a single side
    /// length.
    pub fn square(
        &self,
        coordinate: Point,
        side: f32,
        mode: Option<DrawMode>,
    ) -> Result<Shape, ShapeError> {
        let mode = mode.unwrap_or(self.rect_mode());
        if mode == DrawMode::Corners {
            return Err(ShapeError::UnsupportedMode {
                primitive: "square",
                mode,
            });
        }

        Ok(self.rect(coordinate, side, side, Some(mode)))
    }

    /// An elliptic arc sweeping from `start` to `stop`.
    ///
    /// `width`/`height` are the extents of the parent ellipse under
    /// `Corner`/`Center` modes and its radii under `Radius`; `Corners`
    /// is not meaningful for arcs and fails.
    pub fn arc(
        &self,
        coordinate: Point,
        width: f32,
        height: f32,
        start: Angle,
        stop: Angle,
        style: ArcStyle,
        mode: Option<DrawMode>,
    ) -> Result<Arc, ShapeError> {
        let mode = mode.unwrap_or(self.ellipse_mode());
        let (center, radii) = resolve_radii("arc", coordinate, width, height, mode)?;

        Ok(Arc::new(center, radii, start, stop, style, *self.view()))
    }

    /// A full ellipse, built as a closed (chord) arc over a whole turn.
    pub fn ellipse(
        &self,
        coordinate: Point,
        dim1: f32,
        dim2: f32,
        mode: Option<DrawMode>,
    ) -> Result<Arc, ShapeError> {
        let mode = mode.unwrap_or(self.ellipse_mode());

        // Corners hands us the opposite corner; fold it into the corner
        // form before delegating.
        let (coordinate, width, height, mode) = if mode == DrawMode::Corners {
            (
                coordinate,
                dim1 - coordinate.x,
                dim2 - coordinate.y,
                DrawMode::Corner,
            )
        } else {
            (coordinate, dim1, dim2, mode)
        };

        self.arc(
            coordinate,
            width,
            height,
            Angle::radians(0.0),
            Angle::radians(PI * 2.0),
            ArcStyle::CHORD,
            Some(mode),
        )
    }

    /// A circle.
    ///
    /// `diameter` is the diameter under `Corner`/`Center` modes and the
    /// radius under `Radius`. Fails in `Corners` mode, which is
    /// ambiguous for a single extent.
    pub fn circle(
        &self,
        coordinate: Point,
        diameter: f32,
        mode: Option<DrawMode>,
    ) -> Result<Arc, ShapeError> {
        let mode = mode.unwrap_or(self.ellipse_mode());
        if mode == DrawMode::Corners {
            return Err(ShapeError::UnsupportedMode {
                primitive: "circle",
                mode,
            });
        }

        self.ellipse(coordinate, diameter, diameter, Some(mode))
    }

    /// A bézier path defined by two control points, flattened at the
    /// context's bézier detail.
    pub fn bezier(&self, start: Point, ctrl1: Point, ctrl2: Point, stop: Point) -> Shape {
        let segment = CubicBezierSegment {
            from: start,
            ctrl1,
            ctrl2,
            to: stop,
        };
        let detail = self.curve_settings().bezier_detail();

        Shape::from_vertices(segment.flattened(detail).collect(), Attribs::path())
    }

    /// A Catmull-Rom curve defined by four points, flattened at the
    /// context's curve detail and tightness.
    pub fn curve(&self, p1: Point, p2: Point, p3: Point, p4: Point) -> Shape {
        let segment = CatmullRomSegment::new(p1, p2, p3, p4)
            .with_tightness(self.curve_settings().tightness());
        let detail = self.curve_settings().curve_detail();

        Shape::from_vertices(segment.flattened(detail).collect(), Attribs::path())
    }

    /// The shape factory: builds the described primitive, or an empty
    /// generic shape when no primitive is given.
    pub fn create_shape(&self, primitive: Option<Primitive>) -> Result<Shape, ShapeError> {
        let primitive = match primitive {
            None => return Ok(Shape::new()),
            Some(p) => p,
        };

        match primitive {
            Primitive::Point { position } => Ok(self.point3(position.x, position.y, position.z)),
            Primitive::Line { from, to } => Ok(self.line(from, to)),
            Primitive::Triangle { a, b, c } => Ok(self.triangle(a, b, c)),
            Primitive::Quad { a, b, c, d } => Ok(self.quad(a, b, c, d)),
            Primitive::Rect {
                coordinate,
                dim1,
                dim2,
            } => Ok(self.rect(coordinate, dim1, dim2, None)),
            Primitive::Square { coordinate, side } => self.square(coordinate, side, None),
            Primitive::Ellipse {
                coordinate,
                dim1,
                dim2,
            } => Ok(self.ellipse(coordinate, dim1, dim2, None)?.into_shape()),
            Primitive::Circle {
                coordinate,
                diameter,
            } => Ok(self.circle(coordinate, diameter, None)?.into_shape()),
            Primitive::Arc {
                coordinate,
                width,
                height,
                start,
                stop,
                style,
            } => Ok(self
                .arc(coordinate, width, height, start, stop, style, None)?
                .into_shape()),
        }
    }
}

/// Resolves a coordinate + dimensions pair into an absolute corner and
/// width/height.
fn resolve_corner(coordinate: Point, dim1: f32, dim2: f32, mode: DrawMode) -> (Point, f32, f32) {
    match mode {
        DrawMode::Corner => (coordinate, dim1, dim2),
        DrawMode::Center => (
            point3(coordinate.x - dim1 / 2.0, coordinate.y - dim2 / 2.0, coordinate.z),
            dim1,
            dim2,
        ),
        DrawMode::Radius => (
            point3(coordinate.x - dim1, coordinate.y - dim2, coordinate.z),
            dim1 * 2.0,
            dim2 * 2.0,
        ),
        DrawMode::Corners => (coordinate, dim1 - coordinate.x, dim2 - coordinate.y),
    }
}

/// Resolves a coordinate + extents pair into a center and radii.
fn resolve_radii(
    primitive: &'static str,
    coordinate: Point,
    width: f32,
    height: f32,
    mode: DrawMode,
) -> Result<(Point, Vector2), ShapeError> {
    match mode {
        DrawMode::Corner => Ok((
            point3(
                coordinate.x + width / 2.0,
                coordinate.y + height / 2.0,
                coordinate.z,
            ),
            vector2(width / 2.0, height / 2.0),
        )),
        DrawMode::Center => Ok((coordinate, vector2(width / 2.0, height / 2.0))),
        DrawMode::Radius => Ok((coordinate, vector2(width, height))),
        DrawMode::Corners => Err(ShapeError::UnsupportedMode { primitive, mode }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;

    #[test]
    fn rect_corner_and_center_agree() {
        let ctx = DrawingContext::new();

        let a = ctx.rect(point(10.0, 20.0), 4.0, 2.0, Some(DrawMode::Corner));
        let b = ctx.rect(point(12.0, 21.0), 4.0, 2.0, Some(DrawMode::Center));

        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.vertices().len(), 4);
    }

    #[test]
    fn rect_radius_doubles_extents() {
        let ctx = DrawingContext::new();

        let a = ctx.rect(point(0.0, 0.0), 4.0, 2.0, Some(DrawMode::Center));
        let b = ctx.rect(point(0.0, 0.0), 2.0, 1.0, Some(DrawMode::Radius));

        assert_eq!(a.vertices(), b.vertices());
    }

    #[test]
    fn rect_corners_is_the_opposite_corner() {
        let ctx = DrawingContext::new();

        let a = ctx.rect(point(1.0, 1.0), 5.0, 4.0, Some(DrawMode::Corners));
        let b = ctx.rect(point(1.0, 1.0), 4.0, 3.0, Some(DrawMode::Corner));

        assert_eq!(a.vertices(), b.vertices());
    }

    #[test]
    fn rect_winding() {
        let ctx = DrawingContext::new();
        let r = ctx.rect(point(0.0, 0.0), 3.0, 2.0, Some(DrawMode::Corner));

        assert_eq!(
            r.vertices(),
            &[
                point(0.0, 0.0),
                point(3.0, 0.0),
                point(3.0, 2.0),
                point(0.0, 2.0),
            ]
        );
    }

    #[test]
    fn square_rejects_corners_mode() {
        let ctx = DrawingContext::new();
        let result = ctx.square(point(0.0, 0.0), 5.0, Some(DrawMode::Corners));

        assert_eq!(
            result.unwrap_err(),
            ShapeError::UnsupportedMode {
                primitive: "square",
                mode: DrawMode::Corners,
            }
        );
    }

    #[test]
    fn circle_rejects_corners_mode() {
        let ctx = DrawingContext::new();
        assert!(ctx
            .circle(point(0.0, 0.0), 5.0, Some(DrawMode::Corners))
            .is_err());
    }

    #[test]
    fn arc_rejects_corners_mode() {
        let ctx = DrawingContext::new();
        let result = ctx.arc(
            point(0.0, 0.0),
            4.0,
            4.0,
            Angle::radians(0.0),
            Angle::radians(1.0),
            ArcStyle::OPEN_PIE,
            Some(DrawMode::Corners),
        );
        assert!(result.is_err());
    }

    #[test]
    fn context_mode_is_the_default() {
        let mut ctx = DrawingContext::new();
        let from_default = ctx.rect(point(5.0, 5.0), 2.0, 2.0, None);

        ctx.set_rect_mode(DrawMode::Center);
        let from_center = ctx.rect(point(6.0, 6.0), 2.0, 2.0, None);

        assert_eq!(from_default.vertices(), from_center.vertices());
    }

    #[test]
    fn ellipse_resolves_corners() {
        let ctx = DrawingContext::new();

        // Opposite corners (0,0)..(10,10) is a circle centered at (5,5).
        let mut e = ctx
            .ellipse(point(0.0, 0.0), 10.0, 10.0, Some(DrawMode::Corners))
            .unwrap();
        assert_eq!(e.center(), point(5.0, 5.0));
        assert_eq!(e.radii(), vector2(5.0, 5.0));
        assert!(e.style().chord);

        let n = e.vertices().len();
        assert!(n >= 20);
    }

    #[test]
    fn circle_radius_mode_uses_the_radius() {
        let ctx = DrawingContext::new();

        let a = ctx
            .circle(point(0.0, 0.0), 10.0, Some(DrawMode::Center))
            .unwrap();
        let b = ctx
            .circle(point(0.0, 0.0), 5.0, Some(DrawMode::Radius))
            .unwrap();

        assert_eq!(a.radii(), b.radii());
    }

    #[test]
    fn line_and_point_shapes() {
        let ctx = DrawingContext::new();

        let mut l = ctx.line(point(0.0, 0.0), point(10.0, 0.0));
        assert_eq!(l.vertices().len(), 2);
        assert_eq!(l.edges(), &[[0, 1]]);
        assert!(l.faces().is_empty());

        let mut p = ctx.point(4.0, 2.0);
        assert_eq!(p.vertices(), &[point(4.0, 2.0)]);
        assert!(p.edges().is_empty());
    }

    #[test]
    fn bezier_primitive_honors_detail() {
        let mut ctx = DrawingContext::new();
        ctx.set_bezier_detail(8);

        let b = ctx.bezier(
            point(0.0, 0.0),
            point(1.0, 2.0),
            point(3.0, 2.0),
            point(4.0, 0.0),
        );
        assert_eq!(b.vertices().len(), 9);
        assert_eq!(b.vertices().first(), Some(&point(0.0, 0.0)));
        assert_eq!(b.vertices().last(), Some(&point(4.0, 0.0)));
    }

    #[test]
    fn curve_primitive_spans_interior_points() {
        let mut ctx = DrawingContext::new();
        ctx.set_curve_detail(10);

        let c = ctx.curve(
            point(0.0, 0.0),
            point(1.0, 1.0),
            point(2.0, 1.0),
            point(3.0, 0.0),
        );
        assert_eq!(c.vertices().len(), 11);
        assert_eq!(c.vertices().first(), Some(&point(1.0, 1.0)));
        assert_eq!(c.vertices().last(), Some(&point(2.0, 1.0)));
    }

    #[test]
    fn create_shape_factory() {
        let ctx = DrawingContext::new();

        let empty = ctx.create_shape(None).unwrap();
        assert!(empty.vertices().is_empty() && empty.child_count() == 0);

        let tri = ctx
            .create_shape(Some(Primitive::Triangle {
                a: point(0.0, 0.0),
                b: point(1.0, 0.0),
                c: point(0.0, 1.0),
            }))
            .unwrap();
        assert_eq!(tri.vertices().len(), 3);

        let circle = ctx
            .create_shape(Some(Primitive::Circle {
                coordinate: point(0.0, 0.0),
                diameter: 10.0,
            }))
            .unwrap();
        assert!(circle.vertices().len() > 20);

        assert!(ctx
            .create_shape(Some(Primitive::Square {
                coordinate: point(0.0, 0.0),
                side: -1.0,
            }))
            .is_ok());
    }
}
