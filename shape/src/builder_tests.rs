mod tests {
    use crate::builder::{EndMode, ShapeBuilder, ShapeMode};
    use crate::context::DrawingContext;
    use crate::math::point;
    use crate::shape::{Closure, ShapeKind};
    use crate::ShapeError;

    fn line_session(count: usize) -> ShapeBuilder {
        let mut builder = ShapeBuilder::new(Some(ShapeMode::Lines));
        for i in 0..count {
            builder.vertex(i as f32, 0.0);
        }
        builder
    }

    #[test]
    fn empty_session_is_a_no_op() {
        let ctx = DrawingContext::new();
        let builder = ShapeBuilder::new(None);
        assert!(builder.build(&ctx, EndMode::Close).unwrap().is_none());
    }

    #[test]
    fn disabled_style_is_a_no_op() {
        let mut ctx = DrawingContext::new();
        ctx.style_mut().fill_enabled = false;
        ctx.style_mut().stroke_enabled = false;

        let mut builder = ShapeBuilder::new(None);
        builder.vertex(0.0, 0.0);
        builder.vertex(1.0, 1.0);

        assert!(builder.build(&ctx, EndMode::Open).unwrap().is_none());
    }

    #[test]
    fn lines_require_full_pairs() {
        let ctx = DrawingContext::new();

        let result = line_session(3).build(&ctx, EndMode::Open);
        assert_eq!(
            result.unwrap_err(),
            ShapeError::InsufficientVertices {
                kind: ShapeMode::Lines,
                count: 3,
            }
        );

        let shape = line_session(4).build(&ctx, EndMode::Open).unwrap().unwrap();
        assert_eq!(shape.child_count(), 2);
        assert!(shape.vertices().is_empty());
        for child in shape.children() {
            assert_eq!(child.attribs().kind, ShapeKind::Path);
            assert_eq!(child.vertices().len(), 2);
        }
    }

    #[test]
    fn triangle_fan_expansion() {
        let ctx = DrawingContext::new();

        let mut builder = ShapeBuilder::new(Some(ShapeMode::TriangleFan));
        let a = point(0.0, 0.0);
        let b = point(10.0, 0.0);
        let c = point(10.0, 10.0);
        let d = point(0.0, 10.0);
        for p in [a, b, c, d].iter() {
            builder.vertex(p.x, p.y);
        }

        let shape = builder.build(&ctx, EndMode::Open).unwrap().unwrap();
        assert_eq!(shape.child_count(), 2);
        assert_eq!(shape.children()[0].vertices(), &[a, b, c]);
        assert_eq!(shape.children()[1].vertices(), &[a, c, d]);
    }

    #[test]
    fn triangles_drop_the_remainder() {
        let ctx = DrawingContext::new();

        let mut builder = ShapeBuilder::new(Some(ShapeMode::Triangles));
        for i in 0..7 {
            builder.vertex(i as f32, 1.0);
        }

        let shape = builder.build(&ctx, EndMode::Open).unwrap().unwrap();
        assert_eq!(shape.child_count(), 2);

        let mut short = ShapeBuilder::new(Some(ShapeMode::Triangles));
        short.vertex(0.0, 0.0);
        short.vertex(1.0, 0.0);
        assert!(short.build(&ctx, EndMode::Open).is_err());
    }

    #[test]
    fn triangle_strip_slides() {
        let ctx = DrawingContext::new();

        let mut builder = ShapeBuilder::new(Some(ShapeMode::TriangleStrip));
        for i in 0..5 {
            builder.vertex(i as f32, (i % 2) as f32);
        }

        let shape = builder.build(&ctx, EndMode::Open).unwrap().unwrap();
        assert_eq!(shape.child_count(), 3);
    }

    #[test]
    fn points_expand_one_child_per_point() {
        let ctx = DrawingContext::new();

        let mut builder = ShapeBuilder::new(Some(ShapeMode::Points));
        builder.vertex(0.0, 0.0);
        builder.vertex(5.0, 5.0);
        builder.vertex(9.0, 1.0);

        let shape = builder.build(&ctx, EndMode::Open).unwrap().unwrap();
        assert_eq!(shape.child_count(), 3);
        for child in shape.children() {
            assert_eq!(child.attribs().kind, ShapeKind::Point);
            assert_eq!(child.vertices().len(), 1);
        }
    }

    #[test]
    fn quads_and_quad_strip() {
        let ctx = DrawingContext::new();

        let mut builder = ShapeBuilder::new(Some(ShapeMode::Quads));
        for i in 0..8 {
            builder.vertex(i as f32, 0.0);
        }
        let shape = builder.build(&ctx, EndMode::Open).unwrap().unwrap();
        assert_eq!(shape.child_count(), 2);

        // The strip swaps the third and fourth vertex of each window.
        let mut strip = ShapeBuilder::new(Some(ShapeMode::QuadStrip));
        let pts = [
            point(0.0, 0.0),
            point(0.0, 1.0),
            point(1.0, 0.0),
            point(1.0, 1.0),
            point(2.0, 0.0),
            point(2.0, 1.0),
        ];
        for p in pts.iter() {
            strip.vertex(p.x, p.y);
        }
        let shape = strip.build(&ctx, EndMode::Open).unwrap().unwrap();
        assert_eq!(shape.child_count(), 2);
        assert_eq!(shape.children()[0].vertices(), &[pts[0], pts[1], pts[3], pts[2]]);
        assert_eq!(shape.children()[1].vertices(), &[pts[2], pts[3], pts[5], pts[4]]);

        let mut short = ShapeBuilder::new(Some(ShapeMode::QuadStrip));
        for i in 0..3 {
            short.vertex(i as f32, 0.0);
        }
        assert!(short.build(&ctx, EndMode::Open).is_err());
    }

    #[test]
    fn close_appends_the_first_vertex() {
        let ctx = DrawingContext::new();

        let mut builder = ShapeBuilder::new(None);
        builder.vertex(0.0, 0.0);
        builder.vertex(10.0, 0.0);
        builder.vertex(10.0, 10.0);

        let shape = builder.build(&ctx, EndMode::Close).unwrap().unwrap();
        assert_eq!(shape.child_count(), 1);

        let child = &shape.children()[0];
        assert_eq!(child.attribs().closure, Closure::Closed);
        assert_eq!(child.vertices().len(), 4);
        assert_eq!(child.vertices().first(), child.vertices().last());
    }

    #[test]
    fn open_polygon_stays_open() {
        let ctx = DrawingContext::new();

        let mut builder = ShapeBuilder::new(Some(ShapeMode::Polygon));
        builder.vertex(0.0, 0.0);
        builder.vertex(10.0, 0.0);
        builder.vertex(10.0, 10.0);

        let shape = builder.build(&ctx, EndMode::Open).unwrap().unwrap();
        let child = &shape.children()[0];
        assert_eq!(child.attribs().closure, Closure::Open);
        assert_eq!(child.vertices().len(), 3);
    }

    #[test]
    fn catmull_rom_four_points() {
        let mut ctx = DrawingContext::new();
        ctx.set_curve_detail(12);

        let mut builder = ShapeBuilder::new(None);
        builder.curve_vertex(0.0, 0.0);
        builder.curve_vertex(10.0, 0.0);
        builder.curve_vertex(20.0, 5.0);
        builder.curve_vertex(30.0, 5.0);

        let shape = builder.build(&ctx, EndMode::Open).unwrap().unwrap();
        assert_eq!(shape.child_count(), 1);

        // One interior span: the 2nd point, then detail + 1 samples with
        // the leading duplicate dropped by sanitization.
        let child = &shape.children()[0];
        assert_eq!(child.vertices().len(), 13);
        assert_eq!(child.vertices().first(), Some(&point(10.0, 0.0)));
        assert_eq!(child.vertices().last(), Some(&point(20.0, 5.0)));
    }

    #[test]
    fn too_few_curve_points_builds_nothing() {
        let ctx = DrawingContext::new();

        let mut builder = ShapeBuilder::new(None);
        builder.curve_vertex(0.0, 0.0);
        builder.curve_vertex(10.0, 0.0);
        builder.curve_vertex(20.0, 5.0);

        let shape = builder.build(&ctx, EndMode::Open).unwrap().unwrap();
        assert_eq!(shape.child_count(), 0);
    }

    #[test]
    fn bezier_vertices_flatten() {
        let mut ctx = DrawingContext::new();
        ctx.set_curve_detail(10);

        let mut builder = ShapeBuilder::new(None);
        builder.vertex(0.0, 0.0);
        builder.bezier_vertex(5.0, 10.0, 15.0, 10.0, 20.0, 0.0);

        let shape = builder.build(&ctx, EndMode::Open).unwrap().unwrap();
        let child = &shape.children()[0];

        // The anchor plus 11 samples, minus the duplicated span start.
        assert_eq!(child.vertices().len(), 11);
        assert_eq!(child.vertices().first(), Some(&point(0.0, 0.0)));
        assert_eq!(child.vertices().last(), Some(&point(20.0, 0.0)));
    }

    #[test]
    fn quadratic_vertices_flatten() {
        let mut ctx = DrawingContext::new();
        ctx.set_curve_detail(10);

        let mut builder = ShapeBuilder::new(None);
        builder.vertex(0.0, 0.0);
        builder.quadratic_vertex(10.0, 10.0, 20.0, 0.0);
        builder.vertex(30.0, 0.0);

        let shape = builder.build(&ctx, EndMode::Open).unwrap().unwrap();
        let child = &shape.children()[0];

        assert_eq!(child.vertices().len(), 12);
        assert_eq!(child.vertices().last(), Some(&point(30.0, 0.0)));
    }

    #[test]
    fn control_vertex_without_anchor_fails() {
        let ctx = DrawingContext::new();

        let mut builder = ShapeBuilder::new(None);
        builder.bezier_vertex(5.0, 10.0, 15.0, 10.0, 20.0, 0.0);

        assert_eq!(
            builder.build(&ctx, EndMode::Open).unwrap_err(),
            ShapeError::MissingAnchor
        );
    }

    #[test]
    fn contour_records_separately() {
        let ctx = DrawingContext::new();

        let mut builder = ShapeBuilder::new(None);
        builder.vertex(0.0, 0.0);
        builder.vertex(20.0, 0.0);
        builder.vertex(20.0, 20.0);
        builder.vertex(0.0, 20.0);
        builder.begin_contour();
        builder.vertex(5.0, 5.0);
        builder.vertex(5.0, 15.0);
        builder.vertex(15.0, 15.0);
        builder.vertex(15.0, 5.0);
        builder.end_contour();

        assert_eq!(builder.vertex_count(), 4);

        let shape = builder.build(&ctx, EndMode::Close).unwrap().unwrap();
        let child = &shape.children()[0];
        assert_eq!(child.contour().len(), 4);
        assert_eq!(child.vertices().len(), 5);
    }

    #[test]
    fn topology_ignores_curve_flags() {
        let ctx = DrawingContext::new();

        // A curve flavor under a non-polygon topology falls through to
        // the raw dispatch over anchors.
        let mut builder = ShapeBuilder::new(Some(ShapeMode::Points));
        builder.curve_vertex(0.0, 0.0);
        builder.curve_vertex(1.0, 1.0);

        let shape = builder.build(&ctx, EndMode::Open).unwrap().unwrap();
        assert_eq!(shape.child_count(), 2);
    }

    #[test]
    fn failed_build_consumes_the_session() {
        let ctx = DrawingContext::new();

        // The session value is moved into build, so a failed session
        // cannot pollute the next one by construction; a fresh builder
        // starts clean.
        assert!(line_session(3).build(&ctx, EndMode::Open).is_err());
        assert!(line_session(4).build(&ctx, EndMode::Open).unwrap().is_some());
    }
}
