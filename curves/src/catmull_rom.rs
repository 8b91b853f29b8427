//! Catmull-Rom spline segments.
//!
//! A Catmull-Rom segment interpolates between its two interior points,
//! using the two exterior points to shape the tangents. The `tightness`
//! parameter deforms the spline: 0 is the classic Catmull-Rom spline
//! and 1 degenerates to straight lines between the interior points.

use crate::cubic_bezier::CubicBezierSegment;
use crate::scalar::Scalar;
use crate::segment::Segment;
use crate::{Point, Vector};

/// A spline segment defined by four points, passing through the two
/// interior ones.
///
/// The curve starts at `pts[1]` (t = 0) and ends at `pts[2]` (t = 1);
/// `pts[0]` and `pts[3]` only guide the shape of the curve.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CatmullRomSegment<S> {
    pub pts: [Point<S>; 4],
    pub tightness: S,
}

impl<S: Scalar> CatmullRomSegment<S> {
    /// A segment with the default tightness of zero.
    pub fn new(p1: Point<S>, p2: Point<S>, p3: Point<S>, p4: Point<S>) -> Self {
        CatmullRomSegment {
            pts: [p1, p2, p3, p4],
            tightness: S::ZERO,
        }
    }

    pub fn with_tightness(mut self, tightness: S) -> Self {
        self.tightness = tightness;
        self
    }

    /// The 4×4 spline basis, parameterized by s = 1 - tightness.
    ///
    /// Rows are the coefficients of t³, t², t and 1; columns map to the
    /// four points. With a tightness of zero this is the classic
    /// Catmull-Rom basis matrix.
    fn basis(&self) -> [[S; 4]; 4] {
        let s = S::ONE - self.tightness;
        [
            [
                -s * S::HALF,
                (S::FOUR - s) * S::HALF,
                (s - S::FOUR) * S::HALF,
                s * S::HALF,
            ],
            [s, (s - S::SIX) * S::HALF, S::THREE - s, -s * S::HALF],
            [-s * S::HALF, S::ZERO, s * S::HALF, S::ZERO],
            [S::ZERO, S::ONE, S::ZERO, S::ZERO],
        ]
    }

    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let b = self.basis();
        let t2 = t * t;
        let t3 = t2 * t;

        let mut acc = Vector::new(S::ZERO, S::ZERO, S::ZERO);
        for (j, p) in self.pts.iter().enumerate() {
            let c = t3 * b[0][j] + t2 * b[1][j] + t * b[2][j] + b[3][j];
            acc += p.to_vector() * c;
        }

        acc.to_point()
    }

    /// Sample the x coordinate of the curve at t (expecting t between 0 and 1).
    pub fn x(&self, t: S) -> S {
        self.sample(t).x
    }

    /// Sample the y coordinate of the curve at t (expecting t between 0 and 1).
    pub fn y(&self, t: S) -> S {
        self.sample(t).y
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    pub fn derivative(&self, t: S) -> Vector<S> {
        let b = self.basis();
        let t2 = t * t;

        let mut acc = Vector::new(S::ZERO, S::ZERO, S::ZERO);
        for (j, p) in self.pts.iter().enumerate() {
            let c = S::THREE * t2 * b[0][j] + S::TWO * t * b[1][j] + b[2][j];
            acc += p.to_vector() * c;
        }

        acc
    }

    /// Convert to the equivalent cubic bézier segment.
    ///
    /// The control points are derived from the neighbor points scaled by
    /// s / 6 with s = 1 - tightness, which is the form vertex-stream
    /// flattening uses.
    pub fn to_cubic_bezier(&self) -> CubicBezierSegment<S> {
        let s = S::ONE - self.tightness;
        let [p1, p2, p3, p4] = self.pts;

        CubicBezierSegment {
            from: p2,
            ctrl1: p2 + (p3 - p1) * (s / S::SIX),
            ctrl2: p3 - (p4 - p2) * (s / S::SIX),
            to: p3,
        }
    }
}

impl<S: Scalar> Segment for CatmullRomSegment<S> {
    type Scalar = S;
    fn from(&self) -> Point<S> {
        self.pts[1]
    }
    fn to(&self) -> Point<S> {
        self.pts[2]
    }
    fn sample(&self, t: S) -> Point<S> {
        self.sample(t)
    }
    fn derivative(&self, t: S) -> Vector<S> {
        self.derivative(t)
    }
}

#[test]
fn interpolates_interior_points() {
    use crate::point;

    let curve = CatmullRomSegment::new(
        point(0.0f32, 0.0),
        point(1.0, 2.0),
        point(3.0, 2.0),
        point(4.0, 0.0),
    );

    let start = curve.sample(0.0);
    let end = curve.sample(1.0);
    assert!((start.x - 1.0).abs() < 1e-5 && (start.y - 2.0).abs() < 1e-5);
    assert!((end.x - 3.0).abs() < 1e-5 && (end.y - 2.0).abs() < 1e-5);
}

#[test]
fn default_tightness_basis() {
    use crate::point;

    let curve = CatmullRomSegment::new(
        point(0.0f64, 0.0),
        point(0.0, 0.0),
        point(0.0, 0.0),
        point(0.0, 0.0),
    );

    // With a tightness of zero the basis must match the classic
    // Catmull-Rom matrix.
    let expected = [
        [-0.5, 1.5, -1.5, 0.5],
        [1.0, -2.5, 2.0, -0.5],
        [-0.5, 0.0, 0.5, 0.0],
        [0.0, 1.0, 0.0, 0.0],
    ];
    let basis = curve.basis();
    for i in 0..4 {
        for j in 0..4 {
            assert!((basis[i][j] - expected[i][j]).abs() < 1e-12);
        }
    }
}

#[test]
fn full_tightness_is_linear() {
    use crate::point;

    let curve = CatmullRomSegment::new(
        point(5.0f32, 9.0),
        point(0.0, 0.0),
        point(4.0, 2.0),
        point(-3.0, 7.0),
    )
    .with_tightness(1.0);

    // s = 0 leaves only the linear blend between the interior points.
    let mid = curve.sample(0.5);
    assert!((mid.x - 2.0).abs() < 1e-5);
    assert!((mid.y - 1.0).abs() < 1e-5);
}

#[test]
fn matches_bezier_form() {
    use crate::point;

    let curve = CatmullRomSegment::new(
        point(-1.0f64, 0.0),
        point(0.0, 1.0),
        point(2.0, 1.5),
        point(3.0, 0.0),
    );
    let bezier = curve.to_cubic_bezier();

    for i in 0..=20 {
        let t = i as f64 / 20.0;
        let a = curve.sample(t);
        let b = bezier.sample(t);
        assert!((a.x - b.x).abs() < 1e-9, "t={}: {:?} != {:?}", t, a, b);
        assert!((a.y - b.y).abs() < 1e-9, "t={}: {:?} != {:?}", t, a, b);
    }
}
