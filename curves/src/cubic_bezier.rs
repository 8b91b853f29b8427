use crate::scalar::Scalar;
use crate::segment::Segment;
use crate::{Point, Vector};

/// A curve segment defined by four points: the beginning of the segment, two
/// control points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> CubicBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1.to_vector() * S::THREE * one_t2 * t
            + self.ctrl2.to_vector() * S::THREE * one_t * t2
            + self.to.to_vector() * t3
    }

    /// Sample the x coordinate of the curve at t (expecting t between 0 and 1).
    pub fn x(&self, t: S) -> S {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from.x * one_t3
            + self.ctrl1.x * S::THREE * one_t2 * t
            + self.ctrl2.x * S::THREE * one_t * t2
            + self.to.x * t3
    }

    /// Sample the y coordinate of the curve at t (expecting t between 0 and 1).
    pub fn y(&self, t: S) -> S {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from.y * one_t3
            + self.ctrl1.y * S::THREE * one_t2 * t
            + self.ctrl2.y * S::THREE * one_t * t2
            + self.to.y * t3
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    pub fn derivative(&self, t: S) -> Vector<S> {
        (self.ctrl1 - self.from) * S::THREE * (S::ONE - t) * (S::ONE - t)
            + (self.ctrl2 - self.ctrl1) * S::SIX * (S::ONE - t) * t
            + (self.to - self.ctrl2) * S::THREE * t * t
    }

    /// Sample the x coordinate of the curve's derivative at t (expecting t between 0 and 1).
    pub fn dx(&self, t: S) -> S {
        self.derivative(t).x
    }

    /// Sample the y coordinate of the curve's derivative at t (expecting t between 0 and 1).
    pub fn dy(&self, t: S) -> S {
        self.derivative(t).y
    }

    /// Swap the beginning and the end of the segment.
    pub fn flip(&self) -> Self {
        CubicBezierSegment {
            from: self.to,
            ctrl1: self.ctrl2,
            ctrl2: self.ctrl1,
            to: self.from,
        }
    }
}

impl<S: Scalar> Segment for CubicBezierSegment<S> {
    type Scalar = S;
    fn from(&self) -> Point<S> {
        self.from
    }
    fn to(&self) -> Point<S> {
        self.to
    }
    fn sample(&self, t: S) -> Point<S> {
        self.sample(t)
    }
    fn derivative(&self, t: S) -> Vector<S> {
        self.derivative(t)
    }
}

#[cfg(test)]
fn fuzzy_eq_point<S: Scalar>(a: Point<S>, b: Point<S>, eps: S) {
    assert!((a.x - b.x).abs() < eps, "{:?} != {:?}", a, b);
    assert!((a.y - b.y).abs() < eps, "{:?} != {:?}", a, b);
    assert!((a.z - b.z).abs() < eps, "{:?} != {:?}", a, b);
}

#[test]
fn endpoint_interpolation() {
    use crate::point;

    let curve = CubicBezierSegment {
        from: point(1.0f32, 2.0),
        ctrl1: point(3.0, 5.0),
        ctrl2: point(7.0, -1.0),
        to: point(10.0, 2.0),
    };

    assert_eq!(curve.sample(0.0), curve.from);
    assert_eq!(curve.sample(1.0), curve.to);
    assert_eq!(curve.x(0.0), curve.from.x);
    assert_eq!(curve.y(1.0), curve.to.y);
}

#[test]
fn sample_against_bernstein() {
    use crate::point;

    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.0, 10.0),
        ctrl2: point(10.0, 10.0),
        to: point(10.0, 0.0),
    };

    // Midpoint of a symmetric curve.
    fuzzy_eq_point(curve.sample(0.5), point(5.0, 7.5), 1e-9);
}

#[test]
fn derivative_endpoints() {
    use crate::point;

    let curve = CubicBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl1: point(1.0, 3.0),
        ctrl2: point(4.0, 3.0),
        to: point(5.0, 0.0),
    };

    // The derivative at the endpoints is three times the vector to/from
    // the adjacent control point.
    let d0 = curve.derivative(0.0);
    let d1 = curve.derivative(1.0);
    assert_eq!(d0, (curve.ctrl1 - curve.from) * 3.0);
    assert_eq!(d1, (curve.to - curve.ctrl2) * 3.0);
}

#[test]
fn flip() {
    use crate::point;

    let curve = CubicBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl1: point(1.0, 1.0),
        ctrl2: point(2.0, -1.0),
        to: point(3.0, 0.0),
    };

    let flipped = curve.flip();
    fuzzy_eq_point(flipped.sample(0.25), curve.sample(0.75), 1e-5);
}
