use crate::scalar::Scalar;
use crate::segment::Segment;
use crate::{Point, Vector};

/// A curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> QuadraticBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from * one_t2 + self.ctrl.to_vector() * S::TWO * one_t * t + self.to.to_vector() * t2
    }

    /// Sample the x coordinate of the curve at t (expecting t between 0 and 1).
    pub fn x(&self, t: S) -> S {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from.x * one_t2 + self.ctrl.x * S::TWO * one_t * t + self.to.x * t2
    }

    /// Sample the y coordinate of the curve at t (expecting t between 0 and 1).
    pub fn y(&self, t: S) -> S {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from.y * one_t2 + self.ctrl.y * S::TWO * one_t * t + self.to.y * t2
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    pub fn derivative(&self, t: S) -> Vector<S> {
        (self.ctrl - self.from) * S::TWO * (S::ONE - t) + (self.to - self.ctrl) * S::TWO * t
    }

    /// Swap the beginning and the end of the segment.
    pub fn flip(&self) -> Self {
        QuadraticBezierSegment {
            from: self.to,
            ctrl: self.ctrl,
            to: self.from,
        }
    }

    /// Elevate this curve to a cubic bézier.
    pub fn to_cubic(&self) -> crate::CubicBezierSegment<S> {
        let two_thirds = S::TWO / S::THREE;
        crate::CubicBezierSegment {
            from: self.from,
            ctrl1: self.from + (self.ctrl - self.from) * two_thirds,
            ctrl2: self.to + (self.ctrl - self.to) * two_thirds,
            to: self.to,
        }
    }
}

impl<S: Scalar> Segment for QuadraticBezierSegment<S> {
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

#[test]
fn endpoint_interpolation() {
    use crate::point;

    let curve = QuadraticBezierSegment {
        from: point(-3.0f32, 4.0),
        ctrl: point(0.0, 12.0),
        to: point(5.0, 4.0),
    };

    assert_eq!(curve.sample(0.0), curve.from);
    assert_eq!(curve.sample(1.0), curve.to);
}

#[test]
fn midpoint() {
    use crate::point;

    let curve = QuadraticBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl: point(1.0, 2.0),
        to: point(2.0, 0.0),
    };

    // (1 - t)² / 4 + 2 t (1 - t) / 2 + t² / 4 at t = 0.5.
    assert_eq!(curve.sample(0.5), point(1.0, 1.0));
}

#[test]
fn cubic_elevation_preserves_shape() {
    use crate::point;

    let curve = QuadraticBezierSegment {
        from: point(1.0f64, 1.0),
        ctrl: point(4.0, 7.0),
        to: point(9.0, 1.0),
    };
    let cubic = curve.to_cubic();

    for i in 0..=10 {
        let t = i as f64 / 10.0;
        let a = curve.sample(t);
        let b = cubic.sample(t);
        assert!((a.x - b.x).abs() < 1e-9);
        assert!((a.y - b.y).abs() < 1e-9);
    }
}
