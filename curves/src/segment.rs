use crate::scalar::Scalar;
use crate::{Point, Vector};

/// Common interface for parametric curve segments.
pub trait Segment: Copy {
    type Scalar: Scalar;

    /// Start of the segment.
    fn from(&self) -> Point<Self::Scalar>;

    /// End of the segment.
    fn to(&self) -> Point<Self::Scalar>;

    /// Sample the segment at t (expecting t between 0 and 1).
    fn sample(&self, t: Self::Scalar) -> Point<Self::Scalar>;

    /// Sample the segment's derivative at t (expecting t between 0 and 1).
    fn derivative(&self, t: Self::Scalar) -> Vector<Self::Scalar>;

    /// Returns an iterator over `detail + 1` uniformly spaced samples of
    /// the segment, the first at `t = 0` and the last at `t = 1`.
    ///
    /// A detail of zero is treated as one.
    fn flattened(&self, detail: u32) -> Samples<Self> {
        Samples::new(*self, detail)
    }
}

/// An iterator over uniformly spaced samples of a segment.
pub struct Samples<T> {
    segment: T,
    steps: u32,
    i: u32,
}

impl<T: Segment> Samples<T> {
    pub fn new(segment: T, detail: u32) -> Self {
        Samples {
            segment,
            steps: detail.max(1),
            i: 0,
        }
    }
}

impl<T: Segment> Iterator for Samples<T> {
    type Item = Point<T::Scalar>;

    fn next(&mut self) -> Option<Point<T::Scalar>> {
        if self.i > self.steps {
            return None;
        }

        let t = T::Scalar::value(self.i as f32) / T::Scalar::value(self.steps as f32);
        self.i += 1;

        Some(self.segment.sample(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1 - self.i) as usize;
        (remaining, Some(remaining))
    }
}

#[test]
fn flattened_sample_count() {
    use crate::{point, CubicBezierSegment};

    let curve = CubicBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl1: point(1.0, 1.0),
        ctrl2: point(2.0, 1.0),
        to: point(3.0, 0.0),
    };

    assert_eq!(curve.flattened(20).count(), 21);
    assert_eq!(curve.flattened(1).count(), 2);
    // Zero detail degrades to a single straight step.
    assert_eq!(curve.flattened(0).count(), 2);

    let samples: Vec<_> = curve.flattened(4).collect();
    assert_eq!(samples.first(), Some(&curve.from));
    assert_eq!(samples.last(), Some(&curve.to));
}
