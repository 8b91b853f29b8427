#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]

//! Parametric curve evaluation on top of euclid.
//!
//! This crate is reexported in [easel](https://docs.rs/easel/).
//!
//! # Overview
//!
//! This crate implements the maths to evaluate and flatten:
//!
//! - cubic and quadratic bézier curves,
//! - Catmull-Rom spline segments (with a configurable tightness).
//!
//! All curve types are sampled at a parameter `t` between 0 and 1 and
//! work with 3d points (the z coordinate defaults to zero when curves
//! are built from 2d coordinates, so 2d use is the common case).
//!
//! # Flattening
//!
//! Flattening is the action of approximating a curve with a succession
//! of line segments. The flattening scheme here is detail-driven rather
//! than tolerance-driven: a segment flattened at detail `n` yields
//! `n + 1` uniformly spaced samples, the first at `t = 0` and the last
//! at `t = 1`. The [CurveSettings](settings/struct.CurveSettings.html)
//! value carries the detail and tightness parameters that drawing code
//! threads through to the evaluators.

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod catmull_rom;
pub mod cubic_bezier;
pub mod quadratic_bezier;
mod segment;
pub mod settings;

#[doc(inline)]
pub use crate::catmull_rom::CatmullRomSegment;
#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticBezierSegment;
#[doc(inline)]
pub use crate::segment::{Samples, Segment};
#[doc(inline)]
pub use crate::settings::CurveSettings;

pub use crate::scalar::Scalar;

mod scalar {
    use num_traits::{Float, FloatConst, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const HALF: Self;
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;
        const FOUR: Self;
        const FIVE: Self;
        const SIX: Self;

        const EPSILON: Self;

        fn value(v: f32) -> Self;
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const FIVE: Self = 5.0;
        const SIX: Self = 6.0;

        const EPSILON: Self = 1e-4;

        #[inline]
        fn value(v: f32) -> Self {
            v
        }
    }

    impl Scalar for f64 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const FIVE: Self = 5.0;
        const SIX: Self = 6.0;

        const EPSILON: Self = 1e-8;

        #[inline]
        fn value(v: f32) -> Self {
            v as f64
        }
    }
}

/// Alias for `euclid::default::Point3D`.
pub use euclid::default::Point3D as Point;

/// Alias for `euclid::default::Vector3D`.
pub use euclid::default::Vector3D as Vector;

/// An angle in radians.
pub use euclid::Angle;

/// Shorthand for `Point::new(x, y, 0)`.
#[inline]
pub fn point<S: Scalar>(x: S, y: S) -> Point<S> {
    Point::new(x, y, S::ZERO)
}

/// Shorthand for `Point::new(x, y, z)`.
#[inline]
pub fn point3<S: Scalar>(x: S, y: S, z: S) -> Point<S> {
    Point::new(x, y, z)
}

/// Shorthand for `Vector::new(x, y, z)`.
#[inline]
pub fn vector<S: Scalar>(x: S, y: S, z: S) -> Vector<S> {
    Vector::new(x, y, z)
}
