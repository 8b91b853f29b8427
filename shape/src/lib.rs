#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! The shape geometry engine of a retained-mode 2D vector-drawing
//! library: primitive tessellation and vertex-stream shape building.
//!
//! This crate is reexported in [easel](https://docs.rs/easel/).
//!
//! # Overview
//!
//! Drawing code describes shapes declaratively — an arc by its center,
//! radii and angles, a free-form polygon as a stream of vertex commands —
//! and this crate turns those descriptions into flat, renderer-ready
//! vertex/edge/face buffers:
//!
//! - [primitives](primitives/index.html): arc/ellipse/circle/rect/square
//!   and the straight-edge constructors, under the configurable
//!   corner-interpretation modes.
//! - [builder](builder/index.html): the begin/vertex/end recording
//!   session and its expansion into concrete sub-shapes per topology
//!   mode.
//! - [shape](shape/index.html): the renderable `Shape` tree with its
//!   lazily-computed derived buffers.
//!
//! Construction never draws. A finished shape tree is handed to the
//! rendering collaborator explicitly with [submit](fn.submit.html).
//!
//! # Examples
//!
//! ```
//! use easel_shape::builder::{EndMode, ShapeBuilder, ShapeMode};
//! use easel_shape::DrawingContext;
//!
//! let ctx = DrawingContext::new();
//!
//! let mut builder = ShapeBuilder::new(Some(ShapeMode::TriangleFan));
//! builder.vertex(0.0, 0.0);
//! builder.vertex(10.0, 0.0);
//! builder.vertex(10.0, 10.0);
//! builder.vertex(0.0, 10.0);
//!
//! let fan = builder.build(&ctx, EndMode::Open).unwrap().unwrap();
//! assert_eq!(fan.child_count(), 2);
//! ```

pub use easel_curves as curves;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
pub mod builder;
#[cfg(test)]
mod builder_tests;
mod context;
pub mod primitives;
pub mod shape;

#[doc(inline)]
pub use crate::arc::{Arc, ArcStyle};
#[doc(inline)]
pub use crate::builder::{EndMode, ShapeBuilder, ShapeMode};
pub use crate::context::{DrawMode, DrawingContext, StyleState};
#[doc(inline)]
pub use crate::primitives::Primitive;
#[doc(inline)]
pub use crate::shape::{Attribs, Closure, Edge, Face, Shape, ShapeKind};

use core::fmt;

pub mod math {
    //! f32 versions of the easel_curves types used everywhere. Most
    //! other easel crates reexport them.

    use crate::curves::euclid;

    /// Alias for `euclid::default::Point3D<f32>`.
    pub type Point = euclid::default::Point3D<f32>;

    /// Alias for `euclid::default::Vector3D<f32>`.
    pub type Vector = euclid::default::Vector3D<f32>;

    /// Alias for `euclid::default::Vector2D<f32>`.
    pub type Vector2 = euclid::default::Vector2D<f32>;

    /// Alias for `euclid::default::Transform3D<f32>`.
    pub type Transform = euclid::default::Transform3D<f32>;

    /// An angle in radians (f32).
    pub type Angle = euclid::Angle<f32>;

    /// Shorthand for `Point::new(x, y, 0.0)`.
    #[inline]
    pub fn point(x: f32, y: f32) -> Point {
        Point::new(x, y, 0.0)
    }

    /// Shorthand for `Point::new(x, y, z)`.
    #[inline]
    pub fn point3(x: f32, y: f32, z: f32) -> Point {
        Point::new(x, y, z)
    }

    /// Shorthand for `Vector::new(x, y, z)`.
    #[inline]
    pub fn vector(x: f32, y: f32, z: f32) -> Vector {
        Vector::new(x, y, z)
    }

    /// Shorthand for `Vector2::new(x, y)`.
    #[inline]
    pub fn vector2(x: f32, y: f32) -> Vector2 {
        Vector2::new(x, y)
    }
}

/// The shape engine's error enumeration.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// The corner-interpretation mode is not meaningful for the requested
    /// primitive (e.g. `Corners` for a square or a circle).
    UnsupportedMode {
        primitive: &'static str,
        mode: DrawMode,
    },
    /// Not enough recorded vertices for the requested topology mode.
    InsufficientVertices { kind: ShapeMode, count: usize },
    /// A control-point command was recorded before any anchor vertex.
    MissingAnchor,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::UnsupportedMode { primitive, mode } => {
                write!(f, "cannot build {} in {:?} mode", primitive, mode)
            }
            ShapeError::InsufficientVertices { kind, count } => {
                write!(f, "insufficient number of vertices ({}) for {:?}", count, kind)
            }
            ShapeError::MissingAnchor => {
                write!(f, "control-point vertex recorded before any anchor vertex")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// The seam between the geometry engine and the rendering collaborator.
///
/// `render` receives a mutable shape so that it can use the lazy
/// edge/face accessors; [submit](fn.submit.html) has already computed
/// them by the time the sink is called.
pub trait RenderSink {
    fn render(&mut self, shape: &mut Shape);
}

/// Hand a finished shape tree to a render sink.
///
/// Visits the tree depth-first, parent before children, computing the
/// derived buffers of each shape before its `render` call.
pub fn submit(shape: &mut Shape, sink: &mut dyn RenderSink) {
    shape.edges();
    shape.faces();
    sink.render(shape);

    for child in shape.children_mut() {
        submit(child, sink);
    }
}
