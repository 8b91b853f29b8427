//! # Easel
//!
//! Shape geometry for retained-mode 2D vector drawing.
//!
//! This umbrella crate reexports the easel member crates:
//!
//! - [easel_curves](https://docs.rs/easel_curves/): parametric curve
//!   evaluation (cubic/quadratic bézier, Catmull-Rom).
//! - [easel_shape](https://docs.rs/easel_shape/): the shape geometry
//!   engine — primitive tessellation and vertex-stream shape building.
//!
//! # Examples
//!
//! ```
//! use easel::math::point;
//! use easel::{DrawMode, DrawingContext};
//!
//! let mut ctx = DrawingContext::new();
//!
//! // A rectangle under the default corner mode...
//! let mut rect = ctx.rect(point(10.0, 10.0), 40.0, 20.0, None);
//! assert_eq!(rect.vertices().len(), 4);
//! assert_eq!(rect.faces().len(), 2);
//!
//! // ...and a circle, adaptively tessellated.
//! ctx.set_ellipse_mode(DrawMode::Center);
//! let mut circle = ctx.circle(point(0.0, 0.0), 100.0, None).unwrap();
//! assert!(circle.vertices().len() > 20);
//! ```

pub use easel_curves as curves;
pub use easel_shape as shape;

pub use easel_shape::math;

pub use easel_shape::{
    submit, Arc, ArcStyle, Attribs, Closure, DrawMode, DrawingContext, Edge, EndMode, Face,
    Primitive, RenderSink, Shape, ShapeBuilder, ShapeError, ShapeKind, ShapeMode, StyleState,
};
