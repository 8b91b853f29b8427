//! The drawing context: corner-interpretation modes, curve settings,
//! view transform and style enablement, owned explicitly by the caller
//! instead of living in process-wide state.

use crate::curves::CurveSettings;
use crate::math::Transform;

/// How a coordinate + dimensions argument pair maps to an absolute
/// bounding box.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum DrawMode {
    /// The coordinate is a corner, the dimensions are width/height.
    Corner,
    /// The coordinate and the dimensions are two opposite corners.
    Corners,
    /// The coordinate is the center, the dimensions are width/height.
    Center,
    /// The coordinate is the center, the dimensions are half-extents.
    Radius,
}

/// Fill/stroke enablement, mirrored from the rendering collaborator.
///
/// The engine reads these only as an early-exit gate when finishing a
/// vertex-stream session; no drawing happens here.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct StyleState {
    pub fill_enabled: bool,
    pub stroke_enabled: bool,
}

impl Default for StyleState {
    fn default() -> Self {
        StyleState {
            fill_enabled: true,
            stroke_enabled: true,
        }
    }
}

/// The state a drawing session scopes: the active corner-interpretation
/// modes, the curve sampling settings, the current view transform and
/// the style flags.
///
/// Callers own one of these per drawing surface (or push/pop copies for
/// save/restore semantics) and pass it to the primitive constructors
/// and to [ShapeBuilder::build](crate::builder::ShapeBuilder::build).
#[derive(Clone, Debug)]
pub struct DrawingContext {
    rect_mode: DrawMode,
    ellipse_mode: DrawMode,
    curve: CurveSettings,
    view: Transform,
    style: StyleState,
}

impl DrawingContext {
    pub fn new() -> DrawingContext {
        DrawingContext {
            rect_mode: DrawMode::Corner,
            ellipse_mode: DrawMode::Center,
            curve: CurveSettings::new(),
            view: Transform::identity(),
            style: StyleState::default(),
        }
    }

    /// The corner-interpretation mode used by `rect` and `square`.
    pub fn rect_mode(&self) -> DrawMode {
        self.rect_mode
    }

    /// Change the rect and square drawing mode.
    pub fn set_rect_mode(&mut self, mode: DrawMode) {
        self.rect_mode = mode;
    }

    /// The corner-interpretation mode used by `ellipse`, `circle` and `arc`.
    pub fn ellipse_mode(&self) -> DrawMode {
        self.ellipse_mode
    }

    /// Change the ellipse, circle and arc drawing mode.
    pub fn set_ellipse_mode(&mut self, mode: DrawMode) {
        self.ellipse_mode = mode;
    }

    pub fn curve_settings(&self) -> &CurveSettings {
        &self.curve
    }

    /// Change the resolution used to flatten bézier curves.
    pub fn set_bezier_detail(&mut self, detail: u32) {
        self.curve.set_bezier_detail(detail);
    }

    /// Change the resolution used to flatten spline curves.
    pub fn set_curve_detail(&mut self, detail: u32) {
        self.curve.set_curve_detail(detail);
    }

    /// Change the tightness used to evaluate spline curves.
    pub fn set_curve_tightness(&mut self, amount: f32) {
        self.curve.set_tightness(amount);
    }

    /// The view/model transform, used to derive adaptive arc accuracy.
    pub fn view(&self) -> &Transform {
        &self.view
    }

    pub fn set_view(&mut self, view: Transform) {
        self.view = view;
    }

    pub fn style(&self) -> StyleState {
        self.style
    }

    pub fn style_mut(&mut self) -> &mut StyleState {
        &mut self.style
    }
}

impl Default for DrawingContext {
    fn default() -> Self {
        DrawingContext::new()
    }
}

#[test]
fn defaults() {
    let ctx = DrawingContext::new();
    assert_eq!(ctx.rect_mode(), DrawMode::Corner);
    assert_eq!(ctx.ellipse_mode(), DrawMode::Center);
    assert_eq!(ctx.curve_settings().bezier_detail(), 20);
    assert_eq!(ctx.curve_settings().curve_detail(), 20);
    assert!(ctx.style().fill_enabled && ctx.style().stroke_enabled);
}

#[test]
fn save_restore_by_value() {
    let mut ctx = DrawingContext::new();
    let saved = ctx.clone();

    ctx.set_rect_mode(DrawMode::Center);
    ctx.set_curve_detail(5);
    assert_eq!(ctx.rect_mode(), DrawMode::Center);

    // Scoped push/pop is a caller-side clone/assign.
    ctx = saved;
    assert_eq!(ctx.rect_mode(), DrawMode::Corner);
    assert_eq!(ctx.curve_settings().curve_detail(), 20);
}
