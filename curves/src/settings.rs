//! User-configurable sampling resolution and tightness.

/// Sampling resolution ("detail") and tightness settings used when
/// flattening curves.
///
/// A detail of `n` means a flattened curve span is approximated with
/// `n + 1` samples. Details are clamped to a minimum of 1.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CurveSettings {
    bezier_detail: u32,
    curve_detail: u32,
    tightness: f32,
}

impl CurveSettings {
    /// The default sampling resolution for both bézier and spline curves.
    pub const DEFAULT_DETAIL: u32 = 20;

    pub fn new() -> Self {
        CurveSettings {
            bezier_detail: Self::DEFAULT_DETAIL,
            curve_detail: Self::DEFAULT_DETAIL,
            tightness: 0.0,
        }
    }

    /// Change the resolution used to flatten bézier curves.
    pub fn set_bezier_detail(&mut self, detail: u32) {
        self.bezier_detail = detail.max(1);
    }

    /// Change the resolution used to flatten spline curves.
    pub fn set_curve_detail(&mut self, detail: u32) {
        self.curve_detail = detail.max(1);
    }

    /// Change the tightness used to evaluate spline curves.
    pub fn set_tightness(&mut self, amount: f32) {
        self.tightness = amount;
    }

    pub fn bezier_detail(&self) -> u32 {
        self.bezier_detail
    }

    pub fn curve_detail(&self) -> u32 {
        self.curve_detail
    }

    pub fn tightness(&self) -> f32 {
        self.tightness
    }
}

impl Default for CurveSettings {
    fn default() -> Self {
        CurveSettings::new()
    }
}

#[test]
fn detail_clamped_to_one() {
    let mut settings = CurveSettings::new();
    assert_eq!(settings.bezier_detail(), 20);
    assert_eq!(settings.curve_detail(), 20);
    assert_eq!(settings.tightness(), 0.0);

    settings.set_bezier_detail(0);
    settings.set_curve_detail(0);
    assert_eq!(settings.bezier_detail(), 1);
    assert_eq!(settings.curve_detail(), 1);

    settings.set_bezier_detail(35);
    assert_eq!(settings.bezier_detail(), 35);
}
