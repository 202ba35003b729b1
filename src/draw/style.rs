//! Stroke styling shared by committed shapes and live previews.

use super::color::{BLACK, Color};

/// Current drawing style of the session.
///
/// Tools receive this when rendering their preview and when a gesture is
/// committed, so the preview and the final shape always agree on appearance.
#[derive(Debug, Clone)]
pub struct InkStyle {
    /// Stroke color for committed geometry and previews
    pub ink: Color,
    /// Color for helper geometry (construction circle, guide lines)
    pub guide: Color,
    /// Stroke thickness for committed geometry in pixels
    pub thickness: f64,
    /// Stroke thickness for helper geometry in pixels
    pub guide_thickness: f64,
    /// Font size for distance/angle readouts in points
    pub readout_font_size: f64,
}

impl Default for InkStyle {
    fn default() -> Self {
        Self {
            ink: BLACK,
            guide: Color {
                r: 0.87,
                g: 0.87,
                b: 0.87,
                a: 1.0,
            },
            thickness: 2.0,
            guide_thickness: 1.0,
            readout_font_size: 14.0,
        }
    }
}
