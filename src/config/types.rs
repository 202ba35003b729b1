//! Configuration type definitions.

use super::enums::{ColorSpec, StatusPosition};
use crate::draw::InkStyle;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the appearance of tools when the overlay first opens. Ink color
/// and thickness can also be changed at runtime with key and scroll
/// bindings.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Tool active on startup ("compass" or "line"); also overridable with
    /// the --tool command line flag
    #[serde(default = "default_tool")]
    pub default_tool: String,

    /// Stroke color for committed shapes and previews - either a named color
    /// (red, green, blue, yellow, orange, pink, white, black) or an RGB
    /// array like `[255, 0, 0]`
    #[serde(default = "default_ink_color")]
    pub ink_color: ColorSpec,

    /// Color for construction circles and guide lines
    #[serde(default = "default_guide_color")]
    pub guide_color: ColorSpec,

    /// Stroke thickness in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_stroke_thickness")]
    pub stroke_thickness: f64,

    /// Guide line thickness in pixels (valid range: 0.5 - 5.0)
    #[serde(default = "default_guide_thickness")]
    pub guide_thickness: f64,

    /// Font size for distance/angle readouts in points (valid range: 8.0 - 72.0)
    #[serde(default = "default_readout_font_size")]
    pub readout_font_size: f64,

    /// Spacing of the background dot grid in pixels (valid range: 4.0 - 200.0)
    #[serde(default = "default_dot_spacing")]
    pub dot_spacing: f64,

    /// Color of the background dot grid
    #[serde(default = "default_dot_color")]
    pub dot_color: ColorSpec,
}

impl DrawingConfig {
    /// Resolves the configured colors and sizes into the session ink style.
    pub fn ink_style(&self) -> InkStyle {
        InkStyle {
            ink: self.ink_color.to_color(),
            guide: self.guide_color.to_color(),
            thickness: self.stroke_thickness,
            guide_thickness: self.guide_thickness,
            readout_font_size: self.readout_font_size,
        }
    }
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            ink_color: default_ink_color(),
            guide_color: default_guide_color(),
            stroke_thickness: default_stroke_thickness(),
            guide_thickness: default_guide_thickness(),
            readout_font_size: default_readout_font_size(),
            dot_spacing: default_dot_spacing(),
            dot_color: default_dot_color(),
        }
    }
}

/// Performance tuning options.
///
/// These settings control rendering performance and smoothness. Most users
/// won't need to change these from their defaults.
#[derive(Debug, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Number of buffers for buffering (valid range: 2 - 4)
    /// - 2 = double buffering (lower memory, potential tearing)
    /// - 3 = triple buffering (balanced, recommended)
    /// - 4 = quad buffering (highest memory, smoothest)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Enable vsync frame synchronization to prevent tearing
    /// Set to false for lower latency at the cost of potential screen tearing
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

/// UI display preferences.
///
/// Controls the visibility and positioning of on-screen UI elements.
#[derive(Debug, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the status bar displaying current tool, phase, color, and thickness
    #[serde(default = "default_show_status")]
    pub show_status_bar: bool,

    /// Status bar screen position (top-left, top-right, bottom-left, bottom-right)
    #[serde(default = "default_status_position")]
    pub status_bar_position: StatusPosition,

    /// Status bar styling options
    #[serde(default)]
    pub status_bar_style: StatusBarStyle,

    /// Help overlay styling options
    #[serde(default)]
    pub help_overlay_style: HelpOverlayStyle,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_status_bar: default_show_status(),
            status_bar_position: default_status_position(),
            status_bar_style: StatusBarStyle::default(),
            help_overlay_style: HelpOverlayStyle::default(),
        }
    }
}

/// Status bar styling configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusBarStyle {
    /// Font size for status bar text
    #[serde(default = "default_status_font_size")]
    pub font_size: f64,

    /// Padding around status bar text
    #[serde(default = "default_status_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_bg_color")]
    pub bg_color: [f64; 4],

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_text_color")]
    pub text_color: [f64; 4],

    /// Color indicator dot radius
    #[serde(default = "default_status_dot_radius")]
    pub dot_radius: f64,
}

impl Default for StatusBarStyle {
    fn default() -> Self {
        Self {
            font_size: default_status_font_size(),
            padding: default_status_padding(),
            bg_color: default_status_bg_color(),
            text_color: default_status_text_color(),
            dot_radius: default_status_dot_radius(),
        }
    }
}

/// Help overlay styling configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct HelpOverlayStyle {
    /// Font size for help overlay text
    #[serde(default = "default_help_font_size")]
    pub font_size: f64,

    /// Line height for help text
    #[serde(default = "default_help_line_height")]
    pub line_height: f64,

    /// Padding around help box
    #[serde(default = "default_help_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_bg_color")]
    pub bg_color: [f64; 4],

    /// Border color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_border_color")]
    pub border_color: [f64; 4],

    /// Border line width
    #[serde(default = "default_help_border_width")]
    pub border_width: f64,

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_text_color")]
    pub text_color: [f64; 4],
}

impl Default for HelpOverlayStyle {
    fn default() -> Self {
        Self {
            font_size: default_help_font_size(),
            line_height: default_help_line_height(),
            padding: default_help_padding(),
            bg_color: default_help_bg_color(),
            border_color: default_help_border_color(),
            border_width: default_help_border_width(),
            text_color: default_help_text_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_tool() -> String {
    crate::input::state::DEFAULT_TOOL.to_string()
}

fn default_ink_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_guide_color() -> ColorSpec {
    ColorSpec::Rgb([221, 221, 221])
}

fn default_stroke_thickness() -> f64 {
    2.0
}

fn default_guide_thickness() -> f64 {
    1.0
}

fn default_readout_font_size() -> f64 {
    14.0
}

fn default_dot_spacing() -> f64 {
    20.0
}

fn default_dot_color() -> ColorSpec {
    ColorSpec::Rgb([170, 170, 170])
}

fn default_buffer_count() -> u32 {
    3
}

fn default_enable_vsync() -> bool {
    true
}

fn default_show_status() -> bool {
    true
}

fn default_status_position() -> StatusPosition {
    StatusPosition::BottomLeft
}

// Status bar style defaults
fn default_status_font_size() -> f64 {
    16.0
}

fn default_status_padding() -> f64 {
    12.0
}

fn default_status_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.85]
}

fn default_status_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_status_dot_radius() -> f64 {
    5.0
}

// Help overlay style defaults
fn default_help_font_size() -> f64 {
    16.0
}

fn default_help_line_height() -> f64 {
    22.0
}

fn default_help_padding() -> f64 {
    20.0
}

fn default_help_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.85]
}

fn default_help_border_color() -> [f64; 4] {
    [0.3, 0.6, 1.0, 0.9]
}

fn default_help_border_width() -> f64 {
    2.0
}

fn default_help_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}
