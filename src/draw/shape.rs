//! Shape definitions for compass-and-straightedge constructions.

use super::color::Color;
use super::render;
use crate::util::Point;

/// A committed geometric figure.
///
/// Shapes are produced by a tool when its gesture completes and are immutable
/// from then on; all mutation happens in the tool's working parameters before
/// commit. Each shape carries the ink style it was committed with so frames
/// render identically regardless of later style changes.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Circular arc swept with the compass
    Arc {
        /// Center of the construction circle
        origin: Point,
        /// Radius in pixels, non-negative
        radius: f64,
        /// Angle where the sweep starts, radians
        start_angle: f64,
        /// Angle where the sweep ends, radians; arbitrary sign and range,
        /// no normalization is applied
        end_angle: f64,
        /// Stroke color
        color: Color,
        /// Stroke thickness in pixels
        thick: f64,
    },
    /// Straight segment drawn with the straightedge
    Line {
        /// Starting point
        origin: Point,
        /// Ending point
        dest: Point,
        /// Stroke color
        color: Color,
        /// Stroke thickness in pixels
        thick: f64,
    },
}

impl Shape {
    /// Strokes the shape's final geometry onto a Cairo context.
    ///
    /// Purely a side effect; stroke errors are ignored as elsewhere in the
    /// rendering path. Arcs sweep from `start_angle` to `end_angle` in
    /// Cairo's native increasing-angle direction.
    pub fn render(&self, ctx: &cairo::Context) {
        match self {
            Shape::Arc {
                origin,
                radius,
                start_angle,
                end_angle,
                color,
                thick,
            } => {
                render::render_arc(ctx, *origin, *radius, *start_angle, *end_angle, *color, *thick);
            }
            Shape::Line {
                origin,
                dest,
                color,
                thick,
            } => {
                render::render_line(ctx, *origin, *dest, *color, *thick);
            }
        }
    }
}
