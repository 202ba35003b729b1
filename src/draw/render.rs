//! Cairo-based rendering functions for shapes and preview helpers.

use super::color::Color;
use super::shape::Shape;
use crate::util::Point;

/// Renders the dotted background grid.
///
/// Fills a single pixel every `spacing` pixels in both directions, starting
/// one spacing in from the top-left corner. Should be called after clearing
/// the canvas and before rendering shapes.
pub fn render_dot_grid(ctx: &cairo::Context, width: u32, height: u32, spacing: f64, color: Color) {
    if spacing <= 0.0 {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);

    let mut x = spacing;
    while x < width as f64 {
        let mut y = spacing;
        while y < height as f64 {
            ctx.rectangle(x, y, 1.0, 1.0);
            y += spacing;
        }
        x += spacing;
    }

    let _ = ctx.fill();
}

/// Renders all shapes in a collection to a Cairo context.
///
/// Shapes are drawn in the order they appear (first shape = bottom layer).
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape]) {
    for shape in shapes {
        shape.render(ctx);
    }
}

/// Render a straight segment between two points.
pub fn render_line(ctx: &cairo::Context, origin: Point, dest: Point, color: Color, thick: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(origin.x, origin.y);
    ctx.line_to(dest.x, dest.y);
    let _ = ctx.stroke();
}

/// Render an arc sweeping from `start_angle` to `end_angle` around `origin`.
///
/// Cairo draws from the start angle towards the end angle in increasing-angle
/// direction, which matches the sweep semantics of the compass tool.
pub fn render_arc(
    ctx: &cairo::Context,
    origin: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    color: Color,
    thick: f64,
) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.new_path();
    ctx.arc(origin.x, origin.y, radius, start_angle, end_angle);
    let _ = ctx.stroke();
}

/// Render the full construction circle shown while a compass gesture is in
/// progress.
pub fn render_guide_circle(
    ctx: &cairo::Context,
    origin: Point,
    radius: f64,
    color: Color,
    thick: f64,
) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);

    ctx.new_path();
    ctx.arc(origin.x, origin.y, radius, 0.0, 2.0 * std::f64::consts::PI);
    let _ = ctx.stroke();
}

/// Renders a short textual readout (distance, angle, coordinates) at a point.
///
/// Uses the Cairo toy text API; the readout is transient preview feedback, so
/// measurement failures are simply ignored.
pub fn render_readout(ctx: &cairo::Context, at: Point, text: &str, font_size: f64, color: Color) {
    ctx.set_font_size(font_size);
    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.move_to(at.x, at.y);
    let _ = ctx.show_text(text);
    ctx.new_path();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};

    fn surface_with_context() -> (cairo::ImageSurface, cairo::Context) {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 120, 120).unwrap();
        let ctx = cairo::Context::new(&surface).unwrap();
        (surface, ctx)
    }

    fn has_pixels(surface: &mut cairo::ImageSurface) -> bool {
        surface
            .data()
            .map(|data| data.iter().any(|byte| *byte != 0))
            .unwrap_or(false)
    }

    #[test]
    fn dot_grid_fills_pixels() {
        let (mut surface, ctx) = surface_with_context();
        render_dot_grid(&ctx, 120, 120, 20.0, WHITE);
        drop(ctx);
        assert!(has_pixels(&mut surface));
    }

    #[test]
    fn dot_grid_with_zero_spacing_is_a_no_op() {
        let (mut surface, ctx) = surface_with_context();
        render_dot_grid(&ctx, 120, 120, 0.0, WHITE);
        drop(ctx);
        assert!(!has_pixels(&mut surface));
    }

    #[test]
    fn guide_circle_strokes_pixels() {
        let (mut surface, ctx) = surface_with_context();
        render_guide_circle(&ctx, Point::new(60.0, 60.0), 40.0, BLACK, 1.0);
        drop(ctx);
        assert!(has_pixels(&mut surface));
    }

    #[test]
    fn readout_draws_text() {
        let (mut surface, ctx) = surface_with_context();
        render_readout(&ctx, Point::new(20.0, 60.0), "42px", 14.0, WHITE);
        drop(ctx);
        assert!(has_pixels(&mut surface));
    }
}
