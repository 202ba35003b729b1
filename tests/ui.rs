use cairo::{Context, ImageSurface};
use waycompass::config::{HelpOverlayStyle, StatusBarStyle, StatusPosition};
use waycompass::draw::{InkStyle, render_dot_grid, render_shapes};
use waycompass::input::{InputState, MouseButton};

fn make_input_state() -> InputState {
    InputState::new(InkStyle::default(), "compass")
}

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

#[test]
fn render_status_bar_draws_for_all_positions() {
    let mut input = make_input_state();
    input.update_screen_dimensions(400, 200);
    let style = StatusBarStyle::default();
    let positions = [
        StatusPosition::TopLeft,
        StatusPosition::TopRight,
        StatusPosition::BottomLeft,
        StatusPosition::BottomRight,
    ];

    for position in positions {
        let (mut surface, ctx) = surface_with_context(400, 200);
        waycompass::ui::render_status_bar(&ctx, &input, position, &style, 400, 200);
        drop(ctx);
        assert!(
            surface_has_pixels(&mut surface),
            "status bar should render pixels for {:?}",
            position
        );
    }
}

#[test]
fn render_help_overlay_draws_pixels() {
    let (mut surface, ctx) = surface_with_context(800, 600);
    waycompass::ui::render_help_overlay(&ctx, &HelpOverlayStyle::default(), 800, 600);
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}

#[test]
fn radius_phase_preview_renders_construction_geometry() {
    let mut input = make_input_state();
    input.on_mouse_press(MouseButton::Left, 100.0, 100.0);
    input.on_mouse_motion(150.0, 100.0);

    let (mut surface, ctx) = surface_with_context(300, 300);
    input.render_preview(&ctx);
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}

#[test]
fn committed_frame_renders_beneath_empty_preview() {
    let mut input = make_input_state();

    // Full compass gesture: quarter arc around (100,100).
    input.on_mouse_press(MouseButton::Left, 100.0, 100.0);
    input.on_mouse_motion(150.0, 100.0);
    input.on_mouse_release(MouseButton::Left, 150.0, 100.0);
    input.on_mouse_press(MouseButton::Left, 150.0, 100.0);
    input.on_mouse_motion(100.0, 150.0);
    input.on_mouse_release(MouseButton::Left, 100.0, 150.0);

    assert_eq!(input.frame.len(), 1);

    let (mut surface, ctx) = surface_with_context(300, 300);
    render_shapes(&ctx, input.frame.shapes());
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}

#[test]
fn dot_grid_background_renders() {
    let (mut surface, ctx) = surface_with_context(200, 200);
    render_dot_grid(
        &ctx,
        200,
        200,
        20.0,
        waycompass::draw::Color {
            r: 0.66,
            g: 0.66,
            b: 0.66,
            a: 1.0,
        },
    );
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}
