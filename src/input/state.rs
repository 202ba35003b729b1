//! Session state: active tool, committed frame, ink style, UI flags.

use crate::draw::{Frame, InkStyle};
use crate::util;

use super::events::{Key, MouseButton};
use super::tool::{Tool, ToolRegistry, Transition};

/// Tool used when the configured or requested name is unknown.
pub const DEFAULT_TOOL: &str = "compass";

/// Main input state containing all drawing session state.
///
/// Owns the active tool, the frame of committed shapes, and the current ink
/// style. Translates backend mouse and keyboard events into tool transitions
/// and performs the commit (finalize plus append to the frame) exactly once
/// per completed gesture.
pub struct InputState {
    /// All committed shapes (the persistent layer)
    pub frame: Frame,
    /// Current stroke/guide/readout styling
    pub style: InkStyle,
    /// Whether user requested to exit the overlay
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Whether the help overlay is currently visible (toggled with F10)
    pub show_help: bool,
    /// Screen width in pixels (set by backend after configuration)
    pub screen_width: u32,
    /// Screen height in pixels (set by backend after configuration)
    pub screen_height: u32,
    /// Currently active tool
    tool: Box<dyn Tool>,
    /// Registry used for tool selection
    registry: ToolRegistry,
}

impl InputState {
    /// Creates the session with the given style and initial tool.
    ///
    /// Unknown tool names fall back to [`DEFAULT_TOOL`] with a warning, so
    /// startup never fails on a bad config value.
    ///
    /// Screen dimensions default to 0 and should be updated by the backend
    /// after surface configuration (see `update_screen_dimensions`).
    pub fn new(style: InkStyle, initial_tool: &str) -> Self {
        let registry = ToolRegistry::with_default_tools();
        let tool = registry.create(initial_tool).unwrap_or_else(|| {
            log::warn!("Unknown tool '{initial_tool}', starting with {DEFAULT_TOOL}");
            registry
                .create(DEFAULT_TOOL)
                .unwrap_or_else(|| Box::new(super::compass::CompassTool::new()))
        });

        Self {
            frame: Frame::new(),
            style,
            should_exit: false,
            needs_redraw: true,
            show_help: false,
            screen_width: 0,
            screen_height: 0,
            tool,
            registry,
        }
    }

    /// Updates screen dimensions after backend configuration.
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    /// The active tool, for status display and preview rendering.
    pub fn active_tool(&self) -> &dyn Tool {
        self.tool.as_ref()
    }

    /// Switches the active tool through the registry.
    ///
    /// Selecting an unknown name is a no-op that keeps the current tool.
    /// Selecting any registered name, including the active tool's own,
    /// installs a fresh instance, discarding an in-progress gesture.
    pub fn select_tool(&mut self, name: &str) {
        match self.registry.create(name) {
            Some(mut tool) => {
                tool.on_activate();
                log::info!("Tool selected: {}", tool.name());
                self.tool = tool;
                self.needs_redraw = true;
            }
            None => {
                log::debug!("Ignoring unknown tool '{name}'");
            }
        }
    }

    /// Processes a mouse button press at surface coordinates.
    ///
    /// Left press drives the active tool; right press cancels the current
    /// gesture (same discard semantics as re-selecting the tool).
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) {
        match button {
            MouseButton::Left => {
                let transition = self.tool.on_pointer_down(util::Point::new(x, y));
                self.after_transition(transition);
            }
            MouseButton::Right => {
                self.tool.on_activate();
                self.needs_redraw = true;
            }
            MouseButton::Middle => {}
        }
    }

    /// Processes mouse motion. Always triggers a redraw since previews and
    /// readouts track the cursor in every phase.
    pub fn on_mouse_motion(&mut self, x: f64, y: f64) {
        let transition = self.tool.on_pointer_move(util::Point::new(x, y));
        self.after_transition(transition);
    }

    /// Processes a mouse button release at surface coordinates.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left {
            return;
        }
        let transition = self.tool.on_pointer_up(util::Point::new(x, y));
        self.after_transition(transition);
    }

    /// Processes a key press event.
    ///
    /// - Escape exits the overlay
    /// - F10 toggles the help overlay
    /// - `c` / `l` select the compass / line tool
    /// - color keys (r, g, b, y, o, p, w, k) change the ink color
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Escape => {
                self.should_exit = true;
            }
            Key::F10 => {
                self.show_help = !self.show_help;
                self.needs_redraw = true;
            }
            Key::Char(c) => match c.to_ascii_lowercase() {
                'c' => self.select_tool("compass"),
                'l' => self.select_tool("line"),
                _ => {
                    if let Some(color) = util::key_to_color(c) {
                        self.style.ink = color;
                        self.needs_redraw = true;
                        log::debug!("Ink color set to {}", util::color_to_name(&color));
                    }
                }
            },
            Key::Unknown => {}
        }
    }

    /// Adjusts the stroke thickness by a delta, clamped to 1.0–20.0 px.
    pub fn adjust_thickness(&mut self, delta: f64) {
        self.style.thickness = (self.style.thickness + delta).clamp(1.0, 20.0);
        self.needs_redraw = true;
        log::debug!("Thickness adjusted to {:.0}px", self.style.thickness);
    }

    /// Renders the active tool's live preview on top of the persistent layer.
    pub fn render_preview(&self, ctx: &cairo::Context) {
        self.tool.on_frame(ctx, &self.style);
    }

    fn after_transition(&mut self, transition: Transition) {
        self.needs_redraw = true;
        if transition == Transition::Complete {
            self.commit();
        }
    }

    /// Retrieves the finished shape from the tool and appends it to the
    /// frame. Called exactly once per completed gesture.
    fn commit(&mut self) {
        match self.tool.finalize(&self.style) {
            Some(shape) => {
                log::debug!("Committed shape #{}: {shape:?}", self.frame.len() + 1);
                self.frame.add_shape(shape);
            }
            None => {
                log::warn!("Tool signalled completion without a finished shape");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Shape;
    use crate::util::Point;

    fn session() -> InputState {
        InputState::new(InkStyle::default(), "line")
    }

    #[test]
    fn line_drag_commits_one_shape() {
        let mut state = session();

        state.on_mouse_press(MouseButton::Left, 10.0, 20.0);
        state.on_mouse_motion(30.0, 40.0);
        state.on_mouse_release(MouseButton::Left, 30.0, 40.0);

        assert_eq!(state.frame.len(), 1);
        match &state.frame.shapes()[0] {
            Shape::Line { origin, dest, .. } => {
                assert_eq!(*origin, Point::new(10.0, 20.0));
                assert_eq!(*dest, Point::new(30.0, 40.0));
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn committed_shape_captures_current_ink() {
        let mut state = session();
        state.on_key_press(Key::Char('g'));

        state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
        state.on_mouse_release(MouseButton::Left, 5.0, 5.0);

        match &state.frame.shapes()[0] {
            Shape::Line { color, .. } => assert_eq!(*color, crate::draw::GREEN),
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn release_without_press_commits_nothing() {
        let mut state = session();

        state.on_mouse_release(MouseButton::Left, 50.0, 50.0);

        assert!(state.frame.is_empty());
        assert_eq!(state.active_tool().phase_label(), "idle");
    }

    #[test]
    fn reselecting_active_tool_discards_gesture() {
        let mut state = session();

        state.on_mouse_press(MouseButton::Left, 10.0, 10.0);
        assert_eq!(state.active_tool().phase_label(), "drawing");

        state.select_tool("line");
        assert_eq!(state.active_tool().phase_label(), "idle");

        // The abandoned press must not leak into the next gesture.
        state.on_mouse_release(MouseButton::Left, 99.0, 99.0);
        assert!(state.frame.is_empty());

        state.on_mouse_press(MouseButton::Left, 1.0, 1.0);
        state.on_mouse_release(MouseButton::Left, 2.0, 2.0);
        assert_eq!(state.frame.len(), 1);
        match &state.frame.shapes()[0] {
            Shape::Line { origin, .. } => assert_eq!(*origin, Point::new(1.0, 1.0)),
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn unknown_tool_selection_keeps_current_tool() {
        let mut state = session();
        state.select_tool("protractor");
        assert_eq!(state.active_tool().name(), "line");
    }

    #[test]
    fn unknown_initial_tool_falls_back_to_default() {
        let state = InputState::new(InkStyle::default(), "bogus");
        assert_eq!(state.active_tool().name(), DEFAULT_TOOL);
    }

    #[test]
    fn right_click_cancels_gesture() {
        let mut state = session();

        state.on_mouse_press(MouseButton::Left, 10.0, 10.0);
        state.on_mouse_press(MouseButton::Right, 10.0, 10.0);
        assert_eq!(state.active_tool().phase_label(), "idle");

        state.on_mouse_release(MouseButton::Left, 20.0, 20.0);
        assert!(state.frame.is_empty());
    }

    #[test]
    fn compass_gesture_commits_arc_through_session() {
        let mut state = InputState::new(InkStyle::default(), "compass");

        state.on_mouse_press(MouseButton::Left, 100.0, 100.0);
        state.on_mouse_motion(150.0, 100.0);
        state.on_mouse_release(MouseButton::Left, 150.0, 100.0);
        state.on_mouse_press(MouseButton::Left, 150.0, 100.0);
        state.on_mouse_motion(100.0, 150.0);
        state.on_mouse_release(MouseButton::Left, 100.0, 150.0);

        assert_eq!(state.frame.len(), 1);
        match &state.frame.shapes()[0] {
            Shape::Arc { radius, .. } => assert_eq!(*radius, 50.0),
            other => panic!("expected an arc, got {other:?}"),
        }
    }

    #[test]
    fn tool_keys_switch_tools() {
        let mut state = session();
        state.on_key_press(Key::Char('c'));
        assert_eq!(state.active_tool().name(), "compass");
        state.on_key_press(Key::Char('L'));
        assert_eq!(state.active_tool().name(), "line");
    }

    #[test]
    fn thickness_adjustment_clamps() {
        let mut state = session();
        state.style.thickness = 19.5;
        state.adjust_thickness(3.0);
        assert_eq!(state.style.thickness, 20.0);
        state.adjust_thickness(-25.0);
        assert_eq!(state.style.thickness, 1.0);
    }

    #[test]
    fn help_toggle_flips_flag() {
        let mut state = session();
        assert!(!state.show_help);
        state.on_key_press(Key::F10);
        assert!(state.show_help);
        state.on_key_press(Key::F10);
        assert!(!state.show_help);
    }
}
