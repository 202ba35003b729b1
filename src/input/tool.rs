//! Tool capability trait and the name-keyed tool registry.

use crate::draw::{InkStyle, Shape};
use crate::util::Point;

/// Outcome of a pointer transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The gesture is still in progress, or the event did not apply to the
    /// current phase.
    InProgress,
    /// The gesture completed; the session must call [`Tool::finalize`]
    /// exactly once to retrieve the committed shape.
    Complete,
}

/// A drawing tool driven by pointer events.
///
/// Every tool is a state machine: pointer transitions accumulate geometric
/// parameters phase by phase, `on_frame` renders the live preview for the
/// current phase, and `finalize` produces the committed [`Shape`] once a
/// transition has returned [`Transition::Complete`].
///
/// Transition functions are total: an event that does not apply to the
/// current phase is a no-op. They never panic and never corrupt state.
pub trait Tool {
    /// Registry name of the tool, e.g. `"compass"`.
    fn name(&self) -> &'static str;

    /// Short label of the current phase for the status bar, e.g. `"radius"`.
    fn phase_label(&self) -> &'static str;

    /// Pointer button pressed at `point`.
    fn on_pointer_down(&mut self, point: Point) -> Transition;

    /// Pointer moved to `point`.
    fn on_pointer_move(&mut self, point: Point) -> Transition;

    /// Pointer button released at `point`.
    fn on_pointer_up(&mut self, point: Point) -> Transition;

    /// Renders the live preview for the current phase, including helper
    /// geometry and textual readouts. No-op while idle (apart from tools
    /// that track the hovering cursor).
    fn on_frame(&self, ctx: &cairo::Context, style: &InkStyle);

    /// Returns the shape of the just-completed gesture, styled with the
    /// session's current ink.
    ///
    /// Only meaningful directly after a transition returned
    /// [`Transition::Complete`]; returns `None` when called out of protocol.
    fn finalize(&mut self, style: &InkStyle) -> Option<Shape>;

    /// Resets the tool to its idle phase, discarding any in-progress
    /// gesture. Called whenever the tool is (re)selected; idempotent.
    fn on_activate(&mut self);
}

type ToolFactory = fn() -> Box<dyn Tool>;

/// Name-keyed registry mapping tool names to constructors.
pub struct ToolRegistry {
    entries: Vec<(&'static str, ToolFactory)>,
}

impl ToolRegistry {
    /// Builds the registry with the built-in tools.
    pub fn with_default_tools() -> Self {
        Self {
            entries: vec![
                ("compass", || Box::new(super::compass::CompassTool::new())),
                ("line", || Box::new(super::line::LineTool::new())),
            ],
        }
    }

    /// Instantiates the tool registered under `name` (case-insensitive).
    ///
    /// Returns `None` for unknown names; callers keep their current tool in
    /// that case.
    pub fn create(&self, name: &str) -> Option<Box<dyn Tool>> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, factory)| factory())
    }

    /// Registered tool names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::with_default_tools()
    }
}
