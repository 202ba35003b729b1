//! Input handling and the tool state machines.
//!
//! This module translates backend keyboard and mouse events into drawing
//! actions. Each tool is an independent state machine behind the [`Tool`]
//! trait; [`InputState`] owns the active tool, the committed frame, and the
//! current ink style.

pub mod compass;
pub mod events;
pub mod line;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use compass::CompassTool;
pub use events::{Key, MouseButton};
pub use line::LineTool;
pub use state::InputState;
pub use tool::{Tool, ToolRegistry, Transition};
