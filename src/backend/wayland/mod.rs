//! Wayland backend using wlr-layer-shell for the drawing overlay.

mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
