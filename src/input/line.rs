//! Line tool: single-phase straightedge.

use crate::draw::{InkStyle, Shape, render_line, render_readout};
use crate::util::Point;

use super::tool::{Tool, Transition};

/// Working parameters of the straightedge.
#[derive(Debug, Clone, PartialEq)]
enum LinePhase {
    Idle,
    /// Button held, dragging the segment end point.
    Drawing { origin: Point, dest: Point },
}

/// Completed segment held between the final transition and `finalize`.
#[derive(Debug, Clone, Copy)]
struct PendingLine {
    origin: Point,
    dest: Point,
}

/// Draws straight segments: press to anchor, drag, release to commit.
pub struct LineTool {
    phase: LinePhase,
    pending: Option<PendingLine>,
}

impl LineTool {
    pub fn new() -> Self {
        Self {
            phase: LinePhase::Idle,
            pending: None,
        }
    }
}

impl Default for LineTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for LineTool {
    fn name(&self) -> &'static str {
        "line"
    }

    fn phase_label(&self) -> &'static str {
        match self.phase {
            LinePhase::Idle => "idle",
            LinePhase::Drawing { .. } => "drawing",
        }
    }

    fn on_pointer_down(&mut self, point: Point) -> Transition {
        if self.phase == LinePhase::Idle {
            self.phase = LinePhase::Drawing {
                origin: point,
                dest: point,
            };
        }
        Transition::InProgress
    }

    fn on_pointer_move(&mut self, point: Point) -> Transition {
        if let LinePhase::Drawing { dest, .. } = &mut self.phase {
            *dest = point;
        }
        Transition::InProgress
    }

    fn on_pointer_up(&mut self, point: Point) -> Transition {
        match self.phase {
            LinePhase::Drawing { origin, .. } => {
                self.pending = Some(PendingLine {
                    origin,
                    dest: point,
                });
                self.phase = LinePhase::Idle;
                Transition::Complete
            }
            LinePhase::Idle => Transition::InProgress,
        }
    }

    fn on_frame(&self, ctx: &cairo::Context, style: &InkStyle) {
        if let LinePhase::Drawing { origin, dest } = self.phase {
            render_line(ctx, origin, dest, style.ink, style.thickness);

            let label = format!("{}", origin.distance_to(dest).round() as i64);
            render_readout(ctx, origin, &label, style.readout_font_size, style.ink);
        }
    }

    fn finalize(&mut self, style: &InkStyle) -> Option<Shape> {
        self.pending.take().map(|line| Shape::Line {
            origin: line.origin,
            dest: line.dest,
            color: style.ink,
            thick: style.thickness,
        })
    }

    fn on_activate(&mut self) {
        self.phase = LinePhase::Idle;
        self.pending = None;
    }
}
