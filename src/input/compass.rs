//! Compass tool: four-phase arc construction.

use crate::draw::{InkStyle, Shape, render_arc, render_guide_circle, render_line, render_readout};
use crate::util::{Point, sweep_degrees};

use super::tool::{Tool, Transition};

/// Working parameters of the compass, one variant per phase.
///
/// Each variant carries exactly the fields that are valid in that phase, so
/// no phase can observe a parameter that was never set for it.
#[derive(Debug, Clone, PartialEq)]
enum CompassPhase {
    /// Waiting for the origin to be placed; tracks the hovering cursor as a
    /// floating origin candidate.
    Idle { cursor: Option<Point> },
    /// Button held, dragging out the radius from the fixed origin.
    Radius {
        origin: Point,
        radius_dest: Point,
        radius: f64,
    },
    /// Radius frozen; the arm slides along the construction circle to pick
    /// the start of the arc.
    Arm {
        origin: Point,
        radius_dest: Point,
        radius: f64,
    },
    /// Button held again, sweeping the arc from the fixed start angle.
    Sweep {
        origin: Point,
        radius: f64,
        /// Point on the circle where the sweep starts (frozen arm position)
        radius_dest: Point,
        start_angle: f64,
        /// Point on the circle at the current end angle (moving guide arm)
        angle_dest: Point,
        end_angle: f64,
    },
}

/// Completed arc parameters held between the final transition and `finalize`.
#[derive(Debug, Clone, Copy)]
struct PendingArc {
    origin: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
}

/// Draws circular arcs the way a physical compass does: plant the needle,
/// pull out the radius, place the pencil arm, sweep.
pub struct CompassTool {
    phase: CompassPhase,
    pending: Option<PendingArc>,
}

impl CompassTool {
    pub fn new() -> Self {
        Self {
            phase: CompassPhase::Idle { cursor: None },
            pending: None,
        }
    }
}

impl Default for CompassTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for CompassTool {
    fn name(&self) -> &'static str {
        "compass"
    }

    fn phase_label(&self) -> &'static str {
        match self.phase {
            CompassPhase::Idle { .. } => "idle",
            CompassPhase::Radius { .. } => "radius",
            CompassPhase::Arm { .. } => "arm",
            CompassPhase::Sweep { .. } => "sweep",
        }
    }

    fn on_pointer_down(&mut self, point: Point) -> Transition {
        match self.phase {
            CompassPhase::Idle { .. } => {
                self.phase = CompassPhase::Radius {
                    origin: point,
                    radius_dest: point,
                    radius: 0.0,
                };
            }
            CompassPhase::Arm {
                origin,
                radius_dest,
                radius,
            } => {
                let start_angle = origin.angle_to(radius_dest);
                self.phase = CompassPhase::Sweep {
                    origin,
                    radius,
                    radius_dest,
                    start_angle,
                    angle_dest: radius_dest,
                    end_angle: start_angle,
                };
            }
            // Button already held in these phases; nothing to do.
            CompassPhase::Radius { .. } | CompassPhase::Sweep { .. } => {}
        }
        Transition::InProgress
    }

    fn on_pointer_move(&mut self, point: Point) -> Transition {
        match &mut self.phase {
            CompassPhase::Idle { cursor } => {
                *cursor = Some(point);
            }
            CompassPhase::Radius {
                origin,
                radius_dest,
                radius,
            } => {
                *radius_dest = point;
                *radius = origin.distance_to(point);
            }
            CompassPhase::Arm {
                origin,
                radius_dest,
                radius,
            } => {
                // The raw cursor may be anywhere; only its angle matters.
                // The arm stays constrained to the frozen circle.
                let angle = origin.angle_to(point);
                *radius_dest = origin.point_at_angle(*radius, angle);
            }
            CompassPhase::Sweep {
                origin,
                radius,
                angle_dest,
                end_angle,
                ..
            } => {
                *end_angle = origin.angle_to(point);
                *angle_dest = origin.point_at_angle(*radius, *end_angle);
            }
        }
        Transition::InProgress
    }

    fn on_pointer_up(&mut self, point: Point) -> Transition {
        match self.phase {
            CompassPhase::Radius { origin, .. } => {
                // Freeze the radius at the release point.
                let radius = origin.distance_to(point);
                self.phase = CompassPhase::Arm {
                    origin,
                    radius_dest: point,
                    radius,
                };
                Transition::InProgress
            }
            CompassPhase::Sweep {
                origin,
                radius,
                start_angle,
                end_angle,
                ..
            } => {
                self.pending = Some(PendingArc {
                    origin,
                    radius,
                    start_angle,
                    end_angle,
                });
                self.phase = CompassPhase::Idle { cursor: None };
                Transition::Complete
            }
            // A release with no matching press in this phase is ignored.
            CompassPhase::Idle { .. } | CompassPhase::Arm { .. } => Transition::InProgress,
        }
    }

    fn on_frame(&self, ctx: &cairo::Context, style: &InkStyle) {
        match &self.phase {
            CompassPhase::Idle { cursor } => {
                if let Some(cursor) = *cursor {
                    let label = format!("({}, {})", cursor.x.round() as i64, cursor.y.round() as i64);
                    render_readout(ctx, cursor, &label, style.readout_font_size, style.ink);
                }
            }
            CompassPhase::Radius {
                origin,
                radius_dest,
                radius,
            } => {
                render_line(ctx, *origin, *radius_dest, style.ink, style.thickness);
                render_guide_circle(ctx, *origin, *radius, style.guide, style.guide_thickness);

                let label = format!("{}", radius.round() as i64);
                render_readout(ctx, *origin, &label, style.readout_font_size, style.ink);
            }
            CompassPhase::Arm {
                origin,
                radius_dest,
                radius,
            } => {
                render_guide_circle(ctx, *origin, *radius, style.guide, style.guide_thickness);
                render_line(ctx, *origin, *radius_dest, style.ink, style.thickness);
            }
            CompassPhase::Sweep {
                origin,
                radius,
                radius_dest,
                start_angle,
                angle_dest,
                end_angle,
            } => {
                render_guide_circle(ctx, *origin, *radius, style.guide, style.guide_thickness);
                render_line(ctx, *origin, *radius_dest, style.guide, style.guide_thickness);
                render_line(ctx, *origin, *angle_dest, style.guide, style.guide_thickness);
                render_arc(
                    ctx,
                    *origin,
                    *radius,
                    *start_angle,
                    *end_angle,
                    style.ink,
                    style.thickness,
                );

                let degrees = sweep_degrees(*start_angle, *end_angle).round() as i64;
                let label = format!("{degrees}°");
                render_readout(ctx, *origin, &label, style.readout_font_size, style.ink);
            }
        }
    }

    fn finalize(&mut self, style: &InkStyle) -> Option<Shape> {
        self.pending.take().map(|arc| Shape::Arc {
            origin: arc.origin,
            radius: arc.radius,
            start_angle: arc.start_angle,
            end_angle: arc.end_angle,
            color: style.ink,
            thick: style.thickness,
        })
    }

    fn on_activate(&mut self) {
        self.phase = CompassPhase::Idle { cursor: None };
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn radius_gesture_freezes_distance_and_enters_arm() {
        let mut tool = CompassTool::new();

        tool.on_pointer_down(p(100.0, 100.0));
        assert_eq!(tool.phase_label(), "radius");

        tool.on_pointer_move(p(120.0, 100.0));
        tool.on_pointer_up(p(150.0, 100.0));

        assert_eq!(tool.phase_label(), "arm");
        match tool.phase {
            CompassPhase::Arm { radius, .. } => assert_eq!(radius, 50.0),
            ref other => panic!("expected arm phase, got {other:?}"),
        }
    }

    #[test]
    fn arm_stays_on_the_frozen_circle() {
        let mut tool = CompassTool::new();
        tool.on_pointer_down(p(100.0, 100.0));
        tool.on_pointer_up(p(150.0, 100.0));

        // Cursor far outside and well inside the circle; the arm must stay
        // at radius 50 regardless.
        for cursor in [p(400.0, 300.0), p(101.0, 99.0), p(100.0, 500.0)] {
            tool.on_pointer_move(cursor);
            match tool.phase {
                CompassPhase::Arm {
                    origin,
                    radius_dest,
                    radius,
                } => {
                    assert_eq!(radius, 50.0);
                    assert!((origin.distance_to(radius_dest) - 50.0).abs() < 1e-9);
                }
                ref other => panic!("expected arm phase, got {other:?}"),
            }
        }
    }

    #[test]
    fn full_gesture_emits_quarter_arc() {
        let style = InkStyle::default();
        let mut tool = CompassTool::new();

        // Radius gesture: origin (100,100), radius 50.
        tool.on_pointer_down(p(100.0, 100.0));
        tool.on_pointer_move(p(150.0, 100.0));
        tool.on_pointer_up(p(150.0, 100.0));

        // Arc gesture: press at angle 0, sweep to the point below the
        // origin (screen-space +π/2), release.
        assert_eq!(tool.on_pointer_down(p(150.0, 100.0)), Transition::InProgress);
        assert_eq!(tool.phase_label(), "sweep");
        tool.on_pointer_move(p(100.0, 150.0));
        assert_eq!(tool.on_pointer_up(p(100.0, 150.0)), Transition::Complete);

        assert_eq!(tool.phase_label(), "idle");
        match tool.finalize(&style) {
            Some(Shape::Arc {
                origin,
                radius,
                start_angle,
                end_angle,
                ..
            }) => {
                assert_eq!(origin, p(100.0, 100.0));
                assert_eq!(radius, 50.0);
                assert_eq!(start_angle, 0.0);
                assert!((end_angle - FRAC_PI_2).abs() < 1e-12);
                assert_eq!(sweep_degrees(start_angle, end_angle).round(), 90.0);
            }
            other => panic!("expected an arc, got {other:?}"),
        }
    }

    #[test]
    fn arm_repositioning_moves_the_start_angle() {
        let mut tool = CompassTool::new();
        tool.on_pointer_down(p(100.0, 100.0));
        tool.on_pointer_up(p(150.0, 100.0));

        // Slide the arm to the bottom of the circle before pressing.
        tool.on_pointer_move(p(100.0, 400.0));
        tool.on_pointer_down(p(100.0, 400.0));

        match tool.phase {
            CompassPhase::Sweep {
                start_angle,
                end_angle,
                ..
            } => {
                assert!((start_angle - FRAC_PI_2).abs() < 1e-9);
                assert_eq!(start_angle, end_angle);
            }
            ref other => panic!("expected sweep phase, got {other:?}"),
        }
    }

    #[test]
    fn negative_sweep_displays_as_270_degrees() {
        let mut tool = CompassTool::new();
        tool.on_pointer_down(p(100.0, 100.0));
        tool.on_pointer_up(p(150.0, 100.0));
        tool.on_pointer_down(p(150.0, 100.0));

        // Move to the point above the origin: screen-space angle -π/2.
        tool.on_pointer_move(p(100.0, 50.0));
        match tool.phase {
            CompassPhase::Sweep { end_angle, .. } => {
                assert!((end_angle + FRAC_PI_2).abs() < 1e-9);
                assert_eq!(sweep_degrees(0.0, end_angle).round(), 270.0);
            }
            ref other => panic!("expected sweep phase, got {other:?}"),
        }
    }

    #[test]
    fn sweep_guide_arm_follows_the_end_angle() {
        let mut tool = CompassTool::new();
        tool.on_pointer_down(p(100.0, 100.0));
        tool.on_pointer_up(p(150.0, 100.0));
        tool.on_pointer_down(p(150.0, 100.0));

        tool.on_pointer_move(p(100.0, 300.0));
        match tool.phase {
            CompassPhase::Sweep {
                origin,
                angle_dest,
                radius_dest,
                ..
            } => {
                // Guide arm constrained to the circle at the end angle.
                assert!((origin.distance_to(angle_dest) - 50.0).abs() < 1e-9);
                assert!((angle_dest.x - 100.0).abs() < 1e-9);
                assert!((angle_dest.y - 150.0).abs() < 1e-9);
                // The start arm stays frozen.
                assert_eq!(radius_dest, p(150.0, 100.0));
            }
            ref other => panic!("expected sweep phase, got {other:?}"),
        }
    }

    #[test]
    fn out_of_phase_events_are_ignored() {
        let mut tool = CompassTool::new();

        assert_eq!(tool.on_pointer_up(p(10.0, 10.0)), Transition::InProgress);
        assert_eq!(tool.phase_label(), "idle");

        // A second press while the button is already held.
        tool.on_pointer_down(p(100.0, 100.0));
        tool.on_pointer_down(p(300.0, 300.0));
        match tool.phase {
            CompassPhase::Radius { origin, .. } => assert_eq!(origin, p(100.0, 100.0)),
            ref other => panic!("expected radius phase, got {other:?}"),
        }
    }

    #[test]
    fn activate_resets_and_is_idempotent() {
        let style = InkStyle::default();
        let mut tool = CompassTool::new();

        tool.on_activate();
        tool.on_activate();
        assert_eq!(tool.phase_label(), "idle");
        assert!(tool.finalize(&style).is_none());

        // Abandon a gesture mid-way.
        tool.on_pointer_down(p(100.0, 100.0));
        tool.on_pointer_up(p(150.0, 100.0));
        tool.on_activate();
        assert_eq!(tool.phase_label(), "idle");
        assert!(tool.finalize(&style).is_none());

        // The next gesture starts uncontaminated.
        tool.on_pointer_down(p(0.0, 0.0));
        tool.on_pointer_up(p(30.0, 40.0));
        match tool.phase {
            CompassPhase::Arm { origin, radius, .. } => {
                assert_eq!(origin, p(0.0, 0.0));
                assert_eq!(radius, 50.0);
            }
            ref other => panic!("expected arm phase, got {other:?}"),
        }
    }

    #[test]
    fn idle_tracks_floating_origin_candidate() {
        let mut tool = CompassTool::new();
        tool.on_pointer_move(p(42.0, 17.0));
        match tool.phase {
            CompassPhase::Idle { cursor } => assert_eq!(cursor, Some(p(42.0, 17.0))),
            ref other => panic!("expected idle phase, got {other:?}"),
        }
    }

    #[test]
    fn half_turn_sweep_reaches_pi() {
        let style = InkStyle::default();
        let mut tool = CompassTool::new();

        tool.on_pointer_down(p(0.0, 0.0));
        tool.on_pointer_up(p(10.0, 0.0));
        tool.on_pointer_down(p(10.0, 0.0));
        tool.on_pointer_move(p(-10.0, 0.000001));
        tool.on_pointer_up(p(-10.0, 0.000001));

        match tool.finalize(&style) {
            Some(Shape::Arc {
                start_angle,
                end_angle,
                ..
            }) => {
                assert_eq!(start_angle, 0.0);
                assert!((end_angle - PI).abs() < 1e-3);
            }
            other => panic!("expected an arc, got {other:?}"),
        }
    }
}
