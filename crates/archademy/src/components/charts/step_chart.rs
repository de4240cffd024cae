//! Terminal painter for the rule-lab step chart
//!
//! Draws an [`archademy_core::Scene`] with the ratatui [`Canvas`] widget.
//! The scene is described in SVG-style pixel space (y grows downward), so
//! every coordinate is flipped before drawing. Muted curves paint before the
//! emphasized one so the selected tier stays on top.

use archademy_core::projection::{CurvePath, Scene, Segment};
use archademy_core::{Emphasis, MemberTier};
use ratatui::{
    Frame,
    layout::Rect,
    style::Color,
    symbols,
    text::Line,
    widgets::canvas::{Canvas, Context, Line as CanvasLine, Points},
};

use crate::util::styles::{ACCENT_COLOR, FOCUS_COLOR, HELP_COLOR};

const AXIS_COLOR: Color = Color::Gray;
const GRID_COLOR: Color = Color::DarkGray;
/// Length of guide-line dashes and the gaps between them, logical pixels
const DASH_LEN: f64 = 4.0;
/// Half-extent of the plus-shaped live marker, logical pixels
const MARKER_ARM: f64 = 3.0;

/// Paint the chart scene into the given area
pub fn render_step_chart(frame: &mut Frame, area: Rect, scene: &Scene) {
    let width = scene.geometry.width;
    let height = scene.geometry.height;

    let canvas = Canvas::default()
        .marker(symbols::Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for segment in &scene.grid {
                draw_segment(ctx, segment, height, GRID_COLOR);
            }
            for segment in &scene.axes {
                draw_segment(ctx, segment, height, AXIS_COLOR);
            }

            // Muted first, emphasized on top
            for curve in ordered_curves(&scene.curves) {
                let color = curve_color(curve);
                for window in curve.points.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: window[0].0,
                        y1: height - window[0].1,
                        x2: window[1].0,
                        y2: height - window[1].1,
                        color,
                    });
                }
            }

            draw_dashed_vertical(ctx, &scene.guide, height);
            draw_marker(ctx, scene.marker.at, height);

            for tick in &scene.x_ticks {
                // Shift left so the label sits roughly centered on its tick
                let offset = tick.text.len() as f64 * 2.0;
                ctx.print(
                    (tick.at.0 - offset).max(0.0),
                    height - tick.at.1,
                    Line::styled(tick.text.clone(), HELP_COLOR),
                );
            }
            for tick in &scene.y_ticks {
                let offset = tick.text.len() as f64 * 4.0;
                ctx.print(
                    (tick.at.0 - offset).max(0.0),
                    height - tick.at.1,
                    Line::styled(tick.text.clone(), HELP_COLOR),
                );
            }
        });

    frame.render_widget(canvas, area);
}

/// The curves in paint order: muted first, emphasized last
fn ordered_curves(curves: &[CurvePath; 2]) -> Vec<&CurvePath> {
    let mut ordered: Vec<&CurvePath> = curves.iter().collect();
    ordered.sort_by_key(|c| matches!(c.emphasis, Emphasis::Emphasized));
    ordered
}

fn curve_color(curve: &CurvePath) -> Color {
    match curve.emphasis {
        Emphasis::Muted => GRID_COLOR,
        Emphasis::Emphasized => match curve.tier {
            MemberTier::Premium => ACCENT_COLOR,
            MemberTier::Standard => Color::Cyan,
        },
    }
}

fn draw_segment(ctx: &mut Context<'_>, segment: &Segment, height: f64, color: Color) {
    ctx.draw(&CanvasLine {
        x1: segment.from.0,
        y1: height - segment.from.1,
        x2: segment.to.0,
        y2: height - segment.to.1,
        color,
    });
}

/// The guide runs from the x axis up to the marker; draw it as short dashes
fn draw_dashed_vertical(ctx: &mut Context<'_>, guide: &Segment, height: f64) {
    let x = guide.from.0;
    let (mut low, high) = if guide.from.1 > guide.to.1 {
        (guide.to.1, guide.from.1)
    } else {
        (guide.from.1, guide.to.1)
    };

    while low < high {
        let end = (low + DASH_LEN).min(high);
        ctx.draw(&CanvasLine {
            x1: x,
            y1: height - low,
            x2: x,
            y2: height - end,
            color: FOCUS_COLOR,
        });
        low = end + DASH_LEN;
    }
}

fn draw_marker(ctx: &mut Context<'_>, at: (f64, f64), height: f64) {
    let (x, y) = (at.0, height - at.1);
    ctx.draw(&CanvasLine {
        x1: x - MARKER_ARM,
        y1: y,
        x2: x + MARKER_ARM,
        y2: y,
        color: FOCUS_COLOR,
    });
    ctx.draw(&CanvasLine {
        x1: x,
        y1: y - MARKER_ARM,
        x2: x,
        y2: y + MARKER_ARM,
        color: FOCUS_COLOR,
    });
    ctx.draw(&Points {
        coords: &[(x, y)],
        color: FOCUS_COLOR,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use archademy_core::Simulator;

    #[test]
    fn test_emphasized_curve_paints_last() {
        let scene = Simulator::default().scene();
        let ordered = ordered_curves(&scene.curves);
        assert_eq!(ordered[0].emphasis, Emphasis::Muted);
        assert_eq!(ordered[1].emphasis, Emphasis::Emphasized);
    }

    #[test]
    fn test_curve_colors_track_emphasis() {
        let mut simulator = Simulator::default();
        let premium_scene = simulator.scene();
        let premium_curve = premium_scene
            .curves
            .iter()
            .find(|c| c.tier == MemberTier::Premium)
            .unwrap();
        assert_eq!(curve_color(premium_curve), ACCENT_COLOR);

        simulator.toggle_premium();
        let standard_scene = simulator.scene();
        let premium_curve = standard_scene
            .curves
            .iter()
            .find(|c| c.tier == MemberTier::Premium)
            .unwrap();
        assert_eq!(curve_color(premium_curve), GRID_COLOR);
    }
}
