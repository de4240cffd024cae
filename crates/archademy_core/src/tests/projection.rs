//! Tests for viewport math and chart scene construction
//!
//! These tests verify that:
//! - Domain values map onto the canvas through the documented margins
//! - Step curves carry their jump corners and nothing else
//! - The marker, guide, ticks, and emphasis all track the input
//! - Scene construction is pure

use crate::config::SimulatorConfig;
use crate::projection::{ChartGeometry, Emphasis, Viewport, render};
use crate::rules::MemberTier;
use crate::simulator::Simulator;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{what}: expected {expected}, got {actual}"
    );
}

/// The default 400x200 canvas with 20/30/40/50 margins maps the domain
/// corners onto the plot corners
#[test]
fn test_viewport_corner_mapping() {
    let viewport = Viewport::new(ChartGeometry::default(), 2000.0, 25.0);

    assert_close(viewport.x(0.0), 50.0, "left edge");
    assert_close(viewport.x(2000.0), 370.0, "right edge");
    assert_close(viewport.y(0.0), 160.0, "bottom edge");
    assert_close(viewport.y(25.0), 20.0, "top edge");

    // Interior points interpolate linearly
    assert_close(viewport.x(600.0), 146.0, "x at $600");
    assert_close(viewport.y(20.0), 48.0, "y at 20%");
}

/// Both axes start at the origin and span the full plot area
#[test]
fn test_axes_span_plot_area() {
    let scene = Simulator::default().scene();

    let x_axis = scene.axes[0];
    assert_close(x_axis.from.0, 50.0, "x axis start");
    assert_close(x_axis.from.1, 160.0, "x axis height");
    assert_close(x_axis.to.0, 370.0, "x axis end");

    let y_axis = scene.axes[1];
    assert_close(y_axis.from.1, 160.0, "y axis bottom");
    assert_close(y_axis.to.1, 20.0, "y axis top");
}

/// Amount ticks are $-prefixed quarters; percent ticks are %-suffixed fives
#[test]
fn test_tick_labels() {
    let scene = Simulator::default().scene();

    let x_texts: Vec<&str> = scene.x_ticks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(x_texts, ["$0", "$500", "$1000", "$1500", "$2000"]);

    let y_texts: Vec<&str> = scene.y_ticks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(y_texts, ["0%", "5%", "10%", "15%", "20%", "25%"]);

    // One horizontal grid line per nonzero percent tick
    assert_eq!(scene.grid.len(), 5);
}

/// A step curve collapses to its endpoints plus one corner pair per jump
#[test]
fn test_step_curves_have_single_jump() {
    let scene = Simulator::default().scene();
    let viewport = Viewport::new(ChartGeometry::default(), 2000.0, 25.0);

    let standard = &scene.curves[0];
    assert_eq!(standard.tier, MemberTier::Standard);
    assert_eq!(
        standard.points.len(),
        4,
        "standard curve: start, corner, jump, end"
    );
    // The standard tier jumps at the first sample past $1000
    assert_close(standard.points[1].0, viewport.x(1010.0), "standard jump x");
    assert_close(standard.points[1].1, viewport.y(0.0), "standard pre-jump y");
    assert_close(standard.points[2].1, viewport.y(5.0), "standard post-jump y");

    let premium = &scene.curves[1];
    assert_eq!(premium.tier, MemberTier::Premium);
    assert_eq!(premium.points.len(), 4);
    // The premium tier jumps at the first sample past $500
    assert_close(premium.points[1].0, viewport.x(510.0), "premium jump x");
    assert_close(premium.points[1].1, viewport.y(10.0), "premium pre-jump y");
    assert_close(premium.points[2].1, viewport.y(20.0), "premium post-jump y");
}

/// The marker sits at the viewport projection of (amount, percent) and the
/// guide rises vertically from the x axis to meet it
#[test]
fn test_marker_and_guide_track_input() {
    let scene = Simulator::default().scene();

    assert_eq!(scene.marker.amount, 600);
    assert_eq!(scene.marker.percent, 20);
    assert_close(scene.marker.at.0, 146.0, "marker x at $600");
    assert_close(scene.marker.at.1, 48.0, "marker y at 20%");

    assert_close(scene.guide.from.0, scene.marker.at.0, "guide is vertical");
    assert_close(scene.guide.from.1, 160.0, "guide starts on the x axis");
    assert_eq!(scene.guide.to, scene.marker.at, "guide ends at the marker");
}

/// The selected tier's curve is emphasized; toggling the tier swaps the
/// emphasis without moving either curve
#[test]
fn test_emphasis_follows_selected_tier() {
    let mut simulator = Simulator::default();

    let scene = simulator.scene();
    assert_eq!(scene.curves[1].emphasis, Emphasis::Emphasized, "premium selected");
    assert_eq!(scene.curves[0].emphasis, Emphasis::Muted);

    simulator.toggle_premium();
    let swapped = simulator.scene();
    assert_eq!(swapped.curves[0].emphasis, Emphasis::Emphasized, "standard selected");
    assert_eq!(swapped.curves[1].emphasis, Emphasis::Muted);

    // Geometry is untouched by the toggle
    assert_eq!(scene.curves[0].points, swapped.curves[0].points);
    assert_eq!(scene.curves[1].points, swapped.curves[1].points);
}

/// Rendering is pure: identical inputs produce identical scenes
#[test]
fn test_render_is_pure() {
    let simulator = Simulator::default();
    let config = SimulatorConfig::default();
    let geometry = ChartGeometry::default();

    let first = render(simulator.input(), &config, &geometry);
    let second = render(simulator.input(), &config, &geometry);
    assert_eq!(first, second, "redrawing must be idempotent");
}
