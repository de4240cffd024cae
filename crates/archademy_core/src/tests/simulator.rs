//! Tests for the simulator controller
//!
//! These tests verify that:
//! - Defaults match the canonical lab setup ($600, premium)
//! - Every mutation keeps the amount snapped and inside the domain
//! - The four reference scenarios produce their exact labels
//! - Toggling the tier swaps both the label and the chart emphasis

use crate::config::SimulatorConfig;
use crate::projection::Emphasis;
use crate::rules::MemberTier;
use crate::simulator::Simulator;

/// The controller starts at $600 on the premium tier and already shows the
/// 20% outcome
#[test]
fn test_default_state() {
    let simulator = Simulator::default();
    assert_eq!(simulator.amount(), 600);
    assert!(simulator.is_premium());

    let result = simulator.result();
    assert_eq!(result.percent, 20);
    assert_eq!(result.label, "20% Discount Applied");
}

/// The four reference scenarios, end to end through the controller
#[test]
fn test_reference_scenarios() {
    let mut simulator = Simulator::default();

    // (600, premium)
    assert_eq!(simulator.result().label, "20% Discount Applied");

    // (400, premium)
    simulator.set_amount(400);
    assert_eq!(simulator.result().label, "10% Discount Applied");

    // (1200, standard)
    simulator.set_premium(false);
    simulator.set_amount(1200);
    assert_eq!(simulator.result().label, "5% Discount Applied");

    // (500, standard)
    simulator.set_amount(500);
    assert_eq!(simulator.result().label, "No Discount");
}

/// Out-of-range and off-step amounts clamp and snap; stored state never
/// violates the invariants
#[test]
fn test_amount_clamps_and_snaps() {
    let mut simulator = Simulator::default();

    simulator.set_amount(2_500);
    assert_eq!(simulator.amount(), 2_000, "clamped to the domain");

    simulator.set_amount(333);
    assert_eq!(simulator.amount(), 350, "snapped to the nearest $50");

    simulator.set_amount(0);
    assert_eq!(simulator.amount(), 0);

    for probe in [1u32, 49, 51, 725, 1_999, 4_000_000] {
        simulator.set_amount(probe);
        let step = simulator.config().slider_step;
        assert_eq!(
            simulator.amount() % step,
            0,
            "amount {} must sit on a ${step} step",
            simulator.amount()
        );
        assert!(simulator.amount() <= simulator.config().domain_max);
    }
}

/// Nudging moves one slider step at a time and saturates at the ends
#[test]
fn test_nudge_saturates_at_domain_edges() {
    let mut simulator = Simulator::default();

    simulator.nudge_amount(1);
    assert_eq!(simulator.amount(), 650);
    simulator.nudge_amount(-2);
    assert_eq!(simulator.amount(), 550);

    simulator.nudge_amount(-1_000);
    assert_eq!(simulator.amount(), 0, "saturates at the bottom");
    simulator.nudge_amount(-1);
    assert_eq!(simulator.amount(), 0);

    simulator.nudge_amount(1_000);
    assert_eq!(simulator.amount(), 2_000, "saturates at the top");
    simulator.nudge_amount(3);
    assert_eq!(simulator.amount(), 2_000);
}

/// With the amount held at $600, toggling the tier flips the outcome from
/// 20% to nothing and swaps the emphasized curve
#[test]
fn test_toggle_swaps_label_and_emphasis() {
    let mut simulator = Simulator::default();
    assert_eq!(simulator.result().label, "20% Discount Applied");

    simulator.toggle_premium();
    assert_eq!(simulator.amount(), 600, "amount untouched by the toggle");
    assert_eq!(simulator.result().label, "No Discount");

    let scene = simulator.scene();
    let emphasized = scene
        .curves
        .iter()
        .find(|c| c.emphasis == Emphasis::Emphasized)
        .map(|c| c.tier);
    assert_eq!(emphasized, Some(MemberTier::Standard));

    simulator.toggle_premium();
    assert_eq!(simulator.result().label, "20% Discount Applied");
}

/// The input echo line mirrors the live input
#[test]
fn test_input_summary() {
    let mut simulator = Simulator::default();
    assert_eq!(simulator.input_summary(), "$600 | Premium");

    simulator.toggle_premium();
    simulator.set_amount(1_200);
    assert_eq!(simulator.input_summary(), "$1200 | Standard");
}

/// A custom configuration snaps its own default amount onto the grid
#[test]
fn test_custom_config_snaps_defaults() {
    let config = SimulatorConfig {
        domain_max: 1_000,
        slider_step: 30,
        default_amount: 995,
        ..SimulatorConfig::default()
    };
    let simulator = Simulator::new(config);

    assert_eq!(simulator.amount() % 30, 0);
    assert!(simulator.amount() <= 1_000);
}
