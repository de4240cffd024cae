//! Tests for step-series sampling
//!
//! These tests verify that:
//! - The default domain yields exactly 201 points covering 0..=2000
//! - Every sampled `y` agrees with the rule function at that `x`
//! - Sampling is deterministic and rejects degenerate parameters

use crate::rules::{MemberTier, evaluate};
use crate::series::generate_steps;

/// The default domain (0..=2000 every 10) yields exactly 201 points
#[test]
fn test_default_series_point_count() {
    let series = generate_steps(MemberTier::Premium, 2000.0, 10.0);
    assert_eq!(series.len(), 201, "expected 201 samples, got {}", series.len());
    assert_eq!(series[0].x, 0.0);
    assert_eq!(series[200].x, 2000.0);
}

/// Sample positions increase strictly, with no duplicate or reordered x
#[test]
fn test_series_strictly_increasing() {
    let series = generate_steps(MemberTier::Standard, 2000.0, 10.0);
    for pair in series.windows(2) {
        assert!(
            pair[1].x > pair[0].x,
            "x must increase strictly: {} then {}",
            pair[0].x,
            pair[1].x
        );
    }
}

/// Every sampled y equals the rule evaluated at that x, for both tiers
#[test]
fn test_series_matches_rule_at_every_sample() {
    for tier in MemberTier::ALL {
        let series = generate_steps(tier, 2000.0, 10.0);
        for point in &series {
            let expected = evaluate(point.x, tier) as f64;
            assert_eq!(
                point.y, expected,
                "{} tier at x={} should be {}%, got {}%",
                tier.name(),
                point.x,
                expected,
                point.y
            );
        }
    }
}

/// Identical arguments produce element-wise identical sequences
#[test]
fn test_series_idempotent() {
    let first = generate_steps(MemberTier::Premium, 2000.0, 10.0);
    let second = generate_steps(MemberTier::Premium, 2000.0, 10.0);
    assert_eq!(first, second, "restarted sampling must replay exactly");
}

/// Degenerate parameters yield an empty series instead of panicking
#[test]
fn test_series_rejects_degenerate_parameters() {
    assert!(generate_steps(MemberTier::Premium, 2000.0, 0.0).is_empty());
    assert!(generate_steps(MemberTier::Premium, 2000.0, -10.0).is_empty());
    assert!(generate_steps(MemberTier::Premium, -1.0, 10.0).is_empty());
}

/// A domain bound that is not a multiple of the step stops at the last
/// multiple inside the domain
#[test]
fn test_series_stays_inside_domain() {
    let series = generate_steps(MemberTier::Standard, 95.0, 10.0);
    assert_eq!(series.len(), 10, "0 through 90 inclusive");
    assert_eq!(series.last().map(|p| p.x), Some(90.0));
}
