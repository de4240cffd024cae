//! Tests for discount rule thresholds, boundaries, and result labels
//!
//! These tests verify that:
//! - Each tier applies its threshold with a strict comparison
//! - The exact threshold amounts stay on the lower branch
//! - Every percentage maps to its exact display label

use crate::rules::{DiscountResult, MemberTier, evaluate};

/// Premium orders at or below $500 earn the base 10%
#[test]
fn test_premium_tier_at_or_below_threshold() {
    for amount in (0..=500).step_by(25) {
        let percent = evaluate(amount as f64, MemberTier::Premium);
        assert_eq!(
            percent, 10,
            "premium at ${amount} should earn 10%, got {percent}%"
        );
    }
}

/// Premium orders above $500 earn 20%
#[test]
fn test_premium_tier_above_threshold() {
    for amount in (501..=2000).step_by(107) {
        let percent = evaluate(amount as f64, MemberTier::Premium);
        assert_eq!(
            percent, 20,
            "premium at ${amount} should earn 20%, got {percent}%"
        );
    }
    assert_eq!(evaluate(2000.0, MemberTier::Premium), 20);
}

/// Standard orders at or below $1000 earn nothing
#[test]
fn test_standard_tier_at_or_below_threshold() {
    for amount in (0..=1000).step_by(50) {
        let percent = evaluate(amount as f64, MemberTier::Standard);
        assert_eq!(
            percent, 0,
            "standard at ${amount} should earn nothing, got {percent}%"
        );
    }
}

/// Standard orders above $1000 earn 5%
#[test]
fn test_standard_tier_above_threshold() {
    for amount in (1001..=2000).step_by(83) {
        let percent = evaluate(amount as f64, MemberTier::Standard);
        assert_eq!(
            percent, 5,
            "standard at ${amount} should earn 5%, got {percent}%"
        );
    }
    assert_eq!(evaluate(2000.0, MemberTier::Standard), 5);
}

/// Thresholds are strict: the boundary amount itself stays on the low branch
#[test]
fn test_boundary_exactness() {
    assert_eq!(
        evaluate(500.0, MemberTier::Premium),
        10,
        "exactly $500 premium must stay at 10%"
    );
    assert_eq!(
        evaluate(1000.0, MemberTier::Standard),
        0,
        "exactly $1000 standard must stay at 0%"
    );
    // Any amount over the threshold flips the branch
    assert_eq!(evaluate(500.01, MemberTier::Premium), 20);
    assert_eq!(evaluate(1000.01, MemberTier::Standard), 5);
}

/// Each outcome carries its exact display label
#[test]
fn test_result_labels() {
    let cases = [
        (600.0, MemberTier::Premium, 20, "20% Discount Applied"),
        (400.0, MemberTier::Premium, 10, "10% Discount Applied"),
        (1200.0, MemberTier::Standard, 5, "5% Discount Applied"),
        (500.0, MemberTier::Standard, 0, "No Discount"),
    ];

    for (amount, tier, percent, label) in cases {
        let result = DiscountResult::compute(amount, tier);
        assert_eq!(
            result.percent, percent,
            "${amount} on {} tier",
            tier.name()
        );
        assert_eq!(result.label, label, "${amount} on {} tier", tier.name());
    }
}

/// The rule is total: extreme and fractional amounts still evaluate
#[test]
fn test_rule_is_total() {
    assert_eq!(evaluate(-50.0, MemberTier::Premium), 10);
    assert_eq!(evaluate(0.0, MemberTier::Standard), 0);
    assert_eq!(evaluate(999.99, MemberTier::Standard), 0);
    assert_eq!(evaluate(1_000_000.0, MemberTier::Standard), 5);
}
