//! Step-series sampling of the discount rule
//!
//! Samples [`rules::evaluate`] at a fixed interval across the amount domain
//! to produce the plottable step curve for one tier. Sample positions are
//! computed from integral indices, so repeated calls are element-wise
//! identical and there is no accumulated float error.

use crate::rules::{self, MemberTier};

/// One sampled point of a step curve, in domain units (dollars, percent)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPoint {
    pub x: f64,
    pub y: f64,
}

/// Sample the rule function for `tier` at every multiple of `step` from zero
/// up to and including `domain_max`.
///
/// The default domain (0..=2000 sampled every 10) yields 201 points with
/// strictly increasing `x` and `y == evaluate(x, tier)` at every point.
/// Returns an empty series when `step` is non-positive or `domain_max` is
/// negative.
pub fn generate_steps(tier: MemberTier, domain_max: f64, step: f64) -> Vec<StepPoint> {
    if step <= 0.0 || domain_max < 0.0 {
        return Vec::new();
    }

    let count = (domain_max / step).floor() as usize;
    (0..=count)
        .map(|i| {
            let x = i as f64 * step;
            StepPoint {
                x,
                y: rules::evaluate(x, tier) as f64,
            }
        })
        .collect()
}
