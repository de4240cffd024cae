//! The discount rule function
//!
//! A fixed two-branch threshold policy mapping an order amount and membership
//! tier to a discount percentage. Everything else in the simulator derives
//! from this function: the series generator samples it, the chart projector
//! plots it, and the controller re-evaluates it on every input change.

/// Membership tier for discount evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberTier {
    Standard,
    Premium,
}

impl MemberTier {
    /// Both tiers, in the order their curves stack on the chart
    pub const ALL: [MemberTier; 2] = [MemberTier::Standard, MemberTier::Premium];

    pub fn from_premium(premium: bool) -> Self {
        if premium {
            MemberTier::Premium
        } else {
            MemberTier::Standard
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MemberTier::Standard => "Standard",
            MemberTier::Premium => "Premium",
        }
    }
}

/// Evaluate the discount rule for an order amount and membership tier.
///
/// Premium members get 20% above $500, otherwise 10%. Standard members get
/// 5% above $1000, otherwise nothing. Thresholds are strict: exactly $500 on
/// the premium tier still yields 10%, and exactly $1000 on the standard tier
/// yields 0%. Total over all finite amounts; no side effects.
pub fn evaluate(amount: f64, tier: MemberTier) -> u8 {
    match tier {
        MemberTier::Premium => {
            if amount > 500.0 {
                20
            } else {
                10
            }
        }
        MemberTier::Standard => {
            if amount > 1000.0 {
                5
            } else {
                0
            }
        }
    }
}

/// A discount evaluation outcome: the percentage plus its display label.
///
/// Derived, never stored. Recompute from the live input whenever it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountResult {
    pub percent: u8,
    pub label: &'static str,
}

impl DiscountResult {
    /// Evaluate the rule and attach the display label
    pub fn compute(amount: f64, tier: MemberTier) -> Self {
        let percent = evaluate(amount, tier);
        DiscountResult {
            percent,
            label: label_for(percent),
        }
    }
}

fn label_for(percent: u8) -> &'static str {
    match percent {
        20 => "20% Discount Applied",
        10 => "10% Discount Applied",
        5 => "5% Discount Applied",
        _ => "No Discount",
    }
}
