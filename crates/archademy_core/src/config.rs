//! Simulator configuration
//!
//! Domain bounds and sampling intervals for the rule lab. The defaults pin
//! the canonical setup: a $0..$2000 order slider moving in $50 increments, a
//! 201-point sampled curve, and a percent axis topping out at 25%.

/// Fixed parameters of the rule simulator
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// Upper bound of the order-amount domain, dollars
    pub domain_max: u32,
    /// Increment the amount slider moves in
    pub slider_step: u32,
    /// Sampling interval for the plotted step curves, dollars
    pub sample_step: f64,
    /// Upper bound of the percent axis
    pub percent_max: f64,
    /// Starting order amount
    pub default_amount: u32,
    /// Whether the simulated member starts on the premium tier
    pub default_premium: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        SimulatorConfig {
            domain_max: 2_000,
            slider_step: 50,
            sample_step: 10.0,
            percent_max: 25.0,
            default_amount: 600,
            default_premium: true,
        }
    }
}
