//! Simulator controller: owned input state with validating entry points
//!
//! The controller owns the live [`SimulationInput`] and is its only writer.
//! Every mutation clamps to the configured domain and snaps to the slider
//! step, so stored state always satisfies the invariants. Results and chart
//! scenes are derived on demand and never cached.

use crate::config::SimulatorConfig;
use crate::projection::{self, ChartGeometry, Scene};
use crate::rules::{DiscountResult, MemberTier};

/// The live simulator input, the only mutable state of the rule lab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationInput {
    amount: u32,
    premium: bool,
}

impl SimulationInput {
    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn is_premium(&self) -> bool {
        self.premium
    }

    pub fn tier(&self) -> MemberTier {
        MemberTier::from_premium(self.premium)
    }
}

/// Owns the simulator input and derives everything shown from it
#[derive(Debug, Clone)]
pub struct Simulator {
    input: SimulationInput,
    config: SimulatorConfig,
    geometry: ChartGeometry,
}

impl Default for Simulator {
    fn default() -> Self {
        Simulator::new(SimulatorConfig::default())
    }
}

impl Simulator {
    pub fn new(config: SimulatorConfig) -> Self {
        let input = SimulationInput {
            amount: snap_amount(config.default_amount, &config),
            premium: config.default_premium,
        };
        Simulator {
            input,
            config,
            geometry: ChartGeometry::default(),
        }
    }

    // ------------------------------------------------------------------
    // Update entry points
    // ------------------------------------------------------------------

    /// Set the order amount, clamping into the domain and snapping to the
    /// slider step
    pub fn set_amount(&mut self, amount: u32) {
        self.input.amount = snap_amount(amount, &self.config);
    }

    /// Move the amount slider by a number of steps (negative moves left)
    pub fn nudge_amount(&mut self, steps: i32) {
        let step = self.config.slider_step.max(1);
        let current = (self.input.amount / step) as i64;
        let max_steps = (self.config.domain_max / step) as i64;
        let moved = (current + steps as i64).clamp(0, max_steps);
        self.input.amount = moved as u32 * step;
    }

    pub fn set_premium(&mut self, premium: bool) {
        self.input.premium = premium;
    }

    pub fn toggle_premium(&mut self) {
        self.input.premium = !self.input.premium;
    }

    // ------------------------------------------------------------------
    // Read accessors and derived views
    // ------------------------------------------------------------------

    pub fn input(&self) -> SimulationInput {
        self.input
    }

    pub fn amount(&self) -> u32 {
        self.input.amount
    }

    pub fn is_premium(&self) -> bool {
        self.input.premium
    }

    pub fn tier(&self) -> MemberTier {
        self.input.tier()
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Evaluate the rule for the current input
    pub fn result(&self) -> DiscountResult {
        DiscountResult::compute(self.input.amount as f64, self.input.tier())
    }

    /// Project the chart scene for the current input
    pub fn scene(&self) -> Scene {
        projection::render(self.input, &self.config, &self.geometry)
    }

    /// The input echo line, e.g. `$600 | Premium`
    pub fn input_summary(&self) -> String {
        format!("${} | {}", self.input.amount, self.input.tier().name())
    }
}

/// Clamp into `[0, domain_max]` and round to the nearest slider step, never
/// snapping past the domain
fn snap_amount(amount: u32, config: &SimulatorConfig) -> u32 {
    let step = config.slider_step.max(1);
    let max_steps = config.domain_max / step;
    let steps = ((amount.min(config.domain_max) + step / 2) / step).min(max_steps);
    steps * step
}
