//! Integration tests for the rule lab core
//!
//! Tests are organized by topic:
//! - `rules` - Discount rule thresholds, boundaries, and result labels
//! - `series` - Step-series sampling of the rule function
//! - `projection` - Viewport math and chart scene construction
//! - `simulator` - Controller invariants and end-to-end scenarios
//! - `curriculum` - Roadmap ordering, lesson records, bundled library

mod projection;
mod rules;
mod series;
mod simulator;
