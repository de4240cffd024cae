//! Rule evaluation and visualization library for the architecture course
//!
//! This crate is the pure core of the interactive lesson app. It provides:
//! - The fixed two-branch discount rule function and its result labels
//! - Step-series sampling of the rule over the order-amount domain
//! - A pure chart projector mapping domain values onto a logical pixel
//!   canvas and describing the full scene (axes, grid, curves, marker)
//! - The simulator controller owning the live input with clamped setters
//! - The architecture roadmap, lesson records, and a bundled lesson library
//!
//! No I/O, no terminal types, no threads. The application crate paints
//! scenes and talks to lesson sources; everything here is deterministic and
//! recomputable from the input plus static configuration.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod config;
pub mod error;
pub mod projection;
pub mod rules;
pub mod series;
pub mod simulator;

// ============================================================================
// Curriculum modules
// ============================================================================

pub mod curriculum;
pub mod library;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::SimulatorConfig;
pub use curriculum::{Architecture, Lesson, LessonComponents, ROADMAP};
pub use error::CurriculumError;
pub use projection::{ChartGeometry, Emphasis, Scene, Viewport};
pub use rules::{DiscountResult, MemberTier, evaluate};
pub use simulator::{SimulationInput, Simulator};
