//! Interactive terminal course on AI system architectures
//!
//! Walks the user through ten architectures in roadmap order, rendering
//! lesson text, a code snippet, and (for the rule-based lesson) the
//! interactive discount-rule simulator from `archademy_core`. Advancing asks
//! a lesson source for the next lesson's structured content on a background
//! thread so the UI never blocks.

pub mod app;
pub mod components;
pub mod data;
pub mod logging;
pub mod screens;
pub mod source;
pub mod state;
pub mod util;
pub mod worker;

pub use app::App;
pub use logging::init_logging;
