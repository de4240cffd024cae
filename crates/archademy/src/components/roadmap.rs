//! The curriculum roadmap stepper
//!
//! Pure rendering of the ten architectures in teaching order with the
//! current step highlighted: completed steps get a check mark, the active
//! step the accent color, upcoming steps stay dim.

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{ACCENT_COLOR, HELP_COLOR};
use archademy_core::ROADMAP;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct Roadmap;

impl Roadmap {
    pub fn new() -> Self {
        Self
    }

    fn step_spans(state: &AppState) -> Vec<Span<'static>> {
        let mut spans = Vec::with_capacity(ROADMAP.len() * 2);
        for (idx, architecture) in ROADMAP.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" → ", Style::default().fg(HELP_COLOR)));
            }

            let span = if idx < state.current_step {
                Span::styled(
                    format!("✓ {}", architecture.label()),
                    Style::default().fg(ACCENT_COLOR),
                )
            } else if idx == state.current_step {
                Span::styled(
                    architecture.label().to_string(),
                    Style::default()
                        .fg(ACCENT_COLOR)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                )
            } else {
                Span::styled(
                    architecture.label().to_string(),
                    Style::default().fg(HELP_COLOR),
                )
            };
            spans.push(span);
        }
        spans
    }
}

impl Default for Roadmap {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Roadmap {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let header = Line::from(vec![
            Span::styled(
                "AI Architect Academy",
                Style::default()
                    .fg(ACCENT_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  Step {} of {}", state.current_step + 1, ROADMAP.len()),
                Style::default().fg(HELP_COLOR),
            ),
        ]);

        let paragraph = Paragraph::new(vec![header, Line::from(Self::step_spans(state))])
            .block(Block::default().borders(Borders::BOTTOM));

        frame.render_widget(paragraph, area);
    }
}
