use super::{Component, EventResult};
use crate::state::{AppState, Focus};
use crate::util::styles::{ACCENT_COLOR, CAUTION_COLOR, FOCUS_COLOR, HELP_COLOR};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn help_text(state: &AppState) -> &'static str {
        match state.focus {
            Focus::Simulator => {
                "←/→: amount | t/Space: tier | Tab: content | n: next lesson | q: quit"
            }
            Focus::Content => {
                "j/k: scroll | Tab: simulator | n: next lesson | p: previous | q: quit"
            }
        }
    }

    fn persona_line(state: &AppState) -> Line<'static> {
        let message = if state.is_generating() {
            "Excellent progress. Let me prepare the next stage...".to_string()
        } else if state.at_end_of_roadmap() {
            "That completes the roadmap. Revisit any step with p.".to_string()
        } else {
            format!(
                "Any questions about {} before we move on?",
                state.current_architecture().title()
            )
        };

        Line::from(vec![
            Span::styled("Senior AI Architect: ", Style::default().fg(ACCENT_COLOR)),
            Span::raw(message),
        ])
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let first = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(CAUTION_COLOR)),
                Span::raw(error.clone()),
            ])
        } else if state.is_generating() {
            Line::from(Span::styled(
                "The architect is preparing the next lesson… (Esc to cancel)",
                Style::default().fg(FOCUS_COLOR),
            ))
        } else {
            Line::from(Span::styled(
                Self::help_text(state),
                Style::default().fg(HELP_COLOR),
            ))
        };

        let paragraph = Paragraph::new(vec![first, Self::persona_line(state)])
            .block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
