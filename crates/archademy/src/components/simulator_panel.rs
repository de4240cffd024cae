//! The interactive rule lab panel
//!
//! Hosts the discount-rule simulator: a keyboard-driven amount slider, the
//! tier toggle, the input/output summary, and the step-curve chart. All
//! logic lives in `archademy_core`; this panel just feeds key events into
//! the controller and paints what it derives.

use super::charts::step_chart;
use super::{Component, EventResult};
use crate::state::{AppState, Focus};
use crate::util::styles::{ACCENT_COLOR, HELP_COLOR, focused_block_with_help, format_dollars};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Width of the textual amount slider, characters
const SLIDER_WIDTH: usize = 24;

pub struct SimulatorPanel;

impl SimulatorPanel {
    pub fn new() -> Self {
        Self
    }

    fn slider_line(state: &AppState) -> Line<'static> {
        let simulator = &state.simulator;
        let domain_max = simulator.config().domain_max.max(1);
        let filled =
            (simulator.amount() as usize * SLIDER_WIDTH + domain_max as usize / 2) / domain_max as usize;
        let filled = filled.min(SLIDER_WIDTH);

        let mut bar = String::with_capacity(SLIDER_WIDTH * 3);
        bar.push_str(&"█".repeat(filled));
        bar.push_str(&"░".repeat(SLIDER_WIDTH - filled));

        Line::from(vec![
            Span::raw("Order Amount: "),
            Span::styled(
                format_dollars(simulator.amount()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(bar, Style::default().fg(ACCENT_COLOR)),
        ])
    }

    fn info_lines(state: &AppState) -> Vec<Line<'static>> {
        let simulator = &state.simulator;
        let result = simulator.result();
        let tier_box = if simulator.is_premium() { "[x]" } else { "[ ]" };

        vec![
            Line::from(Span::styled(
                "Modify the inputs to see the deterministic flow in action.",
                Style::default().fg(HELP_COLOR),
            )),
            Line::from(""),
            Self::slider_line(state),
            Line::from(vec![
                Span::raw("Premium Member: "),
                Span::styled(tier_box, Style::default().fg(ACCENT_COLOR)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Input Received      ", Style::default().fg(HELP_COLOR)),
                Span::raw(simulator.input_summary()),
            ]),
            Line::from(vec![
                Span::styled("Architecture Output ", Style::default().fg(HELP_COLOR)),
                Span::styled(
                    result.label,
                    Style::default()
                        .fg(ACCENT_COLOR)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ]
    }
}

impl Default for SimulatorPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SimulatorPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                state.simulator.nudge_amount(-1);
                EventResult::Handled
            }
            KeyCode::Right | KeyCode::Char('l') => {
                state.simulator.nudge_amount(1);
                EventResult::Handled
            }
            KeyCode::Char('t') | KeyCode::Char(' ') => {
                state.simulator.toggle_premium();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::Simulator;
        let block = focused_block_with_help(
            " Interactive Rule Lab ",
            focused,
            "←/→ amount  t tier",
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Inputs and summary
                Constraint::Min(0),    // Step chart
            ])
            .split(inner);

        frame.render_widget(Paragraph::new(Self::info_lines(state)), chunks[0]);

        if chunks[1].height > 0 {
            let scene = state.simulator.scene();
            step_chart::render_step_chart(frame, chunks[1], &scene);
        }
    }
}
