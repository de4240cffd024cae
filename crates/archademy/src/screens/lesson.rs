//! The lesson screen
//!
//! Left column: the scrollable lesson content (problem, mental diagram,
//! component grid, key distinction, use cases, analogy, caution). Right
//! column: the code snippet and, when the current lesson is the rule-based
//! one, the interactive rule lab.

use crate::components::{Component, EventResult, simulator_panel::SimulatorPanel};
use crate::state::{AppState, Focus};
use crate::util::styles::{
    ACCENT_COLOR, CAUTION_COLOR, HEADER_COLOR, HELP_COLOR, focused_block,
};
use archademy_core::Lesson;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Screen;

pub struct LessonScreen {
    simulator_panel: SimulatorPanel,
}

impl LessonScreen {
    pub fn new() -> Self {
        Self {
            simulator_panel: SimulatorPanel::new(),
        }
    }

    fn section_header(text: &'static str) -> Line<'static> {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn content_lines(lesson: &Lesson) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                lesson.title.clone(),
                Style::default()
                    .fg(ACCENT_COLOR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Self::section_header("THE PROBLEM IT SOLVES"),
            Line::from(lesson.problem.clone()),
            Line::from(""),
            Self::section_header("THE MENTAL DIAGRAM"),
            Line::from(Span::styled(
                format!("\"{}\"", lesson.diagram_description),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Self::section_header("COMPONENTS"),
        ];

        for (name, text) in [
            ("Model", &lesson.components.model),
            ("Data Flow", &lesson.components.data_flow),
            ("Memory", &lesson.components.memory),
            ("Orchestration", &lesson.components.orchestration),
        ] {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<14}", name),
                    Style::default().fg(HELP_COLOR),
                ),
                Span::raw(text.clone()),
            ]));
        }

        lines.extend([
            Line::from(""),
            Self::section_header("KEY DISTINCTION"),
            Line::from(vec![
                Span::styled(
                    "vs. Previous: ",
                    Style::default()
                        .fg(ACCENT_COLOR)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(lesson.previous_difference.clone()),
            ]),
            Line::from(""),
            Self::section_header("WHERE IT'S USED TODAY"),
        ]);

        for use_case in &lesson.current_use_cases {
            lines.push(Line::from(format!("  • {}", use_case)));
        }

        lines.extend([
            Line::from(""),
            Self::section_header("PRACTICAL ANALOGY"),
            Line::from(Span::styled(
                lesson.analogy.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "WHEN NOT TO USE IT",
                Style::default()
                    .fg(CAUTION_COLOR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(lesson.when_not_to_use.clone()),
        ]);

        lines
    }

    fn render_content(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::Content;
        let block = focused_block(" Lesson ", focused);

        let paragraph = Paragraph::new(Self::content_lines(state.current_lesson()))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((state.content_scroll, 0));

        frame.render_widget(paragraph, area);
    }

    fn render_snippet(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" architecture_impl.py ");

        let lines: Vec<Line> = state
            .current_lesson()
            .python_snippet
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(ACCENT_COLOR))))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Default for LessonScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LessonScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.focus == Focus::Simulator {
            return self.simulator_panel.handle_key(key, state);
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                state.content_scroll = state.content_scroll.saturating_add(1);
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.content_scroll = state.content_scroll.saturating_sub(1);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(58), // Lesson content
                Constraint::Percentage(42), // Snippet + rule lab
            ])
            .split(area);

        self.render_content(frame, columns[0], state);

        if state.simulator_visible() {
            let sidebar = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Percentage(40), // Code snippet
                    Constraint::Percentage(60), // Rule lab
                ])
                .split(columns[1]);

            self.render_snippet(frame, sidebar[0], state);
            self.simulator_panel.render(frame, sidebar[1], state);
        } else {
            self.render_snippet(frame, columns[1], state);
        }
    }
}

impl Screen for LessonScreen {
    fn title(&self) -> &str {
        "Lesson"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archademy_core::library;

    #[test]
    fn test_content_lines_cover_every_section() {
        let lesson = library::initial_lesson();
        let lines = LessonScreen::content_lines(&lesson);
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.as_ref()))
            .collect::<Vec<_>>()
            .join("\n");

        for section in [
            "THE PROBLEM IT SOLVES",
            "THE MENTAL DIAGRAM",
            "COMPONENTS",
            "KEY DISTINCTION",
            "WHERE IT'S USED TODAY",
            "PRACTICAL ANALOGY",
            "WHEN NOT TO USE IT",
        ] {
            assert!(text.contains(section), "missing section {section}");
        }
        assert!(text.contains(&lesson.problem));
    }

    #[test]
    fn test_scroll_keys_move_content_only_when_focused() {
        let mut screen = LessonScreen::new();
        let mut state = AppState::default();

        screen.handle_key(
            KeyEvent::new(KeyCode::Char('j'), crossterm::event::KeyModifiers::NONE),
            &mut state,
        );
        assert_eq!(state.content_scroll, 1);

        state.focus = Focus::Simulator;
        screen.handle_key(
            KeyEvent::new(KeyCode::Char('j'), crossterm::event::KeyModifiers::NONE),
            &mut state,
        );
        assert_eq!(state.content_scroll, 1);
    }
}
