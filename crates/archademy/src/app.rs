use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use archademy_core::Architecture;

use crate::components::{Component, EventResult, roadmap::Roadmap, status_bar::StatusBar};
use crate::data::{DataDirectory, ProgressData};
use crate::screens::lesson::LessonScreen;
use crate::source::{BundledSource, LessonSource, RecordDirSource};
use crate::state::{AppState, GenerationStatus};
use crate::worker::{LessonRequest, LessonWorker};

/// How long one pass of the event loop waits for input before draining the
/// worker again
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Build the active lesson source. Sources are stateless, so the app
/// constructs one for startup hydration and another for the worker thread.
fn make_source(lessons_dir: Option<&PathBuf>) -> Box<dyn LessonSource + Send> {
    match lessons_dir {
        Some(dir) => Box::new(RecordDirSource::new(dir.clone())),
        None => Box::new(BundledSource),
    }
}

/// Replay lessons up to `target_step` from the source so a resumed session
/// lands where it left off.
///
/// A record that fails to hydrate rolls the resume point back to the last
/// step that loaded and surfaces the failure in the status bar.
fn hydrate_state(state: &mut AppState, source: &dyn LessonSource, target_step: usize) {
    for step in 1..=target_step {
        let (Some(previous), Some(next)) = (
            Architecture::from_index(step - 1),
            Architecture::from_index(step),
        ) else {
            break;
        };

        match source.generate(previous, next) {
            Ok(lesson) => {
                state.lessons.insert(next, lesson);
                state.current_step = step;
            }
            Err(e) => {
                tracing::warn!(step, error = %e, "Failed to rehydrate lesson, resuming earlier");
                state.set_error(format!(
                    "Could not restore lesson {}: resuming from {}",
                    step + 1,
                    state.current_architecture().title()
                ));
                break;
            }
        }
    }
}

pub struct App {
    state: AppState,
    data: DataDirectory,
    worker: LessonWorker,
    roadmap: Roadmap,
    status_bar: StatusBar,
    lesson_screen: LessonScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::with_dirs(PathBuf::from(".archademy"), None)
    }
}

impl App {
    /// Create the app from its data directory and the optional lesson-record
    /// directory, restoring the saved study position
    pub fn with_dirs(data_dir: PathBuf, lessons_dir: Option<PathBuf>) -> Self {
        let data = DataDirectory::new(data_dir);
        let progress = data.load_progress();

        let mut state = AppState::default();
        let hydration_source = make_source(lessons_dir.as_ref());
        hydrate_state(&mut state, hydration_source.as_ref(), progress.current_step);

        let worker_source = make_source(lessons_dir.as_ref());
        tracing::info!(
            source = worker_source.describe(),
            step = state.current_step,
            "Course ready"
        );

        Self {
            state,
            data,
            worker: LessonWorker::new(worker_source),
            roadmap: Roadmap::new(),
            status_bar: StatusBar::new(),
            lesson_screen: LessonScreen::new(),
        }
    }

    /// Runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            self.process_worker_responses();
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn process_worker_responses(&mut self) {
        while let Some(response) = self.worker.try_recv() {
            let advanced = self.state.apply_response(response);
            if advanced {
                self.save_progress();
            }
        }
    }

    fn save_progress(&mut self) {
        let progress = ProgressData::at_step(self.state.current_step);
        if let Err(e) = self.data.save_progress(&progress) {
            tracing::warn!("Failed to save progress: {}", e);
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Roadmap stepper
                Constraint::Min(0),    // Lesson
                Constraint::Length(3), // Status bar
            ])
            .split(frame.area());

        self.roadmap.render(frame, chunks[0], &self.state);
        self.lesson_screen.render(frame, chunks[1], &self.state);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(());
        }
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                if self.state.is_generating() {
                    self.worker.cancel();
                    self.state.status = GenerationStatus::Idle;
                } else {
                    self.state.clear_error();
                }
                return;
            }
            KeyCode::Tab => {
                self.state.toggle_focus();
                return;
            }
            KeyCode::Char('n') | KeyCode::Enter => {
                self.advance();
                return;
            }
            KeyCode::Char('p') => {
                self.state.step_back();
                return;
            }
            _ => {}
        }

        let result = self.lesson_screen.handle_key(key_event, &mut self.state);
        if result == EventResult::Exit {
            self.state.exit = true;
        }
    }

    /// Move to the next roadmap entry: straight from the cache when the
    /// lesson was already received, through the worker otherwise
    fn advance(&mut self) {
        if self.state.is_generating() {
            return;
        }

        let current = self.state.current_architecture();
        let next = match current.next() {
            Ok(next) => next,
            Err(e) => {
                self.state.set_error(e.to_string());
                return;
            }
        };

        if self.state.advance_to_cached(next) {
            self.save_progress();
            return;
        }

        self.state.clear_error();
        self.state.status = GenerationStatus::Generating { target: next };
        if !self.worker.send(LessonRequest::Generate {
            previous: current,
            next,
        }) {
            self.state.status = GenerationStatus::Idle;
            self.state
                .set_error("The lesson worker is gone; restart the app.".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hydration_replays_lessons_up_to_the_saved_step() {
        let mut state = AppState::default();
        hydrate_state(&mut state, &BundledSource, 3);

        assert_eq!(state.current_step, 3);
        assert_eq!(state.current_lesson().id, Architecture::Transformer);
        assert!(state.lessons.contains_key(&Architecture::ClassicalMl));
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_hydration_rolls_back_to_the_last_loadable_step() {
        let dir = tempfile::tempdir().unwrap();
        let lesson = archademy_core::library::lesson_for(Architecture::ClassicalMl);
        let json = serde_json::to_string(&lesson).unwrap();
        std::fs::write(dir.path().join("classical_ml.json"), json).unwrap();
        // deep_learning.json is missing, so step 2 cannot hydrate
        let source = RecordDirSource::new(dir.path().to_path_buf());

        let mut state = AppState::default();
        hydrate_state(&mut state, &source, 4);

        assert_eq!(state.current_step, 1);
        assert_eq!(state.current_lesson().id, Architecture::ClassicalMl);
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_hydration_of_a_fresh_session_is_a_no_op() {
        let mut state = AppState::default();
        hydrate_state(&mut state, &BundledSource, 0);

        assert_eq!(state.current_step, 0);
        assert_eq!(state.lessons.len(), 1);
    }
}
