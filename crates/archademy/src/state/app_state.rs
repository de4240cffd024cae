use archademy_core::{Architecture, Lesson, ROADMAP, Simulator};
use rustc_hash::FxHashMap;

use crate::worker::LessonResponse;

/// Which part of the lesson screen receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Content,
    Simulator,
}

/// Whether a lesson generation is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    Idle,
    /// Waiting for the worker to produce the lesson for `target`
    Generating { target: Architecture },
}

/// All mutable application state.
///
/// Invariant: `lessons` always holds a record for every roadmap entry up to
/// and including `current_step`, so the accessors for the current lesson
/// never miss. Seeding the rule-based lesson at construction establishes it;
/// `apply_response` and `step_back` preserve it.
pub struct AppState {
    /// Zero-based position on the architecture roadmap
    pub current_step: usize,
    /// Every lesson received so far, keyed by architecture
    pub lessons: FxHashMap<Architecture, Lesson>,
    /// The interactive rule lab, owned here for the whole app lifetime
    pub simulator: Simulator,
    pub status: GenerationStatus,
    pub error_message: Option<String>,
    pub focus: Focus,
    pub content_scroll: u16,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        let mut lessons = FxHashMap::default();
        lessons.insert(
            Architecture::RuleBased,
            archademy_core::library::initial_lesson(),
        );

        Self {
            current_step: 0,
            lessons,
            simulator: Simulator::default(),
            status: GenerationStatus::Idle,
            error_message: None,
            focus: Focus::Content,
            content_scroll: 0,
            exit: false,
        }
    }
}

impl AppState {
    pub fn current_architecture(&self) -> Architecture {
        // current_step is only ever set to a roadmap index
        Architecture::from_index(self.current_step).expect("current_step within roadmap")
    }

    pub fn current_lesson(&self) -> &Lesson {
        let architecture = self.current_architecture();
        self.lessons
            .get(&architecture)
            .expect("lesson cached for every visited step")
    }

    /// Whether the interactive rule lab is part of the current lesson
    pub fn simulator_visible(&self) -> bool {
        self.current_architecture() == Architecture::RuleBased
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.status, GenerationStatus::Generating { .. })
    }

    pub fn at_end_of_roadmap(&self) -> bool {
        self.current_step + 1 >= ROADMAP.len()
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Flip focus between the lesson content and the simulator. When the
    /// current lesson has no simulator, content keeps focus.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Content if self.simulator_visible() => Focus::Simulator,
            _ => Focus::Content,
        };
    }

    fn move_to_step(&mut self, step: usize) {
        self.current_step = step;
        self.content_scroll = 0;
        if !self.simulator_visible() {
            self.focus = Focus::Content;
        }
    }

    /// Step back to an already-received lesson. Never refetches.
    pub fn step_back(&mut self) -> bool {
        if self.current_step == 0 {
            return false;
        }
        self.move_to_step(self.current_step - 1);
        true
    }

    /// Advance onto a lesson that is already in the cache
    pub fn advance_to_cached(&mut self, next: Architecture) -> bool {
        if self.lessons.contains_key(&next) {
            self.move_to_step(next.index());
            true
        } else {
            false
        }
    }

    /// Fold a worker response into the state.
    ///
    /// Returns true when the response advanced the roadmap. A completion
    /// arriving while no generation is pending was cancelled and is
    /// discarded; an error leaves the displayed lesson and the simulator
    /// untouched.
    pub fn apply_response(&mut self, response: LessonResponse) -> bool {
        let GenerationStatus::Generating { target } = self.status else {
            tracing::debug!("Discarding worker response after cancellation");
            return false;
        };

        match response {
            LessonResponse::Complete(lesson) => {
                self.status = GenerationStatus::Idle;
                self.lessons.insert(target, *lesson);
                self.move_to_step(target.index());
                self.clear_error();
                true
            }
            LessonResponse::Cancelled => {
                self.status = GenerationStatus::Idle;
                false
            }
            LessonResponse::Error(detail) => {
                self.status = GenerationStatus::Idle;
                tracing::warn!(error = detail, "Lesson generation failed");
                self.set_error(
                    "The architect is busy thinking. Please try again in a moment.".to_string(),
                );
                false
            }
        }
    }
}
