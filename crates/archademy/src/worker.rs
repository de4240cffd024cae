//! Background worker for generating lessons without blocking the UI.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use archademy_core::{Architecture, Lesson};

use crate::source::LessonSource;

/// Request sent to the background worker
#[derive(Debug)]
pub enum LessonRequest {
    /// Produce the lesson for `next`, phrased as the step after `previous`
    Generate {
        previous: Architecture,
        next: Architecture,
    },
    /// Graceful shutdown
    Shutdown,
}

/// Response from the background worker
#[derive(Debug)]
pub enum LessonResponse {
    /// Lesson generation completed (boxed to keep the enum small)
    Complete(Box<Lesson>),
    /// Generation was cancelled before completion
    Cancelled,
    /// Error occurred
    Error(String),
}

/// Background worker that asks a lesson source for content on its own thread
pub struct LessonWorker {
    request_tx: Sender<LessonRequest>,
    response_rx: Receiver<LessonResponse>,
    cancel_flag: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl LessonWorker {
    /// Spawn a worker thread owning the given lesson source
    pub fn new(source: Box<dyn LessonSource + Send>) -> Self {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();
        let cancel_flag = Arc::new(AtomicBool::new(false));

        let ctx = WorkerContext {
            source,
            response_tx,
            cancel_flag: cancel_flag.clone(),
        };

        let thread = thread::spawn(move || {
            ctx.run(request_rx);
        });

        Self {
            request_tx,
            response_rx,
            cancel_flag,
            thread: Some(thread),
        }
    }

    /// Send a generation request to the worker
    pub fn send(&self, request: LessonRequest) -> bool {
        // Clear cancel flag for new work
        self.cancel_flag.store(false, Ordering::SeqCst);
        self.request_tx.send(request).is_ok()
    }

    /// Try to receive a response (non-blocking)
    pub fn try_recv(&self) -> Option<LessonResponse> {
        self.response_rx.try_recv().ok()
    }

    /// Request cancellation of the current generation
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::SeqCst);
    }

    /// Check if cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::SeqCst)
    }

    /// Shutdown the worker thread
    pub fn shutdown(&self) {
        let _ = self.request_tx.send(LessonRequest::Shutdown);
    }
}

impl Drop for LessonWorker {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// State owned by the background worker thread
struct WorkerContext {
    source: Box<dyn LessonSource + Send>,
    response_tx: Sender<LessonResponse>,
    cancel_flag: Arc<AtomicBool>,
}

impl WorkerContext {
    fn run(&self, request_rx: Receiver<LessonRequest>) {
        while let Ok(request) = request_rx.recv() {
            match request {
                LessonRequest::Shutdown => break,

                LessonRequest::Generate { previous, next } => {
                    tracing::info!(
                        previous = previous.title(),
                        next = next.title(),
                        source = self.source.describe(),
                        "Generating lesson"
                    );

                    if self.cancel_flag.load(Ordering::SeqCst) {
                        let _ = self.response_tx.send(LessonResponse::Cancelled);
                        continue;
                    }

                    let result = self.source.generate(previous, next);

                    // A cancellation that raced the source wins
                    if self.cancel_flag.load(Ordering::SeqCst) {
                        let _ = self.response_tx.send(LessonResponse::Cancelled);
                        continue;
                    }

                    match result {
                        Ok(lesson) => {
                            let _ = self
                                .response_tx
                                .send(LessonResponse::Complete(Box::new(lesson)));
                        }
                        Err(e) => {
                            let _ = self.response_tx.send(LessonResponse::Error(e.to_string()));
                        }
                    }
                }
            }
        }
    }
}
