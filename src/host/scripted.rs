//! Deterministic host implementation driven by scripted answers.
//!
//! Tests queue modal and quick-pick responses up front, run the code under
//! test, then inspect the recorded toasts, prompts, and progress events.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{HostPreferences, HostUi, PickItem, ProgressHandle};

/// One recorded modal invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalCall {
    pub message: String,
    pub buttons: Vec<String>,
}

/// One recorded progress report.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEvent {
    pub increment: f64,
    pub message: String,
}

/// Scripted host: answers come from queues, every interaction is recorded.
#[derive(Default)]
pub struct ScriptedHost {
    prefs: Mutex<HashMap<String, bool>>,
    modal_answers: Mutex<VecDeque<Option<String>>>,
    pick_answers: Mutex<VecDeque<Option<usize>>>,
    modals: Mutex<Vec<ModalCall>>,
    picks: Mutex<Vec<Vec<PickItem>>>,
    infos: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    progress_titles: Mutex<Vec<String>>,
    progress_events: Arc<Mutex<Vec<ProgressEvent>>>,
    /// When set, progress surfaces report cancellation once this many
    /// report() calls have been made.
    cancel_after: Mutex<Option<usize>>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a boolean preference value visible through `HostPreferences`.
    pub fn set_bool(&self, key: &str, value: bool) {
        self.prefs.lock().unwrap().insert(key.to_string(), value);
    }

    /// Queues the answer for the next modal. `None` simulates dismissal.
    pub fn queue_modal_answer(&self, answer: Option<&str>) {
        self.modal_answers
            .lock()
            .unwrap()
            .push_back(answer.map(str::to_string));
    }

    /// Queues the answer for the next quick-pick. `None` simulates dismissal.
    pub fn queue_pick_answer(&self, answer: Option<usize>) {
        self.pick_answers.lock().unwrap().push_back(answer);
    }

    /// Makes subsequently opened progress surfaces report cancellation after
    /// `reports` report() calls.
    pub fn cancel_after_reports(&self, reports: usize) {
        *self.cancel_after.lock().unwrap() = Some(reports);
    }

    pub fn modals(&self) -> Vec<ModalCall> {
        self.modals.lock().unwrap().clone()
    }

    pub fn picks(&self) -> Vec<Vec<PickItem>> {
        self.picks.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn progress_titles(&self) -> Vec<String> {
        self.progress_titles.lock().unwrap().clone()
    }

    pub fn progress_events(&self) -> Vec<ProgressEvent> {
        self.progress_events.lock().unwrap().clone()
    }
}

impl HostPreferences for ScriptedHost {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        *self.prefs.lock().unwrap().get(key).unwrap_or(&default)
    }
}

impl HostUi for ScriptedHost {
    fn show_modal(&self, message: &str, buttons: &[&str]) -> Option<String> {
        self.modals.lock().unwrap().push(ModalCall {
            message: message.to_string(),
            buttons: buttons.iter().map(|b| b.to_string()).collect(),
        });
        self.modal_answers.lock().unwrap().pop_front().flatten()
    }

    fn show_info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn show_warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn show_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn pick(&self, items: &[PickItem]) -> Option<usize> {
        self.picks.lock().unwrap().push(items.to_vec());
        self.pick_answers.lock().unwrap().pop_front().flatten()
    }

    fn start_progress(&self, title: &str) -> Box<dyn ProgressHandle> {
        self.progress_titles.lock().unwrap().push(title.to_string());
        Box::new(ScriptedProgress {
            events: Arc::clone(&self.progress_events),
            cancel_after: *self.cancel_after.lock().unwrap(),
            reports_made: AtomicUsize::new(0),
        })
    }
}

/// Progress handle that records events and honors a scripted cancellation point.
struct ScriptedProgress {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
    cancel_after: Option<usize>,
    reports_made: AtomicUsize,
}

impl ProgressHandle for ScriptedProgress {
    fn report(&self, increment: f64, message: &str) {
        self.reports_made.fetch_add(1, Ordering::SeqCst);
        self.events.lock().unwrap().push(ProgressEvent {
            increment,
            message: message.to_string(),
        });
    }

    fn is_cancelled(&self) -> bool {
        match self.cancel_after {
            Some(n) => self.reports_made.load(Ordering::SeqCst) >= n,
            None => false,
        }
    }
}
