//! Host editor collaborator surface.
//!
//! The core never talks to the editor directly; everything it needs from the
//! host (preference lookup, modal dialogs, toasts, quick-pick lists, progress
//! surfaces) is expressed as a trait and injected at construction. This keeps
//! every component testable without a live editor environment.

pub mod scripted;

/// Boolean preference lookup by key with a default.
pub trait HostPreferences {
    fn get_bool(&self, key: &str, default: bool) -> bool;
}

/// An entry in a searchable selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    pub label: String,
    pub description: String,
}

/// Handle to an open cancellable progress surface.
///
/// Cancellation is cooperative: the batch loop polls `is_cancelled` once per
/// iteration and stops without preemption.
pub trait ProgressHandle {
    /// Advances the surface by `increment` percentage units with a status message.
    fn report(&self, increment: f64, message: &str);
    fn is_cancelled(&self) -> bool;
}

/// Blocking UI primitives provided by the host editor.
pub trait HostUi {
    /// Blocking modal with custom button labels.
    /// Returns the chosen label, or `None` on any other dismissal (including escape).
    fn show_modal(&self, message: &str, buttons: &[&str]) -> Option<String>;
    fn show_info(&self, message: &str);
    fn show_warning(&self, message: &str);
    fn show_error(&self, message: &str);
    /// Searchable selection list. Returns the index of the chosen item,
    /// or `None` if dismissed.
    fn pick(&self, items: &[PickItem]) -> Option<usize>;
    /// Opens a cancellable progress surface with the given title.
    fn start_progress(&self, title: &str) -> Box<dyn ProgressHandle>;
}
