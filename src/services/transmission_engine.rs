//! Transmission engine: copies selected files to a configured destination
//! directory with overwrite confirmation, progress reporting, and
//! cooperative cancellation.
//!
//! Batch copies are strictly sequential; cancellation is polled once per
//! iteration and already-copied files are never rolled back.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use walkdir::WalkDir;

use crate::host::{HostUi, PickItem};
use crate::services::localization::{keys, params, LocalizerTrait};
use crate::types::transmit::TransmitTarget;

/// Pause between files in a batch. A UI throttle, not a correctness requirement.
pub const TRANSMIT_THROTTLE: Duration = Duration::from_millis(50);

pub struct TransmissionEngine {
    ui: Arc<dyn HostUi>,
    messages: Arc<dyn LocalizerTrait>,
}

impl TransmissionEngine {
    pub fn new(ui: Arc<dyn HostUi>, messages: Arc<dyn LocalizerTrait>) -> Self {
        Self { ui, messages }
    }

    /// Copies one file into `target.path`, flat (the source's directory
    /// structure is not preserved). Returns whether the copy happened.
    ///
    /// A missing source and I/O failures surface a localized error toast and
    /// return false; a user-declined overwrite returns false silently. This
    /// method never panics or propagates an error.
    pub fn transmit_file(
        &self,
        source: &Path,
        target: &TransmitTarget,
        confirm_overwrite: bool,
    ) -> bool {
        let file_name = match source.file_name() {
            Some(name) => name.to_owned(),
            None => {
                self.show_source_missing(source);
                return false;
            }
        };
        if !source.exists() {
            self.show_source_missing(source);
            return false;
        }

        let dest_dir = Path::new(&target.path);
        let destination = dest_dir.join(&file_name);
        let display_name = file_name.to_string_lossy().into_owned();

        if destination.exists() && confirm_overwrite {
            let overwrite = self.messages.t(keys::OVERWRITE, None);
            let skip = self.messages.t(keys::SKIP, None);
            let prompt = self.messages.t(
                keys::OVERWRITE_PROMPT,
                Some(&params(&[
                    ("file", display_name.clone()),
                    ("target", target.name.clone()),
                ])),
            );
            match self.ui.show_modal(&prompt, &[overwrite.as_str(), skip.as_str()]) {
                Some(choice) if choice == overwrite => {}
                // Skip, or any other dismissal: a non-fatal skip
                _ => return false,
            }
        }

        if let Err(e) = fs::create_dir_all(dest_dir) {
            self.show_copy_failed(&display_name, &e);
            return false;
        }
        match fs::copy(source, &destination) {
            Ok(_) => true,
            Err(e) => {
                self.show_copy_failed(&display_name, &e);
                false
            }
        }
    }

    /// Copies a batch of files under a cancellable progress surface titled
    /// with the target's name, reporting per-file progress and a final tally.
    ///
    /// Skips and failures are counted together; they are not distinguished
    /// in the completion message.
    pub fn transmit_files(&self, sources: &[PathBuf], target: &TransmitTarget) {
        if sources.is_empty() {
            self.ui.show_info(&self.messages.t(keys::NO_FILES, None));
            return;
        }

        let title = self.messages.t(
            keys::PROGRESS_TITLE,
            Some(&params(&[("target", target.name.clone())])),
        );
        let progress = self.ui.start_progress(&title);

        let total = sources.len();
        let increment = 100.0 / total as f64;
        let mut success = 0usize;
        let mut cancelled = false;

        for (i, source) in sources.iter().enumerate() {
            if progress.is_cancelled() {
                cancelled = true;
                break;
            }

            let file_name = source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| source.display().to_string());
            progress.report(
                increment,
                &self.messages.t(
                    keys::PROGRESS_ITEM,
                    Some(&params(&[
                        ("index", (i + 1).to_string()),
                        ("total", total.to_string()),
                        ("file", file_name),
                    ])),
                ),
            );

            if self.transmit_file(source, target, true) {
                success += 1;
            }

            if i + 1 < total {
                thread::sleep(TRANSMIT_THROTTLE);
            }
        }

        let message = if cancelled {
            self.messages.t(
                keys::CANCELLED,
                Some(&params(&[("success", success.to_string())])),
            )
        } else {
            self.messages.t(
                keys::DONE,
                Some(&params(&[
                    ("success", success.to_string()),
                    ("total", total.to_string()),
                    ("target", target.name.clone()),
                ])),
            )
        };
        self.ui.show_info(&message);
    }

    /// Resolves which target to transmit to.
    ///
    /// Empty list warns and yields nothing; a singleton is auto-selected
    /// without prompting; multiple targets go through a quick-pick.
    pub fn select_target(&self, targets: &[TransmitTarget]) -> Option<TransmitTarget> {
        match targets {
            [] => {
                self.ui
                    .show_warning(&self.messages.t(keys::NO_TARGETS, None));
                None
            }
            [only] => Some(only.clone()),
            _ => {
                let items: Vec<PickItem> = targets
                    .iter()
                    .map(|t| PickItem {
                        label: t.name.clone(),
                        description: t.path.clone(),
                    })
                    .collect();
                self.ui.pick(&items).map(|i| targets[i].clone())
            }
        }
    }

    fn show_source_missing(&self, source: &Path) {
        self.ui.show_error(&self.messages.t(
            keys::SOURCE_MISSING,
            Some(&params(&[("path", source.display().to_string())])),
        ));
    }

    fn show_copy_failed(&self, file: &str, error: &std::io::Error) {
        self.ui.show_error(&self.messages.t(
            keys::COPY_FAILED,
            Some(&params(&[
                ("file", file.to_string()),
                ("error", error.to_string()),
            ])),
        ));
    }
}

/// Recursively enumerates regular files under a directory, depth-first in
/// the order entries are encountered, with no sorting applied.
///
/// A nonexistent path or a non-directory yields an empty list, never an error.
pub fn files_in_directory(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}
