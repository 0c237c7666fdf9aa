use std::sync::Arc;

use crate::host::{HostPreferences, HostUi};

/// Preference key controlling whether destructive commands ask first.
pub const CONFIRM_BEFORE_TRANSMIT_KEY: &str = "virtualtab.transmit.confirmBeforeTransmit";

/// Ask-then-act policy gated by a boolean preference.
pub struct ConfirmationGate {
    prefs: Arc<dyn HostPreferences>,
    ui: Arc<dyn HostUi>,
}

impl ConfirmationGate {
    pub fn new(prefs: Arc<dyn HostPreferences>, ui: Arc<dyn HostUi>) -> Self {
        Self { prefs, ui }
    }

    /// Runs `action` either immediately (preference at `config_key` is false)
    /// or after the user picks exactly `confirm_label` in a modal. Any other
    /// dismissal is cancellation and the action is not run.
    ///
    /// Errors from `action` propagate unchanged; the gate does not own the
    /// action's semantics.
    pub fn execute_with_confirmation<E, F>(
        &self,
        message: &str,
        confirm_label: &str,
        config_key: Option<&str>,
        action: F,
    ) -> Result<(), E>
    where
        F: FnOnce() -> Result<(), E>,
    {
        let key = config_key.unwrap_or(CONFIRM_BEFORE_TRANSMIT_KEY);
        if !self.prefs.get_bool(key, true) {
            return action();
        }

        match self.ui.show_modal(message, &[confirm_label]) {
            Some(choice) if choice == confirm_label => action(),
            _ => Ok(()),
        }
    }
}
