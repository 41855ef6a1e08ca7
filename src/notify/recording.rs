//! Recording collaborators for deterministic tests.

use crate::notify::logger::WarningLogger;
use crate::notify::panel::{TrialPanelAttributes, TrialPanelRenderer};
use crate::policy::check::WarningCode;
use std::sync::Mutex;

/// Logger that keeps every code it receives.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    codes: Mutex<Vec<WarningCode>>,
}

impl RecordingLogger {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Codes logged so far, oldest first.
    pub fn codes(&self) -> Vec<WarningCode> {
        self.codes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl WarningLogger for RecordingLogger {
    fn log(&self, code: WarningCode) {
        self.codes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(code);
    }
}

/// Renderer that keeps the attributes of every requested panel.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    panels: Mutex<Vec<TrialPanelAttributes>>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Panels requested so far, oldest first.
    pub fn panels(&self) -> Vec<TrialPanelAttributes> {
        self.panels
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl TrialPanelRenderer for RecordingRenderer {
    fn render(&self, attributes: &TrialPanelAttributes) {
        self.panels
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(attributes.clone());
    }
}
