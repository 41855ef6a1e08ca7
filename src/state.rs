//! Run-once flag for license validation.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Records whether license validation has already run.
///
/// Starts unset and is set by the first [`ValidationState::check_and_set`];
/// it is never cleared outside test builds.
#[derive(Debug, Default)]
pub struct ValidationState {
    performed: AtomicBool,
}

static PROCESS_STATE: Lazy<Arc<ValidationState>> = Lazy::new(|| Arc::new(ValidationState::new()));

impl ValidationState {
    /// Create an unset flag.
    pub const fn new() -> Self {
        Self {
            performed: AtomicBool::new(false),
        }
    }

    /// The flag shared by every validator built with [`crate::LicenseValidator::new`].
    pub fn process() -> Arc<ValidationState> {
        Arc::clone(&PROCESS_STATE)
    }

    /// Set the flag. Returns `true` only for the caller that set it.
    pub fn check_and_set(&self) -> bool {
        self.performed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Whether validation has run.
    pub fn is_performed(&self) -> bool {
        self.performed.load(Ordering::Acquire)
    }

    /// Force the flag; `true` skips any further validation, `false` re-arms it.
    #[cfg(any(test, feature = "test-seams"))]
    pub fn set_skip_condition(&self, value: bool) {
        self.performed.store(value, Ordering::Release);
    }
}

/// Whether validation has run in this process.
pub fn peek_validation_performed() -> bool {
    PROCESS_STATE.is_performed()
}
