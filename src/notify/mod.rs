//! Host collaborators: warning logging and trial-panel rendering.

pub mod logger;
pub mod panel;

#[cfg(any(test, feature = "test-seams"))]
pub mod recording;
