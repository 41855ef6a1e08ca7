//! Warning-code sink.

use crate::policy::check::WarningCode;
use tracing::warn;

/// Receives warning codes. Message text and localization are the host's job.
pub trait WarningLogger: Send + Sync {
    /// Report a warning code.
    fn log(&self, code: WarningCode);
}

/// Logger that emits codes as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl WarningLogger for TracingLogger {
    fn log(&self, code: WarningCode) {
        warn!(code = %code, "License warning");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_logger_does_not_panic_without_subscriber() {
        TracingLogger.log(WarningCode::W0022);
    }
}
