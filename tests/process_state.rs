//! The process-wide validation flag. Kept in its own test binary so no other
//! test touches the shared state.

mod common;

use std::sync::Arc;
use trialwarden::{peek_validation_performed, LicenseValidator, RecordingLogger, WarningCode};

#[test]
fn process_flag_is_shared_by_default_validators() {
    let logger = Arc::new(RecordingLogger::new());
    let first = LicenseValidator::new(common::config())
        .unwrap()
        .with_logger(logger.clone());
    let second = LicenseValidator::new(common::config())
        .unwrap()
        .with_logger(logger.clone());

    assert!(!peek_validation_performed());
    assert!(first.validate_license(None, Some("9.2.5")).performed);
    assert!(peek_validation_performed());

    assert!(!second.validate_license(None, Some("9.2.5")).performed);
    assert!(second.validation_performed());
    assert_eq!(logger.codes(), vec![WarningCode::W0019]);
}
