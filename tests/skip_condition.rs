//! The debug override on the process-wide validation flag, through the
//! `test-seams` public API. Kept in its own test binary so no other test
//! touches the shared state.

mod common;

use std::sync::Arc;
use trialwarden::{
    peek_validation_performed, LicenseValidator, RecordingLogger, RecordingRenderer, WarningCode,
};

#[test]
fn skip_condition_suppresses_and_rearms_process_validation() {
    let logger = Arc::new(RecordingLogger::new());
    let renderer = Arc::new(RecordingRenderer::new());
    let validator = LicenseValidator::new(common::config())
        .unwrap()
        .with_logger(logger.clone())
        .with_renderer(renderer.clone());

    assert!(!peek_validation_performed());
    validator.set_license_check_skip_condition(true);
    assert!(peek_validation_performed());
    assert!(validator.validation_performed());

    let outcome = validator.validate_license(None, Some("9.2.5"));
    assert!(!outcome.performed);
    assert_eq!(outcome.params, None);
    assert!(logger.codes().is_empty());
    assert!(renderer.panels().is_empty());

    validator.set_license_check_skip_condition(false);
    assert!(!peek_validation_performed());

    let outcome = validator.validate_license(None, Some("9.2.5"));
    assert!(outcome.performed);
    assert_eq!(logger.codes(), vec![WarningCode::W0019]);
    assert_eq!(renderer.panels().len(), 1);
}
