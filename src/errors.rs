//! Trialwarden error types.

use thiserror::Error;

/// Errors raised inside the validation pipeline.
///
/// None of these escape [`crate::LicenseValidator::validate_license`]; the
/// token parser folds them into [`crate::CorruptionKind`] and the policy
/// engine folds anything left over into a warning code.
#[derive(Debug, Error)]
pub enum TrialwardenError {
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// License key does not have the `<payload>.<signature>` shape.
    #[error("Malformed license key")]
    MalformedKey,

    /// Signature does not match the payload segment.
    #[error("License signature verification failed")]
    SignatureInvalid,

    /// Payload segment is not valid base64.
    #[error("Base64 decoding failed: {0}")]
    Decoding(String),

    /// Decoded payload is not valid JSON.
    #[error("Payload deserialization failed: {0}")]
    Deserialization(String),

    /// Payload lacks a required field or has one of the wrong type.
    #[error("Invalid license payload: {0}")]
    PayloadInvalid(String),

    /// Payload declares a format this build does not understand.
    #[error("Unsupported license format: {0}")]
    UnsupportedFormat(String),

    /// Version arithmetic overflowed.
    #[error("Version number out of range")]
    VersionOverflow,
}
