//! License key parsing: `<base64 payload>.<base64 signature>` into a [`Token`].
//!
//! The order of checks matters:
//! 1. Shape (exactly two non-empty segments)
//! 2. Signature over the raw payload segment
//! 3. Base64, then JSON
//! 4. Internal-usage marker, before any public payload field
//! 5. Required fields, then format

use crate::crypto::{codec::decode_base64, verify::SignatureVerifier};
use crate::token::models::{CorruptionKind, LicensePayload, Token};
use crate::TrialwardenError;
use serde_json::Value;
use tracing::debug;

/// Separator between payload and signature segments.
pub const SPLITTER: char = '.';

/// The only payload `format` value this build understands.
pub const SUPPORTED_FORMAT: i64 = 1;

const INTERNAL_USAGE_ID_FIELD: &str = "internalUsageId";
const CUSTOMER_ID_FIELD: &str = "customerId";
const MAX_VERSION_ALLOWED_FIELD: &str = "maxVersionAllowed";
const FORMAT_FIELD: &str = "format";

/// Parse and verify an encoded license key.
///
/// Never fails: every problem is reported as [`Token::Corrupted`].
pub fn parse_license_key(encoded: Option<&str>, verifier: &dyn SignatureVerifier) -> Token {
    split_key(encoded)
        .and_then(|(payload, signature)| decode_token(payload, signature, verifier))
        .unwrap_or_else(|e| {
            let kind = CorruptionKind::from(&e);
            debug!(error = %e, kind = %kind, "License key rejected");
            Token::Corrupted(kind)
        })
}

fn split_key(encoded: Option<&str>) -> Result<(&str, &str), TrialwardenError> {
    let encoded = encoded.ok_or(TrialwardenError::MalformedKey)?;
    let mut parts = encoded.split(SPLITTER);

    match (parts.next(), parts.next(), parts.next()) {
        (Some(payload), Some(signature), None) if !payload.is_empty() && !signature.is_empty() => {
            Ok((payload, signature))
        }
        _ => Err(TrialwardenError::MalformedKey),
    }
}

fn decode_token(
    payload_segment: &str,
    signature_segment: &str,
    verifier: &dyn SignatureVerifier,
) -> Result<Token, TrialwardenError> {
    if !verifier.verify(payload_segment, signature_segment) {
        return Err(TrialwardenError::SignatureInvalid);
    }

    let bytes = decode_base64(payload_segment)?;

    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|e| TrialwardenError::Deserialization(e.to_string()))?;

    let Value::Object(mut fields) = value else {
        return Err(TrialwardenError::PayloadInvalid(
            "payload is not a JSON object".to_string(),
        ));
    };

    // Internal licenses are exempt from the public payload schema.
    if let Some(id) = fields.remove(INTERNAL_USAGE_ID_FIELD) {
        let internal_usage_id = match id {
            Value::String(s) => s,
            other => other.to_string(),
        };
        return Ok(Token::Internal { internal_usage_id });
    }

    let customer_id = fields.remove(CUSTOMER_ID_FIELD);
    let max_version_allowed = fields.remove(MAX_VERSION_ALLOWED_FIELD);
    let format = fields.remove(FORMAT_FIELD);

    let (Some(customer_id), Some(max_version_allowed), Some(format)) =
        (customer_id, max_version_allowed, format)
    else {
        return Err(TrialwardenError::PayloadInvalid(format!(
            "{}, {} and {} are required",
            CUSTOMER_ID_FIELD, MAX_VERSION_ALLOWED_FIELD, FORMAT_FIELD
        )));
    };

    if as_integer(&format) != Some(SUPPORTED_FORMAT) {
        return Err(TrialwardenError::UnsupportedFormat(format.to_string()));
    }

    let Value::String(customer_id) = customer_id else {
        return Err(TrialwardenError::PayloadInvalid(format!(
            "{} must be a string",
            CUSTOMER_ID_FIELD
        )));
    };

    let max_version_allowed = as_integer(&max_version_allowed).ok_or_else(|| {
        TrialwardenError::PayloadInvalid(format!("{} must be an integer", MAX_VERSION_ALLOWED_FIELD))
    })?;

    Ok(Token::Verified {
        payload: LicensePayload {
            customer_id,
            max_version_allowed,
            extra: fields,
        },
    })
}

/// JSON numbers with no fractional part, whether written `1` or `1.0`.
fn as_integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}
