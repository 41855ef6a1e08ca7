//! Base64 codec for the two license key segments.

use crate::TrialwardenError;
use base64::{
    alphabet,
    engine::{general_purpose::GeneralPurpose, DecodePaddingMode, GeneralPurposeConfig},
    Engine,
};

/// Standard alphabet; padding optional on decode, always written on encode.
const LICENSE_B64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a base64 segment.
///
/// Fails with [`TrialwardenError::Decoding`] on characters outside the
/// standard alphabet or on malformed padding.
pub fn decode_base64(input: &str) -> Result<Vec<u8>, TrialwardenError> {
    LICENSE_B64
        .decode(input)
        .map_err(|e| TrialwardenError::Decoding(e.to_string()))
}

/// Encode bytes as padded standard base64.
pub fn encode_base64(bytes: &[u8]) -> String {
    LICENSE_B64.encode(bytes)
}
