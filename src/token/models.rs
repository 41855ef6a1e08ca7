//! License token structs and classification.

use crate::TrialwardenError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Why a license key could not be turned into a usable token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorruptionKind {
    /// Missing key, or not exactly two non-empty `.`-separated segments.
    General,
    /// Signature does not match the payload segment.
    Verification,
    /// Payload segment is not base64.
    Decoding,
    /// Decoded payload is not JSON.
    Deserialization,
    /// Required payload fields are missing or mistyped.
    Payload,
    /// Payload format is not the supported one.
    Version,
}

impl CorruptionKind {
    /// Stable tag for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Verification => "verification",
            Self::Decoding => "decoding",
            Self::Deserialization => "deserialization",
            Self::Payload => "payload",
            Self::Version => "version",
        }
    }
}

impl fmt::Display for CorruptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&TrialwardenError> for CorruptionKind {
    fn from(error: &TrialwardenError) -> Self {
        match error {
            TrialwardenError::SignatureInvalid => Self::Verification,
            TrialwardenError::Decoding(_) => Self::Decoding,
            TrialwardenError::Deserialization(_) => Self::Deserialization,
            TrialwardenError::PayloadInvalid(_) => Self::Payload,
            TrialwardenError::UnsupportedFormat(_) => Self::Version,
            TrialwardenError::MalformedKey
            | TrialwardenError::ConfigError(_)
            | TrialwardenError::VersionOverflow => Self::General,
        }
    }
}

/// Contents of a verified public license.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicensePayload {
    /// Customer the license was issued to.
    pub customer_id: String,

    /// Highest covered product version, encoded as `major * 10 + minor`.
    pub max_version_allowed: i64,

    /// Any other fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of parsing a license key.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Key could not be verified or understood.
    Corrupted(CorruptionKind),

    /// License reserved for in-house use.
    Internal {
        /// Identifier compared against the configured internal usage id.
        internal_usage_id: String,
    },

    /// Signature-verified public license.
    Verified {
        /// Decoded payload.
        payload: LicensePayload,
    },
}

impl Token {
    /// Corruption kind, if the token is corrupted.
    pub fn corruption(&self) -> Option<CorruptionKind> {
        match self {
            Self::Corrupted(kind) => Some(*kind),
            Self::Internal { .. } | Self::Verified { .. } => None,
        }
    }
}

impl From<TrialwardenError> for Token {
    fn from(error: TrialwardenError) -> Self {
        Self::Corrupted(CorruptionKind::from(&error))
    }
}
