//! License verdicts for a product version.
//!
//! This module turns a license key and a version into [`LicenseCheckParams`]:
//! - Builds before the RTM patch level are previews
//! - Internal licenses are valid only with the configured internal id
//! - Public licenses must cover `major * 10 + minor`
//!
//! Failures never escape; they become warning codes.

use crate::config::VersionPolicy;
use crate::crypto::verify::SignatureVerifier;
use crate::token::models::Token;
use crate::token::parse::parse_license_key;
use crate::version::{parse_version, ParsedVersion};
use crate::TrialwardenError;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Opaque warning identifiers resolved to human text by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// No license key was provided.
    W0019,
    /// License does not cover this version, or internal id mismatch.
    W0020,
    /// License key is corrupted or the check failed.
    W0021,
    /// Build is a preview.
    W0022,
}

impl WarningCode {
    /// Code string, e.g. `"W0021"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::W0019 => "W0019",
            Self::W0020 => "W0020",
            Self::W0021 => "W0021",
            Self::W0022 => "W0022",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for one license key and version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LicenseCheckParams {
    /// Version is a preview build.
    pub preview: bool,

    /// License is an internal-use license.
    pub internal: bool,

    /// Warning to report, if the license is not valid for this version.
    pub error: Option<WarningCode>,
}

impl LicenseCheckParams {
    fn warning(preview: bool, code: WarningCode) -> Self {
        Self {
            preview,
            internal: false,
            error: Some(code),
        }
    }

    fn valid(preview: bool) -> Self {
        Self {
            preview,
            internal: false,
            error: None,
        }
    }
}

/// License policy engine bound to a signature verifier.
#[derive(Clone)]
pub struct LicensePolicy {
    verifier: Arc<dyn SignatureVerifier>,
    internal_usage_id: String,
    version_policy: VersionPolicy,
}

impl fmt::Debug for LicensePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LicensePolicy")
            .field("version_policy", &self.version_policy)
            .finish_non_exhaustive()
    }
}

impl LicensePolicy {
    /// Create a policy engine.
    pub fn new(
        verifier: Arc<dyn SignatureVerifier>,
        internal_usage_id: impl Into<String>,
        version_policy: VersionPolicy,
    ) -> Self {
        Self {
            verifier,
            internal_usage_id: internal_usage_id.into(),
            version_policy,
        }
    }

    /// Release-cadence constants in use.
    pub fn version_policy(&self) -> &VersionPolicy {
        &self.version_policy
    }

    /// Parse a license key with this engine's verifier.
    pub fn parse_license_key(&self, license_key: Option<&str>) -> Token {
        parse_license_key(license_key, self.verifier.as_ref())
    }

    /// Compute the verdict for `license_key` on product `version`.
    pub fn get_license_check_params(
        &self,
        license_key: Option<&str>,
        version: &str,
    ) -> LicenseCheckParams {
        self.check_parsed_version(license_key, &parse_version(version))
    }

    pub(crate) fn check_parsed_version(
        &self,
        license_key: Option<&str>,
        version: &ParsedVersion,
    ) -> LicenseCheckParams {
        let preview = version.is_preview(self.version_policy.rtm_min_patch_version);

        self.evaluate(license_key, version, preview)
            .unwrap_or_else(|e| {
                debug!(error = %e, version = %version, "License check failed, reporting as corrupted");
                LicenseCheckParams::warning(preview, WarningCode::W0021)
            })
    }

    fn evaluate(
        &self,
        license_key: Option<&str>,
        version: &ParsedVersion,
        preview: bool,
    ) -> Result<LicenseCheckParams, TrialwardenError> {
        let Some(license_key) = license_key.filter(|key| !key.is_empty()) else {
            return Ok(LicenseCheckParams::warning(preview, WarningCode::W0019));
        };

        match self.parse_license_key(Some(license_key)) {
            Token::Corrupted(_) => Ok(LicenseCheckParams::warning(preview, WarningCode::W0021)),

            Token::Internal { internal_usage_id } => Ok(LicenseCheckParams {
                preview,
                internal: true,
                error: (internal_usage_id != self.internal_usage_id).then_some(WarningCode::W0020),
            }),

            Token::Verified { payload } => {
                let (Some(major), Some(minor)) = (
                    version.major.filter(|major| *major != 0),
                    version.minor.filter(|minor| *minor != 0),
                ) else {
                    return Ok(LicenseCheckParams::warning(preview, WarningCode::W0021));
                };

                let requested = major
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(minor))
                    .ok_or(TrialwardenError::VersionOverflow)?;

                if requested > payload.max_version_allowed {
                    debug!(
                        requested,
                        max_version_allowed = payload.max_version_allowed,
                        "License does not cover this version"
                    );
                    return Ok(LicenseCheckParams::warning(preview, WarningCode::W0020));
                }

                Ok(LicenseCheckParams::valid(preview))
            }
        }
    }
}
