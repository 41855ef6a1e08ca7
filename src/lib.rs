//! # Trialwarden
//!
//! **Offline signed license keys with a trial-watermark policy.**
//!
//! Trialwarden checks a license key of the form `<base64 payload>.<base64 signature>`
//! against the running product version. The payload is only interpreted
//! after its RSASSA-PKCS1-v1.5 / SHA-1 signature has been verified.
//!
//! ## Features
//!
//! - **Signature first**: payload bytes are never decoded before verification
//! - **Closed token model**: every key is `Corrupted`, `Internal` or `Verified`
//! - **Version coverage**: licenses encode the highest covered `major.minor`
//! - **Preview grace**: preview builds of the next release are checked against the previous one
//! - **Run once**: validation runs at most once per process, even across threads
//!
//! ## Quickstart
//!
//! ```no_run
//! use trialwarden::{LicenseValidator, RsaPublicKeyConfig, TrialwardenConfig, VersionPolicy};
//!
//! fn main() -> Result<(), trialwarden::TrialwardenError> {
//!     let config = TrialwardenConfig {
//!         public_key: RsaPublicKeyConfig {
//!             modulus_hex: "your-rsa-modulus-hex",
//!             exponent: 65537,
//!         },
//!         internal_usage_id: "your-internal-usage-id",
//!         package_version: "24.2.3",
//!         buy_now_url: trialwarden::config::DEFAULT_BUY_NOW_URL,
//!         policy: VersionPolicy::default(),
//!     };
//!
//!     let validator = LicenseValidator::new(config)?;
//!     let outcome = validator.validate_license(Some("LICENSE-KEY-HERE"), None);
//!
//!     if let Some(code) = outcome.logged {
//!         println!("License warning: {}", code);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Warning codes
//!
//! - `W0019`: no license key
//! - `W0020`: license does not cover this version (or foreign internal id)
//! - `W0021`: license key is corrupted
//! - `W0022`: preview build
//!
//! Client-side licensing can always be bypassed by a determined attacker
//! with access to the binary. Nothing here ever stops the host program.

#![warn(missing_docs)]

// Core modules
pub mod config;
pub mod errors;
pub mod state;
pub mod version;

// Crypto layer
pub mod crypto;

// Token layer
pub mod token;

// Policy layer
pub mod policy;

// Host collaborators
pub mod notify;

// Validator (main public API)
pub mod validator;

#[cfg(test)]
mod test_support;

// Re-exports for public API
pub use config::{RsaPublicKeyConfig, TrialwardenConfig, VersionPolicy};
pub use crypto::verify::{RsaSha1Verifier, SignatureVerifier};
pub use errors::TrialwardenError;
pub use notify::logger::{TracingLogger, WarningLogger};
pub use notify::panel::{
    show_custom_trial_panel, show_trial_panel, CustomTrialPanelOptions, TracingRenderer,
    TrialPanelAttributes, TrialPanelOptions, TrialPanelRenderer,
};
pub use policy::check::{LicenseCheckParams, LicensePolicy, WarningCode};
pub use state::{peek_validation_performed, ValidationState};
pub use token::models::{CorruptionKind, LicensePayload, Token};
pub use token::parse::parse_license_key;
pub use validator::{LicenseValidator, ValidationOutcome};
pub use version::{parse_version, ParsedVersion};

#[cfg(any(test, feature = "test-seams"))]
pub use notify::recording::{RecordingLogger, RecordingRenderer};
