//! License Validator - the main public API for Trialwarden.
//!
//! The `LicenseValidator` runs the whole check once per process:
//! - Signature verification and verdict
//! - Trial panel request when the license does not cover the build
//! - A single warning code for the host to report

use crate::config::TrialwardenConfig;
use crate::crypto::verify::{RsaSha1Verifier, SignatureVerifier};
use crate::notify::logger::{TracingLogger, WarningLogger};
use crate::notify::panel::{show_trial_panel, TracingRenderer, TrialPanelOptions, TrialPanelRenderer};
use crate::policy::check::{LicenseCheckParams, LicensePolicy, WarningCode};
use crate::state::ValidationState;
use crate::TrialwardenError;
use std::sync::Arc;
use tracing::{debug, trace};

/// What a call to [`LicenseValidator::validate_license`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationOutcome {
    /// Whether this call ran the check (`false` when already validated).
    pub performed: bool,

    /// Verdict, when the check ran.
    pub params: Option<LicenseCheckParams>,

    /// Whether the trial panel was requested.
    pub trial_panel_shown: bool,

    /// Warning code handed to the logger, if any.
    pub logged: Option<WarningCode>,
}

impl ValidationOutcome {
    fn skipped() -> Self {
        Self::default()
    }
}

/// Main license validator for Trialwarden.
///
/// Create one per product and call [`validate_license`](Self::validate_license)
/// from wherever components start up; only the first call does any work.
pub struct LicenseValidator {
    config: TrialwardenConfig,
    policy: LicensePolicy,
    logger: Arc<dyn WarningLogger>,
    renderer: Arc<dyn TrialPanelRenderer>,
    state: Arc<ValidationState>,
}

impl LicenseValidator {
    /// Create a validator with the given configuration.
    ///
    /// Uses the process-wide validation flag, a `tracing` logger and a
    /// `tracing` renderer; replace them with the `with_*` methods.
    ///
    /// # Errors
    /// Returns an error if configuration validation or public key decoding fails.
    pub fn new(config: TrialwardenConfig) -> Result<Self, TrialwardenError> {
        config.validate()?;
        let verifier = RsaSha1Verifier::new(&config.public_key)?;
        Ok(Self::with_verifier_unchecked(config, Arc::new(verifier)))
    }

    /// Create a validator with a custom signature verifier.
    pub fn new_with_verifier(
        config: TrialwardenConfig,
        verifier: Arc<dyn SignatureVerifier>,
    ) -> Result<Self, TrialwardenError> {
        config.validate()?;
        Ok(Self::with_verifier_unchecked(config, verifier))
    }

    fn with_verifier_unchecked(
        config: TrialwardenConfig,
        verifier: Arc<dyn SignatureVerifier>,
    ) -> Self {
        let policy = LicensePolicy::new(verifier, config.internal_usage_id, config.policy);

        Self {
            config,
            policy,
            logger: Arc::new(TracingLogger),
            renderer: Arc::new(TracingRenderer),
            state: ValidationState::process(),
        }
    }

    /// Replace the warning logger.
    pub fn with_logger(mut self, logger: Arc<dyn WarningLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Replace the trial-panel renderer.
    pub fn with_renderer(mut self, renderer: Arc<dyn TrialPanelRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Use a dedicated run-once flag instead of the process-wide one.
    pub fn with_state(mut self, state: Arc<ValidationState>) -> Self {
        self.state = state;
        self
    }

    /// Validate a license key, at most once per validation flag.
    ///
    /// `version` defaults to the configured package version. Never fails:
    /// problems are reported through the logger and the trial panel.
    pub fn validate_license(
        &self,
        license_key: Option<&str>,
        version: Option<&str>,
    ) -> ValidationOutcome {
        if !self.state.check_and_set() {
            trace!("License validation already performed, skipping");
            return ValidationOutcome::skipped();
        }

        let version = version.unwrap_or(self.config.package_version);
        let params = self.policy.get_license_check_params(license_key, version);

        let trial_panel_shown = self
            .policy
            .should_show_trial_panel(&params, license_key, version);
        if trial_panel_shown {
            show_trial_panel(
                self.renderer.as_ref(),
                &TrialPanelOptions {
                    buy_now_url: self.config.buy_now_url.to_string(),
                    version: version.to_string(),
                },
            );
        }

        let logged = match params.error {
            Some(_) if params.preview => Some(WarningCode::W0022),
            Some(code) => Some(code),
            None if params.preview && !params.internal => Some(WarningCode::W0022),
            None => None,
        };
        if let Some(code) = logged {
            self.logger.log(code);
        }

        debug!(
            version,
            preview = params.preview,
            internal = params.internal,
            error = ?params.error,
            trial_panel_shown,
            "License validation performed"
        );

        ValidationOutcome {
            performed: true,
            params: Some(params),
            trial_panel_shown,
            logged,
        }
    }

    /// Compute a verdict without touching the validation flag or collaborators.
    pub fn get_license_check_params(
        &self,
        license_key: Option<&str>,
        version: &str,
    ) -> LicenseCheckParams {
        self.policy.get_license_check_params(license_key, version)
    }

    /// Whether validation has run for this validator's flag.
    pub fn validation_performed(&self) -> bool {
        self.state.is_performed()
    }

    /// Force or re-arm the validation flag.
    #[cfg(any(test, feature = "test-seams"))]
    pub fn set_license_check_skip_condition(&self, value: bool) {
        self.state.set_skip_condition(value);
    }

    /// The policy engine in use.
    pub fn policy(&self) -> &LicensePolicy {
        &self.policy
    }

    /// Get the current configuration.
    pub fn config(&self) -> &TrialwardenConfig {
        &self.config
    }
}
