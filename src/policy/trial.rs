//! Whether a verdict warrants the trial panel.

use crate::policy::check::{LicenseCheckParams, LicensePolicy};
use crate::version::parse_version;
use tracing::debug;

impl LicensePolicy {
    /// Decide whether the trial panel must be shown for a verdict.
    ///
    /// Valid and internal licenses never show it. On a preview build the
    /// license is re-checked one release line back (same patch); if it is
    /// valid there, the failure is a preview-boundary artifact and the panel
    /// stays hidden.
    pub fn should_show_trial_panel(
        &self,
        params: &LicenseCheckParams,
        license_key: Option<&str>,
        version: &str,
    ) -> bool {
        if params.error.is_none() || params.internal {
            return false;
        }

        if params.preview {
            let previous = parse_version(version)
                .previous_release(self.version_policy().max_minor_version);
            let previous_params = self.check_parsed_version(license_key, &previous);

            if previous_params.error.is_none() {
                debug!(
                    version,
                    previous = %previous,
                    "License covers the previous release, hiding trial panel on preview build"
                );
                return false;
            }
        }

        true
    }
}
