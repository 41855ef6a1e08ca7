//! Trialwarden configuration.

/// Purchase page opened from the trial panel unless the product overrides it.
pub const DEFAULT_BUY_NOW_URL: &str =
    "https://go.devexpress.com/Licensing_Installer_Watermark_DevExtreme.aspx";

/// RSA public key used to verify license signatures.
#[derive(Debug, Clone, Copy)]
pub struct RsaPublicKeyConfig {
    /// Big-endian modulus, hex-encoded.
    /// SECURITY: This should be hard-coded in your application, not from environment.
    pub modulus_hex: &'static str,

    /// Public exponent (almost always 65537).
    pub exponent: u32,
}

/// Release-cadence constants that drive the preview and back-check rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionPolicy {
    /// First patch number of a release that is no longer a preview build.
    pub rtm_min_patch_version: i64,

    /// Highest minor version shipped per major line. Used when stepping back
    /// from `X.1` to the previous major's last minor.
    pub max_minor_version: i64,
}

impl Default for VersionPolicy {
    fn default() -> Self {
        Self {
            rtm_min_patch_version: 3,
            max_minor_version: 2,
        }
    }
}

/// Configuration for license validation.
///
/// Every field is product-specific and meant to be compiled into the
/// embedding application.
#[derive(Debug, Clone)]
pub struct TrialwardenConfig {
    /// Key that signed the licenses.
    pub public_key: RsaPublicKeyConfig,

    /// Identifier carried by licenses reserved for in-house use.
    pub internal_usage_id: &'static str,

    /// Version of the running product, used when the caller passes none.
    pub package_version: &'static str,

    /// Link placed on the trial panel.
    pub buy_now_url: &'static str,

    /// Preview / back-check policy.
    pub policy: VersionPolicy,
}

impl TrialwardenConfig {
    /// Validate configuration for obvious errors.
    pub fn validate(&self) -> Result<(), crate::TrialwardenError> {
        let modulus = self.public_key.modulus_hex;
        if modulus.is_empty() {
            return Err(crate::TrialwardenError::ConfigError(
                "public_key.modulus_hex cannot be empty".to_string(),
            ));
        }
        if modulus.len() % 2 != 0 || !modulus.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(crate::TrialwardenError::ConfigError(format!(
                "public_key.modulus_hex must be an even number of hex characters, got {}",
                modulus.len()
            )));
        }
        let exponent = self.public_key.exponent;
        if exponent < 3 || exponent % 2 == 0 {
            return Err(crate::TrialwardenError::ConfigError(format!(
                "public_key.exponent must be an odd number >= 3, got {}",
                exponent
            )));
        }
        if self.package_version.is_empty() {
            return Err(crate::TrialwardenError::ConfigError(
                "package_version cannot be empty".to_string(),
            ));
        }
        if self.policy.max_minor_version <= 0 {
            return Err(crate::TrialwardenError::ConfigError(
                "policy.max_minor_version must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrialwardenError;

    fn test_config() -> TrialwardenConfig {
        TrialwardenConfig {
            public_key: RsaPublicKeyConfig {
                modulus_hex: "c0ffee",
                exponent: 65537,
            },
            internal_usage_id: "internal",
            package_version: "9.2.5",
            buy_now_url: DEFAULT_BUY_NOW_URL,
            policy: VersionPolicy::default(),
        }
    }

    #[test]
    fn test_default_policy_constants() {
        let policy = VersionPolicy::default();
        assert_eq!(policy.rtm_min_patch_version, 3);
        assert_eq!(policy.max_minor_version, 2);
    }

    #[test]
    fn test_valid_config() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn test_odd_length_modulus_rejected() {
        let mut config = test_config();
        config.public_key.modulus_hex = "abc";
        assert!(matches!(
            config.validate(),
            Err(TrialwardenError::ConfigError(_))
        ));
    }

    #[test]
    fn test_non_hex_modulus_rejected() {
        let mut config = test_config();
        config.public_key.modulus_hex = "zz";
        assert!(matches!(
            config.validate(),
            Err(TrialwardenError::ConfigError(_))
        ));
    }

    #[test]
    fn test_even_exponent_rejected() {
        let mut config = test_config();
        config.public_key.exponent = 65536;
        assert!(matches!(
            config.validate(),
            Err(TrialwardenError::ConfigError(_))
        ));
    }

    #[test]
    fn test_empty_package_version_rejected() {
        let mut config = test_config();
        config.package_version = "";
        assert!(matches!(
            config.validate(),
            Err(TrialwardenError::ConfigError(_))
        ));
    }

    #[test]
    fn test_zero_max_minor_rejected() {
        let mut config = test_config();
        config.policy.max_minor_version = 0;
        assert!(matches!(
            config.validate(),
            Err(TrialwardenError::ConfigError(_))
        ));
    }
}
