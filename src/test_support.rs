//! Shared fixtures for unit tests: a throwaway RSA key and license signing.

use crate::config::{RsaPublicKeyConfig, TrialwardenConfig, VersionPolicy, DEFAULT_BUY_NOW_URL};
use crate::crypto::{codec::encode_base64, digest::sha1_digest};
use once_cell::sync::Lazy;
use rsa::{pkcs8::DecodePrivateKey, traits::PublicKeyParts, Pkcs1v15Sign, RsaPrivateKey};
use sha1::Sha1;

const TEST_SIGNING_KEY_PEM: &str = include_str!("../tests/fixtures/test_signing_key.pem");

/// Modulus of the signing key fixture.
static TEST_MODULUS_HEX: Lazy<String> =
    Lazy::new(|| hex::encode(SIGNING_KEY.to_public_key().n().to_bytes_be()));

pub static TEST_PUBLIC_KEY: Lazy<RsaPublicKeyConfig> = Lazy::new(|| RsaPublicKeyConfig {
    modulus_hex: TEST_MODULUS_HEX.as_str(),
    exponent: 65537,
});

pub const TEST_INTERNAL_ID: &str = "test-internal-usage-id";

/// `{"customerId":"fixture-customer","maxVersionAllowed":92,"format":1}`,
/// signed with OpenSSL rather than the `rsa` crate.
pub const FIXTURE_PAYLOAD_SEGMENT: &str =
    "eyJjdXN0b21lcklkIjoiZml4dHVyZS1jdXN0b21lciIsIm1heFZlcnNpb25BbGxvd2VkIjo5MiwiZm9ybWF0IjoxfQ==";
pub const FIXTURE_SIGNATURE_SEGMENT: &str = "Xe1A5tvQGt5sGZBZ85pudmHFKCtK9o6iX8iYdERjotecY3yqZLfCwskL2mVo1RrxZ7z/rFTqnLYS9kR8722i9UIWv+bocu9n54wjxgbp+fAixMgbOvg9Vp5UkECI3qmfT2gehzSncv+1HYbcKykGtMDh7m8izuVCsisVGdE68rA=";

pub static SIGNING_KEY: Lazy<RsaPrivateKey> = Lazy::new(|| {
    RsaPrivateKey::from_pkcs8_pem(TEST_SIGNING_KEY_PEM).expect("test key fixture is valid PEM")
});

pub fn test_config() -> TrialwardenConfig {
    TrialwardenConfig {
        public_key: *TEST_PUBLIC_KEY,
        internal_usage_id: TEST_INTERNAL_ID,
        package_version: "9.2.5",
        buy_now_url: DEFAULT_BUY_NOW_URL,
        policy: VersionPolicy::default(),
    }
}

/// Sign `text` and return the base64 signature segment.
pub fn sign_text(text: &str) -> String {
    let signature = SIGNING_KEY
        .sign(Pkcs1v15Sign::new::<Sha1>(), &sha1_digest(text))
        .expect("signing with the test key succeeds");
    encode_base64(&signature)
}

/// Build a signed license key for an arbitrary payload segment.
pub fn sign_segment(payload_segment: &str) -> String {
    format!("{}.{}", payload_segment, sign_text(payload_segment))
}

/// Build a signed license key whose payload is `json`.
pub fn sign_json(json: &str) -> String {
    sign_segment(&encode_base64(json.as_bytes()))
}

/// A signed, well-formed license covering versions up to `max_version_allowed`.
pub fn license_for(max_version_allowed: i64) -> String {
    sign_json(&format!(
        r#"{{"customerId":"customer-1","maxVersionAllowed":{},"format":1}}"#,
        max_version_allowed
    ))
}
