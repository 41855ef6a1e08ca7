//! Signing helpers shared by the integration tests.

#![allow(dead_code)]

use base64::{engine::general_purpose::STANDARD, Engine};
use once_cell::sync::Lazy;
use rsa::{pkcs8::DecodePrivateKey, traits::PublicKeyParts, Pkcs1v15Sign, RsaPrivateKey};
use sha1::{Digest, Sha1};
use trialwarden::{RsaPublicKeyConfig, TrialwardenConfig, VersionPolicy};

const TEST_SIGNING_KEY_PEM: &str = include_str!("../fixtures/test_signing_key.pem");

static SIGNING_KEY: Lazy<RsaPrivateKey> =
    Lazy::new(|| RsaPrivateKey::from_pkcs8_pem(TEST_SIGNING_KEY_PEM).unwrap());

static TEST_MODULUS_HEX: Lazy<String> =
    Lazy::new(|| hex::encode(SIGNING_KEY.to_public_key().n().to_bytes_be()));

pub const INTERNAL_ID: &str = "integration-internal-id";

pub fn config() -> TrialwardenConfig {
    TrialwardenConfig {
        public_key: RsaPublicKeyConfig {
            modulus_hex: TEST_MODULUS_HEX.as_str(),
            exponent: 65537,
        },
        internal_usage_id: INTERNAL_ID,
        package_version: "9.2.5",
        buy_now_url: "https://example.com/buy",
        policy: VersionPolicy::default(),
    }
}

pub fn sign_segment(segment: &str) -> String {
    let digest = Sha1::digest(segment.as_bytes());
    let signature = SIGNING_KEY.sign(Pkcs1v15Sign::new::<Sha1>(), &digest).unwrap();
    format!("{}.{}", segment, STANDARD.encode(signature))
}

pub fn sign_json(json: &str) -> String {
    sign_segment(&STANDARD.encode(json))
}

/// License covering versions up to `major.minor`.
pub fn license_for(major: i64, minor: i64) -> String {
    sign_json(&format!(
        r#"{{"customerId":"integration-customer","maxVersionAllowed":{},"format":1}}"#,
        major * 10 + minor
    ))
}
