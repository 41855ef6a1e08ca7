//! RSASSA-PKCS1-v1.5 / SHA-1 signature verification.

use crate::config::RsaPublicKeyConfig;
use crate::crypto::{codec::decode_base64, digest::sha1_digest};
use crate::TrialwardenError;
use once_cell::sync::OnceCell;
use rsa::{traits::PublicKeyParts, BigUint, Pkcs1v15Sign, RsaPublicKey};
use sha1::Sha1;
use std::collections::HashMap;
use std::sync::RwLock;

/// Checks a license signature against the payload segment it covers.
///
/// Implementations must return `false` for any malformed signature rather
/// than panic; a bad signature is an ordinary verification failure.
pub trait SignatureVerifier: Send + Sync {
    /// Return `true` if `signature_b64` is a valid signature of `text`.
    fn verify(&self, text: &str, signature_b64: &str) -> bool;
}

/// Cache for decoded public keys, keyed by `(modulus_hex, exponent)`.
static KEY_CACHE: OnceCell<RwLock<HashMap<(String, u32), RsaPublicKey>>> = OnceCell::new();

/// Decode an RSA public key from its hex modulus and exponent.
///
/// The key is cached after first decode for performance.
pub fn decode_public_key(config: &RsaPublicKeyConfig) -> Result<RsaPublicKey, TrialwardenError> {
    let cache_key = (config.modulus_hex.to_ascii_lowercase(), config.exponent);

    let cache = KEY_CACHE.get_or_init(|| RwLock::new(HashMap::new()));
    if let Ok(guard) = cache.read() {
        if let Some(key) = guard.get(&cache_key) {
            return Ok(key.clone());
        }
    }

    let modulus = hex::decode(config.modulus_hex)
        .map_err(|e| TrialwardenError::ConfigError(format!("Invalid modulus hex: {}", e)))?;

    let public_key = RsaPublicKey::new(
        BigUint::from_bytes_be(&modulus),
        BigUint::from(config.exponent),
    )
    .map_err(|e| TrialwardenError::ConfigError(format!("Invalid RSA public key: {}", e)))?;

    // Best-effort insert into cache. If locking fails, still return the decoded key.
    if let Ok(mut guard) = cache.write() {
        guard.insert(cache_key, public_key.clone());
    }

    Ok(public_key)
}

/// Verify a PKCS#1 v1.5 signature over the SHA-1 digest of `text`.
pub fn verify_pkcs1_sha1(
    text: &str,
    signature_b64: &str,
    public_key: &RsaPublicKey,
) -> Result<(), TrialwardenError> {
    let signature = decode_base64(signature_b64).map_err(|_| TrialwardenError::SignatureInvalid)?;

    if signature.len() != public_key.size() {
        return Err(TrialwardenError::SignatureInvalid);
    }

    let hashed = sha1_digest(text);

    public_key
        .verify(Pkcs1v15Sign::new::<Sha1>(), &hashed, &signature)
        .map_err(|_| TrialwardenError::SignatureInvalid)
}

/// Verifier bound to a single RSA public key.
#[derive(Debug, Clone)]
pub struct RsaSha1Verifier {
    public_key: RsaPublicKey,
}

impl RsaSha1Verifier {
    /// Build a verifier for the configured public key.
    pub fn new(config: &RsaPublicKeyConfig) -> Result<Self, TrialwardenError> {
        Ok(Self {
            public_key: decode_public_key(config)?,
        })
    }
}

impl SignatureVerifier for RsaSha1Verifier {
    fn verify(&self, text: &str, signature_b64: &str) -> bool {
        verify_pkcs1_sha1(text, signature_b64, &self.public_key).is_ok()
    }
}
