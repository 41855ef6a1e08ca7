//! Cryptographic primitives for license signature verification.

pub mod codec;
pub mod digest;
pub mod verify;
