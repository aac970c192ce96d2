//! Trait definition for Diffie-Hellman style key agreement
//!
//! Both parties run [`KeyAgreement::keypair`], exchange public keys, and call
//! [`KeyAgreement::shared_secret`] with their own secret key and the peer's
//! public key. The two results are equal.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for a non-interactive key agreement scheme with domain-specific types
pub trait KeyAgreement {
    /// Public key type, exposed in its wire encoding via `AsRef<[u8]>`
    type PublicKey: Clone + AsRef<[u8]>;

    /// Secret key type
    ///
    /// # Security Note
    /// Implements `Zeroize` so the scalar can be wiped after use.
    type SecretKey: Zeroize + Clone;

    /// Shared secret type
    ///
    /// # Security Note
    /// The raw shared value should be fed to a KDF before use as a key.
    type SharedSecret: Zeroize + Clone + AsRef<[u8]>;

    /// Keypair type holding both halves
    type KeyPair: Clone;

    /// Returns the algorithm name
    fn name() -> &'static str;

    /// Generate a new keypair from the provided CSPRNG
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a keypair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a keypair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Check that a received public key is acceptable
    fn validate_public_key(public_key: &Self::PublicKey) -> Result<()>;

    /// Derive the shared secret from our secret key and the peer's public key
    ///
    /// # Security Requirements
    /// - Must validate the peer public key.
    /// - Must reject a shared value equal to the point at infinity.
    fn shared_secret(
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
