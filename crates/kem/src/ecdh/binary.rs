//! Typed ECDH over the named binary curves

use core::fmt;
use core::marker::PhantomData;

use crate::error::{validate as kem_validate, Error as KemError};
use bincurve_algorithms::ec::binary::{NamedCurve, Point, Scalar};
use bincurve_algorithms::validate;
use bincurve_algorithms::{Sect163k1, Sect163r2, Sect233k1, Sect283k1};
use bincurve_api::{error::Error as ApiError, KeyAgreement, Result as ApiResult};
use bincurve_common::security::SecretBuffer;
use bincurve_internal::ct_eq_choice;
use bincurve_params::{GF2_MAX_BYTES, GF2_PACKED_POINT_BYTES};
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// ECDH key agreement on the named curve `C`
pub struct Ecdh<C: NamedCurve>(PhantomData<C>);

/// ECDH on K-163
pub type EcdhK163 = Ecdh<Sect163k1>;
/// ECDH on B-163
pub type EcdhB163 = Ecdh<Sect163r2>;
/// ECDH on K-233
pub type EcdhK233 = Ecdh<Sect233k1>;
/// ECDH on K-283
pub type EcdhK283 = Ecdh<Sect283k1>;

/// Public key: a packed point of `C::PUBLIC_KEY_SIZE` bytes
#[derive(Clone, PartialEq, Eq)]
pub struct EcdhPublicKey<C: NamedCurve> {
    bytes: [u8; GF2_PACKED_POINT_BYTES],
    _curve: PhantomData<C>,
}

/// Secret key: a scalar in `[1, order - 1]`, `C::SECRET_KEY_SIZE` bytes
#[derive(Clone)]
pub struct EcdhSecretKey<C: NamedCurve> {
    scalar: SecretBuffer<GF2_MAX_BYTES>,
    _curve: PhantomData<C>,
}

/// Shared secret: the x-coordinate of the shared point
///
/// The raw value is not uniformly distributed; derive keys from it with a
/// KDF.
#[derive(Clone)]
pub struct EcdhSharedSecret<C: NamedCurve> {
    x: SecretBuffer<GF2_MAX_BYTES>,
    _curve: PhantomData<C>,
}

impl<C: NamedCurve> EcdhPublicKey<C> {
    /// Parse a packed public key
    ///
    /// Checks the length and that both coordinates are reduced field
    /// elements. Curve membership is left to
    /// [`KeyAgreement::validate_public_key`].
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let len = C::PUBLIC_KEY_SIZE;
        if bytes.len() != len {
            return Err(ApiError::InvalidLength {
                context: "ECDH public key",
                expected: len,
                actual: bytes.len(),
            });
        }
        let curve = C::curve().map_err(|e| ApiError::from(KemError::from(e)))?;
        let point = Point::from_packed(C::PARAMS, bytes)
            .map_err(|e| ApiError::from(KemError::from(e)))?;
        validate::parameter(
            curve.is_canonical(&point),
            "ECDH public key",
            "coordinate has bits at or above the field degree",
        )
        .map_err(|e| ApiError::from(KemError::from(e)))?;

        let mut out = [0u8; GF2_PACKED_POINT_BYTES];
        out[..len].copy_from_slice(bytes);
        Ok(EcdhPublicKey {
            bytes: out,
            _curve: PhantomData,
        })
    }

    fn from_point(point: &Point) -> ApiResult<Self> {
        let mut bytes = [0u8; GF2_PACKED_POINT_BYTES];
        point
            .to_packed(C::PARAMS, &mut bytes)
            .map_err(|e| ApiError::from(KemError::from(e)))?;
        Ok(EcdhPublicKey {
            bytes,
            _curve: PhantomData,
        })
    }
}

impl<C: NamedCurve> AsRef<[u8]> for EcdhPublicKey<C> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes[..C::PUBLIC_KEY_SIZE]
    }
}

impl<C: NamedCurve> AsMut<[u8]> for EcdhPublicKey<C> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[..C::PUBLIC_KEY_SIZE]
    }
}

impl<C: NamedCurve> fmt::Debug for EcdhPublicKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EcdhPublicKey<{}>(", C::NAME)?;
        for b in self.as_ref().iter().rev() {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}

impl<C: NamedCurve> EcdhSecretKey<C> {
    /// Load a secret scalar, rejecting zero and values not below the order
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let curve = C::curve().map_err(|e| ApiError::from(KemError::from(e)))?;
        let scalar = Scalar::new(&curve, bytes).map_err(|_| {
            ApiError::from(KemError::InvalidKey {
                key_type: "ECDH secret",
                reason: "scalar must be in [1, order - 1]",
            })
        })?;
        Ok(Self::from_scalar(&scalar))
    }

    fn from_scalar(scalar: &Scalar) -> Self {
        EcdhSecretKey {
            scalar: scalar.as_secret_buffer().clone(),
            _curve: PhantomData,
        }
    }

    fn scalar_bytes(&self) -> &[u8] {
        &self.scalar.as_slice()[..C::SECRET_KEY_SIZE]
    }
}

impl<C: NamedCurve> AsRef<[u8]> for EcdhSecretKey<C> {
    fn as_ref(&self) -> &[u8] {
        self.scalar_bytes()
    }
}

impl<C: NamedCurve> Zeroize for EcdhSecretKey<C> {
    fn zeroize(&mut self) {
        self.scalar.zeroize();
    }
}

impl<C: NamedCurve> ZeroizeOnDrop for EcdhSecretKey<C> {}

impl<C: NamedCurve> fmt::Debug for EcdhSecretKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EcdhSecretKey<{}>([REDACTED])", C::NAME)
    }
}

impl<C: NamedCurve> AsRef<[u8]> for EcdhSharedSecret<C> {
    fn as_ref(&self) -> &[u8] {
        &self.x.as_slice()[..C::SHARED_SECRET_SIZE]
    }
}

impl<C: NamedCurve> Zeroize for EcdhSharedSecret<C> {
    fn zeroize(&mut self) {
        self.x.zeroize();
    }
}

impl<C: NamedCurve> ZeroizeOnDrop for EcdhSharedSecret<C> {}

impl<C: NamedCurve> ConstantTimeEq for EcdhSharedSecret<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        ct_eq_choice(self.as_ref(), other.as_ref())
    }
}

impl<C: NamedCurve> fmt::Debug for EcdhSharedSecret<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EcdhSharedSecret<{}>([REDACTED])", C::NAME)
    }
}

impl<C: NamedCurve> KeyAgreement for Ecdh<C> {
    type PublicKey = EcdhPublicKey<C>;
    type SecretKey = EcdhSecretKey<C>;
    type SharedSecret = EcdhSharedSecret<C>;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        C::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let curve = C::curve().map_err(|e| ApiError::from(KemError::from(e)))?;
        let (sk, pk) = curve
            .generate_keypair(rng)
            .map_err(|e| ApiError::from(KemError::from(e)))?;
        kem_validate::key_generation(!pk.is_identity(), C::NAME, "public key is the identity")
            .map_err(ApiError::from)?;

        Ok((EcdhPublicKey::from_point(&pk)?, EcdhSecretKey::from_scalar(&sk)))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn validate_public_key(public_key: &Self::PublicKey) -> ApiResult<()> {
        let valid = super::validate_public_key(C::PARAMS, public_key.as_ref())
            .map_err(ApiError::from)?;
        kem_validate::key(
            valid,
            "ECDH public",
            "point at infinity, off the curve, or outside the prime-order subgroup",
        )
        .map_err(ApiError::from)
    }

    fn shared_secret(
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> ApiResult<Self::SharedSecret> {
        Self::validate_public_key(peer_public_key)?;

        let curve = C::curve().map_err(|e| ApiError::from(KemError::from(e)))?;
        let q = Point::from_packed(C::PARAMS, peer_public_key.as_ref())
            .map_err(|e| ApiError::from(KemError::from(e)))?;
        let s = curve
            .mul(&q, secret_key.scalar_bytes())
            .map_err(|e| ApiError::from(KemError::from(e)))?;
        kem_validate::key_agreement(!s.is_identity(), C::NAME, "shared point is the identity")
            .map_err(ApiError::from)?;

        let x = SecretBuffer::from_slice(&s.x().as_bytes()[..C::SHARED_SECRET_SIZE]).ok_or(
            ApiError::InvalidLength {
                context: "ECDH shared secret",
                expected: GF2_MAX_BYTES,
                actual: C::SHARED_SECRET_SIZE,
            },
        )?;
        Ok(EcdhSharedSecret {
            x,
            _curve: PhantomData,
        })
    }
}
