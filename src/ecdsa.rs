//! ECDSA Signing and Verification
//!
//! Signing: z = SHA-256(m), k from RFC 6979, R = k·G, r = R.x mod n,
//! s = k⁻¹·(z + r·d) mod n.
//!
//! Verification: w = s⁻¹ mod n, u1 = z·w, u2 = r·w, X = u1·G + u2·Q,
//! accept iff X ≠ ∞ and X.x mod n = r.
//!
//! Verification never raises: every malformed input resolves to `false`,
//! keeping "signature invalid" distinct from "implementation error".

use std::fmt;

use crate::bigint::{DivisionByZero, U256};
use crate::point::Point;
use crate::rfc6979;
use crate::scalar::Scalar;
use crate::scalar_mul::{scalar_mul, scalar_mul_generator};
use crate::sha256::Sha256;

/// ECDSA signature (r, s), both components in [1, n-1]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    /// r component (x-coordinate of k·G, mod n)
    pub r: Scalar,
    /// s component
    pub s: Scalar,
}

impl Signature {
    /// Create from components
    pub fn new(r: Scalar, s: Scalar) -> Self {
        Signature { r, s }
    }
}

/// Signing failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignError {
    /// Private key outside [1, n-1]
    InvalidKey,
    /// Degenerate nonce outcome: R at infinity, r = 0, s = 0, or generator
    /// exhaustion. Practically unreachable under RFC 6979, but checked.
    NonceFailure,
    /// An arithmetic precondition was violated in a lower layer
    Arithmetic(DivisionByZero),
}

impl fmt::Display for SignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignError::InvalidKey => write!(f, "private key outside [1, n-1]"),
            SignError::NonceFailure => write!(f, "degenerate nonce outcome"),
            SignError::Arithmetic(inner) => write!(f, "arithmetic failure: {}", inner),
        }
    }
}

impl std::error::Error for SignError {}

impl From<DivisionByZero> for SignError {
    fn from(inner: DivisionByZero) -> Self {
        SignError::Arithmetic(inner)
    }
}

/// Sign `message` with `private_key`, deriving k deterministically.
///
/// The message is hashed with SHA-256, the same primitive that keys the
/// nonce generator. Identical inputs always produce identical signatures.
pub fn sign(private_key: &Scalar, message: &[u8]) -> Result<Signature, SignError> {
    if private_key.is_zero() {
        return Err(SignError::InvalidKey);
    }

    let digest = Sha256::hash(message);
    let k = rfc6979::derive_nonce(private_key, &digest).ok_or(SignError::NonceFailure)?;

    let r_point = scalar_mul_generator(k.as_u256())?;
    let (rx, _) = r_point.coordinates().ok_or(SignError::NonceFailure)?;
    let r = Scalar::reduce(rx.as_u256());
    if r.is_zero() {
        return Err(SignError::NonceFailure);
    }

    let e = Scalar::reduce(&U256::from_be_bytes(&digest));
    let s = k.invert()?.mul(&e.add(&r.mul(private_key)));
    if s.is_zero() {
        return Err(SignError::NonceFailure);
    }

    Ok(Signature { r, s })
}

/// Verify `signature` over `message` under `public_key`.
///
/// Returns `false` (never an error) for structurally invalid input: a public
/// key that is infinity or off the curve, or zero signature components.
/// Values of r and s at or above n are unrepresentable in [`Scalar`].
pub fn verify(public_key: &Point, message: &[u8], signature: &Signature) -> bool {
    if public_key.is_infinity() || !public_key.is_on_curve() {
        return false;
    }
    if signature.r.is_zero() || signature.s.is_zero() {
        return false;
    }

    let digest = Sha256::hash(message);
    let e = Scalar::reduce(&U256::from_be_bytes(&digest));

    let w = match signature.s.invert() {
        Ok(w) => w,
        Err(DivisionByZero) => return false,
    };
    let u1 = e.mul(&w);
    let u2 = signature.r.mul(&w);

    let term_g = match scalar_mul_generator(u1.as_u256()) {
        Ok(point) => point,
        Err(DivisionByZero) => return false,
    };
    let term_q = match scalar_mul(u2.as_u256(), public_key) {
        Ok(point) => point,
        Err(DivisionByZero) => return false,
    };
    let x_point = match term_g.add(&term_q) {
        Ok(point) => point,
        Err(DivisionByZero) => return false,
    };

    match x_point.coordinates() {
        Some((x, _)) => Scalar::reduce(x.as_u256()) == signature.r,
        None => false,
    }
}

/// Compute the public key d·G for a valid private key
pub fn derive_public_key(private_key: &Scalar) -> Result<Point, SignError> {
    if private_key.is_zero() {
        return Err(SignError::InvalidKey);
    }
    Ok(scalar_mul_generator(private_key.as_u256())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldElement;

    #[test]
    fn test_sign_verify_roundtrip() {
        let d = Scalar::from_u64(0x1234_5678);
        let public_key = derive_public_key(&d).unwrap();
        let signature = sign(&d, b"roundtrip message").unwrap();
        assert!(verify(&public_key, b"roundtrip message", &signature));
    }

    #[test]
    fn test_wrong_message_rejected() {
        let d = Scalar::from_u64(99);
        let public_key = derive_public_key(&d).unwrap();
        let signature = sign(&d, b"signed message").unwrap();
        assert!(!verify(&public_key, b"different message", &signature));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let signature = sign(&Scalar::from_u64(7), b"message").unwrap();
        let other_public = derive_public_key(&Scalar::from_u64(8)).unwrap();
        assert!(!verify(&other_public, b"message", &signature));
    }

    #[test]
    fn test_zero_key_invalid() {
        assert_eq!(sign(&Scalar::zero(), b"message"), Err(SignError::InvalidKey));
        assert_eq!(derive_public_key(&Scalar::zero()), Err(SignError::InvalidKey));
    }

    #[test]
    fn test_verify_rejects_infinity_key() {
        let signature = sign(&Scalar::from_u64(5), b"message").unwrap();
        assert!(!verify(&Point::Infinity, b"message", &signature));
    }

    #[test]
    fn test_verify_rejects_off_curve_key() {
        let bogus = Point::new(FieldElement::from_u64(2), FieldElement::from_u64(3));
        let signature = sign(&Scalar::from_u64(5), b"message").unwrap();
        assert!(!verify(&bogus, b"message", &signature));
    }

    #[test]
    fn test_verify_rejects_zero_components() {
        let d = Scalar::from_u64(5);
        let public_key = derive_public_key(&d).unwrap();
        let signature = sign(&d, b"message").unwrap();
        assert!(!verify(
            &public_key,
            b"message",
            &Signature::new(Scalar::zero(), signature.s)
        ));
        assert!(!verify(
            &public_key,
            b"message",
            &Signature::new(signature.r, Scalar::zero())
        ));
    }

    #[test]
    fn test_signing_is_deterministic() {
        let d = Scalar::from_u64(0xFEED);
        assert_eq!(sign(&d, b"same input").unwrap(), sign(&d, b"same input").unwrap());
    }
}
