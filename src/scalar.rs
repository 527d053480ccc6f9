//! secp256k1 Scalar Arithmetic
//!
//! Integers mod the group order n. Private keys, nonces and signature
//! components are scalars; construction always reduces, so values outside
//! [0, n) cannot be represented.

use std::fmt;

use crate::bigint::{self, DivisionByZero, U256};
use crate::params;

/// Scalar (mod n), always reduced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scalar(U256);

impl Scalar {
    /// Zero
    pub fn zero() -> Self {
        Scalar(U256::ZERO)
    }

    /// Create from an integer, reducing mod n
    pub fn new(value: U256) -> Self {
        Scalar(bigint::reduce(&value, params::order()))
    }

    /// Reduce an arbitrary 256-bit value mod n.
    ///
    /// Used for r = R.x mod n and for the digest term e of the signing
    /// equation; identical to [`Scalar::new`], named for those call sites.
    pub fn reduce(value: &U256) -> Self {
        Self::new(*value)
    }

    /// Create from a u64 value
    pub fn from_u64(value: u64) -> Self {
        Scalar(U256::from_u64(value))
    }

    /// Create from 32 big-endian bytes, reducing mod n
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        Self::new(U256::from_be_bytes(bytes))
    }

    /// Serialize to 32 big-endian bytes
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    /// The reduced integer value
    pub fn as_u256(&self) -> &U256 {
        &self.0
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Add two scalars mod n
    pub fn add(&self, other: &Self) -> Self {
        Scalar(bigint::add_mod(&self.0, &other.0, params::order()))
    }

    /// Multiply two scalars mod n
    pub fn mul(&self, other: &Self) -> Self {
        Scalar(bigint::mul_mod(&self.0, &other.0, params::order()))
    }

    /// Multiplicative inverse mod n (n is prime, so Fermat applies)
    pub fn invert(&self) -> Result<Self, DivisionByZero> {
        Ok(Scalar(bigint::inverse(&self.0, params::order())?))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reduces() {
        let n_plus_7 = params::order().carrying_add(&U256::from_u64(7)).0;
        assert_eq!(Scalar::new(n_plus_7), Scalar::from_u64(7));
    }

    #[test]
    fn test_reduce_of_order_is_zero() {
        assert!(Scalar::reduce(params::order()).is_zero());
    }

    #[test]
    fn test_add_wraps() {
        let n_minus_1 = Scalar::new(params::order().borrowing_sub(&U256::ONE).0);
        assert_eq!(n_minus_1.add(&Scalar::from_u64(2)), Scalar::from_u64(1));
    }

    #[test]
    fn test_invert() {
        let k = Scalar::from_u64(12345);
        let inv = k.invert().unwrap();
        assert_eq!(k.mul(&inv), Scalar::from_u64(1));
    }

    #[test]
    fn test_invert_zero() {
        assert_eq!(Scalar::zero().invert(), Err(DivisionByZero));
    }

    #[test]
    fn test_bytes_roundtrip() {
        let k = Scalar::from_u64(0xDEAD_BEEF);
        assert_eq!(Scalar::from_be_bytes(&k.to_be_bytes()), k);
    }
}
