//! secp256k1 Field Arithmetic
//!
//! Modular arithmetic over p = 2^256 - 2^32 - 977. Every stored value is
//! kept reduced into [0, p); constructors reduce, operations reduce before
//! returning.

use std::fmt;

use crate::bigint::{self, DivisionByZero, U256};
use crate::params;

/// Field element (mod p), always reduced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement(U256);

impl FieldElement {
    /// Zero
    pub fn zero() -> Self {
        FieldElement(U256::ZERO)
    }

    /// One
    pub fn one() -> Self {
        FieldElement(U256::ONE)
    }

    /// Create from an integer, reducing mod p
    pub fn new(value: U256) -> Self {
        FieldElement(bigint::reduce(&value, params::modulus()))
    }

    /// Create from a u64 value
    pub fn from_u64(value: u64) -> Self {
        FieldElement(U256::from_u64(value))
    }

    /// Create from 32 big-endian bytes, reducing mod p
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

    /// Add two field elements
    pub fn add(&self, other: &Self) -> Self {
        FieldElement(bigint::add_mod(&self.0, &other.0, params::modulus()))
    }

    /// Subtract two field elements
    pub fn sub(&self, other: &Self) -> Self {
        FieldElement(bigint::sub_mod(&self.0, &other.0, params::modulus()))
    }

    /// Multiply two field elements
    pub fn mul(&self, other: &Self) -> Self {
        FieldElement(bigint::mul_mod(&self.0, &other.0, params::modulus()))
    }

    /// Square
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Negate: 0 maps to 0, otherwise p - x
    pub fn neg(&self) -> Self {
        if self.is_zero() {
            *self
        } else {
            FieldElement(params::modulus().borrowing_sub(&self.0).0)
        }
    }

    /// Multiplicative inverse via Fermat's little theorem: x^(p-2) mod p.
    ///
    /// Fails with [`DivisionByZero`] for the zero element; the error marks a
    /// violated precondition in the caller and is propagated unchanged.
    pub fn invert(&self) -> Result<Self, DivisionByZero> {
        Ok(FieldElement(bigint::inverse(&self.0, params::modulus())?))
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reduces() {
        let p_plus_5 = params::modulus().carrying_add(&U256::from_u64(5)).0;
        assert_eq!(FieldElement::new(p_plus_5), FieldElement::from_u64(5));
    }

    #[test]
    fn test_add_wraps() {
        let a = FieldElement::new(params::modulus().borrowing_sub(&U256::ONE).0);
        let b = FieldElement::from_u64(3);
        assert_eq!(a.add(&b), FieldElement::from_u64(2));
    }

    #[test]
    fn test_sub_wraps() {
        let a = FieldElement::from_u64(1);
        let b = FieldElement::from_u64(2);
        let diff = a.sub(&b);
        assert_eq!(diff.add(&b), a);
        // 1 - 2 ≡ p - 1 ≡ -1
        assert_eq!(diff, FieldElement::one().neg());
    }

    #[test]
    fn test_neg() {
        let a = FieldElement::from_u64(100);
        assert!(a.add(&a.neg()).is_zero());
        assert!(FieldElement::zero().neg().is_zero());
    }

    #[test]
    fn test_invert() {
        let a = FieldElement::from_u64(3);
        let inv = a.invert().unwrap();
        assert_eq!(a.mul(&inv), FieldElement::one());
    }

    #[test]
    fn test_invert_zero() {
        assert_eq!(FieldElement::zero().invert(), Err(DivisionByZero));
    }

    #[test]
    fn test_square_matches_mul() {
        let a = FieldElement::from_be_bytes(&crate::params::GX_BYTES);
        assert_eq!(a.square(), a.mul(&a));
    }
}
