//! Modular Arithmetic Helpers
//!
//! Reduction of 512-bit products folds the high half using
//! `2^256 ≡ r (mod m)`: for x = lo + hi·2^256, x ≡ lo + hi·r (mod m),
//! repeated until the high half clears. The tail (and reduction of plain
//! 256-bit values) is binary shift-and-subtract, so any nonzero modulus is
//! handled, not only the curve primes.

use std::fmt;

use super::u256::{U256, U512};

/// Error: multiplicative inverse of a zero residue was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionByZero;

impl fmt::Display for DivisionByZero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zero residue has no modular inverse")
    }
}

impl std::error::Error for DivisionByZero {}

/// Reduce a 256-bit value modulo `m` by shift-and-subtract
pub fn reduce(value: &U256, m: &U256) -> U256 {
    debug_assert!(!m.is_zero());
    if value < m {
        return *value;
    }
    let mut r = *value;
    let shift = r.bit_length() - m.bit_length();
    for s in (0..=shift).rev() {
        let shifted = m.shl(s);
        if r >= shifted {
            r = r.borrowing_sub(&shifted).0;
        }
    }
    r
}

/// Reduce a 512-bit product modulo `m`
pub fn reduce_wide(value: &U512, m: &U256) -> U256 {
    let r = two_pow_256_mod(m);
    let mut lo = value.low();
    let mut hi = value.high();
    while !hi.is_zero() {
        let folded = U512::from_low(&lo).add(&hi.mul_wide(&r));
        lo = folded.low();
        hi = folded.high();
    }
    reduce(&lo, m)
}

/// 2^256 mod m
fn two_pow_256_mod(m: &U256) -> U256 {
    if m.bit(255) {
        // m > 2^255: the remainder is the two's complement 2^256 - m
        U256::ZERO.borrowing_sub(m).0
    } else {
        // 2m < 2^256 never carries, so double-and-correct 256 times
        let mut r = reduce(&U256::ONE, m);
        for _ in 0..256 {
            let (doubled, _) = r.carrying_add(&r);
            r = if doubled >= *m {
                doubled.borrowing_sub(m).0
            } else {
                doubled
            };
        }
        r
    }
}

/// (a + b) mod m, for a and b already reduced
pub fn add_mod(a: &U256, b: &U256, m: &U256) -> U256 {
    debug_assert!(a < m && b < m);
    let (sum, carry) = a.carrying_add(b);
    if carry {
        // the real value is 2^256 + sum, one subtraction lands in range
        sum.borrowing_sub(m).0
    } else if sum >= *m {
        sum.borrowing_sub(m).0
    } else {
        sum
    }
}

/// (a - b) mod m, for a and b already reduced
pub fn sub_mod(a: &U256, b: &U256, m: &U256) -> U256 {
    debug_assert!(a < m && b < m);
    let (diff, borrow) = a.borrowing_sub(b);
    if borrow {
        diff.carrying_add(m).0
    } else {
        diff
    }
}

/// (a · b) mod m
pub fn mul_mod(a: &U256, b: &U256, m: &U256) -> U256 {
    reduce_wide(&a.mul_wide(b), m)
}

/// base^exp mod m by square-and-multiply, least-significant bit first
pub fn pow_mod(base: &U256, exp: &U256, m: &U256) -> U256 {
    let mut result = reduce(&U256::ONE, m);
    let mut base = reduce(base, m);
    for i in 0..exp.bit_length() {
        if exp.bit(i) {
            result = mul_mod(&result, &base, m);
        }
        base = mul_mod(&base, &base, m);
    }
    result
}

/// Multiplicative inverse modulo a prime `m`, via Fermat: a^(m-2) mod m.
///
/// The caller guarantees `m` is prime; the curve and order moduli both are.
pub fn inverse(a: &U256, m: &U256) -> Result<U256, DivisionByZero> {
    let a = reduce(a, m);
    if a.is_zero() {
        return Err(DivisionByZero);
    }
    let exp = m.borrowing_sub(&U256::from_u64(2)).0;
    Ok(pow_mod(&a, &exp, m))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prime97() -> U256 {
        U256::from_u64(97)
    }

    #[test]
    fn test_reduce_plain() {
        let m = prime97();
        assert_eq!(reduce(&U256::from_u64(96), &m), U256::from_u64(96));
        assert_eq!(reduce(&U256::from_u64(97), &m), U256::ZERO);
        assert_eq!(reduce(&U256::from_u64(1000), &m), U256::from_u64(1000 % 97));
    }

    #[test]
    fn test_reduce_large_value_small_modulus() {
        let m = prime97();
        let max = U256::ZERO.borrowing_sub(&U256::ONE).0;
        let reduced = reduce(&max, &m);
        assert!(reduced < m);
        // cross-check: reduced + 1 ≡ 2^256 (mod 97), and 2^256 mod 97 via doubling
        let mut two_pow = U256::ONE;
        for _ in 0..256 {
            let (d, _) = two_pow.carrying_add(&two_pow);
            two_pow = reduce(&d, &m);
        }
        assert_eq!(add_mod(&reduced, &U256::ONE, &m), two_pow);
    }

    #[test]
    fn test_add_sub_mod() {
        let m = prime97();
        let a = U256::from_u64(50);
        let b = U256::from_u64(60);
        assert_eq!(add_mod(&a, &b, &m), U256::from_u64(13));
        assert_eq!(sub_mod(&a, &b, &m), U256::from_u64(87));
        assert_eq!(sub_mod(&b, &a, &m), U256::from_u64(10));
    }

    #[test]
    fn test_mul_mod() {
        let m = prime97();
        let a = U256::from_u64(12);
        let b = U256::from_u64(34);
        assert_eq!(mul_mod(&a, &b, &m), U256::from_u64(12 * 34 % 97));
    }

    #[test]
    fn test_mul_mod_wide_operands() {
        // p = 2^256 - 2^32 - 977; (p-1)^2 mod p = 1
        let p = U256::from_be_hex(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        );
        let p_minus_1 = p.borrowing_sub(&U256::ONE).0;
        assert_eq!(mul_mod(&p_minus_1, &p_minus_1, &p), U256::ONE);
    }

    #[test]
    fn test_pow_mod() {
        let m = prime97();
        // 5^96 ≡ 1 (mod 97) by Fermat
        assert_eq!(pow_mod(&U256::from_u64(5), &U256::from_u64(96), &m), U256::ONE);
        assert_eq!(pow_mod(&U256::from_u64(5), &U256::ZERO, &m), U256::ONE);
    }

    #[test]
    fn test_inverse() {
        let m = prime97();
        let x = U256::from_u64(5);
        let inv = inverse(&x, &m).unwrap();
        // 5 * 39 = 195 = 2*97 + 1
        assert_eq!(inv, U256::from_u64(39));
        assert_eq!(mul_mod(&x, &inv, &m), U256::ONE);
    }

    #[test]
    fn test_inverse_of_zero() {
        assert_eq!(inverse(&U256::ZERO, &prime97()), Err(DivisionByZero));
        // multiples of the modulus are zero residues too
        assert_eq!(inverse(&U256::from_u64(194), &prime97()), Err(DivisionByZero));
    }
}
