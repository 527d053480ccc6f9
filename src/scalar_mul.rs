//! Scalar Multiplication
//!
//! Binary double-and-add over the affine group law.

use crate::bigint::{self, DivisionByZero, U256};
use crate::params;
use crate::point::Point;

/// Compute k·p by double-and-add, least-significant bit first.
///
/// k is reduced modulo the group order n before the loop. That reduction is
/// an ECDSA-context convention, not a general group-theory identity: it
/// preserves the product only because every point this crate multiplies
/// (the generator and on-curve public keys) has order exactly n.
pub fn scalar_mul(k: &U256, p: &Point) -> Result<Point, DivisionByZero> {
    let k = bigint::reduce(k, params::order());
    if k.is_zero() || p.is_infinity() {
        return Ok(Point::Infinity);
    }

    let mut acc = Point::Infinity;
    let mut addend = *p;
    for i in 0..k.bit_length() {
        if k.bit(i) {
            acc = acc.add(&addend)?;
        }
        addend = addend.double()?;
    }
    Ok(acc)
}

/// Compute k·G
pub fn scalar_mul_generator(k: &U256) -> Result<Point, DivisionByZero> {
    scalar_mul(k, &Point::generator())
}
