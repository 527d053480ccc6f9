//! secp256k1 Point Operations
//!
//! Affine representation with an explicit point-at-infinity variant. The
//! group law follows the textbook chord-and-tangent case analysis; both
//! `add` and `double` only ever invert quantities their guards have proved
//! nonzero, so a [`DivisionByZero`] escaping from here means a caller broke
//! that precondition.

use crate::bigint::DivisionByZero;
use crate::field::FieldElement;
use crate::params;

/// A point on the curve: the group identity, or a finite pair satisfying
/// y² = x³ + 7
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Point {
    /// The point at infinity (group identity)
    Infinity,
    /// A finite point (x, y)
    Affine {
        /// x-coordinate
        x: FieldElement,
        /// y-coordinate
        y: FieldElement,
    },
}

impl Point {
    /// Create a finite point from coordinates
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        Point::Affine { x, y }
    }

    /// Generator point G
    pub fn generator() -> Self {
        let params = params::curve();
        Point::Affine {
            x: FieldElement::new(params.gx),
            y: FieldElement::new(params.gy),
        }
    }

    /// Check if this is the point at infinity
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// The coordinates of a finite point, `None` for infinity
    pub fn coordinates(&self) -> Option<(FieldElement, FieldElement)> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, y } => Some((*x, *y)),
        }
    }

    /// Check membership: infinity counts, a finite point must satisfy
    /// y² = x³ + 7 (mod p). Coordinates are reduced by construction, so no
    /// separate range check is needed.
    pub fn is_on_curve(&self) -> bool {
        match self {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let rhs = x.square().mul(x).add(&FieldElement::from_u64(params::B));
                y.square() == rhs
            }
        }
    }

    /// Point negation: -(x, y) = (x, -y)
    pub fn negate(&self) -> Self {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine { x: *x, y: y.neg() },
        }
    }

    /// Group addition.
    ///
    /// Case analysis: identity operands pass through; equal x with opposite
    /// y is a point plus its inverse (infinity); equal x otherwise means the
    /// operands are the same point and doubling applies; the remaining case
    /// is the chord formula with slope (y₂-y₁)/(x₂-x₁).
    pub fn add(&self, other: &Self) -> Result<Self, DivisionByZero> {
        let (x1, y1) = match self {
            Point::Infinity => return Ok(*other),
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match other {
            Point::Infinity => return Ok(*self),
            Point::Affine { x, y } => (x, y),
        };

        if x1 == x2 {
            if y1.add(y2).is_zero() {
                return Ok(Point::Infinity);
            }
            return self.double();
        }

        // x2 - x1 ≠ 0 here, so the inversion cannot fail
        let lambda = y2.sub(y1).mul(&x2.sub(x1).invert()?);
        let x3 = lambda.square().sub(x1).sub(x2);
        let y3 = lambda.mul(&x1.sub(&x3)).sub(y1);
        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// Point doubling.
    ///
    /// A point with y = 0 has order 2 and doubles to infinity; secp256k1 has
    /// no such point, but the branch keeps the 2y inversion total. Tangent
    /// slope is 3x²/2y.
    pub fn double(&self) -> Result<Self, DivisionByZero> {
        let (x, y) = match self {
            Point::Infinity => return Ok(Point::Infinity),
            Point::Affine { x, y } => (x, y),
        };
        if y.is_zero() {
            return Ok(Point::Infinity);
        }

        let x_sq = x.square();
        let numerator = x_sq.add(&x_sq).add(&x_sq);
        let lambda = numerator.mul(&y.add(y).invert()?);
        let x3 = lambda.square().sub(x).sub(x);
        let y3 = lambda.mul(&x.sub(&x3)).sub(y);
        Ok(Point::Affine { x: x3, y: y3 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_on_curve() {
        assert!(Point::generator().is_on_curve());
    }

    #[test]
    fn test_infinity_on_curve() {
        assert!(Point::Infinity.is_on_curve());
    }

    #[test]
    fn test_off_curve_point_rejected() {
        let bogus = Point::new(FieldElement::from_u64(1), FieldElement::from_u64(1));
        assert!(!bogus.is_on_curve());
    }

    #[test]
    fn test_identity_cases() {
        let g = Point::generator();
        assert_eq!(Point::Infinity.add(&g).unwrap(), g);
        assert_eq!(g.add(&Point::Infinity).unwrap(), g);
        assert!(Point::Infinity.double().unwrap().is_infinity());
        assert!(Point::Infinity.negate().is_infinity());
    }

    #[test]
    fn test_add_inverse_is_infinity() {
        let g = Point::generator();
        assert!(g.add(&g.negate()).unwrap().is_infinity());
    }

    #[test]
    fn test_double_equals_self_add() {
        let g = Point::generator();
        assert_eq!(g.add(&g).unwrap(), g.double().unwrap());
    }

    #[test]
    fn test_double_stays_on_curve() {
        let two_g = Point::generator().double().unwrap();
        assert!(two_g.is_on_curve());
        let three_g = two_g.add(&Point::generator()).unwrap();
        assert!(three_g.is_on_curve());
    }

    #[test]
    fn test_negate_on_curve() {
        let neg_g = Point::generator().negate();
        assert!(neg_g.is_on_curve());
        assert_ne!(neg_g, Point::generator());
    }

    #[test]
    fn test_associativity_sample() {
        let g = Point::generator();
        let two_g = g.double().unwrap();
        // (G + G) + G == G + (G + G)
        let left = two_g.add(&g).unwrap();
        let right = g.add(&two_g).unwrap();
        assert_eq!(left, right);
    }
}
