//! 256-bit Integer Arithmetic
//!
//! Multiprecision integers for the curve and scalar fields, represented as
//! 8 × 32-bit limbs with carries propagated through `u64` intermediates.
//!
//! ## Supported Operations
//!
//! - Addition with carry / subtraction with borrow
//! - Schoolbook 256×256 → 512 multiplication
//! - Modular reduction (fold on `2^256 ≡ r (mod m)`, shift-subtract tail)
//! - Modular exponentiation and Fermat inversion

pub mod modular;
pub mod u256;

pub use modular::{add_mod, inverse, mul_mod, pow_mod, reduce, sub_mod, DivisionByZero};
pub use u256::{U256, U512};

/// Number of bits per limb
pub const LIMB_BITS: usize = 32;

/// Number of limbs in a 256-bit integer
pub const LIMB_COUNT: usize = 8;

/// Number of limbs in a 512-bit product
pub const WIDE_LIMB_COUNT: usize = 16;
