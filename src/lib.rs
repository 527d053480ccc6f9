//! Reference secp256k1 ECDSA Implementation
//!
//! Implements the secp256k1 curve group, ECDSA signing and verification with
//! RFC 6979 deterministic nonces, and generation of the odd-multiple table
//! used by windowed (wNAF) scalar multipliers.
//!
//! ## Architecture
//!
//! Leaves first:
//!
//! 1. **bigint**: 256-bit limb arithmetic and modular helpers
//! 2. **field / scalar**: elements mod p and mod n
//! 3. **point**: affine group law with an explicit infinity variant
//! 4. **scalar_mul**: binary double-and-add
//! 5. **wnaf**: odd-multiple-of-G table generation
//! 6. **sha256 / rfc6979 / ecdsa**: hashing, nonce derivation, the protocol
//!
//! Everything is synchronous and side-effect-free; the only shared state is
//! the read-only curve constants in [`params`].
//!
//! ## Usage
//!
//! ```no_run
//! use secp256k1_core::{derive_public_key, sign, verify, Scalar};
//!
//! let d = Scalar::from_u64(0x1234);
//! let public_key = derive_public_key(&d).unwrap();
//! let signature = sign(&d, b"message").unwrap();
//! assert!(verify(&public_key, b"message", &signature));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod bigint;
pub mod ecdsa;
pub mod field;
pub mod params;
pub mod point;
pub mod rfc6979;
pub mod scalar;
pub mod scalar_mul;
pub mod sha256;
pub mod wnaf;


pub use bigint::{DivisionByZero, U256};
pub use ecdsa::{derive_public_key, sign, verify, SignError, Signature};
pub use field::FieldElement;
pub use point::Point;
pub use scalar::Scalar;
pub use scalar_mul::{scalar_mul, scalar_mul_generator};
pub use sha256::{HmacSha256, Sha256};
pub use wnaf::WnafTable;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
