//! secp256k1 Curve Parameters
//!
//! All constants as defined in SEC 2: Recommended Elliptic Curve Domain
//! Parameters. The parameters are materialized once into a [`CurveParams`]
//! and shared read-only by every component.

use std::sync::OnceLock;

use crate::bigint::U256;

/// secp256k1 field modulus: p = 2^256 - 2^32 - 977
/// = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F
pub const P_BYTES: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF,
    0xFC, 0x2F,
];

/// secp256k1 group order: n
/// = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
pub const N_BYTES: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
    0x41, 0x41,
];

/// Generator point G x-coordinate
/// = 0x79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798
pub const GX_BYTES: [u8; 32] = [
    0x79, 0xBE, 0x66, 0x7E, 0xF9, 0xDC, 0xBB, 0xAC, 0x55, 0xA0, 0x62, 0x95, 0xCE, 0x87, 0x0B,
    0x07, 0x02, 0x9B, 0xFC, 0xDB, 0x2D, 0xCE, 0x28, 0xD9, 0x59, 0xF2, 0x81, 0x5B, 0x16, 0xF8,
    0x17, 0x98,
];

/// Generator point G y-coordinate
/// = 0x483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8
pub const GY_BYTES: [u8; 32] = [
    0x48, 0x3A, 0xDA, 0x77, 0x26, 0xA3, 0xC4, 0x65, 0x5D, 0xA4, 0xFB, 0xFC, 0x0E, 0x11, 0x08,
    0xA8, 0xFD, 0x17, 0xB4, 0x48, 0xA6, 0x85, 0x54, 0x19, 0x9C, 0x47, 0xD0, 0x8F, 0xFB, 0x10,
    0xD4, 0xB8,
];

/// Curve parameter b in y² = x³ + 7
pub const B: u64 = 7;

/// Immutable curve domain parameters
#[derive(Debug)]
pub struct CurveParams {
    /// Field modulus p
    pub p: U256,
    /// Group order n
    pub n: U256,
    /// Generator x-coordinate
    pub gx: U256,
    /// Generator y-coordinate
    pub gy: U256,
}

impl CurveParams {
    fn secp256k1() -> Self {
        CurveParams {
            p: U256::from_be_bytes(&P_BYTES),
            n: U256::from_be_bytes(&N_BYTES),
            gx: U256::from_be_bytes(&GX_BYTES),
            gy: U256::from_be_bytes(&GY_BYTES),
        }
    }
}

/// Shared read-only curve parameters, built on first use
pub fn curve() -> &'static CurveParams {
    static PARAMS: OnceLock<CurveParams> = OnceLock::new();
    PARAMS.get_or_init(CurveParams::secp256k1)
}

/// Field modulus p
pub fn modulus() -> &'static U256 {
    &curve().p
}

/// Group order n
pub fn order() -> &'static U256 {
    &curve().n
}
