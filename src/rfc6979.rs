//! RFC 6979 Deterministic Nonce Derivation
//!
//! Derives the ECDSA signing nonce k from the private key and message digest
//! with an HMAC-SHA256 deterministic bit generator, eliminating the
//! nonce-reuse risk of a random source. Same (key, digest) pair, same k.
//!
//! For secp256k1 both qlen and the hash output are 256 bits, so bits2int is
//! the identity and a single V fills each candidate.

use crate::bigint::U256;
use crate::params;
use crate::scalar::Scalar;
use crate::sha256::HmacSha256;

/// Generation rounds before giving up. A conforming generator produces an
/// in-range candidate on the first round with overwhelming probability; the
/// cap turns the RFC's open retry loop into a bounded one.
const MAX_GENERATE_ROUNDS: usize = 128;

/// Derive a nonce k in [1, n-1] from the private key and a 32-byte message
/// digest. Returns `None` only if the generation cap is exhausted.
pub fn derive_nonce(private_key: &Scalar, digest: &[u8; 32]) -> Option<Scalar> {
    let x = private_key.to_be_bytes();
    let h = bits2octets(digest);

    let mut v = [0x01u8; 32];
    let mut k = [0x00u8; 32];

    // seed the generator with the key and digest, domain-separated by a
    // 0x00 then 0x01 marker byte
    k = hmac_parts(&k, &[&v, &[0x00], &x, &h]);
    v = hmac_parts(&k, &[&v]);
    k = hmac_parts(&k, &[&v, &[0x01], &x, &h]);
    v = hmac_parts(&k, &[&v]);

    for _ in 0..MAX_GENERATE_ROUNDS {
        v = hmac_parts(&k, &[&v]);
        let candidate = U256::from_be_bytes(&v);
        if !candidate.is_zero() && candidate < *params::order() {
            return Some(Scalar::new(candidate));
        }
        k = hmac_parts(&k, &[&v, &[0x00]]);
        v = hmac_parts(&k, &[&v]);
    }
    None
}

/// bits2octets: the digest reduced mod n, re-encoded as 32 big-endian bytes
fn bits2octets(digest: &[u8; 32]) -> [u8; 32] {
    Scalar::reduce(&U256::from_be_bytes(digest)).to_be_bytes()
}

fn hmac_parts(key: &[u8; 32], parts: &[&[u8]]) -> [u8; 32] {
    let mut mac = HmacSha256::new(key);
    for part in parts {
        mac.update(part);
    }
    mac.finalize()
}
