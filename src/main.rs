//! secp256k1 Self-Check Harness
//!
//! Feeds the fixed test vectors into the curve and ECDSA layers and reports
//! one PASS/FAIL line per check. Exits nonzero if anything fails.
//!
//! Usage:
//!   secp256k1-core              Run the full vector suite
//!   secp256k1-core --help      Show this help

use std::env;
use std::process;

use secp256k1_core::bigint::U256;
use secp256k1_core::ecdsa::{derive_public_key, sign, verify, Signature};
use secp256k1_core::point::Point;
use secp256k1_core::scalar::Scalar;
use secp256k1_core::scalar_mul::scalar_mul_generator;
use secp256k1_core::{params, VERSION};

/// Known multiples of G: (k, x, y)
const MULTIPLES: [(u64, &str, &str); 6] = [
    (
        1,
        "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    ),
    (
        2,
        "C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5",
        "1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A",
    ),
    (
        3,
        "F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9",
        "388F7B0F632DE8140FE337E62A37F3566500A99934C2231B6CB9FD7584B8E672",
    ),
    (
        7,
        "5CBDF0646E5DB4EAA398F365F2EA7A0E3D419B7E0330E39CE92BDDEDCAC4F9BC",
        "6AEBCA40BA255960A3178D6D861A54DBA813D0B813FDE7B5A5082628087264DA",
    ),
    (
        8,
        "2F01E5E15CCA351DAFF3843FB70F3C2F0A1BDD05E5AF888A67784EF3E10A2A01",
        "5C4DA8A741539949293D082A132D13B4C2E213D6BA5B7617B5DA2CB76CBDE904",
    ),
    (
        255,
        "1B38903A43F7F114ED4500B4EAC7083FDEFECE1CF29C63528D563446F972C180",
        "4036EDC931A60AE889353F77FD53DE4A2708B26B6F5DA72AD3394119DAF408F9",
    ),
];

/// p - Gy
const NEG_GY: &str = "B7C52588D95C3B9AA25B0403F1EEF75702E84BB7597AABE663B82F6F04EF2777";

/// RFC 6979 secp256k1 vectors: (d, message, r, s)
const SIGNATURE_VECTORS: [(&str, &[u8], &str, &str); 3] = [
    (
        "0000000000000000000000000000000000000000000000000000000000000001",
        b"Satoshi Nakamoto",
        "934b1ea10a4b3c1757e2b0c017d0b6143ce3c9a7e6a4a49860d7a6ab210ee3d8",
        "2442ce9d2b916064108014783e923ec36b49743e2ffa1c4496f01a512aafd9e5",
    ),
    (
        "0000000000000000000000000000000000000000000000000000000000000001",
        b"All those moments will be lost in time, like tears in rain. Time to die...",
        "8600dbd41e348fe5c9465ab92d23e3db8b98b873beecd930736488696438cb6b",
        "547fe64427496db33bf66019dacbf0039c04199abb0122918601db38a72cfc21",
    ),
    (
        "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140",
        b"Satoshi Nakamoto",
        "fd567d121db66e382991534ada77a6bd3106f0a1098c231e47993447cd6af2d0",
        "6b39cd0eb1bc8603e159ef5c20a5c8ad685a45b06ce9bebed3f153d10d93bed5",
    ),
];

struct Report {
    passed: u32,
    failed: u32,
}

impl Report {
    fn new() -> Self {
        Report { passed: 0, failed: 0 }
    }

    fn check(&mut self, name: &str, ok: bool) {
        if ok {
            self.passed += 1;
            println!("{:<52} PASS", name);
        } else {
            self.failed += 1;
            println!("{:<52} FAIL", name);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Error: unknown argument '{}'", other);
                print_usage();
                process::exit(2);
            }
        }
    }

    println!("secp256k1-core vector suite v{}\n", VERSION);
    let mut report = Report::new();

    run_curve_sanity(&mut report);
    run_scalar_mul_vectors(&mut report);
    run_group_order_checks(&mut report);
    run_ecdsa_checks(&mut report);

    println!("\n{} passed, {} failed", report.passed, report.failed);
    if report.failed > 0 {
        process::exit(1);
    }
    println!("ALL TESTS PASSED.");
}

fn print_usage() {
    println!("secp256k1-core v{}", VERSION);
    println!();
    println!("Usage:");
    println!("  secp256k1-core          Run the full vector suite");
    println!("  secp256k1-core --help   Show this help");
}

fn run_curve_sanity(report: &mut Report) {
    println!("=== Curve sanity ===");
    let g = Point::generator();
    report.check("G is on curve", g.is_on_curve());

    let neg_g = g.negate();
    report.check("-G is on curve", neg_g.is_on_curve());

    let neg_y_ok = match neg_g.coordinates() {
        Some((_, y)) => *y.as_u256() == U256::from_be_hex(NEG_GY),
        None => false,
    };
    report.check("-G.y equals p - Gy", neg_y_ok);
    println!();
}

fn run_scalar_mul_vectors(report: &mut Report) {
    println!("=== Scalar multiplication vectors ===");
    for (k, x_hex, y_hex) in MULTIPLES {
        let name = format!("k = {}", k);
        match scalar_mul_generator(&U256::from_u64(k)) {
            Ok(point) => match point.coordinates() {
                Some((x, y)) => {
                    let ok = *x.as_u256() == U256::from_be_hex(x_hex)
                        && *y.as_u256() == U256::from_be_hex(y_hex);
                    if !ok {
                        println!("  expected x: {}", x_hex);
                        println!("  got      x: {}", hex::encode_upper(x.to_be_bytes()));
                    }
                    report.check(&name, ok);
                }
                None => report.check(&name, false),
            },
            Err(_) => report.check(&name, false),
        }
    }
    println!();
}

fn run_group_order_checks(report: &mut Report) {
    println!("=== Group order ===");
    let n_times_g = scalar_mul_generator(params::order());
    report.check(
        "n*G is the point at infinity",
        matches!(n_times_g, Ok(point) if point.is_infinity()),
    );

    let n_minus_1 = params::order().borrowing_sub(&U256::ONE).0;
    let matches_neg_g = matches!(
        scalar_mul_generator(&n_minus_1),
        Ok(point) if point == Point::generator().negate()
    );
    report.check("(n-1)*G equals -G", matches_neg_g);
    println!();
}

fn run_ecdsa_checks(report: &mut Report) {
    println!("=== ECDSA (RFC6979) ===");
    for (i, (d_hex, message, r_hex, s_hex)) in SIGNATURE_VECTORS.iter().enumerate() {
        let name = format!("signature vector {}", i + 1);
        let d = Scalar::new(U256::from_be_hex(d_hex));
        match sign(&d, message) {
            Ok(signature) => {
                let ok = hex::encode(signature.r.to_be_bytes()) == *r_hex
                    && hex::encode(signature.s.to_be_bytes()) == *s_hex;
                if !ok {
                    println!("  expected r: {}", r_hex);
                    println!("  got      r: {}", hex::encode(signature.r.to_be_bytes()));
                    println!("  expected s: {}", s_hex);
                    println!("  got      s: {}", hex::encode(signature.s.to_be_bytes()));
                }
                report.check(&name, ok);
            }
            Err(err) => {
                println!("  signing failed: {}", err);
                report.check(&name, false);
            }
        }
    }

    let d = Scalar::new(U256::from_be_hex(SIGNATURE_VECTORS[0].0));
    let message = SIGNATURE_VECTORS[0].1;
    let roundtrip = match (derive_public_key(&d), sign(&d, message)) {
        (Ok(public_key), Ok(signature)) => {
            let accepted = verify(&public_key, message, &signature);
            let tampered_rejected = !verify(&public_key, b"tampered message", &signature);
            let zero_r_rejected =
                !verify(&public_key, message, &Signature::new(Scalar::zero(), signature.s));
            accepted && tampered_rejected && zero_r_rejected
        }
        _ => false,
    };
    report.check("sign/verify roundtrip and rejection", roundtrip);

    let deterministic = match (sign(&d, message), sign(&d, message)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    };
    report.check("signing is deterministic", deterministic);
}
