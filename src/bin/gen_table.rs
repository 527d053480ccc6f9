//! wNAF Table Renderer
//!
//! Generates the odd-multiple-of-G table and renders it as Verilog
//! `localparam` declarations for the hardware windowed multiplier. The X
//! block is printed first, then the Y block, then a completion marker.
//! `--json PATH` additionally writes the table as a JSON document for
//! software consumers.
//!
//! Usage:
//!   gen-wnaf-table [W] [--json PATH]
//!
//! W defaults to 10 (512 points).

use std::env;
use std::fs;
use std::process;

use serde::Serialize;

use secp256k1_core::field::FieldElement;
use secp256k1_core::wnaf::WnafTable;

/// One table entry in the JSON export
#[derive(Serialize)]
struct TableRecord {
    index: usize,
    multiple: u64,
    x: String,
    y: String,
}

/// JSON export document
#[derive(Serialize)]
struct TableExport {
    window: u32,
    count: usize,
    points: Vec<TableRecord>,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut window: u32 = 10;
    let mut json_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return;
            }
            "--json" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --json requires a path");
                    process::exit(2);
                }
                json_path = Some(args[i + 1].clone());
                i += 2;
            }
            value => {
                window = match value.parse() {
                    Ok(w) if (1..=16).contains(&w) => w,
                    _ => {
                        eprintln!("Error: window width must be an integer in 1..=16");
                        process::exit(2);
                    }
                };
                i += 1;
            }
        }
    }

    let table = match WnafTable::generate(window) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("Error: table generation failed: {}", err);
            process::exit(1);
        }
    };

    let mut xs = Vec::with_capacity(table.len());
    let mut ys = Vec::with_capacity(table.len());
    for point in table.points() {
        match point.coordinates() {
            Some((x, y)) => {
                xs.push(x);
                ys.push(y);
            }
            None => {
                eprintln!("Error: odd multiple of G cannot be infinity");
                process::exit(1);
            }
        }
    }

    for (i, x) in xs.iter().enumerate() {
        println!("localparam [255:0] K{}_X = 256'h{};\n", i, hex256(x));
    }
    for (i, y) in ys.iter().enumerate() {
        println!("localparam [255:0] K{}_Y = 256'h{};\n", i, hex256(y));
    }

    if let Some(path) = json_path {
        let export = TableExport {
            window: table.window(),
            count: table.len(),
            points: (0..table.len())
                .map(|i| TableRecord {
                    index: i,
                    multiple: table.multiple(i),
                    x: hex256(&xs[i]),
                    y: hex256(&ys[i]),
                })
                .collect(),
        };
        let json = match serde_json::to_string_pretty(&export) {
            Ok(json) => json,
            Err(err) => {
                eprintln!("Error: JSON encoding failed: {}", err);
                process::exit(1);
            }
        };
        if let Err(err) = fs::write(&path, json) {
            eprintln!("Error: writing {}: {}", path, err);
            process::exit(1);
        }
        println!("wrote JSON table to {}", path);
    }

    println!("OK: generated table for W={} ({} points)", window, table.len());
}

fn print_usage() {
    println!("gen-wnaf-table v{}", secp256k1_core::VERSION);
    println!();
    println!("Usage:");
    println!("  gen-wnaf-table [W] [--json PATH]");
    println!();
    println!("Renders the 2^(W-1) odd multiples of G as Verilog localparam");
    println!("declarations. W defaults to 10 (512 points).");
}

fn hex256(value: &FieldElement) -> String {
    hex::encode_upper(value.to_be_bytes())
}
