// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Example: recover a hidden message from a stego PNG.
use std::fs;

use veil_core::Cipher;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: reveal <stego.png> [caesar <shift> | railfence <rails> | playfair <key>]");
        std::process::exit(1);
    }

    let cipher = parse_cipher(&args[2..]);
    let stego = fs::read(&args[1]).expect("Could not read stego image");

    match veil_core::reveal_png(&stego, &cipher) {
        Ok(message) => println!("Hidden message: {message}"),
        Err(e) => {
            eprintln!("Reveal failed: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_cipher(args: &[String]) -> Cipher {
    match args {
        [] => Cipher::None,
        [name, param] => match name.as_str() {
            "caesar" => Cipher::Caesar {
                shift: param.parse().expect("shift must be an integer"),
            },
            "railfence" => Cipher::RailFence {
                rails: param.parse().expect("rails must be an integer"),
            },
            "playfair" => Cipher::Playfair { key: param.clone() },
            other => {
                eprintln!("Unknown cipher: {other}");
                std::process::exit(1);
            }
        },
        _ => {
            eprintln!("Cipher needs exactly one parameter");
            std::process::exit(1);
        }
    }
}
