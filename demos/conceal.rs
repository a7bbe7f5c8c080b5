// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Example: hide a message in a PNG cover image.
use std::fs;

use veil_core::Cipher;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: conceal <cover.png> <message> [caesar <shift> | railfence <rails> | playfair <key>]");
        std::process::exit(1);
    }

    let cipher = parse_cipher(&args[3..]);
    let cover = fs::read(&args[1]).expect("Could not read cover image");

    match veil_core::conceal_png(&cover, &args[2], &cipher) {
        Ok(stego) => {
            let out_path = args[1].replace(".png", "_stego.png");
            fs::write(&out_path, &stego).expect("Could not write output");
            println!("Stego image written to: {out_path}");
        }
        Err(e) => {
            eprintln!("Conceal failed: {e}");
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
