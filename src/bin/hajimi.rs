// src/bin/hajimi.rs
//! Interactive encode/decode menu

use anyhow::{Context, Result};
use hajimi_codec::config::Config;
use hajimi_codec::{load_config, Engine, Variant};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const KEY_PROMPT: &str = "Key (digits, e.g. 123): ";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config: &Config = load_config();
    let mut engine = config.codec.engine();
    info!(variant = %engine.variant, profile = %engine.profile, "hajimi codec ready");

    println!("Hajimi codec (UTF-8 text, {} variant)", engine.variant);
    println!("{}", "=".repeat(40));

    let stdin = io::stdin();
    let mut lines = stdin.lock();

    loop {
        println!("\nChoose an action:");
        println!("1. Encode plaintext");
        println!("2. Decode ciphertext");
        println!("3. Switch variant (now: {})", engine.variant);
        println!("4. Exit");

        let Some(choice) = prompt(&mut lines, "Option (1/2/3/4): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(plaintext) = prompt(&mut lines, "Plaintext: ")? else {
                    break;
                };
                if plaintext.is_empty() {
                    println!("Error: plaintext must not be empty");
                    continue;
                }
                let Some(key) = prompt(&mut lines, KEY_PROMPT)? else {
                    break;
                };
                if !is_digit_key(&key) {
                    println!("Error: key must be digits only");
                    continue;
                }

                match engine.encode_with_summary(&plaintext, &key) {
                    Ok((ciphertext, summary)) => {
                        if config.output.json {
                            println!("{}", summary.to_json().context("serializing summary")?);
                        } else {
                            println!("\nCiphertext ({} symbols):", summary.symbols);
                        }
                        println!("{ciphertext}");
                    }
                    Err(e) => {
                        warn!(error = %e, "encode failed");
                        println!("Encode failed: {e}");
                    }
                }
            }
            "2" => {
                let Some(ciphertext) = prompt(&mut lines, "Ciphertext: ")? else {
                    break;
                };
                if ciphertext.is_empty() {
                    println!("Error: ciphertext must not be empty");
                    continue;
                }
                let Some(key) = prompt(&mut lines, KEY_PROMPT)? else {
                    break;
                };
                if !is_digit_key(&key) {
                    println!("Error: key must be digits only");
                    continue;
                }

                match engine.decode(&ciphertext, &key) {
                    Ok(plaintext) => println!("\nPlaintext: {plaintext}"),
                    Err(e) => {
                        warn!(error = %e, "decode failed");
                        println!("Decode failed: {e}");
                    }
                }
            }
            "3" => {
                engine = switch_variant(engine);
                println!("Variant is now {}", engine.variant);
            }
            "4" => break,
            _ => println!("Unknown option, try again"),
        }
    }

    println!("Bye!");
    Ok(())
}

fn switch_variant(engine: Engine) -> Engine {
    let variant = match engine.variant {
        Variant::Direct => Variant::Compressed,
        Variant::Compressed => Variant::Direct,
    };
    Engine { variant, ..engine }
}

/// Only the digit check happens here; the codec enforces the rest
fn is_digit_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_digit())
}

/// Print `label`, read one trimmed line; `None` on end of input
fn prompt(lines: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    let n = lines.read_line(&mut input).context("reading stdin")?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_owned()))
}
