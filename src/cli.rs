use std::borrow::Cow;

use clap::Parser;
use serde::Serialize;

use crate::error;
use crate::vigenere::{KeyMode, decode_with, validate};

/// Decode a Vigenère-style shift cipher.
#[derive(Parser, Debug)]
#[command(name = "vigenere-decode", version, about)]
pub struct Cli {
    /// Lowercase ciphertext to decode
    pub ciphertext: String,

    /// Lowercase key; each letter's alphabet position is the shift
    pub key: String,

    /// Cycle the key over the whole ciphertext instead of stopping at the shorter input
    #[arg(short, long)]
    pub repeat_key: bool,

    /// Reject any character outside 'a'-'z' before decoding
    #[arg(short, long)]
    pub strict: bool,

    /// Print a JSON object ({"result": ..} or {"error": ..}) instead of raw text
    #[arg(short, long)]
    pub json: bool,
}

impl Cli {
    pub fn key_mode(&self) -> KeyMode {
        if self.repeat_key {
            KeyMode::Repeat
        } else {
            KeyMode::Truncate
        }
    }
}

#[derive(Serialize)]
struct DecodeOk<'a> {
    result: Cow<'a, str>,
}

#[derive(Serialize)]
struct DecodeFailure<'a> {
    error: Cow<'a, str>,
}

fn plaintext(cli: &Cli) -> error::Result<String> {
    if cli.strict {
        validate(&cli.ciphertext, &cli.key)?;
    }
    Ok(decode_with(&cli.ciphertext, &cli.key, cli.key_mode()))
}

/// Produce exactly what should be written to stdout.
///
/// In JSON mode a decoding error is reported inside the envelope rather than
/// returned.
pub fn execute(cli: &Cli) -> anyhow::Result<String> {
    let outcome = plaintext(cli);

    if !cli.json {
        return Ok(outcome?);
    }

    let rendered = match outcome {
        Ok(text) => serde_json::to_string(&DecodeOk {
            result: Cow::Owned(text),
        })?,
        Err(e) => {
            log::error!("[execute] {e}");
            serde_json::to_string(&DecodeFailure {
                error: Cow::Owned(e.to_string()),
            })?
        }
    };
    Ok(rendered)
}
