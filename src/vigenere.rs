use crate::error::{DecodeError, Input, Result};
use crate::shift::{position, unshift};

/// How the key is lined up against the ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMode {
    /// Stop at the shorter of ciphertext and key.
    #[default]
    Truncate,
    /// Cycle the key until every ciphertext character is consumed.
    Repeat,
}

/// Decode one ciphertext character with one key character.
///
/// The key character's alphabet position is the shift. Inputs outside
/// `'a'..='z'` are not rejected; they go through the same arithmetic and
/// always come out as some lowercase letter.
pub fn decode_char(cipher_char: char, key_char: char) -> char {
    unshift(cipher_char, position(key_char))
}

/// Decode `ciphertext` against `key`, pairing characters positionally and
/// stopping at the shorter of the two.
pub fn decode(ciphertext: &str, key: &str) -> String {
    decode_with(ciphertext, key, KeyMode::Truncate)
}

pub fn decode_with(ciphertext: &str, key: &str, mode: KeyMode) -> String {
    log::debug!(
        "[decode] {} ciphertext chars, {} key chars, mode {mode:?}",
        ciphertext.chars().count(),
        key.chars().count()
    );

    match mode {
        KeyMode::Truncate => ciphertext
            .chars()
            .zip(key.chars())
            .map(|(c, k)| decode_char(c, k))
            .collect(),
        KeyMode::Repeat => ciphertext
            .chars()
            .zip(key.chars().cycle())
            .map(|(c, k)| decode_char(c, k))
            .collect(),
    }
}

/// Reject the first character outside `'a'..='z'`, ciphertext first.
pub fn validate(ciphertext: &str, key: &str) -> Result<()> {
    for (input, text) in [(Input::Ciphertext, ciphertext), (Input::Key, key)] {
        let bad = text
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_lowercase());

        if let Some((index, found)) = bad {
            log::warn!("[validate] rejecting {found:?} in {input} at index {index}");
            return Err(DecodeError::InvalidCharacter {
                input,
                index,
                found,
            });
        }
    }
    Ok(())
}
