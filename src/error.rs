use std::fmt;

use thiserror::Error;

/// Which command-line input a character came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Ciphertext,
    Key,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Ciphertext => f.write_str("ciphertext"),
            Input::Key => f.write_str("key"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid character {found:?} in {input} at index {index}: expected 'a'-'z'")]
    InvalidCharacter {
        input: Input,
        index: usize,
        found: char,
    },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
