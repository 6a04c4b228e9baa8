pub mod cli;
pub mod error;
pub mod logger;
pub mod shift;
pub mod vigenere;

pub use error::DecodeError;
pub use vigenere::{KeyMode, decode, decode_char, decode_with};
