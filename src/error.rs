// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

/// Everything that can go wrong while encoding, decoding or loading config.
///
/// No failure is recovered internally: a buffer either round-trips as a
/// whole or the call returns one of these.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("ciphertext length {len} is not a multiple of 4")]
    MalformedCiphertext { len: usize },

    #[error("unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("group {group} decodes to invalid byte value {value}")]
    InvalidByte { value: i32, group: usize },

    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("decompression failed: {0}")]
    Decompression(#[from] DecompressionError),

    #[error("compression failed: {0}")]
    Compression(std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Failures of the compressed variant's post-processing stage
#[derive(Error, Debug)]
pub enum DecompressionError {
    #[error("base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("inflate: {0}")]
    Inflate(#[from] std::io::Error),

    #[error("empty compressed payload")]
    Empty,
}

impl CodecError {
    /// Shift a position reported relative to one 4-symbol group so that it
    /// points into the whole ciphertext.
    pub(crate) fn at_group(self, group: usize, first_symbol: usize) -> Self {
        match self {
            CodecError::UnknownSymbol { symbol, position } => CodecError::UnknownSymbol {
                symbol,
                position: first_symbol + position,
            },
            CodecError::InvalidByte { value, .. } => CodecError::InvalidByte { value, group },
            other => other,
        }
    }
}
