// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: which variant to run,
//! which compatibility profile to honour, and how the key cycle advances.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Codec variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// UTF-8 bytes go straight into the symbol stream
    Direct,
    /// zlib + base64 first, then the symbol stream
    #[default]
    Compressed,
}

/// Compatibility profile
///
/// `Strict` rejects key digit `0` and advances the key once per byte in
/// both directions, so every accepted input round-trips. `Legacy` follows
/// the historical tools, including their two decode faults: the zero-sum
/// wrap-around and the per-nibble key advance of the compressed decoder.
/// Direct output is identical to theirs; compressed ciphertext from them
/// decodes, though the DEFLATE bytes produced here may differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Strict,
    Legacy,
}

/// How often the decoder pulls a key digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAdvance {
    /// One digit per 4-symbol group, mirroring the encoder
    PerByte,
    /// One digit per 2-symbol pair
    PerNibble,
}

impl Profile {
    pub fn allows_zero_digit(self) -> bool {
        matches!(self, Profile::Legacy)
    }

    /// Decoder key discipline for `variant` under this profile
    pub fn key_advance(self, variant: Variant) -> KeyAdvance {
        match (self, variant) {
            (Profile::Legacy, Variant::Compressed) => KeyAdvance::PerNibble,
            _ => KeyAdvance::PerByte,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Direct => "direct",
            Variant::Compressed => "compressed",
        })
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Profile::Strict => "strict",
            Profile::Legacy => "legacy",
        })
    }
}
