// src/compress.rs
//! Pre/post stages wrapped around the symbol stream
//!
//! A [`Transform`] turns plaintext into the bytes the stream codec carries,
//! and back. The direct variant carries the UTF-8 bytes unchanged; the
//! compressed variant carries `base64(zlib(utf8))`, which is ASCII only.

use std::io::{Read, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::consts::{DEFAULT_DEFLATE_LEVEL, MAX_DEFLATE_LEVEL};
use crate::enums::Variant;
use crate::error::{CodecError, DecompressionError};

/// A reversible stage between plaintext and transported bytes
pub trait Transform: Send + Sync {
    /// Plaintext → bytes handed to the stream encoder
    fn forward(&self, plaintext: &str) -> Result<Vec<u8>, CodecError>;

    /// Bytes from the stream decoder → plaintext
    fn backward(&self, transported: Vec<u8>) -> Result<String, CodecError>;
}

/// Direct variant: UTF-8 in, UTF-8 validation out
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Transform for Passthrough {
    fn forward(&self, plaintext: &str) -> Result<Vec<u8>, CodecError> {
        Ok(plaintext.as_bytes().to_vec())
    }

    fn backward(&self, transported: Vec<u8>) -> Result<String, CodecError> {
        Ok(String::from_utf8(transported)?)
    }
}

/// Compressed variant: zlib container, then standard padded base64
#[derive(Debug, Clone, Copy)]
pub struct DeflateBase64 {
    level: Compression,
}

impl DeflateBase64 {
    /// Levels above 9 are clamped
    pub fn new(level: u32) -> Self {
        Self {
            level: Compression::new(level.min(MAX_DEFLATE_LEVEL)),
        }
    }

    pub fn level(&self) -> u32 {
        self.level.level()
    }

    /// zlib-compress and base64 the plaintext
    pub fn compress(&self, plaintext: &[u8]) -> Result<String, CodecError> {
        let mut enc = ZlibEncoder::new(Vec::new(), self.level);
        enc.write_all(plaintext).map_err(CodecError::Compression)?;
        let compressed = enc.finish().map_err(CodecError::Compression)?;
        Ok(STANDARD.encode(compressed))
    }

    /// Undo [`compress`](Self::compress), without the UTF-8 step
    pub fn decompress(&self, encoded: &[u8]) -> Result<Vec<u8>, DecompressionError> {
        let compressed = STANDARD.decode(encoded)?;
        if compressed.is_empty() {
            return Err(DecompressionError::Empty);
        }

        let mut dec = ZlibDecoder::new(compressed.as_slice());
        let mut out = Vec::new();
        dec.read_to_end(&mut out)?;
        Ok(out)
    }
}

impl Default for DeflateBase64 {
    fn default() -> Self {
        Self::new(DEFAULT_DEFLATE_LEVEL)
    }
}

impl Transform for DeflateBase64 {
    fn forward(&self, plaintext: &str) -> Result<Vec<u8>, CodecError> {
        Ok(self.compress(plaintext.as_bytes())?.into_bytes())
    }

    fn backward(&self, transported: Vec<u8>) -> Result<String, CodecError> {
        let plain = self.decompress(&transported)?;
        Ok(String::from_utf8(plain)?)
    }
}

/// Stage for `variant`
pub fn transform_for(variant: Variant, level: u32) -> Box<dyn Transform> {
    match variant {
        Variant::Direct => Box::new(Passthrough),
        Variant::Compressed => Box::new(DeflateBase64::new(level)),
    }
}
