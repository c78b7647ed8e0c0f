// src/codec/mod.rs
//! Symbol codec layers, innermost first
//!
//! `nibble` maps one 4-bit value plus a key digit onto a symbol pair,
//! `byte` drives it twice per byte, and `stream` walks a whole buffer
//! while pulling digits from the key cycle.

pub mod byte;
pub mod nibble;
pub mod stream;

pub use stream::{decode_symbols, encode_bytes};
