// src/alphabet.rs
//! The fixed nine-symbol alphabet
//!
//! Built once and shared read-only by every encode/decode call.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::consts::{RADIX, SYMBOLS};

/// Process-wide alphabet instance
pub static ALPHABET: Lazy<Alphabet> = Lazy::new(|| Alphabet::from_symbols(SYMBOLS));

/// Ordered symbol table plus its reverse lookup map
#[derive(Debug)]
pub struct Alphabet {
    symbols: [char; 9],
    index: HashMap<char, u8>,
}

impl Alphabet {
    fn from_symbols(symbols: [char; 9]) -> Self {
        let index: HashMap<char, u8> = symbols
            .iter()
            .enumerate()
            .map(|(i, &ch)| (ch, i as u8))
            .collect();
        debug_assert_eq!(index.len(), symbols.len(), "alphabet symbols must be distinct");
        Self { symbols, index }
    }

    /// Symbol for a 1-based index.
    ///
    /// Index 0 resolves to the last symbol rather than failing; the nibble
    /// codec produces it for a zero sum.
    #[inline]
    pub fn symbol(&self, index: i32) -> char {
        self.symbols[(index - 1).rem_euclid(RADIX) as usize]
    }

    /// 0-based position of `ch`, if it belongs to the alphabet
    #[inline]
    pub fn position(&self, ch: char) -> Option<u8> {
        self.index.get(&ch).copied()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.index.contains_key(&ch)
    }

    pub fn symbols(&self) -> &[char; 9] {
        &self.symbols
    }

    pub fn last(&self) -> char {
        self.symbols[self.symbols.len() - 1]
    }
}
