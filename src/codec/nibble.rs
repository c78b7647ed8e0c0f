// src/codec/nibble.rs
//! One nibble + one key digit <-> one symbol pair
//!
//! The sum `s = nibble + digit` (0..=24) is written as a bijective base-9
//! pair `(a, b)` with both digits in 1..=9:
//!
//! ```text
//! a = floor((s - 1) / 9) + 1
//! b = ((s - 1) mod 9) + 1
//! ```
//!
//! For `s = 0` this gives `a = 0`, which the alphabet resolves to its last
//! symbol. The pair then reads back as `a = 9`, i.e. `s = 81`. Only a zero
//! nibble under key digit 0 can hit this; strict keys never contain 0.

use crate::alphabet::ALPHABET;
use crate::consts::RADIX;
use crate::error::CodecError;

/// Bijective base-9 split of `sum`, floor semantics for negative inputs
#[inline]
pub fn split(sum: i32) -> (i32, i32) {
    let a = (sum - 1).div_euclid(RADIX) + 1;
    let b = (sum - 1).rem_euclid(RADIX) + 1;
    (a, b)
}

/// Inverse of [`split`] for digits in 1..=9
#[inline]
pub fn join(a: i32, b: i32) -> i32 {
    (a - 1) * RADIX + b
}

/// Encode `nibble` (0..=15) under `digit` (0..=9)
pub fn encode(nibble: u8, digit: u8) -> [char; 2] {
    debug_assert!(nibble < 16 && digit < 10);
    let (a, b) = split(i32::from(nibble) + i32::from(digit));
    [ALPHABET.symbol(a), ALPHABET.symbol(b)]
}

/// Decode a pair given as 0-based alphabet positions.
///
/// The result is not range-checked; the byte layer decides whether the
/// recombined value is a byte.
#[inline]
pub fn decode_positions(a: u8, b: u8, digit: u8) -> i32 {
    join(i32::from(a) + 1, i32::from(b) + 1) - i32::from(digit)
}

/// Decode a symbol pair under `digit`.
///
/// `UnknownSymbol` positions are 0 or 1, relative to the pair.
pub fn decode(pair: [char; 2], digit: u8) -> Result<i32, CodecError> {
    let a = lookup(pair[0], 0)?;
    let b = lookup(pair[1], 1)?;
    Ok(decode_positions(a, b, digit))
}

#[inline]
pub(crate) fn lookup(symbol: char, position: usize) -> Result<u8, CodecError> {
    ALPHABET
        .position(symbol)
        .ok_or(CodecError::UnknownSymbol { symbol, position })
}
