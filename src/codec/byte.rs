// src/codec/byte.rs
//! One byte + one key digit <-> four symbols (high pair, then low pair)

use super::nibble;
use crate::error::CodecError;

/// Encode `byte`; the same digit offsets both nibbles
pub fn encode(byte: u8, digit: u8) -> [char; 4] {
    let [a, b] = nibble::encode(byte >> 4, digit);
    let [c, d] = nibble::encode(byte & 0x0F, digit);
    [a, b, c, d]
}

/// Decode one group with a single digit, the mirror of [`encode`]
pub fn decode(group: [char; 4], digit: u8) -> Result<u8, CodecError> {
    decode_with(group, digit, digit)
}

/// Decode one group with separate digits for the high and low pair.
///
/// Nibbles are recombined as signed values, `(high << 4) | low`, and the
/// result must land in 0..=255. An out-of-range nibble can still produce an
/// in-range (wrong) byte; that is how the zero-sum pair behaves under key
/// digit 0.
pub fn decode_with(group: [char; 4], high_digit: u8, low_digit: u8) -> Result<u8, CodecError> {
    let high = nibble::decode([group[0], group[1]], high_digit)?;
    let low = nibble::decode([group[2], group[3]], low_digit).map_err(|e| e.at_group(0, 2))?;

    let value = (high << 4) | low;
    u8::try_from(value).map_err(|_| CodecError::InvalidByte { value, group: 0 })
}
