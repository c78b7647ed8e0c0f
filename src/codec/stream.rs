// src/codec/stream.rs
//! Whole-buffer encode/decode driven by a key cycle

use tracing::trace;

use super::byte;
use crate::consts::GROUP_LEN;
use crate::enums::KeyAdvance;
use crate::error::CodecError;
use crate::key::Key;

/// Encode every byte of `bytes`, pulling one key digit per byte.
///
/// Output holds exactly `4 * bytes.len()` symbols.
pub fn encode_bytes(bytes: &[u8], key: &Key) -> String {
    let mut cycle = key.cycle();
    let mut out = String::with_capacity(bytes.len() * GROUP_LEN * 3);

    for &b in bytes {
        let digit = cycle.next_digit();
        out.extend(byte::encode(b, digit));
    }

    trace!(bytes = bytes.len(), key_len = key.len(), "encoded symbol stream");
    out
}

/// Decode a symbol stream back into bytes.
///
/// Length is counted in symbols and checked before any lookup. With
/// [`KeyAdvance::PerByte`] each group consumes one digit, matching
/// [`encode_bytes`]; [`KeyAdvance::PerNibble`] consumes one per pair and
/// only agrees with the encoder when every digit of the key is the same.
pub fn decode_symbols(
    ciphertext: &str,
    key: &Key,
    advance: KeyAdvance,
) -> Result<Vec<u8>, CodecError> {
    let symbols: Vec<char> = ciphertext.chars().collect();
    if symbols.len() % GROUP_LEN != 0 {
        return Err(CodecError::MalformedCiphertext {
            len: symbols.len(),
        });
    }

    let mut cycle = key.cycle();
    let mut out = Vec::with_capacity(symbols.len() / GROUP_LEN);

    for (group, chunk) in symbols.chunks_exact(GROUP_LEN).enumerate() {
        let (high_digit, low_digit) = match advance {
            KeyAdvance::PerByte => {
                let d = cycle.next_digit();
                (d, d)
            }
            KeyAdvance::PerNibble => (cycle.next_digit(), cycle.next_digit()),
        };

        let quad = [chunk[0], chunk[1], chunk[2], chunk[3]];
        let b = byte::decode_with(quad, high_digit, low_digit)
            .map_err(|e| e.at_group(group, group * GROUP_LEN))?;
        out.push(b);
    }

    trace!(bytes = out.len(), ?advance, "decoded symbol stream");
    Ok(out)
}
