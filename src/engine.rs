// src/engine.rs
//! Public encode/decode entry points
//!
//! Both variants share the same stream codec and differ only in the
//! [`Transform`](crate::compress::Transform) applied around it.

use tracing::debug;

use crate::codec::{decode_symbols, encode_bytes};
use crate::compress::transform_for;
use crate::consts::{DEFAULT_DEFLATE_LEVEL, GROUP_LEN};
use crate::enums::{Profile, Variant};
use crate::key::Key;
use crate::report::Summary;
use crate::Result;

/// A configured codec; cheap to copy, holds no per-call state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    pub variant: Variant,
    pub profile: Profile,
    pub deflate_level: u32,
}

impl Engine {
    pub fn new(variant: Variant, profile: Profile) -> Self {
        Self {
            variant,
            profile,
            deflate_level: DEFAULT_DEFLATE_LEVEL,
        }
    }

    pub fn with_deflate_level(mut self, level: u32) -> Self {
        self.deflate_level = level;
        self
    }

    pub fn parse_key(&self, key: &str) -> Result<Key> {
        Key::parse(key, self.profile)
    }

    pub fn encode(&self, plaintext: &str, key: &str) -> Result<String> {
        self.encode_with_summary(plaintext, key)
            .map(|(ciphertext, _)| ciphertext)
    }

    /// Encode and report the sizes involved
    pub fn encode_with_summary(&self, plaintext: &str, key: &str) -> Result<(String, Summary)> {
        let key = self.parse_key(key)?;
        let transported = transform_for(self.variant, self.deflate_level).forward(plaintext)?;
        let ciphertext = encode_bytes(&transported, &key);

        let summary = Summary {
            variant: self.variant,
            profile: self.profile,
            plaintext_bytes: plaintext.len(),
            transported_bytes: transported.len(),
            symbols: transported.len() * GROUP_LEN,
        };
        debug!(
            variant = %self.variant,
            plaintext_bytes = summary.plaintext_bytes,
            transported_bytes = summary.transported_bytes,
            "encode"
        );
        Ok((ciphertext, summary))
    }

    pub fn decode(&self, ciphertext: &str, key: &str) -> Result<String> {
        let key = self.parse_key(key)?;
        let advance = self.profile.key_advance(self.variant);
        let transported = decode_symbols(ciphertext, &key, advance)?;
        debug!(
            variant = %self.variant,
            transported_bytes = transported.len(),
            ?advance,
            "decode"
        );
        transform_for(self.variant, self.deflate_level).backward(transported)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Variant::default(), Profile::default())
    }
}

/// Direct variant, strict profile
pub fn encode_v1(plaintext: &str, key: &str) -> Result<String> {
    Engine::new(Variant::Direct, Profile::Strict).encode(plaintext, key)
}

pub fn decode_v1(ciphertext: &str, key: &str) -> Result<String> {
    Engine::new(Variant::Direct, Profile::Strict).decode(ciphertext, key)
}

/// Compressed variant, strict profile
pub fn encode_v2(plaintext: &str, key: &str) -> Result<String> {
    Engine::new(Variant::Compressed, Profile::Strict).encode(plaintext, key)
}

pub fn decode_v2(ciphertext: &str, key: &str) -> Result<String> {
    Engine::new(Variant::Compressed, Profile::Strict).decode(ciphertext, key)
}

/// The historical tools' behaviour, faults included
///
/// The direct variant matches their output symbol for symbol. The compressed
/// variant reads their ciphertext, but its own DEFLATE stream may differ
/// from theirs for the same input, so encoded output is not byte-identical.
pub mod legacy {
    use super::Engine;
    use crate::enums::{Profile, Variant};
    use crate::Result;

    pub fn encode_v1(plaintext: &str, key: &str) -> Result<String> {
        Engine::new(Variant::Direct, Profile::Legacy).encode(plaintext, key)
    }

    pub fn decode_v1(ciphertext: &str, key: &str) -> Result<String> {
        Engine::new(Variant::Direct, Profile::Legacy).decode(ciphertext, key)
    }

    pub fn encode_v2(plaintext: &str, key: &str) -> Result<String> {
        Engine::new(Variant::Compressed, Profile::Legacy).encode(plaintext, key)
    }

    /// Advances the key once per nibble: multi-digit keys desynchronize
    pub fn decode_v2(ciphertext: &str, key: &str) -> Result<String> {
        Engine::new(Variant::Compressed, Profile::Legacy).decode(ciphertext, key)
    }
}
