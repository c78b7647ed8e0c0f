// src/lib.rs
//! hajimi-codec — reversible keyed text obfuscation
//!
//! Features:
//! - Every byte becomes four symbols of a fixed nine-symbol alphabet
//! - Cyclic numeric key, one digit per byte
//! - Optional zlib + base64 pre-stage for shorter ciphertext
//! - `Strict` and `Legacy` (historical-tool compatible) profiles
//!
//! This is obfuscation, not encryption: anyone who knows the scheme can
//! recover the plaintext with modest effort.
//!
//! ```
//! use hajimi_codec::{decode_v1, encode_v1};
//!
//! let ciphertext = encode_v1("A", "1").unwrap();
//! assert_eq!(ciphertext, "哈北哈基");
//! assert_eq!(decode_v1(&ciphertext, "1").unwrap(), "A");
//! ```

pub mod alphabet;
pub mod codec;
pub mod compress;
pub mod config;
pub mod consts;
pub mod engine;
pub mod enums;
pub mod error;
pub mod key;
pub mod report;

// Re-export everything users need at the crate root
pub use alphabet::{Alphabet, ALPHABET};
pub use config::load as load_config;
pub use engine::{decode_v1, decode_v2, encode_v1, encode_v2, legacy, Engine};
pub use enums::{KeyAdvance, Profile, Variant};
pub use error::{CodecError, DecompressionError};
pub use key::{Key, KeyCycle};
pub use report::Summary;

pub type Result<T> = std::result::Result<T, CodecError>;
