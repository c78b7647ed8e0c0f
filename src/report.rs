// src/report.rs
//! Size summary of one encode call, exportable as JSON

use serde::{Deserialize, Serialize};

use crate::enums::{Profile, Variant};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub variant: Variant,
    pub profile: Profile,
    /// UTF-8 length of the plaintext
    pub plaintext_bytes: usize,
    /// Bytes actually carried by the symbol stream
    pub transported_bytes: usize,
    /// Ciphertext length in symbols (`4 * transported_bytes`)
    pub symbols: usize,
}

impl Summary {
    /// Symbols per plaintext byte; 0.0 for empty input
    pub fn expansion(&self) -> f64 {
        if self.plaintext_bytes == 0 {
            0.0
        } else {
            self.symbols as f64 / self.plaintext_bytes as f64
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
