// src/key.rs
//! Numeric keys and the cursor that cycles over them

use std::fmt;
use std::str::FromStr;

use crate::enums::Profile;
use crate::error::CodecError;

/// A non-empty sequence of decimal digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    digits: Vec<u8>,
}

impl Key {
    /// Parse a digit string under `profile`.
    ///
    /// Input is taken as-is: surrounding whitespace is a non-digit.
    pub fn parse(text: &str, profile: Profile) -> Result<Self, CodecError> {
        if text.is_empty() {
            return Err(CodecError::InvalidKey("key is empty".into()));
        }

        let mut digits = Vec::with_capacity(text.len());
        for ch in text.chars() {
            let digit = ch
                .to_digit(10)
                .ok_or_else(|| CodecError::InvalidKey(format!("{ch:?} is not a decimal digit")))?;
            if digit == 0 && !profile.allows_zero_digit() {
                return Err(CodecError::InvalidKey(
                    "digit 0 is not round-trip safe; use the legacy profile to allow it".into(),
                ));
            }
            digits.push(digit as u8);
        }

        Ok(Self { digits })
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false for a parsed key; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Fresh cycle positioned on the first digit
    pub fn cycle(&self) -> KeyCycle<'_> {
        KeyCycle::new(&self.digits)
    }
}

impl FromStr for Key {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::parse(s, Profile::Strict)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

/// Index-plus-modulo cursor over a key's digits.
///
/// Every encode/decode call owns its own cursor; nothing is shared between
/// calls.
#[derive(Debug, Clone)]
pub struct KeyCycle<'k> {
    digits: &'k [u8],
    cursor: usize,
}

impl<'k> KeyCycle<'k> {
    pub fn new(digits: &'k [u8]) -> Self {
        debug_assert!(!digits.is_empty());
        Self { digits, cursor: 0 }
    }

    /// Current digit, then step forward (wrapping)
    #[inline]
    pub fn next_digit(&mut self) -> u8 {
        let digit = self.digits[self.cursor];
        self.cursor = (self.cursor + 1) % self.digits.len();
        digit
    }

    /// Index of the digit the next call will return
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn restart(&mut self) {
        self.cursor = 0;
    }
}

impl Iterator for KeyCycle<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.next_digit())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
