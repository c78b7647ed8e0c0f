// tests/common.rs
//! Shared test utilities: codec log capture, sample text, key helper

use hajimi_codec::{Key, Profile};

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Route codec trace/debug events into the captured test output
///
/// `RUST_LOG` wins when set; otherwise only this crate's events are shown.
#[allow(dead_code)]
pub fn setup() {
    #[cfg(feature = "logging")]
    {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("hajimi_codec=debug"));
        tracing_subscriber::registry()
            .with(fmt::layer().with_test_writer().with_target(false))
            .with(filter)
            .try_init()
            .ok();
    }
}

/// Mixed-script sample used across suites
#[allow(dead_code)]
pub const SAMPLE_TEXT: &str = "Hello, 哈基米! 123 — ünïcödé ✓";

/// Parse a key with the permissive profile so tests can use digit 0
#[allow(dead_code)]
pub fn key(digits: &str) -> Key {
    Key::parse(digits, Profile::Legacy).unwrap()
}
