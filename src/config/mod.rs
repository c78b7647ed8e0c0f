// src/config/mod.rs
//! Configuration system for hajimi-codec
//!
//! Central, lazy-loaded global config from TOML, with built-in defaults.

pub use app::{load, load_from, CodecSettings, Config, OutputSettings};

mod app;
mod defaults;
