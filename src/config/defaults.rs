// src/config/defaults.rs
use crate::config::app::{CodecSettings, OutputSettings};
use crate::consts::DEFAULT_DEFLATE_LEVEL;
use crate::enums::{Profile, Variant};

pub fn default_codec() -> CodecSettings {
    CodecSettings {
        variant: Variant::default(),
        profile: Profile::default(),
        deflate_level: DEFAULT_DEFLATE_LEVEL,
    }
}

pub fn default_output() -> OutputSettings {
    OutputSettings { json: false }
}

pub fn default_deflate_level() -> u32 {
    DEFAULT_DEFLATE_LEVEL
}
