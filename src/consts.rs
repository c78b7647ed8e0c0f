// src/consts.rs
//! Shared constants — alphabet, group geometry and defaults

/// The nine symbols, in index order (1-based index = position + 1)
pub const SYMBOLS: [char; 9] = ['哈', '基', '米', '南', '北', '绿', '豆', '曼', '波'];

/// Number of symbols in the alphabet; also the radix of a symbol pair
pub const RADIX: i32 = 9;

/// Symbols emitted per nibble
pub const PAIR_LEN: usize = 2;

/// Symbols emitted per source byte (high pair + low pair)
pub const GROUP_LEN: usize = 2 * PAIR_LEN;

/// zlib level used by the compressed variant, same as `zlib.compress` default
pub const DEFAULT_DEFLATE_LEVEL: u32 = 6;

/// Highest accepted zlib level
pub const MAX_DEFLATE_LEVEL: u32 = 9;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "HAJIMI_CONFIG";

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "hajimi.toml";
