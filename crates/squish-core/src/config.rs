// crates/squish-core/src/config.rs

use crate::error::Result;
use crate::validate::{parse_separator, validate_config};

pub const DEFAULT_DELIMITER: u8 = b' ';
pub const DEFAULT_TERMINATOR: u8 = b'\n';

/// Separator bytes for one stream. Fixed at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquishConfig {
    /// Ends the key portion of a record.
    pub delimiter: u8,
    /// Ends a record.
    pub terminator: u8,
}

impl Default for SquishConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            terminator: DEFAULT_TERMINATOR,
        }
    }
}

impl SquishConfig {
    pub fn new(delimiter: u8, terminator: u8) -> Result<Self> {
        let cfg = Self {
            delimiter,
            terminator,
        };
        validate_config(&cfg)?;
        Ok(cfg)
    }

    /// Build from optional flag texts; `None` keeps the default byte.
    pub fn from_flags(delimiter: Option<&str>, terminator: Option<&str>) -> Result<Self> {
        let delimiter = match delimiter {
            Some(s) => parse_separator("delimiter", s)?,
            None => DEFAULT_DELIMITER,
        };
        let terminator = match terminator {
            Some(s) => parse_separator("terminator", s)?,
            None => DEFAULT_TERMINATOR,
        };
        Self::new(delimiter, terminator)
    }
}
