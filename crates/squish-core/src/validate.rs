// crates/squish-core/src/validate.rs

use crate::config::SquishConfig;
use crate::error::{Result, SquishError};

pub fn validate_config(cfg: &SquishConfig) -> Result<()> {
    // A shared byte would make every delimiter also end the record.
    if cfg.delimiter == cfg.terminator {
        return Err(SquishError::Config(format!(
            "delimiter and terminator must differ (both are 0x{:02X})",
            cfg.delimiter
        )));
    }
    Ok(())
}

/// Turn a flag value into the single separator byte it names.
///
/// Accepted forms:
/// - exactly one byte, taken literally (`","`, `"/"`, `"\t"` typed as a real tab)
/// - a two-character escape: `\n`, `\t`, `\r`, `\0`, `\\`
///
/// `name` is only used for the error message.
pub fn parse_separator(name: &str, text: &str) -> Result<u8> {
    match text.as_bytes() {
        [b] => Ok(*b),
        [b'\\', esc] => match *esc {
            b'n' => Ok(b'\n'),
            b't' => Ok(b'\t'),
            b'r' => Ok(b'\r'),
            b'0' => Ok(0),
            b'\\' => Ok(b'\\'),
            other => Err(SquishError::Config(format!(
                "{name} has unknown escape \\{}",
                char::from(other).escape_default()
            ))),
        },
        _ => Err(SquishError::Config(format!(
            "{name} must be a single character"
        ))),
    }
}
