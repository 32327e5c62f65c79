// crates/squish-core/src/machine/state.rs

use std::fmt;

/// Where the squisher is within the current record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteState {
    /// No record finished yet: key bytes are recorded and echoed.
    FirstLine,
    /// Comparing the current key against the remembered one; matching bytes are dropped.
    MatchingKey,
    /// Past a divergence: key bytes are recorded and echoed.
    BuildingKey,
    /// Past the delimiter: everything is echoed until the terminator.
    WritingNonKey,
}

impl WriteState {
    pub fn name(self) -> &'static str {
        match self {
            WriteState::FirstLine => "first_line",
            WriteState::MatchingKey => "matching_key",
            WriteState::BuildingKey => "building_key",
            WriteState::WritingNonKey => "writing_non_key",
        }
    }
}

impl fmt::Display for WriteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
