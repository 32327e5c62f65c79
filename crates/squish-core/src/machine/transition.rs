// crates/squish-core/src/machine/transition.rs
//
// Pure transition function: given the current state, cursor, remembered key
// and the next input byte, decide the next state and which effects to apply.
// Nothing here touches the sink or the buffer; `Squisher` applies the result.
//
// Effects are applied in field order:
//   flush  -> cut remembered key to cursor, write terminator + key
//   commit -> set remembered length to cursor
//   append -> push byte onto remembered key
//   echo   -> write byte to sink
//   cursor -> reset to 0 or advance by 1

use crate::config::SquishConfig;
use crate::machine::state::WriteState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorMove {
    Reset,
    Advance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub next: WriteState,
    pub flush: bool,
    pub commit: bool,
    pub append: bool,
    pub echo: bool,
    pub cursor: CursorMove,
}

impl Transition {
    const fn advance(next: WriteState, append: bool, echo: bool) -> Self {
        Self {
            next,
            flush: false,
            commit: false,
            append,
            echo,
            cursor: CursorMove::Advance,
        }
    }

    /// True when the byte was swallowed as part of a shared prefix.
    #[inline]
    pub fn is_suppressed(&self) -> bool {
        self.cursor == CursorMove::Advance && !self.echo
    }
}

pub fn transition(
    state: WriteState,
    cursor: usize,
    key: &[u8],
    byte: u8,
    cfg: &SquishConfig,
) -> Transition {
    let keysize = key.len();

    if byte == cfg.terminator {
        let (flush, commit) = match state {
            WriteState::MatchingKey => (cursor < keysize, true),
            // cursor == keysize while building, so the commit never shortens anything
            WriteState::BuildingKey => (false, true),
            WriteState::FirstLine | WriteState::WritingNonKey => (false, false),
        };
        return Transition {
            next: WriteState::MatchingKey,
            flush,
            commit,
            append: false,
            echo: false,
            cursor: CursorMove::Reset,
        };
    }

    if byte == cfg.delimiter {
        return Transition {
            flush: state == WriteState::MatchingKey && cursor != keysize,
            ..Transition::advance(WriteState::WritingNonKey, false, true)
        };
    }

    match state {
        WriteState::FirstLine => Transition::advance(WriteState::FirstLine, true, true),
        WriteState::MatchingKey => {
            if cursor < keysize && key[cursor] == byte {
                Transition::advance(WriteState::MatchingKey, false, false)
            } else {
                Transition {
                    flush: true,
                    ..Transition::advance(WriteState::BuildingKey, true, true)
                }
            }
        }
        WriteState::BuildingKey => Transition::advance(WriteState::BuildingKey, true, true),
        WriteState::WritingNonKey => Transition::advance(WriteState::WritingNonKey, false, true),
    }
}
