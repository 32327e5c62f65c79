// crates/squish-core/src/machine/squisher.rs

use std::io::Write;

use tracing::{debug, trace};

use crate::config::SquishConfig;
use crate::error::Result;
use crate::key::RememberedKey;
use crate::machine::state::WriteState;
use crate::machine::transition::{transition, CursorMove, Transition};
use crate::stats::Counters;
use crate::validate::validate_config;

/// Byte-at-a-time key squisher.
///
/// Feed every input byte to [`Squisher::consume`], then call
/// [`Squisher::finish`] once. Output goes straight to the sink; the only
/// buffered state is the remembered key.
///
/// After `consume` returns an error the instance should be dropped: the
/// sink may hold a partial divergence sequence.
pub struct Squisher<W: Write> {
    sink: W,
    config: SquishConfig,
    state: WriteState,
    key: RememberedKey,
    cursor: usize,
    stats: Counters,
}

impl<W: Write> Squisher<W> {
    pub fn new(sink: W, config: SquishConfig) -> Result<Self> {
        validate_config(&config)?;
        Ok(Self {
            sink,
            config,
            state: WriteState::FirstLine,
            key: RememberedKey::new()?,
            cursor: 0,
            stats: Counters::default(),
        })
    }

    pub fn config(&self) -> &SquishConfig {
        &self.config
    }

    pub fn state(&self) -> WriteState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Remembered key as of the last processed byte.
    pub fn key(&self) -> &[u8] {
        self.key.as_bytes()
    }

    pub fn key_capacity(&self) -> usize {
        self.key.capacity()
    }

    pub fn stats(&self) -> &Counters {
        &self.stats
    }

    /// One-line dump of the machine, e.g.
    /// `state=matching_key, buffer="alpha", current_index=3`.
    pub fn debug_line(&self) -> String {
        format!(
            "state={}, buffer=\"{}\", current_index={}",
            self.state,
            self.key.as_bytes().escape_ascii(),
            self.cursor
        )
    }

    pub fn consume(&mut self, byte: u8) -> Result<()> {
        self.stats.bytes_in += 1;
        let t = transition(
            self.state,
            self.cursor,
            self.key.as_bytes(),
            byte,
            &self.config,
        );
        self.apply(byte, t)
    }

    pub fn consume_all(&mut self, bytes: &[u8]) -> Result<()> {
        for &b in bytes {
            self.consume(b)?;
        }
        Ok(())
    }

    /// Flush a pending shorter key, flush the sink, and hand it back.
    pub fn finish(mut self) -> Result<W> {
        if self.state == WriteState::MatchingKey && self.cursor < self.key.len() {
            self.emit_divergence()?;
        }
        self.sink.flush()?;
        debug!(
            bytes_in = self.stats.bytes_in,
            bytes_out = self.stats.bytes_out,
            records = self.stats.records,
            suppressed = self.stats.suppressed,
            divergences = self.stats.divergences,
            "squisher finished"
        );
        Ok(self.sink)
    }

    fn apply(&mut self, byte: u8, t: Transition) -> Result<()> {
        if t.flush {
            self.emit_divergence()?;
        }
        if t.commit {
            debug_assert!(self.cursor <= self.key.len());
            self.key.truncate(self.cursor);
        }
        if t.append {
            self.key.push(byte)?;
        }
        if t.echo {
            self.sink.write_all(&[byte])?;
            self.stats.bytes_out += 1;
        }
        if t.is_suppressed() {
            self.stats.suppressed += 1;
        }

        self.state = t.next;
        match t.cursor {
            CursorMove::Reset => {
                self.stats.records += 1;
                self.cursor = 0;
            }
            CursorMove::Advance => self.cursor += 1,
        }
        Ok(())
    }

    /// Cut the remembered key back to the cursor and write
    /// terminator + what is left of it.
    fn emit_divergence(&mut self) -> Result<()> {
        self.key.truncate(self.cursor);
        trace!(at = self.cursor, "{}", self.debug_line());

        self.sink.write_all(&[self.config.terminator])?;
        self.sink.write_all(self.key.as_bytes())?;
        self.stats.bytes_out += 1 + self.key.len() as u64;
        self.stats.divergences += 1;
        Ok(())
    }
}

/// Squish a whole in-memory buffer.
pub fn squish_bytes(input: &[u8], config: SquishConfig) -> Result<Vec<u8>> {
    let mut sq = Squisher::new(Vec::with_capacity(input.len()), config)?;
    sq.consume_all(input)?;
    sq.finish()
}
