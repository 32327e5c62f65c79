// crates/squish-core/src/key.rs
//
// Remembered key: the key of the last confirmed record, cut back to the
// divergence point whenever the current record stops matching it.
//
// Invariants:
// - len() <= capacity()
// - capacity never shrinks; when full it doubles
// - growth keeps the already-written prefix

use crate::error::{Result, SquishError};

pub const DEFAULT_KEY_CAPACITY: usize = 128;

#[derive(Debug)]
pub struct RememberedKey {
    buf: Vec<u8>,
}

impl RememberedKey {
    pub fn new() -> Result<Self> {
        Self::with_capacity(DEFAULT_KEY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity.max(1))
            .map_err(|_| SquishError::Alloc {
                requested: capacity,
            })?;
        Ok(Self { buf })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<u8> {
        self.buf.get(i).copied()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Append one byte, doubling the capacity first if the buffer is full.
    pub fn push(&mut self, b: u8) -> Result<()> {
        let cap = self.buf.capacity();
        if self.buf.len() == cap {
            let next = next_capacity(cap);
            self.buf
                .try_reserve_exact(next - cap)
                .map_err(|_| SquishError::Alloc { requested: next })?;
        }
        self.buf.push(b);
        Ok(())
    }

    /// Cut the logical length back to `len`. Capacity is left alone.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }
}

/// Capacity after one growth step from `cap`: doubled, at least 1.
/// `RememberedKey::push` reports this value in `SquishError::Alloc`.
#[inline]
pub fn next_capacity(cap: usize) -> usize {
    cap.saturating_add(cap.max(1))
}
