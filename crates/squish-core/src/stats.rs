// crates/squish-core/src/stats.rs

/// Running totals for one squisher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Bytes handed to `consume`.
    pub bytes_in: u64,
    /// Bytes written to the sink, divergence sequences included.
    pub bytes_out: u64,
    /// Terminator bytes seen.
    pub records: u64,
    /// Key bytes dropped because they matched the remembered key.
    pub suppressed: u64,
    /// Divergence sequences written (finish flush included).
    pub divergences: u64,
}
