// crates/squish-cli/src/io/pump.rs

use std::io::{BufRead, ErrorKind, Write};

use squish_core::Squisher;

/// Feed every byte of `input` to the squisher, in order.
///
/// Returns the number of bytes read. Does not call `finish`.
pub fn pump<R: BufRead, W: Write>(
    mut input: R,
    squisher: &mut Squisher<W>,
) -> anyhow::Result<u64> {
    let mut total = 0u64;
    loop {
        let chunk = match input.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if chunk.is_empty() {
            return Ok(total);
        }
        let n = chunk.len();
        squisher.consume_all(chunk)?;
        input.consume(n);
        total += n as u64;
    }
}
