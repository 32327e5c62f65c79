// crates/squish-cli/src/io/output.rs

use anyhow::Context;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Open the output named by `--output`. `None` and `"-"` mean stdout.
///
/// Output is buffered; the squisher flushes it once when it finishes.
pub fn open_output(path: Option<&str>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        None | Some("-") => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        Some(p) => {
            let f = File::create(p)
                .with_context(|| format!("could not open output file {p} for writing"))?;
            Ok(Box::new(BufWriter::new(f)))
        }
    }
}
