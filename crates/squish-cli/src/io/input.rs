// crates/squish-cli/src/io/input.rs

use anyhow::Context;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Open the input named on the command line. `None` and `"-"` mean stdin.
pub fn open_input(path: Option<&str>) -> anyhow::Result<Box<dyn BufRead>> {
    match path {
        None | Some("-") => Ok(Box::new(io::stdin().lock())),
        Some(p) => {
            let f = File::open(p)
                .with_context(|| format!("could not open input file {p} for reading"))?;
            Ok(Box::new(BufReader::new(f)))
        }
    }
}
