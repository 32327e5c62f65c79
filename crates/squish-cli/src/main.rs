// crates/squish-cli/src/main.rs

use anyhow::Context;
use clap::Parser;
use squish_core::{SquishConfig, SquishError, Squisher};

mod io;

#[derive(Parser, Debug)]
#[command(name = "squish")]
#[command(
    about = "Hide repeated leading keys in sorted or grouped line output",
    long_about = None
)]
pub struct Cli {
    /// Input file; reads stdin when omitted or "-"
    pub input: Option<String>,

    /// Character that marks the end of the initial key (escapes: \n \t \r \0 \\)
    #[arg(short, long, default_value = " ")]
    pub delimiter: String,

    /// Character that ends a record
    #[arg(short, long, default_value = "\\n")]
    pub terminator: String,

    /// File to write output to; writes stdout when omitted or "-"
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print byte and record counters to stderr when done
    #[arg(long)]
    pub stats: bool,
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => {}
        Err(e) if is_broken_pipe(&e) => {}
        Err(e) => {
            eprintln!("squish: {e:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = SquishConfig::from_flags(
        Some(cli.delimiter.as_str()),
        Some(cli.terminator.as_str()),
    )?;

    let input = io::input::open_input(cli.input.as_deref())?;
    let output = io::output::open_output(cli.output.as_deref())?;

    let mut squisher = Squisher::new(output, cfg)?;
    io::pump::pump(input, &mut squisher).context("squish input")?;

    let stats = *squisher.stats();
    squisher.finish().context("finish output")?;

    if cli.stats {
        eprintln!("BYTES_IN={}", stats.bytes_in);
        eprintln!("BYTES_OUT={}", stats.bytes_out);
        eprintln!("RECORDS={}", stats.records);
        eprintln!("SUPPRESSED={}", stats.suppressed);
        eprintln!("DIVERGENCES={}", stats.divergences);
    }

    Ok(())
}

/// A downstream reader that stops early (`squish | head`) is not a failure.
fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| match cause.downcast_ref::<SquishError>() {
        Some(SquishError::Io(io)) => io.kind() == std::io::ErrorKind::BrokenPipe,
        _ => cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::BrokenPipe),
    })
}
