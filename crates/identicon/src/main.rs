//! identicon: derive a deterministic identicon image from a string.
//!
//! Writes `<INPUT>.png` (or `<INPUT>.bmp`) into the output directory.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin identicon -- [OPTIONS] <INPUT>
//! ```
//!
//! Set `RUST_LOG=debug` to trace the individual pipeline stages.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use identicon_export::EncodeFormat;
use identicon_io::{FileSink, generate, generate_from_state};
use identicon_pipeline::diagnostics::{Clock, process_with_diagnostics};

/// Derive a deterministic 250x250 identicon from a string.
///
/// The same input always produces a byte-identical image.
#[derive(Parser)]
#[command(name = "identicon", version)]
struct Cli {
    /// Input string (any value, including the empty string).
    input: String,

    /// Directory to write the image into. Must already exist.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Output image format.
    #[arg(long, value_enum, default_value_t = Format::Png)]
    format: Format,

    /// Print per-stage diagnostics to stderr.
    #[arg(long)]
    diagnostics: bool,

    /// Print diagnostics as JSON to stdout.
    #[arg(long)]
    json: bool,
}

/// Output format selection.
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Portable Network Graphics.
    Png,
    /// Uncompressed 24-bit bitmap.
    Bmp,
}

impl From<Format> for EncodeFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Png => Self::Png,
            Format::Bmp => Self::Bmp,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let encoder = EncodeFormat::from(cli.format);
    let mut sink = FileSink::new(&cli.output_dir);

    let result = if cli.diagnostics || cli.json {
        let (state, diagnostics) = process_with_diagnostics(&cli.input, &StdClock);
        if cli.diagnostics {
            eprintln!("{}", diagnostics.report());
        }
        if cli.json {
            match serde_json::to_string_pretty(&diagnostics) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error serializing diagnostics: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        generate_from_state(&cli.input, state, &encoder, &mut sink)
    } else {
        generate(&cli.input, &encoder, &mut sink)
    };

    match result {
        Ok(generated) => {
            log::info!(
                "{} cells drawn in rgb({}, {}, {})",
                generated.state.filtered.len(),
                generated.state.color.red,
                generated.state.color.green,
                generated.state.color.blue,
            );
            eprintln!(
                "Wrote {} ({} bytes)",
                sink.path_for(&generated.name).display(),
                generated.bytes.len(),
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// [`Clock`] implementation backed by [`std::time::Instant`].
struct StdClock;

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed(&self, since: &Instant) -> Duration {
        since.elapsed()
    }
}
