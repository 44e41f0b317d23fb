//! Logo background removal CLI
//!
//! `process-logo <input> <output>` turns the black canvas of `input` into
//! transparency and writes `output` as PNG. The outcome is printed on stdout
//! and the process exits 0 whether or not the conversion worked.

use crate::{remove_black_background, types::ProcessingSummary, TracingConfig, TracingFormat};
use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use tracing::debug;

/// Printed when fewer than two paths are given
pub const USAGE: &str = "Usage: process-logo <input> <output>";

/// Make the black background of a logo transparent
///
/// Flags go before the paths. Everything from the first path on is taken
/// verbatim, so file names starting with `-` work and anything after the
/// output path is ignored.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(name = "process-logo")]
pub struct Cli {
    /// Input image (PNG, JPEG, TIFF, WebP) followed by the output file, always written as PNG
    #[arg(
        value_name = "INPUT OUTPUT",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub paths: Vec<OsString>,

    /// Enable verbose logging on stderr (-v: INFO, -vv: DEBUG, -vvv: TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// First positional argument
    pub fn input(&self) -> Option<&Path> {
        self.paths.first().map(Path::new)
    }

    /// Second positional argument
    pub fn output(&self) -> Option<&Path> {
        self.paths.get(1).map(Path::new)
    }

    /// Positional arguments past the output path
    pub fn extra(&self) -> &[OsString] {
        self.paths.get(2..).unwrap_or_default()
    }
}

pub fn main() -> Result<()> {
    let cli = Cli::parse();

    TracingConfig::new()
        .with_verbosity(cli.verbose)
        .with_format(TracingFormat::for_terminal(io::stderr().is_terminal()))
        .init()
        .context("Failed to initialize tracing")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out).context("Failed to write to stdout")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}

/// Execute one invocation, writing the user-facing line to `out`
///
/// Conversion failures are reported, never returned. The only error is a
/// failed write to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> io::Result<()> {
    let (Some(input), Some(output)) = (cli.input(), cli.output()) else {
        debug!("Fewer than two paths given, printing usage");
        return writeln!(out, "{}", USAGE);
    };

    if !cli.extra().is_empty() {
        debug!(ignored = ?cli.extra(), "Ignoring extra arguments");
    }

    let outcome = remove_black_background(input, output);
    report_outcome(out, output, &outcome)
}

/// Print the success or failure line for a finished conversion
pub fn report_outcome<W: Write>(
    out: &mut W,
    output_path: &Path,
    outcome: &crate::Result<ProcessingSummary>,
) -> io::Result<()> {
    match outcome {
        Ok(summary) => {
            debug!(
                width = summary.dimensions.0,
                height = summary.dimensions.1,
                keyed = summary.keyed_pixels(),
                "Conversion finished"
            );
            writeln!(
                out,
                "Successfully processed logo to {}",
                output_path.display()
            )
        },
        Err(e) => {
            debug!(error = ?e, "Conversion failed");
            writeln!(out, "Error processing image: {}", e)
        },
    }
}
