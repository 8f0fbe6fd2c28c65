//! Draws Secret Santa pairings from a roster file.
//!
//! This binary delegates to `secret_santa::draw_cli` for parsing, drawing, and
//! rendering, keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use secret_santa::draw_cli::{CliError, ParseOutcome, parse_args, render_pairings, run_draw};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the pairings.
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        drop(err);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let pairings = run_draw(&options)?;
            let rendered = render_pairings(&pairings, options.format())?;
            write_output(&rendered);
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: secret-santa-draw --roster <path> [options]\n",
        "\n",
        "Options:\n",
        "  --roster <path>        Path to the roster JSON file\n",
        "  --seed <seed>          RNG seed for a reproducible draw\n",
        "  --max-attempts <n>     Override the roster's attempt cap (default 1000)\n",
        "  --json                 Print pairings as a JSON object\n",
        "  -h, --help             Print this help output\n",
        "\n",
        "Set RUST_LOG=secret_santa=debug to trace the search on stderr.\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_output(rendered: &str) {
    let mut stdout = io::stdout().lock();
    let result = if rendered.ends_with('\n') {
        stdout.write_all(rendered.as_bytes())
    } else {
        writeln!(stdout, "{rendered}")
    };
    if let Err(err) = result {
        drop(err);
    }
}
