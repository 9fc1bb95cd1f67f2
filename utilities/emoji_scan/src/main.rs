//! Prints every emoji sequence found in the given files, or stdin.
//!
//! ```text
//! emoji_scan [files...] [-c] [-j] [--pattern] [-v level]
//! ```

extern crate tracing as log;

use std::io::{self, BufWriter, Write};

use anyhow::Context;

mod cli;
mod logging;
mod output;

use output::{Format, Record};

fn main() -> anyhow::Result<()> {
    let args: cli::CliArgs = argh::from_env();

    logging::init(args.verbose())?;
    log::debug!("Arguments: {:?}", args);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let format = Format::new(args.count, args.json)?;

    if args.pattern {
        writeln!(out, "{}", emoji_seq::pattern::source())?;
        out.flush()?;
        return Ok(());
    }

    let matcher = emoji_seq::bytes::build().context("Unable to build the emoji matcher")?;

    let mut total = 0;

    for input in args.inputs() {
        let name = input.name();

        log::trace!("Reading {name}...");
        let data = input.read().with_context(|| format!("Unable to read {name}"))?;

        let mut found = 0;
        for seq in matcher.match_all(&data) {
            output::write_sequence(&mut out, format, &Record::new(&name, &seq))?;
            found += 1;
        }

        if format == Format::Count {
            writeln!(out, "{name}\t{found}")?;
        }

        log::trace!("Found {found} emoji sequences in {name} ({} bytes)", data.len());
        total += found;
    }

    out.flush()?;

    log::debug!("Found {total} emoji sequences in total");

    Ok(())
}
