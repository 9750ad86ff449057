#[macro_use]
extern crate log;

use std::env;
use std::io::{self, BufRead, BufWriter, Write};

use clap::Parser;
use color_eyre::eyre::Result;
use fuzzrank::prelude::*;

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();

    if let Err(err) = color_eyre::install() {
        warn!("failed to install error report handler: {err}");
    }

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // if downstream pipe is closed, exit silently
            if let Some(io_err) = err.downcast_ref::<io::Error>() {
                if io_err.kind() == io::ErrorKind::BrokenPipe {
                    std::process::exit(0)
                }
            }
            eprintln!("{err:?}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> SearchOptions {
    let mut args = Vec::new();

    args.push(env::args().next().unwrap_or_else(|| String::from("fzr")));
    args.extend(
        env::var("FZR_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    for arg in env::args().skip(1) {
        args.push(arg);
    }

    SearchOptions::parse_from(args)
}

/// Reads every candidate from `source`, split on `delimiter`.
fn read_candidates(source: impl BufRead, delimiter: u8) -> io::Result<Vec<String>> {
    source
        .split(delimiter)
        .map(|record| {
            let mut record = record?;
            if delimiter == b'\n' && record.last() == Some(&b'\r') {
                record.pop();
            }
            Ok(String::from_utf8_lossy(&record).into_owned())
        })
        .collect()
}

fn real_main() -> Result<i32> {
    let opts = parse_args();
    debug!("options: {opts:?}");

    //------------------------------------------------------------------------------
    // read all candidates, then rank them in one go
    let candidates = read_candidates(io::stdin().lock(), opts.input_delimiter())?;
    let engine = SearchEngine::from_options(&opts);
    let results = engine.search(&opts.query, &candidates);
    info!("{} of {} candidates kept", results.len(), candidates.len());

    //------------------------------------------------------------------------------
    // output
    let mut stdout = BufWriter::new(io::stdout().lock());
    let ending = opts.output_ending();
    for result in &results {
        if opts.json {
            write!(stdout, "{}{}", serde_json::to_string(result)?, ending)?;
        } else if opts.print_score {
            write!(stdout, "{}\t{}{}", result.score, result.candidate, ending)?;
        } else {
            write!(stdout, "{}{}", result.candidate, ending)?;
        }
    }
    stdout.flush()?;

    Ok(if results.is_empty() { 1 } else { 0 })
}
