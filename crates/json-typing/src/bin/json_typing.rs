//! `json-typing`: validate and normalize tagged JSON (stdin to stdout).
//!
//! Usage:
//!   json-typing [--pretty] [--verbose | --quiet]

use json_typing::cli::{normalize, parse_args, USAGE};
use std::io::{self, Read, Write};
use tracing_subscriber::filter::LevelFilter;

fn main() {
    let options = match parse_args(std::env::args()) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };
    if options.help {
        println!("{USAGE}");
        return;
    }

    let log_level = if options.quiet {
        LevelFilter::OFF
    } else if options.verbose {
        LevelFilter::TRACE
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .init();

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match normalize(&buf, options.pretty) {
        Ok(text) => {
            let mut stdout = io::stdout();
            if let Err(e) = writeln!(stdout, "{text}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::debug!(error = ?e, "normalization failed");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
