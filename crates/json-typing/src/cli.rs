//! Support code for the `json-typing` binary.
//!
//! The binary reads a JSON document, decodes it with the built-in adapters
//! and writes it back out, so tagged documents are validated and normalized.

use thiserror::Error;

use crate::codec::{Codec, CodecOptions};
use crate::error::CodecError;

pub const USAGE: &str = "Usage: json-typing [--pretty] [--verbose | --quiet]

Reads JSON on stdin, reconstructs tagged records with the built-in adapters
and writes the re-encoded document to stdout.";

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub pretty: bool,
    pub verbose: bool,
    pub quiet: bool,
    pub help: bool,
}

/// Parses flags, skipping the program name.
pub fn parse_args<I, S>(args: I) -> Result<CliOptions, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions::default();
    for arg in args.into_iter().skip(1) {
        match arg.as_ref() {
            "--pretty" | "-p" => options.pretty = true,
            "--verbose" | "-v" => options.verbose = true,
            "--quiet" | "-q" => options.quiet = true,
            "--help" | "-h" => options.help = true,
            other => return Err(CliError::UnknownOption(other.to_string())),
        }
    }
    Ok(options)
}

/// Decodes `input` with the built-in adapters and encodes it again.
pub fn normalize(input: &str, pretty: bool) -> Result<String, CliError> {
    let codec = Codec::with_options(
        [crate::adapters::builtin()],
        CodecOptions { pretty },
    );
    let value = codec.decode(input)?;
    Ok(codec.encode(&value)?)
}
