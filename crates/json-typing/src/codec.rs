//! The codec: one registry, one tagging encoder, one detagging decoder.

use std::io;
use std::sync::Arc;

use tracing::debug;

use crate::adapters;
use crate::base;
use crate::decoder::DetaggingDecoder;
use crate::encoder::TaggingEncoder;
use crate::error::CodecError;
use crate::registry::{Registry, Source};
use crate::value::Value;

/// Options controlling text output.
#[derive(Debug, Clone, Default)]
pub struct CodecOptions {
    /// Indent output with two spaces. Compact by default.
    pub pretty: bool,
}

/// Drop-in replacement for `serde_json`'s encode/decode that understands the
/// types in its registry.
///
/// The registry is fixed at construction. A codec is `Send + Sync` and can be
/// shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    encoder: TaggingEncoder,
    decoder: DetaggingDecoder,
    options: CodecOptions,
}

impl Codec {
    pub fn new<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Source>,
    {
        Self::with_options(sources, CodecOptions::default())
    }

    pub fn with_options<I, S>(sources: I, options: CodecOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Source>,
    {
        let registry = Arc::new(Registry::build(sources));
        debug!(adapters = registry.len(), pretty = options.pretty, "created codec");
        Self {
            encoder: TaggingEncoder::new(registry.clone()),
            decoder: DetaggingDecoder::new(registry),
            options,
        }
    }

    /// Codec over every built-in adapter.
    pub fn builtin() -> Self {
        Self::new([adapters::builtin()])
    }

    pub fn registry(&self) -> &Registry {
        self.encoder.registry()
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    pub fn encode(&self, value: &Value) -> Result<String, CodecError> {
        base::encode_with(value, &self.encoder, self.options.pretty)
    }

    /// Encodes to a JSON tree instead of text.
    pub fn encode_value(&self, value: &Value) -> Result<serde_json::Value, CodecError> {
        base::to_json(value, &self.encoder)
    }

    pub fn encode_to_writer<W: io::Write>(&self, writer: W, value: &Value) -> Result<(), CodecError> {
        base::encode_to_writer_with(writer, value, &self.encoder, self.options.pretty)
    }

    pub fn decode(&self, text: &str) -> Result<Value, CodecError> {
        base::decode_with(text, &self.decoder)
    }

    /// Detags an already parsed JSON tree.
    pub fn decode_value(&self, json: serde_json::Value) -> Result<Value, CodecError> {
        base::from_json(json, &self.decoder)
    }

    /// Reads the whole input before decoding.
    pub fn decode_from_reader<R: io::Read>(&self, reader: R) -> Result<Value, CodecError> {
        base::decode_from_reader_with(reader, &self.decoder)
    }
}
