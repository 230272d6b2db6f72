//! Detagging decoder.
//!
//! Runs on every parsed object after its members, so a payload reaches
//! `from_payload` with its own tagged records already reconstructed.

use std::sync::Arc;

use tracing::trace;

use crate::base::DecodeHook;
use crate::constants::{DATA_FIELD, TYPE_FIELD};
use crate::error::CodecError;
use crate::registry::Registry;
use crate::value::{Map, Value};

#[derive(Debug, Clone, Default)]
pub struct DetaggingDecoder {
    registry: Arc<Registry>,
}

impl DetaggingDecoder {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl DecodeHook for DetaggingDecoder {
    fn on_map_parsed(&self, mut map: Map) -> Result<Value, CodecError> {
        let identifier = match map.get(TYPE_FIELD) {
            None => return Ok(Value::Object(map)),
            Some(Value::String(identifier)) => identifier.clone(),
            Some(other) => return Err(CodecError::UnknownTag(describe_tag(other))),
        };
        let adapter = self
            .registry
            .get(&identifier)
            .ok_or_else(|| CodecError::UnknownTag(identifier.clone()))?;
        let payload = map
            .swap_remove(DATA_FIELD)
            .ok_or(CodecError::MissingData(identifier))?;
        trace!(identifier = adapter.identifier(), "detagging record");
        Ok(adapter.from_payload(payload)?)
    }
}

fn describe_tag(tag: &Value) -> String {
    match tag {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => format!("<{}>", other.kind()),
    }
}
