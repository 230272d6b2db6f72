//! Tagging encoder.
//!
//! Replaces registered extension values with tagged records:
//!
//! ```text
//! {"__type__": "<identifier>", "__data__": <to_payload(value)>}
//! ```
//!
//! A payload whose top level is itself an object carrying the two reserved
//! fields cannot be told apart from a real tagged record on the way back in.
//! Adapters must not produce such payloads.

use std::sync::Arc;

use tracing::trace;

use crate::base::EncodeHook;
use crate::constants::{DATA_FIELD, TYPE_FIELD};
use crate::error::CodecError;
use crate::registry::Registry;
use crate::value::{Extension, Map, Value};

#[derive(Debug, Clone, Default)]
pub struct TaggingEncoder {
    registry: Arc<Registry>,
}

impl TaggingEncoder {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl EncodeHook for TaggingEncoder {
    fn default_for(&self, value: &dyn Extension) -> Result<Value, CodecError> {
        let type_id = value.as_any().type_id();
        let adapter = self
            .registry
            .for_type_id(type_id)
            .ok_or(CodecError::UnsupportedType {
                type_name: value.type_name(),
            })?;
        trace!(identifier = adapter.identifier(), "tagging extension value");
        let payload = adapter.to_payload(value)?;
        let mut record = Map::with_capacity(2);
        record.insert(
            TYPE_FIELD.to_string(),
            Value::String(adapter.identifier().to_string()),
        );
        record.insert(DATA_FIELD.to_string(), payload);
        Ok(Value::Object(record))
    }
}
