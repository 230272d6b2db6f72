//! Built-in adapters for common container types.
//!
//! Each function returns a ready [`Adapter`]; [`builtin`] collects all of
//! them into one table. Nothing here is global: pass the adapters you want
//! to [`Codec::new`](crate::Codec::new).
//!
//! | identifier     | type                   | payload                   |
//! |----------------|------------------------|---------------------------|
//! | `tuple`        | [`Tuple`]              | array                     |
//! | `range`        | [`StepRange`]          | `[start, stop, step]`     |
//! | `set`          | `BTreeSet<i64>`        | array                     |
//! | `set<str>`     | `BTreeSet<String>`     | array                     |
//! | `hashset<str>` | `HashSet<String>`      | array                     |
//! | `deque`        | `VecDeque<Value>`      | array                     |
//! | `counter`      | [`Counter`] (`i64`)    | object of counts          |
//! | `chainmap`     | [`ChainMap`]           | array of objects          |
//! | `bytes`        | `Vec<u8>`              | standard base64 string    |
//! | `pattern`      | [`Pattern`]            | pattern string            |

mod binary;
mod chain_map;
mod collections;
mod counter;
mod element;
mod pattern;
mod range;

pub use binary::bytes;
pub use chain_map::{chain_maps, ChainMap};
pub use collections::{deque_of, deques, hash_set_of, hash_sets, set_of, sets, string_sets, tuples, Tuple};
pub use counter::{counter_of, counters, Counter};
pub use element::Element;
pub use pattern::{patterns, Pattern};
pub use range::{ranges, StepRange};

use crate::error::AdapterError;
use crate::registry::Registry;
use crate::value::{Map, Value};

/// Every built-in adapter.
pub fn builtin() -> Registry {
    [
        tuples(),
        ranges(),
        sets(),
        string_sets(),
        hash_sets(),
        deques(),
        counters(),
        chain_maps(),
        bytes(),
        patterns(),
    ]
    .into_iter()
    .collect()
}

fn unexpected(expected: &'static str, found: &Value) -> AdapterError {
    AdapterError::UnexpectedPayload {
        expected,
        found: found.kind(),
    }
}

pub(crate) fn expect_array(payload: Value) -> Result<Vec<Value>, AdapterError> {
    match payload {
        Value::Array(items) => Ok(items),
        other => Err(unexpected("array", &other)),
    }
}

pub(crate) fn expect_object(payload: Value) -> Result<Map, AdapterError> {
    match payload {
        Value::Object(map) => Ok(map),
        other => Err(unexpected("object", &other)),
    }
}

pub(crate) fn expect_string(payload: Value) -> Result<String, AdapterError> {
    match payload {
        Value::String(s) => Ok(s),
        other => Err(unexpected("string", &other)),
    }
}

pub(crate) fn expect_i64(payload: &Value) -> Result<i64, AdapterError> {
    payload.as_i64().ok_or_else(|| unexpected("integer", payload))
}
