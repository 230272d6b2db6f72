//! The two extension points of the base JSON format.
//!
//! `serde_json` handles text, escaping and number formatting. This module
//! walks between [`Value`] and `serde_json::Value`, calling
//! [`EncodeHook::default_for`] for every value JSON cannot represent and
//! [`DecodeHook::on_map_parsed`] for every parsed object, innermost first.

use std::io;

use crate::error::CodecError;
use crate::value::{Extension, Map, Value};

/// Replaces a value JSON cannot represent with one it can.
pub trait EncodeHook {
    /// The returned value is lowered again, so it may contain further
    /// extension values.
    fn default_for(&self, value: &dyn Extension) -> Result<Value, CodecError>;
}

/// Post-processes every object after its members have been decoded.
pub trait DecodeHook {
    fn on_map_parsed(&self, map: Map) -> Result<Value, CodecError>;
}

/// Lowers `value` to a plain JSON tree.
pub fn to_json<H>(value: &Value, hook: &H) -> Result<serde_json::Value, CodecError>
where
    H: EncodeHook + ?Sized,
{
    Ok(match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Value::Number(n.clone()),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(arr) => serde_json::Value::Array(
            arr.iter()
                .map(|item| to_json(item, hook))
                .collect::<Result<_, _>>()?,
        ),
        Value::Object(map) => {
            let mut obj = serde_json::Map::with_capacity(map.len());
            for (key, item) in map {
                obj.insert(key.clone(), to_json(item, hook)?);
            }
            serde_json::Value::Object(obj)
        }
        Value::Extension(ext) => {
            let replacement = hook.default_for(&**ext)?;
            to_json(&replacement, hook)?
        }
    })
}

/// Raises a plain JSON tree, calling `hook` on every object bottom-up.
pub fn from_json<H>(json: serde_json::Value, hook: &H) -> Result<Value, CodecError>
where
    H: DecodeHook + ?Sized,
{
    Ok(match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => Value::Array(
            arr.into_iter()
                .map(|item| from_json(item, hook))
                .collect::<Result<_, _>>()?,
        ),
        serde_json::Value::Object(obj) => {
            let mut map = Map::with_capacity(obj.len());
            for (key, item) in obj {
                map.insert(key, from_json(item, hook)?);
            }
            hook.on_map_parsed(map)?
        }
    })
}

pub fn encode_with<H>(value: &Value, hook: &H, pretty: bool) -> Result<String, CodecError>
where
    H: EncodeHook + ?Sized,
{
    let json = to_json(value, hook)?;
    let text = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    Ok(text)
}

pub fn encode_to_writer_with<W, H>(
    writer: W,
    value: &Value,
    hook: &H,
    pretty: bool,
) -> Result<(), CodecError>
where
    W: io::Write,
    H: EncodeHook + ?Sized,
{
    let json = to_json(value, hook)?;
    let written = if pretty {
        serde_json::to_writer_pretty(writer, &json)
    } else {
        serde_json::to_writer(writer, &json)
    };
    written.map_err(io_or_syntax)
}

pub fn decode_with<H>(text: &str, hook: &H) -> Result<Value, CodecError>
where
    H: DecodeHook + ?Sized,
{
    let json: serde_json::Value = serde_json::from_str(text)?;
    from_json(json, hook)
}

pub fn decode_from_reader_with<R, H>(reader: R, hook: &H) -> Result<Value, CodecError>
where
    R: io::Read,
    H: DecodeHook + ?Sized,
{
    let json: serde_json::Value = serde_json::from_reader(reader).map_err(io_or_syntax)?;
    from_json(json, hook)
}

fn io_or_syntax(err: serde_json::Error) -> CodecError {
    if err.is_io() {
        CodecError::Io(err.into())
    } else {
        CodecError::Syntax(err)
    }
}
