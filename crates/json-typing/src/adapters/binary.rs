use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::expect_string;
use crate::registry::Adapter;
use crate::value::Value;

/// `Vec<u8>` as `bytes`, carried as a padded standard base64 string.
pub fn bytes() -> Adapter {
    Adapter::new(
        "bytes",
        |data: &Vec<u8>| Ok(Value::String(STANDARD.encode(data))),
        |payload| Ok(STANDARD.decode(expect_string(payload)?)?),
    )
}
