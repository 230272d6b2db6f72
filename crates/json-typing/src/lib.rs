//! Registry-driven JSON codec for values JSON cannot represent natively.
//!
//! A [`Codec`] wraps `serde_json` with two hooks. On the way out, every
//! [`Value::Extension`] whose exact Rust type is registered is replaced by a
//! tagged record `{"__type__": <identifier>, "__data__": <payload>}`. On the
//! way in, every parsed object carrying the `__type__` field is handed to the
//! matching adapter and replaced by the reconstructed value.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//! use json_typing::{adapters, Codec, Value};
//!
//! let codec = Codec::new([adapters::sets()]);
//! let set: BTreeSet<i64> = [1, 2, 3].into_iter().collect();
//!
//! let text = codec.encode(&Value::extension(set.clone())).unwrap();
//! assert_eq!(text, r#"{"__type__":"set","__data__":[1,2,3]}"#);
//!
//! let decoded = codec.decode(&text).unwrap();
//! assert_eq!(decoded.downcast_ref::<BTreeSet<i64>>(), Some(&set));
//! ```

pub mod adapters;
pub mod base;
pub mod cli;
pub mod codec;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod registry;
pub mod value;

pub use codec::{Codec, CodecOptions};
pub use constants::{DATA_FIELD, TYPE_FIELD};
pub use decoder::DetaggingDecoder;
pub use encoder::TaggingEncoder;
pub use error::{AdapterError, CodecError};
pub use registry::{Adapter, Registry, Source};
pub use value::{Extension, Map, Value};
