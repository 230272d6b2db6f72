//! End-to-end behaviour of `Codec::encode` / `Codec::decode`.

use std::collections::{BTreeSet, VecDeque};
use std::sync::Arc;
use std::thread;

use json_typing::adapters::{self, ChainMap, Counter, StepRange, Tuple};
use json_typing::{Adapter, AdapterError, Codec, CodecError, Map, Registry, Source, Value};
use serde_json::json;

fn int_set(items: &[i64]) -> BTreeSet<i64> {
    items.iter().copied().collect()
}

// ------------------------------------------------------------------ Scenarios

#[test]
fn set_scenario() {
    let codec = Codec::new([adapters::sets()]);
    let text = codec.encode(&Value::extension(int_set(&[1, 2, 3]))).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(raw["__type__"], json!("set"));
    let data = raw["__data__"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert!(data.iter().all(serde_json::Value::is_number));

    let decoded = codec.decode(&text).unwrap();
    assert_eq!(decoded.downcast_ref::<BTreeSet<i64>>(), Some(&int_set(&[1, 2, 3])));
}

#[test]
fn no_adapters_scenario() {
    let codec = Codec::default();
    let value = Value::from(json!({"a": 1}));
    assert_eq!(codec.encode(&value).unwrap(), r#"{"a":1}"#);
    assert_eq!(codec.decode(r#"{"a": 1}"#).unwrap(), value);
}

// ------------------------------------------------------------------ Round trip

#[test]
fn mixed_tree_round_trip() {
    let codec = Codec::builtin();
    let mut counter = Counter::new();
    counter.add_n("apples", 3);
    counter.add("pears");

    let value: Value = vec![
        ("name", Value::from("inventory")),
        ("tags", Value::extension(int_set(&[7, 3]))),
        ("counts", Value::extension(counter)),
        ("window", Value::extension(StepRange::new(10, 0, -2).unwrap())),
        (
            "pair",
            Value::extension(Tuple(vec![Value::from(1.5), Value::Null])),
        ),
        (
            "list",
            Value::Array(vec![Value::from(true), Value::extension(b"\x00\xff".to_vec())]),
        ),
        ("pattern", Value::extension(adapters::Pattern::new("a+b").unwrap())),
    ]
    .into_iter()
    .collect();

    let text = codec.encode(&value).unwrap();
    assert_eq!(codec.decode(&text).unwrap(), value);
}

#[test]
fn nested_tagging_inside_chain_map() {
    let codec = Codec::new([adapters::chain_maps(), adapters::bytes()]);
    let mut front = Map::new();
    front.insert("blob".to_string(), Value::extension(vec![1u8, 2, 3]));
    let mut back = Map::new();
    back.insert("blob".to_string(), Value::extension(vec![9u8]));
    back.insert("plain".to_string(), Value::from(1i64));
    let chain = ChainMap::new(vec![front, back]);

    let text = codec.encode(&Value::extension(chain.clone())).unwrap();
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&text).unwrap(),
        json!({
            "__type__": "chainmap",
            "__data__": [
                {"blob": {"__type__": "bytes", "__data__": "AQID"}},
                {"blob": {"__type__": "bytes", "__data__": "CQ=="}, "plain": 1}
            ]
        })
    );

    let decoded = codec.decode(&text).unwrap();
    let decoded = decoded.downcast_ref::<ChainMap>().unwrap();
    assert_eq!(decoded, &chain);
    assert_eq!(
        decoded.get("blob").and_then(|v| v.downcast_ref::<Vec<u8>>()),
        Some(&vec![1u8, 2, 3])
    );
}

#[test]
fn nested_tagging_counter_of_bytes() {
    let codec = Codec::new([adapters::counter_of::<Value>("counter"), adapters::bytes()]);
    let decoded = codec
        .decode(r#"{"__type__":"counter","__data__":{"a":{"__type__":"bytes","__data__":"AQ=="}}}"#)
        .unwrap();
    let counter = decoded.downcast_ref::<Counter<Value>>().unwrap();
    assert_eq!(
        counter.value("a").and_then(|v| v.downcast_ref::<Vec<u8>>()),
        Some(&vec![1u8])
    );

    let mut counter = Counter::default();
    counter.insert("blob", Value::extension(vec![0u8, 255]));
    counter.insert("count", Value::from(2i64));
    let value = Value::extension(counter);
    let text = codec.encode(&value).unwrap();
    assert_eq!(
        text,
        r#"{"__type__":"counter","__data__":{"blob":{"__type__":"bytes","__data__":"AP8="},"count":2}}"#
    );
    assert_eq!(codec.decode(&text).unwrap(), value);
}

#[test]
fn nested_tagging_deque_of_deques() {
    let codec = Codec::new([adapters::deques(), adapters::bytes()]);
    let inner: VecDeque<Value> = [Value::extension(vec![5u8])].into_iter().collect();
    let outer: VecDeque<Value> = [Value::extension(inner), Value::from("x")]
        .into_iter()
        .collect();
    let value = Value::extension(outer);

    let text = codec.encode(&value).unwrap();
    assert_eq!(codec.decode(&text).unwrap(), value);
}

// ------------------------------------------------------------------ Errors

#[derive(Debug, PartialEq)]
struct Tags(BTreeSet<i64>);

#[test]
fn type_exactness() {
    let codec = Codec::new([adapters::sets()]);
    let err = codec.encode(&Value::extension(Tags(int_set(&[1])))).unwrap_err();
    assert!(matches!(err, CodecError::UnsupportedType { .. }));
    assert!(err.to_string().contains("Tags"));

    // A different element type is a different type too.
    let err = codec
        .encode(&Value::extension(BTreeSet::from([1u64])))
        .unwrap_err();
    assert!(matches!(err, CodecError::UnsupportedType { .. }));
}

#[test]
fn unknown_tag_rejection() {
    let codec = Codec::new([adapters::sets()]);
    let err = codec
        .decode(r#"{"x": [{"__type__": "deque", "__data__": []}]}"#)
        .unwrap_err();
    assert!(matches!(err, CodecError::UnknownTag(ref tag) if tag == "deque"));
}

#[test]
fn syntax_error_surfaces_unchanged() {
    let err = Codec::builtin().decode("[1, 2").unwrap_err();
    match err {
        CodecError::Syntax(e) => assert!(e.is_eof()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn adapter_error_surfaces_unchanged() {
    let err = Codec::builtin()
        .decode(r#"{"__type__": "bytes", "__data__": 42}"#)
        .unwrap_err();
    assert!(matches!(
        err,
        CodecError::Adapter(AdapterError::UnexpectedPayload {
            expected: "string",
            found: "number"
        })
    ));
}

#[test]
fn failing_to_payload_propagates() {
    #[derive(Debug, PartialEq)]
    struct Secret;

    let codec = Codec::new([Adapter::new(
        "secret",
        |_: &Secret| Err(AdapterError::Custom("refusing to serialize".into())),
        |_| Ok(Secret),
    )]);
    let err = codec.encode(&Value::extension(Secret)).unwrap_err();
    assert_eq!(err.to_string(), "refusing to serialize");
}

// ------------------------------------------------------------------ Registry

#[derive(Debug, PartialEq)]
struct Celsius(f64);

fn celsius_as(identifier: &str, scale: f64) -> Adapter {
    Adapter::new(
        identifier,
        move |c: &Celsius| Ok(Value::from(c.0 * scale)),
        move |payload| Ok(Celsius(payload.as_f64().unwrap_or_default() / scale)),
    )
}

#[test]
fn last_write_wins() {
    let first: Registry = [celsius_as("temp", 1.0)].into_iter().collect();
    let codec = Codec::new([Source::from(first), Source::from(celsius_as("temp", 10.0))]);

    let text = codec.encode(&Value::extension(Celsius(2.0))).unwrap();
    assert_eq!(text, r#"{"__type__":"temp","__data__":20.0}"#);
    assert_eq!(
        codec.decode(r#"{"__type__":"temp","__data__":50.0}"#).unwrap(),
        Value::extension(Celsius(5.0))
    );
}

#[test]
fn re_registered_type_retires_old_identifier() {
    let codec = Codec::new([celsius_as("old", 1.0), celsius_as("new", 10.0)]);
    let err = codec.decode(r#"{"__type__":"old","__data__":5.0}"#).unwrap_err();
    assert!(matches!(err, CodecError::UnknownTag(tag) if tag == "old"));
    assert_eq!(
        codec.decode(r#"{"__type__":"new","__data__":50.0}"#).unwrap(),
        Value::extension(Celsius(5.0))
    );
}

#[test]
fn builtin_table_can_be_extended_and_overridden() {
    let custom = Adapter::new(
        "set",
        |s: &BTreeSet<i64>| Ok(Value::from(s.len() as i64)),
        |_| Ok(BTreeSet::<i64>::new()),
    );
    let codec = Codec::new([Source::from(adapters::builtin()), Source::from(custom)]);
    let text = codec.encode(&Value::extension(int_set(&[1, 2]))).unwrap();
    assert_eq!(text, r#"{"__type__":"set","__data__":2}"#);
    assert!(codec.registry().contains("bytes"));
}

// ------------------------------------------------------------------ Misc

#[test]
fn reserved_field_collision_is_reinterpreted() {
    // A plain object that happens to use the reserved names is decoded as a
    // tagged record.
    let codec = Codec::builtin();
    let plain = Value::from(json!({"__type__": "tuple", "__data__": [1]}));
    let text = codec.encode(&plain).unwrap();
    let decoded = codec.decode(&text).unwrap();
    assert_eq!(
        decoded.downcast_ref::<Tuple>(),
        Some(&Tuple(vec![Value::from(1i64)]))
    );
}

#[test]
fn codec_shared_across_threads() {
    let codec = Arc::new(Codec::builtin());
    let handles: Vec<_> = (0..4i64)
        .map(|i| {
            let codec = Arc::clone(&codec);
            thread::spawn(move || {
                let value = Value::extension(int_set(&[i, i + 1]));
                let text = codec.encode(&value).unwrap();
                codec.decode(&text).unwrap() == value
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn writer_and_reader() {
    let codec = Codec::builtin();
    let value = Value::extension(StepRange::up_to(0, 3));
    let mut buf = Vec::new();
    codec.encode_to_writer(&mut buf, &value).unwrap();
    assert_eq!(buf, br#"{"__type__":"range","__data__":[0,3,1]}"#);
    assert_eq!(codec.decode_from_reader(buf.as_slice()).unwrap(), value);
}
