use super::{expect_array, expect_object};
use crate::registry::Adapter;
use crate::value::{Map, Value};

/// Several maps searched front to back as one.
///
/// Layer values may be extension values; the payload is the array of layers,
/// so nested values are tagged individually.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainMap {
    maps: Vec<Map>,
}

impl ChainMap {
    pub fn new(maps: Vec<Map>) -> Self {
        Self { maps }
    }

    /// Value for `key` from the first layer that has it.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.maps.iter().find_map(|map| map.get(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn maps(&self) -> &[Map] {
        &self.maps
    }

    pub fn into_maps(self) -> Vec<Map> {
        self.maps
    }

    /// Returns a chain with `map` in front of the existing layers.
    pub fn new_child(&self, map: Map) -> Self {
        let mut maps = Vec::with_capacity(self.maps.len() + 1);
        maps.push(map);
        maps.extend(self.maps.iter().cloned());
        Self { maps }
    }

    /// Collapses the layers into one map; earlier layers win.
    pub fn flatten(&self) -> Map {
        let mut out = Map::new();
        for map in self.maps.iter().rev() {
            for (key, value) in map {
                out.insert(key.clone(), value.clone());
            }
        }
        out
    }
}

/// [`ChainMap`] as `chainmap`.
pub fn chain_maps() -> Adapter {
    Adapter::new(
        "chainmap",
        |chain: &ChainMap| {
            Ok(Value::Array(
                chain.maps.iter().cloned().map(Value::Object).collect(),
            ))
        },
        |payload| {
            let maps = expect_array(payload)?
                .into_iter()
                .map(expect_object)
                .collect::<Result<_, _>>()?;
            Ok(ChainMap { maps })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(pairs: &[(&str, i64)]) -> Map {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::from(*v)))
            .collect()
    }

    #[test]
    fn lookup_goes_front_to_back() {
        let chain = ChainMap::new(vec![layer(&[("a", 1)]), layer(&[("a", 2), ("b", 3)])]);
        assert_eq!(chain.get("a").and_then(Value::as_i64), Some(1));
        assert_eq!(chain.get("b").and_then(Value::as_i64), Some(3));
        assert!(!chain.contains_key("c"));
    }

    #[test]
    fn new_child_shadows() {
        let chain = ChainMap::new(vec![layer(&[("a", 1)])]).new_child(layer(&[("a", 9)]));
        assert_eq!(chain.maps().len(), 2);
        assert_eq!(chain.get("a").and_then(Value::as_i64), Some(9));
    }

    #[test]
    fn flatten_prefers_earlier_layers() {
        let chain = ChainMap::new(vec![layer(&[("a", 1)]), layer(&[("a", 2), ("b", 3)])]);
        let flat = chain.flatten();
        assert_eq!(flat.get("a").and_then(Value::as_i64), Some(1));
        assert_eq!(flat.get("b").and_then(Value::as_i64), Some(3));
    }

    #[test]
    fn payload_is_array_of_layers() {
        let chain = ChainMap::new(vec![layer(&[("a", 1)]), Map::new()]);
        let payload = chain_maps().to_payload(&chain).unwrap();
        assert_eq!(payload.as_array().map(Vec::len), Some(2));
        let back = chain_maps().from_payload(payload).unwrap();
        assert_eq!(back.downcast_ref::<ChainMap>(), Some(&chain));
    }

    #[test]
    fn rejects_non_object_layers() {
        let payload = Value::Array(vec![Value::from(1i64)]);
        assert!(chain_maps().from_payload(payload).is_err());
    }
}
