//! Sequence-shaped adapters: tuples, sets and deques all travel as arrays.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use super::{expect_array, Element};
use crate::error::AdapterError;
use crate::registry::Adapter;
use crate::value::Value;

/// Fixed sequence, kept apart from plain arrays on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tuple(pub Vec<Value>);

impl From<Vec<Value>> for Tuple {
    fn from(items: Vec<Value>) -> Self {
        Tuple(items)
    }
}

impl FromIterator<Value> for Tuple {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Tuple(iter.into_iter().collect())
    }
}

pub fn tuples() -> Adapter {
    Adapter::new(
        "tuple",
        |t: &Tuple| Ok(Value::Array(t.0.clone())),
        |payload| expect_array(payload).map(Tuple),
    )
}

fn elements<T, C>(payload: Value) -> Result<C, AdapterError>
where
    T: Element,
    C: FromIterator<T>,
{
    expect_array(payload)?
        .into_iter()
        .map(T::from_value)
        .collect()
}

/// Ordered set adapter for any element type. The payload is sorted.
pub fn set_of<T>(identifier: &str) -> Adapter
where
    T: Element + Ord + Debug + Send + Sync + 'static,
{
    Adapter::new(
        identifier,
        |set: &BTreeSet<T>| Ok(set.iter().map(T::to_value).collect()),
        elements::<T, BTreeSet<T>>,
    )
}

/// Hash set adapter for any element type. Payload order is unspecified.
pub fn hash_set_of<T>(identifier: &str) -> Adapter
where
    T: Element + Eq + Hash + Debug + Send + Sync + 'static,
{
    Adapter::new(
        identifier,
        |set: &HashSet<T>| Ok(set.iter().map(T::to_value).collect()),
        elements::<T, HashSet<T>>,
    )
}

pub fn deque_of<T>(identifier: &str) -> Adapter
where
    T: Element + PartialEq + Debug + Send + Sync + 'static,
{
    Adapter::new(
        identifier,
        |deque: &VecDeque<T>| Ok(deque.iter().map(T::to_value).collect()),
        elements::<T, VecDeque<T>>,
    )
}

/// `BTreeSet<i64>` as `set`.
pub fn sets() -> Adapter {
    set_of::<i64>("set")
}

/// `BTreeSet<String>` as `set<str>`.
pub fn string_sets() -> Adapter {
    set_of::<String>("set<str>")
}

/// `HashSet<String>` as `hashset<str>`.
pub fn hash_sets() -> Adapter {
    hash_set_of::<String>("hashset<str>")
}

/// `VecDeque<Value>` as `deque`. Members may be extension values.
pub fn deques() -> Adapter {
    deque_of::<Value>("deque")
}
