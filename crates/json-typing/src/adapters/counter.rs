use std::fmt::Debug;

use indexmap::IndexMap;

use super::{expect_object, Element};
use crate::registry::Adapter;
use crate::value::{Map, Value};

/// Multiset of string keys.
///
/// Values are integer counts by default. Like a plain mapping, a counter may
/// also hold arbitrary members (`Counter<Value>`), including extension
/// values. Equality ignores insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter<T = i64> {
    counts: IndexMap<String, T>,
}

impl<T> Default for Counter<T> {
    fn default() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }
}

impl<T> Counter<T> {
    /// Sets the value for `key`, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        self.counts.insert(key.into(), value)
    }

    pub fn value(&self, key: &str) -> Option<&T> {
        self.counts.get(key)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `key`.
    pub fn add(&mut self, key: impl Into<String>) {
        self.add_n(key, 1);
    }

    /// Counts saturate at the `i64` bounds.
    pub fn add_n(&mut self, key: impl Into<String>, n: i64) {
        let count = self.counts.entry(key.into()).or_insert(0);
        *count = count.saturating_add(n);
    }

    /// Count for `key`; zero when absent.
    pub fn get(&self, key: &str) -> i64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts, saturating at the `i64` bounds.
    pub fn total(&self) -> i64 {
        let sum: i128 = self.counts.values().map(|&n| i128::from(n)).sum();
        sum.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    /// Keys by descending count. Ties keep insertion order.
    pub fn most_common(&self) -> Vec<(&str, i64)> {
        let mut entries: Vec<_> = self.iter().map(|(k, &v)| (k, v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl<S: Into<String>> FromIterator<S> for Counter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counter = Counter::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}

/// Counter adapter for any member type, carried as a plain object.
pub fn counter_of<T>(identifier: &str) -> Adapter
where
    T: Element + PartialEq + Debug + Send + Sync + 'static,
{
    Adapter::new(
        identifier,
        |counter: &Counter<T>| {
            Ok(Value::Object(
                counter
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_value()))
                    .collect::<Map>(),
            ))
        },
        |payload| {
            let counts = expect_object(payload)?
                .into_iter()
                .map(|(k, v)| T::from_value(v).map(|v| (k, v)))
                .collect::<Result<_, _>>()?;
            Ok(Counter { counts })
        },
    )
}

/// [`Counter`] as `counter`, carried as a plain object of counts.
pub fn counters() -> Adapter {
    counter_of::<i64>("counter")
}
