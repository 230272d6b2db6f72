//! Adapter registry keyed by type identifier.
//!
//! An [`Adapter`] binds one Rust type to one identifier string and the pair
//! of conversion functions used on the wire. A [`Registry`] is the merged
//! table of adapters a [`Codec`](crate::Codec) is built from. Lookup is by
//! exact type: a newtype around a registered type is a different type.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::AdapterError;
use crate::value::{Extension, Value};

type ToPayloadFn = dyn Fn(&dyn Extension) -> Result<Value, AdapterError> + Send + Sync;
type FromPayloadFn = dyn Fn(Value) -> Result<Value, AdapterError> + Send + Sync;

/// The `(to_payload, from_payload)` pair registered for one type.
///
/// `from_payload` must be a left inverse of `to_payload`. This is not checked.
#[derive(Clone)]
pub struct Adapter {
    identifier: String,
    type_id: TypeId,
    type_name: &'static str,
    to_payload: Arc<ToPayloadFn>,
    from_payload: Arc<FromPayloadFn>,
}

impl Adapter {
    /// Creates an adapter for values of type `T` tagged as `identifier`.
    ///
    /// `to_payload` may return a payload that itself contains extension
    /// values; those are tagged by the same encoding pass.
    pub fn new<T, E, D>(identifier: impl Into<String>, to_payload: E, from_payload: D) -> Self
    where
        T: Extension,
        E: Fn(&T) -> Result<Value, AdapterError> + Send + Sync + 'static,
        D: Fn(Value) -> Result<T, AdapterError> + Send + Sync + 'static,
    {
        let identifier = identifier.into();
        let owner = identifier.clone();
        Self {
            identifier,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            to_payload: Arc::new(move |value: &dyn Extension| {
                match value.as_any().downcast_ref::<T>() {
                    Some(value) => to_payload(value),
                    None => Err(AdapterError::WrongType {
                        identifier: owner.clone(),
                        found: value.type_name(),
                    }),
                }
            }),
            from_payload: Arc::new(move |payload| from_payload(payload).map(Value::extension)),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Converts a value of the adapted type into a JSON-representable payload.
    pub fn to_payload(&self, value: &dyn Extension) -> Result<Value, AdapterError> {
        (self.to_payload)(value)
    }

    /// Rebuilds an extension value from its payload.
    pub fn from_payload(&self, payload: Value) -> Result<Value, AdapterError> {
        (self.from_payload)(payload)
    }
}

impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("identifier", &self.identifier)
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// One input to [`Registry::build`]: a ready-made table or a single entry.
#[derive(Debug, Clone)]
pub enum Source {
    Table(Registry),
    Entry(Adapter),
}

impl From<Registry> for Source {
    fn from(registry: Registry) -> Self {
        Source::Table(registry)
    }
}

impl From<Adapter> for Source {
    fn from(adapter: Adapter) -> Self {
        Source::Entry(adapter)
    }
}

/// Identifier → adapter table, plus the type index used by the encoder.
#[derive(Clone, Default)]
pub struct Registry {
    adapters: IndexMap<String, Adapter>,
    by_type: HashMap<TypeId, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `sources` in order. On identifier collision the later source
    /// wins.
    pub fn build<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Source>,
    {
        let mut registry = Self::new();
        for source in sources {
            match source.into() {
                Source::Table(table) => registry.merge(table),
                Source::Entry(adapter) => {
                    registry.insert(adapter);
                }
            }
        }
        debug!(adapters = registry.len(), "built type registry");
        registry
    }

    /// Registers `adapter`, returning the adapter it replaced, if any.
    ///
    /// A type has at most one identifier. Registering a type again under a
    /// new identifier retires the old identifier, which then no longer
    /// decodes.
    pub fn insert(&mut self, adapter: Adapter) -> Option<Adapter> {
        let identifier = adapter.identifier.clone();
        let type_id = adapter.type_id;
        if let Some(previous) = self.by_type.get(&type_id) {
            if *previous != identifier {
                debug!(retired = %previous, identifier = %identifier, "type re-registered");
                self.adapters.shift_remove(previous);
            }
        }
        // Re-append so that iteration order is write order.
        let replaced = self.adapters.shift_remove(&identifier);
        if let Some(old) = &replaced {
            if old.type_id != type_id {
                self.by_type.remove(&old.type_id);
            }
        }
        self.adapters.insert(identifier.clone(), adapter);
        self.by_type.insert(type_id, identifier);
        replaced
    }

    /// Adds every adapter of `other`, in its order, shadowing on collision.
    pub fn merge(&mut self, other: Registry) {
        for adapter in other.adapters.into_values() {
            self.insert(adapter);
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&Adapter> {
        self.adapters.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.adapters.contains_key(identifier)
    }

    /// Adapter the encoder uses for values whose exact type is `type_id`.
    pub fn for_type_id(&self, type_id: TypeId) -> Option<&Adapter> {
        self.by_type
            .get(&type_id)
            .and_then(|identifier| self.adapters.get(identifier))
    }

    pub fn for_type<T: Any>(&self) -> Option<&Adapter> {
        self.for_type_id(TypeId::of::<T>())
    }

    /// Identifier the encoder writes for `type_id`.
    pub fn identifier_of(&self, type_id: TypeId) -> Option<&str> {
        self.by_type.get(&type_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.adapters.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Adapter> {
        self.adapters.values()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.identifiers()).finish()
    }
}

impl Extend<Adapter> for Registry {
    fn extend<I: IntoIterator<Item = Adapter>>(&mut self, iter: I) {
        for adapter in iter {
            self.insert(adapter);
        }
    }
}

impl FromIterator<Adapter> for Registry {
    fn from_iter<I: IntoIterator<Item = Adapter>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}
