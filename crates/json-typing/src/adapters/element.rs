use crate::error::AdapterError;
use crate::value::Value;

/// A container member that converts to and from a single [`Value`].
///
/// Used by the generic set and deque adapters.
pub trait Element: Sized {
    fn to_value(&self) -> Value;
    fn from_value(value: Value) -> Result<Self, AdapterError>;
}

impl Element for i64 {
    fn to_value(&self) -> Value {
        Value::from(*self)
    }

    fn from_value(value: Value) -> Result<Self, AdapterError> {
        super::expect_i64(&value)
    }
}

impl Element for u64 {
    fn to_value(&self) -> Value {
        Value::from(*self)
    }

    fn from_value(value: Value) -> Result<Self, AdapterError> {
        value.as_u64().ok_or(AdapterError::UnexpectedPayload {
            expected: "unsigned integer",
            found: value.kind(),
        })
    }
}

impl Element for f64 {
    fn to_value(&self) -> Value {
        Value::from(*self)
    }

    fn from_value(value: Value) -> Result<Self, AdapterError> {
        value.as_f64().ok_or(AdapterError::UnexpectedPayload {
            expected: "number",
            found: value.kind(),
        })
    }
}

impl Element for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Result<Self, AdapterError> {
        value.as_bool().ok_or(AdapterError::UnexpectedPayload {
            expected: "boolean",
            found: value.kind(),
        })
    }
}

impl Element for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, AdapterError> {
        super::expect_string(value)
    }
}

impl Element for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: Value) -> Result<Self, AdapterError> {
        Ok(value)
    }
}
