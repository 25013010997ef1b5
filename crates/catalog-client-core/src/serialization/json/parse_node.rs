//! JSON parse node backed by `serde_json`.

use serde_json::Value;

use crate::{error::DeserializationError, serialization::ParseNode};

/// A position in a JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonParseNode {
    value: Value,
}

impl JsonParseNode {
    /// Creates a node over an already parsed value.
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Parses a JSON document and returns its root node.
    pub fn from_slice(content: &[u8]) -> Result<Self, DeserializationError> {
        Ok(Self::new(serde_json::from_slice(content)?))
    }

    /// The value at this position.
    pub fn value(&self) -> &Value {
        &self.value
    }

    fn child(value: &Value) -> Box<dyn ParseNode> {
        Box::new(Self::new(value.clone()))
    }

    fn mismatch(&self, expected: &'static str) -> DeserializationError {
        DeserializationError::TypeMismatch {
            expected,
            found: kind_of(&self.value),
        }
    }
}

impl ParseNode for JsonParseNode {
    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn get_string_value(&self) -> Result<Option<String>, DeserializationError> {
        match &self.value {
            Value::Null => Ok(None),
            Value::String(value) => Ok(Some(value.clone())),
            _ => Err(self.mismatch("string")),
        }
    }

    fn get_bool_value(&self) -> Result<Option<bool>, DeserializationError> {
        match &self.value {
            Value::Null => Ok(None),
            Value::Bool(value) => Ok(Some(*value)),
            _ => Err(self.mismatch("boolean")),
        }
    }

    fn get_i64_value(&self) -> Result<Option<i64>, DeserializationError> {
        match &self.value {
            Value::Null => Ok(None),
            Value::Number(number) => number
                .as_i64()
                .map(Some)
                .ok_or_else(|| DeserializationError::NumberOutOfRange(number.to_string())),
            _ => Err(self.mismatch("number")),
        }
    }

    fn get_f64_value(&self) -> Result<Option<f64>, DeserializationError> {
        match &self.value {
            Value::Null => Ok(None),
            Value::Number(number) => number
                .as_f64()
                .map(Some)
                .ok_or_else(|| DeserializationError::NumberOutOfRange(number.to_string())),
            _ => Err(self.mismatch("number")),
        }
    }

    fn get_child_node(
        &self,
        identifier: &str,
    ) -> Result<Option<Box<dyn ParseNode>>, DeserializationError> {
        match &self.value {
            Value::Object(members) => Ok(members.get(identifier).map(Self::child)),
            _ => Err(self.mismatch("object")),
        }
    }

    fn get_field_nodes(&self) -> Result<Vec<(String, Box<dyn ParseNode>)>, DeserializationError> {
        match &self.value {
            Value::Object(members) => Ok(members
                .iter()
                .map(|(name, value)| (name.clone(), Self::child(value)))
                .collect()),
            _ => Err(self.mismatch("object")),
        }
    }

    fn get_collection_nodes(&self) -> Result<Vec<Box<dyn ParseNode>>, DeserializationError> {
        match &self.value {
            Value::Array(elements) => Ok(elements.iter().map(Self::child).collect()),
            _ => Err(self.mismatch("array")),
        }
    }

    fn get_untyped_value(&self) -> Result<Value, DeserializationError> {
        Ok(self.value.clone())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
