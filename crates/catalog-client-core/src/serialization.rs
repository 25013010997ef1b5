//! Serialization abstractions shared by every generated model.
//!
//! Models never touch a wire format directly. They read their fields out of a [`ParseNode`]
//! and write them into a [`SerializationWriter`]; the concrete format (JSON, see [`json`]) is
//! picked at runtime through the [`SerializationRegistry`].

pub mod additional_data;
pub mod driver;
pub mod json;
pub mod registry;

pub use self::{
    additional_data::{AdditionalData, AdditionalDataHolder},
    driver::{
        get_collection_of_object_values, get_object_value, write_collection_of_object_values,
        write_object_value,
    },
    registry::{ParseNodeFactory, SerializationRegistry, SerializationWriterFactory},
};
use crate::{
    error::{DeserializationError, Error, SerializationError},
    map::Map,
};

/// A single position in a structured input document.
///
/// Typed accessors return `Ok(None)` when the position holds an explicit null, and fail with
/// [`DeserializationError::TypeMismatch`] when it holds a value of another kind.
pub trait ParseNode {
    /// Whether this position holds an explicit null.
    fn is_null(&self) -> bool;

    /// Reads this position as text.
    fn get_string_value(&self) -> Result<Option<String>, DeserializationError>;

    /// Reads this position as a boolean.
    fn get_bool_value(&self) -> Result<Option<bool>, DeserializationError>;

    /// Reads this position as a signed 64-bit integer.
    fn get_i64_value(&self) -> Result<Option<i64>, DeserializationError>;

    /// Reads this position as a double-precision number.
    fn get_f64_value(&self) -> Result<Option<f64>, DeserializationError>;

    /// Returns the node for the named member of an object, if present.
    fn get_child_node(
        &self,
        identifier: &str,
    ) -> Result<Option<Box<dyn ParseNode>>, DeserializationError>;

    /// Returns every member of an object.
    ///
    /// Members come back in document order only when the node's backing map preserves it; the
    /// JSON node does so with the `preserve_order` feature and sorts by name otherwise.
    fn get_field_nodes(&self) -> Result<Vec<(String, Box<dyn ParseNode>)>, DeserializationError>;

    /// Returns every element of a collection, in document order.
    fn get_collection_nodes(&self) -> Result<Vec<Box<dyn ParseNode>>, DeserializationError>;

    /// Reads this position as an untyped value, whatever its kind.
    fn get_untyped_value(&self) -> Result<serde_json::Value, DeserializationError>;
}

/// A structured output document under construction.
///
/// Every write takes an optional field name: values written inside an object need one, values
/// written inside a collection (or as the document root) must not have one.
pub trait SerializationWriter {
    /// Writes a text value. `None` is handed to [`write_absent_value`](Self::write_absent_value).
    fn write_string_value(
        &mut self,
        key: Option<&str>,
        value: Option<&str>,
    ) -> Result<(), SerializationError>;

    /// Writes a boolean value.
    fn write_bool_value(
        &mut self,
        key: Option<&str>,
        value: Option<bool>,
    ) -> Result<(), SerializationError>;

    /// Writes a signed 64-bit integer.
    fn write_i64_value(
        &mut self,
        key: Option<&str>,
        value: Option<i64>,
    ) -> Result<(), SerializationError>;

    /// Writes a double-precision number.
    fn write_f64_value(
        &mut self,
        key: Option<&str>,
        value: Option<f64>,
    ) -> Result<(), SerializationError>;

    /// Writes an explicit null, regardless of how absent values are handled.
    fn write_null_value(&mut self, key: Option<&str>) -> Result<(), SerializationError>;

    /// Writes the marker for an absent optional value.
    ///
    /// Whether this is an explicit null or nothing at all is up to the writer.
    fn write_absent_value(&mut self, key: Option<&str>) -> Result<(), SerializationError>;

    /// Writes an untyped value verbatim.
    fn write_untyped_value(
        &mut self,
        key: Option<&str>,
        value: &serde_json::Value,
    ) -> Result<(), SerializationError>;

    /// Opens an object. Must be balanced by [`end_object`](Self::end_object).
    fn start_object(&mut self, key: Option<&str>) -> Result<(), SerializationError>;

    /// Closes the innermost open object.
    fn end_object(&mut self) -> Result<(), SerializationError>;

    /// Opens a collection. Must be balanced by [`end_collection`](Self::end_collection).
    fn start_collection(&mut self, key: Option<&str>) -> Result<(), SerializationError>;

    /// Closes the innermost open collection.
    fn end_collection(&mut self) -> Result<(), SerializationError>;

    /// Writes every additional data entry as a trailing field of the current object.
    ///
    /// Entries named in `field_names` are skipped: the model has already written those fields and
    /// a second copy of a key would shadow the first when read back.
    fn write_additional_data(
        &mut self,
        additional_data: &AdditionalData,
        field_names: &[&str],
    ) -> Result<(), SerializationError> {
        for (key, value) in additional_data {
            if field_names.contains(&key.as_str()) {
                continue;
            }
            self.write_untyped_value(Some(key.as_str()), value)?;
        }
        Ok(())
    }

    /// Returns the serialized document and resets the writer.
    fn get_serialized_content(&mut self) -> Result<Vec<u8>, SerializationError>;
}

/// Handler assigning one known field of `T` from a parse node.
pub type FieldDeserializer<T> = fn(&mut T, &dyn ParseNode) -> Result<(), Error>;

/// Table of known fields of `T`, keyed by their exact wire name.
pub type FieldDeserializers<T> = Map<&'static str, FieldDeserializer<T>>;

/// A model that takes part in the uniform (de)serialization protocol.
pub trait Parsable: Sized {
    /// Creates the concrete model for the given node.
    ///
    /// Models with subtypes inspect a discriminator field here; leaf models ignore the node.
    /// Fails with [`Error::InvalidArgument`] when no node is supplied.
    fn create_from_discriminator_value(parse_node: Option<&dyn ParseNode>) -> Result<Self, Error>;

    /// The handlers for every field the model knows about.
    fn field_deserializers() -> FieldDeserializers<Self>;

    /// Writes the model's fields into `writer`, in the model's fixed field order.
    ///
    /// Fails with [`Error::InvalidArgument`] when no writer is supplied.
    fn serialize(&self, writer: Option<&mut dyn SerializationWriter>) -> Result<(), Error>;
}
