//! JSON implementation of the serialization abstractions.

pub mod parse_node;
pub mod writer;

pub use self::{
    parse_node::JsonParseNode,
    writer::{AbsentValues, JsonSerializationWriter, JsonWriterOptions},
};
use super::{
    AdditionalDataHolder, Parsable, ParseNode, ParseNodeFactory, SerializationWriter,
    SerializationWriterFactory, get_object_value, write_object_value,
};
use crate::error::{DeserializationError, Error};

/// The content type handled by this module.
pub const CONTENT_TYPE: &str = "application/json";

/// Deserializes a model from a JSON document.
///
/// Returns `Ok(None)` when the document is the literal `null`.
pub fn from_slice<T>(content: &[u8]) -> Result<Option<T>, Error>
where
    T: Parsable + AdditionalDataHolder,
{
    let node = JsonParseNode::from_slice(content)?;
    get_object_value(&node)
}

/// Serializes a model into a JSON document using the default writer options.
pub fn to_vec<T: Parsable>(value: &T) -> Result<Vec<u8>, Error> {
    let mut writer = JsonSerializationWriter::new();
    write_object_value(&mut writer, None, Some(value))?;
    Ok(writer.get_serialized_content()?)
}

/// Creates [`JsonParseNode`]s for `application/json` payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParseNodeFactory;

impl ParseNodeFactory for JsonParseNodeFactory {
    fn valid_content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    fn get_root_parse_node(
        &self,
        content: &[u8],
    ) -> Result<Box<dyn ParseNode>, DeserializationError> {
        Ok(Box::new(JsonParseNode::from_slice(content)?))
    }
}

/// Creates [`JsonSerializationWriter`]s for `application/json` payloads.
#[derive(Debug, Clone, Default)]
pub struct JsonSerializationWriterFactory {
    options: JsonWriterOptions,
}

impl JsonSerializationWriterFactory {
    /// Creates a factory whose writers use the given options.
    pub fn with_options(options: JsonWriterOptions) -> Self {
        Self { options }
    }
}

impl SerializationWriterFactory for JsonSerializationWriterFactory {
    fn valid_content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    fn get_serialization_writer(&self) -> Box<dyn SerializationWriter> {
        Box::new(JsonSerializationWriter::with_options(self.options.clone()))
    }
}
