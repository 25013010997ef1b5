//! Content-type keyed registry of parse node and writer factories.

use std::fmt;

use super::{
    AdditionalDataHolder, Parsable, ParseNode, SerializationWriter, get_object_value,
    json::{JsonParseNodeFactory, JsonSerializationWriterFactory},
    write_object_value,
};
use crate::{
    error::{DeserializationError, Error},
    map::Map,
};

/// Creates root parse nodes for one content type.
pub trait ParseNodeFactory {
    /// The content type this factory understands, lowercase and without parameters.
    fn valid_content_type(&self) -> &'static str;

    /// Parses `content` and returns its root node.
    fn get_root_parse_node(
        &self,
        content: &[u8],
    ) -> Result<Box<dyn ParseNode>, DeserializationError>;
}

/// Creates serialization writers for one content type.
pub trait SerializationWriterFactory {
    /// The content type this factory produces, lowercase and without parameters.
    fn valid_content_type(&self) -> &'static str;

    /// Returns a fresh writer.
    fn get_serialization_writer(&self) -> Box<dyn SerializationWriter>;
}

/// Picks the parse node and writer factory for a content type.
///
/// Content types are matched ignoring ASCII case and media type parameters, so
/// `application/json; charset=utf-8` resolves to the `application/json` factories.
pub struct SerializationRegistry {
    parse_node_factories: Map<String, Box<dyn ParseNodeFactory>>,
    writer_factories: Map<String, Box<dyn SerializationWriterFactory>>,
}

impl SerializationRegistry {
    /// Creates a registry with the JSON factories registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_parse_node_factory(JsonParseNodeFactory);
        registry.register_serialization_writer_factory(JsonSerializationWriterFactory::default());
        registry
    }

    /// Creates a registry without any factories.
    pub fn empty() -> Self {
        Self {
            parse_node_factories: Map::new(),
            writer_factories: Map::new(),
        }
    }

    /// Registers a parse node factory, replacing any previous one for its content type.
    pub fn register_parse_node_factory(&mut self, factory: impl ParseNodeFactory + 'static) {
        let content_type = factory.valid_content_type().to_string();
        log::debug!("registering parse node factory for `{content_type}`");
        self.parse_node_factories
            .insert(content_type, Box::new(factory));
    }

    /// Registers a writer factory, replacing any previous one for its content type.
    pub fn register_serialization_writer_factory(
        &mut self,
        factory: impl SerializationWriterFactory + 'static,
    ) {
        let content_type = factory.valid_content_type().to_string();
        log::debug!("registering serialization writer factory for `{content_type}`");
        self.writer_factories.insert(content_type, Box::new(factory));
    }

    /// Parses `content` with the factory registered for `content_type`.
    pub fn get_root_parse_node(
        &self,
        content_type: &str,
        content: &[u8],
    ) -> Result<Box<dyn ParseNode>, Error> {
        let factory = self
            .parse_node_factories
            .get(&media_type(content_type))
            .ok_or_else(|| unsupported(content_type))?;
        Ok(factory.get_root_parse_node(content)?)
    }

    /// Returns a fresh writer from the factory registered for `content_type`.
    pub fn get_serialization_writer(
        &self,
        content_type: &str,
    ) -> Result<Box<dyn SerializationWriter>, Error> {
        let factory = self
            .writer_factories
            .get(&media_type(content_type))
            .ok_or_else(|| unsupported(content_type))?;
        Ok(factory.get_serialization_writer())
    }

    /// Deserializes a model from a payload of the given content type.
    ///
    /// Returns `Ok(None)` when the payload is a null document.
    pub fn deserialize<T>(&self, content_type: &str, content: &[u8]) -> Result<Option<T>, Error>
    where
        T: Parsable + AdditionalDataHolder,
    {
        let node = self.get_root_parse_node(content_type, content)?;
        get_object_value(&*node)
    }

    /// Serializes a model into a payload of the given content type.
    pub fn serialize<T: Parsable>(&self, content_type: &str, value: &T) -> Result<Vec<u8>, Error> {
        let mut writer = self.get_serialization_writer(content_type)?;
        write_object_value(&mut *writer, None, Some(value))?;
        Ok(writer.get_serialized_content()?)
    }
}

impl Default for SerializationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SerializationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializationRegistry")
            .field(
                "parse_node_factories",
                &self.parse_node_factories.keys().collect::<Vec<_>>(),
            )
            .field(
                "writer_factories",
                &self.writer_factories.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Lowercases a content type and strips its parameters.
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn unsupported(content_type: &str) -> Error {
    log::debug!("no factory registered for content type `{content_type}`");
    Error::UnsupportedContentType(content_type.to_string())
}
