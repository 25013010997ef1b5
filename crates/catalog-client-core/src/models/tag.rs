//! Tag entity attached to catalog products.

use crate::{
    builder_macros::{builder, set_value},
    error::Error,
    serialization::{
        AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
        SerializationWriter,
    },
};

/// Wire names of the fields `Tag` writes itself.
const FIELD_NAMES: &[&str] = &["displayName", "name"];

builder! {
    TagBuilder;

    /// A label used to group catalog products.
    ///
    /// Both attributes are optional and independent of each other; an absent value is not the
    /// same as an empty string. Fields the API document does not describe are kept in
    /// [`additional_data`](Tag::additional_data) and written back out unchanged.
    ///
    /// On the wire a tag looks like:
    ///
    /// ```json
    /// { "displayName": "Widgets", "name": "widgets" }
    /// ```
    #[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
    pub struct Tag {
        /// The human readable label.
        #[serde(rename = "displayName")]
        display_name: Option<String>,

        /// The machine name.
        name: Option<String>,

        /// Fields not described by the API document.
        #[serde(flatten, serialize_with = "serialize_additional_data")]
        additional_data: AdditionalData,
    }
}

impl Tag {
    /// Creates a new `Tag` with no attributes and empty additional data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the machine name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the machine name.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Returns the human readable label.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Sets the human readable label.
    pub fn set_display_name(&mut self, display_name: Option<String>) {
        self.display_name = display_name;
    }

    /// Returns the fields not described by the API document.
    pub fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    /// Returns mutable access to the fields not described by the API document.
    pub fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }

    /// Replaces the additional data wholesale.
    ///
    /// `None` means "no extension map" and leaves the tag with empty additional data.
    pub fn set_additional_data(&mut self, additional_data: Option<AdditionalData>) {
        self.additional_data = additional_data.unwrap_or_default();
    }
}

impl AdditionalDataHolder for Tag {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for Tag {
    /// Tags have no subtypes: the node content, discriminator included, is never inspected.
    fn create_from_discriminator_value(parse_node: Option<&dyn ParseNode>) -> Result<Self, Error> {
        parse_node.ok_or(Error::InvalidArgument("parse_node"))?;
        Ok(Self::new())
    }

    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut deserializers = FieldDeserializers::<Self>::new();
        deserializers.insert("displayName", |tag, node| {
            tag.set_display_name(node.get_string_value()?);
            Ok(())
        });
        deserializers.insert("name", |tag, node| {
            tag.set_name(node.get_string_value()?);
            Ok(())
        });
        deserializers
    }

    fn serialize(&self, writer: Option<&mut dyn SerializationWriter>) -> Result<(), Error> {
        let writer = writer.ok_or(Error::InvalidArgument("writer"))?;
        writer.write_string_value(Some("displayName"), self.display_name())?;
        writer.write_string_value(Some("name"), self.name())?;
        writer.write_additional_data(&self.additional_data, FIELD_NAMES)?;
        Ok(())
    }
}

// Extras shadowing a known field are dropped, matching `Parsable::serialize`.
fn serialize_additional_data<S>(
    additional_data: &AdditionalData,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_map(
        additional_data
            .iter()
            .filter(|(key, _)| !FIELD_NAMES.contains(&key.as_str())),
    )
}

impl TagBuilder {
    /// Sets the human readable label.
    pub fn display_name<S: Into<String>>(mut self, display_name: Option<S>) -> Self {
        set_value!(self display_name display_name.map(|display_name| display_name.into()))
    }

    /// Sets the machine name.
    pub fn name<S: Into<String>>(mut self, name: Option<S>) -> Self {
        set_value!(self name name.map(|name| name.into()))
    }

    /// Sets the additional data. `None` leaves it empty.
    pub fn additional_data(mut self, additional_data: Option<AdditionalData>) -> Self {
        set_value!(self additional_data additional_data.unwrap_or_default())
    }

    /// Adds one field not described by the API document.
    ///
    /// A key equal to a known wire name (`name`, `displayName`) is kept but never written back out.
    pub fn additional_field<K: Into<String>>(mut self, key: K, value: serde_json::Value) -> Self {
        self.additional_data.insert(key.into(), value);
        self
    }
}
