//! Generic (de)serialization driver.
//!
//! These functions walk any [`Parsable`] model through a [`ParseNode`] or a
//! [`SerializationWriter`]. Known fields are dispatched to the model's field deserializers,
//! everything else lands in its additional data.

use super::{AdditionalDataHolder, Parsable, ParseNode, SerializationWriter};
use crate::error::Error;

/// Reads an object node into a model.
///
/// Returns `Ok(None)` for a null node. Members are visited in the order the node reports them
/// (see [`ParseNode::get_field_nodes`]); members without a registered handler are stored in the
/// model's additional data, explicit nulls included.
pub fn get_object_value<T>(node: &dyn ParseNode) -> Result<Option<T>, Error>
where
    T: Parsable + AdditionalDataHolder,
{
    if node.is_null() {
        return Ok(None);
    }

    let fields = node.get_field_nodes()?;
    let mut model = T::create_from_discriminator_value(Some(node))?;
    let deserializers = T::field_deserializers();

    for (name, field) in fields {
        match deserializers.get(name.as_str()) {
            Some(deserialize) => deserialize(&mut model, &*field)?,
            None => {
                log::trace!("storing unknown field `{name}` as additional data");
                let value = field.get_untyped_value()?;
                model.additional_data_mut().insert(name, value);
            }
        }
    }

    Ok(Some(model))
}

/// Reads a collection node into a list of models.
///
/// Returns `Ok(None)` for a null node. Null elements are skipped.
pub fn get_collection_of_object_values<T>(node: &dyn ParseNode) -> Result<Option<Vec<T>>, Error>
where
    T: Parsable + AdditionalDataHolder,
{
    if node.is_null() {
        return Ok(None);
    }

    let mut models = Vec::new();
    for element in node.get_collection_nodes()? {
        if let Some(model) = get_object_value(&*element)? {
            models.push(model);
        }
    }
    Ok(Some(models))
}

/// Writes a model as an object.
///
/// An absent model is handed to the writer's absent-value handling.
pub fn write_object_value<T: Parsable>(
    writer: &mut dyn SerializationWriter,
    key: Option<&str>,
    value: Option<&T>,
) -> Result<(), Error> {
    let Some(value) = value else {
        writer.write_absent_value(key)?;
        return Ok(());
    };

    writer.start_object(key)?;
    value.serialize(Some(&mut *writer))?;
    writer.end_object()?;
    Ok(())
}

/// Writes a list of models as a collection of objects.
pub fn write_collection_of_object_values<T: Parsable>(
    writer: &mut dyn SerializationWriter,
    key: Option<&str>,
    values: Option<&[T]>,
) -> Result<(), Error> {
    let Some(values) = values else {
        writer.write_absent_value(key)?;
        return Ok(());
    };

    writer.start_collection(key)?;
    for value in values {
        write_object_value(writer, None, Some(value))?;
    }
    writer.end_collection()?;
    Ok(())
}
