//! # catalog-client-core
//!
//! Core models and serialization traits for the catalog API client.
//!
//! Models are plain data. They read themselves from a [`ParseNode`] and write themselves into a
//! [`SerializationWriter`], keeping any field they do not recognise as additional data so that
//! newer server payloads survive a round trip through an older client.

mod builder_macros;
pub mod error;
pub mod map;
pub mod models;
pub mod serialization;

// Re-export main types at the crate root for convenience
pub use self::{
    error::{DeserializationError, Error, Result, SerializationError},
    map::Map,
    models::{Tag, TagBuilder},
    serialization::{
        AdditionalData, AdditionalDataHolder, FieldDeserializer, FieldDeserializers, Parsable,
        ParseNode, ParseNodeFactory, SerializationRegistry, SerializationWriter,
        SerializationWriterFactory,
    },
};
