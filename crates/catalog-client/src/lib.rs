//! # catalog-client
//!
//! Generated models for the catalog API client.
//!
//! This crate provides the public API of the client models, re-exporting the models, the
//! serialization traits and the JSON implementation from the `catalog-client-core` crate.

// Re-export the modules for access to builders and format-specific types
pub use catalog_client_core::{models, serialization};
// Re-export all main types at the crate root for convenience
pub use catalog_client_core::{
    AdditionalData, AdditionalDataHolder, DeserializationError, Error, FieldDeserializer,
    FieldDeserializers, Map, Parsable, ParseNode, ParseNodeFactory, Result, SerializationError,
    SerializationRegistry, SerializationWriter, SerializationWriterFactory, Tag, TagBuilder,
};
