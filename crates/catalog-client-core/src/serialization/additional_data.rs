//! Passthrough storage for fields a model does not describe.
//!
//! The API document evolves independently from generated clients. Fields a model does not know
//! about are kept here verbatim so that a deserialize-then-serialize cycle loses nothing.

use crate::map::Map;

/// Unknown fields, keyed by wire name, holding any JSON value.
pub type AdditionalData = Map<String, serde_json::Value>;

/// A model that stores unknown fields.
///
/// The deserialization driver routes every field without a registered handler into
/// [`additional_data_mut`](Self::additional_data_mut).
pub trait AdditionalDataHolder {
    /// The unknown fields collected so far.
    fn additional_data(&self) -> &AdditionalData;

    /// Mutable access to the unknown fields.
    fn additional_data_mut(&mut self) -> &mut AdditionalData;
}
