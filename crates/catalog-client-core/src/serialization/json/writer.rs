//! Streaming JSON serialization writer.
//!
//! Values are appended to the output in exactly the order they are written, so a model's fixed
//! field order is reproduced byte for byte.

use serde_json::Value;

use crate::{error::SerializationError, serialization::SerializationWriter};

/// How absent optional values are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AbsentValues {
    /// Write an explicit `null` (`"name":null`).
    #[default]
    Null,
    /// Leave the field out entirely.
    Omit,
}

/// Options for [`JsonSerializationWriter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonWriterOptions {
    /// Rendering of absent optional values.
    pub absent_values: AbsentValues,
}

impl JsonWriterOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how absent optional values are rendered.
    pub fn absent_values(mut self, absent_values: AbsentValues) -> Self {
        self.absent_values = absent_values;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
    Object,
    Collection,
}

#[derive(Debug)]
struct Scope {
    kind: ScopeKind,
    has_entries: bool,
    // Opened by a keyed write at the root, closed by `get_serialized_content`.
    implicit: bool,
}

/// Writes models as JSON text.
///
/// Keyed writes issued at the document root open an implicit object, so serializing a model
/// straight into a fresh writer yields a complete JSON object.
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    options: JsonWriterOptions,
    buffer: Vec<u8>,
    scopes: Vec<Scope>,
    root_written: bool,
}

impl JsonSerializationWriter {
    /// Creates a writer with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with the given options.
    pub fn with_options(options: JsonWriterOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The options this writer was created with.
    pub fn options(&self) -> &JsonWriterOptions {
        &self.options
    }

    fn write_prefix(&mut self, key: Option<&str>) -> Result<(), SerializationError> {
        if self.scopes.is_empty() {
            if key.is_none() {
                if self.root_written {
                    return Err(SerializationError::MultipleRootValues);
                }
                self.root_written = true;
                return Ok(());
            }
            self.open_implicit_root()?;
        }

        let Some(scope) = self.scopes.last_mut() else {
            return Ok(());
        };
        match (scope.kind, key) {
            (ScopeKind::Object, None) => return Err(SerializationError::MissingKey),
            (ScopeKind::Collection, Some(key)) => {
                return Err(SerializationError::UnexpectedKey(key.to_string()));
            }
            _ => {}
        }
        if scope.has_entries {
            self.buffer.push(b',');
        }
        scope.has_entries = true;

        if let Some(key) = key {
            serde_json::to_writer(&mut self.buffer, key)?;
            self.buffer.push(b':');
        }
        Ok(())
    }

    fn open_implicit_root(&mut self) -> Result<(), SerializationError> {
        if self.root_written {
            return Err(SerializationError::MultipleRootValues);
        }
        self.root_written = true;
        self.buffer.push(b'{');
        self.scopes.push(Scope {
            kind: ScopeKind::Object,
            has_entries: false,
            implicit: true,
        });
        Ok(())
    }

    fn write_raw(&mut self, key: Option<&str>, raw: &[u8]) -> Result<(), SerializationError> {
        self.write_prefix(key)?;
        self.buffer.extend_from_slice(raw);
        Ok(())
    }

    fn close(&mut self, kind: ScopeKind) -> Result<(), SerializationError> {
        match self.scopes.last() {
            Some(scope) if scope.kind == kind && !scope.implicit => {
                self.scopes.pop();
                self.buffer.push(match kind {
                    ScopeKind::Object => b'}',
                    ScopeKind::Collection => b']',
                });
                Ok(())
            }
            _ => Err(SerializationError::UnbalancedContainer),
        }
    }

    fn open(&mut self, key: Option<&str>, kind: ScopeKind) -> Result<(), SerializationError> {
        self.write_prefix(key)?;
        self.buffer.push(match kind {
            ScopeKind::Object => b'{',
            ScopeKind::Collection => b'[',
        });
        self.scopes.push(Scope {
            kind,
            has_entries: false,
            implicit: false,
        });
        Ok(())
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(
        &mut self,
        key: Option<&str>,
        value: Option<&str>,
    ) -> Result<(), SerializationError> {
        let Some(value) = value else {
            return self.write_absent_value(key);
        };
        self.write_prefix(key)?;
        serde_json::to_writer(&mut self.buffer, value)?;
        Ok(())
    }

    fn write_bool_value(
        &mut self,
        key: Option<&str>,
        value: Option<bool>,
    ) -> Result<(), SerializationError> {
        match value {
            Some(true) => self.write_raw(key, b"true"),
            Some(false) => self.write_raw(key, b"false"),
            None => self.write_absent_value(key),
        }
    }

    fn write_i64_value(
        &mut self,
        key: Option<&str>,
        value: Option<i64>,
    ) -> Result<(), SerializationError> {
        match value {
            Some(value) => self.write_raw(key, value.to_string().as_bytes()),
            None => self.write_absent_value(key),
        }
    }

    fn write_f64_value(
        &mut self,
        key: Option<&str>,
        value: Option<f64>,
    ) -> Result<(), SerializationError> {
        let Some(value) = value else {
            return self.write_absent_value(key);
        };
        if !value.is_finite() {
            return Err(SerializationError::NonFiniteNumber(value));
        }
        self.write_prefix(key)?;
        serde_json::to_writer(&mut self.buffer, &value)?;
        Ok(())
    }

    fn write_null_value(&mut self, key: Option<&str>) -> Result<(), SerializationError> {
        self.write_raw(key, b"null")
    }

    fn write_absent_value(&mut self, key: Option<&str>) -> Result<(), SerializationError> {
        match self.options.absent_values {
            AbsentValues::Null => self.write_null_value(key),
            // A keyed write at the root still opens the implicit object, so an all-absent model
            // comes out as `{}`.
            AbsentValues::Omit if key.is_some() && self.scopes.is_empty() => {
                self.open_implicit_root()
            }
            AbsentValues::Omit => Ok(()),
        }
    }

    fn write_untyped_value(
        &mut self,
        key: Option<&str>,
        value: &Value,
    ) -> Result<(), SerializationError> {
        self.write_prefix(key)?;
        serde_json::to_writer(&mut self.buffer, value)?;
        Ok(())
    }

    fn start_object(&mut self, key: Option<&str>) -> Result<(), SerializationError> {
        self.open(key, ScopeKind::Object)
    }

    fn end_object(&mut self) -> Result<(), SerializationError> {
        self.close(ScopeKind::Object)
    }

    fn start_collection(&mut self, key: Option<&str>) -> Result<(), SerializationError> {
        self.open(key, ScopeKind::Collection)
    }

    fn end_collection(&mut self) -> Result<(), SerializationError> {
        self.close(ScopeKind::Collection)
    }

    fn get_serialized_content(&mut self) -> Result<Vec<u8>, SerializationError> {
        match self.scopes.as_slice() {
            [] => {}
            [scope] if scope.implicit => self.buffer.push(b'}'),
            scopes => return Err(SerializationError::UnclosedContainers(scopes.len())),
        }

        let content = std::mem::take(&mut self.buffer);
        self.scopes.clear();
        self.root_written = false;
        Ok(content)
    }
}
