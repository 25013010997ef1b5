//! Error types for model (de)serialization.

/// A specialized [`Result`](std::result::Result) type for catalog client operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by models and the serialization driver.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required collaborator (parse node, writer) was not supplied.
    #[error("invalid argument: `{0}` must be provided")]
    InvalidArgument(&'static str),

    /// A value could not be read from a parse node.
    #[error(transparent)]
    Deserialization(#[from] DeserializationError),

    /// A value could not be written to a serialization writer.
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// No factory is registered for the requested content type.
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
}

/// Failure reading a value out of a parse node.
#[derive(Debug, thiserror::Error)]
pub enum DeserializationError {
    /// The payload is not a well-formed document.
    #[error("malformed document: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The node holds a value of a different kind than the one requested.
    #[error("expected {expected} value, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The node holds a number that does not fit the requested numeric type.
    #[error("number {0} is out of range for the requested type")]
    NumberOutOfRange(String),
}

/// Failure writing a value into a serialization writer.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// A value was written inside an object without a field name.
    #[error("a field name is required for values written inside an object")]
    MissingKey,

    /// A field name was supplied for a value written inside a collection.
    #[error("field name `{0}` is not allowed inside a collection")]
    UnexpectedKey(String),

    /// A container was closed that is not the innermost open one.
    #[error("closed a container that was not open")]
    UnbalancedContainer,

    /// Content was requested while containers are still open.
    #[error("{0} container(s) still open")]
    UnclosedContainers(usize),

    /// More than one top-level value was written.
    #[error("a document holds a single root value")]
    MultipleRootValues,

    /// NaN and infinities have no representation on the wire.
    #[error("non-finite number {0} cannot be written")]
    NonFiniteNumber(f64),

    /// The underlying encoder failed.
    #[error("encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
