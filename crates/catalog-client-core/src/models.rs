//! Models of the catalog API.
//!
//! Every model implements [`Parsable`](crate::serialization::Parsable) and
//! [`AdditionalDataHolder`](crate::serialization::AdditionalDataHolder), so the generic driver in
//! [`serialization`](crate::serialization) can read and write it through any registered format.

pub mod tag;

pub use self::tag::{Tag, TagBuilder};
