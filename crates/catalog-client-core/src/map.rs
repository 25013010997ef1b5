//! Ordered map used for additional data and field deserializer tables.
//!
//! By default this is a `BTreeMap`, so unknown fields are written back sorted by name. With the
//! `preserve_order` feature it becomes an `IndexMap`, and unknown fields are written back in the
//! order they were read.

cfg_if::cfg_if! {
    if #[cfg(feature = "preserve_order")] {
        pub use indexmap::IndexMap as Map;
    } else {
        pub use std::collections::BTreeMap as Map;
    }
}
