//! Builder macros for generated models.
//!
//! Every model gets a companion builder so call sites can assemble a value in one expression
//! while the model itself keeps its fields private behind accessors.

/// Assigns a builder field and returns the builder, for chained setters.
macro_rules! set_value {
    ( $self:ident $field:ident $value:expr ) => {{
        $self.$field = $value;
        $self
    }};
}

pub(crate) use set_value;

/// Declares a model together with its builder.
///
/// Expands to:
/// 1. The model struct, with all its attributes and field attributes
/// 2. A builder struct holding the same fields, deriving `Debug` and `Default`
/// 3. `Model::builder()` and `Builder::new()`, both starting from the builder's default
/// 4. `Builder::build()` moving every field into the model
/// 5. `From` conversions in both directions
///
/// Field attributes (doc comments, `serde` renames) apply to the model only. Setters are written
/// by hand next to the model, using [`set_value!`].
///
/// # Example
///
/// ```ignore
/// builder! {
///     TagBuilder;
///
///     #[derive(Debug, Clone, Default)]
///     pub struct Tag {
///         display_name: Option<String>,
///         name: Option<String>,
///     }
/// }
/// ```
macro_rules! builder {
    (
        $builder:ident;
        $( #[$meta:meta] )*
        $vis:vis struct $model:ident {
            $( $( #[$field_meta:meta] )* $field:ident: $field_ty:ty, )*
        }
    ) => {
        $( #[$meta] )*
        $vis struct $model {
            $( $( #[$field_meta] )* $field: $field_ty, )*
        }

        #[doc = concat!("Builder for [`", stringify!($model), "`].")]
        #[derive(Debug, Default)]
        $vis struct $builder {
            $( $field: $field_ty, )*
        }

        impl $model {
            #[doc = concat!("Starts a new [`", stringify!($builder), "`].")]
            $vis fn builder() -> $builder {
                $builder::new()
            }
        }

        impl $builder {
            #[doc = concat!("Creates a builder producing an empty [`", stringify!($model), "`].")]
            $vis fn new() -> Self {
                Self::default()
            }

            #[doc = concat!("Constructs the [`", stringify!($model), "`] from the values set so far.")]
            $vis fn build(self) -> $model {
                $model { $( $field: self.$field, )* }
            }
        }

        impl From<$builder> for $model {
            fn from(builder: $builder) -> Self {
                builder.build()
            }
        }

        impl From<$model> for $builder {
            fn from(model: $model) -> Self {
                Self { $( $field: model.$field, )* }
            }
        }
    };
}

pub(crate) use builder;
