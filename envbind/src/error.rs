//! Error types for binding and value conversion

/// Errors that can occur when binding a struct to a lookup source.
///
/// This error type covers three failure scenarios:
/// - The bind target is not a struct
/// - A field type (at any depth) is outside the supported set
/// - A present, non-empty value cannot be converted to its field type
///
/// Absent and empty keys never produce an error.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The value handed to [`bind_with`](crate::bind_with) is not a record.
    ///
    /// Raised before any field is examined.
    #[error("bind target is not a struct: {type_name}")]
    NotAStruct {
        /// Fully qualified name of the rejected target type
        type_name: String,
    },

    /// A reachable field has a type that cannot be bound.
    ///
    /// Raised for maps, sequences of records, nested sequences and doubly
    /// wrapped options, whether or not the field's key is present.
    #[error("unsupported type: {type_name}")]
    UnsupportedType {
        /// Fully qualified name of the offending type
        type_name: String,
    },

    /// A present value could not be converted into the field's type.
    ///
    /// Fields assigned before the failure keep their new values.
    #[error("Invalid value '{value}' for '{name}' as {type_name}: {message}")]
    InvalidValue {
        /// Key the value was looked up under
        name: String,
        /// The raw value (or sequence element) that failed to convert
        value: String,
        /// Fully qualified type name that conversion was attempted for
        type_name: String,
        /// Error message from the converter
        message: String,
    },
}

impl BindError {
    /// Create an invalid value error (used by macro-generated code)
    #[doc(hidden)]
    pub fn invalid_value<T>(
        name: impl Into<String>,
        value: impl Into<String>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidValue {
            name: name.into(),
            value: value.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    /// Create an unsupported type error naming `T`
    pub fn unsupported<T: ?Sized>() -> Self {
        Self::UnsupportedType {
            type_name: std::any::type_name::<T>().to_string(),
        }
    }

    /// Create a not-a-struct error naming `T`
    pub fn not_a_struct<T: ?Sized>() -> Self {
        Self::NotAStruct {
            type_name: std::any::type_name::<T>().to_string(),
        }
    }
}

/// Conversion failures of the built-in scalar rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// Not one of the accepted boolean tokens
    #[error("invalid boolean")]
    Bool,

    /// Neither a base-10 integer nor a float that truncates into range
    #[error("invalid integer")]
    Int,

    /// Not a base-10 floating point number
    #[error("invalid float")]
    Float,

    /// Not a valid duration string
    #[error("invalid duration: {0}")]
    Duration(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_contains_type_info() {
        let err = BindError::invalid_value::<u32>("PORT", "abc", ValueError::Int);
        match &err {
            BindError::InvalidValue {
                name,
                value,
                type_name,
                ..
            } => {
                assert_eq!(name, "PORT");
                assert_eq!(value, "abc");
                assert_eq!(type_name, "u32");
            }
            _ => panic!("Expected InvalidValue error"),
        }
        assert_eq!(
            err.to_string(),
            "Invalid value 'abc' for 'PORT' as u32: invalid integer"
        );
    }

    #[test]
    fn test_unsupported_message() {
        let err = BindError::unsupported::<std::collections::HashMap<String, String>>();
        assert!(err.to_string().starts_with("unsupported type: "));
        assert!(err.to_string().contains("HashMap<"));
    }
}
