use alloc::string::String;
use core::fmt;

use thiserror::Error;

use crate::rules::RuleError;

// -----------------------------------------------------------------------------
// Error

/// The failure of a serialization call.
///
/// Every variant is fatal to the enclosing call: no partial output is ever
/// returned. Null and transient fields are skipped, they are not errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SerializeError {
    /// The value is not an object, or its type lacks the serializable marker.
    #[error("type `{type_path}` is not serializable")]
    NotSerializable { type_path: &'static str },

    /// A declared field could not be read from the object.
    #[error("field `{field}` of `{type_path}` could not be read")]
    Access {
        type_path: &'static str,
        field: &'static str,
    },

    /// A bound validator rejected the object.
    #[error("Invalid field: {field} with value {value}")]
    Validation { field: &'static str, value: String },

    /// A bound validator could not be created or invoked.
    #[error("validator of field `{field}` failed: {source}")]
    ValidatorFailed {
        field: &'static str,
        #[source]
        source: RuleError,
    },

    /// A bound converter could not be created or invoked.
    #[error("converter of field `{field}` failed: {source}")]
    Conversion {
        field: &'static str,
        #[source]
        source: RuleError,
    },

    /// Nested objects went deeper than the configured ceiling.
    #[error("can't serialize more than {max_depth} levels deep (reached {depth})")]
    DepthExceeded { depth: usize, max_depth: usize },

    /// The text was computed but the destination refused it.
    #[error("failed to write the serialized text: {0}")]
    Sink(#[from] fmt::Error),
}

impl SerializeError {
    /// Returns `true` for both validation failures:
    /// [`Validation`](Self::Validation) and [`ValidatorFailed`](Self::ValidatorFailed).
    #[inline]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::ValidatorFailed { .. })
    }

    /// Returns the name of the field that caused the failure, if any.
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Access { field, .. }
            | Self::Validation { field, .. }
            | Self::ValidatorFailed { field, .. }
            | Self::Conversion { field, .. } => Some(*field),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use super::SerializeError;
    use crate::rules::RuleError;

    #[test]
    fn messages() {
        let err = SerializeError::Validation {
            field: "name",
            value: String::from("joao"),
        };
        assert_eq!(err.to_string(), "Invalid field: name with value joao");
        assert!(err.is_validation());
        assert_eq!(err.field(), Some("name"));

        let err = SerializeError::DepthExceeded {
            depth: 21,
            max_depth: 20,
        };
        assert_eq!(
            err.to_string(),
            "can't serialize more than 20 levels deep (reached 21)"
        );
        assert_eq!(err.field(), None);
    }

    #[test]
    fn wraps_rule_error() {
        let err = SerializeError::Conversion {
            field: "age",
            source: RuleError::custom("boom"),
        };
        assert_eq!(err.to_string(), "converter of field `age` failed: boom");
        assert!(!err.is_validation());
        assert_eq!(
            core::error::Error::source(&err).map(ToString::to_string),
            Some(String::from("boom"))
        );
    }
}
