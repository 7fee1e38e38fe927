//! DescriptorError for value type constructors

/// Error returned when a descriptor cannot be turned into a value type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// An array descriptor has the wrong number of elements.
    #[error("Invalid {kind} descriptor: expected {expected} numbers, got {actual}")]
    Arity {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An object descriptor lacks a required key.
    #[error("Invalid {kind} descriptor: missing field '{field}'")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    /// A field is present but does not hold a number.
    #[error("Invalid {kind} descriptor: field '{field}' is not a number")]
    NotNumeric {
        kind: &'static str,
        field: &'static str,
    },

    /// A derived bound disagrees with the position and size fields.
    #[error("Invalid {kind} descriptor: field '{field}' is inconsistent with the other bounds")]
    Inconsistent {
        kind: &'static str,
        field: &'static str,
    },

    /// The descriptor is neither an array nor an object.
    #[error("Invalid {kind} descriptor: expected an array or an object")]
    Shape { kind: &'static str },
}

impl DescriptorError {
    pub fn arity(kind: &'static str, expected: usize, actual: usize) -> Self {
        Self::Arity {
            kind,
            expected,
            actual,
        }
    }

    pub fn missing_field(kind: &'static str, field: &'static str) -> Self {
        Self::MissingField { kind, field }
    }

    pub fn not_numeric(kind: &'static str, field: &'static str) -> Self {
        Self::NotNumeric { kind, field }
    }

    pub fn inconsistent(kind: &'static str, field: &'static str) -> Self {
        Self::Inconsistent { kind, field }
    }

    pub fn shape(kind: &'static str) -> Self {
        Self::Shape { kind }
    }
}
