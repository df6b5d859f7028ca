//! Schema errors raised while creating or deriving a record type.

use rtup_diagnostic::ErrorCode;

/// Typed schema error.
///
/// Each variant carries the offending identifier or count so callers can
/// report it without parsing the message. Creation is all-or-nothing: when
/// one of these is returned, no descriptor exists.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("type names and field names cannot be empty")]
    EmptyName,

    #[error("type names and field names cannot start with a number: {name}")]
    LeadingDigit { name: String },

    #[error("field names cannot start with an underscore: {name}")]
    LeadingUnderscore { name: String },

    #[error(
        "type names and field names can only contain alphanumeric characters and underscores: {name}"
    )]
    InvalidCharacter { name: String },

    #[error("type names and field names cannot be a keyword: {name}")]
    ReservedWord { name: String },

    #[error("encountered duplicate field name: {name}")]
    DuplicateField { name: String },

    #[error("cannot create a record type with more than {max} fields")]
    FieldCountExceeded { max: usize },

    #[error("record types derive from a single parent, got {count}")]
    MultipleParentsUnsupported { count: usize },

    #[error("cannot derive `{name}` without a parent record type")]
    MissingParent { name: String },
}

impl SchemaError {
    /// Stable diagnostic code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SchemaError::EmptyName => ErrorCode::E1001,
            SchemaError::LeadingDigit { .. } => ErrorCode::E1002,
            SchemaError::LeadingUnderscore { .. } => ErrorCode::E1003,
            SchemaError::InvalidCharacter { .. } => ErrorCode::E1004,
            SchemaError::ReservedWord { .. } => ErrorCode::E1005,
            SchemaError::DuplicateField { .. } => ErrorCode::E1006,
            SchemaError::FieldCountExceeded { .. } => ErrorCode::E1007,
            SchemaError::MultipleParentsUnsupported { .. } => ErrorCode::E1008,
            SchemaError::MissingParent { .. } => ErrorCode::E1009,
        }
    }

    /// The identifier this error is about, if it names one.
    pub fn offending_name(&self) -> Option<&str> {
        match self {
            SchemaError::LeadingDigit { name }
            | SchemaError::LeadingUnderscore { name }
            | SchemaError::InvalidCharacter { name }
            | SchemaError::ReservedWord { name }
            | SchemaError::DuplicateField { name }
            | SchemaError::MissingParent { name } => Some(name),
            SchemaError::EmptyName
            | SchemaError::FieldCountExceeded { .. }
            | SchemaError::MultipleParentsUnsupported { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests;
