use std::fmt;

/// Error codes for all record-type diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E1xxx: Schema errors (type creation)
/// - E2xxx: Binding errors (instance construction)
/// - E3xxx: Conversion errors
/// - E4xxx: Configuration errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Schema Errors (E1xxx)
    /// Empty type or field name
    E1001,
    /// Name starts with a digit
    E1002,
    /// Field name starts with an underscore
    E1003,
    /// Name contains a character that is not alphanumeric or underscore
    E1004,
    /// Name is a reserved word
    E1005,
    /// Duplicate field name
    E1006,
    /// Too many fields
    E1007,
    /// Derivation from more than one parent
    E1008,
    /// Derivation without a parent
    E1009,

    // Binding Errors (E2xxx)
    /// Too many arguments
    E2001,
    /// Argument given by name and position
    E2002,
    /// Required field not supplied
    E2003,
    /// Unexpected keyword argument
    E2004,
    /// Keyword argument key is not a string
    E2005,

    // Conversion Errors (E3xxx)
    /// Mapping constructor failed
    E3001,

    // Configuration Errors (E4xxx)
    /// Registered hook is not callable
    E4001,
}

/// Phase in which an error code is raised.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorPhase {
    Schema,
    Binding,
    Conversion,
    Configuration,
}

impl ErrorCode {
    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Schema
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            // Binding
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            // Conversion
            ErrorCode::E3001 => "E3001",
            // Configuration
            ErrorCode::E4001 => "E4001",
        }
    }

    /// Phase this code belongs to, derived from its leading digit.
    pub fn phase(&self) -> ErrorPhase {
        match self.as_str().as_bytes().get(1) {
            Some(b'1') => ErrorPhase::Schema,
            Some(b'2') => ErrorPhase::Binding,
            Some(b'3') => ErrorPhase::Conversion,
            _ => ErrorPhase::Configuration,
        }
    }

    /// Check if this is a schema error (E1xxx range).
    pub fn is_schema_error(&self) -> bool {
        self.phase() == ErrorPhase::Schema
    }

    /// Check if this is a binding error (E2xxx range).
    pub fn is_binding_error(&self) -> bool {
        self.phase() == ErrorPhase::Binding
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
