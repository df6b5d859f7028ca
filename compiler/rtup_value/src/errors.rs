//! Errors raised while building, converting, or configuring records.
//!
//! Binding is all-or-nothing: when a `BindError` is returned no instance
//! exists and every moved-in value has been dropped.

use rtup_diagnostic::ErrorCode;
use std::fmt;

/// Error raised while binding arguments to a record type's slots.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("{type_name} takes at most {max} argument{} ({given} given)", plural(*max))]
    TooManyArguments {
        type_name: String,
        max: usize,
        given: usize,
    },

    #[error("argument given by name ('{name}') and position ({position})")]
    ConflictingArgument { name: String, position: usize },

    #[error("required argument '{name}' (pos {position}) not found")]
    MissingRequiredField { name: String, position: usize },

    #[error("got unexpected field names: {}", KeywordList(keywords))]
    UnexpectedKeyword { keywords: Vec<String> },

    /// `type_name` is the type of the offending key, not of the record.
    #[error("keywords must be strings, not {type_name}")]
    InvalidKeywordType { type_name: String },
}

impl BindError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BindError::TooManyArguments { .. } => ErrorCode::E2001,
            BindError::ConflictingArgument { .. } => ErrorCode::E2002,
            BindError::MissingRequiredField { .. } => ErrorCode::E2003,
            BindError::UnexpectedKeyword { .. } => ErrorCode::E2004,
            BindError::InvalidKeywordType { .. } => ErrorCode::E2005,
        }
    }

    /// 1-based argument position, for errors tied to a slot.
    pub fn position(&self) -> Option<usize> {
        match self {
            BindError::ConflictingArgument { position, .. }
            | BindError::MissingRequiredField { position, .. } => Some(*position),
            _ => None,
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Renders `['a', 'b']`.
struct KeywordList<'a>(&'a [String]);

impl fmt::Display for KeywordList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, keyword) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{keyword}'")?;
        }
        f.write_str("]")
    }
}

/// Error raised by a mapping conversion.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("mapping constructor `{hook}` failed: {message}")]
    MappingConstructorFailed { hook: String, message: String },
}

impl ConvertError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ConvertError::MappingConstructorFailed { .. } => ErrorCode::E3001,
        }
    }
}

/// Error raised while configuring the mapping hook.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("mapping constructor must be a callable object, got {type_name}")]
    NotCallable { type_name: String },
}

impl ConfigError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ConfigError::NotCallable { .. } => ErrorCode::E4001,
        }
    }
}
