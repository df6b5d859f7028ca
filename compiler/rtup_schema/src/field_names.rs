//! Field-name input normalization.

use std::fmt;

use crate::SchemaError;

/// Field names as supplied to the factory.
///
/// Either one joined string (`"x, y"`, `"x y"`, `"x,y"`) or a sequence of
/// values whose string forms are the names. Both shapes normalize to the
/// same ordered list before renaming and validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldNames {
    /// Names separated by commas and/or spaces.
    Joined(String),
    /// One name per element, already stringified.
    List(Vec<String>),
}

impl FieldNames {
    /// Field names from a joined string.
    pub fn joined(names: impl Into<String>) -> Self {
        FieldNames::Joined(names.into())
    }

    /// Field names from any sequence, converting each element with `Display`.
    pub fn from_values<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        FieldNames::List(values.into_iter().map(|v| v.to_string()).collect())
    }

    /// Normalize into an ordered list of raw names.
    ///
    /// A joined string splits on every `,` and ` ` with empty tokens
    /// discarded, so runs of separators collapse. Splitting stops with
    /// `FieldCountExceeded` as soon as more than `max_fields` names appear.
    pub fn into_vec(self, max_fields: usize) -> Result<Vec<String>, SchemaError> {
        match self {
            FieldNames::Joined(joined) => {
                let mut fields = Vec::new();
                for token in joined.split([',', ' ']).filter(|t| !t.is_empty()) {
                    if fields.len() >= max_fields {
                        return Err(SchemaError::FieldCountExceeded { max: max_fields });
                    }
                    fields.push(token.to_string());
                }
                Ok(fields)
            }
            FieldNames::List(fields) => Ok(fields),
        }
    }
}

impl From<&str> for FieldNames {
    fn from(names: &str) -> Self {
        FieldNames::joined(names)
    }
}

impl From<String> for FieldNames {
    fn from(names: String) -> Self {
        FieldNames::Joined(names)
    }
}

impl From<&String> for FieldNames {
    fn from(names: &String) -> Self {
        FieldNames::joined(names.as_str())
    }
}

impl<T: fmt::Display> From<Vec<T>> for FieldNames {
    fn from(values: Vec<T>) -> Self {
        FieldNames::from_values(values)
    }
}

impl<T: fmt::Display> From<&[T]> for FieldNames {
    fn from(values: &[T]) -> Self {
        FieldNames::from_values(values)
    }
}

impl<T: fmt::Display, const N: usize> From<[T; N]> for FieldNames {
    fn from(values: [T; N]) -> Self {
        FieldNames::from_values(values)
    }
}
