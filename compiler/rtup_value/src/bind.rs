//! Positional and keyword argument binding.
//!
//! Resolves a call's arguments into one value per field, in field order.
//! Arguments are moved into the result, never cloned.

use rtup_schema::{RecordType, MAX_FIELDS};

use crate::{BindError, KeywordArgs, Value};

/// Hard ceiling on the arguments accepted by a single call.
pub const MAX_ARGUMENTS: usize = MAX_FIELDS;

/// Bind arguments to the slots of `ty`.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. more arguments than fields, then more than [`MAX_ARGUMENTS`];
/// 2. per field, in order: a name given both by keyword and by position is
///    a conflict, otherwise the keyword, otherwise the positional value,
///    otherwise the field is missing;
/// 3. any keyword left over: the first one decides the error;
/// 4. the first missing field.
///
/// With the count checked up front, a keyword can only be left over when
/// some field went unbound, which is why leftovers outrank missing fields.
pub fn bind(
    ty: &RecordType,
    positional: Vec<Value>,
    mut keywords: KeywordArgs,
) -> Result<Vec<Value>, BindError> {
    let field_count = ty.len();
    let given = positional.len() + keywords.len();

    if given > field_count {
        return Err(fail(BindError::TooManyArguments {
            type_name: ty.name().to_string(),
            max: field_count,
            given,
        }));
    }
    if given > MAX_ARGUMENTS {
        return Err(fail(BindError::TooManyArguments {
            type_name: ty.name().to_string(),
            max: MAX_ARGUMENTS,
            given,
        }));
    }

    let mut slots = Vec::with_capacity(field_count);
    let mut missing = None;
    let mut positional = positional.into_iter();
    for (i, field) in ty.field_names().enumerate() {
        let by_position = positional.next();
        match (keywords.take_str(field), by_position) {
            (Some(_), Some(_)) => {
                return Err(fail(BindError::ConflictingArgument {
                    name: field.to_string(),
                    position: i + 1,
                }));
            }
            (Some(value), None) | (None, Some(value)) => slots.push(value),
            (None, None) => {
                missing.get_or_insert(BindError::MissingRequiredField {
                    name: field.to_string(),
                    position: i + 1,
                });
            }
        }
    }

    if let Some(key) = keywords.first_key() {
        return Err(fail(match key.as_str() {
            Some(name) => BindError::UnexpectedKeyword {
                keywords: vec![name.to_string()],
            },
            None => BindError::InvalidKeywordType {
                type_name: key.type_name().to_string(),
            },
        }));
    }
    if let Some(err) = missing {
        return Err(fail(err));
    }

    Ok(slots)
}

/// Bind a purely positional argument list.
pub fn bind_positional(ty: &RecordType, positional: Vec<Value>) -> Result<Vec<Value>, BindError> {
    bind(ty, positional, KeywordArgs::new())
}

#[cold]
fn fail(err: BindError) -> BindError {
    tracing::trace!(code = %err.code(), %err, "binding failed");
    err
}
