//! Identifier validation for type and field names.

use crate::SchemaError;

/// Words that may not be used as a type or field name.
pub const RESERVED_WORDS: [&str; 31] = [
    "and", "as", "assert", "break", "class", "continue", "def", "del", "elif", "else", "except",
    "exec", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda", "not", "or",
    "pass", "print", "raise", "return", "try", "while", "with", "yield",
];

/// Result of classifying a candidate identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    Valid,
    Empty,
    LeadingDigit,
    LeadingUnderscore,
    InvalidCharacter,
    ReservedWord,
}

impl Verdict {
    #[inline]
    pub fn is_valid(self) -> bool {
        self == Verdict::Valid
    }

    /// Convert a failing verdict into the matching schema error.
    fn into_error(self, name: &str) -> Option<SchemaError> {
        let name = name.to_string();
        match self {
            Verdict::Valid => None,
            Verdict::Empty => Some(SchemaError::EmptyName),
            Verdict::LeadingDigit => Some(SchemaError::LeadingDigit { name }),
            Verdict::LeadingUnderscore => Some(SchemaError::LeadingUnderscore { name }),
            Verdict::InvalidCharacter => Some(SchemaError::InvalidCharacter { name }),
            Verdict::ReservedWord => Some(SchemaError::ReservedWord { name }),
        }
    }
}

/// Classify an identifier.
///
/// Rules apply in order, the first match wins: empty, leading ASCII digit,
/// leading underscore, any byte outside `[A-Za-z0-9_]`, reserved word.
/// Non-ASCII text is always `InvalidCharacter`.
pub fn classify(ident: &str) -> Verdict {
    let Some(first) = ident.bytes().next() else {
        return Verdict::Empty;
    };

    if first.is_ascii_digit() {
        return Verdict::LeadingDigit;
    }
    if first == b'_' {
        return Verdict::LeadingUnderscore;
    }
    if !ident.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return Verdict::InvalidCharacter;
    }
    if RESERVED_WORDS.contains(&ident) {
        return Verdict::ReservedWord;
    }
    Verdict::Valid
}

/// Validate a type name. A leading underscore is tolerated.
pub fn check_type_name(name: &str) -> Result<(), SchemaError> {
    match classify(name) {
        Verdict::LeadingUnderscore => Ok(()),
        verdict => verdict.into_error(name).map_or(Ok(()), Err),
    }
}

/// Validate a field name.
///
/// A leading underscore is only accepted when `allow_underscore` is set,
/// which the descriptor builder does when renaming produced `_i`
/// placeholders.
pub fn check_field_name(name: &str, allow_underscore: bool) -> Result<(), SchemaError> {
    match classify(name) {
        Verdict::LeadingUnderscore if allow_underscore => Ok(()),
        verdict => verdict.into_error(name).map_or(Ok(()), Err),
    }
}
