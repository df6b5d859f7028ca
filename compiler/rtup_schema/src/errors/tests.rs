use super::*;
use pretty_assertions::assert_eq;

#[test]
fn reserved_word_message_and_code() {
    let err = SchemaError::ReservedWord {
        name: "class".to_string(),
    };
    assert_eq!(err.code(), ErrorCode::E1005);
    assert_eq!(
        err.to_string(),
        "type names and field names cannot be a keyword: class"
    );
    assert_eq!(err.offending_name(), Some("class"));
}

#[test]
fn field_count_message() {
    let err = SchemaError::FieldCountExceeded { max: 8192 };
    assert_eq!(err.code(), ErrorCode::E1007);
    assert_eq!(
        err.to_string(),
        "cannot create a record type with more than 8192 fields"
    );
    assert_eq!(err.offending_name(), None);
}

#[test]
fn all_schema_codes_are_schema_phase() {
    let errors = [
        SchemaError::EmptyName,
        SchemaError::LeadingDigit {
            name: "1a".to_string(),
        },
        SchemaError::DuplicateField {
            name: "x".to_string(),
        },
        SchemaError::MultipleParentsUnsupported { count: 2 },
        SchemaError::MissingParent {
            name: "Child".to_string(),
        },
    ];
    for err in errors {
        assert!(err.code().is_schema_error(), "{err}");
    }
}
