// Test code uses unwrap for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used)]

//! End-to-end behavior of generated record types.
//!
//! Each test drives the public facade only: create a type, build instances,
//! and check the observable results.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rtupc::{
    create_record_type, BindError, Error, ErrorCode, FactoryConfig, KeywordArgs, MappingHook, Record,
    RecordFactory, RecordType, RecordTypeDef, SchemaError, Value, MAX_FIELDS,
};
use std::sync::Arc;

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::int).collect()
}

fn point() -> Arc<RecordType> {
    create_record_type("Point", "x, y", false).unwrap()
}

// Type creation

#[test]
fn valid_unique_fields_are_kept_in_order() {
    let ty = create_record_type("Row", ["id", "name", "score"], false).unwrap();
    let r = Record::make(&ty, ints(&[1, 2, 3])).unwrap();
    assert_eq!(
        r.getattr("_fields"),
        Some(Value::tuple(vec![
            Value::string("id"),
            Value::string("name"),
            Value::string("score"),
        ]))
    );
}

#[test]
fn separators_in_joined_names() {
    for joined in ["x,y", "x, y", "x y", " x ,, y ", "x,,,y"] {
        let ty = create_record_type("P", joined, false).unwrap();
        assert_eq!(ty.field_names().collect::<Vec<_>>(), vec!["x", "y"], "{joined:?}");
    }
}

#[test]
fn sequence_elements_are_stringified() {
    let ty = create_record_type("Nums", vec![1, 2], true).unwrap();
    // "1" and "2" start with digits, so both are renamed
    assert_eq!(ty.field_names().collect::<Vec<_>>(), vec!["_0", "_1"]);
}

#[test]
fn invalid_names_fail_without_rename() {
    let cases = [
        (vec!["x", "class"], ErrorCode::E1005),
        (vec!["9lives"], ErrorCode::E1002),
        (vec!["x", "x"], ErrorCode::E1006),
        (vec!["_hidden"], ErrorCode::E1003),
        (vec!["has-dash"], ErrorCode::E1004),
    ];
    for (fields, code) in cases {
        let err = create_record_type("T", fields.clone(), false).unwrap_err();
        assert_eq!(err.code(), code, "{fields:?}");
        assert!(create_record_type("T", fields, true).is_ok());
    }
}

#[test]
fn rename_example() {
    let ty = create_record_type("Point", ["x", "x", "class"], true).unwrap();
    assert_eq!(ty.field_names().collect::<Vec<_>>(), vec!["x", "_1", "_2"]);
}

#[test]
fn rename_collision_with_placeholder() {
    // `_1` is invalid as given, and its placeholder is also `_1`
    let ty = create_record_type("T", ["a", "_1", "a"], true).unwrap();
    assert_eq!(ty.field_names().collect::<Vec<_>>(), vec!["a", "_1", "_2"]);
}

#[test]
fn too_many_fields() {
    let joined = (0..=MAX_FIELDS)
        .map(|i| format!("f{i}"))
        .collect::<Vec<_>>()
        .join(",");
    assert_eq!(
        create_record_type("Huge", joined, false).unwrap_err(),
        SchemaError::FieldCountExceeded { max: MAX_FIELDS }
    );
}

#[test]
fn max_fields_is_allowed() {
    let fields: Vec<String> = (0..MAX_FIELDS).map(|i| format!("f{i}")).collect();
    let ty = create_record_type("Widest", fields, false).unwrap();
    assert_eq!(ty.len(), MAX_FIELDS);
    let r = Record::make(&ty, (0..MAX_FIELDS).map(|_| Value::None)).unwrap();
    assert_eq!(r.len(), MAX_FIELDS);
}

// Instances

#[test]
fn repr_of_point() {
    let p = Record::new(&point(), ints(&[1, 2]), KeywordArgs::new()).unwrap();
    assert_eq!(p.to_string(), "Point(x=1, y=2)");
    assert_eq!(Value::Record(p).repr(), "Point(x=1, y=2)");
}

#[test]
fn keyword_and_positional_construction_agree() {
    let ty = point();
    let a = Record::new(&ty, ints(&[1, 2]), KeywordArgs::new()).unwrap();
    let b = Record::new(&ty, vec![], KeywordArgs::new().with("y", 2).with("x", 1)).unwrap();
    let c = Record::new(&ty, ints(&[1]), KeywordArgs::new().with("y", 2)).unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn binding_errors() {
    let ty = point();
    assert_eq!(
        Record::new(&ty, ints(&[1]), KeywordArgs::new().with("x", 1)).unwrap_err(),
        BindError::ConflictingArgument {
            name: "x".to_string(),
            position: 1,
        }
    );
    assert_eq!(
        Record::new(&ty, ints(&[1]), KeywordArgs::new()).unwrap_err(),
        BindError::MissingRequiredField {
            name: "y".to_string(),
            position: 2,
        }
    );
    assert_eq!(
        Record::new(&ty, ints(&[1]), KeywordArgs::new().with("z", 3)).unwrap_err(),
        BindError::UnexpectedKeyword {
            keywords: vec!["z".to_string()],
        }
    );
    assert!(matches!(
        Record::new(&ty, ints(&[1, 2, 3]), KeywordArgs::new()).unwrap_err(),
        BindError::TooManyArguments { max: 2, given: 3, .. }
    ));
}

#[test]
fn make_of_construction_args_is_identity() {
    let x = Record::new(&point(), ints(&[4, 5]), KeywordArgs::new()).unwrap();
    let y = Record::make(x.record_type(), x.construction_args()).unwrap();
    assert_eq!(y, x);
}

#[test]
fn mapping_then_keywords_rebuilds() {
    let x = Record::new(&point(), ints(&[4, 5]), KeywordArgs::new()).unwrap();
    let mapping = RecordFactory::default().to_mapping(&x).unwrap();
    let keywords: KeywordArgs = x
        .record_type()
        .field_names()
        .map(|f| (f, mapping.map_get(f).cloned().unwrap()))
        .collect();
    let y = Record::new(x.record_type(), vec![], keywords).unwrap();
    assert_eq!(y, x);
}

#[test]
fn replace_with_nothing_is_a_distinct_equal_value() {
    let x = Record::new(&point(), ints(&[4, 5]), KeywordArgs::new()).unwrap();
    let y = x.replace(KeywordArgs::new()).unwrap();
    assert_eq!(y, x);
    assert!(!y.ptr_eq(&x));
}

#[test]
fn replace_unknown_fields() {
    let x = Record::new(&point(), ints(&[4, 5]), KeywordArgs::new()).unwrap();
    let err = x
        .replace(KeywordArgs::new().with("a", 1).with("b", 2))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "got unexpected field names: ['a', 'b']"
    );
}

#[test]
fn record_equals_plain_tuple() {
    let x = Record::new(&point(), ints(&[4, 5]), KeywordArgs::new()).unwrap();
    assert_eq!(Value::Record(x), Value::tuple(ints(&[4, 5])));
}

#[test]
fn reduce_round_trip() {
    let x = Record::new(&point(), ints(&[4, 5]), KeywordArgs::new()).unwrap();
    assert_eq!(x.getstate(), Value::None);
    assert_eq!(x.reduce().rebuild().unwrap(), x);
}

// Derivation

#[test]
fn derived_type_copies_fields() {
    let parent = point();
    let child = RecordFactory::default().derive("Point3D", &[&*parent]).unwrap();
    assert_eq!(child.field_names().collect::<Vec<_>>(), vec!["x", "y"]);
    let r = Record::make(&child, ints(&[1, 2])).unwrap();
    assert_eq!(r.field("y"), Some(&Value::int(2)));
}

#[test]
fn derivation_needs_exactly_one_parent() {
    let a = point();
    let b = create_record_type("Other", "z", false).unwrap();
    let factory = RecordFactory::default();
    assert_eq!(
        factory.derive("Both", &[&*a, &*b]).unwrap_err().code(),
        ErrorCode::E1008
    );
    assert_eq!(factory.derive("None", &[]).unwrap_err().code(), ErrorCode::E1009);
}

// Definitions and errors

#[test]
fn definitions_round_trip() {
    let ty = create_record_type("Row", ["id", "id"], true).unwrap();
    let def: RecordTypeDef = ty.to_def();
    assert_eq!(RecordType::from_def(def).unwrap(), *ty);
}

#[test]
fn stored_definitions_round_trip() {
    let ty = RecordFactory::new(FactoryConfig::default().with_module("store"))
        .create("Row", ["id", "class", "id"], true)
        .unwrap();
    let bytes = bincode::serialize(&ty.to_def()).unwrap();
    let def: RecordTypeDef = bincode::deserialize(&bytes).unwrap();
    let rebuilt = RecordType::from_def(def).unwrap();
    assert_eq!(rebuilt, *ty);
    assert_eq!(rebuilt.qualified_name(), "store.Row");
}

#[test]
fn definitions_cannot_smuggle_underscore_fields() {
    let def = RecordTypeDef {
        name: "T".to_string(),
        fields: vec!["_hidden".to_string(), "_fields".to_string()],
        module: None,
    };
    assert_eq!(
        RecordType::from_def(def).unwrap_err(),
        create_record_type("T", ["_hidden"], false).unwrap_err()
    );
}

#[test]
fn umbrella_error_keeps_codes() {
    fn build() -> Result<Record, Error> {
        let ty = create_record_type("Point", "x y", false)?;
        let r = Record::new(&ty, vec![], KeywordArgs::new())?;
        Ok(r)
    }
    let err = build().unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2003);
    assert_eq!(err.to_string(), "required argument 'x' (pos 1) not found");

    let err: Error = SchemaError::EmptyName.into();
    assert_eq!(err.code(), ErrorCode::E1001);
}

#[test]
fn injected_ordered_hook() {
    let factory =
        RecordFactory::new(FactoryConfig::default().with_mapping_hook(MappingHook::ordered()));
    let ty = factory.create("Point", "x y", false).unwrap();
    let p = factory.make(&ty, ints(&[1, 2])).unwrap();
    assert_eq!(
        factory.to_mapping(&p).unwrap(),
        Value::ordered_map(vec![
            ("x".to_string(), Value::int(1)),
            ("y".to_string(), Value::int(2)),
        ])
    );
}

proptest! {
    #[test]
    fn renamed_types_always_validate(
        names in proptest::collection::vec("[a-z_0-9]{0,6}", 0..16)
    ) {
        let ty = create_record_type("T", names.clone(), true).unwrap();
        prop_assert_eq!(ty.len(), names.len());
        let def = ty.to_def();
        prop_assert_eq!(RecordType::from_def(def).unwrap(), (*ty).clone());
    }

    #[test]
    fn make_round_trips(values in proptest::collection::vec(any::<i64>(), 1..10)) {
        let fields: Vec<String> = (0..values.len()).map(|i| format!("f{i}")).collect();
        let ty = create_record_type("Row", fields, false).unwrap();
        let x = Record::make(&ty, values.iter().copied().map(Value::int)).unwrap();
        let y = Record::make(&ty, x.construction_args()).unwrap();
        prop_assert_eq!(y, x);
    }
}
