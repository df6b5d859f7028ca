#![allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;
use rtup_schema::RecordType;
use std::collections::hash_map::DefaultHasher;
use std::sync::Arc;

use crate::KeywordArgs;

fn hash_value(v: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    v.hash(&mut hasher);
    hasher.finish()
}

fn point(x: i64, y: i64) -> Record {
    let ty = Arc::new(RecordType::build("Point", "x y", false).unwrap());
    Record::new(&ty, vec![Value::int(x), Value::int(y)], KeywordArgs::new()).unwrap()
}

#[test]
fn test_factory_methods() {
    assert_eq!(Value::string("hello").as_str(), Some("hello"));
    assert_eq!(Value::int(42).as_int(), Some(42));
    assert_eq!(Value::float(1.5).as_float(), Some(1.5));
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert!(Value::None.is_none());

    let list = Value::list(vec![Value::int(1), Value::int(2)]);
    assert_eq!(list.as_sequence().map(<[Value]>::len), Some(2));
    assert_eq!(Value::int(1).as_sequence(), None);
}

#[test]
fn test_clone_shares_heap() {
    let s = Value::string("shared");
    let t = s.clone();
    match (&s, &t) {
        (Value::Str(a), Value::Str(b)) => assert!(a.ptr_eq(b)),
        _ => panic!("expected strings"),
    }
}

#[test]
fn test_repr_scalars() {
    assert_eq!(Value::None.repr(), "None");
    assert_eq!(Value::Bool(true).repr(), "True");
    assert_eq!(Value::Bool(false).repr(), "False");
    assert_eq!(Value::int(-7).repr(), "-7");
    assert_eq!(Value::float(1.0).repr(), "1.0");
    assert_eq!(Value::float(2.5).repr(), "2.5");
    assert_eq!(Value::float(f64::NAN).repr(), "nan");
    assert_eq!(Value::float(f64::INFINITY).repr(), "inf");
}

#[test]
fn test_repr_strings() {
    assert_eq!(Value::string("abc").repr(), "'abc'");
    assert_eq!(Value::string("it's").repr(), "\"it's\"");
    assert_eq!(Value::string("a'\"b").repr(), "'a\\'\"b'");
    assert_eq!(Value::string("line\nbreak").repr(), "'line\\nbreak'");
    assert_eq!(Value::string("back\\slash").repr(), "'back\\\\slash'");
    assert_eq!(Value::bytes(b"a\x00'".to_vec()).repr(), "b'a\\x00\\''");
}

#[test]
fn test_repr_containers() {
    let items = vec![Value::int(1), Value::string("a")];
    assert_eq!(Value::list(items.clone()).repr(), "[1, 'a']");
    assert_eq!(Value::tuple(items).repr(), "(1, 'a')");
    assert_eq!(Value::tuple(vec![Value::int(1)]).repr(), "(1,)");
    assert_eq!(Value::tuple(vec![]).repr(), "()");

    let mut map = FxHashMap::default();
    map.insert("b".to_string(), Value::int(2));
    map.insert("a".to_string(), Value::int(1));
    assert_eq!(Value::map(map).repr(), "{'a': 1, 'b': 2}");

    let ordered = Value::ordered_map(vec![
        ("b".to_string(), Value::int(2)),
        ("a".to_string(), Value::int(1)),
    ]);
    assert_eq!(ordered.repr(), "OrderedDict([('b', 2), ('a', 1)])");
}

#[test]
fn test_repr_nested_record() {
    let inner = point(1, 2);
    let outer = Value::list(vec![Value::Record(inner)]);
    assert_eq!(outer.repr(), "[Point(x=1, y=2)]");
}

#[test]
fn test_display_strings_raw() {
    assert_eq!(Value::string("hi").to_string(), "hi");
    assert_eq!(Value::list(vec![Value::string("hi")]).to_string(), "['hi']");
}

#[test]
fn test_type_names() {
    assert_eq!(Value::None.type_name(), "NoneType");
    assert_eq!(Value::int(1).type_name(), "int");
    assert_eq!(Value::string("").type_name(), "str");
    assert_eq!(Value::tuple(vec![]).type_name(), "tuple");
    assert_eq!(Value::Record(point(0, 0)).type_name(), "Point");
}

#[test]
fn test_record_equals_tuple() {
    let record = Value::Record(point(1, 2));
    let tuple = Value::tuple(vec![Value::int(1), Value::int(2)]);
    assert_eq!(record, tuple);
    assert_eq!(tuple, record);
    assert_eq!(hash_value(&record), hash_value(&tuple));
    assert_ne!(record, Value::list(vec![Value::int(1), Value::int(2)]));
}

#[test]
fn test_records_of_different_types_compare_by_values() {
    let other_ty = Arc::new(RecordType::build("Pair", "a b", false).unwrap());
    let pair = Record::new(
        &other_ty,
        vec![Value::int(1), Value::int(2)],
        KeywordArgs::new(),
    )
    .unwrap();
    assert_eq!(Value::Record(pair.clone()), Value::Record(point(1, 2)));
    assert_eq!(
        hash_value(&Value::Record(pair)),
        hash_value(&Value::Record(point(1, 2)))
    );
}

#[test]
fn test_mapping_equality_and_hash() {
    let mut map = FxHashMap::default();
    map.insert("x".to_string(), Value::int(1));
    map.insert("y".to_string(), Value::int(2));
    let unordered = Value::map(map);
    let ordered = Value::ordered_map(vec![
        ("y".to_string(), Value::int(2)),
        ("x".to_string(), Value::int(1)),
    ]);
    assert_eq!(unordered, ordered);
    assert_eq!(hash_value(&unordered), hash_value(&ordered));

    let reordered = Value::ordered_map(vec![
        ("x".to_string(), Value::int(1)),
        ("y".to_string(), Value::int(2)),
    ]);
    assert_ne!(ordered, reordered);
}

#[test]
fn test_different_variants_differ() {
    assert_ne!(Value::int(1), Value::float(1.0));
    assert_ne!(Value::string("1"), Value::int(1));
    assert_ne!(hash_value(&Value::int(1)), hash_value(&Value::Bool(true)));
}

#[test]
fn test_value_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
    assert_send_sync::<Record>();
}
