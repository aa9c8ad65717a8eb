use std::collections::{BTreeMap, HashMap};

use jsonvalue::{JsonArray, JsonObject, JsonRepresentable, JsonValue};

fn assert_roundtrip<T>(value: T)
where
    T: JsonRepresentable + PartialEq + std::fmt::Debug,
{
    let json = value.to_json();
    assert_eq!(
        T::from_json(&json),
        Some(value),
        "roundtrip failed through {json}"
    );
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn scalars_roundtrip() {
    assert_roundtrip(true);
    assert_roundtrip(false);
    assert_roundtrip(0_i64);
    assert_roundtrip(i64::MIN);
    assert_roundtrip(i64::MAX);
    assert_roundtrip(-3_i32);
    assert_roundtrip(200_u8);
    assert_roundtrip(0.1_f64);
    assert_roundtrip(String::new());
    assert_roundtrip("caf\u{00e9}".to_string());
}

#[test]
fn scalars_wrap_matching_variant() {
    assert_eq!(true.to_json(), JsonValue::Bool(true));
    assert_eq!(5_i64.to_json(), JsonValue::Int(5));
    assert_eq!(5_u16.to_json(), JsonValue::Int(5));
    assert_eq!(5.0_f64.to_json(), JsonValue::Double(5.0));
    assert_eq!("x".to_string().to_json(), JsonValue::String("x".into()));
}

// ============================================================================
// Shape mismatch
// ============================================================================

#[test]
fn no_coercion_between_json_types() {
    assert_eq!(i64::from_json(&JsonValue::String("5".into())), None);
    assert_eq!(i64::from_json(&JsonValue::Double(5.0)), None);
    assert_eq!(f64::from_json(&JsonValue::Int(5)), None);
    assert_eq!(bool::from_json(&JsonValue::Int(1)), None);
    assert_eq!(String::from_json(&JsonValue::Int(5)), None);
    assert_eq!(JsonObject::from_json(&JsonValue::Array(vec![])), None);
    assert_eq!(JsonArray::from_json(&JsonValue::Object(JsonObject::new())), None);
}

#[test]
fn null_is_not_a_scalar() {
    assert_eq!(bool::from_json(&JsonValue::Null), None);
    assert_eq!(String::from_json(&JsonValue::Null), None);
}

#[test]
fn json_value_is_identity() {
    let v: JsonValue = vec![("a", JsonValue::Null)].into_iter().collect();
    assert_eq!(JsonValue::from_json(&v), Some(v.clone()));
    assert_eq!(v.to_json(), v);
}

// ============================================================================
// Option
// ============================================================================

#[test]
fn option_null_is_some_none() {
    assert_eq!(Option::<i64>::from_json(&JsonValue::Null), Some(None));
}

#[test]
fn option_present_converts_inner() {
    assert_eq!(Option::<i64>::from_json(&JsonValue::Int(4)), Some(Some(4)));
}

#[test]
fn option_mismatch_fails() {
    assert_eq!(Option::<i64>::from_json(&JsonValue::Bool(true)), None);
}

#[test]
fn option_to_json() {
    assert_eq!(None::<String>.to_json(), JsonValue::Null);
    assert_eq!(Some(2.5_f64).to_json(), JsonValue::Double(2.5));
}

// ============================================================================
// Collections
// ============================================================================

#[test]
fn typed_vec_roundtrips() {
    assert_roundtrip(vec![1_i64, 2, 3]);
    assert_roundtrip(Vec::<String>::new());
    assert_roundtrip(vec![Some(1_i64), None]);
}

#[test]
fn typed_vec_fails_on_single_bad_element() {
    let json = JsonValue::Array(vec![JsonValue::Int(1), JsonValue::String("2".into())]);
    assert_eq!(Vec::<i64>::from_json(&json), None);
}

#[test]
fn typed_map_roundtrips() {
    let mut map = BTreeMap::new();
    map.insert("a".to_string(), vec![true]);
    map.insert("b".to_string(), vec![]);
    assert_roundtrip(map);

    let mut hash = HashMap::new();
    hash.insert("x".to_string(), 1.5_f64);
    assert_roundtrip(hash);
}

#[test]
fn typed_map_fails_on_single_bad_value() {
    let json: JsonValue = vec![("a", JsonValue::Int(1)), ("b", JsonValue::Null)]
        .into_iter()
        .collect();
    assert_eq!(BTreeMap::<String, i64>::from_json(&json), None);
    assert!(BTreeMap::<String, Option<i64>>::from_json(&json).is_some());
}

#[test]
fn nested_collections_recurse() {
    let json: JsonValue = vec![(
        "rows",
        JsonValue::Array(vec![
            JsonValue::Array(vec![JsonValue::Int(1), JsonValue::Int(2)]),
            JsonValue::Array(vec![]),
        ]),
    )]
    .into_iter()
    .collect();
    let decoded = BTreeMap::<String, Vec<Vec<i64>>>::from_json(&json).unwrap();
    assert_eq!(decoded["rows"], vec![vec![1, 2], vec![]]);
}
