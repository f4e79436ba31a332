use fieldpath::{Reflect, get_field, set_field};
use serde_json::json;

#[derive(Reflect, Debug, Default, Clone, PartialEq)]
struct TestTypes {
    str_field: String,
    int_field: i32,
    double_field: f64,
    float_field: f32,
    bool_field: bool,
    long_field: i64,
    uint_field: u32,
    int8_field: i8,
    uint64_field: u64,
    tags: Vec<String>,
}

#[test]
fn strings_render_anything() {
    let mut t = TestTypes::default();

    for (input, expected) in [
        (json!("hello"), "hello"),
        (json!(42), "42"),
        (json!(true), "true"),
        (json!([1, 2, 3]), "[1,2,3]"),
        (json!({ "a": 1 }), r#"{"a":1}"#),
        (json!(null), "null"),
    ] {
        assert!(set_field(&mut t, "str_field", input));
        assert_eq!(t.str_field, expected);
    }
}

#[test]
fn integers_from_numbers_and_strings() {
    let mut t = TestTypes::default();

    assert!(set_field(&mut t, "int_field", json!(42)));
    assert_eq!(t.int_field, 42);
    assert!(set_field(&mut t, "int_field", json!("123")));
    assert_eq!(t.int_field, 123);
    assert!(set_field(&mut t, "int_field", json!(-456)));
    assert_eq!(t.int_field, -456);
    assert!(set_field(&mut t, "int_field", json!("-789")));
    assert_eq!(t.int_field, -789);
    assert!(set_field(&mut t, "int_field", json!("  12abc")));
    assert_eq!(t.int_field, 12);
    assert!(set_field(&mut t, "int_field", json!(7.8)));
    assert_eq!(t.int_field, 7);

    assert!(!set_field(&mut t, "int_field", json!("abc")));
    assert!(!set_field(&mut t, "int_field", json!(true)));
    assert!(!set_field(&mut t, "int_field", json!(null)));
    assert_eq!(t.int_field, 7);
}

#[test]
fn integer_widths() {
    let mut t = TestTypes::default();

    assert!(set_field(&mut t, "long_field", json!("9223372036854775807")));
    assert_eq!(t.long_field, i64::MAX);
    assert!(set_field(&mut t, "uint64_field", json!("18446744073709551615")));
    assert_eq!(t.uint64_field, u64::MAX);
    assert!(set_field(&mut t, "uint64_field", json!(u64::MAX)));
    assert_eq!(t.uint64_field, u64::MAX);
    assert!(set_field(&mut t, "uint_field", json!(4000000000_u64)));
    assert_eq!(t.uint_field, 4_000_000_000);
    assert!(set_field(&mut t, "int8_field", json!(-128)));
    assert_eq!(t.int8_field, -128);

    assert!(!set_field(&mut t, "long_field", json!("99999999999999999999")));
    assert_eq!(t.long_field, i64::MAX);
}

#[test]
fn floats_from_numbers_and_strings() {
    let mut t = TestTypes::default();

    assert!(set_field(&mut t, "double_field", json!(3.14)));
    assert_eq!(t.double_field, 3.14);
    assert!(set_field(&mut t, "double_field", json!("2.71")));
    assert_eq!(t.double_field, 2.71);
    assert!(set_field(&mut t, "double_field", json!(42)));
    assert_eq!(t.double_field, 42.0);
    assert!(set_field(&mut t, "double_field", json!("1.23e-4")));
    assert_eq!(t.double_field, 1.23e-4);
    assert!(set_field(&mut t, "double_field", json!("-inf")));
    assert_eq!(t.double_field, f64::NEG_INFINITY);

    assert!(set_field(&mut t, "float_field", json!("2.5kg")));
    assert_eq!(t.float_field, 2.5);

    assert!(!set_field(&mut t, "float_field", json!("kg")));
    assert_eq!(t.float_field, 2.5);
}

#[test]
fn booleans_accept_words_and_numbers() {
    let mut t = TestTypes::default();

    for (input, expected) in [
        (json!(true), true),
        (json!(false), false),
        (json!("true"), true),
        (json!("false"), false),
        (json!("1"), true),
        (json!("0"), false),
        (json!("yes"), true),
        (json!("no"), false),
        (json!("TRUE"), true),
        (json!("False"), false),
        (json!(5), true),
        (json!(0), false),
    ] {
        assert!(set_field(&mut t, "bool_field", input.clone()), "{input}");
        assert_eq!(t.bool_field, expected, "{input}");
    }

    assert!(!set_field(&mut t, "bool_field", json!("maybe")));
    assert!(!set_field(&mut t, "bool_field", json!(" yes")));
    assert!(!set_field(&mut t, "bool_field", json!([true])));
}

#[test]
fn sequences_decode_element_by_element() {
    let mut t = TestTypes::default();

    assert!(set_field(&mut t, "tags", json!(["a", 1, false])));
    assert_eq!(t.tags, ["a", "1", "false"]);

    assert!(!set_field(&mut t, "tags", json!("a,b")));
    assert_eq!(t.tags, ["a", "1", "false"]);
}

#[test]
fn non_finite_floats_read_as_null() {
    let t = TestTypes {
        double_field: f64::NAN,
        ..TestTypes::default()
    };

    assert_eq!(get_field(&t, "double_field"), Some(json!(null)));
}
