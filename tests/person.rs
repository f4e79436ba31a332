use fieldpath::{Reflect, from_json, get_all_paths, get_field, is_valid_path, set_field, to_json};
use serde_json::json;

#[derive(Reflect, Debug, Clone, PartialEq)]
struct Address {
    street: String,
    city: String,
    zip_code: u32,
}

#[derive(Reflect, Debug, Clone, PartialEq)]
struct Person {
    name: String,
    age: u32,
    address: Address,
    active: bool,
}

fn person() -> Person {
    Person {
        name: "John Doe".into(),
        age: 30,
        address: Address {
            street: "123 Main St".into(),
            city: "Anytown".into(),
            zip_code: 12345,
        },
        active: true,
    }
}

#[test]
fn reads_top_level_and_nested_fields() {
    let p = person();

    assert_eq!(get_field(&p, "name"), Some(json!("John Doe")));
    assert_eq!(get_field(&p, "age"), Some(json!(30)));
    assert_eq!(get_field(&p, "address.city"), Some(json!("Anytown")));
    assert_eq!(get_field(&p, "address.zip_code"), Some(json!(12345)));
    assert_eq!(
        get_field(&p, "address"),
        Some(json!({ "street": "123 Main St", "city": "Anytown", "zip_code": 12345 }))
    );
}

#[test]
fn unknown_and_empty_paths_read_nothing() {
    let p = person();

    assert_eq!(get_field(&p, ""), None);
    assert_eq!(get_field(&p, "nickname"), None);
    assert_eq!(get_field(&p, "address.country"), None);
    assert_eq!(get_field(&p, "name.first"), None);
    assert_eq!(get_field(&p, "Name"), None);
}

#[test]
fn writes_coerce_to_the_field_type() {
    let mut p = person();

    assert!(set_field(&mut p, "address.zip_code", json!("90210")));
    assert_eq!(p.address.zip_code, 90210);

    assert!(set_field(&mut p, "age", json!(31.9)));
    assert_eq!(p.age, 31);

    assert!(set_field(&mut p, "active", json!("no")));
    assert!(!p.active);

    assert!(set_field(&mut p, "name", json!(42)));
    assert_eq!(p.name, "42");
}

#[test]
fn failed_writes_change_nothing() {
    let mut p = person();
    let before = p.clone();

    assert!(!set_field(&mut p, "", json!("x")));
    assert!(!set_field(&mut p, "age", json!("old")));
    assert!(!set_field(&mut p, "active", json!("maybe")));
    assert!(!set_field(&mut p, "address.planet", json!("Mars")));
    assert!(!set_field(&mut p, "address", json!({ "street": "Elm St", "city": "Springfield" })));

    assert_eq!(p, before);
}

#[test]
fn whole_records_can_be_replaced() {
    let mut p = person();

    let address = json!({ "street": "1 Elm St", "city": "Springfield", "zip_code": "55555" });
    assert!(set_field(&mut p, "address", address));
    assert_eq!(p.address.city, "Springfield");
    assert_eq!(p.address.zip_code, 55555);
}

#[test]
fn lists_every_path_parents_first() {
    let paths = get_all_paths::<Person>();

    assert_eq!(
        paths,
        [
            "name",
            "age",
            "address",
            "address.street",
            "address.city",
            "address.zip_code",
            "active",
        ]
    );
}

#[test]
fn every_listed_path_is_valid_and_readable() {
    let p = person();

    for path in get_all_paths::<Person>() {
        assert!(is_valid_path::<Person>(&path), "{path}");
        assert!(get_field(&p, &path).is_some(), "{path}");
    }

    assert!(!is_valid_path::<Person>(""));
    assert!(!is_valid_path::<Person>("address.country"));
    assert!(!is_valid_path::<Person>("age.value"));
}

#[test]
fn writing_back_a_read_value_is_a_no_op() {
    let mut p = person();
    let before = p.clone();

    for path in get_all_paths::<Person>() {
        let value = get_field(&p, &path).unwrap();
        assert!(set_field(&mut p, &path, value), "{path}");
    }

    assert_eq!(p, before);
}

#[test]
fn json_round_trip() {
    let p = person();
    let value = to_json(&p);

    assert_eq!(
        value.to_string(),
        r#"{"name":"John Doe","age":30,"address":{"street":"123 Main St","city":"Anytown","zip_code":12345},"active":true}"#
    );
    assert_eq!(from_json::<Person>(&value), Ok(p));
}
