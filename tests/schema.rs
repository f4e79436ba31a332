use fieldpath::reflect::info::Typed;
use fieldpath::{
    Reflect, for_each_field_with_name, from_json, get_all_paths, get_field, get_schema,
    reflection_info, set_field, to_json,
};
use serde_json::{Value, json};

#[derive(Reflect, Debug, Default, Clone, PartialEq)]
struct Address {
    street: String,
    city: String,
}

#[derive(Reflect, Debug, Default, Clone, PartialEq)]
struct Employee {
    name: String,
    age: i32,
    address: Address,
    skills: Vec<String>,
}

#[derive(Reflect)]
#[reflect(field_names("x", "y", "z"))]
struct Point3D(f64, f64, f64);

#[derive(Reflect)]
struct Pair(i32, String);

#[derive(Reflect)]
#[reflect(field_names("only_one"))]
struct Mismatched {
    left: u8,
    right: u8,
}

#[derive(Reflect, Debug, Default, PartialEq)]
struct Page<T> {
    number: u32,
    entries: Vec<T>,
}

#[derive(Reflect)]
struct Node {
    name: String,
    children: Vec<Node>,
}

#[derive(Reflect)]
struct Event {
    kind: String,
    payload: Value,
}

#[derive(Reflect, Debug, PartialEq)]
struct Settings {
    host: String,
    #[reflect(default)]
    port: u16,
}

#[test]
fn nested_schema() {
    assert_eq!(
        get_schema::<Employee>(),
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "age": { "type": "integer" },
                "address": {
                    "type": "object",
                    "properties": {
                        "street": { "type": "string" },
                        "city": { "type": "string" },
                    },
                },
                "skills": { "type": "array", "items": { "type": "string" } },
            },
        })
    );
}

#[test]
fn schema_property_order_follows_declaration() {
    let schema = get_schema::<Employee>();
    let keys: Vec<&str> = schema["properties"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["name", "age", "address", "skills"]);
}

#[test]
fn recursive_schema_stops_at_the_cycle() {
    assert_eq!(
        get_schema::<Node>(),
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "children": { "type": "array", "items": { "type": "object" } },
            },
        })
    );
    assert_eq!(get_all_paths::<Node>(), ["name", "children"]);
}

#[test]
fn free_form_fields() {
    assert_eq!(
        get_schema::<Event>()["properties"]["payload"],
        json!({ "type": "object", "description": "Unknown type" })
    );

    let mut event = Event {
        kind: "click".into(),
        payload: Value::Null,
    };
    assert!(set_field(&mut event, "payload", json!({ "x": 1, "y": [2] })));
    assert_eq!(get_field(&event, "payload.x"), None);
    assert_eq!(
        to_json(&event),
        json!({ "kind": "click", "payload": { "x": 1, "y": [2] } })
    );
}

#[test]
fn custom_field_names() {
    let info = reflection_info::<Point3D>();
    assert_eq!(info["struct_name"], "Point3D");
    assert_eq!(info["json_field_names"], json!(["x", "y", "z"]));
    assert_eq!(info["name_source"], "custom");
    assert_eq!(info["has_custom_field_names"], true);
    assert_eq!(
        info["field_info"]["fields"][2],
        json!({ "index": 2, "name": "z", "type": "f64" })
    );

    let point = Point3D(1.0, 2.0, 3.0);
    assert_eq!(to_json(&point), json!({ "x": 1.0, "y": 2.0, "z": 3.0 }));
    assert_eq!(get_field(&point, "y"), Some(json!(2.0)));
}

#[test]
fn placeholder_field_names() {
    let info = reflection_info::<Pair>();
    assert_eq!(info["json_field_names"], json!(["field_0", "field_1"]));
    assert_eq!(info["name_source"], "placeholder");
    assert_eq!(info["has_custom_field_names"], false);

    let mut pair = Pair(1, "one".into());
    assert!(set_field(&mut pair, "field_0", json!("2")));
    assert_eq!(pair.0, 2);
    assert_eq!(to_json(&pair), json!({ "field_0": 2, "field_1": "one" }));
}

#[test]
fn mismatched_field_names_fall_back_to_placeholders() {
    let info = reflection_info::<Mismatched>();
    assert_eq!(info["json_field_names"], json!(["field_0", "field_1"]));
    assert_eq!(info["name_source"], "placeholder");

    let value = Mismatched { left: 1, right: 2 };
    assert_eq!(get_field(&value, "field_1"), Some(json!(2)));
    assert_eq!(get_field(&value, "right"), None);
}

#[test]
fn non_records_report_no_fields() {
    let info = reflection_info::<Vec<i32>>();
    assert_eq!(info["field_info"]["field_count"], 0);
    assert_eq!(info["json_field_names"], json!([]));
    assert_eq!(info["name_source"], "placeholder");
}

#[test]
fn generic_records_get_one_shape_per_instantiation() {
    assert_eq!(Page::<i32>::type_info().type_name(), "Page<i32>");
    assert_eq!(Page::<String>::type_info().type_name(), "Page<String>");
    assert_ne!(
        Page::<i32>::type_info().type_id(),
        Page::<String>::type_info().type_id()
    );

    assert_eq!(
        get_schema::<Page<Address>>()["properties"]["entries"]["items"]["properties"]["city"],
        json!({ "type": "string" })
    );
    assert_eq!(get_all_paths::<Page<Address>>(), ["number", "entries"]);

    let mut page = Page::<i32>::default();
    assert!(set_field(&mut page, "entries", json!([1, "2", 3.5])));
    assert_eq!(page.entries, [1, 2, 3]);
    assert_eq!(to_json(&page), json!({ "number": 0, "entries": [1, 2, 3] }));
}

#[test]
fn walks_fields_with_names() {
    let employee = Employee {
        name: "Ada".into(),
        age: 36,
        ..Employee::default()
    };

    let mut seen = Vec::new();
    for_each_field_with_name(&employee, |name, value| {
        seen.push((name.to_owned(), value.to_value()));
    });

    assert_eq!(seen.len(), 4);
    assert_eq!(seen[0], ("name".to_owned(), json!("Ada")));
    assert_eq!(seen[1], ("age".to_owned(), json!(36)));
    assert_eq!(seen[3], ("skills".to_owned(), json!([])));
}

#[test]
fn missing_fields_fall_back_only_when_marked() {
    let settings: Settings = from_json(&json!({ "host": "localhost" })).unwrap();
    assert_eq!(
        settings,
        Settings {
            host: "localhost".into(),
            port: 0,
        }
    );

    assert!(from_json::<Settings>(&json!({ "port": 80 })).is_err());
    assert!(from_json::<Employee>(&json!({ "name": "Ada" })).is_err());

    let mut employee = Employee::default();
    assert!(!set_field(&mut employee, "address", json!({ "street": "Main" })));
    assert_eq!(employee.address, Address::default());
}

mod mirror {
    use serde::Serialize;

    #[derive(Serialize)]
    pub struct Address {
        pub street: String,
        pub city: String,
    }

    #[derive(Serialize)]
    pub struct Employee {
        pub name: String,
        pub age: i32,
        pub address: Address,
        pub skills: Vec<String>,
    }
}

#[test]
fn encoding_matches_serde() {
    let employee = Employee {
        name: "Ada".into(),
        age: 36,
        address: Address {
            street: "1 Main".into(),
            city: "Springfield".into(),
        },
        skills: vec!["math".into(), "engines".into()],
    };
    let twin = mirror::Employee {
        name: "Ada".into(),
        age: 36,
        address: mirror::Address {
            street: "1 Main".into(),
            city: "Springfield".into(),
        },
        skills: vec!["math".into(), "engines".into()],
    };

    let ours = to_json(&employee);
    let theirs: Value = serde_json::to_value(&twin).unwrap();
    assert_eq!(ours, theirs);
    assert_eq!(ours.to_string(), serde_json::to_string(&twin).unwrap());

    let back: Employee = from_json(&theirs).unwrap();
    assert_eq!(back, employee);
}
