use fieldpath::reflect::ops::{Enum, Struct};
use fieldpath::{Reflect, get_schema, set_field, to_json};
use serde_json::json;

#[derive(Reflect, Debug, Default, PartialEq)]
struct Sample {
    id: u32,
    label: String,
}

#[derive(Reflect, Debug, PartialEq)]
struct Pair(i8, bool);

#[derive(Reflect, Debug, PartialEq)]
struct Marker;

#[derive(Reflect, Debug, PartialEq)]
enum Direction {
    North,
    East = 90,
    South = 180,
}

#[test]
fn struct_fields_by_name_and_index() {
    let mut sample = Sample {
        id: 7,
        label: "seven".into(),
    };

    assert_eq!(sample.field_len(), 2);
    assert_eq!(sample.name_at(1), Some("label"));
    assert_eq!(sample.name_at(2), None);
    assert_eq!(sample.field("id").map(|field| field.to_value()), Some(json!(7)));
    assert_eq!(sample.field_at(1).map(|field| field.to_value()), Some(json!("seven")));
    assert!(sample.field("Id").is_none());
    assert!(sample.field_at(2).is_none());

    sample.field_mut("id").unwrap().try_apply(&json!("8")).unwrap();
    sample.field_at_mut(1).unwrap().try_apply(&json!(8)).unwrap();
    assert_eq!(
        sample,
        Sample {
            id: 8,
            label: "8".into()
        }
    );
    assert!(sample.field_mut("missing").is_none());
}

#[test]
fn tuple_and_unit_structs() {
    let mut pair = Pair(1, false);
    assert_eq!(pair.name_at(0), Some("field_0"));
    assert!(set_field(&mut pair, "field_1", json!("yes")));
    assert_eq!(pair, Pair(1, true));

    assert_eq!(Marker.field_len(), 0);
    assert!(Marker.field_at(0).is_none());
    assert_eq!(to_json(&Marker), json!({}));
    assert_eq!(get_schema::<Marker>(), json!({ "type": "object", "properties": {} }));
}

#[test]
fn enum_ordinals_follow_discriminants() {
    assert_eq!(Direction::North.ordinal(), 0);
    assert_eq!(Direction::South.ordinal(), 180);
    assert_eq!(Direction::East.variant_name(), "East");

    assert_eq!(Direction::from_ordinal(90), Some(Direction::East));
    assert_eq!(Direction::from_ordinal(1), None);
    assert!(Direction::declared_labels().is_empty());
}
