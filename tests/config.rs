use std::sync::Once;
use std::time::Duration;

use fieldpath::reflect::time::{Hours, Minutes, Seconds};
use fieldpath::reflect::registry;
use fieldpath::{Reflect, from_json, get_field, get_schema, set_field, to_json, try_set_field};
use serde_json::json;

#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
enum LogLevel {
    #[reflect(label = "debug")]
    Debug,
    #[reflect(label = "info")]
    Info,
    #[reflect(label = "warn")]
    Warn,
    #[reflect(label = "error")]
    Error,
}

#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
enum Priority {
    Low = 1,
    Medium = 5,
    High = 10,
}

#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
enum Shape {
    Circle,
    Square,
}

#[derive(Reflect, Debug, Clone, PartialEq)]
struct Config {
    name: String,
    level: LogLevel,
    timeout: Seconds,
    interval: Minutes,
    priority: Priority,
}

#[derive(Reflect, Debug, Clone, PartialEq)]
struct Timing {
    delay: Duration,
    window: Hours<f64>,
    shape: Shape,
}

fn register_priority() {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        assert!(fieldpath::register_enum!(Priority {
            Low => "low",
            Medium => "medium",
            High => "high",
        }));
    });
}

fn config() -> Config {
    register_priority();
    Config {
        name: "test_config".into(),
        level: LogLevel::Info,
        timeout: Seconds::new(30),
        interval: Minutes::new(1),
        priority: Priority::Medium,
    }
}

#[test]
fn declared_labels_register_themselves() {
    assert!(registry::is_registered::<LogLevel>());
    assert_eq!(LogLevel::Warn.to_value(), json!("warn"));
    assert!(!fieldpath::register_declared_labels::<LogLevel>());
}

#[test]
fn enum_labels_ignore_case() {
    let mut cfg = config();

    assert!(set_field(&mut cfg, "level", json!("debug")));
    assert_eq!(cfg.level, LogLevel::Debug);
    assert!(set_field(&mut cfg, "level", json!("Error")));
    assert_eq!(cfg.level, LogLevel::Error);
    assert!(set_field(&mut cfg, "priority", json!("HIGH")));
    assert_eq!(cfg.priority, Priority::High);
    assert!(set_field(&mut cfg, "priority", json!("low")));
    assert_eq!(cfg.priority, Priority::Low);
}

#[test]
fn enum_ordinals_are_discriminants() {
    let mut cfg = config();

    assert!(set_field(&mut cfg, "level", json!(0)));
    assert_eq!(cfg.level, LogLevel::Debug);
    assert!(set_field(&mut cfg, "level", json!(3)));
    assert_eq!(cfg.level, LogLevel::Error);
    assert!(set_field(&mut cfg, "priority", json!(10)));
    assert_eq!(cfg.priority, Priority::High);
    assert!(set_field(&mut cfg, "priority", json!("5")));
    assert_eq!(cfg.priority, Priority::Medium);

    assert!(!set_field(&mut cfg, "priority", json!(2)));
    assert!(!set_field(&mut cfg, "level", json!(4)));
    assert_eq!(cfg.priority, Priority::Medium);
}

#[test]
fn unknown_labels_are_rejected() {
    let mut cfg = config();
    let before = cfg.clone();

    assert!(!set_field(&mut cfg, "level", json!("invalid")));
    assert!(!set_field(&mut cfg, "level", json!("unknown_level")));
    assert!(!set_field(&mut cfg, "level", json!(true)));
    assert_eq!(cfg, before);
}

#[test]
fn durations_convert_between_units() {
    let mut cfg = config();

    assert!(set_field(&mut cfg, "timeout", json!("45s")));
    assert_eq!(cfg.timeout.count(), 45);
    assert!(set_field(&mut cfg, "timeout", json!("2m")));
    assert_eq!(cfg.timeout.count(), 120);
    assert!(set_field(&mut cfg, "timeout", json!("1500ms")));
    assert_eq!(cfg.timeout.count(), 1);

    assert!(set_field(&mut cfg, "interval", json!("5m")));
    assert_eq!(cfg.interval.count(), 5);
    assert!(set_field(&mut cfg, "interval", json!("2h")));
    assert_eq!(cfg.interval.count(), 120);
    assert!(set_field(&mut cfg, "interval", json!("120s")));
    assert_eq!(cfg.interval.count(), 2);
    assert!(set_field(&mut cfg, "interval", json!("1 day")));
    assert_eq!(cfg.interval.count(), 1440);
}

#[test]
fn bare_numbers_use_the_field_unit() {
    let mut cfg = config();

    assert!(set_field(&mut cfg, "timeout", json!(60)));
    assert_eq!(cfg.timeout.count(), 60);
    assert!(set_field(&mut cfg, "interval", json!(10)));
    assert_eq!(cfg.interval.count(), 10);
    assert!(set_field(&mut cfg, "interval", json!("15")));
    assert_eq!(cfg.interval.count(), 15);
}

#[test]
fn duration_whitespace_is_trimmed() {
    let mut cfg = config();

    assert!(set_field(&mut cfg, "timeout", json!(" 30s ")));
    assert_eq!(cfg.timeout.count(), 30);
    assert!(set_field(&mut cfg, "interval", json!("  5 m  ")));
    assert_eq!(cfg.interval.count(), 5);
}

#[test]
fn malformed_durations_are_rejected() {
    let mut cfg = config();
    let before = cfg.clone();

    for input in ["invalid_duration", "30x", "s30", "", "   "] {
        assert!(!set_field(&mut cfg, "timeout", json!(input)), "{input:?}");
    }
    assert!(!set_field(&mut cfg, "timeout", json!([30])));

    assert_eq!(cfg, before);
}

#[test]
fn errors_name_the_failure() {
    let mut cfg = config();

    let err = try_set_field(&mut cfg, "timeout", &json!("30x")).unwrap_err();
    assert!(err.to_string().contains("30x"), "{err}");

    let err = try_set_field(&mut cfg, "level", &json!("loud")).unwrap_err();
    assert!(err.to_string().contains("loud"), "{err}");
}

#[test]
fn encodes_labels_and_suffixed_durations() {
    let cfg = config();

    assert_eq!(
        to_json(&cfg),
        json!({
            "name": "test_config",
            "level": "info",
            "timeout": "30s",
            "interval": "1m",
            "priority": "medium",
        })
    );
    assert_eq!(get_field(&cfg, "timeout"), Some(json!("30s")));
}

#[test]
fn realistic_configuration_update() {
    let mut cfg = config();

    assert!(set_field(&mut cfg, "name", json!("production_config")));
    assert!(set_field(&mut cfg, "level", json!("warn")));
    assert!(set_field(&mut cfg, "timeout", json!("30s")));
    assert!(set_field(&mut cfg, "interval", json!(5)));
    assert!(set_field(&mut cfg, "priority", json!("HIGH")));

    assert_eq!(
        cfg,
        Config {
            name: "production_config".into(),
            level: LogLevel::Warn,
            timeout: Seconds::new(30),
            interval: Minutes::new(5),
            priority: Priority::High,
        }
    );
}

#[test]
fn std_durations_and_fractional_counts() {
    let mut timing = Timing {
        delay: Duration::from_secs(2),
        window: Hours::new(1.5),
        shape: Shape::Circle,
    };

    assert_eq!(get_field(&timing, "delay"), Some(json!("2s")));
    assert_eq!(get_field(&timing, "window"), Some(json!("1.5h")));

    assert!(set_field(&mut timing, "delay", json!("1.5s")));
    assert_eq!(timing.delay, Duration::from_millis(1500));
    assert_eq!(get_field(&timing, "delay"), Some(json!("1500ms")));

    assert!(set_field(&mut timing, "delay", json!(3)));
    assert_eq!(timing.delay, Duration::from_secs(3));
    assert!(!set_field(&mut timing, "delay", json!("-1s")));

    assert!(set_field(&mut timing, "window", json!("90m")));
    assert_eq!(timing.window.count(), 1.5);
}

#[test]
fn std_durations_round_trip_exactly() {
    let long = Duration::new(1_000_000_000, 1);
    let mut timing = Timing {
        delay: long,
        window: Hours::new(0.0),
        shape: Shape::Circle,
    };

    let encoded = get_field(&timing, "delay").unwrap();
    assert_eq!(encoded, json!("1000000000.000000001s"));
    assert!(set_field(&mut timing, "delay", encoded));
    assert_eq!(timing.delay, long);

    let back: Timing = from_json(&to_json(&timing)).unwrap();
    assert_eq!(back.delay, long);
}

#[test]
fn bare_counts_accept_a_trailing_point() {
    let mut cfg = config();

    assert!(set_field(&mut cfg, "timeout", json!("5.")));
    assert_eq!(get_field(&cfg, "timeout"), Some(json!("5s")));
    assert!(set_field(&mut cfg, "timeout", json!("7.s")));
    assert_eq!(get_field(&cfg, "timeout"), Some(json!("7s")));
    assert!(!set_field(&mut cfg, "timeout", json!(".5")));
}

#[test]
fn unregistered_enums_use_ordinals() {
    let mut timing = Timing {
        delay: Duration::ZERO,
        window: Hours::new(0.0),
        shape: Shape::Circle,
    };

    assert_eq!(get_field(&timing, "shape"), Some(json!(0)));
    assert!(set_field(&mut timing, "shape", json!(1)));
    assert_eq!(timing.shape, Shape::Square);
    assert!(!set_field(&mut timing, "shape", json!("square")));
}

#[test]
fn schema_describes_enums_and_durations() {
    register_priority();
    let schema = get_schema::<Config>();

    assert_eq!(schema["properties"]["level"], json!({ "type": "string", "enum": ["debug", "info", "warn", "error"] }));
    assert_eq!(schema["properties"]["priority"]["enum"], json!(["low", "medium", "high"]));
    assert_eq!(schema["properties"]["timeout"], json!({ "type": "string", "format": "duration" }));
    assert_eq!(get_schema::<Timing>()["properties"]["shape"], json!({ "type": "integer" }));
}
