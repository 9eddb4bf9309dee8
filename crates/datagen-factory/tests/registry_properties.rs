//! Behaviour of the built-in registry across every generator type.

use datagen_core::{FactoryError, GeneratedValue, ParameterBag};
use datagen_factory::generators::numeric::{IntegerFactory, IntegerSettings};
use datagen_factory::generators::repeat::{RepeatFactory, RepeatSettings};
use datagen_factory::{FactoryRegistry, RegisteredFactory};
use std::io::Write;

fn bag(entries: &[(&str, &str)]) -> ParameterBag {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn lines_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Alice").unwrap();
    writeln!(file, "Bob").unwrap();
    file
}

/// A bag supplying exactly the required parameters of each built-in type.
fn required_bag(type_name: &str, path: &str) -> ParameterBag {
    match type_name {
        "repeat" | "text" => bag(&[("value", "x")]),
        "fileline" => bag(&[("path", path)]),
        _ => ParameterBag::new(),
    }
}

#[test]
fn test_every_type_accepts_its_required_parameters() {
    let registry = FactoryRegistry::with_builtins().unwrap();
    let file = lines_file();
    let path = file.path().to_str().unwrap();

    for type_name in registry.type_names() {
        let mut generator = registry
            .create(type_name, &required_bag(type_name, path))
            .unwrap_or_else(|e| panic!("{type_name}: {e}"));
        let _ = generator.next_value();
    }
}

#[test]
fn test_every_type_rejects_unknown_parameter() {
    let registry = FactoryRegistry::with_builtins().unwrap();
    let file = lines_file();
    let path = file.path().to_str().unwrap();

    for type_name in registry.type_names() {
        let mut parameters = required_bag(type_name, path);
        parameters.insert("colour".to_string(), "blue".to_string());

        match registry.create(type_name, &parameters) {
            Err(FactoryError::UnknownParameter { type_name: t, key }) => {
                assert_eq!(t, type_name);
                assert_eq!(key, "colour");
            }
            other => panic!("{type_name}: expected UnknownParameter, got {other:?}"),
        }
    }
}

#[test]
fn test_missing_required_parameter() {
    let registry = FactoryRegistry::with_builtins().unwrap();

    for (type_name, others) in [
        ("text", bag(&[])),
        ("repeat", bag(&[("count", "2"), ("separator", ",")])),
        ("fileline", bag(&[("mode", "sequential")])),
    ] {
        match registry.create(type_name, &others) {
            Err(FactoryError::MissingParameter { missing, .. }) => {
                assert_eq!(missing.len(), 1, "{type_name}");
            }
            other => panic!("{type_name}: expected MissingParameter, got {other:?}"),
        }
    }
}

#[test]
fn test_empty_type_name_and_absent_bag() {
    let registry = FactoryRegistry::with_builtins().unwrap();

    assert!(matches!(
        registry.create("", &ParameterBag::new()),
        Err(FactoryError::UnknownType(_))
    ));
    assert!(matches!(
        registry.create("int", None),
        Err(FactoryError::InvalidArgument(_))
    ));
}

#[test]
fn test_integer_coercion() {
    let registry = FactoryRegistry::with_builtins().unwrap();

    let result = registry.create("int", &bag(&[("min", "abc")]));
    assert!(matches!(
        result,
        Err(FactoryError::Type { ref key, .. }) if key == "min"
    ));

    let mut generator = registry
        .create("int", &bag(&[("min", "42"), ("max", "42")]))
        .unwrap();
    assert_eq!(generator.next_value(), GeneratedValue::Int64(42));
}

#[test]
fn test_datetime_rejects_unrenderable_format() {
    let registry = FactoryRegistry::with_builtins().unwrap();

    let result = registry.create("datetime", &bag(&[("format", "%z")]));
    assert!(matches!(
        result,
        Err(FactoryError::InvalidSetting { ref type_name, .. }) if type_name == "datetime"
    ));

    let mut generator = registry
        .create("datetime", &bag(&[("format", "%d/%m/%Y")]))
        .unwrap();
    assert!(!generator.next_value().to_string().is_empty());
}

#[test]
fn test_double_rejects_overflowing_range() {
    let registry = FactoryRegistry::with_builtins().unwrap();

    let result = registry.create("double", &bag(&[("min", "-1e308"), ("max", "1e308")]));
    assert!(matches!(
        result,
        Err(FactoryError::InvalidSetting { ref type_name, .. }) if type_name == "double"
    ));
}

#[test]
fn test_no_state_leaks_between_calls() {
    let registry = FactoryRegistry::with_builtins().unwrap();

    let mut first = registry
        .create("int", &bag(&[("min", "500"), ("max", "600")]))
        .unwrap();
    assert!(first.next_value().as_i64().unwrap() >= 500);

    let mut second = registry.create("int", &ParameterBag::new()).unwrap();
    for _ in 0..50 {
        assert!(second.next_value().as_i64().unwrap() <= 100);
    }

    registry
        .create(
            "repeat",
            &bag(&[("value", "a"), ("count", "3"), ("separator", "-")]),
        )
        .unwrap();
    let mut repeat = registry.create("repeat", &bag(&[("value", "b")])).unwrap();
    assert_eq!(repeat.next_value().to_string(), "b");

    registry
        .create("datetime", &bag(&[("format", "%Y")]))
        .unwrap();
    let mut datetime = registry.create("datetime", &ParameterBag::new()).unwrap();
    assert_eq!(datetime.next_value().to_string().len(), "1970-01-01 00:00:00".len());
}

#[test]
fn test_binding_order_does_not_matter() {
    let entries = [("min", "3"), ("max", "9"), ("seed", "11")];
    let forward: ParameterBag = bag(&entries);
    let reversed: ParameterBag = entries
        .iter()
        .rev()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let registered = RegisteredFactory::new(IntegerFactory).unwrap();
    let settings_forward = registered.bind(&forward).unwrap();
    let settings_reversed = registered.bind(&reversed).unwrap();
    assert_eq!(settings_forward, settings_reversed);
    assert_eq!(
        settings_forward,
        IntegerSettings {
            min: 3,
            max: 9,
            seed: 11
        }
    );

    let registry = FactoryRegistry::with_builtins().unwrap();
    let mut gen_forward = registry.create("int", &forward).unwrap();
    let mut gen_reversed = registry.create("int", &reversed).unwrap();
    for _ in 0..10 {
        assert_eq!(gen_forward.next_value(), gen_reversed.next_value());
    }
}

#[test]
fn test_binding_order_does_not_change_failure() {
    let registry = FactoryRegistry::with_builtins().unwrap();
    let entries = [("value", "x"), ("count", "many"), ("bogus", "1")];

    let forward = bag(&entries);
    let reversed: ParameterBag = entries
        .iter()
        .rev()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let first = registry.create("repeat", &forward).unwrap_err().to_string();
    let second = registry.create("repeat", &reversed).unwrap_err().to_string();
    assert_eq!(first, second);
}

#[test]
fn test_optional_defaults_survive_binding() {
    let registered = RegisteredFactory::new(RepeatFactory).unwrap();
    let settings = registered.bind(&bag(&[("value", "z")])).unwrap();

    assert_eq!(
        settings,
        RepeatSettings {
            value: "z".to_string(),
            ..Default::default()
        }
    );
}

#[test]
fn test_concurrent_creation() {
    let registry = FactoryRegistry::with_builtins().unwrap();

    std::thread::scope(|scope| {
        for i in 0..8i64 {
            let registry = &registry;
            scope.spawn(move || {
                let value = i.to_string();
                let parameters = bag(&[("min", value.as_str()), ("max", value.as_str())]);
                for _ in 0..100 {
                    let mut generator = registry.create("int", &parameters).unwrap();
                    assert_eq!(generator.next_value(), GeneratedValue::Int64(i));
                }
            });
        }
    });
}
