use serde_confyaml::{from_str, yaml, Mapping, Value};

#[test]
fn test_yaml_macro_null() {
    let value = yaml!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_yaml_macro_booleans() {
    assert_eq!(yaml!(true), Value::Bool(true));
    assert_eq!(yaml!(false), Value::Bool(false));
}

#[test]
fn test_yaml_macro_numbers() {
    assert_eq!(yaml!(42), Value::Int(42));
    assert_eq!(yaml!(3.5), Value::Float(3.5));
    assert_eq!(yaml!(-123), Value::Int(-123));
}

#[test]
fn test_yaml_macro_strings() {
    assert_eq!(yaml!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(yaml!(""), Value::String(String::new()));
}

#[test]
fn test_yaml_macro_sequences() {
    assert_eq!(yaml!([]), Value::Sequence(vec![]));

    let mixed = yaml!([1, "hello", true, null]);
    assert_eq!(
        mixed,
        Value::Sequence(vec![
            Value::Int(1),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_yaml_macro_mappings() {
    assert_eq!(yaml!({}), Value::Mapping(Mapping::new()));

    let simple = yaml!({
        "name": "Alice",
        "age": 30,
    });
    match simple {
        Value::Mapping(ref map) => {
            assert_eq!(map.len(), 2);
            assert_eq!(map.get("name"), Some(&Value::from("Alice")));
            assert_eq!(map.get("age"), Some(&Value::Int(30)));
        }
        _ => panic!("Expected mapping"),
    }
}

#[test]
fn test_yaml_macro_keeps_insertion_order() {
    let value = yaml!({ "zeta": 1, "alpha": 2, "mid": 3 });
    let keys: Vec<&str> = value
        .as_mapping()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_yaml_macro_matches_parsed_document() {
    let text = "\
server:
  host: 0.0.0.0
  port: 8080
  ratio: 0.75
users:
  - name: ada
  - guest
motd: ~
";
    let expected = yaml!({
        "server": { "host": "0.0.0.0", "port": 8080, "ratio": 0.75 },
        "users": [{ "name": "ada" }, "guest"],
        "motd": null
    });
    assert_eq!(from_str(text).unwrap(), expected);
}

#[test]
fn test_yaml_macro_expression_fallback() {
    let port: u16 = 9000;
    let tags = vec!["a", "b"];
    let value = yaml!({ "port": port, "tags": tags });
    assert_eq!(value.get("port"), Some(&Value::Int(9000)));
    assert_eq!(value.get("tags"), Some(&yaml!(["a", "b"])));
}
