use std::fs;
use tempfile::tempdir;

use oreo_cli::commands::decode;
use oreo_core::to_bytes;
use serde_json::{json, Value};

const PAIR_SCHEMA: &str = r#"{"struct": [
  {"name": "name", "type": "string"},
  {"name": "scores", "type": {"seq": "i32"}}
]}"#;

fn write_file<P: AsRef<std::path::Path>>(p: P, s: &str) {
    fs::write(p, s.as_bytes()).unwrap();
}

#[test]
fn decode_to_json_file() {
    let td = tempdir().unwrap();
    let schema_path = td.path().join("schema.json");
    let in_path = td.path().join("in.oreo");
    let out_path = td.path().join("out.json");

    write_file(&schema_path, PAIR_SCHEMA);
    fs::write(&in_path, to_bytes(&("abc".to_string(), vec![-1i32, 300]))).unwrap();

    decode::execute(
        schema_path.to_str().unwrap(),
        in_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        None,
    )
    .unwrap();

    let decoded: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(decoded, json!({"name": "abc", "scores": [-1, 300]}));
}

#[test]
fn decode_allows_trailing_bytes() {
    let td = tempdir().unwrap();
    let schema_path = td.path().join("schema.json");
    let in_path = td.path().join("in.oreo");
    let out_path = td.path().join("out.json");

    write_file(&schema_path, PAIR_SCHEMA);
    let mut bytes = to_bytes(&("a".to_string(), Vec::<i32>::new())).to_vec();
    bytes.extend_from_slice(&[0xde, 0xad]);
    fs::write(&in_path, bytes).unwrap();

    decode::execute(
        schema_path.to_str().unwrap(),
        in_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        None,
    )
    .unwrap();

    let decoded: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(decoded, json!({"name": "a", "scores": []}));
}

#[test]
fn decode_truncated_input_fails() {
    let td = tempdir().unwrap();
    let schema_path = td.path().join("schema.json");
    let in_path = td.path().join("in.oreo");
    let out_path = td.path().join("out.json");

    write_file(&schema_path, PAIR_SCHEMA);
    let bytes = to_bytes(&("abc".to_string(), vec![1i32, 2, 3]));
    fs::write(&in_path, &bytes[..bytes.len() - 1]).unwrap();

    let result = decode::execute(
        schema_path.to_str().unwrap(),
        in_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        None,
    );
    assert!(result.is_err());
    assert!(!out_path.exists());
}

#[test]
fn decode_respects_limits_file() {
    let td = tempdir().unwrap();
    let schema_path = td.path().join("schema.json");
    let limits_path = td.path().join("limits.json");
    let in_path = td.path().join("in.oreo");
    let out_path = td.path().join("out.json");

    write_file(&schema_path, PAIR_SCHEMA);
    write_file(&limits_path, r#"{"max_string_len": 2}"#);
    fs::write(&in_path, to_bytes(&("abc".to_string(), Vec::<i32>::new()))).unwrap();

    let result = decode::execute(
        schema_path.to_str().unwrap(),
        in_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        Some(limits_path.to_str().unwrap()),
    );
    assert!(result.is_err());
}
