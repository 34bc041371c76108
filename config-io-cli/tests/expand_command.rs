//! Integration tests for the `expand` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;
use serde_json::json;

const SWEEP: &str = "\
key1: [value1, value2]
key1_expand: true
key2:
  key3: [value3, value4]
  key3_expand: true
";

#[test]
fn test_expand_prints_all_variants() {
    let env = TestEnv::new();
    env.write("sweep.yaml", SWEEP);

    let variants = env.json_of(&["expand", "sweep.yaml", "--format", "json"]);
    let variants = variants.as_array().unwrap();
    assert_eq!(variants.len(), 4);
    assert_eq!(
        variants[0],
        json!({
            "key1": "value1",
            "key1_expand": true,
            "key2": {"key3": "value3", "key3_expand": true},
        })
    );
    assert_eq!(variants[3]["key1"], json!("value2"));
    assert_eq!(variants[3]["key2"]["key3"], json!("value4"));
}

#[test]
fn test_expand_without_markers_yields_one_variant() {
    let env = TestEnv::new();
    env.write("plain.json", r#"{"key1": ["value1", "value2"]}"#);

    let variants = env.json_of(&["expand", "plain.json", "--format", "json"]);
    assert_eq!(variants, json!([{"key1": ["value1", "value2"]}]));
}

#[test]
fn test_expand_count() {
    let env = TestEnv::new();
    env.write("sweep.yaml", SWEEP);

    let stdout = env.stdout_of(&["expand", "sweep.yaml", "--count"]);
    assert_eq!(stdout.trim(), "4");
}

#[test]
fn test_expand_at_sub_node() {
    let env = TestEnv::new();
    env.write("sweep.yaml", SWEEP);

    let variants = env.json_of(&["expand", "sweep.yaml", "--at", "key2", "--format", "json"]);
    assert_eq!(
        variants,
        json!([
            {"key3": "value3", "key3_expand": true},
            {"key3": "value4", "key3_expand": true},
        ])
    );
}

#[test]
fn test_expand_suffix_flag() {
    let env = TestEnv::new();
    env.write("sweep.yaml", "seed: [1, 2, 3]\nseed_sweep: true\nlr: [0.1, 0.2]\nlr_expand: true\n");

    let stdout = env.stdout_of(&["expand", "sweep.yaml", "--suffix", "_sweep", "--count"]);
    assert_eq!(stdout.trim(), "3");
}

#[test]
fn test_expand_suffix_from_env() {
    let env = TestEnv::new();
    env.write("sweep.yaml", "seed: [1, 2, 3]\nseed_sweep: true\n");

    env.command()
        .env("CONFIG_IO_EXPAND_SUFFIX", "_sweep")
        .args(["expand", "sweep.yaml", "--count"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_document_suffix_overrides_flag() {
    let env = TestEnv::new();
    env.write(
        "sweep.yaml",
        "expand_suffix: _grid\nseed: [1, 2]\nseed_grid: true\nlr: [0.1, 0.2, 0.3]\nlr_sweep: true\n",
    );

    let stdout = env.stdout_of(&["expand", "sweep.yaml", "--suffix", "_sweep", "--count"]);
    assert_eq!(stdout.trim(), "2");
}

#[test]
fn test_expand_through_default_chain() {
    let env = TestEnv::new();
    env.write("base.yaml", "seed: [1, 2]\nseed_expand: true\nlr: 0.1\n");
    env.write("run.yaml", "default: base.yaml\nlr: 0.01\n");

    let variants = env.json_of(&["expand", "run.yaml", "--format", "json"]);
    let variants = variants.as_array().unwrap();
    assert_eq!(variants.len(), 2);
    assert!(variants.iter().all(|v| v["lr"] == json!(0.01)));
}

#[test]
fn test_expand_output_dir() {
    let env = TestEnv::new();
    env.write("sweep.yaml", SWEEP);

    env.command()
        .args(["expand", "sweep.yaml", "--output-dir", "out", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("4 variant(s)"));

    let out = env.path().join("out");
    for i in 0..4 {
        let file = out.join(format!("variant-{i:04}.json"));
        assert!(file.exists(), "missing {}", file.display());
    }
    assert!(!out.join("variant-0004.json").exists());

    let first: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.join("variant-0000.json")).unwrap())
            .unwrap();
    assert_eq!(first["key1"], json!("value1"));
}

#[test]
fn test_expand_output_dir_yaml_default() {
    let env = TestEnv::new();
    env.write("sweep.yaml", "seed: [1, 2]\nseed_expand: true\n");

    env.command()
        .args(["--quiet", "expand", "sweep.yaml", "--output-dir", "out"])
        .assert()
        .success();

    let text = std::fs::read_to_string(env.path().join("out/variant-0001.yaml")).unwrap();
    let variant: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
    assert_eq!(variant["seed"].as_i64(), Some(2));
}
