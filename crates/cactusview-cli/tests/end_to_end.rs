use std::io::Write;

use cactusview::{CactusviewOptions, run_main};

const SAMPLE: &str = r#"{
    "nets": [
        {
            "name": 1,
            "ends": [
                { "name": 10 },
                { "name": 11 },
                { "name": 12 }
            ],
            "atoms": [
                { "name": 20, "left": 10, "right": 11, "instances": 2 }
            ],
            "nested": [2]
        },
        {
            "name": 2,
            "ends": [
                { "name": 13, "instances": [
                    { "id": 100, "adjacency": 101 },
                    { "id": 101, "adjacency": 100 }
                ] }
            ]
        }
    ]
}"#;

fn sample_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    file
}

#[test]
fn renders_disk_document_to_dot() {
    let file = sample_file();
    let opts = CactusviewOptions {
        disk: file.path().display().to_string(),
        net: None,
        name_labels: false,
    };

    let out = run_main(&opts).unwrap();
    assert!(out.starts_with("digraph cactus {"));
    assert!(out.trim_end().ends_with('}'));

    // The stub end at the root, the atom's two instance edges, and the
    // leaf net's two adjacency edges all make it into the stream.
    assert!(out.contains("\"12\" ["));
    assert_eq!(out.matches("color=black, len=5,").count(), 2);
    assert_eq!(out.matches("color=grey,").count(), 2);
}

#[test]
fn explicit_net_renders_subtree() {
    let file = sample_file();
    let opts = CactusviewOptions {
        disk: file.path().display().to_string(),
        net: Some("2".to_string()),
        name_labels: false,
    };

    let out = run_main(&opts).unwrap();
    // Net 2 keeps its parent link, so no stub/cap nodes are declared;
    // only its leaf adjacencies are drawn, and net 1's atom never appears.
    assert_eq!(out.matches("color=grey,").count(), 2);
    assert!(!out.contains("len=5,"));
    assert!(!out.lines().any(|l| l.contains("\"13\" [") && !l.contains("->")));
}

#[test]
fn unknown_net_name_fails() {
    let file = sample_file();
    let opts = CactusviewOptions {
        disk: file.path().display().to_string(),
        net: Some("42".to_string()),
        name_labels: false,
    };
    assert!(run_main(&opts).is_err());
}

#[test]
fn missing_disk_file_fails() {
    let opts = CactusviewOptions {
        disk: "/no/such/disk.json".to_string(),
        net: None,
        name_labels: false,
    };
    assert!(run_main(&opts).is_err());
}
