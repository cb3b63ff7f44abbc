//! Specs for `occurs generate`.

use crate::prelude::*;

/// > generate writes a header and the requested number of records
#[test]
fn writes_requested_records() {
    let project = Project::empty();
    project.occurs().args(["generate", "-n", "25", "--length", "40"]).assert().success();

    let content = std::fs::read_to_string(project.file("wwwroot/Testing.csv")).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("Id,Value"));
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 25);
    for row in rows {
        let (id, value) = row.split_once(',').unwrap();
        assert_eq!(id.len(), 36);
        assert_eq!(value.trim_matches('"').chars().count(), 40);
    }
}

/// > generate replaces an existing record store
#[test]
fn replaces_existing_file() {
    let project = Project::with_records(&[(ID_A, "old value")]);
    project.occurs().args(["generate", "-n", "3", "--length", "5"]).assert().success();

    let content = std::fs::read_to_string(project.file("wwwroot/Testing.csv")).unwrap();
    assert!(!content.contains(ID_A));
    assert_eq!(content.lines().count(), 4);
}

/// > generated records are searchable
#[test]
fn generated_records_are_searchable() {
    let project = Project::empty();
    project.write("occurs.toml", "version = 1\n[generate]\nalphabet = \"a\"\n");
    project
        .occurs()
        .args(["generate", "-n", "2", "--length", "4", "--data", "gen.csv"])
        .assert()
        .success();

    project
        .occurs()
        .args(["search", "aa", "--data", "gen.csv"])
        .assert()
        .success()
        .stdout(predicates::str::contains("2 of 2 records matched (6 occurrences)"));
}

/// > An empty alphabet is a configuration error
#[test]
fn empty_alphabet_exits_two() {
    let project = Project::empty();
    project.write("occurs.toml", "version = 1\n[generate]\nalphabet = \"\"\n");

    project
        .occurs()
        .args(["generate", "-n", "1"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("generate.alphabet must contain at least one character"));

    assert!(!project.file("wwwroot/Testing.csv").exists());
}
