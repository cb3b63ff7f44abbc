//! Specs for `occurs search`.

use crate::prelude::*;

fn sample() -> Project {
    Project::with_records(&[
        (ID_A, "ababab"),
        (ID_B, "nothing to see"),
        (ID_C, "AB and ab"),
    ])
}

/// > Records with at least one occurrence are listed with their counts
#[test]
fn lists_matching_records_with_counts() {
    sample()
        .occurs()
        .args(["search", "ab"])
        .assert()
        .success()
        .stdout(predicates::str::contains(format!("{ID_A}\t3\n")))
        .stdout(predicates::str::contains(format!("{ID_C}\t2\n")))
        .stdout(predicates::str::contains(ID_B).not())
        .stdout(predicates::str::contains("2 of 3 records matched (5 occurrences)"));
}

/// > Case-sensitive search never matches differing case
#[test]
fn case_sensitive_search() {
    sample()
        .occurs()
        .args(["search", "AB", "--case-sensitive"])
        .assert()
        .success()
        .stdout(predicates::str::contains(format!("{ID_C}\t1\n")))
        .stdout(predicates::str::contains(ID_A).not());
}

/// > Overlapping occurrences are counted
#[test]
fn counts_overlapping_occurrences() {
    let project = Project::with_records(&[(ID_A, "aaaa")]);
    project
        .occurs()
        .args(["search", "aa"])
        .assert()
        .success()
        .stdout(predicates::str::contains(format!("{ID_A}\t3\n")));
}

/// > No hits exits with code 1
#[test]
fn no_matches_exits_one() {
    sample()
        .occurs()
        .args(["search", "xyz"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("0 of 3 records matched"));
}

/// > Empty keyword returns no results without reading the record store
#[test]
fn empty_keyword_returns_nothing() {
    let project = Project::empty();
    project
        .occurs()
        .args(["search", "", "-o", "json"])
        .assert()
        .code(1)
        .stdout(predicates::str::diff("[]\n"));
}

/// > JSON output is an array of {id, stringContent, matchTimes}
#[test]
fn json_output() {
    let output = sample().occurs().args(["search", "ab", "-o", "json"]).output().unwrap();
    assert!(output.status.success());

    let hits: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0]["id"], ID_A);
    assert_eq!(hits[0]["stringContent"], "ababab");
    assert_eq!(hits[0]["matchTimes"], 3);
    assert_eq!(hits[1]["id"], ID_C);
    assert_eq!(hits[1]["matchTimes"], 2);
}

/// > --show-content prints the value after the count
#[test]
fn show_content() {
    sample()
        .occurs()
        .args(["search", "ab", "--show-content"])
        .assert()
        .success()
        .stdout(predicates::str::contains(format!("{ID_C}\t2\tAB and ab\n")));
}

/// > --limit truncates the listing but not the summary
#[test]
fn limit_truncates_listing() {
    sample()
        .occurs()
        .args(["search", "ab", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("... 1 more"))
        .stdout(predicates::str::contains("2 of 3 records matched"));
}

/// > --data selects another record store
#[test]
fn data_flag_selects_file() {
    let project = Project::empty();
    project.write_csv("other.csv", "Id,Value", &[(ID_B, "keyword keyword")]);
    project
        .occurs()
        .args(["search", "KEYWORD", "--data", "other.csv"])
        .assert()
        .success()
        .stdout(predicates::str::contains(format!("{ID_B}\t2\n")));
}

/// > Missing record store is an internal error (exit 3)
#[test]
fn missing_data_file_fails() {
    Project::empty()
        .occurs()
        .args(["search", "ab"])
        .assert()
        .code(3)
        .stderr(predicates::str::contains("failed to load records"));
}

/// > Malformed ids are reported with their line
#[test]
fn invalid_id_fails() {
    let project = Project::with_records(&[("not-a-uuid", "ab")]);
    project
        .occurs()
        .args(["search", "ab"])
        .assert()
        .code(3)
        .stderr(predicates::str::contains("not-a-uuid"));
}

/// > --verbose writes diagnostics to stderr only
#[test]
fn verbose_writes_to_stderr() {
    sample()
        .occurs()
        .args(["search", "ab", "--verbose"])
        .assert()
        .success()
        .stderr(predicates::str::contains("Search:"))
        .stdout(predicates::str::contains("Search:").not());
}
