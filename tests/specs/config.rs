//! Specs for `occurs.toml` handling.

use crate::prelude::*;

/// > Config is discovered in the working directory
#[test]
fn discovered_config_sets_data_path() {
    let project = Project::empty();
    project.write("occurs.toml", "version = 1\n[data]\npath = \"store.csv\"\n");
    project.write_csv("store.csv", "Id,Value", &[(ID_A, "needle")]);

    project
        .occurs()
        .args(["search", "needle"])
        .assert()
        .success()
        .stdout(predicates::str::contains(ID_A));
}

/// > Config can disable case folding
#[test]
fn config_case_sensitive() {
    let project = Project::with_records(&[(ID_A, "Needle")]);
    project.write("occurs.toml", "version = 1\n[search]\nignore_case = false\n");

    project.occurs().args(["search", "needle"]).assert().code(1);
    project.occurs().args(["search", "needle", "-i"]).assert().success();
}

/// > Custom column names are honored
#[test]
fn config_custom_columns() {
    let project = Project::empty();
    project.write(
        "occurs.toml",
        "version = 1\n[data]\nid_column = \"Key\"\nvalue_column = \"Body\"\n",
    );
    project.write_csv("wwwroot/Testing.csv", "Key,Body", &[(ID_B, "token")]);

    project
        .occurs()
        .args(["search", "token"])
        .assert()
        .success()
        .stdout(predicates::str::contains(ID_B));
}

/// > Relative data paths in a config resolve against the config's directory
#[test]
fn data_path_relative_to_config_from_subdirectory() {
    let project = Project::empty();
    project.write("occurs.toml", "version = 1\n[data]\npath = \"store.csv\"\n");
    project.write_csv("store.csv", "Id,Value", &[(ID_A, "needle")]);
    project.write("nested/deeper/.keep", "");

    project
        .occurs()
        .current_dir(project.file("nested/deeper"))
        .args(["search", "needle"])
        .assert()
        .success()
        .stdout(predicates::str::contains(ID_A));
}

/// > --data on the command line stays relative to the working directory
#[test]
fn data_flag_relative_to_working_directory() {
    let project = Project::empty();
    project.write("occurs.toml", "version = 1\n[data]\npath = \"store.csv\"\n");
    project.write_csv("nested/local.csv", "Id,Value", &[(ID_B, "needle")]);

    project
        .occurs()
        .current_dir(project.file("nested"))
        .args(["search", "needle", "--data", "local.csv"])
        .assert()
        .success()
        .stdout(predicates::str::contains(ID_B));
}

/// > Explicit --config is used instead of discovery
#[test]
fn explicit_config_flag() {
    let project = Project::empty();
    project.write("conf/alt.toml", "version = 1\n[data]\npath = \"alt.csv\"\n");
    project.write_csv("conf/alt.csv", "Id,Value", &[(ID_C, "alt")]);

    project
        .occurs()
        .args(["-C", "conf/alt.toml", "search", "alt"])
        .assert()
        .success()
        .stdout(predicates::str::contains(ID_C));
}

/// > Invalid config exits with code 2
#[test]
fn invalid_config_exits_two() {
    let project = Project::with_records(&[(ID_A, "x")]);
    project.write("occurs.toml", "version = 2\n");

    project
        .occurs()
        .args(["search", "x"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version"));
}

/// > Unknown keys warn but do not fail
#[test]
fn unknown_key_warns() {
    let project = Project::with_records(&[(ID_A, "x")]);
    project.write("occurs.toml", "version = 1\nmystery = 1\n");

    project
        .occurs()
        .args(["search", "x"])
        .assert()
        .success()
        .stderr(predicates::str::contains("unknown key `mystery`"));
}

/// > Misspelled keys inside a section warn with their dotted path
#[test]
fn unknown_nested_key_warns() {
    let project = Project::with_records(&[(ID_A, "Needle")]);
    project.write("occurs.toml", "version = 1\n[search]\nignorecase = false\n");

    project
        .occurs()
        .args(["search", "needle"])
        .assert()
        .success()
        .stderr(predicates::str::contains("unknown key `search.ignorecase`"));
}
