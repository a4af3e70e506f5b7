//! CLI output snapshot tests
//!
//! Tests the actual CLI binary output for reproducibility.

use crate::helpers::{sample_catalog_path, TestEnv};

#[test]
fn snapshot_markup_nested_scopes() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["markup", "{@bold {Rred{x{x"]);
    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(
        stdout.trim_end(),
        @r#"<strong>bold <span style="color: #ff6666">red</span></strong>"#
    );
}

#[test]
fn snapshot_markup_packed_escape() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["markup", "\\t[F530]ember"]);
    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(
        stdout.trim_end(),
        @r#"<span style="color: rgb(255, 153, 0)">ember</span>"#
    );
}

#[test]
fn snapshot_list_row() {
    let env = TestEnv::new();
    let catalog = sample_catalog_path();
    let catalog = catalog.to_str().unwrap();
    let (stdout, _stderr, exit_code) = env.run(&["list", catalog, "--search", "iron"]);
    assert_eq!(exit_code, 0);
    let row = stdout.lines().last().unwrap_or_default();
    assert_eq!(row, " 1201 |  20 | common    | armor        | an iron helm");
}

#[test]
fn unknown_subcommand_fails() {
    let env = TestEnv::new();
    let (_stdout, stderr, exit_code) = env.run(&["frobnicate"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("unrecognized subcommand"));
}
