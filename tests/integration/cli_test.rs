//! End-to-end tests for each subcommand

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

use crate::helpers::{sample_area_path, sample_catalog_path, TestEnv};

fn itemview(env: &TestEnv) -> Command {
    let mut cmd = Command::cargo_bin("itemview").unwrap();
    cmd.arg("--config")
        .arg(&env.config_path)
        .env("NO_COLOR", "1")
        .env_remove("ITEMVIEW_LOG");
    cmd
}

#[test]
fn render_writes_page_to_file() {
    let env = TestEnv::new();
    let output = env.path().join("out").join("items.html");

    itemview(&env)
        .arg("render")
        .arg(sample_catalog_path())
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Item Viewer</title>"));
    assert!(html.contains("Aether - Showing 4 of 4 items"));
    assert!(!html.contains("data-vnum=\"1202\""));
}

#[test]
fn render_to_stdout_with_filter_and_title() {
    let env = TestEnv::new();
    itemview(&env)
        .arg("render")
        .arg(sample_catalog_path())
        .args(["--type", "armor", "--search", "iron", "--title", "Armory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Armory</h1>"))
        .stdout(predicate::str::contains("Showing 1 of 4 items"))
        .stdout(predicate::str::contains("data-vnum=\"1201\""));
}

#[test]
fn render_uses_configured_catalog_and_title() {
    let env = TestEnv::new();
    env.write_config(&format!(
        "[catalog]\npath = {:?}\n\n[render]\ntitle = \"Aether Items\"\n",
        sample_catalog_path().display().to_string()
    ));

    itemview(&env)
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>Aether Items</title>"))
        .stdout(predicate::str::contains("Showing 4 of 4 items"));
}

#[test]
fn render_min_wear_flags_from_config() {
    let env = TestEnv::new();
    env.write_config("[catalog]\nmin_wear_flags = 0\n");

    itemview(&env)
        .arg("render")
        .arg(sample_catalog_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 5 of 5 items"));
}

#[test]
fn render_missing_catalog_writes_error_page_and_fails() {
    let env = TestEnv::new();
    let output = env.path().join("items.html");

    itemview(&env)
        .arg("render")
        .arg(env.path().join("missing.json"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("Error loading items. Please check if the JSON file is accessible."));
}

#[test]
fn list_shows_plain_names() {
    let env = TestEnv::new();
    itemview(&env)
        .arg("list")
        .arg(sample_catalog_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Items: 4 of 4"))
        .stdout(predicate::str::contains("a crimson blade"))
        .stdout(predicate::str::contains("{R").not());
}

#[test]
fn ls_alias_with_no_matches() {
    let env = TestEnv::new();
    itemview(&env)
        .arg("ls")
        .arg(sample_catalog_path())
        .args(["-s", "dragon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items match your search."));
}

#[test]
fn types_lists_counts() {
    let env = TestEnv::new();
    itemview(&env)
        .arg("types")
        .arg(sample_catalog_path())
        .assert()
        .success()
        .stdout("armor    2\nmateria  1\nweapon   1\n");
}

#[test]
fn markup_from_argument() {
    let env = TestEnv::new();
    itemview(&env)
        .args(["markup", "{Rred{x"])
        .assert()
        .success()
        .stdout("<span style=\"color: #ff6666\">red</span>\n");
}

#[test]
fn markup_from_stdin_plain() {
    let env = TestEnv::new();
    itemview(&env)
        .args(["markup", "--plain"])
        .write_stdin("{@bold{x text\n")
        .assert()
        .success()
        .stdout("bold text\n");
}

#[test]
fn markup_uses_configured_codes() {
    let env = TestEnv::new();
    env.write_config("[markup.codes]\n\"{o\" = \"#ffaa66\"\n");
    itemview(&env)
        .args(["markup", "{oamber"])
        .assert()
        .success()
        .stdout("<span style=\"color: #ffaa66\">amber</span>\n");
}

#[test]
fn invalid_config_is_reported() {
    let env = TestEnv::new();
    env.write_config("[markup.codes]\n\"{o\" = \"orange\"\n");
    itemview(&env)
        .args(["markup", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn convert_writes_catalog_that_renders() {
    let env = TestEnv::new();
    let json = env.path().join("json").join("aether.json");

    itemview(&env)
        .arg("convert")
        .arg(sample_area_path())
        .arg("-o")
        .arg(&json)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    itemview(&env)
        .arg("render")
        .arg(&json)
        .assert()
        .success()
        .stdout(predicate::str::contains("Aether - Showing 3 of 3 items"))
        .stdout(predicate::str::contains("data-vnum=\"1202\""));
}

#[test]
fn convert_to_stdout() {
    let env = TestEnv::new();
    itemview(&env)
        .arg("convert")
        .arg(sample_area_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"spell\": \"fire bolt\""))
        .stdout(predicate::str::contains("\"extra\": \"shield:sanctuary\""));
}

#[test]
fn convert_missing_file_fails() {
    let env = TestEnv::new();
    itemview(&env)
        .arg("convert")
        .arg(env.path().join("missing.are"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to convert"));
}

#[test]
fn config_path_and_init() {
    let env = TestEnv::new();

    itemview(&env)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    itemview(&env)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    let written = fs::read_to_string(&env.config_path).unwrap();
    assert!(written.contains("min_wear_flags = 2"));

    itemview(&env)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn config_show_prints_toml() {
    let env = TestEnv::new();
    itemview(&env)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[catalog]"))
        .stdout(predicate::str::contains("title = \"Item Viewer\""));
}

#[test]
fn completions_generate_script() {
    let env = TestEnv::new();
    itemview(&env)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("itemview"));
}
