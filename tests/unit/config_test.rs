//! Unit tests for config module

use itemview::Config;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.catalog.path, "json/aether.json");
    assert_eq!(config.catalog.min_wear_flags, 2);
    assert_eq!(config.render.title, "Item Viewer");
    assert!(config.markup.codes.is_empty());
}

#[test]
fn config_serialization_roundtrip() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn markup_codes_parse_from_toml() {
    let toml_str = r##"
[markup.codes]
"{o" = "#ffaa66"
"##;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.markup.codes.get("{o").map(String::as_str), Some("#ffaa66"));
    let translator = config.translator().unwrap();
    assert_eq!(translator.strip("{oamber{x"), "amber");
}

#[test]
fn empty_toml_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn home_relative_catalog_path_is_expanded() {
    let mut config = Config::default();
    config.catalog.path = "~/items/aether.json".to_string();
    let path = config.catalog_path();
    if let Some(home) = dirs::home_dir() {
        assert_eq!(path, home.join("items/aether.json"));
    }
}

#[test]
fn config_with_escaped_character_code_is_rejected() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[markup.codes]\n\"{&\" = \"#ffaa66\"\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("HTML-escaped"));
}
