//! Unit tests for catalog loading and filtering

use itemview::{Catalog, CatalogError, ItemFilter};

use crate::helpers::{fixtures_dir, sample_catalog, temp_fixture};

#[test]
fn fixture_skips_non_object_records() {
    let catalog = Catalog::load(fixtures_dir().join("catalog.json")).unwrap();
    assert_eq!(catalog.len(), 5);
    let area = catalog.area.as_ref().unwrap();
    assert_eq!(area.name.as_deref(), Some("{WAether{x"));
    assert_eq!(area.file.as_deref(), Some("aether.are"));
}

#[test]
fn wear_flag_filter_drops_single_flag_items() {
    let catalog = sample_catalog();
    let vnums: Vec<_> = catalog.items.iter().map(|i| i.vnum).collect();
    assert_eq!(vnums, vec![Some(1200), Some(1201), Some(1203), None]);
}

#[test]
fn malformed_fields_are_lenient() {
    let catalog = sample_catalog();
    let cloak = catalog.items.iter().find(|i| i.name() == "cloak silk").unwrap();
    assert_eq!(cloak.vnum, None);
    assert_eq!(cloak.level(), 0);
    assert!(cloak.affects.is_empty());
    assert_eq!(cloak.wear_flags(), vec!["take", "about"]);
}

#[test]
fn item_types_sorted_with_counts() {
    assert_eq!(
        sample_catalog().item_types(),
        vec![
            ("armor".to_string(), 2),
            ("materia".to_string(), 1),
            ("weapon".to_string(), 1),
        ]
    );
}

#[test]
fn filter_by_search_and_type() {
    let catalog = sample_catalog();

    let armor = ItemFilter::new("", Some("armor")).apply(&catalog.items);
    assert_eq!(armor.len(), 2);

    let iron = ItemFilter::new("IRON", Some("armor")).apply(&catalog.items);
    assert_eq!(iron.len(), 1);
    assert_eq!(iron[0].vnum, Some(1201));

    // Short descriptions are searched with their codes intact
    let crimson = ItemFilter::new("crimson", None).apply(&catalog.items);
    assert_eq!(crimson.len(), 1);

    assert!(ItemFilter::new("dragon", None).apply(&catalog.items).is_empty());
}

#[test]
fn from_reader_matches_load() {
    let (_temp_dir, path) = temp_fixture("catalog.json");
    let file = std::fs::File::open(&path).unwrap();
    assert_eq!(
        Catalog::from_reader(file).unwrap(),
        Catalog::load(&path).unwrap()
    );
}

#[test]
fn load_errors() {
    let missing = Catalog::load(fixtures_dir().join("missing.json")).unwrap_err();
    assert!(matches!(missing, CatalogError::ReadFile { .. }));

    assert!(matches!(
        Catalog::parse_str("not json"),
        Err(CatalogError::Json(_))
    ));
    assert!(matches!(
        Catalog::parse_str("[]"),
        Err(CatalogError::NotAnObject)
    ));
    assert!(matches!(
        Catalog::parse_str(r#"{"objects": {}}"#),
        Err(CatalogError::MissingObjects)
    ));
}

#[test]
fn empty_objects_is_an_empty_catalog() {
    let catalog = Catalog::parse_str(r#"{"objects": []}"#).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.area.is_none());
    assert!(catalog.item_types().is_empty());
}
