//! Unit tests for HTML card and page rendering

use itemview::render::{render_catalog, render_error_page, LOAD_ERROR_MESSAGE, NO_RESULTS_MESSAGE};
use itemview::{CardRenderer, ItemFilter};

use crate::helpers::{sample_catalog, translator};

#[test]
fn armor_card_full_markup() {
    let catalog = sample_catalog();
    let helm = catalog.items.iter().find(|i| i.vnum == Some(1201)).unwrap();
    let t = translator();

    let expected = concat!(
        "<div class=\"item-card\" data-vnum=\"1201\">\n",
        "  <div class=\"item-name\">an <span style=\"color: #666666\">iron</span> helm</div>\n",
        "  <div class=\"item-type\">armor</div>\n",
        "  <div class=\"item-stats\">\n",
        "    <div class=\"stat-line positive\"><span>AC</span><span>-10</span></div>\n",
        "    <div class=\"stat-line rare\"><span>Armor Class</span><span>Pierce: 5, Bash: 5, Slash: 5</span></div>\n",
        "  </div>\n",
        "  <div class=\"item-flags\"><span class=\"flag\">take</span><span class=\"flag\">head</span></div>\n",
        "  <div class=\"item-description\">A dented helm &amp; visor.</div>\n",
        "</div>\n",
    );
    assert_eq!(CardRenderer::new(&t).card(helm), expected);
}

#[test]
fn packed_color_in_card_name() {
    let catalog = sample_catalog();
    let materia = catalog.items.iter().find(|i| i.vnum == Some(1203)).unwrap();
    let t = translator();
    let html = CardRenderer::new(&t).card(materia);

    assert!(html.starts_with("<div class=\"item-card rare\" data-vnum=\"1203\">"));
    assert!(html.contains(
        "<div class=\"item-name\">an <span style=\"color: rgb(255, 153, 0)\">ember</span> materia</div>"
    ));
}

#[test]
fn card_without_vnum_has_no_data_attribute() {
    let catalog = sample_catalog();
    let cloak = catalog.items.iter().find(|i| i.vnum.is_none()).unwrap();
    let t = translator();
    let html = CardRenderer::new(&t).card(cloak);
    assert!(html.starts_with("<div class=\"item-card\">\n"));
    assert!(!html.contains("item-stats"));
}

#[test]
fn catalog_page_summary_uses_plain_area_name() {
    let t = translator();
    let html = render_catalog(&sample_catalog(), &ItemFilter::default(), &t, "Item Viewer");
    assert!(html.contains("<div class=\"summary\">Aether - Showing 4 of 4 items</div>"));
    assert_eq!(html.matches("<div class=\"item-card").count(), 4);
}

#[test]
fn catalog_page_preserves_catalog_order() {
    let t = translator();
    let html = render_catalog(&sample_catalog(), &ItemFilter::default(), &t, "Item Viewer");
    let sword = html.find("data-vnum=\"1200\"").unwrap();
    let helm = html.find("data-vnum=\"1201\"").unwrap();
    let materia = html.find("data-vnum=\"1203\"").unwrap();
    assert!(sword < helm && helm < materia);
}

#[test]
fn filtered_to_nothing() {
    let t = translator();
    let html = render_catalog(
        &sample_catalog(),
        &ItemFilter::new("", Some("potion")),
        &t,
        "Item Viewer",
    );
    assert!(html.contains("Showing 0 of 4 items"));
    assert!(html.contains(NO_RESULTS_MESSAGE));
}

#[test]
fn error_page() {
    let html = render_error_page("Item Viewer");
    assert!(html.contains("<title>Item Viewer</title>"));
    assert!(html.contains(LOAD_ERROR_MESSAGE));
}
