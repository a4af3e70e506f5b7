//! Unit tests for stat lines and rarity

use itemview::present::{item_stat_lines, StatClass, StatLine, StatPolarity};
use itemview::{Item, RarityTier};

use crate::helpers::sample_catalog;

fn by_vnum(vnum: i64) -> Item {
    sample_catalog()
        .items
        .into_iter()
        .find(|i| i.vnum == Some(vnum))
        .unwrap_or_else(|| panic!("No item {}", vnum))
}

fn summary(lines: &[StatLine]) -> Vec<(String, String, &'static str)> {
    lines
        .iter()
        .map(|l| (l.label.clone(), l.value.clone(), l.class.css_class()))
        .collect()
}

fn row(label: &str, value: &str, class: &'static str) -> (String, String, &'static str) {
    (label.to_string(), value.to_string(), class)
}

#[test]
fn weapon_lines() {
    let sword = by_vnum(1200);
    assert_eq!(RarityTier::for_item(&sword), RarityTier::Epic);
    assert_eq!(
        summary(&item_stat_lines(&sword)),
        vec![
            row("Hit Roll", "+5", "positive"),
            row("Damage Roll", "+4", "positive"),
            row("Shield", "sanctuary", "epic"),
            row("Damage", "3d8 slash", "legendary"),
            row("Weapon Type", "sword", "rare"),
        ]
    );
}

#[test]
fn armor_lines_treat_negative_ac_as_good() {
    let helm = by_vnum(1201);
    assert_eq!(RarityTier::for_item(&helm), RarityTier::None);
    assert_eq!(
        summary(&item_stat_lines(&helm)),
        vec![
            row("AC", "-10", "positive"),
            row("Armor Class", "Pierce: 5, Bash: 5, Slash: 5", "rare"),
        ]
    );
}

#[test]
fn materia_lines() {
    let materia = by_vnum(1203);
    assert_eq!(RarityTier::for_item(&materia), RarityTier::Rare);
    assert_eq!(
        summary(&item_stat_lines(&materia)),
        vec![
            row("Spell", "armor", "epic"),
            row("Mana", "+20", "positive"),
            row("Junction", "fireball", "rare"),
        ]
    );
}

#[test]
fn item_without_affects_or_values_has_no_lines() {
    assert!(item_stat_lines(&Item::default()).is_empty());
}

#[test]
fn polarity_of_saving_throws() {
    assert_eq!(StatPolarity::of("savingspell", -2), StatPolarity::Positive);
    assert_eq!(StatPolarity::of("savingspell", 2), StatPolarity::Negative);
    assert_eq!(StatPolarity::of("hp", 0), StatPolarity::Neutral);
    assert_eq!(
        StatClass::Polarity(StatPolarity::Negative).css_class(),
        "negative"
    );
}

#[test]
fn rarity_boundaries() {
    assert_eq!(RarityTier::classify(79, 3), RarityTier::None);
    assert_eq!(RarityTier::classify(80, 0), RarityTier::Rare);
    assert_eq!(RarityTier::classify(100, 0), RarityTier::Epic);
    assert_eq!(RarityTier::classify(120, 0), RarityTier::Legendary);
    assert_eq!(RarityTier::None.to_string(), "common");
    assert_eq!(RarityTier::Legendary.to_string(), "legendary");
}
