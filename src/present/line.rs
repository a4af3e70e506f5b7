//! Stat lines shown on an item card.
//!
//! Each affect becomes at most one line. Weapon, armor and materia values
//! add their own lines after the affects.

use crate::catalog::{Affect, Item, ItemValues};

use super::rarity::RarityTier;
use super::stat::{modifier_text, stat_label, StatPolarity};

/// Visual class of a stat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatClass {
    Polarity(StatPolarity),
    Tier(RarityTier),
}

impl StatClass {
    pub fn css_class(self) -> &'static str {
        match self {
            StatClass::Polarity(polarity) => polarity.css_class(),
            StatClass::Tier(tier) => tier.css_class(),
        }
    }
}

/// One label/value row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLine {
    pub label: String,
    pub value: String,
    pub class: StatClass,
}

impl StatLine {
    fn new(label: impl Into<String>, value: impl Into<String>, class: StatClass) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            class,
        }
    }

    /// Classify an affect. Returns `None` for affects that are not shown.
    pub fn from_affect(affect: &Affect) -> Option<Self> {
        if affect.is_normal() {
            let location = affect.location()?;
            if is_spell_location(location) {
                if let Some(spell) = affect.extra() {
                    return Some(Self::new("Spell", spell, StatClass::Tier(RarityTier::Epic)));
                }
            }
            let modifier = affect.modifier?;
            return Some(Self::new(
                stat_label(location),
                modifier_text(modifier),
                StatClass::Polarity(StatPolarity::of(location, modifier)),
            ));
        }

        if affect.is_flag() {
            let kind = FlagKind::from_location(affect.location()?)?;
            let name = kind.strip_prefix(affect.extra()?);
            return Some(Self::new(
                kind.label(),
                name,
                StatClass::Tier(RarityTier::Epic),
            ));
        }

        None
    }
}

fn is_spell_location(location: &str) -> bool {
    matches!(location, "spellcast" | "spellaffect" | "spell_affect")
}

/// Flag affect category, taken from the `F<kind>:` location prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    Shield,
    Resist,
    Affect,
    Affect2,
    Immune,
    Vuln,
}

impl FlagKind {
    /// Parse `FS:none`, `FR:hp` and so on. Unknown kinds yield `None`.
    pub fn from_location(location: &str) -> Option<Self> {
        let kind = location.split(':').next().unwrap_or(location);
        match kind {
            "FS" => Some(FlagKind::Shield),
            "FR" => Some(FlagKind::Resist),
            "FA" => Some(FlagKind::Affect),
            "FB" => Some(FlagKind::Affect2),
            "FI" => Some(FlagKind::Immune),
            "FV" => Some(FlagKind::Vuln),
            _ => None,
        }
    }

    /// The `extra` prefix this kind carries.
    pub fn prefix(self) -> &'static str {
        match self {
            FlagKind::Shield => "shield:",
            FlagKind::Resist => "resist:",
            FlagKind::Affect => "affect:",
            FlagKind::Affect2 => "affect2:",
            FlagKind::Immune => "immune:",
            FlagKind::Vuln => "vuln:",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FlagKind::Shield => "Shield",
            FlagKind::Resist => "Resistance",
            FlagKind::Affect | FlagKind::Affect2 => "Affect",
            FlagKind::Immune => "Immunity",
            FlagKind::Vuln => "Vulnerability",
        }
    }

    /// Strip this kind's prefix, if present.
    pub fn strip_prefix(self, extra: &str) -> &str {
        extra.strip_prefix(self.prefix()).unwrap_or(extra)
    }
}

/// All stat lines for an item: affects first, then value-derived lines.
pub fn item_stat_lines(item: &Item) -> Vec<StatLine> {
    let mut lines: Vec<StatLine> = item
        .affects
        .iter()
        .filter_map(StatLine::from_affect)
        .collect();
    if let Some(values) = &item.values {
        lines.extend(value_lines(values));
    }
    lines
}

fn value_lines(values: &ItemValues) -> Vec<StatLine> {
    let mut lines = Vec::new();

    if let Some(weapon_type) = values.weapon_type.as_deref().filter(|w| !w.is_empty()) {
        let damage_type = values
            .damage_type
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("physical");
        let dice = format!(
            "{}d{} {}",
            values.number_of_dice.unwrap_or(0),
            values.type_of_dice.unwrap_or(0),
            damage_type
        );
        lines.push(StatLine::new(
            "Damage",
            dice,
            StatClass::Tier(RarityTier::Legendary),
        ));
        lines.push(StatLine::new(
            "Weapon Type",
            weapon_type,
            StatClass::Tier(RarityTier::Rare),
        ));
    }

    let nonzero = |v: Option<i64>| v.filter(|&v| v != 0);
    if [values.ac_pierce, values.ac_bash, values.ac_slash]
        .into_iter()
        .any(|v| nonzero(v).is_some())
    {
        let parts: Vec<String> = [
            ("Pierce", values.ac_pierce),
            ("Bash", values.ac_bash),
            ("Slash", values.ac_slash),
            ("Exotic", values.ac_exotic),
        ]
        .into_iter()
        .filter_map(|(name, v)| nonzero(v).map(|v| format!("{}: {}", name, v)))
        .collect();
        lines.push(StatLine::new(
            "Armor Class",
            parts.join(", "),
            StatClass::Tier(RarityTier::Rare),
        ));
    }

    if let Some(spell) = values.spell.as_deref().filter(|s| !s.is_empty()) {
        lines.push(StatLine::new(
            "Junction",
            spell,
            StatClass::Tier(RarityTier::Rare),
        ));
    }

    lines
}
