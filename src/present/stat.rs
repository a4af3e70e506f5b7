//! Stat names, polarity and modifier formatting.

use std::borrow::Cow;

/// Stats where a lower value is better (armor class, saving throws).
const LOWER_IS_BETTER: &[&str] = &[
    "ac",
    "armor",
    "saves",
    "savingrod",
    "savingpetri",
    "savingbreath",
    "savingspell",
    "savingpara",
];

/// Human-readable label for a stat key.
///
/// Unknown keys are returned with the first character uppercased.
pub fn stat_label(key: &str) -> Cow<'_, str> {
    let label = match key {
        "hitroll" => "Hit Roll",
        "damroll" => "Damage Roll",
        "strength" => "Strength",
        "dexterity" => "Dexterity",
        "constitution" => "Constitution",
        "intelligence" => "Intelligence",
        "wisdom" => "Wisdom",
        "hp" => "Health",
        "mana" => "Mana",
        "move" => "Movement",
        "armor" => "Armor Class",
        "ac" => "AC",
        "saves" => "Saves",
        "resistance" => "Resistance",
        "crit_chance" | "critchance" => "Critical Chance",
        "crit_damage" | "critdamage" => "Critical Damage",
        "penetration" => "Penetration",
        "insight" => "Insight",
        "celerity" => "Celerity",
        "recup" | "recuperation" => "Recovery",
        "endurance" => "Endurance",
        "prosperity" => "Prosperity",
        "alacrity" => "Alacrity",
        "conc" | "concentration" => "Concentration",
        _ => return capitalize(key),
    };
    Cow::Borrowed(label)
}

fn capitalize(key: &str) -> Cow<'_, str> {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => {
            Cow::Owned(first.to_uppercase().chain(chars).collect())
        }
        _ => Cow::Borrowed(key),
    }
}

/// Whether a modifier helps or hurts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatPolarity {
    Positive,
    Negative,
    Neutral,
}

impl StatPolarity {
    pub fn of(key: &str, modifier: i64) -> Self {
        if modifier == 0 {
            return StatPolarity::Neutral;
        }
        let good = if LOWER_IS_BETTER.contains(&key) {
            modifier < 0
        } else {
            modifier > 0
        };
        if good {
            StatPolarity::Positive
        } else {
            StatPolarity::Negative
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            StatPolarity::Positive => "positive",
            StatPolarity::Negative => "negative",
            StatPolarity::Neutral => "neutral",
        }
    }
}

/// Format a modifier with an explicit `+` when positive.
pub fn modifier_text(modifier: i64) -> String {
    if modifier > 0 {
        format!("+{}", modifier)
    } else {
        modifier.to_string()
    }
}
