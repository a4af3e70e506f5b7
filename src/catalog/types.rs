//! Catalog record types.
//!
//! Records come from an area exporter and are display-only. Every field is
//! optional: a missing field, or one holding the wrong JSON type, reads as
//! absent instead of failing the whole catalog.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Area metadata from the catalog header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AreaInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub file: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub credits: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub builders: Option<String>,
}

/// A single item record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "lenient")]
    pub vnum: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_descr: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub item_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub level: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub wear_flags: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub extra_flags: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub material: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub condition: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub weight: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub cost: Option<i64>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub affects: Vec<Affect>,
    #[serde(default, deserialize_with = "lenient")]
    pub values: Option<ItemValues>,
}

impl Item {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn short_descr(&self) -> &str {
        self.short_descr.as_deref().unwrap_or("")
    }

    /// Short description, or the keyword name when there is none.
    pub fn display_name(&self) -> &str {
        match self.short_descr.as_deref() {
            Some(short) if !short.is_empty() => short,
            _ => self.name(),
        }
    }

    pub fn item_type(&self) -> &str {
        self.item_type.as_deref().unwrap_or("")
    }

    pub fn level(&self) -> i64 {
        self.level.unwrap_or(0)
    }

    /// Wear flags, split on whitespace.
    pub fn wear_flags(&self) -> Vec<&str> {
        self.wear_flags
            .as_deref()
            .map(|flags| flags.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// A stat or flag effect attached to an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Affect {
    /// `normal` or `flag`.
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub modifier: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub extra: Option<String>,
}

impl Affect {
    pub fn is_normal(&self) -> bool {
        self.kind.as_deref() == Some("normal")
    }

    pub fn is_flag(&self) -> bool {
        self.kind.as_deref() == Some("flag")
    }

    /// Location, treating an empty string as absent.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }

    /// Extra payload, treating an empty string as absent.
    pub fn extra(&self) -> Option<&str> {
        self.extra.as_deref().filter(|e| !e.is_empty())
    }
}

/// Type-specific values. Which fields are set depends on the item type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemValues {
    #[serde(default, deserialize_with = "lenient")]
    pub weapon_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub number_of_dice: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub type_of_dice: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub damage_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub ac_pierce: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub ac_bash: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub ac_slash: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub ac_exotic: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub charges: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub spell: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(elements) = value else {
        return Ok(Vec::new());
    };
    Ok(elements
        .into_iter()
        .filter_map(|element| serde_json::from_value(element).ok())
        .collect())
}
