//! Catalog records produced from an area file.
//!
//! These serialize to the document shape read by [`crate::Catalog`].

use serde::Serialize;

/// A converted area: its header and every object, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaFile {
    pub area: AreaHeader,
    pub objects: Vec<AreaObject>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaHeader {
    pub name: String,
    pub file: String,
    pub credits: String,
    pub builders: String,
}

impl AreaHeader {
    pub(crate) fn unknown(file: &str) -> Self {
        Self {
            name: "Unknown".to_string(),
            file: file.to_string(),
            credits: "Unknown".to_string(),
            builders: "Unknown".to_string(),
        }
    }
}

/// One object prototype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaObject {
    pub vnum: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub level: i64,
    /// Space-separated flag names, or `none`
    pub wear_flags: String,
    pub extra_flags: String,
    pub material: String,
    pub condition: i64,
    pub weight: i64,
    pub cost: i64,
    pub short_descr: String,
    pub description: String,
    pub affects: Vec<AreaAffect>,
    pub values: ObjectValues,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AffectKind {
    Normal,
    Flag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaAffect {
    #[serde(rename = "type")]
    pub kind: AffectKind,
    pub location: String,
    pub modifier: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

/// The five object values, named by item type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ObjectValues {
    Armor {
        ac_pierce: i64,
        ac_bash: i64,
        ac_slash: i64,
        ac_exotic: i64,
        v4: i64,
    },
    Weapon {
        weapon_type: String,
        number_of_dice: i64,
        type_of_dice: i64,
        damage_type: String,
        flags: Vec<String>,
    },
    Materia {
        charges: i64,
        spell: String,
        v2: i64,
        v3: i64,
        v4: i64,
    },
    Other {
        v0: i64,
        v1: i64,
        v2: i64,
        v3: i64,
        v4: i64,
    },
}
