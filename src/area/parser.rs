//! Area file parser.
//!
//! # Format
//!
//! ```text
//! #AREADATA                  <- optional header (Name, Builders, Credits)
//! Name Aether~
//! End
//!
//! #OBJECTS
//! #1200                      <- vnum, then name~ short~ long~ material~
//! ...
//! #0                         <- end of section
//!
//! #$                         <- end of file
//! ```
//!
//! Only `#AREA`, `#AREADATA` and `#OBJECTS` are read. Other sections are
//! skipped. Malformed input never fails the conversion: parsing stops with
//! a warning and keeps every object read so far.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::error::AreaError;
use super::reader::AreaReader;
use super::tables;
use super::types::{AffectKind, AreaAffect, AreaFile, AreaHeader, AreaObject, ObjectValues};

/// Section names that end a skipped section.
const SECTIONS: &[&str] = &[
    "$", "AREA", "AREADATA", "HELPS", "MOBILES", "MOBOLD", "MOBPROGS", "OBJECTS", "OBJOLD",
    "RESETS", "ROOMS", "SHOPS", "SPECIALS",
];

impl AreaFile {
    /// Convert an area file from a path.
    ///
    /// The file name becomes `area.file`. Bytes that are not valid UTF-8
    /// are replaced.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AreaError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| AreaError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = ?path, bytes = bytes.len(), "Read area file");
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::parse_str(&String::from_utf8_lossy(&bytes), &file))
    }

    /// Convert area file text. `file` is recorded as `area.file`.
    pub fn parse_str(text: &str, file: &str) -> Self {
        let mut reader = AreaReader::new(text);
        let mut area = AreaFile {
            area: AreaHeader::unknown(file),
            objects: Vec::new(),
        };

        loop {
            match reader.letter() {
                Some('#') => {}
                Some(found) => {
                    warn!(line = reader.line(), found = %found, "Expected '#' before section name");
                    break;
                }
                None => {
                    warn!("Area file ended without #$");
                    break;
                }
            }

            let section = reader.word();
            match section.as_str() {
                "$" => break,
                "AREA" => read_area(&mut reader, &mut area.area),
                "AREADATA" => read_area_data(&mut reader, &mut area.area),
                "OBJECTS" => read_objects(&mut reader, &mut area.objects),
                name if SECTIONS.contains(&name) => {
                    debug!(section = name, "Skipping section");
                    reader.skip_to_marker(SECTIONS);
                }
                name => {
                    warn!(line = reader.line(), section = name, "Skipping unknown section");
                    reader.skip_to_marker(SECTIONS);
                }
            }
        }

        debug!(objects = area.objects.len(), "Converted area");
        area
    }

    /// Encode as a pretty-printed catalog document.
    pub fn to_json_pretty(&self) -> Result<String, AreaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Old-style header: `file~ name~ credits~` followed by the vnum range.
fn read_area(reader: &mut AreaReader<'_>, header: &mut AreaHeader) {
    if reader.peek_letter() != Some('#') {
        reader.string();
        header.name = reader.string();
        header.credits = reader.string();
    }
    reader.skip_to_marker(SECTIONS);
}

/// Keyed header lines up to `End`.
fn read_area_data(reader: &mut AreaReader<'_>, header: &mut AreaHeader) {
    while !matches!(reader.peek_letter(), None | Some('#')) {
        match reader.word().as_str() {
            "End" => break,
            "Name" => header.name = reader.string(),
            "Builders" => header.builders = reader.string(),
            "Credits" => header.credits = reader.string(),
            _ => reader.to_eol(),
        }
    }
}

fn read_objects(reader: &mut AreaReader<'_>, objects: &mut Vec<AreaObject>) {
    loop {
        if reader.letter() != Some('#') {
            warn!(line = reader.line(), "Expected '#' before object vnum");
            reader.skip_to_marker(SECTIONS);
            return;
        }
        let vnum = reader.number();
        if vnum == 0 {
            return;
        }
        let object = read_object(reader, vnum);
        debug!(vnum, item_type = %object.item_type, "Read object");
        objects.push(object);
    }
}

fn read_object(reader: &mut AreaReader<'_>, vnum: i64) -> AreaObject {
    let name = reader.string();
    let short_descr = reader.string();
    let description = reader.string();
    let material = reader.string();
    let item_type = tables::item_type(&reader.word());
    let extra_flags = reader.flag();
    let wear_flags = reader.flag();
    let values = read_values(reader, item_type);
    let level = reader.number();
    let weight = reader.number();
    let cost = reader.number();
    let condition = tables::condition(reader.letter());
    let affects = read_affects(reader, vnum);

    AreaObject {
        vnum,
        name,
        item_type: item_type.to_string(),
        level,
        wear_flags: tables::bit_names(wear_flags, tables::WEAR_FLAGS),
        extra_flags: tables::bit_names(extra_flags, tables::EXTRA_FLAGS),
        material,
        condition,
        weight,
        cost,
        short_descr,
        description,
        affects,
        values,
    }
}

fn read_values(reader: &mut AreaReader<'_>, item_type: &str) -> ObjectValues {
    match item_type {
        "materia" => ObjectValues::Materia {
            charges: reader.number(),
            spell: reader.quoted('\'').unwrap_or_default(),
            v2: reader.number(),
            v3: reader.number(),
            v4: reader.number(),
        },
        "weapon" => ObjectValues::Weapon {
            weapon_type: tables::weapon_type(&reader.word()).to_string(),
            number_of_dice: reader.number(),
            type_of_dice: reader.number(),
            damage_type: reader.word(),
            flags: tables::weapon_flag_names(&reader.word()),
        },
        "armor" => ObjectValues::Armor {
            ac_pierce: reader.flag(),
            ac_bash: reader.flag(),
            ac_slash: reader.flag(),
            ac_exotic: reader.flag(),
            v4: reader.flag(),
        },
        _ => ObjectValues::Other {
            v0: reader.flag(),
            v1: reader.flag(),
            v2: reader.flag(),
            v3: reader.flag(),
            v4: reader.flag(),
        },
    }
}

/// Affects and other trailing records, up to the next `#`.
fn read_affects(reader: &mut AreaReader<'_>, vnum: i64) -> Vec<AreaAffect> {
    let mut affects = Vec::new();
    while !matches!(reader.peek_letter(), None | Some('#')) {
        match reader.letter() {
            Some('A') => {
                let location = tables::apply_location(reader.number());
                let modifier = reader.number();
                let extra = if matches!(location, "spellaffect" | "spellcast")
                    && reader.peek_letter() == Some('N')
                {
                    reader.letter();
                    Some(reader.string())
                } else {
                    None
                };
                affects.push(AreaAffect {
                    kind: AffectKind::Normal,
                    location: location.to_string(),
                    modifier,
                    extra,
                });
            }
            Some('F') => {
                let kind = reader.letter().unwrap_or(' ');
                let location = tables::apply_location(reader.number());
                let modifier = reader.number();
                let bits = reader.flag();
                affects.push(AreaAffect {
                    kind: AffectKind::Flag,
                    location: format!("F{}:{}", kind, location),
                    modifier,
                    extra: Some(tables::flag_affect_extra(kind, bits)),
                });
            }
            // Extra description: keyword~ text~
            Some('E') => {
                reader.string();
                reader.string();
            }
            Some('N') => {
                reader.string();
            }
            Some('R') => {
                reader.number();
                reader.number();
            }
            Some('S') => {
                reader.number();
                reader.number();
                reader.word();
            }
            Some(other) => {
                debug!(vnum, line = reader.line(), record = %other, "Skipping object record");
                reader.to_eol();
            }
            None => break,
        }
    }
    affects
}
