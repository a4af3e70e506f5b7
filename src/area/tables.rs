//! Lookup tables for area file numbers and bit flags.

/// Item type words known to the game. Anything else converts to `unknown`.
const ITEM_TYPES: &[&str] = &[
    "light", "scroll", "wand", "staff", "weapon", "shard", "ticket", "treasure", "armor",
    "potion", "clothing", "furniture", "trash", "container", "drink_con", "key", "food",
    "money", "boat", "corpse_npc", "corpse_pc", "fountain", "pill", "protect", "map", "portal",
    "warp_stone", "room_key", "gem", "jewelry", "jukebox", "quiver", "arrow", "poison",
    "disjunction", "safe_haven", "materia", "remote", "scryer", "exit", "minigame",
];

/// Wear flags, one per bit from `A`.
pub const WEAR_FLAGS: &[&str] = &[
    "take", "finger", "neck", "body", "head", "legs", "feet", "hands", "arms", "shield",
    "about", "waist", "wrist", "wield", "hold", "nosac", "wearfloat", "face", "lodge_leg",
    "lodge_arm", "lodge_rib", "materia", "nose", "belly", "ears", "tongue", "tattoo", "gadget",
    "grimoire", "familiar",
];

/// Extra flags, one per bit from `A`.
pub const EXTRA_FLAGS: &[&str] = &[
    "glow", "hum", "dark", "lock", "evil", "invis", "magic", "nodrop", "bless", "antigood",
    "antievil", "antineutral", "noremove", "inventory", "nopurge", "rotdeath", "visdeath",
    "noclone", "nonmetal", "nolocate", "meltdrop", "hadtimer", "sellextract", "clan",
    "burnproof", "nouncurse", "sticky", "lodged", "trap", "no_restring", "quest", "nogive",
];

/// Affect locations, indexed by number.
const APPLY_LOCATIONS: &[&str] = &[
    "none", "strength", "dexterity", "intelligence", "wisdom", "constitution", "sex", "class",
    "level", "age", "height", "weight", "mana", "hp", "move", "gold", "experience", "ac",
    "hitroll", "damroll", "saves", "savingrod", "savingpetri", "savingbreath", "savingspell",
    "spellaffect", "spellcast", "resistance", "critchance", "critdamage", "recuperation",
    "concentration", "prosperity", "endurance", "penetration", "alacrity", "insight",
    "celerity", "potency", "savingpara", "bounty",
];

const SHIELD_FLAGS: &[&str] = &[
    "living_armor", "sanctuary", "invisible", "protect_evil", "protect_good", "planeshift",
    "fireshield", "pass_door", "protect_voodoo", "iceshield", "lightningshield", "acidshield",
];

const AFFECT_FLAGS: &[&str] = &[
    "blind", "detect_evil", "detect_invis", "detect_magic", "detect_hidden", "detect_good",
    "unused_1", "unused_h", "faerie_fire", "infrared", "curse", "resistance", "poison",
    "unused_2", "unused_3", "sneak", "hide", "sleep", "charm", "flying", "unused_4", "haste",
    "calm", "plague", "weaken", "dark_vision", "berserk", "swim", "regeneration", "slow",
    "drained",
];

const AFFECT2_FLAGS: &[&str] = &[
    "shapeshift", "unused_1", "telepathy", "life_stealer", "unused_e", "lsd", "hold_person",
    "unused_2", "divine_intervention", "unused_3", "mental_disruption", "talon", "kamikaze",
    "spiritlink", "unused_4", "unused_5", "unused_6", "unused_7", "unused_8", "unused_9",
    "unused_10", "unused_11", "spectral_blade", "unused_12", "unused_13", "unused_14",
    "focus_chi",
];

/// Shared by immunity, resistance and vulnerability affects.
const DAMAGE_FLAGS: &[&str] = &[
    "summon", "charm", "magic", "weapon", "bash", "pierce", "slash", "fire", "cold",
    "lightning", "acid", "poison", "negative", "holy", "energy", "mental", "disease",
    "drowning", "light", "sound", "wood", "silver", "iron",
];

const WEAPON_FLAGS: &[&str] = &[
    "flaming", "frost", "vampiric", "sharp", "vorpal", "two_hands", "shocking", "poisoned",
];

/// Normalize an item type word.
pub fn item_type(word: &str) -> &'static str {
    ITEM_TYPES
        .iter()
        .find(|name| **name == word)
        .copied()
        .unwrap_or("unknown")
}

/// Normalize a weapon class word. `staff` is treated as a spear and unknown
/// classes as exotic.
pub fn weapon_type(word: &str) -> &'static str {
    match word {
        "sword" => "sword",
        "dagger" => "dagger",
        "spear" | "staff" => "spear",
        "mace" => "mace",
        "axe" => "axe",
        "flail" => "flail",
        "whip" => "whip",
        "polearm" => "polearm",
        "bow" => "bow",
        _ => "exotic",
    }
}

/// Names for the letters of a weapon flag word such as `AD`.
///
/// A bare `0` means no flags.
pub fn weapon_flag_names(word: &str) -> Vec<String> {
    if word.chars().all(|c| c == '0') {
        return Vec::new();
    }
    word.chars()
        .map(|c| match c {
            'A' => "flaming",
            'B' => "frost",
            'C' => "vampiric",
            'D' => "sharp",
            'E' => "vorpal",
            'F' => "two_hands",
            'G' => "shocking",
            'H' => "poison",
            'I' => "acid",
            'K' => "purify",
            _ => "unknown",
        })
        .map(String::from)
        .collect()
}

pub fn apply_location(location: i64) -> &'static str {
    usize::try_from(location)
        .ok()
        .and_then(|i| APPLY_LOCATIONS.get(i))
        .copied()
        .unwrap_or("unknown")
}

/// Condition percentage for a condition letter. Unknown letters are perfect.
pub fn condition(letter: Option<char>) -> i64 {
    match letter {
        Some('G') => 90,
        Some('A') => 75,
        Some('W') => 50,
        Some('D') => 25,
        Some('B') => 10,
        Some('R') => 0,
        _ => 100,
    }
}

/// Bit value of one flag letter: `A`-`Z` are bits 0-25, `a`-`z` bits 26-51.
pub fn flag_bit(letter: char) -> i64 {
    match letter {
        'A'..='Z' => 1 << (letter as u32 - 'A' as u32),
        'a'..='z' => 1 << (26 + letter as u32 - 'a' as u32),
        _ => 0,
    }
}

/// Space-separated names of every set bit, or `none`.
pub fn bit_names(bits: i64, table: &[&str]) -> String {
    let names: Vec<&str> = table
        .iter()
        .enumerate()
        .filter(|(i, _)| bits & (1 << i) != 0)
        .map(|(_, name)| *name)
        .collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(" ")
    }
}

fn first_bit_name(bits: i64, table: &[&'static str]) -> &'static str {
    table
        .iter()
        .enumerate()
        .find(|(i, _)| bits & (1 << i) != 0)
        .map(|(_, name)| *name)
        .unwrap_or("unknown")
}

/// The `extra` text of a flag affect, e.g. `shield:sanctuary`.
pub fn flag_affect_extra(kind: char, bits: i64) -> String {
    let (prefix, table) = match kind {
        'A' => ("affect", AFFECT_FLAGS),
        'B' => ("affect2", AFFECT2_FLAGS),
        'I' => ("immune", DAMAGE_FLAGS),
        'R' => ("resist", DAMAGE_FLAGS),
        'S' => ("shield", SHIELD_FLAGS),
        'V' => ("vuln", DAMAGE_FLAGS),
        'W' => ("weapon", WEAPON_FLAGS),
        _ => return format!("bitvector:{}", bits),
    };
    format!("{}:{}", prefix, first_bit_name(bits, table))
}
