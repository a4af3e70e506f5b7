//! Legacy color code table.
//!
//! A [`CodeTable`] is an ordered list of `(code, action)` pairs. Order
//! matters: the translator applies one rule per entry, in table order, and
//! each rule rewrites every occurrence of its code before the next rule runs.
//!
//! # Duplicate codes
//!
//! Tables are built from ordered sequences that may define the same code
//! twice. The entry keeps the position of its *first* definition and the
//! action of its *last* definition.

use std::fmt;

use super::error::MarkupError;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` color. The leading `#` is required.
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#')?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Decode a packed color digit triple like `"050"`.
    ///
    /// Each digit must be in `0..=5` and is scaled by 51, so `5` maps to 255.
    pub fn from_packed(digits: &str) -> Option<Self> {
        let mut channels = [0u8; 3];
        let mut chars = digits.chars();
        for channel in channels.iter_mut() {
            let digit = chars.next()?.to_digit(10)?;
            if digit > 5 {
                return None;
            }
            *channel = (digit * 51) as u8;
        }
        if chars.next().is_some() {
            return None;
        }
        Some(Self::new(channels[0], channels[1], channels[2]))
    }

    /// CSS hex notation, lowercase.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS functional notation, e.g. `rgb(0, 255, 0)`.
    pub fn to_css_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Which CSS property a color scope sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Foreground,
    Background,
}

impl Channel {
    pub fn css_property(self) -> &'static str {
        match self {
            Channel::Foreground => "color",
            Channel::Background => "background-color",
        }
    }
}

/// What a code does when it appears in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeAction {
    /// Open a color scope.
    Color { channel: Channel, rgb: Rgb },
    Bold,
    Blink,
    Reverse,
    /// Close the innermost open scope.
    Reset,
    /// Emit a literal character.
    Literal(char),
}

impl CodeAction {
    const fn fg(r: u8, g: u8, b: u8) -> Self {
        CodeAction::Color {
            channel: Channel::Foreground,
            rgb: Rgb::new(r, g, b),
        }
    }
}

/// A single table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub code: String,
    pub action: CodeAction,
}

/// Characters rewritten by [`crate::render::escape_html`].
const HTML_ESCAPED: [char; 5] = ['&', '<', '>', '"', '\''];

/// Ordered, immutable code table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    entries: Vec<CodeEntry>,
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::legacy()
    }
}

impl CodeTable {
    /// The standard brace-code table.
    ///
    /// `{n` is a reset, same as `{x`. It was also listed as an orange
    /// extended color, but that entry never took effect and is left out.
    pub fn legacy() -> Self {
        use CodeAction::{Blink, Bold, Literal, Reset, Reverse};

        let entries = [
            // Basic
            ("{n", Reset),
            ("{r", CodeAction::fg(0xcc, 0x66, 0x66)),
            ("{g", CodeAction::fg(0x66, 0xcc, 0x66)),
            ("{y", CodeAction::fg(0xcc, 0xcc, 0x66)),
            ("{b", CodeAction::fg(0x66, 0x66, 0xcc)),
            ("{m", CodeAction::fg(0xcc, 0x66, 0xcc)),
            ("{c", CodeAction::fg(0x66, 0xcc, 0xcc)),
            ("{w", CodeAction::fg(0xcc, 0xcc, 0xcc)),
            ("{D", CodeAction::fg(0x66, 0x66, 0x66)),
            // Bright
            ("{R", CodeAction::fg(0xff, 0x66, 0x66)),
            ("{G", CodeAction::fg(0x66, 0xff, 0x66)),
            ("{Y", CodeAction::fg(0xff, 0xff, 0x66)),
            ("{B", CodeAction::fg(0x66, 0x66, 0xff)),
            ("{M", CodeAction::fg(0xff, 0x66, 0xff)),
            ("{C", CodeAction::fg(0x66, 0xff, 0xff)),
            ("{W", CodeAction::fg(0xff, 0xff, 0xff)),
            // Extended
            ("{N", CodeAction::fg(0xff, 0xcc, 0x66)),
            ("{p", CodeAction::fg(0xaa, 0x66, 0xff)),
            ("{P", CodeAction::fg(0xcc, 0x99, 0x66)),
            ("{t", CodeAction::fg(0x66, 0xaa, 0xaa)),
            ("{T", CodeAction::fg(0x66, 0xcc, 0xcc)),
            ("{l", CodeAction::fg(0x66, 0xcc, 0x66)),
            ("{L", CodeAction::fg(0xaa, 0xcc, 0xaa)),
            ("{s", CodeAction::fg(0xaa, 0xaa, 0xaa)),
            ("{S", CodeAction::fg(0xaa, 0xcc, 0xcc)),
            // Formatting
            ("{@", Bold),
            ("{!", Blink),
            ("{+", Reverse),
            ("{x", Reset),
            ("{{", Literal('{')),
            ("{-", Literal('~')),
        ];

        Self {
            entries: entries
                .into_iter()
                .map(|(code, action)| CodeEntry {
                    code: code.to_string(),
                    action,
                })
                .collect(),
        }
    }

    /// Build a table from an ordered sequence of definitions.
    ///
    /// A repeated code keeps its first position and takes its last action.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, MarkupError>
    where
        I: IntoIterator<Item = (S, CodeAction)>,
        S: Into<String>,
    {
        let mut table = Self {
            entries: Vec::new(),
        };
        for (code, action) in entries {
            table.define(code.into(), action)?;
        }
        Ok(table)
    }

    /// Return a copy of this table with extra foreground colors defined.
    ///
    /// Values are `#rrggbb`. Codes already in the table are redefined in place.
    /// Codes may not contain characters that HTML escaping rewrites, since
    /// card text is escaped before it is translated.
    pub fn with_overrides<'a, I>(&self, overrides: I) -> Result<Self, MarkupError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = self.clone();
        for (code, value) in overrides {
            if code.contains(HTML_ESCAPED) {
                return Err(MarkupError::UnsafeCode {
                    code: code.to_string(),
                });
            }
            let rgb = Rgb::from_hex(value).ok_or_else(|| MarkupError::InvalidColor {
                code: code.to_string(),
                value: value.to_string(),
            })?;
            table.define(
                code.to_string(),
                CodeAction::Color {
                    channel: Channel::Foreground,
                    rgb,
                },
            )?;
        }
        Ok(table)
    }

    fn define(&mut self, code: String, action: CodeAction) -> Result<(), MarkupError> {
        if code.is_empty() {
            return Err(MarkupError::EmptyCode);
        }
        match self.entries.iter_mut().find(|e| e.code == code) {
            Some(existing) => existing.action = action,
            None => self.entries.push(CodeEntry { code, action }),
        }
        Ok(())
    }

    /// Look up the action for a code.
    pub fn get(&self, code: &str) -> Option<&CodeAction> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| &e.action)
    }

    pub fn entries(&self) -> &[CodeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
