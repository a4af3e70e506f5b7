//! ANSI color helpers for CLI output
//!
//! Colors are applied only when stdout is a terminal and `NO_COLOR` is unset.
//! `FORCE_COLOR` enables them regardless.

use crate::present::RarityTier;

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// ANSI color codes for CLI output
pub mod ansi {
    /// Gray color (ANSI 37) - used for regular text
    pub const GRAY: &str = "\x1b[37m";
    /// Green color (ANSI 32) - used for accent/headers
    pub const GREEN: &str = "\x1b[32m";
    /// Dark gray (ANSI 90) - used for secondary text
    pub const DARK_GRAY: &str = "\x1b[90m";
    /// Light blue (ANSI 94) - rare items
    pub const LIGHT_BLUE: &str = "\x1b[94m";
    /// Light magenta (ANSI 95) - epic items
    pub const LIGHT_MAGENTA: &str = "\x1b[95m";
    /// Light yellow (ANSI 93) - legendary items
    pub const LIGHT_YELLOW: &str = "\x1b[93m";
}

/// Whether CLI output should be colored.
pub fn colors_enabled() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    atty::is(atty::Stream::Stdout)
}

/// CLI text theme.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            enabled: colors_enabled(),
        }
    }
}

impl Theme {
    /// Theme that never emits escape codes.
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled && !color.is_empty() {
            format!("{}{}{}", color, text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }

    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        self.paint(ansi::GREEN, text)
    }

    /// Format text with the primary color.
    pub fn primary_text(&self, text: &str) -> String {
        self.paint(ansi::GRAY, text)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(ansi::DARK_GRAY, text)
    }

    /// Format text with the color of a rarity tier.
    pub fn rarity_text(&self, tier: RarityTier, text: &str) -> String {
        let color = match tier {
            RarityTier::None => ansi::GRAY,
            RarityTier::Rare => ansi::LIGHT_BLUE,
            RarityTier::Epic => ansi::LIGHT_MAGENTA,
            RarityTier::Legendary => ansi::LIGHT_YELLOW,
        };
        self.paint(color, text)
    }
}
