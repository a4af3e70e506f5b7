//! CLI definitions for itemview
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so integration tests and completions can build the command tree.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "itemview")]
#[command(about = "[ Item Viewer ] - render game item catalogs with legacy color codes")]
#[command(
    long_about = "Item Viewer - render a JSON catalog of game items as styled HTML cards.

Item names and descriptions may carry legacy color codes ({R, {@, {x, ...)
and packed RGB escapes (\\t[F050]). These are translated into nested HTML.

QUICK START:
    itemview render aether.json -o items.html   Render every wearable item
    itemview list aether.json --search sword    Search from the terminal
    itemview types aether.json                  Show item types
    itemview markup '{Rred{x text'              Translate a single string
    itemview convert aether.are -o aether.json  Convert an area file"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Use this config file instead of ~/.config/itemview/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Search and type filter shared by `render` and `list`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive search in name and short description
    #[arg(long, short, default_value = "")]
    pub search: String,

    /// Only show items of this type (e.g. weapon, armor)
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub item_type: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the catalog as an HTML page
    #[command(long_about = "Render the catalog as a standalone HTML page of item cards.

Items with fewer wear flags than [catalog].min_wear_flags (default 2) are
skipped. If the catalog cannot be read, an error page is written instead
and the command exits with a non-zero status.

EXAMPLES:
    itemview render aether.json                   Write HTML to stdout
    itemview render aether.json -o items.html     Write HTML to a file
    itemview render aether.json --type weapon     Only weapons
    itemview render --search ring                 Use [catalog].path from config")]
    Render {
        /// Catalog JSON file (defaults to [catalog].path)
        #[arg(help = "Catalog JSON file (defaults to [catalog].path)")]
        catalog: Option<PathBuf>,

        #[command(flatten)]
        filter: FilterArgs,

        /// Write HTML to this file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page title (overrides [render].title)
        #[arg(long)]
        title: Option<String>,
    },

    /// List catalog items in the terminal
    #[command(
        visible_alias = "ls",
        long_about = "List catalog items as a text table.

Shows vnum, level, rarity, type and the name with color codes removed.

EXAMPLES:
    itemview list aether.json
    itemview ls aether.json --type armor --search helm"
    )]
    List {
        /// Catalog JSON file (defaults to [catalog].path)
        #[arg(help = "Catalog JSON file (defaults to [catalog].path)")]
        catalog: Option<PathBuf>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show item types and their counts
    Types {
        /// Catalog JSON file (defaults to [catalog].path)
        #[arg(help = "Catalog JSON file (defaults to [catalog].path)")]
        catalog: Option<PathBuf>,
    },

    /// Translate color codes in a string
    #[command(long_about = "Translate legacy color codes into HTML.

Reads the text from the argument, or from stdin when no argument is given.

EXAMPLES:
    itemview markup '{Rred{x plain'
    echo '{@bold' | itemview markup
    itemview markup --plain '{Gstripped{x'")]
    Markup {
        /// Text to translate (reads stdin when omitted)
        text: Option<String>,

        /// Remove codes instead of translating them
        #[arg(long)]
        plain: bool,
    },

    /// Convert a game area file into a catalog JSON document
    #[command(long_about = "Convert the #OBJECTS section of a game area file into catalog JSON.

Flag letters become flag names, numbered affect locations become location
names, and item values are named by item type. Other sections are skipped.

EXAMPLES:
    itemview convert aether.are                   Write JSON to stdout
    itemview convert aether.are -o aether.json    Write JSON to a file")]
    Convert {
        /// Area file to convert
        area_file: PathBuf,

        /// Write JSON to this file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file if none exists
    Init,
}
