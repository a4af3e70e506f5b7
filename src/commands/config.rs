//! Config subcommands handler

use anyhow::Result;
use std::path::{Path, PathBuf};

use itemview::theme::Theme;
use itemview::Config;

/// The config file in effect: `--config` when given, otherwise the default.
pub fn effective_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    print!("{}", toml_str);
    Ok(())
}

/// Print the config file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(explicit: Option<&Path>) -> Result<()> {
    println!("{}", effective_path(explicit)?.display());
    Ok(())
}

/// Write a default config file. An existing file is left untouched.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(explicit: Option<&Path>) -> Result<()> {
    let path = effective_path(explicit)?;
    let theme = Theme::default();

    if path.exists() {
        println!(
            "{}",
            theme.primary_text(&format!("Config already exists: {}", path.display()))
        );
        return Ok(());
    }

    Config::default().save_to(&path)?;
    println!(
        "{}",
        theme.accent_text(&format!("Created {}", path.display()))
    );
    Ok(())
}
