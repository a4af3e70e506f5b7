//! Markup command handler

use anyhow::{Context, Result};
use std::io::{self, Read};

use itemview::Config;

/// Translate (or strip) color codes in one string.
///
/// Reads stdin when no text is given. A single trailing newline is dropped so
/// `echo` input round-trips cleanly.
#[cfg(not(tarpaulin_include))]
pub fn handle(text: Option<&str>, plain: bool, config: &Config) -> Result<()> {
    let translator = config.translator()?;

    let input = match text {
        Some(text) => text.to_string(),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            trim_newline(buf)
        }
    };

    let output = if plain {
        translator.strip(&input)
    } else {
        translator.translate(&input)
    };
    println!("{}", output);
    Ok(())
}

fn trim_newline(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}
