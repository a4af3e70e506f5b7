//! Item Viewer - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use itemview::cli::{Cli, Commands, ConfigCommands};
use itemview::{logging, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = cli.config.as_deref();
    let load_config = || Config::resolve(config_path);

    match cli.command {
        Commands::Render {
            catalog,
            filter,
            output,
            title,
        } => commands::render::handle(
            catalog.as_deref(),
            &filter,
            output.as_deref(),
            title.as_deref(),
            &load_config()?,
        ),
        Commands::List { catalog, filter } => {
            commands::list::handle(catalog.as_deref(), &filter, &load_config()?)
        }
        Commands::Types { catalog } => commands::types::handle(catalog.as_deref(), &load_config()?),
        Commands::Markup { text, plain } => {
            commands::markup::handle(text.as_deref(), plain, &load_config()?)
        }
        Commands::Convert { area_file, output } => {
            commands::convert::handle(&area_file, output.as_deref())
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&load_config()?),
            ConfigCommands::Path => commands::config::handle_path(config_path),
            ConfigCommands::Init => commands::config::handle_init(config_path),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
