mod cli;
mod config;
mod context;
mod domain;
mod handlers;
mod infrastructure;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::get_config_dir;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_dir = get_config_dir()?;

    match cli.command {
        Commands::Init => handlers::session::handle_init(&config_dir),
        Commands::Unlock => handlers::session::handle_unlock(&config_dir),
        Commands::Lock => handlers::session::handle_lock(&config_dir),
        Commands::Status => handlers::session::handle_status(&config_dir),
        Commands::Add {
            content,
            date,
            title,
        } => handlers::entry::handle_add(content, date, title, &config_dir),
        Commands::List => handlers::entry::handle_list(&config_dir),
        Commands::Show { date } => handlers::entry::handle_show(&date, &config_dir),
        Commands::Edit { id, title, content } => {
            handlers::entry::handle_edit(&id, title, content, &config_dir)
        }
        Commands::Rm { id } => handlers::entry::handle_rm(&id, &config_dir),
        Commands::Export { file } => handlers::transfer::handle_export(&file, &config_dir),
        Commands::Import { file } => handlers::transfer::handle_import(&file, &config_dir),
        Commands::Doc { file } => handlers::transfer::handle_doc(file, &config_dir),
    }
}
