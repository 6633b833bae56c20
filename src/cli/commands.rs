use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "diary")]
#[command(about = "Password-gated personal journal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Set a password and unlock the diary")]
    Init,

    #[command(about = "Unlock the diary")]
    Unlock,

    #[command(about = "Lock the diary")]
    Lock,

    #[command(about = "Show lock state and entry count")]
    Status,

    #[command(about = "Add a new entry")]
    Add {
        #[arg(help = "Entry content (prompted when omitted)")]
        content: Option<String>,

        #[arg(short, long, help = "Entry date (YYYY-MM-DD, defaults to today)")]
        date: Option<String>,

        #[arg(short, long, help = "Entry title")]
        title: Option<String>,
    },

    #[command(about = "List all entries")]
    List,

    #[command(about = "Show the first entry for a date")]
    Show {
        #[arg(help = "Date (YYYY-MM-DD)")]
        date: String,
    },

    #[command(about = "Edit an entry")]
    Edit {
        #[arg(help = "Entry id")]
        id: String,

        #[arg(short, long, help = "New title")]
        title: Option<String>,

        #[arg(short, long, help = "New content (prompted when omitted)")]
        content: Option<String>,
    },

    #[command(about = "Remove an entry")]
    Rm {
        #[arg(help = "Entry id")]
        id: String,
    },

    #[command(about = "Export a JSON backup")]
    Export {
        #[arg(help = "Backup file path")]
        file: String,
    },

    #[command(about = "Import a JSON backup (replaces all entries)")]
    Import {
        #[arg(help = "Backup file path")]
        file: String,
    },

    #[command(about = "Export a paginated text document")]
    Doc {
        #[arg(short, long, help = "Output file (defaults to secret-diary-<date>.txt)")]
        file: Option<String>,
    },
}
