use crate::types::ViewArg;
use clap::{Parser, Subcommand};
use guet_types::Category;

#[derive(Parser)]
#[command(name = "guet")]
#[command(about = "Administer the brigand watch rosters", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding roster.json and config.toml
    /// (defaults to GUET_PATH, then the platform data dir)
    #[arg(long, global = true)]
    pub data: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one roster view (noire, surveillance, hors, archives,
    /// couronne, png)
    List {
        view: ViewArg,

        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Register a brigand
    Add {
        name: String,

        /// Primary list: noire, surveillance, hors or archives
        #[arg(long)]
        list: Category,

        #[arg(long, default_value = "")]
        facts: String,

        /// Wanted by the crown
        #[arg(long)]
        crown: bool,

        /// Persona non grata
        #[arg(long)]
        png: bool,

        /// Organisation (id, abbreviation or full name)
        #[arg(long)]
        organisation: Option<String>,
    },

    /// Replace a brigand's record wholesale
    Edit {
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        list: Category,

        #[arg(long, default_value = "")]
        facts: String,

        #[arg(long)]
        crown: bool,

        #[arg(long)]
        png: bool,

        #[arg(long)]
        organisation: Option<String>,
    },

    /// Strike a brigand from the roster by id
    Rm { id: String },

    /// Strike several brigands by exact name
    Purge {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Find a brigand by name (exact match first, then contains)
    Search { query: String },

    /// Print the BBCode report lines for one view
    Report { view: ViewArg },

    /// Organisation administration
    Org {
        #[command(subcommand)]
        command: OrgCommand,
    },
}

#[derive(Subcommand)]
pub enum OrgCommand {
    /// List organisations with their member counts
    List,

    /// Register an organisation
    Add {
        full_name: String,

        #[arg(long)]
        short: Option<String>,
    },

    /// Replace an organisation's names
    Rename {
        org: String,

        #[arg(long)]
        full_name: String,

        #[arg(long)]
        short: Option<String>,
    },

    /// Delete an organisation (refused while members remain)
    Rm { org: String },

    /// Print an organisation's member roster
    Members {
        org: String,

        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}
