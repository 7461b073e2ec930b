use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::types::ItemKind;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Manage bridges (external adapters)")]
    Bridge {
        #[command(subcommand)]
        command: BridgeCommand,
    },

    #[command(about = "Inspect job specs and their runs")]
    Job {
        #[command(subcommand)]
        command: JobCommand,
    },

    #[command(about = "Work with saved paginated API responses")]
    Page {
        #[command(subcommand)]
        command: PageCommand,
    },
}

/// Offset and size of a list page
#[derive(Debug, Clone, Default, Args)]
pub struct PageArgs {
    #[arg(long, default_value_t = 0, help = "Number of items to skip")]
    pub offset: usize,

    #[arg(long, help = "Items per page (defaults to pagination.default_size)")]
    pub size: Option<String>,

    #[arg(long, conflicts_with = "offset", help = "1-based page number")]
    pub page: Option<usize>,
}

#[derive(Subcommand)]
pub enum BridgeCommand {
    #[command(about = "List bridges one page at a time")]
    List {
        #[command(flatten)]
        page: PageArgs,
    },

    #[command(about = "Show a bridge, including its access tokens")]
    Show { name: String },

    #[command(about = "Register a new bridge")]
    Add {
        name: String,
        url: String,

        #[arg(long, default_value_t = 0)]
        confirmations: u64,
    },

    #[command(about = "Remove a bridge")]
    Remove { name: String },
}

#[derive(Subcommand)]
pub enum JobCommand {
    #[command(about = "List job specs one page at a time")]
    List {
        #[command(flatten)]
        page: PageArgs,
    },

    #[command(about = "Show a job spec and its runs")]
    Show { id: String },
}

#[derive(Subcommand)]
pub enum PageCommand {
    #[command(about = "Decode a saved list response and render its items and links")]
    Inspect {
        /// File containing the response body
        file: PathBuf,

        #[arg(long, value_enum)]
        kind: ItemKind,

        #[arg(long, help = "Value of the response's Link header")]
        link_header: Option<String>,
    },
}
