use super::args::{BridgeCommand, Cli, Commands, JobCommand, PageCommand};
use super::handlers::{self, HandlerContext};
use crate::config::{self, Config};
use anyhow::Result;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref())?;
    let config = Config::load_from(&data_dir.join(Config::FILE_NAME))?;
    debug!(data_dir = %data_dir.display(), ?config, "resolved configuration");

    let ctx = HandlerContext::new(data_dir, config, cli.format.into());

    match cli.command {
        Commands::Bridge { command } => match command {
            BridgeCommand::List { page } => handlers::bridge::handle_list(&ctx, &page),
            BridgeCommand::Show { name } => handlers::bridge::handle_show(&ctx, &name),
            BridgeCommand::Add {
                name,
                url,
                confirmations,
            } => handlers::bridge::handle_add(&ctx, &name, &url, confirmations),
            BridgeCommand::Remove { name } => handlers::bridge::handle_remove(&ctx, &name),
        },

        Commands::Job { command } => match command {
            JobCommand::List { page } => handlers::job::handle_list(&ctx, &page),
            JobCommand::Show { id } => handlers::job::handle_show(&ctx, &id),
        },

        Commands::Page { command } => match command {
            PageCommand::Inspect {
                file,
                kind,
                link_header,
            } => handlers::page::handle_inspect(&ctx, &file, kind, link_header.as_deref()),
        },
    }
}
