//! PartitionCloud mirror CLI
//!
//! Mirrors a PartitionCloud server to a local directory and publishes
//! scores, albums and attachments to it.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;
mod logging;

use clap::Parser;
use colored::Colorize;

use pcloud_client::PartitionCloudClient;
use pcloud_core::PartitionUpload;

use cli::{Cli, Commands};
use context::Context;
use error::Result;
use interactive::TerminalPrompter;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: logging disabled: {}", "warning".yellow().bold(), e);
    }

    let context = Context::load(&cli)?;
    tracing::debug!(config = %context.config_path.display(), "configuration loaded");

    let client = PartitionCloudClient::new(context.config.server.hostname.clone())?;
    execute_command(cli.command, &context, &client)
}

fn execute_command(cmd: Commands, context: &Context, client: &PartitionCloudClient) -> Result<()> {
    let prompter = TerminalPrompter;

    match cmd {
        Commands::Sync { flat, json } => {
            commands::run_sync(&context.config, client, flat, json)?;
        }
        Commands::Attach {
            partition_id,
            files,
        } => {
            commands::run_attach(context, client, &prompter, &partition_id, &files)?;
        }
        Commands::Upload {
            album_id,
            file,
            name,
            author,
            body,
        } => {
            let upload = PartitionUpload {
                file,
                name,
                author,
                body,
            };
            commands::run_upload(context, client, &prompter, &album_id, &upload)?;
        }
        Commands::CreateAlbum { name } => {
            commands::run_create_album(context, client, &prompter, &name)?;
        }
        Commands::Attachments { partition_id } => {
            commands::run_attachments(context, client, &partition_id)?;
        }
    }
    Ok(())
}
