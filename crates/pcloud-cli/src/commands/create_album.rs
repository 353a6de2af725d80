//! Create-album command implementation

use colored::Colorize;

use pcloud_core::{AlbumRef, CatalogClient, ConfirmationGate, Prompter, Uploader};

use crate::context::Context;
use crate::error::Result;

/// Run the create-album command, printing the new identifier
pub fn run_create_album(
    context: &Context,
    catalog: &dyn CatalogClient,
    prompter: &dyn Prompter,
    name: &str,
) -> Result<AlbumRef> {
    let gate = ConfirmationGate::new(context.policy, prompter);
    let album = Uploader::new(catalog, gate, context.config.credentials()).create_album(name)?;

    println!(
        "{} Created album {} ({}).",
        "OK".green().bold(),
        name.bold(),
        album.id.cyan()
    );
    Ok(album)
}
