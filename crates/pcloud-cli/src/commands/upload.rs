//! Upload command implementation

use colored::Colorize;

use pcloud_core::{CatalogClient, ConfirmationGate, PartitionUpload, Prompter, Uploader};

use crate::context::Context;
use crate::error::Result;

/// Run the upload command
pub fn run_upload(
    context: &Context,
    catalog: &dyn CatalogClient,
    prompter: &dyn Prompter,
    album_id: &str,
    upload: &PartitionUpload,
) -> Result<()> {
    let gate = ConfirmationGate::new(context.policy, prompter);
    Uploader::new(catalog, gate, context.config.credentials()).upload_partition(album_id, upload)?;

    println!(
        "{} Uploaded {} to album {}.",
        "OK".green().bold(),
        upload.name.bold(),
        album_id.cyan()
    );
    Ok(())
}
