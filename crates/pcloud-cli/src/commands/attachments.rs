//! Attachments command implementation

use colored::Colorize;

use pcloud_core::{AttachmentRef, CatalogClient, list_attachments};

use crate::context::Context;
use crate::error::Result;

/// Run the attachments command
pub fn run_attachments(
    context: &Context,
    catalog: &dyn CatalogClient,
    partition_id: &str,
) -> Result<Vec<AttachmentRef>> {
    let credentials = context.config.credentials();
    let attachments = list_attachments(catalog, credentials.as_ref(), partition_id)?;

    if attachments.is_empty() {
        println!("No attachments on partition {}.", partition_id.cyan());
        return Ok(attachments);
    }

    println!(
        "{} Attachments of partition {}:",
        "=>".blue().bold(),
        partition_id.cyan()
    );
    for attachment in &attachments {
        println!(
            "   {} {} ({}.{})",
            "-".dimmed(),
            attachment.title.bold(),
            attachment.id,
            attachment.extension
        );
    }
    Ok(attachments)
}
