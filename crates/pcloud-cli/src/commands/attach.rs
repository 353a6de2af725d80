//! Attach command implementation

use colored::Colorize;

use pcloud_core::{AttachmentMatcher, CatalogClient, ConfirmationGate, FileRef, Prompter, Uploader};

use crate::context::Context;
use crate::error::Result;

/// Run the attach command
///
/// Prints every rejected file; the accepted mapping is part of the
/// confirmation prompt and nothing is sent until the operator agrees.
pub fn run_attach(
    context: &Context,
    catalog: &dyn CatalogClient,
    prompter: &dyn Prompter,
    partition_id: &str,
    files: &[String],
) -> Result<usize> {
    let matcher = AttachmentMatcher::new(&context.config.attachments.aliases)?;
    let files: Vec<FileRef> = files.iter().map(|f| FileRef::parse(f)).collect();
    let plan = matcher.plan(partition_id, &files);

    for rejection in &plan.rejected {
        println!(
            "   {} {}: {}",
            "!".red(),
            rejection.path.display(),
            rejection.reason
        );
    }

    let gate = ConfirmationGate::new(context.policy, prompter);
    let uploader = Uploader::new(catalog, gate, context.config.credentials());
    let sent = uploader.attach(&plan)?;

    println!("{} Uploaded {} attachment(s).", "OK".green().bold(), sent);
    Ok(sent)
}
