//! Sync command implementation

use colored::Colorize;

use pcloud_core::{CatalogClient, SyncEngine, SyncReport, SyncSettings};
use pcloud_meta::{Config, LayoutMode};

use crate::error::Result;

/// Run the sync command
///
/// `flat` overrides the configured layout for this run. With `json` the
/// report is printed as JSON instead of progress lines.
pub fn run_sync(
    config: &Config,
    catalog: &dyn CatalogClient,
    flat: bool,
    json: bool,
) -> Result<SyncReport> {
    let mut settings = SyncSettings::from_config(config);
    if flat {
        settings = settings.with_layout(LayoutMode::Flat);
    }

    if !json {
        println!(
            "{} Syncing {} into {} ({} layout)...",
            "=>".blue().bold(),
            config.server.hostname.cyan(),
            settings.storage_root.display(),
            settings.layout
        );
    }

    let report = SyncEngine::new(catalog, settings).run()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report);
    }

    for path in &report.downloaded {
        println!("   {} {}", "+".green(), path.display());
    }
    if report.is_up_to_date() {
        println!(
            "{} Already up to date ({} documents).",
            "OK".green().bold(),
            report.skipped.len()
        );
    } else {
        println!(
            "{} Downloaded {} documents ({} bytes), {} already present.",
            "OK".green().bold(),
            report.downloaded.len(),
            report.bytes,
            report.skipped.len()
        );
    }

    Ok(report)
}
