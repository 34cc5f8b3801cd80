//! Directory scan command.

use crate::commands::print_report;
use crate::LinkArgs;
use anyhow::{Context, Result};
use sphinx_embed_core::{process_directory, LinkProfile, ScanOptions};
use std::path::Path;

/// Rewrite every page in `dir` whose name starts with `prefix`
pub fn scan_dir(
    dir: &Path,
    prefix: String,
    permalink_template: String,
    links: &LinkArgs,
    dry_run: bool,
) -> Result<()> {
    let options = ScanOptions {
        prefix,
        permalink_template,
        parent: links.parent.clone(),
        profile: links.profile.map_or(LinkProfile::ApiPage, Into::into),
        root_target: links.root_target.into(),
        skip_processed: links.skip_processed,
        dry_run,
    };

    let report = process_directory(dir, &options)
        .with_context(|| format!("Failed to process directory {:?}", dir))?;
    print_report(&report);
    Ok(())
}
