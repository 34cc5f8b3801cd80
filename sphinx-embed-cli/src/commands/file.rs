//! Single page command.

use crate::commands::print_report;
use crate::LinkArgs;
use anyhow::{Context, Result};
use sphinx_embed_core::{rewrite, LinkProfile, RewriteOptions, ScanReport};
use std::path::Path;

/// Rewrite one page in place
pub fn rewrite_file(
    path: &Path,
    title: String,
    permalink: String,
    links: &LinkArgs,
    dry_run: bool,
) -> Result<()> {
    let options = RewriteOptions {
        title,
        permalink,
        parent: links.parent.clone(),
        profile: links.profile.map_or(LinkProfile::ModuleIndex, Into::into),
        root_target: links.root_target.into(),
        skip_processed: links.skip_processed,
        dry_run,
    };

    let outcome = rewrite(path, &options).with_context(|| format!("Failed to rewrite {:?}", path))?;

    let mut report = ScanReport::default();
    report.push(path.to_path_buf(), outcome);
    print_report(&report);
    Ok(())
}
