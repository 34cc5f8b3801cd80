//! CLI command implementations.

pub mod file;
pub mod init;
pub mod run;
pub mod scan;

pub use file::rewrite_file;
pub use init::init_config;
pub use run::run_targets;
pub use scan::scan_dir;

use sphinx_embed_core::ScanReport;

/// Print dry-run output and a one-line summary
pub(crate) fn print_report(report: &ScanReport) {
    for (path, content) in &report.rendered {
        println!("==> {} <==", path.display());
        print!("{}", content);
    }

    if !report.rewritten.is_empty() {
        println!("✓ Rewrote {} page(s)", report.rewritten.len());
    }
    if !report.skipped.is_empty() {
        println!(
            "✓ Skipped {} already processed page(s)",
            report.skipped.len()
        );
    }
}
