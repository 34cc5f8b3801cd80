//! Page rewriting: frontmatter, link fixes and search box removal.

use crate::config::{Config, TargetConfig};
use crate::document::{write_page, Document};
use crate::error::{Result, RewriteError};
use crate::frontmatter::{parse_frontmatter, Frontmatter, DEFAULT_PARENT};
use crate::links::{LinkProfile, LinkRewriter, RootTarget};
use crate::search_widget::strip_search_widget;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Everything `rewrite` needs to know about one page
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    pub title: String,
    pub permalink: String,
    pub parent: String,
    pub profile: LinkProfile,
    pub root_target: RootTarget,
    pub skip_processed: bool,
    /// Compute the output without touching the file
    pub dry_run: bool,
}

impl RewriteOptions {
    pub fn new(title: impl Into<String>, permalink: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            permalink: permalink.into(),
            parent: DEFAULT_PARENT.to_string(),
            profile: LinkProfile::default(),
            root_target: RootTarget::default(),
            skip_processed: false,
            dry_run: false,
        }
    }

    pub fn with_profile(mut self, profile: LinkProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_root_target(mut self, root_target: RootTarget) -> Self {
        self.root_target = root_target;
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = parent.into();
        self
    }

    fn header(&self) -> Frontmatter {
        Frontmatter::new(&self.title, &self.parent, &self.permalink)
    }
}

/// Settings shared by every file of a directory scan
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub prefix: String,
    pub permalink_template: String,
    pub parent: String,
    pub profile: LinkProfile,
    pub root_target: RootTarget,
    pub skip_processed: bool,
    pub dry_run: bool,
}

impl ScanOptions {
    pub fn new(prefix: impl Into<String>, permalink_template: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            permalink_template: permalink_template.into(),
            parent: DEFAULT_PARENT.to_string(),
            profile: LinkProfile::ApiPage,
            root_target: RootTarget::default(),
            skip_processed: false,
            dry_run: false,
        }
    }

    fn for_file(&self, name: &str) -> RewriteOptions {
        RewriteOptions {
            title: name.to_string(),
            permalink: expand_permalink(&self.permalink_template, name),
            parent: self.parent.clone(),
            profile: self.profile,
            root_target: self.root_target,
            skip_processed: self.skip_processed,
            dry_run: self.dry_run,
        }
    }
}

/// What happened to a single page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// New content was written to disk
    Written,
    /// Dry run; carries the content that would have been written
    Rendered(String),
    /// Frontmatter with the same permalink was already present
    AlreadyProcessed,
}

/// Files touched by a directory scan, in file-name order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub rewritten: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub rendered: Vec<(PathBuf, String)>,
}

impl ScanReport {
    pub fn matched(&self) -> usize {
        self.rewritten.len() + self.skipped.len() + self.rendered.len()
    }

    pub fn push(&mut self, path: PathBuf, outcome: RewriteOutcome) {
        match outcome {
            RewriteOutcome::Written => self.rewritten.push(path),
            RewriteOutcome::Rendered(content) => self.rendered.push((path, content)),
            RewriteOutcome::AlreadyProcessed => self.skipped.push(path),
        }
    }

    fn merge(&mut self, other: ScanReport) {
        self.rewritten.extend(other.rewritten);
        self.skipped.extend(other.skipped);
        self.rendered.extend(other.rendered);
    }
}

/// Build a permalink from a template and a file name
///
/// ```
/// use sphinx_embed_core::expand_permalink;
///
/// assert_eq!(expand_permalink("/api/", "gem5.html"), "/api/gem5.html");
/// assert_eq!(expand_permalink("/api/{name}/", "gem5.html"), "/api/gem5.html/");
/// ```
pub fn expand_permalink(template: &str, name: &str) -> String {
    if template.contains("{name}") {
        template.replace("{name}", name)
    } else {
        format!("{}{}", template, name)
    }
}

/// Transform a document in memory: link rules first, then search box removal
pub fn transform(doc: &mut Document, profile: LinkProfile, root_target: RootTarget) {
    let links = LinkRewriter::new(profile, root_target);
    for line in doc.lines.iter_mut() {
        if let Cow::Owned(rewritten) = links.rewrite_line(line) {
            *line = rewritten;
        }
    }

    strip_search_widget(&mut doc.lines);
}

/// Produce the full output for a page without writing it
pub fn render(content: &str, options: &RewriteOptions) -> String {
    let mut doc = Document::parse(content);
    transform(&mut doc, options.profile, options.root_target);
    doc.render_with_header(&options.header())
}

fn already_processed(content: &str, options: &RewriteOptions) -> bool {
    match parse_frontmatter(content) {
        Ok(Some(fm)) => fm.permalink.as_deref() == Some(options.permalink.as_str()),
        Ok(None) => false,
        Err(e) => {
            tracing::debug!("Ignoring unreadable frontmatter: {}", e);
            false
        }
    }
}

/// Rewrite a page in place
///
/// The whole file is read and transformed before it is reopened for writing,
/// so a failed read never leaves a truncated page behind.
pub fn rewrite(path: &Path, options: &RewriteOptions) -> Result<RewriteOutcome> {
    let content = std::fs::read_to_string(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if options.skip_processed && already_processed(&content, options) {
        tracing::info!("Skipping already processed {:?}", path);
        return Ok(RewriteOutcome::AlreadyProcessed);
    }

    let output = render(&content, options);

    if options.dry_run {
        return Ok(RewriteOutcome::Rendered(output));
    }

    write_page(path, &output)?;
    tracing::info!("Rewrote {:?} (permalink: {})", path, options.permalink);
    Ok(RewriteOutcome::Written)
}

/// Rewrite every regular file directly inside `dir` whose name starts with
/// the scan prefix. Symlinks are followed. Other entries are not opened.
pub fn process_directory(dir: &Path, options: &ScanOptions) -> Result<ScanReport> {
    let mut report = ScanReport::default();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|source| RewriteError::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!("Skipping non UTF-8 file name {:?}", entry.file_name());
            continue;
        };

        if !name.starts_with(&options.prefix) {
            continue;
        }

        let outcome = rewrite(entry.path(), &options.for_file(name))?;
        report.push(entry.path().to_path_buf(), outcome);
    }

    if report.matched() == 0 {
        tracing::warn!(
            "No files starting with {:?} found in {:?}",
            options.prefix,
            dir
        );
    }

    Ok(report)
}

/// Run every target of a configuration in order
pub fn process_config(config: &Config, dry_run: bool) -> Result<ScanReport> {
    let mut report = ScanReport::default();

    for target in &config.targets {
        match target {
            TargetConfig::File {
                path,
                title,
                permalink,
                profile,
            } => {
                let path = config.target_path(path);
                let options = RewriteOptions {
                    title: title.clone(),
                    permalink: permalink.clone(),
                    parent: config.parent.clone(),
                    profile: *profile,
                    root_target: config.root_target,
                    skip_processed: config.skip_processed,
                    dry_run,
                };
                let outcome = rewrite(&path, &options)?;
                report.push(path, outcome);
            }
            TargetConfig::Scan {
                dir,
                prefix,
                permalink,
                profile,
            } => {
                let dir = config.target_path(dir);
                let options = ScanOptions {
                    prefix: prefix.clone(),
                    permalink_template: permalink.clone(),
                    parent: config.parent.clone(),
                    profile: *profile,
                    root_target: config.root_target,
                    skip_processed: config.skip_processed,
                    dry_run,
                };
                report.merge(process_directory(&dir, &options)?);
            }
        }
    }

    Ok(report)
}
