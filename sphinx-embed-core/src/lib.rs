//! # sphinx-embed-core
//!
//! Core library for embedding generated Sphinx HTML into a static website.
//!
//! Pages are treated as plain lines of text: a frontmatter block is put in
//! front, a fixed set of relative links is rewritten for the flattened
//! permalink layout, and the search box is blanked out.

pub mod config;
pub mod document;
pub mod error;
pub mod frontmatter;
pub mod links;
pub mod rewriter;
pub mod search_widget;

pub use config::{Config, ConfigError, TargetConfig};
pub use document::Document;
pub use error::RewriteError;
pub use frontmatter::{parse_frontmatter, Frontmatter, FrontmatterError};
pub use links::{LinkProfile, LinkRewriter, RootTarget};
pub use rewriter::{
    expand_permalink, process_config, process_directory, render, rewrite, RewriteOptions,
    RewriteOutcome, ScanOptions, ScanReport,
};
pub use search_widget::{strip_search_widget, SearchWidgetState};
