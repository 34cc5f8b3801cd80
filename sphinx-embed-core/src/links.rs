//! Hyperlink rewriting for relocated Sphinx pages.
//!
//! Sphinx emits links relative to its own output tree. Once the pages are
//! served from flattened permalinks those links break, so a fixed set of
//! anchors is rewritten. Matching is plain substring search; at most one rule
//! fires per line.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

const LIST_LINK: &str = r#"<li><a href="#;
const GEM5_TOCTREE_FROM: &str =
    r#"<li class="toctree-l1"><a class="reference internal" href="../gem5.html">gem5 package</a></li>"#;
const GEM5_TOCTREE_TO: &str =
    r#"<li class="toctree-l1"><a class="reference internal" href="./gem5.html">gem5 package</a></li>"#;

/// Which set of link rules applies to a page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkProfile {
    /// `_modules/index.html`: links point one directory up
    #[default]
    ModuleIndex,
    /// Flat API pages sitting next to `index.html`
    ApiPage,
}

/// Href used for rewritten overview and logo links
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RootTarget {
    /// `.`, for pages served as a directory index
    #[default]
    Root,
    /// `./index.html`, for flat file deployments
    IndexFile,
}

impl RootTarget {
    pub fn href(&self) -> &'static str {
        match self {
            RootTarget::Root => ".",
            RootTarget::IndexFile => "./index.html",
        }
    }
}

impl LinkProfile {
    /// Href the generator used for the documentation root on this kind of page
    fn source_index_href(&self) -> &'static str {
        match self {
            LinkProfile::ModuleIndex => "../index.html",
            LinkProfile::ApiPage => "index.html",
        }
    }
}

fn overview_anchor(href: &str) -> String {
    format!(r#"<li><a href="{}">Documentation overview</a><ul>"#, href)
}

fn logo_anchor(href: &str) -> String {
    format!(r#"<h1 class="logo"><a href="{}">gem5</a></h1>"#, href)
}

/// Rewrites single lines according to a profile and root target
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    profile: LinkProfile,
    overview_from: String,
    overview_to: String,
    logo_from: String,
    logo_to: String,
}

impl LinkRewriter {
    pub fn new(profile: LinkProfile, root: RootTarget) -> Self {
        let source = profile.source_index_href();
        Self {
            profile,
            overview_from: overview_anchor(source),
            overview_to: overview_anchor(root.href()),
            logo_from: logo_anchor(source),
            logo_to: logo_anchor(root.href()),
        }
    }

    /// Apply the first matching rule, borrowing the line when none matches
    pub fn rewrite_line<'a>(&self, line: &'a str) -> Cow<'a, str> {
        if line.contains(&self.overview_from) {
            tracing::debug!("Documentation overview link switched to {}", self.overview_to);
            return Cow::Owned(line.replace(&self.overview_from, &self.overview_to));
        }

        if self.profile == LinkProfile::ModuleIndex {
            if line.contains(LIST_LINK) {
                return Cow::Owned(flatten_link_paths(line));
            }

            if line.contains(GEM5_TOCTREE_FROM) {
                tracing::debug!("../gem5.html switched to ./gem5.html");
                return Cow::Owned(line.replace(GEM5_TOCTREE_FROM, GEM5_TOCTREE_TO));
            }
        }

        if line.contains(&self.logo_from) {
            tracing::debug!("Logo link switched to {}", self.logo_to);
            return Cow::Owned(line.replace(&self.logo_from, &self.logo_to));
        }

        Cow::Borrowed(line)
    }
}

/// Turn path separators into dots so `gem5/components.html` becomes the
/// flattened `gem5.components.html`, then repair the closing tags the
/// substitution broke.
pub fn flatten_link_paths(line: &str) -> String {
    line.replace('/', ".")
        .replace("<.a>", "</a>")
        .replace("<.li>", "</li>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_link_root_target() {
        let rw = LinkRewriter::new(LinkProfile::ModuleIndex, RootTarget::Root);
        let out = rw.rewrite_line(r#"<li><a href="../index.html">Documentation overview</a><ul>"#);
        assert_eq!(out, r#"<li><a href=".">Documentation overview</a><ul>"#);
    }

    #[test]
    fn test_overview_link_index_file_target() {
        let rw = LinkRewriter::new(LinkProfile::ModuleIndex, RootTarget::IndexFile);
        let out = rw.rewrite_line(r#"  <li><a href="../index.html">Documentation overview</a><ul>"#);
        assert_eq!(
            out,
            r#"  <li><a href="./index.html">Documentation overview</a><ul>"#
        );
    }

    #[test]
    fn test_overview_link_on_api_page() {
        let rw = LinkRewriter::new(LinkProfile::ApiPage, RootTarget::Root);
        let out = rw.rewrite_line(r#"<li><a href="index.html">Documentation overview</a><ul>"#);
        assert_eq!(out, r#"<li><a href=".">Documentation overview</a><ul>"#);
    }

    #[test]
    fn test_generic_link_is_flattened() {
        let rw = LinkRewriter::new(LinkProfile::ModuleIndex, RootTarget::Root);
        let out = rw.rewrite_line(r#"<li><a href="a/b/c.html">label</a></li>"#);
        assert_eq!(out, r#"<li><a href="a.b.c.html">label</a></li>"#);
    }

    #[test]
    fn test_generic_link_untouched_on_api_page() {
        let rw = LinkRewriter::new(LinkProfile::ApiPage, RootTarget::Root);
        let line = r#"<li><a href="a/b/c.html">label</a></li>"#;
        assert!(matches!(rw.rewrite_line(line), Cow::Borrowed(_)));
    }

    #[test]
    fn test_gem5_toctree_entry() {
        let rw = LinkRewriter::new(LinkProfile::ModuleIndex, RootTarget::Root);
        let out = rw.rewrite_line(GEM5_TOCTREE_FROM);
        assert_eq!(out, GEM5_TOCTREE_TO);
    }

    #[test]
    fn test_logo_link() {
        let rw = LinkRewriter::new(LinkProfile::ModuleIndex, RootTarget::Root);
        let out = rw.rewrite_line(r#"<h1 class="logo"><a href="../index.html">gem5</a></h1>"#);
        assert_eq!(out, r#"<h1 class="logo"><a href=".">gem5</a></h1>"#);

        let rw = LinkRewriter::new(LinkProfile::ApiPage, RootTarget::IndexFile);
        let out = rw.rewrite_line(r#"<h1 class="logo"><a href="index.html">gem5</a></h1>"#);
        assert_eq!(out, r#"<h1 class="logo"><a href="./index.html">gem5</a></h1>"#);
    }

    #[test]
    fn test_unmatched_line_is_borrowed() {
        let rw = LinkRewriter::new(LinkProfile::ModuleIndex, RootTarget::Root);
        let line = r#"<p>See <a href="../other.html">other</a></p>"#;
        let out = rw.rewrite_line(line);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, line);
    }
}
