//! Frontmatter header rendering and detection.
//!
//! The header written in front of every rewritten page is line-exact, so it is
//! formatted by hand rather than through `serde_yaml`. Reading an existing
//! header back goes through YAML so hand-edited pages are still recognised.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Navigation parent used when none is configured
pub const DEFAULT_PARENT: &str = "sphinx-docs";

#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("Invalid YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Metadata block consumed by the static-site generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    pub title: String,

    #[serde(default)]
    pub parent: Option<String>,

    #[serde(default)]
    pub permalink: Option<String>,
}

impl Frontmatter {
    pub fn new(
        title: impl Into<String>,
        parent: impl Into<String>,
        permalink: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            parent: Some(parent.into()),
            permalink: Some(permalink.into()),
        }
    }
}

/// Renders the five header lines, each terminated by `\n`.
///
/// ```
/// use sphinx_embed_core::Frontmatter;
///
/// let fm = Frontmatter::new("gem5.html", "sphinx-docs", "/api/gem5.html");
/// assert_eq!(
///     fm.to_string(),
///     "---\ntitle: \"gem5.html\"\nparent: sphinx-docs\npermalink: /api/gem5.html\n---\n"
/// );
/// ```
impl fmt::Display for Frontmatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---")?;
        writeln!(f, "title: \"{}\"", escape_double_quoted(&self.title))?;
        writeln!(
            f,
            "parent: {}",
            self.parent.as_deref().unwrap_or(DEFAULT_PARENT)
        )?;
        writeln!(f, "permalink: {}", self.permalink.as_deref().unwrap_or(""))?;
        writeln!(f, "---")
    }
}

/// Escape a value for a YAML double-quoted scalar
fn escape_double_quoted(value: &str) -> Cow<'_, str> {
    if !value.contains(['\\', '"']) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(value.replace('\\', "\\\\").replace('"', "\\\""))
}

static FRONTMATTER_REGEX: OnceLock<Regex> = OnceLock::new();

fn frontmatter_regex() -> &'static Regex {
    FRONTMATTER_REGEX
        .get_or_init(|| Regex::new(r"(?s)^---\s*\n(.*?)\n---\s*(?:\n|$)").expect("valid regex"))
}

/// Parse a leading frontmatter block from page content
///
/// Returns `Ok(None)` when the content does not start with a `---` fence.
pub fn parse_frontmatter(content: &str) -> Result<Option<Frontmatter>, FrontmatterError> {
    let Some(captures) = frontmatter_regex().captures(content) else {
        return Ok(None);
    };
    let yaml = captures.get(1).map_or("", |m| m.as_str());

    Ok(Some(serde_yaml::from_str(yaml)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_five_lines() {
        let fm = Frontmatter::new("Sphinx Documentation", "sphinx-docs", "docs/api/");
        let rendered = fm.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "---");
        assert_eq!(lines[1], "title: \"Sphinx Documentation\"");
        assert_eq!(lines[2], "parent: sphinx-docs");
        assert_eq!(lines[3], "permalink: docs/api/");
        assert_eq!(lines[4], "---");
    }

    #[test]
    fn test_missing_parent_uses_default() {
        let fm = Frontmatter {
            title: "x".into(),
            parent: None,
            permalink: Some("/x".into()),
        };
        assert!(fm.to_string().contains("parent: sphinx-docs\n"));
    }

    #[test]
    fn test_parse_rendered_header() {
        let fm = Frontmatter::new(
            "gem5.components.html",
            "sphinx-docs",
            "/api/gem5.components.html",
        );
        let content = format!("{}<html></html>\n", fm);
        let parsed = parse_frontmatter(&content).unwrap();
        assert_eq!(parsed, Some(fm));
    }

    #[test]
    fn test_parse_no_frontmatter() {
        let content = "<!DOCTYPE html>\n<html>\n";
        assert_eq!(parse_frontmatter(content).unwrap(), None);
    }

    #[test]
    fn test_missing_title() {
        let content = "---\npermalink: /x\n---\n<html>\n";
        match parse_frontmatter(content) {
            Err(FrontmatterError::YamlError(e)) => assert!(e.to_string().contains("title")),
            other => panic!("Expected YamlError, got {:?}", other),
        }
    }

    #[test]
    fn test_title_with_quotes_and_backslashes() {
        let fm = Frontmatter::new(r#"The "gem5" C:\docs page"#, "sphinx-docs", "/api/x.html");
        let rendered = fm.to_string();
        assert!(rendered.contains(r#"title: "The \"gem5\" C:\\docs page""#));

        let parsed = parse_frontmatter(&format!("{}<html>\n", rendered)).unwrap();
        assert_eq!(parsed, Some(fm));
    }

    #[test]
    fn test_invalid_yaml() {
        let content = "---\ntitle: [unclosed\n---\n<html>\n";
        assert!(parse_frontmatter(content).is_err());
    }
}
